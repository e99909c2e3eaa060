use contracts::usecases::u501_customer_response::{
    CustomerResponseAction, CustomerResponseRequest, CustomerResponseResult,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, ApiError};
use crate::shared::config::Config;
use crate::shared::cookies::get_cookie;

const GENERIC_REJECTION: &str = "Could not process your response";
const TRANSPORT_FAILURE: &str = "Error processing your response. Please try again.";

/// Send the customer's decision on a broker offer
pub async fn submit_customer_response(
    config: &Config,
    request: &CustomerResponseRequest,
) -> Result<(), ApiError> {
    let url = api_url(&config.api.base, &config.api.customer_response_path);

    let mut builder = Request::post(&url).header("Accept", "application/json");
    match get_cookie(&config.csrf.cookie_name) {
        Some(token) => builder = builder.header(&config.csrf.header_name, &token),
        None => log::warn!(
            "Cookie '{}' not found, sending response without CSRF token",
            config.csrf.cookie_name
        ),
    }

    let response = builder
        .json(request)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    parse_reply(status, &body)?
        .into_result()
        .map_err(ApiError::Rejected)
}

/// A non-2xx status still counts as an answer when the body is a valid reply
pub fn parse_reply(status: u16, body: &str) -> Result<CustomerResponseResult, ApiError> {
    match serde_json::from_str::<CustomerResponseResult>(body) {
        Ok(result) => Ok(result),
        Err(_) if !(200..300).contains(&status) => Err(ApiError::Http(status)),
        Err(e) => Err(ApiError::Parse(e.to_string())),
    }
}

/// Text of the blocking alert shown when a submission fails
pub fn failure_alert(error: &ApiError) -> String {
    match error {
        ApiError::Rejected(reason) => format!(
            "Error: {}",
            reason.as_deref().unwrap_or(GENERIC_REJECTION)
        ),
        _ => TRANSPORT_FAILURE.to_string(),
    }
}

/// Banner shown after the server accepted the response
pub fn success_message(action: CustomerResponseAction) -> String {
    format!("Successfully {} broker offer!", action.past_tense())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reply() {
        assert_eq!(
            parse_reply(200, r#"{"success":true}"#),
            Ok(CustomerResponseResult {
                success: true,
                error: None
            })
        );
        // error replies with a JSON body are still answers
        assert_eq!(
            parse_reply(400, r#"{"success":false,"error":"Already responded"}"#),
            Ok(CustomerResponseResult {
                success: false,
                error: Some("Already responded".to_string())
            })
        );
        assert_eq!(parse_reply(500, "<html>oops</html>"), Err(ApiError::Http(500)));
        assert!(matches!(parse_reply(200, "not json"), Err(ApiError::Parse(_))));
    }

    #[test]
    fn test_failure_alert() {
        let rejected = parse_reply(200, r#"{"success":false,"error":"Already responded"}"#)
            .unwrap()
            .into_result()
            .map_err(ApiError::Rejected)
            .unwrap_err();
        assert_eq!(failure_alert(&rejected), "Error: Already responded");
        assert_eq!(
            failure_alert(&ApiError::Rejected(None)),
            "Error: Could not process your response"
        );
        assert_eq!(
            failure_alert(&ApiError::Network("offline".to_string())),
            "Error processing your response. Please try again."
        );
        assert_eq!(failure_alert(&ApiError::Http(502)), TRANSPORT_FAILURE);
    }

    #[test]
    fn test_success_message() {
        assert_eq!(
            success_message(CustomerResponseAction::Accept),
            "Successfully accepted broker offer!"
        );
        assert_eq!(
            success_message(CustomerResponseAction::Reject),
            "Successfully rejected broker offer!"
        );
    }
}
