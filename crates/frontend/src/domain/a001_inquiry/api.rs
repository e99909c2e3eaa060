use contracts::domain::a001_inquiry::InquiryListResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, ApiError};
use crate::shared::config::Config;

/// Fetch all inquiries of the current customer
pub async fn fetch_inquiries(config: &Config) -> Result<InquiryListResponse, ApiError> {
    let url = api_url(&config.api.base, &config.api.inquiries_path);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }

    let list = response
        .json::<InquiryListResponse>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;

    if list.skipped > 0 {
        log::warn!("Skipped {} malformed inquiries in {}", list.skipped, url);
    }
    Ok(list)
}
