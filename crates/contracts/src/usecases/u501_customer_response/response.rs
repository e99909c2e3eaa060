use serde::{Deserialize, Serialize};

/// `POST /api/customer-response/` reply
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerResponseResult {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl CustomerResponseResult {
    /// `Err` carries the server's error text, if it sent one
    pub fn into_result(self) -> Result<(), Option<String>> {
        if self.success {
            Ok(())
        } else {
            Err(self.error.filter(|e| !e.is_empty()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success() {
        let result: CustomerResponseResult = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert_eq!(result.into_result(), Ok(()));
    }

    #[test]
    fn test_failure_with_error() {
        let result: CustomerResponseResult =
            serde_json::from_str(r#"{"success":false,"error":"Already responded"}"#).unwrap();
        assert_eq!(
            result.into_result(),
            Err(Some("Already responded".to_string()))
        );
    }

    #[test]
    fn test_failure_without_error() {
        let result: CustomerResponseResult =
            serde_json::from_str(r#"{"success":false,"error":""}"#).unwrap();
        assert_eq!(result.into_result(), Err(None));
    }
}
