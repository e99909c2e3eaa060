use serde::{Deserialize, Serialize};
use std::fmt;

/// Customer decision on a broker's offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerResponseAction {
    Accept,
    Reject,
}

impl CustomerResponseAction {
    pub fn code(&self) -> &'static str {
        match self {
            CustomerResponseAction::Accept => "accept",
            CustomerResponseAction::Reject => "reject",
        }
    }

    /// "accepted" / "rejected"
    pub fn past_tense(&self) -> &'static str {
        match self {
            CustomerResponseAction::Accept => "accepted",
            CustomerResponseAction::Reject => "rejected",
        }
    }
}

impl fmt::Display for CustomerResponseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// `POST /api/customer-response/` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerResponseRequest {
    pub inquiry_id: i64,
    pub action: CustomerResponseAction,
    pub customer_notes: String,
}
