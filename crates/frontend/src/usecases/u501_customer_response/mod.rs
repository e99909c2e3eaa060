pub mod api;
pub mod submission;
pub mod view;

use contracts::usecases::u501_customer_response::CustomerResponseAction;

pub use view::CustomerResponseModal;

/// The offer a customer is about to answer; `Some` while the modal is open
#[derive(Clone, Debug, PartialEq)]
pub struct PendingResponse {
    pub inquiry_id: i64,
    pub broker_name: String,
    pub action: CustomerResponseAction,
}
