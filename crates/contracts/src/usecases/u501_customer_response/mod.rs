pub mod request;
pub mod response;

pub use request::{CustomerResponseAction, CustomerResponseRequest};
pub use response::CustomerResponseResult;
