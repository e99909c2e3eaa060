pub mod aggregate;

pub use aggregate::{BrokerPost, Commission, Inquiry, InquiryListResponse, TransactionType};
