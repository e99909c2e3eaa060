pub mod api_utils;
pub mod config;
pub mod cookies;
pub mod date_utils;
pub mod icons;
pub mod modal_frame;
pub mod number_format;
pub mod request_seq;
