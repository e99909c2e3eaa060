pub mod u501_customer_response;
