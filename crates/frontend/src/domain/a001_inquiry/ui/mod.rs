pub mod broker_offers;
