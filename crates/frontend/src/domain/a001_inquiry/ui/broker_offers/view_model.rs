//! Row descriptors for the broker offers table.
//!
//! Everything shown in a row is derived here from a validated `Inquiry`,
//! so the view only lays the strings out.

use contracts::domain::a001_inquiry::{Inquiry, InquiryListResponse, TransactionType};
use contracts::usecases::u501_customer_response::CustomerResponseAction;

use crate::shared::date_utils::format_short_date;
use crate::shared::number_format::format_thousands;
use crate::usecases::u501_customer_response::PendingResponse;

const NOT_AVAILABLE: &str = "N/A";

#[derive(Clone, Debug, PartialEq)]
pub struct BrokerSummary {
    pub name: String,
    pub commission: String,
    pub offered_date: String,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OfferRow {
    pub inquiry_id: i64,
    pub transaction_type: TransactionType,
    pub location: String,
    pub property_summary: String,
    pub price_range: String,
    pub created_date: String,
    pub broker: BrokerSummary,
}

impl OfferRow {
    /// `None` unless the inquiry carries an accepted broker offer
    pub fn from_inquiry(inquiry: &Inquiry, currency: &str) -> Option<Self> {
        let post = inquiry.broker_offer()?;

        Some(Self {
            inquiry_id: inquiry.id,
            transaction_type: inquiry.transaction_type,
            location: format_location(inquiry.city.as_deref(), inquiry.area.as_deref()),
            property_summary: format_property_summary(
                inquiry.property_type.as_deref(),
                inquiry.bedrooms,
                inquiry.bathrooms,
            ),
            price_range: format_price_range(inquiry.min_price, inquiry.max_price, currency),
            created_date: format_short_date(&inquiry.created_at),
            broker: BrokerSummary {
                name: post.broker_name.clone(),
                commission: format!("{}%", post.commission),
                offered_date: format_short_date(&post.accepted_at),
                notes: non_blank(post.notes.as_deref()).map(str::to_string),
            },
        })
    }

    /// CSS modifier for the transaction type badge
    pub fn badge_class(&self) -> &'static str {
        match self.transaction_type {
            TransactionType::Rent => "bg-primary",
            TransactionType::Sale => "bg-success",
        }
    }

    pub fn pending(&self, action: CustomerResponseAction) -> PendingResponse {
        PendingResponse {
            inquiry_id: self.inquiry_id,
            broker_name: self.broker.name.clone(),
            action,
        }
    }
}

/// Build rows for every offer in the response, in server order
pub fn build_offer_rows(response: &InquiryListResponse, currency: &str) -> Vec<OfferRow> {
    response
        .inquiries
        .iter()
        .filter_map(|inquiry| OfferRow::from_inquiry(inquiry, currency))
        .collect()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Zero counts and prices are shown as missing
fn non_zero<T: Default + PartialEq>(value: Option<T>) -> Option<T> {
    value.filter(|v| *v != T::default())
}

/// "City, Area", "City", or "N/A" when the city is missing
pub fn format_location(city: Option<&str>, area: Option<&str>) -> String {
    let city = non_blank(city).unwrap_or(NOT_AVAILABLE);
    match non_blank(area) {
        Some(area) => format!("{}, {}", city, area),
        None => city.to_string(),
    }
}

/// "Apartment - 3 BR, 2 Bath"; each part falls back to "N/A"
pub fn format_property_summary(
    property_type: Option<&str>,
    bedrooms: Option<u32>,
    bathrooms: Option<u32>,
) -> String {
    let count = |value: Option<u32>| {
        non_zero(value)
            .map(|v| v.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    };
    format!(
        "{} - {} BR, {} Bath",
        non_blank(property_type).unwrap_or(NOT_AVAILABLE),
        count(bedrooms),
        count(bathrooms),
    )
}

pub fn format_price_range(min_price: Option<u64>, max_price: Option<u64>, currency: &str) -> String {
    match (non_zero(min_price), non_zero(max_price)) {
        (Some(min), Some(max)) => format!(
            "{} - {} {}",
            format_thousands(min),
            format_thousands(max),
            currency
        ),
        (Some(min), None) => format!("From {} {}", format_thousands(min), currency),
        (None, Some(max)) => format!("Up to {} {}", format_thousands(max), currency),
        (None, None) => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_inquiry::{BrokerPost, Commission};

    fn inquiry(id: i64) -> Inquiry {
        Inquiry {
            id,
            transaction_type: TransactionType::Rent,
            city: Some("Cairo".to_string()),
            area: Some("Maadi".to_string()),
            property_type: Some("Studio".to_string()),
            bedrooms: Some(1),
            bathrooms: Some(1),
            min_price: Some(3000),
            max_price: Some(5000),
            min_size: None,
            max_size: None,
            furnished: false,
            created_at: "2025-02-03T10:00:00Z".to_string(),
            is_accepted: true,
            broker_post: Some(BrokerPost {
                broker_name: "Nour Adel".to_string(),
                commission: Commission::Number(2.5),
                accepted_at: "2025-02-04T12:30:00Z".to_string(),
                notes: Some("Available from March".to_string()),
            }),
        }
    }

    #[test]
    fn test_location() {
        assert_eq!(format_location(Some("Cairo"), Some("Maadi")), "Cairo, Maadi");
        assert_eq!(format_location(Some("Cairo"), None), "Cairo");
        assert_eq!(format_location(Some("Cairo"), Some("")), "Cairo");
        assert_eq!(format_location(None, None), "N/A");
        assert_eq!(format_location(Some(""), Some("Dokki")), "N/A, Dokki");
    }

    #[test]
    fn test_price_range() {
        assert_eq!(
            format_price_range(Some(1_000_000), Some(2_000_000), "EGP"),
            "1,000,000 - 2,000,000 EGP"
        );
        assert_eq!(format_price_range(Some(500_000), None, "EGP"), "From 500,000 EGP");
        assert_eq!(format_price_range(None, Some(8000), "EGP"), "Up to 8,000 EGP");
        assert_eq!(format_price_range(None, None, "EGP"), "N/A");
        assert_eq!(format_price_range(Some(0), Some(0), "EGP"), "N/A");
    }

    #[test]
    fn test_property_summary() {
        assert_eq!(
            format_property_summary(Some("Apartment"), Some(3), Some(2)),
            "Apartment - 3 BR, 2 Bath"
        );
        assert_eq!(format_property_summary(None, None, None), "N/A - N/A BR, N/A Bath");
        assert_eq!(
            format_property_summary(Some("Studio"), Some(0), Some(1)),
            "Studio - N/A BR, 1 Bath"
        );
    }

    #[test]
    fn test_row_from_offer() {
        let row = OfferRow::from_inquiry(&inquiry(3), "EGP").unwrap();
        assert_eq!(row.inquiry_id, 3);
        assert_eq!(row.location, "Cairo, Maadi");
        assert_eq!(row.property_summary, "Studio - 1 BR, 1 Bath");
        assert_eq!(row.price_range, "3,000 - 5,000 EGP");
        assert_eq!(row.created_date, "2/3/2025");
        assert_eq!(row.badge_class(), "bg-primary");
        assert_eq!(
            row.broker,
            BrokerSummary {
                name: "Nour Adel".to_string(),
                commission: "2.5%".to_string(),
                offered_date: "2/4/2025".to_string(),
                notes: Some("Available from March".to_string()),
            }
        );
    }

    #[test]
    fn test_blank_notes_are_dropped() {
        let mut source = inquiry(4);
        if let Some(post) = source.broker_post.as_mut() {
            post.notes = Some("  ".to_string());
        }
        let row = OfferRow::from_inquiry(&source, "EGP").unwrap();
        assert_eq!(row.broker.notes, None);
    }

    #[test]
    fn test_no_offers_gives_no_rows() {
        let mut pending = inquiry(1);
        pending.is_accepted = false;
        let mut without_post = inquiry(2);
        without_post.broker_post = None;

        let response = InquiryListResponse {
            inquiries: vec![pending, without_post],
            ..Default::default()
        };
        assert!(build_offer_rows(&response, "EGP").is_empty());
    }

    #[test]
    fn test_rows_keep_server_order() {
        let mut skipped = inquiry(2);
        skipped.is_accepted = false;
        let response = InquiryListResponse {
            inquiries: vec![inquiry(5), skipped, inquiry(1)],
            ..Default::default()
        };
        let ids: Vec<i64> = build_offer_rows(&response, "EGP")
            .iter()
            .map(|r| r.inquiry_id)
            .collect();
        assert_eq!(ids, vec![5, 1]);
    }

    #[test]
    fn test_accept_button_target() {
        let row = OfferRow::from_inquiry(&inquiry(11), "EGP").unwrap();
        let pending = row.pending(CustomerResponseAction::Accept);
        assert_eq!(
            pending,
            PendingResponse {
                inquiry_id: 11,
                broker_name: "Nour Adel".to_string(),
                action: CustomerResponseAction::Accept,
            }
        );
    }
}
