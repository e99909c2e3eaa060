use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Inquiry transaction type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Inquiries created before the type existed are rentals
    #[default]
    Rent,
    Sale,
}

impl TransactionType {
    /// Wire code ("rent" / "sale")
    pub fn code(&self) -> &'static str {
        match self {
            TransactionType::Rent => "rent",
            TransactionType::Sale => "sale",
        }
    }

    /// Human readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            TransactionType::Rent => "For Rent",
            TransactionType::Sale => "For Sale",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Broker commission in percent.
///
/// Decimal fields may arrive either as a JSON number (`2.5`) or as a
/// decimal string (`"2.50"`); the textual form is shown as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Commission {
    Number(f64),
    Text(String),
}

impl fmt::Display for Commission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Commission::Number(value) => write!(f, "{}", value),
            Commission::Text(value) => f.write_str(value),
        }
    }
}

/// A broker's accepted response to an inquiry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrokerPost {
    pub broker_name: String,
    pub commission: Commission,
    /// ISO timestamp of the broker's offer
    pub accepted_at: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A customer's property search request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: i64,
    #[serde(default)]
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<u32>,
    #[serde(default)]
    pub min_price: Option<u64>,
    #[serde(default)]
    pub max_price: Option<u64>,
    #[serde(default)]
    pub min_size: Option<u32>,
    #[serde(default)]
    pub max_size: Option<u32>,
    #[serde(default)]
    pub furnished: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_at: String,
    #[serde(default)]
    pub is_accepted: bool,
    #[serde(default)]
    pub broker_post: Option<BrokerPost>,
}

impl Inquiry {
    /// The broker post, but only when the inquiry counts as an offer:
    /// it has been accepted and carries a broker post.
    pub fn broker_offer(&self) -> Option<&BrokerPost> {
        if self.is_accepted {
            self.broker_post.as_ref()
        } else {
            None
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `GET /api/inquiries/` payload
///
/// Entries that do not parse as an `Inquiry` are dropped one by one and
/// counted in `skipped`, so one bad record does not hide the others.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InquiryListResponse {
    pub inquiries: Vec<Inquiry>,
    #[serde(skip)]
    pub skipped: usize,
}

#[derive(Deserialize)]
struct RawInquiryList {
    #[serde(default)]
    inquiries: Vec<serde_json::Value>,
}

impl<'de> Deserialize<'de> for InquiryListResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawInquiryList::deserialize(deserializer)?;
        let total = raw.inquiries.len();
        let inquiries: Vec<Inquiry> = raw
            .inquiries
            .into_iter()
            .filter_map(|value| serde_json::from_value(value).ok())
            .collect();
        Ok(Self {
            skipped: total - inquiries.len(),
            inquiries,
        })
    }
}

impl InquiryListResponse {
    /// Inquiries that carry an accepted broker offer, in server order
    pub fn broker_offers(&self) -> impl Iterator<Item = &Inquiry> {
        self.inquiries
            .iter()
            .filter(|inquiry| inquiry.broker_offer().is_some())
    }
}
