use serde::{Deserialize, Serialize};

use crate::UNKNOWN_CREATOR;

/// Minimal identity record discovered on a category listing page.
/// The url is the canonical absolute link and serves as the identity key
/// within its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorStub {
    pub name: String,
    pub url: String,
}

impl CreatorStub {
    pub fn new(name: &str, url: String) -> Self {
        let name = name.trim();
        Self {
            name: if name.is_empty() {
                UNKNOWN_CREATOR.to_string()
            } else {
                name.to_string()
            },
            url,
        }
    }
}

/// A stub enriched with the market attributes from the creator's own page.
/// Every field is always present; an attribute whose label was missing or
/// unparseable is carried as `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorDetail {
    pub name: String,
    pub url: String,
    pub minutes_purchased: u64,
    pub price_per_minute: f64,
    pub market_cap: f64,
}

impl CreatorDetail {
    /// Merges the parsed attributes onto a stub without touching its
    /// identity fields.
    pub fn from_stub(
        stub: &CreatorStub,
        minutes_purchased: u64,
        price_per_minute: f64,
        market_cap: f64,
    ) -> Self {
        Self {
            name: stub.name.clone(),
            url: stub.url.clone(),
            minutes_purchased,
            price_per_minute,
            market_cap,
        }
    }
}
