use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::envelope::Validate;

/// Pipeline stages a sales deal moves through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealStage {
    Lead,
    Viewing,
    Offer,
    Negotiation,
    Closed,
    Lost,
}

impl DealStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            DealStage::Lead => "lead",
            DealStage::Viewing => "viewing",
            DealStage::Offer => "offer",
            DealStage::Negotiation => "negotiation",
            DealStage::Closed => "closed",
            DealStage::Lost => "lost",
        }
    }
}

impl std::fmt::Display for DealStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A prospective sale of a property to a buyer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    pub id: Uuid,
    pub property_id: Uuid,
    pub buyer_name: String,
    pub buyer_email: Option<String>,
    pub stage: DealStage,
    pub asking_price: Decimal,
    pub offer_price: Option<Decimal>,
    pub currency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Validate for Deal {}

#[derive(Debug, Clone, Serialize)]
pub struct CreateDeal {
    pub property_id: Uuid,
    pub buyer_name: String,
    pub buyer_email: Option<String>,
    pub asking_price: Decimal,
    pub currency: String,
}
