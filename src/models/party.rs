//! Tenants and owners: the two kinds of people a property connects.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::envelope::Validate;

/// A renter attached to zero or more lease agreements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub property_id: Option<Uuid>,
    pub lease_start: Option<NaiveDate>,
    pub lease_end: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Validate for Tenant {}

/// A property owner the agency manages units for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// IBAN or account reference payouts are sent to
    pub payout_account: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Validate for Owner {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PartyInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_account: Option<String>,
}
