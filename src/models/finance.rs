use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::envelope::Validate;

/// Who an invoice is billed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayerKind {
    Tenant,
    Owner,
}

impl PayerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayerKind::Tenant => "tenant",
            PayerKind::Owner => "owner",
        }
    }
}

impl std::fmt::Display for PayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Unpaid,
    Paid,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Unpaid => "unpaid",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A billed charge against a tenant or owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    /// Human-facing invoice number, e.g. "INV-2026-0042"
    pub number: String,
    pub payer_id: Uuid,
    pub payer_kind: PayerKind,
    pub property_id: Option<Uuid>,
    pub amount: Decimal,
    pub currency: String,
    pub status: InvoiceStatus,
    pub due_date: NaiveDate,
    pub issued_at: DateTime<Utc>,
    pub description: Option<String>,
}

impl Validate for Invoice {}

/// A payment recorded against an invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,
    pub invoice_id: Uuid,
    pub amount: Decimal,
    /// Payment channel as reported by the backend ("card", "transfer", "cash")
    pub method: String,
    pub reference: Option<String>,
    pub received_at: DateTime<Utc>,
}

impl Validate for Payment {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl PayoutStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayoutStatus::Pending => "pending",
            PayoutStatus::Processing => "processing",
            PayoutStatus::Completed => "completed",
            PayoutStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for PayoutStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Funds disbursed to a property owner after commission deduction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payout {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub amount: Decimal,
    pub currency: String,
    pub status: PayoutStatus,
    pub scheduled_for: NaiveDate,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Validate for Payout {}

/// Agency commission earned on a collected payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commission {
    pub id: Uuid,
    pub payment_id: Uuid,
    pub property_id: Uuid,
    /// Commission rate applied, as a fraction (0.05 = 5%)
    pub rate: Decimal,
    pub amount: Decimal,
    pub earned_at: DateTime<Utc>,
}

impl Validate for Commission {}

/// Request body for recording a payment against an invoice.
#[derive(Debug, Clone, Serialize)]
pub struct RecordPayment {
    pub invoice_id: Uuid,
    pub amount: Decimal,
    pub method: String,
    pub reference: Option<String>,
}

/// Request body for scheduling an owner payout.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePayout {
    pub owner_id: Uuid,
    pub amount: Decimal,
    pub currency: String,
    pub scheduled_for: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_parses_from_backend_shape() {
        let invoice: Invoice = serde_json::from_str(
            r#"{
                "id": "7f9c24e8-3b0a-4f3d-9e2a-111111111111",
                "number": "INV-2026-0042",
                "payer_id": "7f9c24e8-3b0a-4f3d-9e2a-222222222222",
                "payer_kind": "tenant",
                "property_id": null,
                "amount": "1250.00",
                "currency": "EUR",
                "status": "unpaid",
                "due_date": "2026-09-15",
                "issued_at": "2026-08-30T10:00:00Z",
                "description": "September rent"
            }"#,
        )
        .unwrap();
        assert_eq!(invoice.status, InvoiceStatus::Unpaid);
        assert_eq!(invoice.payer_kind, PayerKind::Tenant);
        assert_eq!(invoice.amount.to_string(), "1250.00");
    }

    #[test]
    fn invoice_missing_required_field_fails() {
        // No `number`: must be a hard parse error, not a default
        let res: Result<Invoice, _> = serde_json::from_str(
            r#"{
                "id": "7f9c24e8-3b0a-4f3d-9e2a-111111111111",
                "payer_id": "7f9c24e8-3b0a-4f3d-9e2a-222222222222",
                "payer_kind": "owner",
                "amount": "10.00",
                "currency": "EUR",
                "status": "paid",
                "due_date": "2026-09-15",
                "issued_at": "2026-08-30T10:00:00Z"
            }"#,
        );
        assert!(res.is_err());
    }
}
