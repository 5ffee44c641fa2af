use uuid::Uuid;

use crate::client::envelope::Page;
use crate::client::{ApiClient, ApiRequest};
use crate::error::ClientResult;
use crate::models::finance::{
    Commission, CreatePayout, Invoice, InvoiceStatus, PayerKind, Payment, Payout, PayoutStatus,
    RecordPayment,
};
use crate::session::RequestContext;

/// Listing filters for `/finance/invoices`. Unset fields are simply absent
/// from the query string.
#[derive(Debug, Clone, Default)]
pub struct InvoiceFilter {
    pub status: Option<InvoiceStatus>,
    pub payer_id: Option<Uuid>,
    pub page: Option<u32>,
    pub search: Option<String>,
}

impl ApiClient {
    pub async fn list_invoices(
        &self,
        ctx: &RequestContext,
        filter: &InvoiceFilter,
    ) -> ClientResult<Page<Invoice>> {
        let request = ApiRequest::get("/finance/invoices")
            .query("status", filter.status)
            .query("payer_id", filter.payer_id)
            .query("page", filter.page)
            .query("search", filter.search.as_deref());
        self.send(ctx, request).await
    }

    /// Outstanding invoices for one payer, oldest due date first.
    pub async fn unpaid_invoices(
        &self,
        ctx: &RequestContext,
        payer_id: Uuid,
        payer_kind: PayerKind,
    ) -> ClientResult<Page<Invoice>> {
        let request = ApiRequest::get("/finance/invoices/unpaid")
            .query("payer_id", Some(payer_id))
            .query("payer_kind", Some(payer_kind));
        self.send(ctx, request).await
    }

    pub async fn invoice(&self, ctx: &RequestContext, id: Uuid) -> ClientResult<Invoice> {
        self.send(ctx, ApiRequest::get(format!("/finance/invoices/{id}"))).await
    }

    pub async fn record_payment(
        &self,
        ctx: &RequestContext,
        payment: &RecordPayment,
    ) -> ClientResult<Payment> {
        let request = ApiRequest::post("/finance/payments").json(payment)?;
        self.send(ctx, request).await
    }

    pub async fn list_payments(
        &self,
        ctx: &RequestContext,
        invoice_id: Option<Uuid>,
        page: Option<u32>,
    ) -> ClientResult<Page<Payment>> {
        let request = ApiRequest::get("/finance/payments")
            .query("invoice_id", invoice_id)
            .query("page", page);
        self.send(ctx, request).await
    }

    pub async fn list_payouts(
        &self,
        ctx: &RequestContext,
        status: Option<PayoutStatus>,
        page: Option<u32>,
    ) -> ClientResult<Page<Payout>> {
        let request = ApiRequest::get("/finance/payouts")
            .query("status", status)
            .query("page", page);
        self.send(ctx, request).await
    }

    pub async fn create_payout(
        &self,
        ctx: &RequestContext,
        payout: &CreatePayout,
    ) -> ClientResult<Payout> {
        let request = ApiRequest::post("/finance/payouts").json(payout)?;
        self.send(ctx, request).await
    }

    pub async fn list_commissions(
        &self,
        ctx: &RequestContext,
        property_id: Option<Uuid>,
        page: Option<u32>,
    ) -> ClientResult<Page<Commission>> {
        let request = ApiRequest::get("/finance/commissions")
            .query("property_id", property_id)
            .query("page", page);
        self.send(ctx, request).await
    }
}
