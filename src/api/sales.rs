use serde_json::json;
use uuid::Uuid;

use crate::client::envelope::Page;
use crate::client::{ApiClient, ApiRequest};
use crate::error::ClientResult;
use crate::models::sales::{CreateDeal, Deal, DealStage};
use crate::session::RequestContext;

impl ApiClient {
    pub async fn list_deals(
        &self,
        ctx: &RequestContext,
        stage: Option<DealStage>,
        page: Option<u32>,
    ) -> ClientResult<Page<Deal>> {
        let request = ApiRequest::get("/sales/deals")
            .query("stage", stage)
            .query("page", page);
        self.send(ctx, request).await
    }

    pub async fn deal(&self, ctx: &RequestContext, id: Uuid) -> ClientResult<Deal> {
        self.send(ctx, ApiRequest::get(format!("/sales/deals/{id}"))).await
    }

    pub async fn create_deal(&self, ctx: &RequestContext, deal: &CreateDeal) -> ClientResult<Deal> {
        let request = ApiRequest::post("/sales/deals").json(deal)?;
        self.send(ctx, request).await
    }

    /// Move a deal to a new pipeline stage. The backend validates the
    /// transition; an illegal move comes back as a backend error.
    pub async fn advance_deal(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        stage: DealStage,
    ) -> ClientResult<Deal> {
        let request = ApiRequest::post(format!("/sales/deals/{id}/stage"))
            .json(&json!({ "stage": stage }))?;
        self.send(ctx, request).await
    }
}
