use uuid::Uuid;

use crate::client::envelope::Page;
use crate::client::{ApiClient, ApiRequest};
use crate::error::ClientResult;
use crate::models::property::{Property, PropertyInput, PropertyStatus};
use crate::session::RequestContext;

#[derive(Debug, Clone, Default)]
pub struct PropertyFilter {
    pub status: Option<PropertyStatus>,
    pub page: Option<u32>,
    pub search: Option<String>,
}

// Properties live under /projects on the backend, a leftover from when the
// platform managed development projects rather than units.
impl ApiClient {
    pub async fn list_properties(
        &self,
        ctx: &RequestContext,
        filter: &PropertyFilter,
    ) -> ClientResult<Page<Property>> {
        let request = ApiRequest::get("/projects")
            .query("status", filter.status)
            .query("page", filter.page)
            .query("search", filter.search.as_deref());
        self.send(ctx, request).await
    }

    pub async fn property(&self, ctx: &RequestContext, id: Uuid) -> ClientResult<Property> {
        self.send(ctx, ApiRequest::get(format!("/projects/{id}"))).await
    }

    pub async fn create_property(
        &self,
        ctx: &RequestContext,
        input: &PropertyInput,
    ) -> ClientResult<Property> {
        let request = ApiRequest::post("/projects").json(input)?;
        self.send(ctx, request).await
    }

    pub async fn update_property(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: &PropertyInput,
    ) -> ClientResult<Property> {
        let request = ApiRequest::patch(format!("/projects/{id}")).json(input)?;
        self.send(ctx, request).await
    }

    /// Archive is a status transition, not a delete; the record stays
    /// reachable for finance history.
    pub async fn archive_property(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> ClientResult<Option<String>> {
        self.send_ok(ctx, ApiRequest::post(format!("/projects/{id}/archive"))).await
    }
}
