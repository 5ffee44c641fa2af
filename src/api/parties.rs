use uuid::Uuid;

use crate::client::envelope::Page;
use crate::client::{ApiClient, ApiRequest};
use crate::error::ClientResult;
use crate::models::party::{Owner, PartyInput, Tenant};
use crate::session::RequestContext;

impl ApiClient {
    pub async fn list_tenants(
        &self,
        ctx: &RequestContext,
        page: Option<u32>,
        search: Option<&str>,
    ) -> ClientResult<Page<Tenant>> {
        let request = ApiRequest::get("/tenants")
            .query("page", page)
            .query("search", search);
        self.send(ctx, request).await
    }

    pub async fn tenant(&self, ctx: &RequestContext, id: Uuid) -> ClientResult<Tenant> {
        self.send(ctx, ApiRequest::get(format!("/tenants/{id}"))).await
    }

    pub async fn create_tenant(
        &self,
        ctx: &RequestContext,
        input: &PartyInput,
    ) -> ClientResult<Tenant> {
        let request = ApiRequest::post("/tenants").json(input)?;
        self.send(ctx, request).await
    }

    pub async fn update_tenant(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: &PartyInput,
    ) -> ClientResult<Tenant> {
        let request = ApiRequest::patch(format!("/tenants/{id}")).json(input)?;
        self.send(ctx, request).await
    }

    pub async fn list_owners(
        &self,
        ctx: &RequestContext,
        page: Option<u32>,
        search: Option<&str>,
    ) -> ClientResult<Page<Owner>> {
        let request = ApiRequest::get("/owners")
            .query("page", page)
            .query("search", search);
        self.send(ctx, request).await
    }

    pub async fn owner(&self, ctx: &RequestContext, id: Uuid) -> ClientResult<Owner> {
        self.send(ctx, ApiRequest::get(format!("/owners/{id}"))).await
    }

    pub async fn create_owner(
        &self,
        ctx: &RequestContext,
        input: &PartyInput,
    ) -> ClientResult<Owner> {
        let request = ApiRequest::post("/owners").json(input)?;
        self.send(ctx, request).await
    }

    pub async fn update_owner(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: &PartyInput,
    ) -> ClientResult<Owner> {
        let request = ApiRequest::patch(format!("/owners/{id}")).json(input)?;
        self.send(ctx, request).await
    }
}
