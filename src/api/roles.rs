use uuid::Uuid;

use crate::client::{ApiClient, ApiRequest};
use crate::error::ClientResult;
use crate::models::role::{AssignRole, Role};
use crate::session::RequestContext;

impl ApiClient {
    pub async fn list_roles(&self, ctx: &RequestContext) -> ClientResult<Vec<Role>> {
        self.send(ctx, ApiRequest::get("/roles")).await
    }

    pub async fn role(&self, ctx: &RequestContext, id: Uuid) -> ClientResult<Role> {
        self.send(ctx, ApiRequest::get(format!("/roles/{id}"))).await
    }

    pub async fn assign_role(
        &self,
        ctx: &RequestContext,
        assignment: &AssignRole,
    ) -> ClientResult<Option<String>> {
        let request = ApiRequest::post("/roles/assign").json(assignment)?;
        self.send_ok(ctx, request).await
    }
}
