use reqwest::multipart::{Form, Part};
use uuid::Uuid;

use crate::client::envelope::Page;
use crate::client::{ApiClient, ApiRequest};
use crate::error::{ClientError, ClientResult};
use crate::models::document::{Document, DocumentSubject};
use crate::session::RequestContext;

impl ApiClient {
    pub async fn list_documents(
        &self,
        ctx: &RequestContext,
        subject: DocumentSubject,
        subject_id: Uuid,
        page: Option<u32>,
    ) -> ClientResult<Page<Document>> {
        let request = ApiRequest::get("/documents")
            .query("subject", Some(subject))
            .query("subject_id", Some(subject_id))
            .query("page", page);
        self.send(ctx, request).await
    }

    /// Upload a file for a subject record. Sent as multipart so reqwest
    /// controls the boundary header; no explicit Content-Type is set.
    pub async fn upload_document(
        &self,
        ctx: &RequestContext,
        subject: DocumentSubject,
        subject_id: Uuid,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<Document> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)
            .map_err(|e| ClientError::InvalidRequest(format!("invalid content type: {e}")))?;
        let form = Form::new()
            .text("subject", subject.as_str())
            .text("subject_id", subject_id.to_string())
            .part("file", part);

        let request = ApiRequest::post("/documents").multipart(form);
        self.send(ctx, request).await
    }

    pub async fn delete_document(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> ClientResult<Option<String>> {
        self.send_ok(ctx, ApiRequest::delete(format!("/documents/{id}"))).await
    }
}
