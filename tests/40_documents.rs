mod common;

use axum::body::Bytes;
use axum::http::HeaderMap;
use axum::routing::{delete, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use uuid::Uuid;

use homestead_client::models::document::DocumentSubject;
use homestead_client::RequestContext;

#[tokio::test]
async fn multipart_upload_round_trips_a_document() -> anyhow::Result<()> {
    async fn accept_upload(headers: HeaderMap, body: Bytes) -> Json<Value> {
        // The client must let reqwest pick the boundary rather than setting
        // its own Content-Type
        let content_type = headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        if !content_type.starts_with("multipart/form-data; boundary=") {
            return Json(json!({
                "error": true,
                "message": format!("unexpected content type: {content_type}"),
                "data": null
            }));
        }

        let body = String::from_utf8_lossy(&body);
        for needle in [
            r#"name="subject""#,
            r#"name="subject_id""#,
            r#"name="file""#,
            r#"filename="lease.pdf""#,
            "application/pdf",
            "fake pdf bytes",
        ] {
            if !body.contains(needle) {
                return Json(json!({
                    "error": true,
                    "message": format!("missing multipart field: {needle}"),
                    "data": null
                }));
            }
        }

        Json(json!({
            "error": false,
            "data": {
                "id": Uuid::new_v4(),
                "subject": "property",
                "subject_id": Uuid::new_v4(),
                "file_name": "lease.pdf",
                "content_type": "application/pdf",
                "size_bytes": 14,
                "url": "https://files.homestead.example/lease.pdf",
                "uploaded_at": "2026-08-30T10:00:00Z"
            }
        }))
    }

    let backend = common::spawn(Router::new().route("/documents", post(accept_upload))).await?;
    let client = common::client(&backend);

    let document = client
        .upload_document(
            &RequestContext::with_token("tok"),
            DocumentSubject::Property,
            Uuid::new_v4(),
            "lease.pdf",
            "application/pdf",
            b"fake pdf bytes".to_vec(),
        )
        .await?;

    assert_eq!(document.file_name, "lease.pdf");
    assert_eq!(document.content_type, "application/pdf");
    assert_eq!(document.subject, DocumentSubject::Property);
    assert_eq!(document.size_bytes, 14);
    Ok(())
}

#[tokio::test]
async fn delete_returns_the_server_acknowledgement() -> anyhow::Result<()> {
    let id = Uuid::new_v4();
    let router = Router::new().route(
        "/documents/:id",
        delete(|| async { Json(json!({ "error": false, "message": "document deleted" })) }),
    );
    let backend = common::spawn(router).await?;
    let client = common::client(&backend);

    let message = client
        .delete_document(&RequestContext::with_token("tok"), id)
        .await?;
    assert_eq!(message.as_deref(), Some("document deleted"));
    Ok(())
}
