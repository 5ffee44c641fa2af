mod common;

use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use homestead_client::models::auth::LoginRequest;
use homestead_client::timer::{CooldownStore, RemoteCooldownStore};
use homestead_client::verify::VerifyPurpose;
use homestead_client::ClientError;

#[tokio::test]
async fn login_returns_token_and_user() -> anyhow::Result<()> {
    let router = Router::new().route(
        "/auth/login",
        post(|Json(body): Json<Value>| async move {
            if body["email"] == "agent@homestead.example" && body["password"] == "hunter2" {
                Json(json!({
                    "error": false,
                    "data": {
                        "access_token": "tok-xyz",
                        "user": {
                            "id": "7f9c24e8-3b0a-4f3d-9e2a-111111111111",
                            "email": "agent@homestead.example",
                            "name": "Agent",
                            "role": "manager"
                        }
                    }
                }))
            } else {
                Json(json!({ "error": true, "message": "invalid credentials", "data": null }))
            }
        }),
    );
    let backend = common::spawn(router).await?;
    let client = common::client(&backend);

    let login = client
        .login(&LoginRequest {
            email: "agent@homestead.example".to_string(),
            password: "hunter2".to_string(),
        })
        .await?;
    assert_eq!(login.access_token, "tok-xyz");
    assert_eq!(login.user.email, "agent@homestead.example");

    let err = client
        .login(&LoginRequest {
            email: "agent@homestead.example".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();
    match err {
        ClientError::Backend { message } => assert_eq!(message, "invalid credentials"),
        other => panic!("expected backend error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn resend_ack_carries_cooldown_hint() -> anyhow::Result<()> {
    let router = Router::new().route(
        "/auth/otp/resend",
        post(|| async {
            Json(json!({
                "error": false,
                "data": { "email": "a@b.test", "retry_after_secs": 45 }
            }))
        }),
    );
    let backend = common::spawn(router).await?;
    let client = common::client(&backend);

    let ack = client.resend_verification(VerifyPurpose::Otp, "a@b.test").await?;
    assert_eq!(ack.email, "a@b.test");
    assert_eq!(ack.retry_after_secs, Some(45));
    Ok(())
}

type TimerState = Arc<Mutex<Option<(String, u64)>>>;

#[tokio::test]
async fn remote_cooldown_store_uses_the_two_timer_endpoints() -> anyhow::Result<()> {
    let state: TimerState = Arc::new(Mutex::new(None));

    async fn set_timer(
        State(state): State<TimerState>,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        let key = body["key"].as_str().unwrap_or_default().to_string();
        let secs = body["seconds"].as_u64().unwrap_or_default();
        *state.lock().unwrap() = Some((key, secs));
        (StatusCode::OK, Json(json!({ "error": false, "message": "timer set" })))
    }

    async fn get_remaining(
        State(state): State<TimerState>,
        Query(params): Query<std::collections::HashMap<String, String>>,
    ) -> Json<Value> {
        let stored = state.lock().unwrap().clone();
        let remaining = match (stored, params.get("key")) {
            (Some((key, secs)), Some(requested)) if key == *requested => secs,
            _ => 0,
        };
        Json(json!({ "error": false, "data": { "remaining": remaining } }))
    }

    let router = Router::new()
        .route("/timers/set-retry-timer", post(set_timer))
        .route("/timers/get-remaining-time", get(get_remaining))
        .with_state(state);
    let backend = common::spawn(router).await?;

    let store = RemoteCooldownStore::new(common::client(&backend));
    store.set("otp:a@b.test", 60).await?;
    assert_eq!(store.remaining("otp:a@b.test").await?, 60);
    assert_eq!(store.remaining("email:a@b.test").await?, 0);
    Ok(())
}
