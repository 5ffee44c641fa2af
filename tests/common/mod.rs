use anyhow::{Context, Result};
use axum::Router;

use homestead_client::ApiClient;

/// In-process mock of the Homestead backend. Each test builds the router it
/// needs and gets an isolated port.
pub struct MockBackend {
    pub base_url: String,
}

pub async fn spawn(router: Router) -> Result<MockBackend> {
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .context("failed to bind mock backend")?;

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock backend");
    });

    Ok(MockBackend {
        base_url: format!("http://127.0.0.1:{port}"),
    })
}

pub fn client(backend: &MockBackend) -> ApiClient {
    ApiClient::with_base_url(&backend.base_url, 5).expect("client against mock backend")
}
