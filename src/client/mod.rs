pub mod envelope;

use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::config;
use crate::error::{ClientError, ClientResult};
use crate::session::RequestContext;
use self::envelope::{Envelope, Validate};

/// Body attached to an outgoing request.
#[derive(Debug)]
pub enum RequestBody {
    None,
    Json(Value),
    /// Multipart form (document upload). reqwest sets the boundary header;
    /// no explicit Content-Type is attached.
    Multipart(reqwest::multipart::Form),
}

/// One outbound call: method, relative path, query parameters, body.
///
/// Built by the endpoint-group methods and executed by [`ApiClient::send`].
/// Endpoints default to requiring a bearer token; the handful of public auth
/// endpoints opt out with [`ApiRequest::public`].
#[derive(Debug)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(&'static str, String)>,
    body: RequestBody,
    requires_auth: bool,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::None,
            requires_auth: true,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a query parameter. `None` and empty-string values are dropped
    /// so they never appear in the URL as `key=`.
    pub fn query(mut self, key: &'static str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            let value = value.to_string();
            if !value.is_empty() {
                self.query.push((key, value));
            }
        }
        self
    }

    /// Attach a JSON body (sets `Content-Type: application/json`).
    pub fn json(mut self, body: &impl Serialize) -> ClientResult<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| ClientError::InvalidRequest(format!("unserializable request body: {e}")))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    pub fn multipart(mut self, form: reqwest::multipart::Form) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    /// Mark as a public endpoint: no token attached, no fail-fast.
    pub fn public(mut self) -> Self {
        self.requires_auth = false;
        self
    }
}

/// HTTP client for the Homestead backend. Owns the connection pool and base
/// URL; endpoint groups hang off it as `impl` blocks per domain.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Client against the configured backend (`HOMESTEAD_API_URL`).
    pub fn new() -> ClientResult<Self> {
        let cfg = config::config();
        Self::with_base_url(&cfg.api.base_url, cfg.api.request_timeout_secs)
    }

    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> ClientResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidRequest(format!("invalid base url: {e}")))?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .gzip(true)
            .build()?;
        Ok(Self { http, base_url })
    }

    fn endpoint_url(&self, path: &str, query: &[(&'static str, String)]) -> ClientResult<Url> {
        let mut url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::InvalidRequest(format!("invalid endpoint path: {e}")))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Execute a request and unwrap the envelope into a typed payload.
    ///
    /// Exactly one network call; no caching, retry, or deduplication. Every
    /// failure mode maps to a distinct [`ClientError`] variant.
    pub async fn send<T>(&self, ctx: &RequestContext, request: ApiRequest) -> ClientResult<T>
    where
        T: DeserializeOwned + Validate,
    {
        let envelope = self.execute::<T>(ctx, request).await?;

        if envelope.error {
            return Err(ClientError::Backend {
                message: envelope
                    .message
                    .unwrap_or_else(|| "request rejected by server".to_string()),
            });
        }

        let data = envelope
            .data
            .ok_or_else(|| ClientError::InvalidResponse("missing data in success envelope".to_string()))?;
        data.validate().map_err(ClientError::InvalidResponse)?;
        Ok(data)
    }

    /// Execute a request where only the acknowledgement matters (deletes,
    /// resends). Returns the server message, if any.
    pub async fn send_ok(&self, ctx: &RequestContext, request: ApiRequest) -> ClientResult<Option<String>> {
        let envelope = self.execute::<Value>(ctx, request).await?;
        if envelope.error {
            return Err(ClientError::Backend {
                message: envelope
                    .message
                    .unwrap_or_else(|| "request rejected by server".to_string()),
            });
        }
        Ok(envelope.message)
    }

    async fn execute<T>(&self, ctx: &RequestContext, request: ApiRequest) -> ClientResult<Envelope<T>>
    where
        T: DeserializeOwned,
    {
        // Resolve credentials before touching the network
        let token = if request.requires_auth {
            Some(ctx.require_token()?.to_string())
        } else {
            ctx.token().map(str::to_string)
        };

        let url = self.endpoint_url(&request.path, &request.query)?;

        if config::config().api.enable_request_logging {
            tracing::debug!(method = %request.method, url = %url, "homestead api request");
        }

        let mut builder = self.http.request(request.method.clone(), url.clone());
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        builder = match request.body {
            RequestBody::None => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(form) => builder.multipart(form),
        };

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            if status == reqwest::StatusCode::UNAUTHORIZED {
                return Err(ClientError::SessionExpired);
            }
            return Err(ClientError::Transport {
                status: status.as_u16(),
                message: extract_error_message(&body, status.as_u16()),
            });
        }

        serde_json::from_str::<Envelope<T>>(&body).map_err(|e| {
            tracing::error!(
                method = %request.method,
                url = %url,
                error = %e,
                "response did not match expected shape"
            );
            ClientError::InvalidResponse(e.to_string())
        })
    }
}

/// Pull `{ message }` out of an error body, falling back to a generic line
/// with the HTTP status when the body is not parseable.
fn extract_error_message(body: &str, status: u16) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| format!("request failed with HTTP status {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::with_base_url("http://localhost:9", 1).unwrap()
    }

    #[test]
    fn query_drops_empty_and_missing_values() {
        let req = ApiRequest::get("/finance/invoices")
            .query("page", Some(2))
            .query("search", Some(""))
            .query("status", None::<String>);
        let url = client().endpoint_url(&req.path, &req.query).unwrap();
        assert_eq!(url.query(), Some("page=2"));
    }

    #[test]
    fn url_without_query_has_no_trailing_question_mark() {
        let req = ApiRequest::get("/finance/invoices").query("search", None::<String>);
        let url = client().endpoint_url(&req.path, &req.query).unwrap();
        assert_eq!(url.as_str(), "http://localhost:9/finance/invoices");
    }

    #[test]
    fn unserializable_body_is_an_invalid_request() {
        struct Boom;
        impl Serialize for Boom {
            fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
                use serde::ser::Error;
                Err(S::Error::custom("boom"))
            }
        }

        let err = ApiRequest::post("/finance/payments").json(&Boom).unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)), "got {err:?}");
        assert_eq!(err.kind(), "INVALID_REQUEST");
    }

    #[test]
    fn error_message_falls_back_to_status() {
        assert_eq!(
            extract_error_message("not json", 502),
            "request failed with HTTP status 502"
        );
        assert_eq!(
            extract_error_message(r#"{"message":"tenant not found"}"#, 404),
            "tenant not found"
        );
    }

    #[tokio::test]
    async fn protected_request_without_token_fails_before_network() {
        // Port 9 (discard) is never contacted: AuthRequired comes first
        let err = client()
            .send::<Value>(&RequestContext::anonymous(), ApiRequest::get("/projects"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::AuthRequired));
    }
}
