// Client-side error taxonomy for the Homestead API
use thiserror::Error;

/// Everything that can go wrong between calling an endpoint method and
/// getting a typed payload back. Each variant is a distinct failure mode so
/// callers can branch without parsing message text.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The endpoint requires a bearer token and the request context has none.
    /// Raised before any network I/O happens.
    #[error("authentication required: no access token in request context")]
    AuthRequired,

    /// The call site built an impossible request: bad base URL, bad endpoint
    /// path, or an unserializable body. Raised before any network I/O.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}: {message}")]
    Transport { status: u16, message: String },

    /// Distinguished 401 outcome: the UI reacts by signing the user out
    /// rather than showing an inline error.
    #[error("session expired or token rejected")]
    SessionExpired,

    /// The response body did not match the expected shape. The payload is
    /// discarded entirely; partially-typed values are never returned.
    #[error("invalid response from server: {0}")]
    InvalidResponse(String),

    /// HTTP 200 but the envelope carried `error: true`.
    #[error("{message}")]
    Backend { message: String },
}

impl ClientError {
    /// Message suitable for direct display in a toast/CLI line.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Whether the caller should treat this as a sign-out condition.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ClientError::SessionExpired)
    }

    /// Stable code for logging and programmatic handling.
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::AuthRequired => "AUTH_REQUIRED",
            ClientError::InvalidRequest(_) => "INVALID_REQUEST",
            ClientError::Network(_) => "NETWORK",
            ClientError::Transport { .. } => "TRANSPORT",
            ClientError::SessionExpired => "SESSION_EXPIRED",
            ClientError::InvalidResponse(_) => "INVALID_RESPONSE",
            ClientError::Backend { .. } => "BACKEND",
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
