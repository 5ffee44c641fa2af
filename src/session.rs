use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ClientError, ClientResult};

/// Minimal view of the signed-in user carried alongside the token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub role: Option<String>,
}

/// The current session as handed over by the auth provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: SessionUser,
}

/// Source of the current session. Refresh and expiry semantics live behind
/// this seam; the client only sees the token it hands out.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn current_session(&self) -> ClientResult<Option<Session>>;
}

/// Fixed session for the CLI and tests.
pub struct StaticSessionProvider {
    session: Option<Session>,
}

impl StaticSessionProvider {
    pub fn new(session: Session) -> Self {
        Self { session: Some(session) }
    }

    pub fn anonymous() -> Self {
        Self { session: None }
    }
}

#[async_trait]
impl SessionProvider for StaticSessionProvider {
    async fn current_session(&self) -> ClientResult<Option<Session>> {
        Ok(self.session.clone())
    }
}

/// Per-request credentials, passed explicitly into every endpoint call
/// instead of being read from ambient global state.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    access_token: Option<String>,
}

impl RequestContext {
    /// Context for the public auth endpoints (login, signup, OTP, reset).
    pub fn anonymous() -> Self {
        Self { access_token: None }
    }

    pub fn from_session(session: &Session) -> Self {
        Self {
            access_token: Some(session.access_token.clone()),
        }
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            access_token: Some(token.into()),
        }
    }

    /// Resolve the current session through a provider and build a context,
    /// failing fast when a token is required but absent.
    pub async fn resolve(provider: &dyn SessionProvider) -> ClientResult<Self> {
        match provider.current_session().await? {
            Some(session) => Ok(Self::from_session(&session)),
            None => Err(ClientError::AuthRequired),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Token or `AuthRequired`, for endpoints that must be authenticated.
    pub fn require_token(&self) -> ClientResult<&str> {
        self.access_token.as_deref().ok_or(ClientError::AuthRequired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            access_token: "tok-123".to_string(),
            user: SessionUser {
                id: Uuid::new_v4(),
                email: "agent@homestead.example".to_string(),
                name: Some("Agent".to_string()),
                role: Some("manager".to_string()),
            },
        }
    }

    #[test]
    fn context_from_session_carries_token() {
        let ctx = RequestContext::from_session(&session());
        assert_eq!(ctx.token(), Some("tok-123"));
        assert!(ctx.require_token().is_ok());
    }

    #[test]
    fn anonymous_context_requires_token_fails() {
        let ctx = RequestContext::anonymous();
        assert!(matches!(ctx.require_token(), Err(ClientError::AuthRequired)));
    }

    #[tokio::test]
    async fn resolve_fails_without_session() {
        let provider = StaticSessionProvider::anonymous();
        let res = RequestContext::resolve(&provider).await;
        assert!(matches!(res, Err(ClientError::AuthRequired)));
    }

    #[tokio::test]
    async fn resolve_uses_provider_session() {
        let provider = StaticSessionProvider::new(session());
        let ctx = RequestContext::resolve(&provider).await.unwrap();
        assert_eq!(ctx.token(), Some("tok-123"));
    }
}
