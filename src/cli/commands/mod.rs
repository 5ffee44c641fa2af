pub mod auth;
pub mod finance;
pub mod properties;
pub mod verify;

use crate::session::RequestContext;

/// Build the request context from `HOMESTEAD_TOKEN`, the CLI's stand-in for
/// a session provider.
pub fn context_from_env() -> anyhow::Result<RequestContext> {
    match std::env::var("HOMESTEAD_TOKEN") {
        Ok(token) if !token.is_empty() => Ok(RequestContext::with_token(token)),
        _ => anyhow::bail!("HOMESTEAD_TOKEN is not set; run `homestead auth login` first"),
    }
}
