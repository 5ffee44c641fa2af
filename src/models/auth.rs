use serde::{Deserialize, Serialize};

use crate::client::envelope::Validate;
use crate::session::SessionUser;

/// Payload of a successful login: the token plus the user it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: SessionUser,
}

impl Validate for LoginResponse {
    fn validate(&self) -> Result<(), String> {
        if self.access_token.is_empty() {
            return Err("login response carried an empty access token".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

/// Acknowledgement for signup/OTP/reset flows. `retry_after_secs` feeds the
/// resend cooldown timer when present.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthAck {
    pub email: String,
    pub retry_after_secs: Option<u64>,
}

impl Validate for AuthAck {}
