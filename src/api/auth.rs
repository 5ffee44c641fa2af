//! Public auth endpoints: the only calls made without a bearer token.

use crate::client::{ApiClient, ApiRequest};
use crate::error::ClientResult;
use crate::models::auth::{
    AuthAck, LoginRequest, LoginResponse, PasswordResetRequest, SignupRequest, VerifyOtpRequest,
};
use crate::session::RequestContext;
use crate::verify::VerifyPurpose;

impl ApiClient {
    pub async fn login(&self, credentials: &LoginRequest) -> ClientResult<LoginResponse> {
        let request = ApiRequest::post("/auth/login").json(credentials)?.public();
        self.send(&RequestContext::anonymous(), request).await
    }

    pub async fn signup(&self, signup: &SignupRequest) -> ClientResult<AuthAck> {
        let request = ApiRequest::post("/auth/signup").json(signup)?.public();
        self.send(&RequestContext::anonymous(), request).await
    }

    pub async fn verify_otp(&self, verification: &VerifyOtpRequest) -> ClientResult<LoginResponse> {
        let request = ApiRequest::post("/auth/otp/verify").json(verification)?.public();
        self.send(&RequestContext::anonymous(), request).await
    }

    /// Ask the backend to resend an OTP or verification email. The returned
    /// `retry_after_secs` should be fed into the retry timer so the UI
    /// paces further resends.
    pub async fn resend_verification(
        &self,
        purpose: VerifyPurpose,
        email: &str,
    ) -> ClientResult<AuthAck> {
        let request = ApiRequest::post("/auth/otp/resend")
            .json(&serde_json::json!({ "purpose": purpose, "email": email }))?
            .public();
        self.send(&RequestContext::anonymous(), request).await
    }

    pub async fn request_password_reset(
        &self,
        reset: &PasswordResetRequest,
    ) -> ClientResult<AuthAck> {
        let request = ApiRequest::post("/auth/password/reset").json(reset)?.public();
        self.send(&RequestContext::anonymous(), request).await
    }
}
