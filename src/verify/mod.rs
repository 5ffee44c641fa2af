//! Signed verification-link tokens for the email/OTP flows.
//!
//! A token is a short-lived claim set carried in a URL; there is no
//! server-side state and no revocation. Expiry is enforced purely by the
//! signed `exp` timestamp at validation time.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::config;

/// What a verification token gates. Single-purpose: a token issued for one
/// purpose never validates against another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerifyPurpose {
    Otp,
    Email,
}

impl VerifyPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerifyPurpose::Otp => "otp",
            VerifyPurpose::Email => "email",
        }
    }
}

impl std::fmt::Display for VerifyPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyClaims {
    pub purpose: VerifyPurpose,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("verification link has expired")]
    Expired,

    #[error("invalid verification token")]
    Invalid,

    #[error("token was issued for a different purpose")]
    WrongPurpose,

    #[error("verification token secret is not configured")]
    MissingSecret,

    #[error("verification base url is not valid: {0}")]
    BadBaseUrl(String),

    #[error("token generation failed: {0}")]
    Issue(String),
}

/// Validated claims handed back to the verification page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub email: String,
    pub callback_url: Option<String>,
}

/// Issues and validates verification tokens with a shared HMAC secret.
pub struct Verifier {
    secret: String,
    expiry: Duration,
    base_url: String,
}

impl Verifier {
    pub fn new(secret: impl Into<String>, expiry_secs: i64, base_url: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expiry: Duration::seconds(expiry_secs),
            base_url: base_url.into(),
        }
    }

    /// Verifier from the global config (`HOMESTEAD_VERIFY_SECRET` et al).
    pub fn from_config() -> Result<Self, VerifyError> {
        let cfg = config::config();
        if cfg.security.verify_token_secret.is_empty() {
            return Err(VerifyError::MissingSecret);
        }
        Ok(Self::new(
            cfg.security.verify_token_secret.clone(),
            cfg.security.verify_token_expiry_secs as i64,
            cfg.security.verify_base_url.clone(),
        ))
    }

    /// Produce a signed, time-boxed token for one verification page visit.
    pub fn issue(
        &self,
        purpose: VerifyPurpose,
        email: &str,
        callback_url: Option<&str>,
    ) -> Result<String, VerifyError> {
        let now = Utc::now();
        let claims = VerifyClaims {
            purpose,
            email: email.to_string(),
            callback_url: callback_url.map(str::to_string),
            iat: now.timestamp(),
            exp: (now + self.expiry).timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());
        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| VerifyError::Issue(e.to_string()))
    }

    /// Issue a token and embed it into the redirect URL for the purpose's
    /// verification page.
    pub fn verification_url(
        &self,
        purpose: VerifyPurpose,
        email: &str,
        callback_url: Option<&str>,
    ) -> Result<Url, VerifyError> {
        let token = self.issue(purpose, email, callback_url)?;
        let mut url = Url::parse(&self.base_url)
            .and_then(|u| u.join(&format!("verify/{}", purpose.as_str())))
            .map_err(|e| VerifyError::BadBaseUrl(e.to_string()))?;
        url.query_pairs_mut().append_pair("token", &token);
        Ok(url)
    }

    /// Check signature, expiry, and purpose. Each failure mode is a distinct
    /// error so the page can explain "expired" vs "invalid".
    pub fn validate(
        &self,
        token: &str,
        expected: VerifyPurpose,
    ) -> Result<Verification, VerifyError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let data = decode::<VerifyClaims>(token, &decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => VerifyError::Expired,
                _ => VerifyError::Invalid,
            }
        })?;

        if data.claims.purpose != expected {
            return Err(VerifyError::WrongPurpose);
        }

        Ok(Verification {
            email: data.claims.email,
            callback_url: data.claims.callback_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verifier() -> Verifier {
        Verifier::new("test-secret", 300, "https://app.test")
    }

    #[test]
    fn issued_token_validates_for_its_purpose() {
        let v = verifier();
        let token = v
            .issue(VerifyPurpose::Otp, "a@b.test", Some("https://app.test/next"))
            .unwrap();
        let verification = v.validate(&token, VerifyPurpose::Otp).unwrap();
        assert_eq!(verification.email, "a@b.test");
        assert_eq!(verification.callback_url.as_deref(), Some("https://app.test/next"));
    }

    #[test]
    fn purpose_mismatch_is_rejected() {
        let v = verifier();
        let token = v.issue(VerifyPurpose::Otp, "a@b.test", None).unwrap();
        assert!(matches!(
            v.validate(&token, VerifyPurpose::Email),
            Err(VerifyError::WrongPurpose)
        ));
    }

    #[test]
    fn expired_token_is_rejected_as_expired() {
        // Negative expiry puts exp in the past at issue time
        let v = Verifier::new("test-secret", -60, "https://app.test");
        let token = v.issue(VerifyPurpose::Email, "a@b.test", None).unwrap();
        assert!(matches!(
            verifier().validate(&token, VerifyPurpose::Email),
            Err(VerifyError::Expired)
        ));
    }

    #[test]
    fn tampered_signature_is_rejected_as_invalid() {
        let v = verifier();
        let token = v.issue(VerifyPurpose::Otp, "a@b.test", None).unwrap();
        let other = Verifier::new("different-secret", 300, "https://app.test");
        assert!(matches!(
            other.validate(&token, VerifyPurpose::Otp),
            Err(VerifyError::Invalid)
        ));
        assert!(matches!(
            v.validate("not-a-token", VerifyPurpose::Otp),
            Err(VerifyError::Invalid)
        ));
    }

    #[test]
    fn malformed_base_url_is_a_config_error() {
        let v = Verifier::new("test-secret", 300, "not a base url");
        assert!(matches!(
            v.verification_url(VerifyPurpose::Otp, "a@b.test", None),
            Err(VerifyError::BadBaseUrl(_))
        ));
    }

    #[test]
    fn verification_url_embeds_token() {
        let url = verifier()
            .verification_url(VerifyPurpose::Email, "a@b.test", None)
            .unwrap();
        assert!(url.path().ends_with("/verify/email"));
        let token = url
            .query_pairs()
            .find(|(k, _)| k == "token")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert!(verifier().validate(&token, VerifyPurpose::Email).is_ok());
    }
}
