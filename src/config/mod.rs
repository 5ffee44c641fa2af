use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub api: ApiConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub enable_request_logging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub verify_token_secret: String,
    pub verify_token_expiry_secs: u64,
    pub verify_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // API overrides
        if let Ok(v) = env::var("HOMESTEAD_API_URL") {
            self.api.base_url = v;
        }
        if let Ok(v) = env::var("HOMESTEAD_REQUEST_TIMEOUT_SECS") {
            self.api.request_timeout_secs = v.parse().unwrap_or(self.api.request_timeout_secs);
        }
        if let Ok(v) = env::var("HOMESTEAD_ENABLE_REQUEST_LOGGING") {
            self.api.enable_request_logging = v.parse().unwrap_or(self.api.enable_request_logging);
        }

        // Security overrides
        if let Ok(v) = env::var("HOMESTEAD_VERIFY_SECRET") {
            self.security.verify_token_secret = v;
        }
        if let Ok(v) = env::var("HOMESTEAD_VERIFY_EXPIRY_SECS") {
            self.security.verify_token_expiry_secs =
                v.parse().unwrap_or(self.security.verify_token_expiry_secs);
        }
        if let Ok(v) = env::var("HOMESTEAD_VERIFY_BASE_URL") {
            self.security.verify_base_url = v;
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            api: ApiConfig {
                base_url: "http://localhost:8000".to_string(),
                request_timeout_secs: 30,
                enable_request_logging: true,
            },
            security: SecurityConfig {
                verify_token_secret: "dev-only-secret".to_string(),
                verify_token_expiry_secs: 5 * 60,
                verify_base_url: "http://localhost:3000".to_string(),
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            api: ApiConfig {
                base_url: "https://api.staging.homestead.example".to_string(),
                request_timeout_secs: 30,
                enable_request_logging: true,
            },
            security: SecurityConfig {
                verify_token_secret: String::new(),
                verify_token_expiry_secs: 5 * 60,
                verify_base_url: "https://staging.homestead.example".to_string(),
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            api: ApiConfig {
                base_url: "https://api.homestead.example".to_string(),
                request_timeout_secs: 15,
                enable_request_logging: false,
            },
            security: SecurityConfig {
                verify_token_secret: String::new(),
                verify_token_expiry_secs: 5 * 60,
                verify_base_url: "https://app.homestead.example".to_string(),
            },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
