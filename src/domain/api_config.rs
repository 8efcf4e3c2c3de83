use url::Url;

use crate::domain::AppError;

/// Environment variable overriding the GitHub API base URL.
pub const API_URL_ENV: &str = "GIST_SWEEP_API_URL";

const DEFAULT_API_URL: &str = "https://api.github.com/";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// GitHub API transport configuration.
#[derive(Debug, Clone)]
pub struct GistApiConfig {
    /// GitHub REST API base URL.
    pub api_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GistApiConfig {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("Default API URL must be valid"),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GistApiConfig {
    /// Default configuration with the base URL taken from `GIST_SWEEP_API_URL` when set.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();
        if let Some(raw) = std::env::var(API_URL_ENV).ok().filter(|v| !v.trim().is_empty()) {
            config.api_url = Url::parse(raw.trim()).map_err(|e| {
                AppError::config_error(format!("Invalid {} '{}': {}", API_URL_ENV, raw, e))
            })?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        if self.api_url.cannot_be_a_base() {
            return Err(AppError::config_error(format!(
                "api_url '{}' cannot be used as a base URL",
                self.api_url
            )));
        }
        Ok(())
    }
}
