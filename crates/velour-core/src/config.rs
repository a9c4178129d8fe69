use crate::{Result, VelourError};
use serde::{Deserialize, Serialize};

pub const BACKEND_URL_VAR: &str = "BACKEND_URL";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

impl BackendConfig {
    /// Build a config from an explicit base URL, rejecting anything that is
    /// not an absolute http(s) URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim().to_string();
        if base_url.is_empty() {
            return Err(VelourError::Config("backend URL is empty".to_string()));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(VelourError::Config(format!(
                "backend URL must start with http:// or https://, got {}",
                base_url
            )));
        }
        Ok(Self { base_url })
    }

    /// Read `BACKEND_URL` from the process environment, falling back to the
    /// default when unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var(BACKEND_URL_VAR) {
            Ok(url) => Self::new(url),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Same as [`BackendConfig::from_env`] but for a value captured at build
    /// time (the browser has no process environment).
    pub fn from_build_env(value: Option<&'static str>) -> Result<Self> {
        value.map(Self::new).unwrap_or_else(|| Ok(Self::default()))
    }

    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        assert_eq!(BackendConfig::default().base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = BackendConfig::new("https://velour.example.com/api/").unwrap();
        assert_eq!(config.base_url(), "https://velour.example.com/api");
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert!(matches!(BackendConfig::new("  "), Err(VelourError::Config(_))));
        assert!(matches!(
            BackendConfig::new("localhost:8000"),
            Err(VelourError::Config(_))
        ));
    }

    #[test]
    fn test_build_env_fallback() {
        assert_eq!(BackendConfig::from_build_env(None).unwrap(), BackendConfig::default());
        let config = BackendConfig::from_build_env(Some("http://backend:8000")).unwrap();
        assert_eq!(config.base_url(), "http://backend:8000");
    }
}
