use crate::{Result, VelourError};
use std::fmt;

/// A model identifier as taken from the `name` route parameter.
///
/// The backend only stores names built from ASCII letters, digits, `-` and
/// `_`, so anything else can be rejected before a request is made. This also
/// keeps the name safe to splice into a URL path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelName(String);

impl ModelName {
    pub fn parse(raw: &str) -> Result<Self> {
        let valid = !raw.is_empty()
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(VelourError::InvalidModelName(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn evaluation_settings_url(base: &str, name: &ModelName) -> String {
    format!(
        "{}/models/{}/evaluation-settings",
        base.trim_end_matches('/'),
        name
    )
}

pub fn health_url(base: &str) -> String {
    format!("{}/health", base.trim_end_matches('/'))
}

/// Link to the metrics view of one setting, relative to the current route.
pub fn metrics_link(id: u64) -> String {
    format!("evaluation-settings/{}", id)
}
