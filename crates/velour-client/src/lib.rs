use tracing::{debug, warn};
use velour_core::{
    evaluation_settings_url, health_url, parse_evaluation_settings, BackendConfig,
    EvaluationSetting, ModelName, Result, VelourError,
};

#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    client: reqwest::Client,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new(config.base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn evaluation_settings(&self, name: &ModelName) -> Result<Vec<EvaluationSetting>> {
        let url = evaluation_settings_url(&self.base_url, name);
        debug!(%url, "fetching evaluation settings");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| VelourError::Http(e.to_string()))?;

        if !resp.status().is_success() {
            warn!(%url, status = %resp.status(), "evaluation settings request failed");
            return Err(VelourError::Status(resp.status().as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| VelourError::Http(e.to_string()))?;

        parse_evaluation_settings(&body)
    }

    pub async fn health(&self) -> Result<()> {
        let resp = self
            .client
            .get(health_url(&self.base_url))
            .send()
            .await
            .map_err(|e| VelourError::Http(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(VelourError::Status(resp.status().as_u16()));
        }
        Ok(())
    }
}
