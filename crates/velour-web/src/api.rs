use gloo_net::http::Request;
use velour_core::{
    evaluation_settings_url, parse_evaluation_settings, BackendConfig, EvaluationSetting,
    ModelName, VelourError,
};

/// Backend base URL, captured from the environment at build time.
const BACKEND_URL: Option<&str> = option_env!("BACKEND_URL");

pub async fn fetch_evaluation_settings(name: ModelName) -> Result<Vec<EvaluationSetting>, String> {
    let config = BackendConfig::from_build_env(BACKEND_URL).map_err(|e| e.to_string())?;
    let url = evaluation_settings_url(config.base_url(), &name);

    let resp = Request::get(&url)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !resp.ok() {
        return Err(VelourError::Status(resp.status()).to_string());
    }

    let body = resp.text().await.map_err(|e| e.to_string())?;
    parse_evaluation_settings(&body).map_err(|e| e.to_string())
}
