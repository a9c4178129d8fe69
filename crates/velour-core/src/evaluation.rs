use crate::{Result, VelourError};
use serde::{Deserialize, Serialize};

/// Evaluation settings as served by `/models/{name}/evaluation-settings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSetting {
    pub id: u64,
    #[serde(default)]
    pub model_name: Option<String>,
    pub dataset_name: String,
    pub model_pred_task_type: String,
    pub dataset_gt_task_type: String,
    #[serde(default)]
    pub min_area: Option<f64>,
    #[serde(default)]
    pub max_area: Option<f64>,
}

impl EvaluationSetting {
    pub fn validate(&self) -> Result<()> {
        if self.dataset_name.trim().is_empty() {
            return Err(self.invalid("dataset_name is empty"));
        }

        for (field, value) in [("min_area", self.min_area), ("max_area", self.max_area)] {
            let Some(v) = value else { continue };
            if !v.is_finite() {
                return Err(self.invalid(&format!("{} is not finite", field)));
            }
            if v < 0.0 {
                return Err(self.invalid(&format!("{} is negative", field)));
            }
        }

        if let (Some(min), Some(max)) = (self.min_area, self.max_area) {
            if min > max {
                return Err(self.invalid(&format!("min_area {} exceeds max_area {}", min, max)));
            }
        }

        Ok(())
    }

    fn invalid(&self, reason: &str) -> VelourError {
        VelourError::InvalidPayload {
            id: self.id,
            reason: reason.to_string(),
        }
    }
}

/// Decode a response body and validate every record in it.
pub fn parse_evaluation_settings(body: &str) -> Result<Vec<EvaluationSetting>> {
    let settings: Vec<EvaluationSetting> = serde_json::from_str(body)?;
    for setting in &settings {
        setting.validate()?;
    }
    Ok(settings)
}
