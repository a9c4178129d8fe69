use thiserror::Error;

#[derive(Error, Debug)]
pub enum VelourError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Backend returned status {0}")]
    Status(u16),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid evaluation setting {id}: {reason}")]
    InvalidPayload { id: u64, reason: String },

    #[error("Invalid model name: {0:?}")]
    InvalidModelName(String),

    #[error("Column is not sortable: {0}")]
    ColumnNotSortable(&'static str),

    #[error("Column is not filterable: {0}")]
    ColumnNotFilterable(&'static str),

    #[error("Column cannot be hidden: {0}")]
    ColumnNotHideable(&'static str),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, VelourError>;
