// Domain modules
pub mod config;
pub mod error;
pub mod evaluation;
pub mod fetch;
pub mod grid;
pub mod routes;

pub use config::BackendConfig;
pub use error::{Result, VelourError};
pub use evaluation::{parse_evaluation_settings, EvaluationSetting};
pub use fetch::{FetchState, FetchTicket, FetchTracker};
pub use grid::{
    Cell, Column, ColumnId, FilterModel, GridPage, GridRow, GridState, SortDirection, SortModel,
    COLUMNS, PAGE_SIZE,
};
pub use routes::{evaluation_settings_url, health_url, metrics_link, ModelName};
