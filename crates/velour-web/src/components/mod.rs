pub mod data_grid;
pub mod wrapper;
