pub mod app;
pub mod errors;
pub mod instruments;
