mod errors;
mod logger;

pub use errors::LoggingError;
pub use logger::setup;
