pub mod selectors;

#[cfg(feature = "otlp")]
pub mod otlp;

#[cfg(feature = "stdout")]
pub mod stdout;
