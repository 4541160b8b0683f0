use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigsError {
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
}
