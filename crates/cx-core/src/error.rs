use thiserror::Error;

pub type CxResult<T> = Result<T, CxError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CxError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid number for {what}: {text:?}")]
    InvalidNumber { what: &'static str, text: String },

    #[error("Missing value for {what}")]
    Missing { what: &'static str },
}
