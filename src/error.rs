use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeeTableError {
    #[error("Unknown constant: {0}")]
    UnknownConstant(String),
    #[error("Unknown role: {0}")]
    UnknownRole(String),
    #[error("Constant {name} holds a {actual} value, not {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FeeTableError>;
