use thiserror::Error;

#[derive(Error, Debug)]
pub enum MedideskError {
    #[error("Malformed record in {kind} line {line}: {reason}")]
    Malformed {
        kind: &'static str,
        line: usize,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, MedideskError>;
