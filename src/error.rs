use thiserror::Error;

#[derive(Error, Debug)]
pub enum VendingError {
    #[error("Invalid slot: {0}")]
    InvalidSlot(usize),
    #[error("Malformed slot id: {0}")]
    MalformedSlot(String),
    #[error("Invalid coin value: {0}")]
    InvalidCoin(i64),
    #[error("Request body is not a JSON object")]
    BodyNotObject,
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VendingError>;
