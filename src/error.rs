use thiserror::Error;

#[derive(Error, Debug)]
pub enum ErgoError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Writing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Solver Error: {0}")]
    Solver(String),

    #[error("Session state poisoned: {0}")]
    StatePoisoned(String),
}

pub type ErgoResult<T> = Result<T, ErgoError>;
