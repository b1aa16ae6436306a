use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("route CSV parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type IngestResult<T> = Result<T, IngestError>;
