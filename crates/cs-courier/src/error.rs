use cs_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CourierError {
    #[error("invalid courier parameters: {0}")]
    Config(#[from] CoreError),
}

pub type CourierResult<T> = Result<T, CourierError>;
