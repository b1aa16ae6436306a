use cs_core::CoreError;
use cs_courier::CourierError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("fleet configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("route for courier {name:?} has no waypoints")]
    EmptyRoute { name: String },

    #[error("courier error: {0}")]
    Courier(#[from] CourierError),
}

pub type FleetResult<T> = Result<T, FleetError>;
