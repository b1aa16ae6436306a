//! `cs-ingest`: turns order CSVs into per-courier waypoint routes.
//!
//! # Crate layout
//!
//! | Module      | Contents                                        |
//! |-------------|-------------------------------------------------|
//! | [`route`]   | `CourierRoute`: a named, ordered waypoint list  |
//! | [`loader`]  | `load_routes_csv`, `load_routes_reader`         |
//! | [`error`]   | `IngestError`, `IngestResult<T>`                |

pub mod error;
pub mod loader;
pub mod route;

#[cfg(test)]
mod tests;

pub use error::{IngestError, IngestResult};
pub use loader::{load_routes_csv, load_routes_reader};
pub use route::CourierRoute;
