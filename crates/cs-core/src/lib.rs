//! `cs-core`: foundational types for the `courier_sim` workspace.
//!
//! This crate is a dependency of every other `cs-*` crate.  It has no
//! `cs-*` dependencies and only `thiserror` (plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`geo`]     | `Point`, `WayPoint`, overshoot detection              |
//! | [`ids`]     | `CourierId`                                           |
//! | [`config`]  | `CourierConfig` (step size, speed)                    |
//! | [`error`]   | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::CourierConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{Point, WayPoint};
pub use ids::CourierId;
