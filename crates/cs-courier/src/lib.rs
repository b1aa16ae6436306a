//! `cs-courier`: the waypoint-traversal engine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`courier`]     | `Courier`: location, pending queue, clock, `advance`  |
//! | [`trajectory`]  | `Trajectory`: lazy per-tick position iterator         |
//! | [`outcome`]     | `TickOutcome`, `LatenessNotice`                       |
//! | [`error`]       | `CourierError`, `CourierResult<T>`                    |
//!
//! # Tick model
//!
//! Each call to [`Courier::advance`] is one tick:
//!
//! ```text
//! clock += step_size
//! at head waypoint?  ── departure not reached ──▶ dwell (no movement)
//!        │ yes, may leave
//!        ▼
//!   pop head; queue empty ──▶ finished
//!        │
//! head overdue? ──▶ lateness notice (motion unchanged)
//!        ▼
//! step step_size * speed along the bearing; snap to head on overshoot
//! ```
//!
//! The part of a tick's travel that overshoots is dropped rather than
//! carried toward the following waypoint.

pub mod courier;
pub mod error;
pub mod outcome;
pub mod trajectory;


pub use courier::Courier;
pub use error::{CourierError, CourierResult};
pub use outcome::{LatenessNotice, TickOutcome};
pub use trajectory::Trajectory;
