//! `cs-fleet`: drives many independent couriers.
//!
//! # Run modes
//!
//! | Method          | Behaviour                                                  |
//! |-----------------|------------------------------------------------------------|
//! | `Fleet::run`    | Each courier runs to completion; returns a [`FleetRun`]    |
//! | `Fleet::step`   | Lock-step: every unfinished courier advances one tick      |
//!
//! Couriers never read each other's state, so run order does not matter.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `Fleet::run` computes trajectories on Rayon's pool.    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cs_core::CourierConfig;
//! use cs_fleet::{FleetBuilder, NoopObserver};
//!
//! let routes = cs_ingest::load_routes_csv(path)?;
//! let mut fleet = FleetBuilder::new(CourierConfig::default()).routes(routes).build()?;
//! let run = fleet.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod fleet;
pub mod observer;
pub mod track;


pub use builder::FleetBuilder;
pub use error::{FleetError, FleetResult};
pub use fleet::Fleet;
pub use observer::{FleetObserver, NoopObserver};
pub use track::{CourierTrack, FleetRun};
