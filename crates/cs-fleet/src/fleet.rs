//! The `Fleet` struct and its run loops.

use cs_core::{CourierConfig, CourierId, Point};
use cs_courier::Courier;
use cs_ingest::CourierRoute;
use tracing::info;

use crate::{CourierTrack, FleetObserver, FleetRun};

/// A set of independent couriers sharing one [`CourierConfig`].
///
/// Create via [`FleetBuilder`][crate::FleetBuilder].  Couriers are indexed
/// by [`CourierId`] in route order.
pub struct Fleet {
    config:   CourierConfig,
    couriers: Vec<Courier>,
    /// Input routes, kept for static waypoint markers.
    routes:   Vec<CourierRoute>,
    /// Lock-step ticks taken via [`step`][Self::step].
    tick:     u64,
}

impl Fleet {
    pub(crate) fn new(config: CourierConfig, couriers: Vec<Courier>, routes: Vec<CourierRoute>) -> Self {
        Self { config, couriers, routes, tick: 0 }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &CourierConfig {
        &self.config
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.couriers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.couriers.is_empty()
    }

    pub fn courier(&self, id: CourierId) -> Option<&Courier> {
        self.couriers.get(id.index())
    }

    pub fn couriers(&self) -> &[Courier] {
        &self.couriers
    }

    /// Lock-step ticks taken so far.
    #[inline]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Current location of every courier in `CourierId` order.
    pub fn positions(&self) -> Vec<Point> {
        self.couriers.iter().map(Courier::location).collect()
    }

    /// Number of couriers that still have waypoints queued.
    pub fn active(&self) -> usize {
        self.couriers.iter().filter(|c| !c.is_finished()).count()
    }

    // ── Lock-step mode ────────────────────────────────────────────────────

    /// Advance every unfinished courier by one tick.
    ///
    /// Returns how many couriers are still active afterwards.  Finished
    /// couriers are not advanced, so their clocks stop with them.
    pub fn step(&mut self) -> usize {
        for courier in self.couriers.iter_mut().filter(|c| !c.is_finished()) {
            courier.advance();
        }
        self.tick += 1;
        self.active()
    }

    // ── Batch mode ────────────────────────────────────────────────────────

    /// Run every courier to completion.
    ///
    /// Trajectories start from each courier's current state; call on a
    /// freshly built fleet for full trajectories.
    pub fn run<O: FleetObserver>(&mut self, observer: &mut O) -> FleetRun {
        observer.on_run_start(self.couriers.len());

        let trajectories = self.compute_trajectories();

        let tracks: Vec<CourierTrack> = self
            .couriers
            .iter()
            .zip(&self.routes)
            .zip(trajectories)
            .enumerate()
            .map(|(i, ((courier, route), trajectory))| CourierTrack {
                id:        CourierId(i as u32),
                name:      route.name.clone(),
                waypoints: route.waypoints.clone(),
                trajectory,
                lateness:  courier.lateness().to_vec(),
            })
            .collect();

        for track in &tracks {
            observer.on_courier_done(track);
        }

        let run = FleetRun { tracks };
        info!(
            couriers = run.len(),
            frames   = run.frame_count(),
            late     = run.tracks.iter().filter(|t| !t.lateness.is_empty()).count(),
            "fleet run complete"
        );
        observer.on_run_end(&run);
        run
    }

    /// Drain every courier's trajectory.  With the `parallel` feature each
    /// courier runs on Rayon's pool; order of the output is unchanged.
    fn compute_trajectories(&mut self) -> Vec<Vec<Point>> {
        #[cfg(not(feature = "parallel"))]
        {
            self.couriers.iter_mut().map(Courier::collect_trajectory).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.couriers.par_iter_mut().map(Courier::collect_trajectory).collect()
        }
    }
}
