//! Fluent builder for constructing a [`Fleet`].

use cs_core::CourierConfig;
use cs_courier::Courier;
use cs_ingest::CourierRoute;

use crate::{Fleet, FleetError, FleetResult};

/// Fluent builder for [`Fleet`].
///
/// # Example
///
/// ```rust,ignore
/// let mut fleet = FleetBuilder::new(CourierConfig::default())
///     .routes(routes)
///     .build()?;
/// ```
pub struct FleetBuilder {
    config: CourierConfig,
    routes: Vec<CourierRoute>,
}

impl FleetBuilder {
    /// Create a builder; every courier shares `config`.
    pub fn new(config: CourierConfig) -> Self {
        Self { config, routes: Vec::new() }
    }

    /// Append a batch of routes.  `CourierId`s follow insertion order.
    pub fn routes(mut self, routes: impl IntoIterator<Item = CourierRoute>) -> Self {
        self.routes.extend(routes);
        self
    }

    pub fn route(mut self, route: CourierRoute) -> Self {
        self.routes.push(route);
        self
    }

    /// Validate the config and routes and place every courier at its origin.
    pub fn build(self) -> FleetResult<Fleet> {
        self.config.validate()?;

        let mut couriers = Vec::with_capacity(self.routes.len());
        let mut routes   = Vec::with_capacity(self.routes.len());

        for route in self.routes {
            let Some((origin, stops)) = route.waypoints.split_first() else {
                return Err(FleetError::EmptyRoute { name: route.name });
            };
            let mut courier = Courier::new(origin.clone(), &self.config)?
                .with_name(route.name.clone());
            courier.add_waypoints(stops.iter().cloned());
            couriers.push(courier);
            routes.push(route);
        }

        Ok(Fleet::new(self.config, couriers, routes))
    }
}
