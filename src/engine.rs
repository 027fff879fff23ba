// Routing engine: ties graph construction, the two relaxation passes,
// path reconstruction, and position tracking to the collaborator stores

use crate::algorithms::{router, tracker};
use crate::directory::{CityNetworkStore, OrderStore, ShopDirectory};
use crate::error::RoutingError;
use crate::models::{CityId, DeliveryRoute, OrderId, OrderStatus, RoutingResult, Timestamp};
use crate::utils::CityGraph;
use tracing::{debug, info};

/// Delivery routing and position-tracking engine.
///
/// The collaborator stores are injected at construction; the engine keeps
/// no other state. Every routing computation builds its graph fresh from
/// the store's current link list.
pub struct RoutingEngine<D> {
    directory: D,
}

impl<D> RoutingEngine<D>
where
    D: CityNetworkStore + ShopDirectory + OrderStore,
{
    /// Creates an engine over the injected collaborator stores
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    /// Shared access to the underlying stores
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Mutable access to the underlying stores
    pub fn directory_mut(&mut self) -> &mut D {
        &mut self.directory
    }

    /// Computes the full routing result for an order bought from
    /// `buyer_city`: nearest supplying city, transit estimate, assembly
    /// estimate, and the route from the nearest city to the buyer.
    pub fn resolve_routing(
        &self,
        buyer_city: CityId,
        order: OrderId,
    ) -> Result<RoutingResult, RoutingError> {
        let graph = CityGraph::build(self.directory.cities(), self.directory.links())?;

        // Phase one: relax from the buyer, keeping the closest shop city
        let nearest =
            router::resolve_nearest_shop(&graph, buyer_city, |city| self.directory.hosts_shop(city))?;

        // Phase two: relax from the nearest city over the supplying cities
        let supplying = self.directory.supplying_cities(order);
        let assembly_days = router::estimate_assembly_days(&graph, nearest.city, &supplying)?;

        let cities = router::reconstruct_path(&nearest.paths, nearest.city, graph.city_count())?;
        let route = attach_leg_days(&graph, cities)?;

        debug!(
            order,
            buyer_city,
            nearest_city = nearest.city,
            days_to_buyer = nearest.days,
            assembly_days,
            "routing resolved"
        );

        Ok(RoutingResult {
            nearest_city: nearest.city,
            days_to_buyer: nearest.days,
            assembly_days,
            route,
        })
    }

    /// Completes a pending order: runs routing, stamps the dispatch dates,
    /// stores the route on the order record, and flips it to sent.
    pub fn complete_order(&mut self, order: OrderId, now: Timestamp) -> Result<(), RoutingError> {
        let record = self
            .directory
            .order(order)
            .ok_or(RoutingError::UnknownOrder(order))?;
        if record.status != OrderStatus::Created {
            return Err(RoutingError::OrderNotPending(order));
        }
        if self.directory.supplying_cities(order).is_empty() {
            return Err(RoutingError::EmptyOrder(order));
        }

        let buyer_city = record.buyer_city;
        let routing = self.resolve_routing(buyer_city, order)?;

        info!(
            order,
            nearest_city = routing.nearest_city,
            assembly_days = routing.assembly_days,
            days_to_buyer = routing.days_to_buyer,
            "order dispatched"
        );

        let record = self
            .directory
            .order_mut(order)
            .ok_or(RoutingError::UnknownOrder(order))?;
        record.dispatch(routing, now);
        Ok(())
    }

    /// Reports the city currently holding the order, or `None` for an
    /// order still in the created state.
    pub fn current_location(
        &self,
        order: OrderId,
        now: Timestamp,
    ) -> Result<Option<CityId>, RoutingError> {
        let record = self
            .directory
            .order(order)
            .ok_or(RoutingError::UnknownOrder(order))?;

        if record.status == OrderStatus::Created {
            return Ok(None);
        }

        // A sent or arrived order must carry its routing data
        let route = record
            .route
            .as_ref()
            .ok_or(RoutingError::MissingRoute(order))?;
        let date_nearest = record
            .date_nearest
            .ok_or(RoutingError::MissingRoute(order))?;

        Ok(tracker::current_city(route, record.status, date_nearest, now))
    }

    /// Flips every sent order whose arrival date has passed. The driver
    /// calls this after advancing its clock.
    pub fn refresh_statuses(&mut self, now: Timestamp) {
        debug!(now, "refreshing order statuses");
        self.directory.refresh_statuses(now);
    }
}

/// Pairs each consecutive city in the path with the weight of the link
/// between them. The path follows predecessor links, so every pair is
/// connected; a missing link means the predecessor map was corrupt.
fn attach_leg_days(graph: &CityGraph, cities: Vec<CityId>) -> Result<DeliveryRoute, RoutingError> {
    let mut leg_days = Vec::with_capacity(cities.len().saturating_sub(1));

    for pair in cities.windows(2) {
        let days = graph
            .link_days(pair[0], pair[1])
            .ok_or(RoutingError::PathReconstructionFailure {
                nearest: cities[0],
                buyer: cities[cities.len() - 1],
            })?;
        leg_days.push(days);
    }

    Ok(DeliveryRoute::new(cities, leg_days))
}
