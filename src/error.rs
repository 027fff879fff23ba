// Error taxonomy for routing and position tracking

use crate::models::{CityId, OrderId};
use thiserror::Error;

/// Failures surfaced by routing computation and position queries.
///
/// Nothing here is retried internally; every failure propagates to the
/// caller, which decides whether to rerun the whole completion workflow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// No shop-hosting city is reachable from the buyer's city
    #[error("no shop-hosting city is reachable from city {0}")]
    NoSupplierReachable(CityId),

    /// A supplying city cannot be reached from the resolved nearest city
    #[error("supplying city {city} is unreachable from nearest city {nearest}")]
    IncompleteNetwork { city: CityId, nearest: CityId },

    /// Predecessor walk failed to reach the buyer's city
    #[error("predecessor chain from city {nearest} does not terminate at city {buyer}")]
    PathReconstructionFailure { nearest: CityId, buyer: CityId },

    /// Position query against an order whose route was never stored
    #[error("order {0} is past creation but has no stored route")]
    MissingRoute(OrderId),

    /// More than one link supplied for the same unordered city pair
    #[error("duplicate link between cities {0} and {1}")]
    DuplicateLink(CityId, CityId),

    /// City id absent from the network's city set
    #[error("city {0} is not part of the network")]
    UnknownCity(CityId),

    /// Order id absent from the order store
    #[error("order {0} does not exist")]
    UnknownOrder(OrderId),

    /// Completion attempted on an order that already left the created state
    #[error("order {0} is not pending completion")]
    OrderNotPending(OrderId),

    /// Completion attempted on an order with no supplying cities
    #[error("order {0} has no supplying cities")]
    EmptyOrder(OrderId),
}
