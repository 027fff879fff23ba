//! Delivery routing and position tracking over a weighted city network.
//!
//! Cities are connected by undirected links weighted in travel days; some
//! cities host shops. Completing an order resolves the shop-hosting city
//! nearest to the buyer, estimates how long assembling the items there
//! takes, and records the route to the buyer. Position queries later
//! replay that route against a simulated clock to report which city the
//! order currently occupies.

pub mod algorithms;
pub mod directory;
pub mod engine;
pub mod error;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use directory::{CityNetworkStore, InMemoryDirectory, OrderStore, ShopDirectory};
pub use engine::RoutingEngine;
pub use error::RoutingError;
pub use models::{CityId, Days, DeliveryRoute, Order, OrderId, OrderStatus, RoutingResult, Timestamp};
pub use utils::{CityGraph, SimClock};
