// Models module - exports all model types

mod order;
mod route;

// Re-export model types
pub use self::order::{Order, OrderStatus};
pub use self::route::{DeliveryRoute, RoutingResult};

// Common type aliases for improved code readability
pub type CityId = u32;
pub type OrderId = u32;

/// Travel time of a single link, in whole days
pub type Days = u32;

/// Simulated time, counted in whole days since the scenario start
pub type Timestamp = i64;
