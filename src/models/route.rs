// Route models for delivery paths and per-order routing results

use crate::models::{CityId, Days};
use serde::{Deserialize, Serialize};

/// An ordered route from the nearest shop-hosting city to the buyer's city.
///
/// Both endpoints are included, so a route always holds at least one city.
/// The leg weights are stored next to the path because position queries
/// happen long after routing, when the graph is no longer around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRoute {
    /// Cities visited, from nearest city to buyer city
    pub cities: Vec<CityId>,

    /// Travel days of each leg; `leg_days[i]` connects `cities[i]` and `cities[i + 1]`
    pub leg_days: Vec<Days>,
}

impl DeliveryRoute {
    /// Creates a route from a city sequence and its leg weights.
    ///
    /// Invariant: `leg_days.len() + 1 == cities.len()`.
    pub fn new(cities: Vec<CityId>, leg_days: Vec<Days>) -> Self {
        debug_assert_eq!(cities.len(), leg_days.len() + 1);
        Self { cities, leg_days }
    }

    /// City the route starts from (the nearest shop-hosting city)
    pub fn start(&self) -> CityId {
        self.cities[0]
    }

    /// City the route ends at (the buyer's city)
    pub fn destination(&self) -> CityId {
        self.cities[self.cities.len() - 1]
    }

    /// Total travel days over all legs
    pub fn total_days(&self) -> Days {
        self.leg_days.iter().sum()
    }
}

/// Everything routing computes for one order completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingResult {
    /// Shop-hosting city with the minimum travel distance from the buyer
    pub nearest_city: CityId,

    /// Minimum travel days from the buyer's city to the nearest city
    pub days_to_buyer: Days,

    /// Longest min-distance from the nearest city to any supplying city
    pub assembly_days: Days,

    /// Route from the nearest city to the buyer's city
    pub route: DeliveryRoute,
}
