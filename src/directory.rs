// External collaborator interfaces and an in-memory implementation

use crate::models::{CityId, Days, Order, OrderId, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Supplies the full city set and the undirected weighted links between them
pub trait CityNetworkStore {
    /// All city ids in the network
    fn cities(&self) -> Vec<CityId>;

    /// All links as (city, city, travel days) triples, one per unordered pair
    fn links(&self) -> Vec<(CityId, CityId, Days)>;
}

/// Reports shop presence per city
pub trait ShopDirectory {
    /// Whether the city hosts at least one shop
    fn hosts_shop(&self, city: CityId) -> bool;
}

/// Owns order progress records and the supplying-city relation
pub trait OrderStore {
    /// Progress record of an order, if it exists
    fn order(&self, id: OrderId) -> Option<&Order>;

    /// Mutable progress record of an order, if it exists
    fn order_mut(&mut self, id: OrderId) -> Option<&mut Order>;

    /// Distinct cities of the shops fulfilling the order's line items
    fn supplying_cities(&self, id: OrderId) -> Vec<CityId>;

    /// Flips every sent order whose arrival date has passed to arrived
    fn refresh_statuses(&mut self, now: Timestamp);
}

/// In-memory world backing all three collaborator interfaces.
///
/// Routes live on the order records themselves, so a serialized snapshot
/// of the directory carries everything position queries need.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryDirectory {
    cities: BTreeSet<CityId>,
    links: Vec<(CityId, CityId, Days)>,
    shop_cities: BTreeSet<CityId>,
    orders: BTreeMap<OrderId, Order>,
    supplies: BTreeMap<OrderId, BTreeSet<CityId>>,
    next_order_id: OrderId,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a city
    pub fn add_city(&mut self, city: CityId) {
        self.cities.insert(city);
    }

    /// Registers an undirected link between two cities
    pub fn add_link(&mut self, a: CityId, b: CityId, days: Days) {
        self.links.push((a, b, days));
    }

    /// Marks a city as hosting a shop
    pub fn add_shop(&mut self, city: CityId) {
        self.shop_cities.insert(city);
    }

    /// Creates a fresh order for a buyer in the given city
    pub fn place_order(&mut self, buyer_city: CityId) -> OrderId {
        self.next_order_id += 1;
        let id = self.next_order_id;
        self.orders.insert(id, Order::new(buyer_city));
        id
    }

    /// Records that a shop in `city` supplies one of the order's items
    pub fn add_supply(&mut self, order: OrderId, city: CityId) {
        self.supplies.entry(order).or_default().insert(city);
    }
}

impl CityNetworkStore for InMemoryDirectory {
    fn cities(&self) -> Vec<CityId> {
        self.cities.iter().copied().collect()
    }

    fn links(&self) -> Vec<(CityId, CityId, Days)> {
        self.links.clone()
    }
}

impl ShopDirectory for InMemoryDirectory {
    fn hosts_shop(&self, city: CityId) -> bool {
        self.shop_cities.contains(&city)
    }
}

impl OrderStore for InMemoryDirectory {
    fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id)
    }

    fn order_mut(&mut self, id: OrderId) -> Option<&mut Order> {
        self.orders.get_mut(&id)
    }

    fn supplying_cities(&self, id: OrderId) -> Vec<CityId> {
        self.supplies
            .get(&id)
            .map(|cities| cities.iter().copied().collect())
            .unwrap_or_default()
    }

    fn refresh_statuses(&mut self, now: Timestamp) {
        for order in self.orders.values_mut() {
            order.refresh_status(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeliveryRoute, OrderStatus, RoutingResult};

    #[test]
    fn test_supplying_cities_are_distinct() {
        let mut directory = InMemoryDirectory::new();
        let order = directory.place_order(1);
        directory.add_supply(order, 3);
        directory.add_supply(order, 3);
        directory.add_supply(order, 2);

        assert_eq!(directory.supplying_cities(order), vec![2, 3]);
    }

    #[test]
    fn test_unknown_order_has_no_supplies() {
        let directory = InMemoryDirectory::new();

        assert!(directory.supplying_cities(42).is_empty());
        assert!(directory.order(42).is_none());
    }

    #[test]
    fn test_refresh_statuses_flips_due_orders() {
        let mut directory = InMemoryDirectory::new();
        let due = directory.place_order(1);
        let pending = directory.place_order(1);

        let routing = RoutingResult {
            nearest_city: 2,
            days_to_buyer: 2,
            assembly_days: 1,
            route: DeliveryRoute::new(vec![2, 1], vec![2]),
        };
        directory.order_mut(due).unwrap().dispatch(routing.clone(), 0);
        directory.order_mut(pending).unwrap().dispatch(routing, 5);

        directory.refresh_statuses(3);

        assert_eq!(directory.order(due).unwrap().status, OrderStatus::Arrived);
        assert_eq!(directory.order(pending).unwrap().status, OrderStatus::Sent);
    }
}
