// Order progress model: status, dispatch dates, and the stored route

use crate::models::{CityId, DeliveryRoute, RoutingResult, Timestamp};
use serde::{Deserialize, Serialize};

/// Lifecycle state of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Order is still being put together; routing has not happened
    Created,
    /// Order left the nearest city's assembly point and is in transit
    Sent,
    /// Order reached the buyer's city
    Arrived,
}

/// Progress record for one order, owned by the order store.
///
/// The routing fields are `None` while the order is `Created` and are fixed
/// exactly once, on the transition to `Sent`. They are never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// City of the buyer who placed the order
    pub buyer_city: CityId,

    /// Current lifecycle state
    pub status: OrderStatus,

    /// Moment the order was completed and dispatched for assembly
    pub date_sent: Option<Timestamp>,

    /// Moment assembly finishes and transit from the nearest city begins
    pub date_nearest: Option<Timestamp>,

    /// Moment the order reaches the buyer's city
    pub date_arrived: Option<Timestamp>,

    /// Shop-hosting city the order is assembled in
    pub nearest_city: Option<CityId>,

    /// Route from the nearest city to the buyer, kept for position queries
    pub route: Option<DeliveryRoute>,
}

impl Order {
    /// Creates a fresh order for a buyer in the given city
    pub fn new(buyer_city: CityId) -> Self {
        Self {
            buyer_city,
            status: OrderStatus::Created,
            date_sent: None,
            date_nearest: None,
            date_arrived: None,
            nearest_city: None,
            route: None,
        }
    }

    /// Fixes the routing result and dispatch dates on the `Created -> Sent`
    /// transition. `date_nearest` and `date_arrived` are derived from the
    /// assembly and transit estimates and stay immutable afterwards.
    pub fn dispatch(&mut self, routing: RoutingResult, now: Timestamp) {
        let date_nearest = now + Timestamp::from(routing.assembly_days);
        let date_arrived = date_nearest + Timestamp::from(routing.days_to_buyer);

        self.status = OrderStatus::Sent;
        self.date_sent = Some(now);
        self.date_nearest = Some(date_nearest);
        self.date_arrived = Some(date_arrived);
        self.nearest_city = Some(routing.nearest_city);
        self.route = Some(routing.route);
    }

    /// Flips a `Sent` order to `Arrived` once its arrival date has passed
    pub fn refresh_status(&mut self, now: Timestamp) {
        if self.status == OrderStatus::Sent {
            if let Some(arrived) = self.date_arrived {
                if arrived <= now {
                    self.status = OrderStatus::Arrived;
                }
            }
        }
    }

    /// Sent time, `None` while the order is still `Created`
    pub fn sent_time(&self) -> Option<Timestamp> {
        self.date_sent
    }

    /// Received time, `None` until the order has actually arrived
    pub fn received_time(&self) -> Option<Timestamp> {
        match self.status {
            OrderStatus::Arrived => self.date_arrived,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routing_fixture() -> RoutingResult {
        RoutingResult {
            nearest_city: 2,
            days_to_buyer: 5,
            assembly_days: 3,
            route: DeliveryRoute::new(vec![2, 4, 1], vec![3, 2]),
        }
    }

    #[test]
    fn test_dispatch_fixes_dates() {
        let mut order = Order::new(1);
        order.dispatch(routing_fixture(), 10);

        assert_eq!(order.status, OrderStatus::Sent);
        assert_eq!(order.date_sent, Some(10));
        assert_eq!(order.date_nearest, Some(13));
        assert_eq!(order.date_arrived, Some(18));
        assert_eq!(order.nearest_city, Some(2));
    }

    #[test]
    fn test_refresh_status_flips_on_arrival_date() {
        let mut order = Order::new(1);
        order.dispatch(routing_fixture(), 10);

        order.refresh_status(17);
        assert_eq!(order.status, OrderStatus::Sent);

        order.refresh_status(18);
        assert_eq!(order.status, OrderStatus::Arrived);
    }

    #[test]
    fn test_received_time_requires_arrival() {
        let mut order = Order::new(1);
        assert_eq!(order.received_time(), None);

        order.dispatch(routing_fixture(), 0);
        assert_eq!(order.sent_time(), Some(0));
        assert_eq!(order.received_time(), None);

        order.refresh_status(8);
        assert_eq!(order.received_time(), Some(8));
    }

    #[test]
    fn test_created_order_never_flips() {
        let mut order = Order::new(1);
        order.refresh_status(100);

        assert_eq!(order.status, OrderStatus::Created);
    }
}
