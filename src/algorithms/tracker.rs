// Position tracking: which city holds an in-transit order right now

use crate::models::{CityId, DeliveryRoute, OrderStatus, Timestamp};

/// Reports the city an order currently occupies, or `None` while the
/// order is still `Created` and has no location at all.
///
/// Rules, in priority order:
/// 1. `Created` orders have no location.
/// 2. `Arrived` orders sit in the buyer's city, whatever the clock says.
/// 3. A `Sent` order before its departure moment is still assembling in
///    the nearest city.
/// 4. Otherwise the elapsed whole days since departure are consumed leg
///    by leg along the route; the order occupies the start city of the
///    first leg it has not fully crossed.
pub fn current_city(
    route: &DeliveryRoute,
    status: OrderStatus,
    date_nearest: Timestamp,
    now: Timestamp,
) -> Option<CityId> {
    match status {
        OrderStatus::Created => None,
        OrderStatus::Arrived => Some(route.destination()),
        OrderStatus::Sent => {
            if now < date_nearest {
                return Some(route.start());
            }
            let elapsed = now - date_nearest;
            Some(position_after(route, elapsed))
        }
    }
}

/// Walks the route from its start, consuming elapsed days against each
/// successive leg. Elapsed time is already truncated to whole days; no
/// fractional position on a leg is modeled.
fn position_after(route: &DeliveryRoute, elapsed_days: Timestamp) -> CityId {
    let mut remaining = elapsed_days;
    let mut position = route.start();

    for (index, &leg) in route.leg_days.iter().enumerate() {
        if Timestamp::from(leg) > remaining {
            break;
        }
        remaining -= Timestamp::from(leg);
        position = route.cities[index + 1];
    }

    position
}
