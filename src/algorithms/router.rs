// Two-phase shortest-path routing: nearest supplier resolution, assembly
// time estimation, and path reconstruction

use crate::error::RoutingError;
use crate::models::{CityId, Days};
use crate::utils::CityGraph;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Frontier entry for the relaxation heap
#[derive(Copy, Clone, Eq, PartialEq)]
struct FrontierNode {
    city: CityId,
    days: Days,
}

// Reversed order so the BinaryHeap acts as a min-heap. Equal distances
// pop in ascending city id, which keeps the visitation order deterministic.
impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .days
            .cmp(&self.days)
            .then_with(|| other.city.cmp(&self.city))
    }
}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-source shortest-path result over the full city set.
///
/// Cities unreachable from the source simply have no recorded distance.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: CityId,
    days: HashMap<CityId, Days>,
    predecessor: HashMap<CityId, CityId>,
}

impl ShortestPaths {
    /// City the relaxation was rooted at
    pub fn source(&self) -> CityId {
        self.source
    }

    /// Minimum travel days from the source, `None` if unreachable
    pub fn days_to(&self, city: CityId) -> Option<Days> {
        if city == self.source {
            return Some(0);
        }
        self.days.get(&city).copied()
    }

    /// Previous city on the shortest path from the source to `city`
    pub fn predecessor(&self, city: CityId) -> Option<CityId> {
        self.predecessor.get(&city).copied()
    }
}

/// Runs a single-source relaxation from `source` over the whole graph,
/// recording minimum distance and predecessor for every reachable city.
pub fn relax_from(graph: &CityGraph, source: CityId) -> ShortestPaths {
    let mut days: HashMap<CityId, Days> = HashMap::new();
    let mut predecessor: HashMap<CityId, CityId> = HashMap::new();
    let mut settled: HashSet<CityId> = HashSet::new();
    let mut frontier = BinaryHeap::new();

    days.insert(source, 0);
    frontier.push(FrontierNode {
        city: source,
        days: 0,
    });

    while let Some(FrontierNode { city, days: dist }) = frontier.pop() {
        // Stale heap entry for an already settled city
        if settled.contains(&city) {
            continue;
        }
        settled.insert(city);

        for &(neighbor, link_days) in graph.neighbors(city) {
            if settled.contains(&neighbor) {
                continue;
            }

            let through_current = dist + link_days;
            let improves = match days.get(&neighbor) {
                Some(&known) => through_current < known,
                None => true,
            };

            if improves {
                days.insert(neighbor, through_current);
                predecessor.insert(neighbor, city);
                frontier.push(FrontierNode {
                    city: neighbor,
                    days: through_current,
                });
            }
        }
    }

    days.remove(&source);
    ShortestPaths {
        source,
        days,
        predecessor,
    }
}

/// Outcome of nearest-supplier resolution
#[derive(Debug, Clone)]
pub struct NearestShop {
    /// Shop-hosting city with minimum distance from the buyer
    pub city: CityId,

    /// Minimum travel days from the buyer's city
    pub days: Days,

    /// Buyer-rooted relaxation, kept for path reconstruction
    pub paths: ShortestPaths,
}

/// Finds the shop-hosting city nearest to the buyer's city.
///
/// If the buyer's own city hosts a shop it wins outright at distance 0.
/// Otherwise every city reachable from the buyer is examined; distance
/// ties between shop-hosting cities break to the smallest city id.
pub fn resolve_nearest_shop(
    graph: &CityGraph,
    buyer_city: CityId,
    hosts_shop: impl Fn(CityId) -> bool,
) -> Result<NearestShop, RoutingError> {
    if !graph.contains(buyer_city) {
        return Err(RoutingError::UnknownCity(buyer_city));
    }

    // A shop in the buyer's own city wins outright; no relaxation is
    // needed and the route collapses to the buyer city alone
    if hosts_shop(buyer_city) {
        return Ok(NearestShop {
            city: buyer_city,
            days: 0,
            paths: ShortestPaths {
                source: buyer_city,
                days: HashMap::new(),
                predecessor: HashMap::new(),
            },
        });
    }

    let paths = relax_from(graph, buyer_city);

    let mut nearest: Option<(CityId, Days)> = None;
    for city in graph.cities() {
        if !hosts_shop(city) {
            continue;
        }
        if let Some(days) = paths.days_to(city) {
            // Strict comparison: the first city at minimal distance in
            // ascending id order is retained
            let closer = match nearest {
                Some((_, best)) => days < best,
                None => true,
            };
            if closer {
                nearest = Some((city, days));
            }
        }
    }

    match nearest {
        Some((city, days)) => {
            tracing::debug!(buyer_city, nearest_city = city, days, "resolved nearest shop");
            Ok(NearestShop { city, days, paths })
        }
        None => Err(RoutingError::NoSupplierReachable(buyer_city)),
    }
}

/// Estimates how long assembling the order at the nearest city takes:
/// the longest min-distance from the nearest city to any supplying city.
/// The nearest city itself contributes 0.
pub fn estimate_assembly_days(
    graph: &CityGraph,
    nearest_city: CityId,
    supplying_cities: &[CityId],
) -> Result<Days, RoutingError> {
    let from_nearest = relax_from(graph, nearest_city);
    let mut max_days = 0;

    for &city in supplying_cities {
        if city == nearest_city {
            continue;
        }
        match from_nearest.days_to(city) {
            Some(days) => max_days = max_days.max(days),
            // A shop actually used by the order must be connected
            None => {
                return Err(RoutingError::IncompleteNetwork {
                    city,
                    nearest: nearest_city,
                })
            }
        }
    }

    Ok(max_days)
}

/// Walks predecessor links from the nearest city back to the buyer's city,
/// producing the ordered route between them (both endpoints included).
pub fn reconstruct_path(
    paths: &ShortestPaths,
    nearest_city: CityId,
    city_count: usize,
) -> Result<Vec<CityId>, RoutingError> {
    let buyer_city = paths.source();
    let mut route = Vec::new();
    let mut current = nearest_city;

    // The chain must terminate within |cities| steps or the map is corrupt
    for _ in 0..city_count {
        if current == buyer_city {
            route.push(buyer_city);
            return Ok(route);
        }
        route.push(current);
        current = match paths.predecessor(current) {
            Some(previous) => previous,
            None => break,
        };
    }

    Err(RoutingError::PathReconstructionFailure {
        nearest: nearest_city,
        buyer: buyer_city,
    })
}
