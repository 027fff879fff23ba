// City network graph built from an undirected weighted link list

use crate::error::RoutingError;
use crate::models::{CityId, Days};
use std::collections::{BTreeSet, HashMap};

/// In-memory adjacency view of the city network.
///
/// Built once per routing request from the link list the city store
/// supplies. Every link is symmetric: it contributes an entry under both
/// endpoints with the same weight.
#[derive(Debug, Clone)]
pub struct CityGraph {
    cities: BTreeSet<CityId>,
    adjacency: HashMap<CityId, Vec<(CityId, Days)>>,
}

impl CityGraph {
    /// Builds the adjacency mapping from the full city set and link list.
    ///
    /// At most one link is permitted per unordered city pair; a duplicate
    /// (in either orientation) is rejected, as is a link touching a city
    /// outside the registered set.
    pub fn build(
        cities: impl IntoIterator<Item = CityId>,
        links: impl IntoIterator<Item = (CityId, CityId, Days)>,
    ) -> Result<Self, RoutingError> {
        let cities: BTreeSet<CityId> = cities.into_iter().collect();
        let mut adjacency: HashMap<CityId, Vec<(CityId, Days)>> = HashMap::new();
        let mut seen: BTreeSet<(CityId, CityId)> = BTreeSet::new();

        for (a, b, days) in links {
            for endpoint in [a, b] {
                if !cities.contains(&endpoint) {
                    return Err(RoutingError::UnknownCity(endpoint));
                }
            }

            let pair = if a <= b { (a, b) } else { (b, a) };
            if !seen.insert(pair) {
                return Err(RoutingError::DuplicateLink(pair.0, pair.1));
            }

            // Undirected: register the link under both endpoints
            adjacency.entry(a).or_default().push((b, days));
            adjacency.entry(b).or_default().push((a, days));
        }

        Ok(Self { cities, adjacency })
    }

    /// All cities in the network, in ascending id order
    pub fn cities(&self) -> impl Iterator<Item = CityId> + '_ {
        self.cities.iter().copied()
    }

    /// Number of cities in the network
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Whether the city belongs to the network
    pub fn contains(&self, city: CityId) -> bool {
        self.cities.contains(&city)
    }

    /// Neighbors of a city with the travel days of the connecting link
    pub fn neighbors(&self, city: CityId) -> &[(CityId, Days)] {
        self.adjacency.get(&city).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Travel days of the link between two cities, if one exists
    pub fn link_days(&self, a: CityId, b: CityId) -> Option<Days> {
        self.neighbors(a)
            .iter()
            .find(|(neighbor, _)| *neighbor == b)
            .map(|(_, days)| *days)
    }
}
