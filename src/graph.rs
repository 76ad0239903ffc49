use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::Cost;

mod map;

pub use map::RouteMap;

/// Identifies a link by its position in the insertion order of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkId(pub usize);

/// Undirected link between two stations.
/// A link may connect a station to itself, such a link can never be part of a route.
#[derive(Debug, Clone, PartialEq)]
pub struct Link<Station> {
    stations: [Station; 2],
    cost: Cost,
}

impl<Station> Link<Station> {
    pub const fn new(a: Station, b: Station, cost: Cost) -> Self {
        Self {
            stations: [a, b],
            cost,
        }
    }

    pub const fn stations(&self) -> &[Station; 2] {
        &self.stations
    }

    pub const fn cost(&self) -> Cost {
        self.cost
    }
}

impl<Station: PartialEq> Link<Station> {
    /// Returns true if either end of the link is the given station.
    pub fn connects(&self, station: &Station) -> bool {
        let [a, b] = &self.stations;
        a == station || b == station
    }

    /// Returns true if the link connects the two stations, regardless of their order.
    pub fn is_between(&self, a: &Station, b: &Station) -> bool {
        let [s1, s2] = &self.stations;
        (s1 == a && s2 == b) || (s1 == b && s2 == a)
    }

    /// Gets the station at the opposite end of the link.
    /// The station is expected to be one of the link ends, otherwise the first end is returned.
    pub fn other_station(&self, station: &Station) -> &Station {
        let [a, b] = &self.stations;
        if a == station { b } else { a }
    }
}

/// A link without cost takes no time to travel.
impl<Station> From<(Station, Station)> for Link<Station> {
    fn from((a, b): (Station, Station)) -> Self {
        Self::new(a, b, Cost::ZERO)
    }
}

impl<Station> From<(Station, Station, Cost)> for Link<Station> {
    fn from((a, b, cost): (Station, Station, Cost)) -> Self {
        Self::new(a, b, cost)
    }
}

/// Undirected weighted graph of stations.
/// Exposes the adjacency queries the route finder runs on.
pub trait UndirectedGraph {
    /// Uniquely identify a station that belongs to the graph.
    type Station: Debug + Clone + Eq + Hash;

    /// Gets the link with the given ID, or None if the link doesn't belong to the graph.
    fn get_link(&self, link: LinkId) -> Option<&Link<Self::Station>>;

    /// Gets an iterator over all the links that have the station at either end, in insertion
    /// order. Returns an empty iterator if the station doesn't belong to the graph.
    fn links_of(&self, station: &Self::Station) -> impl Iterator<Item = LinkId>;

    /// Gets the distinct stations at the other end of the links of the station, in the order
    /// they are first seen. A station linked to itself is its own neighbor.
    fn neighbors(&self, station: &Self::Station) -> Vec<Self::Station> {
        let mut seen = FxHashSet::default();

        self.links_of(station)
            .filter_map(|link| self.get_link(link))
            .map(|link| link.other_station(station))
            .filter(|&neighbor| seen.insert(neighbor))
            .cloned()
            .collect()
    }

    /// Gets the first link (in insertion order) that connects the two stations.
    /// When parallel links exist the same one is always returned.
    fn find_link(&self, a: &Self::Station, b: &Self::Station) -> Option<LinkId> {
        self.links_of(a).find(|&link| {
            self.get_link(link)
                .is_some_and(|link| link.other_station(a) == b)
        })
    }
}
