use std::fmt::Debug;
use std::ops::Deref;

use tracing::trace;

use crate::{Cost, LinkId, RoutingError, UndirectedGraph};

/// Simple path between two stations of a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Route<Station> {
    stations: Vec<Station>,
    links: Vec<LinkId>,
    cost: Cost,
}

impl<Station: Debug + Clone + PartialEq> Route<Station> {
    /// Constructs the route that travels along the stations in order, following the first link
    /// found between each pair of consecutive stations.
    pub(crate) fn from_stations<G>(
        graph: &G,
        stations: Vec<Station>,
    ) -> Result<Self, RoutingError<Station>>
    where
        G: UndirectedGraph<Station = Station>,
    {
        let mut links = Vec::with_capacity(stations.len().saturating_sub(1));
        let mut cost = Cost::ZERO;

        for window in stations.windows(2) {
            let [a, b] = [&window[0], &window[1]];

            let (id, link) = graph
                .find_link(a, b)
                .and_then(|id| graph.get_link(id).map(|link| (id, link)))
                .ok_or_else(|| RoutingError::LinkNotFound(a.clone(), b.clone()))?;

            links.push(id);
            cost += link.cost();
        }

        trace!("Found route {stations:?} ({cost:?})");

        Ok(Self {
            stations,
            links,
            cost,
        })
    }
}

impl<Station> Route<Station> {
    /// Gets the stations of the route, from origin to destination.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Gets the links traversed between consecutive stations.
    pub fn links(&self) -> &[LinkId] {
        &self.links
    }

    /// Gets the total cost of the route, that is the sum of the costs of its links.
    pub const fn cost(&self) -> Cost {
        self.cost
    }

    pub fn origin(&self) -> Option<&Station> {
        self.stations.first()
    }

    pub fn destination(&self) -> Option<&Station> {
        self.stations.last()
    }
}

/// All the routes found by one search, in discovery order.
#[derive(Debug, Clone, PartialEq)]
pub struct Routes<Station>(Vec<Route<Station>>);

impl<Station> From<Vec<Route<Station>>> for Routes<Station> {
    fn from(routes: Vec<Route<Station>>) -> Self {
        Self(routes)
    }
}

impl<Station> Deref for Routes<Station> {
    type Target = Vec<Route<Station>>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<Station> IntoIterator for Routes<Station> {
    type Item = Route<Station>;
    type IntoIter = std::vec::IntoIter<Route<Station>>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<Station> Routes<Station> {
    /// Returns the routes sorted by cost.
    /// The sort is stable: routes with the same cost keep their discovery order.
    pub fn sorted_by_cost(mut self) -> Vec<Route<Station>> {
        self.0.sort_by_key(Route::cost);
        self.0
    }

    /// Gets the route with the lowest cost, the first one found on ties.
    pub fn cheapest(&self) -> Option<&Route<Station>> {
        self.0.iter().min_by_key(|route| route.cost)
    }

    pub fn into_cheapest(self) -> Option<Route<Station>> {
        self.0.into_iter().min_by_key(|route| route.cost)
    }
}
