//! Route finder.
//!
//! Routes are enumerated by an exhaustive depth-first search over the simple paths of the graph:
//!
//! 1. Keep the stations already visited on the current path, starting from the origin.
//! 2. The candidates are the neighbors of the last visited station that were not visited yet.
//! 3. If the destination is a candidate record the route that ends there.
//! 4. Keep searching from every candidate, the destination included, each branch with its own
//!    copy of the visited stations.
//!
//! The search space is finite since every branch visits one more station than its parent.
//! There is no memoization and no deduplication, the number of routes grows exponentially
//! with the size of the graph.

mod route;

use tracing::debug;

pub use route::{Route, Routes};

use crate::{Cost, RoutingError, UndirectedGraph};

/// Limits of the route search.
/// The default configuration doesn't limit the search.
#[derive(Debug, Clone, Copy)]
pub struct RoutingConfig {
    /// Maximum number of stations of a route, origin and destination included.
    pub max_stations: usize,
    /// Maximum total cost of a route. Pruning on cost assumes links have non-negative costs.
    pub max_cost: Cost,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            max_stations: usize::MAX,
            max_cost: Cost::MAX,
        }
    }
}

/// Returns all the simple paths from origin to destination, in depth-first discovery order.
/// Returns no route if the stations are not connected or if they are the same station.
pub fn routes<G: UndirectedGraph>(
    graph: &G,
    origin: &G::Station,
    destination: &G::Station,
) -> Result<Routes<G::Station>, RoutingError<G::Station>> {
    routes_with_config(&RoutingConfig::default(), graph, origin, destination)
}

/// Returns the route with the lowest cost from origin to destination, or None if there is no
/// route. When more routes have the same lowest cost the first one discovered is returned.
pub fn route<G: UndirectedGraph>(
    graph: &G,
    origin: &G::Station,
    destination: &G::Station,
) -> Result<Option<Route<G::Station>>, RoutingError<G::Station>> {
    route_with_config(&RoutingConfig::default(), graph, origin, destination)
}

/// Same as [`routes`] but only the routes within the configured limits are returned.
pub fn routes_with_config<G: UndirectedGraph>(
    config: &RoutingConfig,
    graph: &G,
    origin: &G::Station,
    destination: &G::Station,
) -> Result<Routes<G::Station>, RoutingError<G::Station>> {
    debug!("Enumerating routes {origin:?} -> {destination:?} with {config:?}");

    let search = Search {
        config,
        graph,
        destination,
    };

    let mut routes = vec![];
    search.explore(vec![origin.clone()], Cost::ZERO, &mut routes)?;

    debug!("Found {} routes {origin:?} -> {destination:?}", routes.len());
    Ok(Routes::from(routes))
}

/// Same as [`route`] but only the routes within the configured limits are considered.
pub fn route_with_config<G: UndirectedGraph>(
    config: &RoutingConfig,
    graph: &G,
    origin: &G::Station,
    destination: &G::Station,
) -> Result<Option<Route<G::Station>>, RoutingError<G::Station>> {
    let route = routes_with_config(config, graph, origin, destination)?.into_cheapest();

    match &route {
        Some(route) => debug!("Cheapest route {:?} ({:?})", route.stations(), route.cost()),
        None => debug!("No route {origin:?} -> {destination:?}"),
    }

    Ok(route)
}

struct Search<'a, G: UndirectedGraph> {
    config: &'a RoutingConfig,
    graph: &'a G,
    destination: &'a G::Station,
}

impl<G: UndirectedGraph> Search<'_, G> {
    /// Records the routes that extend the visited stations up to the destination.
    /// The cost is the total cost of the links between the visited stations.
    fn explore(
        &self,
        visited: Vec<G::Station>,
        cost: Cost,
        routes: &mut Vec<Route<G::Station>>,
    ) -> Result<(), RoutingError<G::Station>> {
        let Some(current) = visited.last() else {
            return Ok(());
        };

        let candidates: Vec<G::Station> = self
            .graph
            .neighbors(current)
            .into_iter()
            .filter(|station| !visited.contains(station))
            .collect();

        let stations_count = visited.len() + 1;

        if stations_count <= self.config.max_stations && candidates.contains(self.destination) {
            let mut stations = visited.clone();
            stations.push(self.destination.clone());

            let route = Route::from_stations(self.graph, stations)?;
            if route.cost() <= self.config.max_cost {
                routes.push(route);
            }
        }

        // any route found from the candidates would have at least one more station
        if stations_count >= self.config.max_stations {
            return Ok(());
        }

        for candidate in candidates {
            let link = self
                .graph
                .find_link(current, &candidate)
                .and_then(|link| self.graph.get_link(link))
                .ok_or_else(|| RoutingError::LinkNotFound(current.clone(), candidate.clone()))?;

            let cost = cost + link.cost();
            if cost > self.config.max_cost {
                continue;
            }

            let mut branch = visited.clone();
            branch.push(candidate);
            self.explore(branch, cost, routes)?;
        }

        Ok(())
    }
}
