#![doc = include_str!("../README.md")]

mod error;
mod graph;
mod model;
mod routing;

pub use error::RoutingError;
pub use graph::{Link, LinkId, RouteMap, UndirectedGraph};
pub use model::Cost;
pub use routing::{
    Route, Routes, RoutingConfig, route, route_with_config, routes, routes_with_config,
};
