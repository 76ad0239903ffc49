use std::fmt::Debug;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RoutingError<Station: Debug> {
    /// A route was recorded between two stations the graph has no link for.
    #[error("Cannot find link between stations {0:?} and {1:?}")]
    LinkNotFound(Station, Station),
}
