mod network;

pub use network::{REDUCED_STATION_MAP, STATION_MAP, StationMap};
