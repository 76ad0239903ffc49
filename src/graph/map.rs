use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::{Cost, Link, LinkId, UndirectedGraph};

/// In-memory station map.
/// Links are only ever appended, their IDs are the positions in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMap<Station> {
    links: Vec<Link<Station>>,
}

impl<Station> Default for RouteMap<Station> {
    fn default() -> Self {
        Self { links: vec![] }
    }
}

impl<Station> RouteMap<Station> {
    pub const fn new() -> Self {
        Self { links: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Gets an iterator over all the links of the map in insertion order.
    pub fn links(&self) -> impl Iterator<Item = (LinkId, &Link<Station>)> {
        self.links
            .iter()
            .enumerate()
            .map(|(index, link)| (LinkId(index), link))
    }
}

impl<Station: Debug> RouteMap<Station> {
    /// Appends a new link between the two stations.
    /// Any pair of stations is accepted, including a station linked to itself.
    pub fn add_link(&mut self, a: Station, b: Station, cost: Cost) -> LinkId {
        let id = LinkId(self.links.len());
        trace!("Adding link {id:?}: {a:?} <-> {b:?} ({cost:?})");
        self.links.push(Link::new(a, b, cost));
        id
    }
}

impl<Station: Eq + Hash> RouteMap<Station> {
    /// Gets all the distinct stations of the map, in the order they are first referenced.
    pub fn stations(&self) -> Vec<&Station> {
        let mut seen = FxHashSet::default();

        self.links
            .iter()
            .flat_map(|link| link.stations())
            .filter(|&station| seen.insert(station))
            .collect()
    }
}

impl<Station: Debug + Clone + Eq + Hash> UndirectedGraph for RouteMap<Station> {
    type Station = Station;

    fn get_link(&self, link: LinkId) -> Option<&Link<Station>> {
        self.links.get(link.0)
    }

    fn links_of(&self, station: &Station) -> impl Iterator<Item = LinkId> {
        self.links()
            .filter(move |(_, link)| link.connects(station))
            .map(|(id, _)| id)
    }
}

impl<Station, L: Into<Link<Station>>> FromIterator<L> for RouteMap<Station> {
    fn from_iter<I: IntoIterator<Item = L>>(links: I) -> Self {
        Self {
            links: links.into_iter().map(Into::into).collect(),
        }
    }
}

impl<Station, L: Into<Link<Station>>> Extend<L> for RouteMap<Station> {
    fn extend<I: IntoIterator<Item = L>>(&mut self, links: I) {
        self.links.extend(links.into_iter().map(Into::into));
    }
}
