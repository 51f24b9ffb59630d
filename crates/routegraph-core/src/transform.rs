use std::collections::{HashMap, HashSet};

use routegraph_parser::{AirportRecord, RouteRecord};
use serde::Serialize;
use tracing::debug;

use crate::distance::distance_miles;

/// Output row of `nodes.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Node {
    pub airport_id: String,
    pub airport_name: String,
}

/// Output row of `edges.txt`. Distance is in whole statute miles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub endpoint1: String,
    pub endpoint2: String,
    pub distance: i64,
}

impl Edge {
    pub fn new(endpoint1: impl Into<String>, endpoint2: impl Into<String>, distance: i64) -> Self {
        Self {
            endpoint1: endpoint1.into(),
            endpoint2: endpoint2.into(),
            distance,
        }
    }

    pub fn pair_key(&self) -> NormalizedPairKey {
        NormalizedPairKey::new(&self.endpoint1, &self.endpoint2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&AirportRecord> for Coordinates {
    fn from(airport: &AirportRecord) -> Self {
        Self {
            latitude: airport.latitude,
            longitude: airport.longitude,
        }
    }
}

/// A route after both endpoints resolved to an airport row.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRoute<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub src: Coordinates,
    pub dst: Coordinates,
    pub distance: i64,
}

/// Order-insensitive identity of an endpoint pair: the smaller identifier, an
/// underscore, then the larger one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPairKey(String);

impl NormalizedPairKey {
    pub const SEPARATOR: char = '_';

    pub fn new(a: &str, b: &str) -> Self {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let mut key = String::with_capacity(low.len() + high.len() + 1);
        key.push_str(low);
        key.push(Self::SEPARATOR);
        key.push_str(high);
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// What each transform step kept or threw away.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransformStats {
    pub airports: usize,
    pub routes: usize,
    pub unknown_source: usize,
    pub unknown_destination: usize,
    pub enriched_routes: usize,
    pub duplicate_edges: usize,
    pub self_loops: usize,
    pub non_positive_distances: usize,
    pub reversed_duplicates: usize,
}

pub fn build_graph(airports: &[AirportRecord], routes: &[RouteRecord]) -> (Graph, TransformStats) {
    let mut stats = TransformStats {
        airports: airports.len(),
        routes: routes.len(),
        ..TransformStats::default()
    };

    let nodes = build_nodes(airports);
    let enriched = enrich_routes(airports, routes, &mut stats);
    let edges = build_edges(&enriched, &mut stats);

    (Graph { nodes, edges }, stats)
}

/// Identifier and name of every airport, duplicates removed by whole-row
/// equality. The same identifier under two names gives two nodes.
pub fn build_nodes(airports: &[AirportRecord]) -> Vec<Node> {
    let mut seen = HashSet::new();
    airports
        .iter()
        .map(|airport| Node {
            airport_id: airport.airport_id.clone(),
            airport_name: airport.airport_name.clone(),
        })
        .filter(|node| seen.insert(node.clone()))
        .collect()
}

pub fn index_airports(airports: &[AirportRecord]) -> HashMap<&str, Vec<&AirportRecord>> {
    let mut index: HashMap<&str, Vec<&AirportRecord>> = HashMap::new();
    for airport in airports {
        index
            .entry(airport.airport_id.as_str())
            .or_default()
            .push(airport);
    }
    index
}

/// Inner-joins routes to airports on `from`, then on `to`.
///
/// Routes whose endpoints are unknown are dropped and counted. When an
/// identifier appears on several airport rows every pairing is produced, in
/// route order, then source row order, then destination row order.
pub fn enrich_routes<'a>(
    airports: &'a [AirportRecord],
    routes: &'a [RouteRecord],
    stats: &mut TransformStats,
) -> Vec<EnrichedRoute<'a>> {
    let index = index_airports(airports);
    let mut enriched = Vec::with_capacity(routes.len());

    for route in routes {
        let Some(sources) = index.get(route.from.as_str()) else {
            debug!(from = %route.from, to = %route.to, "dropping route with unknown source airport");
            stats.unknown_source += 1;
            continue;
        };
        let Some(destinations) = index.get(route.to.as_str()) else {
            debug!(from = %route.from, to = %route.to, "dropping route with unknown destination airport");
            stats.unknown_destination += 1;
            continue;
        };

        for src in sources {
            for dst in destinations {
                enriched.push(EnrichedRoute {
                    from: &route.from,
                    to: &route.to,
                    src: Coordinates::from(*src),
                    dst: Coordinates::from(*dst),
                    distance: distance_miles(src.latitude, src.longitude, dst.latitude, dst.longitude),
                });
            }
        }
    }

    stats.enriched_routes = enriched.len();
    enriched
}

/// Projects enriched routes to edges and filters them.
///
/// Steps run in a fixed order: exact duplicates, self-loops, non-positive
/// distances, then reversed duplicates by [`NormalizedPairKey`]. Each step
/// keeps the first row it sees.
pub fn build_edges(enriched: &[EnrichedRoute<'_>], stats: &mut TransformStats) -> Vec<Edge> {
    let mut seen_rows = HashSet::new();
    let mut edges = Vec::with_capacity(enriched.len());
    for route in enriched {
        let edge = Edge::new(route.from, route.to, route.distance);
        if seen_rows.insert(edge.clone()) {
            edges.push(edge);
        } else {
            stats.duplicate_edges += 1;
        }
    }

    let before = edges.len();
    edges.retain(|edge| edge.endpoint1 != edge.endpoint2);
    stats.self_loops = before - edges.len();

    let before = edges.len();
    edges.retain(|edge| edge.distance > 0);
    stats.non_positive_distances = before - edges.len();

    let mut seen_pairs = HashSet::new();
    let before = edges.len();
    edges.retain(|edge| seen_pairs.insert(edge.pair_key()));
    stats.reversed_duplicates = before - edges.len();

    edges
}
