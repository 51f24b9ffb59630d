use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use crate::pipelines::PipelineSummary;
use crate::transform::{Edge, Node};

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// First `limit` nodes, with the same columns as `nodes.txt`.
pub fn nodes_table(nodes: &[Node], limit: usize) -> Table {
    let mut table = base_table();
    table.set_header(vec!["airport-id", "airport-name"]);
    for node in nodes.iter().take(limit) {
        table.add_row(vec![node.airport_id.clone(), node.airport_name.clone()]);
    }
    table
}

/// First `limit` edges, with the same columns as `edges.txt`.
pub fn edges_table(edges: &[Edge], limit: usize) -> Table {
    let mut table = base_table();
    table.set_header(vec!["endpoint1", "endpoint2", "distance"]);
    for edge in edges.iter().take(limit) {
        table.add_row(vec![
            edge.endpoint1.clone(),
            edge.endpoint2.clone(),
            edge.distance.to_string(),
        ]);
    }
    table
}

pub fn summary_table(summary: &PipelineSummary) -> Table {
    let stats = &summary.stats;
    let rows: [(&str, String); 13] = [
        ("airports read", stats.airports.to_string()),
        ("routes read", stats.routes.to_string()),
        ("unknown source", stats.unknown_source.to_string()),
        ("unknown destination", stats.unknown_destination.to_string()),
        ("joined routes", stats.enriched_routes.to_string()),
        ("duplicate edges", stats.duplicate_edges.to_string()),
        ("self-loops", stats.self_loops.to_string()),
        ("non-positive distances", stats.non_positive_distances.to_string()),
        ("reversed duplicates", stats.reversed_duplicates.to_string()),
        ("nodes written", summary.nodes.to_string()),
        ("edges written", summary.edges.to_string()),
        ("airports.dat blake3", summary.airports_hash.clone()),
        ("routes.dat blake3", summary.routes_hash.clone()),
    ];

    let mut table = base_table();
    table.set_header(vec!["step", "value"]);
    for (label, value) in rows {
        table.add_row(vec![label.to_string(), value]);
    }
    table
}
