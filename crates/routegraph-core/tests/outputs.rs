use std::fs;

use routegraph_core::outputs::{write_edges, write_graph, write_nodes};
use routegraph_core::{Edge, Graph, Node};

fn node(id: &str, name: &str) -> Node {
    Node {
        airport_id: id.to_string(),
        airport_name: name.to_string(),
    }
}

#[test]
fn writes_headerless_comma_separated_rows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let graph = Graph {
        nodes: vec![node("1", "A"), node("2", "B")],
        edges: vec![Edge::new("1", "2", 69)],
    };

    let paths = write_graph(dir.path(), &graph).expect("write graph");

    assert_eq!(fs::read_to_string(&paths.nodes).unwrap(), "1,A\n2,B\n");
    assert_eq!(fs::read_to_string(&paths.edges).unwrap(), "1,2,69\n");
    assert_eq!(paths.nodes, dir.path().join("nodes.txt"));
    assert_eq!(paths.edges, dir.path().join("edges.txt"));
}

#[test]
fn creates_missing_output_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let nested = dir.path().join("deeply/nested/out");

    write_graph(&nested, &Graph::default()).expect("write graph");

    assert!(nested.is_dir());
    assert_eq!(fs::read_to_string(nested.join("nodes.txt")).unwrap(), "");
    assert_eq!(fs::read_to_string(nested.join("edges.txt")).unwrap(), "");
}

#[test]
fn overwrites_existing_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("edges.txt");
    fs::write(&path, "stale,stale,1\nstale,stale,2\nstale,stale,3\n").unwrap();

    write_edges(&path, &[Edge::new("9", "8", 7)]).expect("write edges");

    assert_eq!(fs::read_to_string(&path).unwrap(), "9,8,7\n");
}

#[test]
fn quotes_names_containing_commas() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nodes.txt");

    write_nodes(&path, &[node("42", "Washington Dulles, Intl")]).expect("write nodes");

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "42,\"Washington Dulles, Intl\"\n"
    );
}
