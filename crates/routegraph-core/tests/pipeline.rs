use std::fs;
use std::path::{Path, PathBuf};

use routegraph_core::{pipelines, PipelineConfig, PipelineError};
use routegraph_parser::ParserError;

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../routegraph-parser/tests/data")
}

fn write_inputs(dir: &Path, airports: &str, routes: &str) {
    fs::write(dir.join("airports.dat"), airports).expect("write airports");
    fs::write(dir.join("routes.dat"), routes).expect("write routes");
}

#[test]
fn end_to_end_two_airport_example() {
    let input = tempfile::tempdir().expect("tempdir");
    let output = tempfile::tempdir().expect("tempdir");
    write_inputs(
        input.path(),
        "airport-id\t\tairport-name\tlatitude\tlongitude\n1\tA\t0.0\t\t0.0\n2\tB\t\t\t0.0\t1.0\n",
        "from\tto\n1\t2\n2\t1\n",
    );

    let config = PipelineConfig::new(input.path(), output.path().join("cleaned_data"));
    let result = pipelines::run(&config).expect("pipeline run");

    assert_eq!(
        fs::read_to_string(config.nodes_path()).unwrap(),
        "1,A\n2,B\n"
    );
    assert_eq!(fs::read_to_string(config.edges_path()).unwrap(), "1,2,69\n");
    assert_eq!(result.summary.nodes, 2);
    assert_eq!(result.summary.edges, 1);
    assert_eq!(result.summary.stats.reversed_duplicates, 1);
}

#[test]
fn fixture_run_matches_reference_output() {
    let output = tempfile::tempdir().expect("tempdir");
    let config = PipelineConfig::new(fixture_dir(), output.path());

    let result = pipelines::run(&config).expect("pipeline run");

    assert_eq!(
        fs::read_to_string(config.nodes_path()).unwrap(),
        "1,Goroka Airport\n\
         2,Madang Airport\n\
         3,Mount Hagen Kagamuga Airport\n\
         507,London Heathrow Airport\n\
         3797,John F Kennedy International Airport\n\
         3484,Los Angeles International Airport\n"
    );
    assert_eq!(
        fs::read_to_string(config.edges_path()).unwrap(),
        "507,3797,3440\n3797,3484,2468\n1,2,66\n2,3,111\n"
    );

    let stats = &result.summary.stats;
    assert_eq!(stats.routes, 9);
    assert_eq!(stats.unknown_destination, 1);
    assert_eq!(stats.duplicate_edges, 1);
    assert_eq!(stats.self_loops, 1);
    assert_eq!(stats.reversed_duplicates, 2);
}

#[test]
fn reruns_are_byte_identical() {
    let output = tempfile::tempdir().expect("tempdir");
    let config = PipelineConfig::new(fixture_dir(), output.path());

    let first = pipelines::run(&config).expect("first run");
    let nodes_first = fs::read(config.nodes_path()).unwrap();
    let edges_first = fs::read(config.edges_path()).unwrap();

    let second = pipelines::run(&config).expect("second run");
    assert_eq!(fs::read(config.nodes_path()).unwrap(), nodes_first);
    assert_eq!(fs::read(config.edges_path()).unwrap(), edges_first);
    assert_eq!(first.summary, second.summary);
}

#[test]
fn fingerprints_follow_input_contents() {
    let output = tempfile::tempdir().expect("tempdir");
    let config = PipelineConfig::new(fixture_dir(), output.path());

    let result = pipelines::run(&config).expect("pipeline run");
    let expected = blake3::hash(&fs::read(config.routes_path()).unwrap())
        .to_hex()
        .to_string();

    assert_eq!(result.summary.routes_hash, expected);
    assert_ne!(result.summary.airports_hash, result.summary.routes_hash);
}

#[test]
fn missing_input_aborts_before_writing() {
    let input = tempfile::tempdir().expect("tempdir");
    let output = tempfile::tempdir().expect("tempdir");
    let config = PipelineConfig::new(input.path(), output.path().join("out"));

    let err = pipelines::run(&config).unwrap_err();

    assert!(matches!(err, PipelineError::Parser(ParserError::Io { .. })), "unexpected error: {err}");
    assert!(!config.output_dir.exists());
}

#[test]
fn bad_latitude_is_fatal() {
    let input = tempfile::tempdir().expect("tempdir");
    let output = tempfile::tempdir().expect("tempdir");
    write_inputs(
        input.path(),
        "airport-id\tairport-name\tlatitude\tlongitude\n1\tA\tnorth\t0.0\n",
        "from\tto\n1\t1\n",
    );

    let config = PipelineConfig::new(input.path(), output.path().join("out"));
    let err = pipelines::run(&config).unwrap_err();

    assert!(
        matches!(err, PipelineError::Parser(ParserError::DataRow { .. })),
        "unexpected error: {err}"
    );
    assert!(!config.nodes_path().exists());
}

#[test]
fn nan_coordinate_is_fatal_not_a_zero_distance() {
    let input = tempfile::tempdir().expect("tempdir");
    let output = tempfile::tempdir().expect("tempdir");
    write_inputs(
        input.path(),
        "airport-id\tairport-name\tlatitude\tlongitude\n1\tA\tnan\t0.0\n2\tB\t0.0\t1.0\n",
        "from\tto\n1\t2\n",
    );

    let config = PipelineConfig::new(input.path(), output.path().join("out"));
    let err = pipelines::run(&config).unwrap_err();

    assert!(
        matches!(err, PipelineError::Parser(ParserError::DataRow { .. })),
        "unexpected error: {err}"
    );
    assert!(!config.edges_path().exists());
}

#[test]
fn no_matching_routes_writes_empty_edges() {
    let input = tempfile::tempdir().expect("tempdir");
    let output = tempfile::tempdir().expect("tempdir");
    write_inputs(
        input.path(),
        "airport-id\tairport-name\tlatitude\tlongitude\n1\tA\t0.0\t0.0\n",
        "from\tto\n7\t8\n",
    );

    let config = PipelineConfig::new(input.path(), output.path());
    let result = pipelines::run(&config).expect("pipeline run");

    assert_eq!(fs::read_to_string(config.nodes_path()).unwrap(), "1,A\n");
    assert_eq!(fs::read_to_string(config.edges_path()).unwrap(), "");
    assert_eq!(result.summary.stats.unknown_source, 1);
}
