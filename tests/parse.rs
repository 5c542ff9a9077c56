#![allow(missing_docs)]
#![cfg(not(feature = "loom"))]

use preflow::{
    config::SolverConfig,
    graph::GraphError,
    parse::{read_instance, ParseError},
};

#[test]
fn parses_a_complete_instance() {
    let input = "3 3 0 0\n0 1 3\n1 2 2\n0 2 1\n";
    let network = read_instance(input.as_bytes()).expect("well-formed input");
    assert_eq!(network.node_count(), 3);
    assert_eq!(network.edge_count(), 3);
    assert_eq!(network.source(), 0);
    assert_eq!(network.sink(), 2);
    let flow = network
        .max_flow(&SolverConfig::default())
        .expect("solvable instance");
    assert_eq!(flow, 3);
}

#[test]
fn header_tail_fields_are_ignored() {
    let input = "2 1 77 99\n0 1 5\n";
    let network = read_instance(input.as_bytes()).expect("well-formed input");
    assert_eq!(network.edge_count(), 1);
}

#[test]
fn accepts_arbitrary_whitespace() {
    let input = "2   1 0 0\t\t0\t1\n5";
    let network = read_instance(input.as_bytes()).expect("well-formed input");
    assert_eq!(network.edge_count(), 1);
    assert_eq!(network.capacity(0), 5);
}

#[test]
fn content_after_the_last_record_is_ignored() {
    let input = "2 1 0 0\n0 1 5\ntrailing garbage";
    assert!(read_instance(input.as_bytes()).is_ok());
}

#[test]
fn missing_header_is_rejected() {
    assert!(matches!(
        read_instance("".as_bytes()),
        Err(ParseError::UnexpectedEof { .. })
    ));
}

#[test]
fn truncated_stream_is_rejected() {
    let input = "3 3 0 0\n0 1 3\n1 2";
    assert!(matches!(
        read_instance(input.as_bytes()),
        Err(ParseError::UnexpectedEof { .. })
    ));
}

#[test]
fn non_numeric_token_is_rejected() {
    let input = "2 1 0 0\n0 one 5\n";
    assert!(matches!(
        read_instance(input.as_bytes()),
        Err(ParseError::InvalidInteger { .. })
    ));
}

#[test]
fn negative_endpoint_is_rejected() {
    let input = "2 1 0 0\n-1 1 5\n";
    assert!(matches!(
        read_instance(input.as_bytes()),
        Err(ParseError::InvalidInteger { .. })
    ));
}

#[test]
fn negative_capacity_is_rejected() {
    let input = "2 1 0 0\n0 1 -5\n";
    assert!(matches!(
        read_instance(input.as_bytes()),
        Err(ParseError::Graph(GraphError::NegativeCapacity {
            edge: 0,
            capacity: -5
        }))
    ));
}

#[test]
fn out_of_range_endpoint_is_rejected() {
    let input = "2 1 0 0\n0 7 5\n";
    assert!(matches!(
        read_instance(input.as_bytes()),
        Err(ParseError::Graph(GraphError::EndpointOutOfRange {
            endpoint: 7,
            ..
        }))
    ));
}

#[test]
fn zero_node_network_is_rejected() {
    let input = "0 0 0 0\n";
    assert!(matches!(
        read_instance(input.as_bytes()),
        Err(ParseError::Graph(GraphError::Empty))
    ));
}
