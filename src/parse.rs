use crate::{
    graph::{FlowNetwork, GraphError},
    types::{Flow, NodeId},
};
use std::io::BufRead;
use std::str::{FromStr, SplitAsciiWhitespace};
use thiserror::Error;

/// Error produced while turning an input stream into a [`FlowNetwork`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The underlying reader failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    /// The stream ended before all declared records were read.
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof {
        /// What the parser was looking for when the stream ran out.
        expected: &'static str,
    },
    /// A token was not an integer of the expected kind.
    #[error("invalid {expected} {token:?}")]
    InvalidInteger {
        /// The offending token.
        token: String,
        /// What the parser was looking for.
        expected: &'static str,
    },
    /// The edge list is structurally invalid.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Reads an instance in the whitespace-delimited integer format: a header
/// `n m x y` (the third and fourth fields are accepted and ignored),
/// followed by `m` records `u v c` describing an edge from `u` to `v` with
/// capacity `c`. Content after the last record is ignored.
///
/// # Errors
/// On I/O failure, a short or malformed stream, or a structurally invalid
/// edge list.
pub fn read_instance<R: BufRead>(mut reader: R) -> Result<FlowNetwork, ParseError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    let mut tokens = input.split_ascii_whitespace();

    let node_count: usize = next_value(&mut tokens, "node count")?;
    let edge_count: usize = next_value(&mut tokens, "edge count")?;
    let _: i64 = next_value(&mut tokens, "unused header field")?;
    let _: i64 = next_value(&mut tokens, "unused header field")?;

    let mut edges: Vec<(NodeId, NodeId, Flow)> = Vec::with_capacity(edge_count);
    for _ in 0..edge_count {
        let u: NodeId = next_value(&mut tokens, "edge endpoint")?;
        let v: NodeId = next_value(&mut tokens, "edge endpoint")?;
        let capacity: Flow = next_value(&mut tokens, "edge capacity")?;
        edges.push((u, v, capacity));
    }

    Ok(FlowNetwork::from_edges(node_count, &edges)?)
}

fn next_value<T: FromStr>(
    tokens: &mut SplitAsciiWhitespace<'_>,
    expected: &'static str,
) -> Result<T, ParseError> {
    let token = tokens.next().ok_or(ParseError::UnexpectedEof { expected })?;
    token.parse().map_err(|_| ParseError::InvalidInteger {
        token: token.to_owned(),
        expected,
    })
}
