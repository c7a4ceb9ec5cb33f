//! Errors raised while wiring or evaluating a graph.

use thiserror::Error;

use crate::node::NodeId;

/// Everything that can go wrong in a graph is an out-of-range access.
///
/// These always point at a bug in whatever built the graph, so they are
/// handed straight back to the caller. Reading an *unbound* input is not an
/// error; it reads as zero.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("input slot {slot} out of range for node {node} with {len} inputs")]
    InputOutOfRange { node: NodeId, slot: usize, len: usize },

    #[error("output port {port} out of range for node {node} with {len} outputs")]
    OutputOutOfRange { node: NodeId, port: usize, len: usize },

    #[error("node {0} does not belong to this graph")]
    NodeOutOfRange(NodeId),
}
