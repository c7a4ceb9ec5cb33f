//! # tickgraph
//!
//! A pull-based signal-flow graph, evaluated one tick at a time.
//!
//! Nodes are added to a [`Graph`] and wired with [`Graph::bind`]. Asking a
//! node for an output with [`Graph::read`] pulls its inputs recursively.
//! Every node computes at most once per tick; later reads of that tick hit
//! its cache. Feedback loops are fine as long as they pass through a
//! stateful node such as [`Delay`](nodes::Delay): a read that loops back to a
//! node still being evaluated gets that node's pre-tick state instead of
//! recursing forever.
//!
//! ```
//! use tickgraph::{Graph, nodes::{Constant, Mul, Sum}};
//!
//! let mut graph = Graph::new();
//! let a = graph.add(Constant::new(3.0));
//! let b = graph.add(Constant::new(4.0));
//! let sum = graph.add(Sum::new(2));
//! let mul = graph.add(Mul::new(2));
//!
//! graph.bind(sum, 0, a, 0)?;
//! graph.bind(sum, 1, b, 0)?;
//! graph.bind(mul, 0, sum, 0)?;
//! graph.bind(mul, 1, sum, 0)?;
//!
//! assert_eq!(graph.read(mul, 0, 0)?, 49.0);
//! # Ok::<(), tickgraph::GraphError>(())
//! ```
//!
//! Evaluation is single-threaded and synchronous; a `Graph` is not `Sync`.

extern crate alloc;

mod error;
mod graph;
mod node;
pub mod nodes;

pub use error::GraphError;
pub use graph::Graph;
pub use node::{Binding, Node, NodeId, ProcessContext, Sample, Tick};
