//! Core node trait and context types.

use core::cell::Cell;
use core::fmt;

use petgraph::graph::NodeIndex;

use crate::error::GraphError;
use crate::graph::Graph;

/// The value type flowing along every binding.
pub type Sample = f64;

/// Identifies one discrete evaluation step (e.g. one audio sample).
///
/// Ticks are supplied by the caller. Equal ticks are "the same instant" and
/// hit the per-node cache; anything else triggers a fresh computation. They
/// don't have to be contiguous or increasing.
pub type Tick = u64;

/// Handle to a node inside a [`Graph`].
///
/// Handles are only meaningful for the graph that issued them.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(pub(crate) NodeIndex);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0.index())
    }
}

/// Where an input slot reads from: an output port on another node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Binding {
    pub producer: NodeId,
    pub port: usize,
}

/// The core trait for processing nodes.
///
/// A node only describes its own computation. Caching, cycle breaking and
/// input lookup are handled by the [`Graph`] through the [`ProcessContext`].
///
/// Evaluation of a node for a new tick runs [`process`](Node::process)
/// followed by [`update`](Node::update). When a feedback loop leads back to a
/// node that is still being evaluated, only `process` is run again and its
/// outputs are handed to the caller. So:
///
/// - `process` writes the visible outputs. Stateless nodes read their inputs
///   here.
/// - `update` consumes inputs into internal state. A node that must be able to
///   sit inside a feedback loop (see [`Delay`](crate::nodes::Delay)) reads its
///   inputs *only* here, so `process` never recurses into the loop.
///
/// Methods take `&self` because a node can be re-entered while it is already
/// evaluating; mutable state goes in `Cell`/`RefCell`.
///
/// ```
/// use tickgraph::{GraphError, Node, ProcessContext};
///
/// /// Swaps its two inputs onto its two outputs.
/// struct Swap;
///
/// impl Node for Swap {
///     fn process(&self, cx: &ProcessContext<'_, '_>) -> Result<(), GraphError> {
///         cx.set_output(0, cx.input(1)?)?;
///         cx.set_output(1, cx.input(0)?)
///     }
///
///     fn num_inputs(&self) -> usize { 2 }
///     fn num_outputs(&self) -> usize { 2 }
/// }
/// ```
pub trait Node {
    /// Compute the outputs for the current tick.
    fn process(&self, cx: &ProcessContext<'_, '_>) -> Result<(), GraphError>;

    /// Consume inputs and advance internal state. Runs once per tick, after
    /// `process`.
    fn update(&self, _cx: &ProcessContext<'_, '_>) -> Result<(), GraphError> {
        Ok(())
    }

    /// Return internal state to how it was at construction.
    fn reset(&mut self) {}

    /// Number of input slots (0 for sources). Read once when the node is added.
    fn num_inputs(&self) -> usize {
        0
    }

    /// Number of output ports. Read once when the node is added.
    fn num_outputs(&self) -> usize {
        1
    }

    /// Short label used in logs and `Debug` output.
    fn name(&self) -> &'static str {
        "node"
    }
}

/// What a node sees while it is being evaluated.
///
/// Passed to [`Node::process`] and [`Node::update`].
pub struct ProcessContext<'g, 'a> {
    pub(crate) graph: &'g Graph<'a>,
    pub(crate) node: NodeId,
    pub(crate) tick: Tick,
    pub(crate) inputs: &'g [Option<Binding>],
    pub(crate) outputs: &'g [Cell<Sample>],
}

impl<'g, 'a> ProcessContext<'g, 'a> {
    /// The tick being evaluated.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// The node being evaluated.
    #[inline]
    pub fn node(&self) -> NodeId {
        self.node
    }

    #[inline]
    pub fn num_inputs(&self) -> usize {
        self.inputs.len()
    }

    #[inline]
    pub fn num_outputs(&self) -> usize {
        self.outputs.len()
    }

    /// Pull the value bound to input `slot` for this tick.
    ///
    /// Unbound slots read as `0.0`.
    pub fn input(&self, slot: usize) -> Result<Sample, GraphError> {
        match self.inputs.get(slot) {
            Some(Some(binding)) => self.graph.read(binding.producer, self.tick, binding.port),
            Some(None) => {
                #[cfg(feature = "warn_on_unbound")]
                tracing::warn!(node = %self.node, slot, "reading unbound input");
                Ok(0.0)
            }
            None => Err(GraphError::InputOutOfRange {
                node: self.node,
                slot,
                len: self.inputs.len(),
            }),
        }
    }

    /// Write output `port`.
    pub fn set_output(&self, port: usize, value: Sample) -> Result<(), GraphError> {
        let output = self.outputs.get(port).ok_or(GraphError::OutputOutOfRange {
            node: self.node,
            port,
            len: self.outputs.len(),
        })?;
        output.set(value);
        Ok(())
    }
}
