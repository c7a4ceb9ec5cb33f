//! Node graph - owns nodes, their bindings and per-tick caches

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cell::Cell;
use core::fmt;

use itertools::Itertools;
use petgraph::algo::{is_cyclic_directed, tarjan_scc};
use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use tracing::{debug, trace};

use crate::error::GraphError;
use crate::node::{Binding, Node, NodeId, ProcessContext, Sample, Tick};

/// Reentrancy guard. A node is `InProgress` from the moment a read starts
/// evaluating it until that read returns.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum EvalState {
    Idle,
    InProgress,
}

/// A node plus the bookkeeping the graph keeps for it.
struct NodeSlot<'a> {
    node: Box<dyn Node + 'a>,
    inputs: Vec<Option<Binding>>,
    outputs: Box<[Cell<Sample>]>,
    last_tick: Cell<Option<Tick>>,
    state: Cell<EvalState>,
}

impl<'a> NodeSlot<'a> {
    fn new(node: Box<dyn Node + 'a>) -> Self {
        let inputs = vec![None; node.num_inputs()];
        let outputs = (0..node.num_outputs()).map(|_| Cell::new(0.0)).collect();
        Self {
            node,
            inputs,
            outputs,
            last_tick: Cell::new(None),
            state: Cell::new(EvalState::Idle),
        }
    }

    /// Run the node for `cx.tick` unless it already ran for that tick.
    fn evaluate(&self, cx: &ProcessContext<'_, '_>) -> Result<(), GraphError> {
        if self.last_tick.get() == Some(cx.tick) {
            return Ok(());
        }
        trace!(node = %cx.node, tick = cx.tick, name = self.node.name(), "evaluating");
        self.node.process(cx)?;
        self.node.update(cx)?;
        self.last_tick.set(Some(cx.tick));
        Ok(())
    }
}

/// Edges run producer -> consumer and carry the consumer's input slot.
type InnerGraph<'a> = DiGraph<NodeSlot<'a>, usize>;

/// A pull-evaluated graph of processing nodes.
///
/// The graph owns every node; bindings between nodes are plain [`NodeId`]
/// handles, so nodes never own each other and feedback loops are allowed.
///
/// Nodes may borrow external state for `'a` (see
/// [`Reference`](crate::nodes::Reference)).
pub struct Graph<'a> {
    graph: InnerGraph<'a>,
}

impl<'a> Default for Graph<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Graph<'a> {
    pub fn new() -> Self {
        Self {
            graph: InnerGraph::new(),
        }
    }

    /// Create a graph with room for `nodes` nodes and `bindings` bindings.
    pub fn with_capacity(nodes: usize, bindings: usize) -> Self {
        Self {
            graph: InnerGraph::with_capacity(nodes, bindings),
        }
    }

    /// Number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Add a node, returning its handle. Port counts are fixed from here on.
    pub fn add<N: Node + 'a>(&mut self, node: N) -> NodeId {
        let slot = NodeSlot::new(Box::new(node));
        let (inputs, outputs) = (slot.inputs.len(), slot.outputs.len());
        let name = slot.node.name();
        let id = NodeId(self.graph.add_node(slot));
        debug!(node = %id, name, inputs, outputs, "added node");
        id
    }

    /// Wire input `slot` of `consumer` to output `port` of `producer`,
    /// replacing any previous binding of that slot.
    ///
    /// `port` is not checked here; reading through a binding to a missing
    /// port fails with [`GraphError::OutputOutOfRange`].
    pub fn bind(
        &mut self,
        consumer: NodeId,
        slot: usize,
        producer: NodeId,
        port: usize,
    ) -> Result<(), GraphError> {
        self.slot(producer)?;
        self.check_input(consumer, slot)?;
        self.detach(consumer, slot);

        if let Some(entry) = self.graph.node_weight_mut(consumer.0) {
            entry.inputs[slot] = Some(Binding { producer, port });
        }
        self.graph.add_edge(producer.0, consumer.0, slot);

        debug!(%consumer, slot, %producer, port, "bound input");
        Ok(())
    }

    /// Clear input `slot` of `consumer`; it reads as zero again.
    pub fn unbind(&mut self, consumer: NodeId, slot: usize) -> Result<(), GraphError> {
        self.check_input(consumer, slot)?;
        self.detach(consumer, slot);

        if let Some(entry) = self.graph.node_weight_mut(consumer.0) {
            entry.inputs[slot] = None;
        }

        debug!(%consumer, slot, "unbound input");
        Ok(())
    }

    /// The binding currently occupying input `slot` of `node`, if any.
    pub fn binding(&self, node: NodeId, slot: usize) -> Result<Option<Binding>, GraphError> {
        let entry = self.slot(node)?;
        entry
            .inputs
            .get(slot)
            .copied()
            .ok_or(GraphError::InputOutOfRange {
                node,
                slot,
                len: entry.inputs.len(),
            })
    }

    pub fn num_inputs(&self, node: NodeId) -> Result<usize, GraphError> {
        Ok(self.slot(node)?.inputs.len())
    }

    pub fn num_outputs(&self, node: NodeId) -> Result<usize, GraphError> {
        Ok(self.slot(node)?.outputs.len())
    }

    /// Pull output `port` of `node` for `tick`.
    ///
    /// The first read of a tick evaluates the node (pulling its inputs in
    /// turn); later reads of the same tick return the cached outputs. If the
    /// read arrives while `node` is already being evaluated, i.e. through a
    /// feedback loop, the node's `process` step is run again without touching
    /// the cache bookkeeping, so stateful nodes answer with what they held
    /// before this tick.
    ///
    /// Every feedback loop needs a node like [`Delay`](crate::nodes::Delay)
    /// whose `process` doesn't pull its inputs; a loop made only of stateless
    /// nodes recurses without bound.
    pub fn read(&self, node: NodeId, tick: Tick, port: usize) -> Result<Sample, GraphError> {
        let slot = self.slot(node)?;
        let output = slot.outputs.get(port).ok_or(GraphError::OutputOutOfRange {
            node,
            port,
            len: slot.outputs.len(),
        })?;

        let cx = ProcessContext {
            graph: self,
            node,
            tick,
            inputs: &slot.inputs,
            outputs: &slot.outputs,
        };

        match slot.state.get() {
            EvalState::Idle => {
                slot.state.set(EvalState::InProgress);
                let result = slot.evaluate(&cx);
                slot.state.set(EvalState::Idle);
                result?;
            }
            EvalState::InProgress => {
                trace!(%node, tick, "feedback re-entry");
                slot.node.process(&cx)?;
            }
        }

        Ok(output.get())
    }

    /// Put every node back into its freshly-constructed state.
    pub fn reset(&mut self) {
        for slot in self.graph.node_weights_mut() {
            slot.node.reset();
            slot.last_tick.set(None);
            slot.state.set(EvalState::Idle);
            slot.outputs.iter().for_each(|output| output.set(0.0));
        }
        debug!(nodes = self.graph.node_count(), "reset graph");
    }

    /// Whether any binding chain leads back to where it started.
    pub fn has_feedback(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Groups of nodes that feed back into each other, including nodes bound
    /// to themselves.
    pub fn feedback_loops(&self) -> Vec<Vec<NodeId>> {
        tarjan_scc(&self.graph)
            .into_iter()
            .filter(|component| match component.as_slice() {
                [single] => self.graph.find_edge(*single, *single).is_some(),
                _ => true,
            })
            .map(|component| component.into_iter().map(NodeId).collect())
            .collect()
    }

    fn slot(&self, node: NodeId) -> Result<&NodeSlot<'a>, GraphError> {
        self.graph
            .node_weight(node.0)
            .ok_or(GraphError::NodeOutOfRange(node))
    }

    fn check_input(&self, node: NodeId, slot: usize) -> Result<(), GraphError> {
        let len = self.slot(node)?.inputs.len();
        if slot < len {
            Ok(())
        } else {
            Err(GraphError::InputOutOfRange { node, slot, len })
        }
    }

    /// Drop the edge mirroring the binding of `slot`, if there is one.
    fn detach(&mut self, consumer: NodeId, slot: usize) {
        let stale = self
            .graph
            .edges_directed(consumer.0, Direction::Incoming)
            .find(|edge| *edge.weight() == slot)
            .map(|edge| edge.id());

        if let Some(edge) = stale {
            self.graph.remove_edge(edge);
        }
    }
}

impl fmt::Debug for Graph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in self.graph.node_indices() {
            let slot = &self.graph[index];
            let inputs = slot.inputs.iter().format_with(", ", |binding, f| match binding {
                Some(b) => f(&format_args!("{}:{}", b.producer, b.port)),
                None => f(&"-"),
            });
            writeln!(
                f,
                "{} {} [{}] -> {} outputs",
                NodeId(index),
                slot.node.name(),
                inputs,
                slot.outputs.len()
            )?;
        }
        Ok(())
    }
}
