//! Source that follows a variable owned outside the graph

use core::cell::Cell;

use crate::error::GraphError;
use crate::node::{Node, ProcessContext, Sample};

/// Emits whatever the borrowed variable holds at the moment it is evaluated.
///
/// The variable stays owned by the caller, who can keep changing it with
/// [`Cell::set`] between ticks. The graph can't outlive it.
///
/// ```
/// use std::cell::Cell;
/// use tickgraph::{Graph, nodes::Reference};
///
/// let knob = Cell::new(1.0);
/// let mut graph = Graph::new();
/// let source = graph.add(Reference::new(&knob));
///
/// assert_eq!(graph.read(source, 0, 0), Ok(1.0));
/// knob.set(0.5);
/// assert_eq!(graph.read(source, 1, 0), Ok(0.5));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Reference<'a> {
    value: &'a Cell<Sample>,
}

impl<'a> Reference<'a> {
    pub fn new(value: &'a Cell<Sample>) -> Self {
        Self { value }
    }
}

impl<'a> From<&'a Cell<Sample>> for Reference<'a> {
    fn from(value: &'a Cell<Sample>) -> Self {
        Self::new(value)
    }
}

impl Node for Reference<'_> {
    fn process(&self, cx: &ProcessContext<'_, '_>) -> Result<(), GraphError> {
        cx.set_output(0, self.value.get())
    }

    fn name(&self) -> &'static str {
        "reference"
    }
}
