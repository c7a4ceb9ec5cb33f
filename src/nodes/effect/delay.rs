//! Delay line - the node that makes feedback loops work

use alloc::boxed::Box;
use core::cell::Cell;

use tracing::warn;

use crate::error::GraphError;
use crate::node::{Node, ProcessContext, Sample};

/// Delays its input by a fixed number of ticks.
///
/// Each tick it emits the sample written `len` ticks earlier (zeros at
/// first), then stores the current input in its place. The input is only
/// read in [`update`](Node::update), after the output is already settled, so
/// a delay can close a feedback loop:
///
/// ```
/// use tickgraph::{Graph, nodes::{Constant, Delay, Sum}};
///
/// // integrator: y[n] = 1 + y[n-1]
/// let mut graph = Graph::new();
/// let one = graph.add(Constant::new(1.0));
/// let z = graph.add(Delay::new(1));
/// let sum = graph.add(Sum::new(2));
/// graph.bind(sum, 0, one, 0)?;
/// graph.bind(sum, 1, z, 0)?;
/// graph.bind(z, 0, sum, 0)?;
///
/// assert_eq!(graph.read(sum, 0, 0)?, 1.0);
/// assert_eq!(graph.read(sum, 1, 0)?, 2.0);
/// assert_eq!(graph.read(sum, 1, 0)?, 2.0);
/// assert_eq!(graph.read(sum, 2, 0)?, 3.0);
/// # Ok::<(), tickgraph::GraphError>(())
/// ```
#[derive(Debug)]
pub struct Delay {
    line: Box<[Cell<Sample>]>,
    cursor: Cell<usize>,
}

impl Delay {
    /// Create a delay of `len` ticks. A length of zero is treated as one.
    pub fn new(len: usize) -> Self {
        if len == 0 {
            warn!("zero-length delay requested, using one tick");
        }

        Self {
            line: (0..len.max(1)).map(|_| Cell::new(0.0)).collect(),
            cursor: Cell::new(0),
        }
    }

    /// Delay length in ticks
    #[inline]
    pub fn ticks(&self) -> usize {
        self.line.len()
    }
}

impl Node for Delay {
    fn process(&self, cx: &ProcessContext<'_, '_>) -> Result<(), GraphError> {
        let held = self.line.get(self.cursor.get()).map_or(0.0, Cell::get);
        cx.set_output(0, held)
    }

    fn update(&self, cx: &ProcessContext<'_, '_>) -> Result<(), GraphError> {
        let input = cx.input(0)?;

        let cursor = self.cursor.get();
        if let Some(cell) = self.line.get(cursor) {
            cell.set(input);
        }
        self.cursor.set((cursor + 1) % self.line.len());
        Ok(())
    }

    fn reset(&mut self) {
        self.line.iter_mut().for_each(|cell| *cell.get_mut() = 0.0);
        *self.cursor.get_mut() = 0;
    }

    fn num_inputs(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "delay"
    }
}
