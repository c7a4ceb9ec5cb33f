use core::cell::RefCell;

use crate::error::GraphError;
use crate::node::{Node, ProcessContext, Sample};

/// Applies a closure to its single input.
///
/// ```
/// use tickgraph::{Graph, nodes::{Constant, Map}};
///
/// let mut graph = Graph::new();
/// let x = graph.add(Constant::new(2.5));
/// let y = graph.add(Map::new(|x| 2.0 * x + 1.0));
/// graph.bind(y, 0, x, 0)?;
///
/// assert_eq!(graph.read(y, 0, 0)?, 6.0);
/// # Ok::<(), tickgraph::GraphError>(())
/// ```
pub struct Map<F> {
    func: RefCell<F>,
}

impl<F> Map<F>
where
    F: FnMut(Sample) -> Sample,
{
    pub fn new(func: F) -> Self {
        Self {
            func: RefCell::new(func),
        }
    }
}

impl<F> Node for Map<F>
where
    F: FnMut(Sample) -> Sample,
{
    fn process(&self, cx: &ProcessContext<'_, '_>) -> Result<(), GraphError> {
        // pull first: the input may loop back here, and must not find `func` borrowed
        let input = cx.input(0)?;
        let mut func = self.func.borrow_mut();
        let value = (*func)(input);
        cx.set_output(0, value)
    }

    fn num_inputs(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "map"
    }
}
