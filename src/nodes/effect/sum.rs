//! Sum effect - adds all inputs together

use crate::error::GraphError;
use crate::node::{Node, ProcessContext, Sample};

/// Adds up all of its inputs. With no inputs (or none bound) it emits `0.0`.
#[derive(Clone, Copy, Debug)]
pub struct Sum {
    inputs: usize,
}

impl Sum {
    /// Create a sum over `inputs` input slots
    pub fn new(inputs: usize) -> Self {
        Self { inputs }
    }
}

impl Node for Sum {
    fn process(&self, cx: &ProcessContext<'_, '_>) -> Result<(), GraphError> {
        let total = (0..cx.num_inputs())
            .map(|slot| cx.input(slot))
            .sum::<Result<Sample, _>>()?;
        cx.set_output(0, total)
    }

    fn num_inputs(&self) -> usize {
        self.inputs
    }

    fn name(&self) -> &'static str {
        "sum"
    }
}
