use crate::error::GraphError;
use crate::node::{Node, ProcessContext, Sample};

/// Selects one of its data inputs.
///
/// Input 0 is the selector. It is rounded to the nearest integer and clamped
/// to `1..=inputs-1`, so out-of-range selectors saturate instead of failing.
/// A NaN selector picks input 1.
#[derive(Clone, Copy, Debug)]
pub struct Mux {
    inputs: usize,
}

impl Mux {
    /// Create a mux with `inputs` slots in total: the selector plus
    /// `inputs - 1` data inputs.
    pub fn new(inputs: usize) -> Self {
        Self { inputs }
    }

    /// Data slot picked by `selector`.
    pub fn select(&self, selector: Sample) -> usize {
        let last = self.inputs.saturating_sub(1).max(1);
        let selector = selector.round();

        if selector >= last as Sample {
            last
        } else if selector > 1.0 {
            selector as usize
        } else {
            1
        }
    }
}

impl Node for Mux {
    fn process(&self, cx: &ProcessContext<'_, '_>) -> Result<(), GraphError> {
        let slot = self.select(cx.input(0)?);
        let value = cx.input(slot)?;
        cx.set_output(0, value)
    }

    fn num_inputs(&self) -> usize {
        self.inputs
    }

    fn name(&self) -> &'static str {
        "mux"
    }
}
