use crate::error::GraphError;
use crate::node::{Node, ProcessContext, Sample};

/// Multiplies all of its inputs. With no inputs it emits `1.0`.
///
/// Note that an unbound slot reads as zero, so it zeroes the product.
#[derive(Clone, Copy, Debug)]
pub struct Mul {
    inputs: usize,
}

impl Mul {
    pub fn new(inputs: usize) -> Self {
        Self { inputs }
    }
}

impl Node for Mul {
    fn process(&self, cx: &ProcessContext<'_, '_>) -> Result<(), GraphError> {
        let product = (0..cx.num_inputs())
            .map(|slot| cx.input(slot))
            .product::<Result<Sample, _>>()?;
        cx.set_output(0, product)
    }

    fn num_inputs(&self) -> usize {
        self.inputs
    }

    fn name(&self) -> &'static str {
        "mul"
    }
}
