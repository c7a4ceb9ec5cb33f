use crate::error::GraphError;
use crate::node::{Node, ProcessContext, Sample};

/// Emits the same value every tick.
#[derive(Clone, Copy, Debug)]
pub struct Constant {
    value: Sample,
}

impl Constant {
    pub fn new(value: Sample) -> Self {
        Self { value }
    }

    #[inline]
    pub fn value(&self) -> Sample {
        self.value
    }
}

impl Node for Constant {
    fn process(&self, cx: &ProcessContext<'_, '_>) -> Result<(), GraphError> {
        cx.set_output(0, self.value)
    }

    fn name(&self) -> &'static str {
        "constant"
    }
}
