use core::cell::RefCell;

use crate::error::GraphError;
use crate::node::{Node, ProcessContext, Sample};

/// Calls a closure once per tick and emits what it returns.
///
/// The closure may keep state of its own (a noise generator, a counter...).
pub struct Callback<F> {
    func: RefCell<F>,
}

impl<F> Callback<F>
where
    F: FnMut() -> Sample,
{
    pub fn new(func: F) -> Self {
        Self {
            func: RefCell::new(func),
        }
    }
}

impl<F> Node for Callback<F>
where
    F: FnMut() -> Sample,
{
    fn process(&self, cx: &ProcessContext<'_, '_>) -> Result<(), GraphError> {
        // sources have no inputs, so nothing can re-enter while this is borrowed
        let mut func = self.func.borrow_mut();
        let value = (*func)();
        cx.set_output(0, value)
    }

    fn name(&self) -> &'static str {
        "callback"
    }
}
