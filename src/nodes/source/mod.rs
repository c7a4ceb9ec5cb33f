mod callback;
mod constant;
mod reference;

pub use callback::*;
pub use constant::*;
pub use reference::*;
