mod delay;
mod map;
mod mul;
mod mux;
mod sum;

pub use delay::*;
pub use map::*;
pub use mul::*;
pub use mux::*;
pub use sum::*;
