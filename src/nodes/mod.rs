//! Built-in nodes.
//!
//! ## Sources ([`source`])
//!
//! No inputs, one output:
//! - [`Constant`] - A fixed value
//! - [`Reference`] - Follows a caller-owned variable
//! - [`Callback`] - Calls a closure every tick
//!
//! ## Effects ([`effect`])
//!
//! - [`Sum`] - Adds all inputs (0 inputs → `0.0`)
//! - [`Mul`] - Multiplies all inputs (0 inputs → `1.0`)
//! - [`Map`] - Applies a closure to one input
//! - [`Delay`] - Fixed-length delay line; breaks feedback loops
//! - [`Mux`] - Picks a data input by a selector input

pub mod effect;
pub mod source;

// Re-export common types at the top level for convenience
pub use effect::{Delay, Map, Mul, Mux, Sum};
pub use source::{Callback, Constant, Reference};
