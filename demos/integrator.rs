//! Example: A leaky integrator driven by a knob
//!
//! Builds `y[n] = x[n] + 0.9 * y[n-1]`, where `x` follows a variable we
//! change while the loop runs.
//!
//! Run with: RUST_LOG=trace cargo run --example integrator

use std::cell::Cell;

use tickgraph::nodes::{Delay, Map, Reference, Sum};
use tickgraph::{Graph, GraphError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), GraphError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let knob = Cell::new(1.0);

    let mut graph = Graph::new();
    let x = graph.add(Reference::new(&knob));
    let sum = graph.add(Sum::new(2));
    let z = graph.add(Delay::new(1));
    let leak = graph.add(Map::new(|y| 0.9 * y));

    graph.bind(sum, 0, x, 0)?;
    graph.bind(sum, 1, leak, 0)?;
    graph.bind(leak, 0, z, 0)?;
    graph.bind(z, 0, sum, 0)?;

    println!("{:?}", graph);
    println!("feedback loops: {:?}", graph.feedback_loops());

    for tick in 0..40 {
        if tick == 20 {
            knob.set(0.0);
        }
        let y = graph.read(sum, tick, 0)?;
        println!("{:>3} {:>8.4}", tick, y);
    }

    Ok(())
}
