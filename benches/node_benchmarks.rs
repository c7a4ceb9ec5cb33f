use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tickgraph::nodes::{Constant, Delay, Mul, Sum};
use tickgraph::Graph;

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("integrator tick", |b| {
        let mut graph = Graph::new();
        let one = graph.add(Constant::new(1.0));
        let z = graph.add(Delay::new(1));
        let sum = graph.add(Sum::new(2));
        graph.bind(sum, 0, one, 0).unwrap();
        graph.bind(sum, 1, z, 0).unwrap();
        graph.bind(z, 0, sum, 0).unwrap();

        let mut tick = 0u64;
        b.iter(move || {
            tick += 1;
            black_box(graph.read(sum, tick, 0).unwrap())
        })
    });

    c.bench_function("shared subgraph tick", |b| {
        // a ladder where every rung reads the previous one twice
        let mut graph = Graph::new();
        let mut prev = graph.add(Constant::new(1.0));
        for _ in 0..32 {
            let rung = graph.add(Mul::new(2));
            graph.bind(rung, 0, prev, 0).unwrap();
            graph.bind(rung, 1, prev, 0).unwrap();
            prev = rung;
        }

        let mut tick = 0u64;
        b.iter(move || {
            tick += 1;
            black_box(graph.read(prev, tick, 0).unwrap())
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
