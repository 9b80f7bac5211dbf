//! Selection and edge filter benchmarks over layered synthetic networks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use inbetween_net::graph::{filter_edges, select_nodes, Network, PathBounds};
use inbetween_net::types::Edge;

// =============================================================================
// Helper Functions: Deterministic Data Generation
// =============================================================================

/// `layers` layers of `width` nodes; every node links to `fan_out` nodes of
/// the next layer chosen by a fixed stride.
fn layered_network(layers: usize, width: usize, fan_out: usize) -> Network {
    let mut edges = Vec::with_capacity(layers * width * fan_out);
    for layer in 0..layers.saturating_sub(1) {
        for i in 0..width {
            for k in 0..fan_out {
                let j = (i * 7 + k * 13) % width;
                edges.push(Edge::new(format!("L{layer}N{i}"), format!("L{}N{j}", layer + 1)));
            }
        }
    }
    Network::from_edges(edges)
}

fn layer_seeds(layer: usize, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("L{layer}N{i}")).collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_select_nodes(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_nodes");
    for width in [100usize, 1_000, 5_000] {
        let network = layered_network(6, width, 4);
        let upstream = layer_seeds(0, 10);
        let downstream = layer_seeds(5, 10);
        group.throughput(Throughput::Elements(network.edge_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), &network, |b, network| {
            b.iter(|| {
                select_nodes(
                    black_box(network),
                    black_box(&downstream),
                    black_box(&upstream),
                    PathBounds::new(3, 3),
                )
            })
        });
    }
    group.finish();
}

fn bench_filter_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_edges");
    for width in [1_000usize, 10_000] {
        let network = layered_network(6, width, 4);
        let nodes: Vec<String> = network.nodes().iter().step_by(2).cloned().collect();
        group.throughput(Throughput::Elements(network.edge_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), &network, |b, network| {
            b.iter(|| filter_edges(black_box(network.edges()), black_box(&nodes)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_select_nodes, bench_filter_edges);
criterion_main!(benches);
