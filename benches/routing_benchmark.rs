use criterion::{black_box, criterion_group, criterion_main, Criterion};
use delivery_network::{InMemoryDirectory, OrderId, RoutingEngine};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn benchmark_routing(c: &mut Criterion) {
    let (directory, order) = create_benchmark_network(200, 4);
    let engine = RoutingEngine::new(directory);

    // Benchmark the full two-phase routing computation
    c.bench_function("resolve_routing_200_cities", |b| {
        b.iter(|| engine.resolve_routing(black_box(1), black_box(order)))
    });

    // Benchmark position queries against a dispatched order
    let (directory, order) = create_benchmark_network(200, 4);
    let mut engine = RoutingEngine::new(directory);
    engine.complete_order(order, 0).unwrap();

    c.bench_function("current_location_200_cities", |b| {
        b.iter(|| engine.current_location(black_box(order), black_box(25)))
    });
}

// Create a connected random network with shops sprinkled over it
fn create_benchmark_network(city_count: u32, extra_links_per_city: u32) -> (InMemoryDirectory, OrderId) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut directory = InMemoryDirectory::new();

    for city in 1..=city_count {
        directory.add_city(city);
    }

    // Spanning chain keeps the network connected
    for city in 1..city_count {
        directory.add_link(city, city + 1, rng.gen_range(1..=10));
    }

    // Random extra links, skipping pairs already connected by the chain
    let mut used: std::collections::BTreeSet<(u32, u32)> =
        (1..city_count).map(|city| (city, city + 1)).collect();
    for _ in 0..city_count * extra_links_per_city {
        let a = rng.gen_range(1..=city_count);
        let b = rng.gen_range(1..=city_count);
        let pair = if a < b { (a, b) } else { (b, a) };
        if a != b && used.insert(pair) {
            directory.add_link(pair.0, pair.1, rng.gen_range(1..=10));
        }
    }

    // Every tenth city hosts a shop
    for city in (10..=city_count).step_by(10) {
        directory.add_shop(city);
    }

    let order = directory.place_order(1);
    for city in [20, 90, 150] {
        directory.add_supply(order, city);
    }

    (directory, order)
}

criterion_group!(benches, benchmark_routing);
criterion_main!(benches);
