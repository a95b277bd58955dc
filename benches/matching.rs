//! Benchmarks for the matchcore engine.
//!
//! The optimization target is per-operation latency: mean and dispersion of
//! `limit` and `cancel` against a populated book.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- cross_at_touch
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.
//!
//! Latency benchmarks keep the book in steady state: every measured
//! iteration returns the book to the state it started from, so samples stay
//! comparable across the run. Long runs burn through the per-lifetime
//! identifier space; `recycle_ids` resets the engine before that bound and
//! the caller repopulates.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use std::time::Duration;

use matchcore::types::{name, ExecutionReport, Order, Side};
use matchcore::{Engine, MAX_TOTAL_ORDERS};

// ============================================================================
// HELPER FUNCTIONS - Deterministic order generation
// ============================================================================

fn sink(_: ExecutionReport) {}

type BenchEngine = Engine<fn(ExecutionReport)>;

fn bench_engine() -> BenchEngine {
    Engine::new(sink as fn(ExecutionReport))
}

/// Generate a deterministic buy order for benchmarking
fn make_buy(price: u64, quantity: u64) -> Order {
    Order::new(0, Side::Buy, price, quantity, name("bench-buy"), name("ACME"))
}

/// Generate a deterministic sell order for benchmarking
fn make_sell(price: u64, quantity: u64) -> Order {
    Order::new(0, Side::Sell, price, quantity, name("bench-sell"), name("ACME"))
}

/// Pre-populate depth on both sides away from the touch: asks upward from
/// `ask_base`, bids downward from `bid_base`, one order per tick.
fn populate_depth(engine: &mut BenchEngine, count: usize, bid_base: u64, ask_base: u64, qty: u64) {
    for i in 0..count {
        engine.limit(make_sell(ask_base + i as u64, qty));
        engine.limit(make_buy(bid_base - i as u64, qty));
    }
}

/// Reset the engine before the identifier space runs out.
///
/// Returns true when a reset happened so the caller can repopulate.
fn recycle_ids(engine: &mut BenchEngine, headroom: u64) -> bool {
    if engine.next_order_id() + headroom >= MAX_TOTAL_ORDERS as u64 {
        engine.reset();
        true
    } else {
        false
    }
}

/// Generate a vector of deterministic orders for throughput testing.
/// Alternates between buy and sell orders with slight price variations.
fn generate_order_batch(count: usize, seed: u64) -> Vec<Order> {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut orders = Vec::with_capacity(count);

    // Base price: 300.00 in fixed-point ticks
    let base_price: i64 = 30_000;

    for _ in 0..count {
        let is_buy = rng.gen_bool(0.5);
        // Price variation: +/- 5.00
        let price_offset: i64 = rng.gen_range(-500..=500);
        let price = (base_price + price_offset) as u64;
        // Quantity: 1 to 100 shares
        let quantity: u64 = rng.gen_range(1..=100);

        let order = if is_buy {
            make_buy(price, quantity)
        } else {
            make_sell(price, quantity)
        };
        orders.push(order);
    }

    orders
}

// ============================================================================
// BENCHMARK: Limit Latency (steady state)
// ============================================================================

fn bench_limit_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("limit");

    // Configure for micro-benchmarking
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(1000);

    // Benchmark: one full cross on an otherwise empty book.
    // Each iteration rests a sell and lifts it; the book ends empty.
    group.bench_function("cross_at_touch_empty_book", |b| {
        let mut engine = bench_engine();
        b.iter(|| {
            recycle_ids(&mut engine, 4);
            engine.limit(make_sell(30_000, 10));
            black_box(engine.limit(make_buy(30_000, 10)));
        });
    });

    // Benchmark: the same cross inside a 2k-order book. Depth rests away
    // from the touch and is never consumed.
    group.bench_function("cross_at_touch_2k_book", |b| {
        let mut engine = bench_engine();
        populate_depth(&mut engine, 1000, 29_900, 30_100, 100);
        b.iter(|| {
            if recycle_ids(&mut engine, 4) {
                populate_depth(&mut engine, 1000, 29_900, 30_100, 100);
            }
            engine.limit(make_sell(30_000, 10));
            black_box(engine.limit(make_buy(30_000, 10)));
        });
    });

    // Benchmark: a sweep across four price levels inside the spread
    group.bench_function("sweep_four_levels", |b| {
        let mut engine = bench_engine();
        populate_depth(&mut engine, 1000, 29_900, 30_100, 100);
        b.iter(|| {
            if recycle_ids(&mut engine, 10) {
                populate_depth(&mut engine, 1000, 29_900, 30_100, 100);
            }
            for (i, tick) in [30_010u64, 30_020, 30_030, 30_040].iter().enumerate() {
                engine.limit(make_sell(*tick, 10 + i as u64));
            }
            black_box(engine.limit(make_buy(30_040, 10 + 11 + 12 + 13)));
        });
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Order Operations
// ============================================================================
// Measure rest and cancel performance

fn bench_order_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_operations");

    group.measurement_time(Duration::from_secs(5));

    // Benchmark: rest then cancel on an empty book
    group.bench_function("rest_and_cancel_empty_book", |b| {
        let mut engine = bench_engine();
        b.iter(|| {
            recycle_ids(&mut engine, 2);
            let id = engine.limit(make_buy(30_000, 10));
            engine.cancel(black_box(id));
        });
    });

    // Benchmark: rest then cancel behind a 2k-order book
    group.bench_function("rest_and_cancel_2k_book", |b| {
        let mut engine = bench_engine();
        populate_depth(&mut engine, 1000, 29_900, 30_100, 100);
        b.iter(|| {
            if recycle_ids(&mut engine, 2) {
                populate_depth(&mut engine, 1000, 29_900, 30_100, 100);
            }
            // Joins the queue behind the resting bid at this tick
            let id = engine.limit(make_buy(29_500, 10));
            engine.cancel(black_box(id));
        });
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Throughput
// ============================================================================

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");

    group.measurement_time(Duration::from_secs(10));
    group.sample_size(20);

    for batch_size in [10_000, 50_000] {
        group.throughput(Throughput::Elements(batch_size as u64));

        group.bench_with_input(
            BenchmarkId::new("orders", batch_size),
            &batch_size,
            |b, &size| {
                // Generate orders deterministically (same seed = same orders)
                let orders = generate_order_batch(size, 42);

                b.iter_batched(
                    || (bench_engine(), orders.clone()),
                    |(mut engine, orders)| {
                        for order in orders {
                            engine.limit(order);
                        }
                        engine.book().order_count() // Prevent optimization
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Determinism Verification
// ============================================================================
// Ensure same sequence produces same results

fn bench_determinism(c: &mut Criterion) {
    let mut group = c.benchmark_group("determinism");

    group.measurement_time(Duration::from_secs(5));
    group.sample_size(20);

    // Benchmark the deterministic sequence
    group.bench_function("1k_deterministic_sequence", |b| {
        let orders = generate_order_batch(1000, 12345);

        b.iter_batched(
            || (bench_engine(), orders.clone()),
            |(mut engine, orders)| {
                for order in orders {
                    engine.limit(order);
                }
                black_box(engine.book().state_root())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// CRITERION ENTRY POINT
// ============================================================================

criterion_group!(
    benches,
    bench_limit_latency,
    bench_order_operations,
    bench_throughput,
    bench_determinism
);

criterion_main!(benches);
