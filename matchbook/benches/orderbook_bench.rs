use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matchbook::{Clock, Order, OrderBook, RecordingSink, Side, Symbol};

fn new_book(symbol: &str) -> OrderBook {
    OrderBook::new(
        Symbol::new(symbol),
        Arc::new(Clock::new()),
        Arc::new(RecordingSink::new()),
    )
}

fn bench_order_submission(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_submission");

    for &num_orders in [100u32, 1000, 10000].iter() {
        group.bench_with_input(
            BenchmarkId::new("non_crossing_orders", num_orders),
            &num_orders,
            |b, &num_orders: &u32| {
                b.iter(|| {
                    let clock = Arc::new(Clock::new());
                    let mut ob = OrderBook::new(
                        Symbol::new("AAPL"),
                        clock.clone(),
                        Arc::new(RecordingSink::new()),
                    );
                    for i in 0..num_orders {
                        let side = if i % 2 == 0 { Side::Buy } else { Side::Sell };
                        let price = if i % 2 == 0 {
                            10_000 - i
                        } else {
                            10_100 + i
                        };
                        let mut order = Order::new(i, price, 100, side, Symbol::new("AAPL"), &clock);
                        black_box(ob.match_order(&mut order));
                        if order.count > 0 {
                            ob.add(order);
                        }
                    }
                })
            },
        );
    }

    group.finish();
}

fn bench_order_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_matching");

    for &depth in [10u32, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("crossing_orders", depth),
            &depth,
            |b, &depth: &u32| {
                b.iter_batched(
                    || {
                        let clock = Arc::new(Clock::new());
                        let mut ob = new_book("AAPL");
                        for i in 0..depth {
                            let order =
                                Order::new(i, 10_000 + i, 100, Side::Sell, Symbol::new("AAPL"), &clock);
                            ob.add(order);
                        }
                        (ob, clock)
                    },
                    |(mut ob, clock)| {
                        let mut taker = Order::new(
                            999_999,
                            10_000 + depth,
                            100 * depth,
                            Side::Buy,
                            Symbol::new("AAPL"),
                            &clock,
                        );
                        black_box(ob.match_order(&mut taker));
                    },
                    criterion::BatchSize::SmallInput,
                )
            },
        );
    }

    group.finish();
}

fn bench_cancel(c: &mut Criterion) {
    c.bench_function("cancel_resting_order", |b| {
        b.iter_batched(
            || {
                let clock = Arc::new(Clock::new());
                let mut ob = new_book("AAPL");
                let order = Order::new(1, 10_000, 100, Side::Buy, Symbol::new("AAPL"), &clock);
                ob.add(order);
                ob
            },
            |mut ob| black_box(ob.cancel(1)),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_order_submission,
    bench_order_matching,
    bench_cancel
);
criterion_main!(benches);
