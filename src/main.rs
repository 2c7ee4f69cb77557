//! Matching engine performance test suite.
//!
//! Runs performance tests followed by a basic trading demo showing
//! order placement, matching, and fill generation.

use matchbook::{Clock, Order, OrderBook, RecordingSink, Side, Symbol};
use std::sync::Arc;


/// Main entry point - runs performance tests and demo.
fn main() {
    println!("=== Matching Engine Performance Lab ===");

    latency_test::run_latency_tests();
    latency_test::run_throughput_test();

    println!("\n=== 1-Minute Sustained Throughput Test ===");
    latency_test::run_throughput_test_1min();

    println!("\n=== Basic Demo ===");
    run_basic_demo();
}

/// Demonstrates basic order book functionality with fill generation.
fn run_basic_demo() {
    let clock = Arc::new(Clock::new());
    let sink = Arc::new(RecordingSink::new());
    let symbol = Symbol::new("AAPL");
    let mut ob = OrderBook::new(symbol.clone(), clock.clone(), sink);

    println!("matching engine - order book demo");

    let ask_order = Order::new(1, 15_000, 100, Side::Sell, symbol.clone(), &clock);
    let bid_order = Order::new(2, 14_950, 50, Side::Buy, symbol.clone(), &clock);

    println!("submitting ask order: {} @ {}", ask_order.count, ask_order.price);
    ob.add(ask_order);

    println!("submitting bid order: {} @ {}", bid_order.count, bid_order.price);
    ob.add(bid_order);

    println!("best bid: {:?}", ob.best_bid());
    println!("best ask: {:?}", ob.best_ask());

    // Crossing bid that will execute against the resting ask.
    let mut crossing_bid = Order::new(3, 15_000, 75, Side::Buy, symbol.clone(), &clock);

    println!("submitting crossing bid: {} @ {}", crossing_bid.count, crossing_bid.price);
    let fills = ob.match_order(&mut crossing_bid);
    if crossing_bid.count > 0 {
        ob.add(crossing_bid);
    }

    println!("fills executed: {}", fills.len());
    for fill in fills {
        println!("  fill: {} shares @ {} ticks (resting order {})", fill.qty, fill.price, fill.resting_order_id);
    }

    println!("final best bid: {:?}", ob.best_bid());
    println!("final best ask: {:?}", ob.best_ask());
}
