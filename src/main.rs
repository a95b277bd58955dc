//! matchcore - Demo Entry Point
//!
//! Drives the engine through a small submit/match/cancel session and prints
//! the execution reports as they arrive.

use matchcore::types::price::from_fixed;
use matchcore::types::{name, name_to_string, ExecutionReport, Order, Side};
use matchcore::Engine;

fn main() {
    println!("===========================================");
    println!("  matchcore - price-time matching engine");
    println!("===========================================");
    println!();

    let mut engine = Engine::new(|report: ExecutionReport| {
        println!(
            "  execution: {:<8} {:?} {} x {} shares of {}",
            name_to_string(&report.trader),
            report.side(),
            from_fixed(report.price),
            report.size,
            name_to_string(&report.symbol),
        );
    });

    let symbol = name("ACME");

    println!("Resting two bids and an ask...");
    let bid1 = engine.limit(Order::new(0, Side::Buy, 100_00, 10, name("alice"), symbol));
    let bid2 = engine.limit(Order::new(0, Side::Buy, 99_50, 5, name("carol"), symbol));
    engine.limit(Order::new(0, Side::Sell, 101_00, 8, name("bob"), symbol));
    println!(
        "  best bid {:?}  best ask {:?}",
        engine.book().best_bid().map(from_fixed),
        engine.book().best_ask().map(from_fixed),
    );
    println!();

    println!("Incoming sell at 99.50 for 12 shares sweeps both bid levels:");
    engine.limit(Order::new(0, Side::Sell, 99_50, 12, name("dave"), symbol));
    println!();

    println!("Book after the sweep:");
    println!("  resting orders: {}", engine.book().order_count());
    println!(
        "  best bid {:?}  best ask {:?}",
        engine.book().best_bid().map(from_fixed),
        engine.book().best_ask().map(from_fixed),
    );
    println!("  bid {} still resting: {}", bid2, engine.book().contains_order(bid2));
    println!();

    println!("Cancelling the remaining bid...");
    engine.cancel(bid1);
    engine.cancel(bid2);
    println!("  resting orders: {}", engine.book().order_count());
    println!();

    println!("State root: {}", hex::encode(engine.book().state_root()));
}
