//! Order identity, side, instrument symbol, and the resting/in-flight order
//! record itself.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clock::Clock;

/// Buy or sell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

/// An opaque, immutable instrument symbol.
///
/// Wraps a plain `String` so call sites read `Symbol` rather than a bare
/// string wherever an instrument is expected; carries no validation beyond
/// what `String` already gives us.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// A resting or in-flight order.
///
/// Constructed once per incoming `NEW_BUY`/`NEW_SELL` command; `count` and
/// `execution_count` are the only fields a book ever mutates after
/// construction, and only while holding that book's lock.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: u32,
    pub price: u32,
    /// Remaining quantity. Strictly decreases on execution; zero means the
    /// order is no longer resting.
    pub count: u32,
    /// Number of executions against this order so far, starting at zero.
    pub execution_count: u32,
    pub side: Side,
    pub instrument: Symbol,
    /// Arrival timestamp, drawn from the `Clock` at construction. Used only
    /// as the book's tie-break sort key; never emitted on the wire.
    pub timestamp: u64,
}

impl Order {
    /// Draws `clock.tick()` exactly once and stores it as the arrival
    /// timestamp, before the order has touched any book lock.
    pub fn new(
        order_id: u32,
        price: u32,
        count: u32,
        side: Side,
        instrument: Symbol,
        clock: &Clock,
    ) -> Self {
        Self {
            order_id,
            price,
            count,
            execution_count: 0,
            side,
            instrument,
            timestamp: clock.tick(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_draws_exactly_one_tick() {
        let clock = Clock::new();
        let o = Order::new(1, 100, 10, Side::Buy, Symbol::new("AAPL"), &clock);
        assert_eq!(o.timestamp, 0);
        assert_eq!(o.execution_count, 0);
        // next order drawn from the same clock gets the next tick
        let o2 = Order::new(2, 100, 10, Side::Buy, Symbol::new("AAPL"), &clock);
        assert_eq!(o2.timestamp, 1);
    }

    #[test]
    fn symbol_equality_and_display() {
        let a = Symbol::from("AAPL");
        let b = Symbol::new("AAPL".to_string());
        assert_eq!(a, b);
        assert_eq!(format!("{a}"), "AAPL");
    }
}
