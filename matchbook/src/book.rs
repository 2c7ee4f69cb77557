//! Per-instrument two-sided limit order book: insertion, price-time-priority
//! matching, and cancellation.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::Arc;

use crate::clock::Clock;
use crate::event::LogRecord;
use crate::order::{Order, Side, Symbol};
use crate::sink::OutputSink;

/// One fill produced by [`OrderBook::match_order`].
///
/// This is the same information carried by the emitted `OrderExecuted`
/// record, returned directly so in-process callers (and tests) don't have
/// to re-derive it from the sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fill {
    pub resting_order_id: u32,
    pub incoming_order_id: u32,
    pub execution_id: u32,
    pub price: u32,
    pub qty: u32,
}

type PriceLevels = BTreeMap<u32, VecDeque<Order>>;

/// A per-instrument book with two sides (`buys`, `sells`), each a map from
/// price to a FIFO queue of resting orders at that price.
///
/// Price priority falls out of `BTreeMap`'s key order: the best bid is the
/// highest key, the best ask the lowest. Within a level, orders are kept
/// sorted by ascending arrival timestamp so that time priority holds even
/// when two orders' lock acquisitions are reordered relative to their
/// timestamps (see the concurrency notes on `Order::new`). `index` maps a
/// resting order's id to the side and price holding it, so `cancel` never
/// has to scan either side.
pub struct OrderBook {
    instrument: Symbol,
    clock: Arc<Clock>,
    sink: Arc<dyn OutputSink>,
    buys: PriceLevels,
    sells: PriceLevels,
    index: HashMap<u32, (Side, u32)>,
}

impl OrderBook {
    pub fn new(instrument: Symbol, clock: Arc<Clock>, sink: Arc<dyn OutputSink>) -> Self {
        Self {
            instrument,
            clock,
            sink,
            buys: BTreeMap::new(),
            sells: BTreeMap::new(),
            index: HashMap::new(),
        }
    }

    pub fn instrument(&self) -> &Symbol {
        &self.instrument
    }

    fn side_map(&self, side: Side) -> &PriceLevels {
        match side {
            Side::Buy => &self.buys,
            Side::Sell => &self.sells,
        }
    }

    fn side_map_mut(&mut self, side: Side) -> &mut PriceLevels {
        match side {
            Side::Buy => &mut self.buys,
            Side::Sell => &mut self.sells,
        }
    }

    /// Best bid: the highest-priced, earliest resting buy, if any.
    pub fn best_bid(&self) -> Option<u32> {
        self.buys.keys().next_back().copied()
    }

    /// Best ask: the lowest-priced, earliest resting sell, if any.
    pub fn best_ask(&self) -> Option<u32> {
        self.sells.keys().next().copied()
    }

    /// Total resting quantity on `side`, across all price levels.
    pub fn total_resting(&self, side: Side) -> u32 {
        self.side_map(side)
            .values()
            .flat_map(|q| q.iter())
            .map(|o| o.count)
            .sum()
    }

    /// Snapshot of resting orders on `side`, best price first.
    pub fn resting_orders(&self, side: Side) -> Vec<Order> {
        let levels = self.side_map(side);
        match side {
            Side::Buy => levels
                .iter()
                .rev()
                .flat_map(|(_, q)| q.iter().cloned())
                .collect(),
            Side::Sell => levels
                .iter()
                .flat_map(|(_, q)| q.iter().cloned())
                .collect(),
        }
    }

    /// Inserts `order` into its side at the position preserving price-time
    /// priority (I3), and emits `OrderAdded` with a freshly drawn tick.
    ///
    /// Preconditions: `order.count > 0`.
    pub fn add(&mut self, order: Order) {
        debug_assert!(order.count > 0, "add() requires a positive remaining count");

        let order_id = order.order_id;
        let price = order.price;
        let ts = order.timestamp;
        let count = order.count;
        let side = order.side;
        let is_sell = side == Side::Sell;

        let level = self.side_map_mut(side).entry(price).or_default();
        let pos = level.iter().position(|o| o.timestamp > ts).unwrap_or(level.len());
        level.insert(pos, order);
        self.index.insert(order_id, (side, price));

        tracing::trace!(order_id, instrument = %self.instrument, price, count, is_sell, "order added");

        self.sink.emit(LogRecord::OrderAdded {
            order_id,
            instrument: self.instrument.clone(),
            price,
            count,
            is_sell,
            ts: self.clock.tick(),
        });
    }

    /// Matches `incoming` against the opposite side under price-time
    /// priority, decrementing `incoming.count` and each crossed resting
    /// order's `count` in place, and emitting one `OrderExecuted` per fill.
    ///
    /// Stops as soon as `incoming.count` reaches zero or the opposite
    /// side's best price no longer crosses — by the sort invariant, no
    /// later order on that side could cross either.
    pub fn match_order(&mut self, incoming: &mut Order) -> Vec<Fill> {
        let mut fills = Vec::new();

        while incoming.count > 0 {
            let opposite = match incoming.side {
                Side::Buy => Side::Sell,
                Side::Sell => Side::Buy,
            };
            let top_price = match opposite {
                Side::Sell => self.sells.keys().next().copied(),
                Side::Buy => self.buys.keys().next_back().copied(),
            };
            let Some(top_price) = top_price else {
                break;
            };

            let crosses = match incoming.side {
                Side::Buy => incoming.price >= top_price,
                Side::Sell => incoming.price <= top_price,
            };
            if !crosses {
                break;
            }

            let level = self
                .side_map_mut(opposite)
                .get_mut(&top_price)
                .expect("price level listed in the map must be non-empty");
            let top = level
                .front_mut()
                .expect("non-empty price level must have a front order");

            let trade_qty = incoming.count.min(top.count);
            incoming.count -= trade_qty;
            top.count -= trade_qty;
            top.execution_count += 1;

            let resting_order_id = top.order_id;
            let execution_id = top.execution_count;
            let price = top.price; // taker crosses the spread; executes at the maker's price

            let ts = self.clock.tick();
            tracing::trace!(
                resting_order_id,
                incoming_order_id = incoming.order_id,
                execution_id,
                price,
                qty = trade_qty,
                "order executed"
            );
            self.sink.emit(LogRecord::OrderExecuted {
                resting_order_id,
                incoming_order_id: incoming.order_id,
                execution_id,
                price,
                qty: trade_qty,
                ts,
            });
            fills.push(Fill {
                resting_order_id,
                incoming_order_id: incoming.order_id,
                execution_id,
                price,
                qty: trade_qty,
            });

            if top.count == 0 {
                level.pop_front();
                let level_empty = level.is_empty();
                if level_empty {
                    self.side_map_mut(opposite).remove(&top_price);
                }
                self.index.remove(&resting_order_id);
            }
        }

        fills
    }

    /// Searches both sides for a resting order with `order_id`. If found,
    /// removes it and emits `OrderDeleted(accepted = true)`; otherwise
    /// emits `OrderDeleted(accepted = false)`. Exactly one record is
    /// emitted either way. Returns whether the cancel hit.
    pub fn cancel(&mut self, order_id: u32) -> bool {
        let accepted = match self.index.remove(&order_id) {
            Some((side, price)) => {
                let levels = self.side_map_mut(side);
                if let Some(level) = levels.get_mut(&price) {
                    if let Some(pos) = level.iter().position(|o| o.order_id == order_id) {
                        level.remove(pos);
                        if level.is_empty() {
                            levels.remove(&price);
                        }
                        true
                    } else {
                        false
                    }
                } else {
                    false
                }
            }
            None => false,
        };

        tracing::trace!(order_id, accepted, "order cancel");
        self.sink.emit(LogRecord::OrderDeleted {
            order_id,
            accepted,
            ts: self.clock.tick(),
        });
        accepted
    }

    /// `true` if `buys` is non-increasing by price (ties non-decreasing by
    /// timestamp) and `sells` is non-decreasing by price (ties
    /// non-decreasing by timestamp). Used by tests to check I3.
    #[cfg(test)]
    fn sides_are_sorted(&self) -> bool {
        for (_, level) in self.buys.iter().chain(self.sells.iter()) {
            if level.iter().zip(level.iter().skip(1)).any(|(a, b)| a.timestamp > b.timestamp) {
                return false;
            }
        }
        true
    }

    /// `true` if no resting buy's price is `>=` any resting sell's price.
    /// Used by tests to check I4.
    #[cfg(test)]
    fn is_not_crossed(&self) -> bool {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => bid < ask,
            _ => true,
        }
    }
}
