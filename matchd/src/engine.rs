//! Top-level dispatcher: owns the instrument -> book map and the global
//! order_id -> instrument map, and routes each inbound command to the
//! right book under that book's own lock.

use std::sync::Arc;

use dashmap::DashMap;
use matchbook::{Clock, Command, LogRecord, Order, OrderBook, OutputSink, Side, Symbol};
use tokio::sync::RwLock;

/// Concurrent multi-instrument matching engine.
///
/// `books` maps an instrument symbol to its own `RwLock`-guarded book;
/// once installed a book is never removed, so handles into it stay valid
/// for the engine's lifetime. `order_instrument` maps a resting order's id
/// to the instrument its book lives on, since `CANCEL` commands carry no
/// instrument of their own. Both maps use `DashMap` so first-touch lookup
/// and creation race safely across connections without a separate
/// reader-writer lock around the whole map.
pub struct Engine {
    books: DashMap<Symbol, Arc<RwLock<OrderBook>>>,
    order_instrument: DashMap<u32, Symbol>,
    clock: Arc<Clock>,
    sink: Arc<dyn OutputSink>,
}

impl Engine {
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self {
            books: DashMap::new(),
            order_instrument: DashMap::new(),
            clock: Arc::new(Clock::new()),
            sink,
        }
    }

    /// Number of instruments that currently have a book.
    pub fn instrument_count(&self) -> usize {
        self.books.len()
    }

    /// Best bid/ask for `instrument`, or `None` if it has no book yet.
    /// Read-only: never creates a book as a side effect.
    pub async fn best_prices(&self, instrument: &Symbol) -> Option<(Option<u32>, Option<u32>)> {
        let book = self.books.get(instrument)?.clone();
        let book = book.read().await;
        Some((book.best_bid(), book.best_ask()))
    }

    /// Looks up (creating if absent) the book for `instrument`. Safe under
    /// concurrent first-touch: `DashMap::entry` performs the lookup-or-
    /// create atomically.
    fn book_for(&self, instrument: &Symbol) -> Arc<RwLock<OrderBook>> {
        if let Some(existing) = self.books.get(instrument) {
            return existing.clone();
        }
        self.books
            .entry(instrument.clone())
            .or_insert_with(|| {
                Arc::new(RwLock::new(OrderBook::new(
                    instrument.clone(),
                    self.clock.clone(),
                    self.sink.clone(),
                )))
            })
            .clone()
    }

    /// Processes one inbound command to completion.
    ///
    /// `NEW_BUY`/`NEW_SELL`: constructs the order (drawing its arrival
    /// timestamp), matches it against the book, and — if any quantity
    /// remains — adds it to the book and records `order_id -> instrument`.
    /// `CANCEL`: resolves the instrument through the order_instrument map;
    /// an unknown id is a miss reported without touching any book.
    pub async fn dispatch(&self, cmd: Command) {
        match cmd {
            Command::NewBuy { order_id, instrument, price, count } => {
                self.dispatch_new(order_id, instrument, price, count, Side::Buy).await;
            }
            Command::NewSell { order_id, instrument, price, count } => {
                self.dispatch_new(order_id, instrument, price, count, Side::Sell).await;
            }
            Command::Cancel { order_id } => {
                self.dispatch_cancel(order_id).await;
            }
        }
    }

    async fn dispatch_new(&self, order_id: u32, instrument: Symbol, price: u32, count: u32, side: Side) {
        // Arrival timestamp is drawn here, before the book's lock is ever
        // acquired; see `Order::new`'s note on how this interacts with
        // time priority under concurrent arrivals on the same instrument.
        let mut order = Order::new(order_id, price, count, side, instrument.clone(), &self.clock);

        let book = self.book_for(&instrument);
        let mut book = book.write().await;
        book.match_order(&mut order);
        if order.count > 0 {
            book.add(order);
            drop(book);
            self.order_instrument.insert(order_id, instrument);
        }
    }

    async fn dispatch_cancel(&self, order_id: u32) {
        let Some(instrument) = self.order_instrument.get(&order_id).map(|e| e.value().clone()) else {
            self.sink.emit(LogRecord::OrderDeleted {
                order_id,
                accepted: false,
                ts: self.clock.tick(),
            });
            return;
        };

        let book = self.book_for(&instrument);
        let mut book = book.write().await;
        let accepted = book.cancel(order_id);
        drop(book);

        if accepted {
            self.order_instrument.remove(&order_id);
        }
    }
}
