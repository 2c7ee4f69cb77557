//! Per-instrument limit order book core: the process-wide clock, the
//! order/command/event value types, the two-sided book with its
//! insertion/matching/cancellation algorithms, and the output-sink trait
//! used to publish emitted records.
//!
//! This crate is the whole of the matching engine's correctness surface
//! and has no knowledge of sockets, async runtimes, or any wire format —
//! see the `matchd` crate for the concurrent multi-instrument dispatcher
//! and transport shell built on top of it.

pub mod book;
pub mod clock;
pub mod command;
pub mod event;
pub mod order;
pub mod sink;

pub use book::{Fill, OrderBook};
pub use clock::Clock;
pub use command::Command;
pub use event::LogRecord;
pub use order::{Order, Side, Symbol};
pub use sink::{OutputSink, RecordingSink};
