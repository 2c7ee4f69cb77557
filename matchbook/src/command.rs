//! Inbound command shapes accepted by the engine.

use crate::order::Symbol;

/// One command from a client's command stream.
///
/// Mirrors the three rows of the command-stream table: a new buy, a new
/// sell, or a cancel. Parsing/validation of these from any wire format is
/// explicitly outside this crate — see `matchd`'s codec module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    NewBuy {
        order_id: u32,
        instrument: Symbol,
        price: u32,
        count: u32,
    },
    NewSell {
        order_id: u32,
        instrument: Symbol,
        price: u32,
        count: u32,
    },
    Cancel {
        order_id: u32,
    },
}
