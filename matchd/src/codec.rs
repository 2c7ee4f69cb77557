//! Textual, newline-delimited, whitespace-separated command/event codec.
//!
//! This is an illustrative wire adapter, not a protocol clients must
//! validate against: §1 of the engine's specification explicitly places
//! "command parsing and argument validation" and "the connection
//! transport" outside the engine's correctness-critical core, so this
//! module stays a thin, swappable translation layer between bytes and
//! `matchbook::Command`/`matchbook::LogRecord`.

use matchbook::{Command, LogRecord, Symbol};

use crate::error::TransportError;

/// Parses one line of the inbound command protocol:
/// `BUY <order_id> <instrument> <price> <count>`,
/// `SELL <order_id> <instrument> <price> <count>`, or
/// `CANCEL <order_id>`.
pub fn parse_command(line: &str) -> Result<Command, TransportError> {
    let malformed = || TransportError::MalformedCommand(line.to_string());

    let mut parts = line.split_whitespace();
    let verb = parts.next().ok_or_else(malformed)?;

    match verb.to_ascii_uppercase().as_str() {
        "BUY" | "SELL" => {
            let order_id = next_u32(&mut parts, line)?;
            let instrument = parts.next().ok_or_else(malformed)?;
            let price = next_u32(&mut parts, line)?;
            let count = next_u32(&mut parts, line)?;
            if price == 0 || count == 0 {
                return Err(malformed());
            }
            let instrument = Symbol::new(instrument);
            Ok(if verb.eq_ignore_ascii_case("BUY") {
                Command::NewBuy { order_id, instrument, price, count }
            } else {
                Command::NewSell { order_id, instrument, price, count }
            })
        }
        "CANCEL" => {
            let order_id = next_u32(&mut parts, line)?;
            Ok(Command::Cancel { order_id })
        }
        _ => Err(malformed()),
    }
}

fn next_u32(parts: &mut std::str::SplitWhitespace<'_>, line: &str) -> Result<u32, TransportError> {
    parts
        .next()
        .ok_or_else(|| TransportError::MalformedCommand(line.to_string()))?
        .parse::<u32>()
        .map_err(|_| TransportError::MalformedCommand(line.to_string()))
}

/// Renders one emitted `LogRecord` as a single line of the outbound event
/// protocol, mirroring the field order of `parse_command`'s inbound verbs.
pub fn format_record(record: &LogRecord) -> String {
    match record {
        LogRecord::OrderAdded { order_id, instrument, price, count, is_sell, ts } => {
            format!("ADDED {order_id} {instrument} {price} {count} {is_sell} {ts}")
        }
        LogRecord::OrderExecuted { resting_order_id, incoming_order_id, execution_id, price, qty, ts } => {
            format!("EXECUTED {resting_order_id} {incoming_order_id} {execution_id} {price} {qty} {ts}")
        }
        LogRecord::OrderDeleted { order_id, accepted, ts } => {
            format!("DELETED {order_id} {accepted} {ts}")
        }
    }
}
