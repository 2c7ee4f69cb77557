//! The serializing output sink that receives emitted log records.

use std::sync::Mutex;

use crate::event::LogRecord;

/// A serializing writer for log records.
///
/// From the engine's perspective the sink behaves as a single writer: a
/// record is never partial, and implementations must tolerate `emit` being
/// called concurrently from whichever threads hold different books' locks
/// at once. The engine makes no ordering promise across instruments beyond
/// what each record's own `ts` field encodes.
pub trait OutputSink: Send + Sync {
    fn emit(&self, record: LogRecord);
}

/// An in-memory collector sink. Used by tests and by the bundled demo
/// binary in place of a real wire writer.
#[derive(Default)]
pub struct RecordingSink {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every record emitted so far, in emission
    /// order.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl OutputSink for RecordingSink {
    fn emit(&self, record: LogRecord) {
        self.records.lock().unwrap().push(record);
    }
}
