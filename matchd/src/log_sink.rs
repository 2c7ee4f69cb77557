//! Process-wide `OutputSink` that renders every record through
//! [`crate::codec::format_record`] and writes it, one line per record, to
//! a shared writer.

use std::io::Write;
use std::sync::Mutex;

use matchbook::{LogRecord, OutputSink};

use crate::codec::format_record;

/// Serializes concurrent emissions from every instrument's book through a
/// single `Mutex`-guarded writer, so interleaved lines from different
/// books never land mid-line of one another.
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer: Mutex::new(writer) }
    }
}

impl<W: Write + Send> OutputSink for WriterSink<W> {
    fn emit(&self, record: LogRecord) {
        let line = format_record(&record);
        let mut writer = self.writer.lock().expect("output writer poisoned");
        // Best-effort: a write failure here (closed stdout, full pipe) has
        // no recovery that matters to the engine's own correctness, so it
        // is logged rather than propagated.
        if let Err(err) = writeln!(writer, "{line}") {
            tracing::warn!(%err, "failed to write log record");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchbook::Symbol;

    #[test]
    fn writes_one_formatted_line_per_record() {
        let sink = WriterSink::new(Vec::new());
        sink.emit(LogRecord::OrderDeleted { order_id: 1, accepted: true, ts: 9 });
        sink.emit(LogRecord::OrderDeleted { order_id: 2, accepted: false, ts: 10 });

        let bytes = sink.writer.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, "DELETED 1 true 9\nDELETED 2 false 10\n");
    }

    #[test]
    fn formats_order_added_through_the_same_writer() {
        let sink = WriterSink::new(Vec::new());
        sink.emit(LogRecord::OrderAdded {
            order_id: 1,
            instrument: Symbol::new("AAPL"),
            price: 100,
            count: 5,
            is_sell: false,
            ts: 1,
        });

        let bytes = sink.writer.into_inner().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "ADDED 1 AAPL 100 5 false 1\n");
    }
}
