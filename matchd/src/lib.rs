//! Process shell around `matchbook`: the multi-instrument `Engine`, the
//! textual wire codec, the log sink that renders emitted records, and the
//! TCP connection loop that feeds commands in.

pub mod codec;
pub mod engine;
pub mod error;
pub mod log_sink;
pub mod transport;

pub use engine::Engine;
pub use error::TransportError;
pub use log_sink::WriterSink;
pub use transport::run_server;
