//! Transport-level error taxonomy.
//!
//! Nothing in `matchbook`'s core returns these — cancel misses are data
//! (`accepted = false`), not errors. These variants cover only the
//! non-core wire codec and connection handling.

/// Errors surfaced while reading and parsing a connection's command
/// stream. Either variant ends that connection's worker only.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error("malformed command: {0}")]
    MalformedCommand(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
