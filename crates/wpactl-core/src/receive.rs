//! Receive-window limits of the control channel transport.
//!
//! The transport reads each reply into a fixed-size buffer. A reply that
//! fills that buffer has most likely been cut short, which is what the
//! listing decoders check when line scanning fails. The transport owns the
//! real value and passes it to the decoders; these constants are defaults
//! for callers that have nothing better.

/// Default size of the transport's receive buffer in bytes.
///
/// Matches the reply buffer of the daemon's own command-line client.
pub const DEFAULT_MAX_RECEIVE_SIZE: usize = 4096;

/// Size of the line scanner's buffer in bytes.
///
/// A line has to fit in the buffer together with its terminator, so the
/// longest accepted line is one byte shorter.
pub const MAX_LINE_LENGTH: usize = 64 * 1024;
