//! Error types for wpactl.
//!
//! All fallible decode operations return [`Result<T>`], which uses [`Error`]
//! as the error type. Line-scanning failures, receive-window truncation, and
//! typed field conversion failures are all captured here.

use std::num::ParseIntError;

use crate::types::ParseMacError;

/// Failure reported by the line-scanning primitive.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    /// A single line filled the scanner's buffer.
    #[error("line {line} is {len} bytes, filling the {limit} byte scan buffer")]
    LineTooLong {
        /// Zero-based index of the offending line.
        line: usize,
        /// Length of the line in bytes, excluding its terminator.
        len: usize,
        /// Size of the scan buffer the line did not fit in.
        limit: usize,
    },
}

/// The error type for all wpactl decode operations.
///
/// Lines with the wrong number of fields are skipped by the decoders and only
/// surface as [`Error::FieldCount`] when a record is converted directly. Every
/// other variant aborts the whole decode call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Splitting the buffer into lines failed.
    #[error("scan lines: {0}")]
    Scan(#[from] ScanError),

    /// The buffer filled the transport's receive window and could not be
    /// split, so the listing was almost certainly truncated.
    #[error("list too long: {bytes} B")]
    ListTooLong {
        /// Observed size of the received buffer.
        bytes: usize,
        /// The scan failure that exposed the truncation.
        #[source]
        source: ScanError,
    },

    /// A record was converted from the wrong number of columns.
    #[error("{kind} record needs {expected} fields, got {found}")]
    FieldCount {
        /// Record kind, e.g. `network`.
        kind: &'static str,
        /// Columns the record kind carries.
        expected: usize,
        /// Columns supplied.
        found: usize,
    },

    /// The network ID column is not a non-negative integer.
    #[error("parse id {input:?}: {source}")]
    ParseId {
        /// The raw field text.
        input: String,
        #[source]
        source: ParseIntError,
    },

    /// The BSSID column of a scan result is not a hardware address.
    #[error("parse mac {input:?}: {source}")]
    ParseMac {
        /// The raw field text.
        input: String,
        #[source]
        source: ParseMacError,
    },

    /// The frequency column is not an integer.
    #[error("parse frequency {input:?}: {source}")]
    ParseFrequency {
        /// The raw field text.
        input: String,
        #[source]
        source: ParseIntError,
    },

    /// The signal level column is not an integer.
    #[error("parse signal strength {input:?}: {source}")]
    ParseSignal {
        /// The raw field text.
        input: String,
        #[source]
        source: ParseIntError,
    },
}

impl Error {
    /// Whether this error reports a truncated listing rather than corrupt
    /// data. Callers typically re-query with a larger buffer in that case.
    pub fn is_truncation(&self) -> bool {
        matches!(self, Error::ListTooLong { .. })
    }

    /// Name of the record field that failed to convert, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Error::ParseId { .. } => Some("id"),
            Error::ParseMac { .. } => Some("bssid"),
            Error::ParseFrequency { .. } => Some("frequency"),
            Error::ParseSignal { .. } => Some("signal"),
            Error::Scan(_) | Error::ListTooLong { .. } | Error::FieldCount { .. } => None,
        }
    }
}

/// A convenience `Result` alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;
