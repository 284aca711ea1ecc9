//! wpactl-core: Core types, helpers, and error definitions for wpactl.
//!
//! This crate defines the records decoded from a wireless control daemon's
//! listings and the errors a decode can fail with. Applications depend on
//! these types without pulling in the decoders themselves.
//!
//! # Key types
//!
//! - [`Network`] -- one configured network (`LIST_NETWORKS`)
//! - [`AccessPoint`] -- one scanned access point (`SCAN_RESULTS`)
//! - [`MacAddr`], [`Ssid`], [`Flags`] -- typed field values
//! - [`Error`] / [`Result`] -- error handling

pub mod error;
pub mod helpers;
pub mod receive;
pub mod types;

pub use error::{Error, Result, ScanError};
pub use helpers::{channel_from_frequency, quote, unquote};
pub use receive::{DEFAULT_MAX_RECEIVE_SIZE, MAX_LINE_LENGTH};
pub use types::*;
