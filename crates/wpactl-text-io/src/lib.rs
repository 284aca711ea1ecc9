//! Text-protocol decoding for wireless control daemon listings.
//!
//! This crate turns raw `LIST_NETWORKS` and `SCAN_RESULTS` replies into typed
//! records and builds the outbound command datagrams. It never touches a
//! socket: callers hand in the bytes their transport received, along with the
//! size of the transport's receive window.
//!
//! # Architecture
//!
//! - [`protocol`] — line splitting, header handling, flag lists
//! - [`listing`] — network and access point decoders
//! - [`commands`] — command builders and short reply parsers

pub mod commands;
pub mod listing;
pub mod protocol;

pub use listing::{ListingDecoder, ListingRecord, parse_access_points, parse_networks};
pub use protocol::{parse_flags, split_fields, split_lines};
