//! # wpactl -- Listing decoder for wireless control daemons
//!
//! `wpactl` decodes the tab-separated listings a wireless control daemon
//! (wpa_supplicant style control interface) sends back for `LIST_NETWORKS`
//! and `SCAN_RESULTS`. It is a pure decoder: the caller's transport sends the
//! command and hands over the reply bytes together with the size of its
//! receive buffer.
//!
//! ## Quick Start
//!
//! ```
//! use wpactl::{DEFAULT_MAX_RECEIVE_SIZE, parse_access_points};
//!
//! let reply = b"bssid / frequency / signal level / flags / ssid\n\
//!               aa:bb:cc:dd:ee:ff\t2412\t-45\t[WPA2-PSK][ESS]\tCafeWifi\n";
//!
//! let aps = parse_access_points(reply, DEFAULT_MAX_RECEIVE_SIZE)?;
//! assert_eq!(aps[0].bssid.to_string(), "aa:bb:cc:dd:ee:ff");
//! assert_eq!(aps[0].channel(), Some(1));
//! # Ok::<(), wpactl::Error>(())
//! ```
//!
//! ## Architecture
//!
//! | Crate                 | Purpose                                         |
//! |-----------------------|-------------------------------------------------|
//! | `wpactl-core`         | Records ([`Network`], [`AccessPoint`]), errors  |
//! | `wpactl-text-io`      | Line/flag decoding, listing decoders, commands  |
//! | `wpactl-test-harness` | Listing builders and receive-window model       |
//! | **`wpactl`**          | This facade crate -- re-exports everything      |
//!
//! ## Errors
//!
//! Lines with the wrong number of columns are skipped silently. A typed
//! column that fails to convert aborts the decode with
//! [`Error::ParseId`], [`Error::ParseMac`], [`Error::ParseFrequency`] or
//! [`Error::ParseSignal`]. A reply that could not be split into lines and
//! filled the receive window is reported as [`Error::ListTooLong`].
//!
//! SSIDs are arbitrary bytes on the wire and are kept that way in [`Ssid`];
//! only the other columns are read as text.

pub use wpactl_core::*;
pub use wpactl_text_io::{
    ListingDecoder, ListingRecord, commands, listing, parse_access_points, parse_flags,
    parse_networks, protocol, split_fields, split_lines,
};
