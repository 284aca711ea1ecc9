//! Builder for daemon listing replies.
//!
//! [`ListingBuilder`] renders a header line followed by record lines, exactly
//! as the daemon formats `LIST_NETWORKS` and `SCAN_RESULTS` replies. Raw
//! lines can be mixed in to reproduce noise and corruption.
//!
//! # Example
//!
//! ```
//! use wpactl_test_harness::ListingBuilder;
//!
//! let reply = ListingBuilder::networks()
//!     .line("0\tHomeNet\tany\t[CURRENT]")
//!     .build();
//! assert_eq!(
//!     &reply[..],
//!     b"network id / ssid / bssid / flags\n0\tHomeNet\tany\t[CURRENT]\n"
//! );
//! ```

use bytes::{BufMut, Bytes, BytesMut};

use wpactl_core::{AccessPoint, Network};

/// Header line of a `LIST_NETWORKS` reply.
pub const NETWORKS_HEADER: &str = "network id / ssid / bssid / flags";

/// Header line of a `SCAN_RESULTS` reply.
pub const SCAN_RESULTS_HEADER: &str = "bssid / frequency / signal level / flags / ssid";

/// Incrementally renders a listing reply.
#[derive(Debug, Clone, Default)]
pub struct ListingBuilder {
    buf: BytesMut,
}

impl ListingBuilder {
    /// Start a reply with a custom header line.
    pub fn with_header(header: &str) -> Self {
        ListingBuilder::headerless().line(header)
    }

    /// Start a reply with no header line at all.
    pub fn headerless() -> Self {
        ListingBuilder {
            buf: BytesMut::new(),
        }
    }

    /// Start a `LIST_NETWORKS` reply.
    pub fn networks() -> Self {
        ListingBuilder::with_header(NETWORKS_HEADER)
    }

    /// Start a `SCAN_RESULTS` reply.
    pub fn scan_results() -> Self {
        ListingBuilder::with_header(SCAN_RESULTS_HEADER)
    }

    /// Append one raw line followed by a terminator.
    ///
    /// Takes text or bytes, so lines with non-UTF-8 SSIDs can be rendered.
    pub fn line(mut self, line: impl AsRef<[u8]>) -> Self {
        self.buf.put_slice(line.as_ref());
        self.buf.put_u8(b'\n');
        self
    }

    /// Append raw bytes with no terminator.
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.buf.put_slice(bytes);
        self
    }

    /// Append one network record line.
    pub fn network(self, network: &Network) -> Self {
        self.line(network.to_line())
    }

    /// Append a record line per network, in order.
    pub fn networks_from(self, networks: &[Network]) -> Self {
        networks.iter().fold(self, |b, n| b.network(n))
    }

    /// Append one access point record line.
    pub fn access_point(self, ap: &AccessPoint) -> Self {
        self.line(ap.to_line())
    }

    /// Append a record line per access point, in order.
    pub fn access_points(self, aps: &[AccessPoint]) -> Self {
        aps.iter().fold(self, |b, ap| b.access_point(ap))
    }

    /// Number of bytes rendered so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been rendered yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Finish the reply.
    pub fn build(self) -> Bytes {
        self.buf.freeze()
    }
}
