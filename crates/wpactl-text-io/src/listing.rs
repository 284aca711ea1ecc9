//! Decoders for `LIST_NETWORKS` and `SCAN_RESULTS` replies.
//!
//! Both listings share one shape: a header line to discard, then one record
//! per line with a fixed number of tab-separated columns. Validation runs in
//! two tiers. A line with the wrong column count is protocol noise and is
//! skipped. A line with the right count whose typed columns fail to convert
//! means the listing is corrupt, and the whole decode fails.
//!
//! # Example
//!
//! ```
//! use wpactl_text_io::listing::ListingDecoder;
//!
//! let reply = b"bssid / frequency / signal level / flags / ssid\n\
//!               aa:bb:cc:dd:ee:ff\t2412\t-45\t[WPA2-PSK][ESS]\tCafeWifi\n";
//!
//! let aps = ListingDecoder::new().decode_access_points(reply).unwrap();
//! assert_eq!(aps[0].ssid, "CafeWifi");
//! assert_eq!(aps[0].signal, -45);
//! ```

use std::borrow::Cow;

use tracing::{debug, trace};

use wpactl_core::{
    AccessPoint, DEFAULT_MAX_RECEIVE_SIZE, Error, MAX_LINE_LENGTH, MacAddr, Network, Result, Ssid,
};

use crate::protocol::{parse_flags, split_fields, split_header, split_lines};

/// A record kind that can be decoded from one listing line.
pub trait ListingRecord: Sized {
    /// Exact number of tab-separated columns a record line carries.
    const FIELDS: usize;

    /// Short name used in diagnostics.
    const KIND: &'static str;

    /// Convert the columns of one line.
    ///
    /// Fails with [`Error::FieldCount`] unless `fields.len()` is
    /// [`FIELDS`](Self::FIELDS). SSID columns are kept as raw bytes; every
    /// other column is read as text.
    fn from_fields(fields: &[&[u8]]) -> Result<Self>;
}

fn field_count<R: ListingRecord>(fields: &[&[u8]]) -> Error {
    Error::FieldCount {
        kind: R::KIND,
        expected: R::FIELDS,
        found: fields.len(),
    }
}

fn text(field: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(field)
}

impl ListingRecord for Network {
    const FIELDS: usize = 4;
    const KIND: &'static str = "network";

    fn from_fields(fields: &[&[u8]]) -> Result<Self> {
        let &[id, ssid, bssid, flags] = fields else {
            return Err(field_count::<Self>(fields));
        };

        let id = text(id);
        let id = id.parse::<u32>().map_err(|source| Error::ParseId {
            input: id.into_owned(),
            source,
        })?;

        Ok(Network {
            id,
            ssid: Ssid::from(ssid),
            bssid: text(bssid).into_owned(),
            flags: parse_flags(&text(flags)),
        })
    }
}

impl ListingRecord for AccessPoint {
    const FIELDS: usize = 5;
    const KIND: &'static str = "access point";

    fn from_fields(fields: &[&[u8]]) -> Result<Self> {
        let &[bssid, frequency, signal, flags, ssid] = fields else {
            return Err(field_count::<Self>(fields));
        };

        let bssid = text(bssid);
        let bssid = bssid.parse::<MacAddr>().map_err(|source| Error::ParseMac {
            input: bssid.into_owned(),
            source,
        })?;
        let frequency = text(frequency);
        let frequency = frequency
            .parse::<i64>()
            .map_err(|source| Error::ParseFrequency {
                input: frequency.into_owned(),
                source,
            })?;
        let signal = text(signal);
        let signal = signal
            .parse::<i64>()
            .map_err(|source| Error::ParseSignal {
                input: signal.into_owned(),
                source,
            })?;

        Ok(AccessPoint {
            bssid,
            ssid: Ssid::from(ssid),
            frequency,
            signal,
            flags: parse_flags(&text(flags)),
        })
    }
}

/// Configurable listing decoder.
///
/// Holds the transport's receive-window size, used to tell a truncated reply
/// from a genuine scan failure, and the line-scanner token limit. Defaults are
/// [`DEFAULT_MAX_RECEIVE_SIZE`] and [`MAX_LINE_LENGTH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingDecoder {
    max_receive_size: usize,
    max_line_length: usize,
}

impl ListingDecoder {
    /// Create a decoder with default limits.
    pub fn new() -> Self {
        ListingDecoder {
            max_receive_size: DEFAULT_MAX_RECEIVE_SIZE,
            max_line_length: MAX_LINE_LENGTH,
        }
    }

    /// Set the transport's receive-window size in bytes.
    pub fn max_receive_size(mut self, bytes: usize) -> Self {
        self.max_receive_size = bytes;
        self
    }

    /// Set the longest line the scanner accepts, in bytes.
    pub fn max_line_length(mut self, bytes: usize) -> Self {
        self.max_line_length = bytes;
        self
    }

    /// The configured receive-window size.
    pub fn receive_size(&self) -> usize {
        self.max_receive_size
    }

    /// The configured line length limit.
    pub fn line_limit(&self) -> usize {
        self.max_line_length
    }

    /// Decode a `LIST_NETWORKS` reply.
    pub fn decode_networks(&self, buf: &[u8]) -> Result<Vec<Network>> {
        self.decode(buf)
    }

    /// Decode a `SCAN_RESULTS` reply.
    pub fn decode_access_points(&self, buf: &[u8]) -> Result<Vec<AccessPoint>> {
        self.decode(buf)
    }

    /// Decode every record line of `buf` as `R`, in listing order.
    pub fn decode<R: ListingRecord>(&self, buf: &[u8]) -> Result<Vec<R>> {
        let lines = self.lines(buf)?;

        let mut records = Vec::new();
        for (index, line) in lines.iter().enumerate() {
            let fields = split_fields(line);
            if fields.len() != R::FIELDS {
                trace!(
                    line = index,
                    fields = fields.len(),
                    expected = R::FIELDS,
                    "skipping {} line",
                    R::KIND
                );
                continue;
            }
            records.push(R::from_fields(&fields)?);
        }

        debug!(
            kind = R::KIND,
            records = records.len(),
            bytes = buf.len(),
            "decoded listing"
        );
        Ok(records)
    }

    /// Drop the header and split the rest into lines, classifying a scan
    /// failure in a saturated receive window as truncation.
    fn lines<'a>(&self, buf: &'a [u8]) -> Result<Vec<&'a [u8]>> {
        let split = split_header(buf);

        split_lines(split.body, self.max_line_length).map_err(|source| {
            if buf.len() >= split.saturation_threshold(self.max_receive_size) {
                Error::ListTooLong {
                    bytes: buf.len(),
                    source,
                }
            } else {
                Error::Scan(source)
            }
        })
    }
}

impl Default for ListingDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a `LIST_NETWORKS` reply received through a transport whose receive
/// window is `max_receive_size` bytes.
///
/// # Example
///
/// ```
/// use wpactl_text_io::listing::parse_networks;
///
/// let reply = b"network id / ssid / bssid / flags\n\
///               1\tHomeNet\t00:11:22:33:44:55\t[CURRENT][PSK]\n";
/// let nets = parse_networks(reply, 4096).unwrap();
/// assert_eq!(nets[0].id, 1);
/// assert!(nets[0].is_current());
/// ```
pub fn parse_networks(buf: &[u8], max_receive_size: usize) -> Result<Vec<Network>> {
    ListingDecoder::new()
        .max_receive_size(max_receive_size)
        .decode_networks(buf)
}

/// Decode a `SCAN_RESULTS` reply received through a transport whose receive
/// window is `max_receive_size` bytes.
pub fn parse_access_points(buf: &[u8], max_receive_size: usize) -> Result<Vec<AccessPoint>> {
    ListingDecoder::new()
        .max_receive_size(max_receive_size)
        .decode_access_points(buf)
}
