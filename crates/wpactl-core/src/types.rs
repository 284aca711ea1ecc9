//! Record types decoded from control daemon listings.
//!
//! Both record kinds are plain values: they are produced fresh by every
//! decode call and carry no identity beyond their fields.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::helpers::channel_from_frequency;

/// A 6-octet IEEE 802 hardware address.
///
/// Parses the colon (`aa:bb:cc:dd:ee:ff`), hyphen (`AA-BB-CC-DD-EE-FF`) and
/// dotted (`aabb.ccdd.eeff`) notations. Always displays in lower-case colon
/// notation, which is what the daemon emits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MacAddr([u8; 6]);

impl MacAddr {
    /// Wrap raw address bytes.
    pub const fn new(bytes: [u8; 6]) -> Self {
        MacAddr(bytes)
    }

    /// Return the raw 6-byte address.
    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

impl From<[u8; 6]> for MacAddr {
    fn from(bytes: [u8; 6]) -> Self {
        MacAddr(bytes)
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl fmt::Debug for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MacAddr({self})")
    }
}

/// Error returned when a string cannot be parsed into a [`MacAddr`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseMacError {
    /// Neither the 17-character separated form nor the 14-character dotted form.
    #[error("invalid MAC address length {0}")]
    Length(usize),
    /// A separator is missing or inconsistent.
    #[error("invalid MAC address separator at offset {0}")]
    Separator(usize),
    /// A non-hexadecimal character where a digit was expected.
    #[error("invalid MAC address digit at offset {0}")]
    Digit(usize),
}

impl FromStr for MacAddr {
    type Err = ParseMacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        let mut out = [0u8; 6];

        match b.len() {
            // aa:bb:cc:dd:ee:ff or aa-bb-cc-dd-ee-ff
            17 => {
                let sep = b[2];
                if sep != b':' && sep != b'-' {
                    return Err(ParseMacError::Separator(2));
                }
                for (i, octet) in out.iter_mut().enumerate() {
                    let at = i * 3;
                    if i > 0 && b[at - 1] != sep {
                        return Err(ParseMacError::Separator(at - 1));
                    }
                    *octet = hex_pair(b, at)?;
                }
            }
            // aabb.ccdd.eeff
            14 => {
                for group in 0..3 {
                    let at = group * 5;
                    if group > 0 && b[at - 1] != b'.' {
                        return Err(ParseMacError::Separator(at - 1));
                    }
                    out[group * 2] = hex_pair(b, at)?;
                    out[group * 2 + 1] = hex_pair(b, at + 2)?;
                }
            }
            n => return Err(ParseMacError::Length(n)),
        }

        Ok(MacAddr(out))
    }
}

fn hex_pair(b: &[u8], at: usize) -> Result<u8, ParseMacError> {
    let hi = hex_value(b[at]).ok_or(ParseMacError::Digit(at))?;
    let lo = hex_value(b[at + 1]).ok_or(ParseMacError::Digit(at + 1))?;
    Ok((hi << 4) | lo)
}

fn hex_value(c: u8) -> Option<u8> {
    char::from(c).to_digit(16).map(|d| d as u8)
}

/// Ordered list of bracket-delimited flag tokens, e.g. `[WPA2-PSK][ESS]`.
///
/// Order is preserved as encountered on the wire. `Display` renders the wire
/// form, so a decoded list re-encodes to the text it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Flags(Vec<String>);

impl Flags {
    /// An empty flag list.
    pub fn new() -> Self {
        Flags(Vec::new())
    }

    /// Whether `flag` is present (exact, case-sensitive match).
    pub fn contains(&self, flag: &str) -> bool {
        self.0.iter().any(|f| f == flag)
    }

    /// Iterate over the flags in wire order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of flags.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list carries no flags.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The flags as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Consume the list, returning the owned tokens.
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for Flags {
    fn from(flags: Vec<String>) -> Self {
        Flags(flags)
    }
}

impl<S: Into<String>> FromIterator<S> for Flags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Flags(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in &self.0 {
            write!(f, "[{flag}]")?;
        }
        Ok(())
    }
}

/// A network name, kept byte for byte as the daemon printed it.
///
/// SSIDs are arbitrary octets, so nothing here assumes UTF-8. `Display` and
/// [`to_string_lossy`](Ssid::to_string_lossy) substitute U+FFFD for invalid
/// sequences; [`as_bytes`](Ssid::as_bytes) always returns the original.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ssid(Vec<u8>);

impl Ssid {
    /// An empty SSID.
    pub fn new() -> Self {
        Ssid(Vec::new())
    }

    /// The raw SSID bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the SSID, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// The SSID as text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    /// The SSID as text, with invalid UTF-8 replaced.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the SSID is empty (hidden networks report none).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[u8]> for Ssid {
    fn from(bytes: &[u8]) -> Self {
        Ssid(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Ssid {
    fn from(bytes: Vec<u8>) -> Self {
        Ssid(bytes)
    }
}

impl From<&str> for Ssid {
    fn from(s: &str) -> Self {
        Ssid(s.as_bytes().to_vec())
    }
}

impl From<String> for Ssid {
    fn from(s: String) -> Self {
        Ssid(s.into_bytes())
    }
}

impl PartialEq<str> for Ssid {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for Ssid {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<[u8]> for Ssid {
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == other
    }
}

impl fmt::Display for Ssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_string_lossy())
    }
}

impl fmt::Debug for Ssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ssid(\"{}\")", self.0.escape_ascii())
    }
}

/// A configured network, one row of a `LIST_NETWORKS` reply.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Network {
    /// Daemon-assigned network ID.
    pub id: u32,
    /// Network name. May be empty.
    pub ssid: Ssid,
    /// BSSID as reported. Not validated: the daemon reports `any` when the
    /// network is not pinned to one access point.
    pub bssid: String,
    /// State markers such as `CURRENT`, `DISABLED` or `TEMP-DISABLED`.
    pub flags: Flags,
}

impl Network {
    /// Whether the daemon is currently associated with this network.
    pub fn is_current(&self) -> bool {
        self.flags.contains("CURRENT")
    }

    /// Whether the network is administratively disabled.
    pub fn is_disabled(&self) -> bool {
        self.flags.contains("DISABLED")
    }

    /// Render this record as one tab-separated listing line (no terminator).
    pub fn to_line(&self) -> Vec<u8> {
        let mut line = format!("{}\t", self.id).into_bytes();
        line.extend_from_slice(self.ssid.as_bytes());
        line.extend_from_slice(format!("\t{}\t{}", self.bssid, self.flags).as_bytes());
        line
    }
}

/// An access point seen by scanning, one row of a `SCAN_RESULTS` reply.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessPoint {
    /// Hardware address of the access point radio.
    pub bssid: MacAddr,
    /// Network name. May be empty or contain arbitrary bytes.
    pub ssid: Ssid,
    /// Centre frequency in MHz, as reported. Not range checked.
    pub frequency: i64,
    /// Signal level as reported by the driver, typically dBm.
    pub signal: i64,
    /// Capability and security markers such as `WPA2-PSK-CCMP` or `ESS`.
    pub flags: Flags,
}

impl AccessPoint {
    /// 802.11 channel number for this frequency, if it falls in a known band.
    pub fn channel(&self) -> Option<u8> {
        channel_from_frequency(self.frequency)
    }

    /// Frequency band, if known.
    pub fn band(&self) -> Option<Band> {
        Band::from_frequency(self.frequency)
    }

    /// Render this record as one tab-separated listing line (no terminator).
    pub fn to_line(&self) -> Vec<u8> {
        let mut line = format!(
            "{}\t{}\t{}\t{}\t",
            self.bssid, self.frequency, self.signal, self.flags
        )
        .into_bytes();
        line.extend_from_slice(self.ssid.as_bytes());
        line
    }
}

/// WiFi frequency band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// 2.4 GHz (channels 1-14).
    Band2_4GHz,
    /// 5 GHz.
    Band5GHz,
    /// 6 GHz (Wi-Fi 6E / 7).
    Band6GHz,
}

impl Band {
    /// Classify a centre frequency in MHz.
    pub fn from_frequency(mhz: i64) -> Option<Self> {
        match mhz {
            2400..=2500 => Some(Band::Band2_4GHz),
            5150..=5925 => Some(Band::Band5GHz),
            5926..=7125 => Some(Band::Band6GHz),
            _ => None,
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Band::Band2_4GHz => "2.4 GHz",
            Band::Band5GHz => "5 GHz",
            Band::Band6GHz => "6 GHz",
        };
        write!(f, "{s}")
    }
}
