//! Small string and radio helpers shared by decoders and command builders.

/// Wrap `s` in literal double quotes.
///
/// The daemon expects quoted values for string network variables such as
/// `ssid` and `psk`.
///
/// # Example
///
/// ```
/// use wpactl_core::quote;
///
/// assert_eq!(quote("HomeNet"), "\"HomeNet\"");
/// ```
pub fn quote(s: &str) -> String {
    format!("\"{s}\"")
}

/// Strip every leading and trailing double quote from `s`.
///
/// # Example
///
/// ```
/// use wpactl_core::{quote, unquote};
///
/// assert_eq!(unquote("\"HomeNet\""), "HomeNet");
/// assert_eq!(unquote(&quote("x")), "x");
/// ```
pub fn unquote(s: &str) -> &str {
    s.trim_matches('"')
}

/// Convert a centre frequency in MHz to an 802.11 channel number.
///
/// Returns `None` for frequencies outside the 2.4, 5 and 6 GHz channel plans,
/// negative ones included.
pub fn channel_from_frequency(mhz: i64) -> Option<u8> {
    let channel = match mhz {
        2412..=2472 => (mhz - 2407) / 5,
        2484 => 14,
        5170..=5885 => (mhz - 5000) / 5,
        5955..=7115 => (mhz - 5950) / 5,
        _ => return None,
    };
    u8::try_from(channel).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_wraps() {
        assert_eq!(quote(""), "\"\"");
        assert_eq!(quote("a b"), "\"a b\"");
    }

    #[test]
    fn unquote_strips_all_surrounding_quotes() {
        assert_eq!(unquote("\"\"x\"\""), "x");
        assert_eq!(unquote("x"), "x");
        assert_eq!(unquote("\"\""), "");
        // Interior quotes stay.
        assert_eq!(unquote("\"a\"b\""), "a\"b");
    }

    #[test]
    fn unquote_inverts_quote() {
        for s in ["", "HomeNet", "with space", "tab\there", "ünïcode", "[WPA2]"] {
            assert_eq!(unquote(&quote(s)), s);
        }
    }

    #[test]
    fn channel_conversion() {
        assert_eq!(channel_from_frequency(2412), Some(1));
        assert_eq!(channel_from_frequency(2437), Some(6));
        assert_eq!(channel_from_frequency(2484), Some(14));
        assert_eq!(channel_from_frequency(5180), Some(36));
        assert_eq!(channel_from_frequency(5745), Some(149));
        assert_eq!(channel_from_frequency(5955), Some(1));
        assert_eq!(channel_from_frequency(9999), None);
        assert_eq!(channel_from_frequency(0), None);
        assert_eq!(channel_from_frequency(-2412), None);
    }
}
