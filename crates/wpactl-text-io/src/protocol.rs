//! Shared line and flag decoding for control daemon listings.
//!
//! Listing replies are newline-separated text. The first line is a column
//! header; every following line is one record with tab-separated columns.
//! Flag columns hold zero or more bracket-wrapped tokens concatenated with no
//! separator, e.g. `[WPA2-PSK-CCMP][ESS]`.

use wpactl_core::{Flags, ScanError};

/// Byte that terminates every listing line.
pub const LINE_TERMINATOR: u8 = b'\n';

/// Column separator within a record line.
pub const FIELD_SEPARATOR: u8 = b'\t';

/// Separator between adjacent flag tokens once the outer brackets are gone.
pub const FLAG_DELIMITER: &str = "][";

/// Split a listing buffer into its header offset and the remaining body.
///
/// Returned by [`split_header`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderSplit<'a> {
    /// Offset of the first line terminator, or `None` if there is none.
    pub offset: Option<usize>,
    /// The part of the buffer left for record decoding.
    pub body: &'a [u8],
}

impl HeaderSplit<'_> {
    /// Smallest buffer size that counts as a saturated receive window of
    /// `max_receive_size` bytes, given this header offset.
    ///
    /// With no terminator at all the threshold sits one byte past the window.
    pub fn saturation_threshold(&self, max_receive_size: usize) -> usize {
        match self.offset {
            Some(offset) => max_receive_size.saturating_sub(offset),
            None => max_receive_size.saturating_add(1),
        }
    }
}

/// Drop the header line from a listing buffer.
///
/// If the first terminator sits at a positive offset, everything before it is
/// discarded (the terminator itself stays, so the body starts with an empty
/// line). A terminator at offset 0, or no terminator at all, leaves the buffer
/// untouched.
///
/// # Example
///
/// ```
/// use wpactl_text_io::protocol::split_header;
///
/// let split = split_header(b"bssid / frequency\nrow");
/// assert_eq!(split.offset, Some(17));
/// assert_eq!(split.body, b"\nrow");
///
/// let split = split_header(b"\nrow");
/// assert_eq!(split.offset, Some(0));
/// assert_eq!(split.body, b"\nrow");
/// ```
pub fn split_header(buf: &[u8]) -> HeaderSplit<'_> {
    let offset = buf.iter().position(|&b| b == LINE_TERMINATOR);
    let body = match offset {
        Some(i) if i > 0 => &buf[i..],
        _ => buf,
    };
    HeaderSplit { offset, body }
}

/// Split a byte buffer into lines.
///
/// Lines are returned without their terminator, borrowed from `buf` with
/// their bytes untouched; a carriage return right before the terminator is
/// dropped. Empty lines are kept, but a final terminator does not produce a
/// trailing empty line.
///
/// `max_line_length` is the size of the scan buffer. A line has to fit in it
/// with room to spare for its terminator, so one of `max_line_length` bytes
/// or more fails with [`ScanError::LineTooLong`]. A carriage return counts
/// toward that length.
///
/// # Example
///
/// ```
/// use wpactl_text_io::protocol::split_lines;
///
/// let lines = split_lines(b"a\n\nb\r\n", 1024).unwrap();
/// assert_eq!(lines, [b"a".as_slice(), b"".as_slice(), b"b".as_slice()]);
/// ```
pub fn split_lines(buf: &[u8], max_line_length: usize) -> Result<Vec<&[u8]>, ScanError> {
    let mut lines = Vec::new();
    let mut rest = buf;

    while !rest.is_empty() {
        let (line, next) = match rest.iter().position(|&b| b == LINE_TERMINATOR) {
            Some(pos) => (&rest[..pos], &rest[pos + 1..]),
            None => (rest, &rest[rest.len()..]),
        };

        if line.len() >= max_line_length {
            return Err(ScanError::LineTooLong {
                line: lines.len(),
                len: line.len(),
                limit: max_line_length,
            });
        }

        lines.push(line.strip_suffix(b"\r").unwrap_or(line));
        rest = next;
    }

    Ok(lines)
}

/// Split one line into its tab-separated columns.
///
/// Always yields at least one column; `n` separators give `n + 1` columns.
pub fn split_fields(line: &[u8]) -> Vec<&[u8]> {
    line.split(|&b| b == FIELD_SEPARATOR).collect()
}

/// Parse a flag column such as `[WPA2-PSK][ESS]`.
///
/// One leading `[` and one trailing `]` are stripped and the remainder is
/// split on `][`. Never fails: text without brackets comes back as a single
/// flag, and an empty remainder gives an empty list.
///
/// # Example
///
/// ```
/// use wpactl_text_io::protocol::parse_flags;
///
/// let flags = parse_flags("[WPA2-PSK][ESS]");
/// assert_eq!(flags.iter().collect::<Vec<_>>(), vec!["WPA2-PSK", "ESS"]);
/// assert!(parse_flags("[]").is_empty());
/// ```
pub fn parse_flags(s: &str) -> Flags {
    let s = s.strip_prefix('[').unwrap_or(s);
    let s = s.strip_suffix(']').unwrap_or(s);

    if s.is_empty() {
        return Flags::new();
    }

    s.split(FLAG_DELIMITER).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: usize = wpactl_core::MAX_LINE_LENGTH;

    fn flags(s: &str) -> Vec<String> {
        parse_flags(s).into_vec()
    }

    fn text_lines(buf: &[u8]) -> Vec<String> {
        split_lines(buf, LIMIT)
            .unwrap()
            .into_iter()
            .map(|l| String::from_utf8_lossy(l).into_owned())
            .collect()
    }

    // -----------------------------------------------------------------------
    // split_lines
    // -----------------------------------------------------------------------

    #[test]
    fn split_empty_buffer() {
        assert!(text_lines(b"").is_empty());
    }

    #[test]
    fn split_without_trailing_terminator() {
        assert_eq!(text_lines(b"a\nb"), vec!["a", "b"]);
    }

    #[test]
    fn split_trailing_terminator_adds_no_line() {
        assert_eq!(text_lines(b"a\nb\n"), vec!["a", "b"]);
    }

    #[test]
    fn split_preserves_empty_lines() {
        assert_eq!(text_lines(b"\na\n\n\nb\n"), vec!["", "a", "", "", "b"]);
        assert_eq!(text_lines(b"\n"), vec![""]);
    }

    #[test]
    fn split_drops_carriage_return() {
        assert_eq!(text_lines(b"a\r\nb\r"), vec!["a", "b"]);
    }

    #[test]
    fn split_keeps_tabs() {
        assert_eq!(text_lines(b"1\t\t\n"), vec!["1\t\t"]);
    }

    #[test]
    fn split_keeps_invalid_utf8_bytes() {
        let lines = split_lines(b"ok\n\xff\xfe\n", LIMIT).unwrap();
        assert_eq!(lines, [b"ok".as_slice(), b"\xff\xfe".as_slice()]);
    }

    #[test]
    fn split_line_one_short_of_limit_is_accepted() {
        let buf = vec![b'x'; 7];
        assert_eq!(split_lines(&buf, 8).unwrap().len(), 1);

        let mut buf = vec![b'x'; 7];
        buf.push(b'\n');
        assert_eq!(split_lines(&buf, 8).unwrap().len(), 1);
    }

    #[test]
    fn split_line_filling_limit_fails() {
        let buf = vec![b'x'; 8];
        assert_eq!(
            split_lines(&buf, 8),
            Err(ScanError::LineTooLong {
                line: 0,
                len: 8,
                limit: 8,
            })
        );
    }

    #[test]
    fn split_carriage_return_counts_toward_limit() {
        assert!(split_lines(b"123456\r\n", 8).is_ok());
        assert!(split_lines(b"1234567\r\n", 8).is_err());
    }

    #[test]
    fn split_line_over_limit_fails() {
        let mut buf = b"short\n".to_vec();
        buf.extend(std::iter::repeat_n(b'x', 9));
        buf.push(b'\n');
        assert_eq!(
            split_lines(&buf, 8),
            Err(ScanError::LineTooLong {
                line: 1,
                len: 9,
                limit: 8,
            })
        );
    }

    #[test]
    fn split_is_deterministic() {
        let buf = b"h\n1\ta\n2\tb\n";
        assert_eq!(split_lines(buf, LIMIT), split_lines(buf, LIMIT));
    }

    // -----------------------------------------------------------------------
    // split_fields
    // -----------------------------------------------------------------------

    #[test]
    fn fields_split_on_tabs_only() {
        assert_eq!(
            split_fields(b"1\tHome Net\tany\t[CURRENT]"),
            [
                b"1".as_slice(),
                b"Home Net".as_slice(),
                b"any".as_slice(),
                b"[CURRENT]".as_slice()
            ]
        );
    }

    #[test]
    fn fields_keep_empty_columns() {
        assert_eq!(split_fields(b"").len(), 1);
        assert_eq!(split_fields(b"2\t\t\t").len(), 4);
    }

    #[test]
    fn fields_keep_non_utf8_bytes() {
        let fields = split_fields(b"x\tcaf\xe9");
        assert_eq!(fields[1], b"caf\xe9");
    }

    // -----------------------------------------------------------------------
    // split_header
    // -----------------------------------------------------------------------

    #[test]
    fn header_dropped_keeping_terminator() {
        let split = split_header(b"hdr\nrow\n");
        assert_eq!(split.offset, Some(3));
        assert_eq!(split.body, b"\nrow\n");
    }

    #[test]
    fn header_at_offset_zero_keeps_buffer() {
        let split = split_header(b"\nrow");
        assert_eq!(split.offset, Some(0));
        assert_eq!(split.body, b"\nrow");
    }

    #[test]
    fn header_missing_keeps_buffer() {
        let split = split_header(b"row");
        assert_eq!(split.offset, None);
        assert_eq!(split.body, b"row");
    }

    #[test]
    fn saturation_threshold_by_offset() {
        assert_eq!(split_header(b"hdr\n").saturation_threshold(100), 97);
        assert_eq!(split_header(b"\n").saturation_threshold(100), 100);
        assert_eq!(split_header(b"hdr").saturation_threshold(100), 101);
        assert_eq!(split_header(b"long header\n").saturation_threshold(4), 0);
    }

    // -----------------------------------------------------------------------
    // parse_flags
    // -----------------------------------------------------------------------

    #[test]
    fn flags_empty() {
        assert!(flags("").is_empty());
        assert!(flags("[]").is_empty());
        assert!(flags("[").is_empty());
        assert!(flags("]").is_empty());
    }

    #[test]
    fn flags_single() {
        assert_eq!(flags("[A]"), vec!["A"]);
    }

    #[test]
    fn flags_multiple_in_order() {
        assert_eq!(flags("[A][B][C]"), vec!["A", "B", "C"]);
        assert_eq!(
            flags("[WPA2-PSK-CCMP][WPS][ESS]"),
            vec!["WPA2-PSK-CCMP", "WPS", "ESS"]
        );
    }

    #[test]
    fn flags_without_brackets_degrade_to_one_flag() {
        assert_eq!(flags("ESS"), vec!["ESS"]);
        assert_eq!(flags("A B"), vec!["A B"]);
    }

    #[test]
    fn flags_half_bracketed() {
        assert_eq!(flags("[A"), vec!["A"]);
        assert_eq!(flags("A][B"), vec!["A", "B"]);
        assert_eq!(flags("[A]["), vec!["A", ""]);
    }

    #[test]
    fn flags_reencode_to_wire_form() {
        for wire in ["", "[A]", "[WPA2-PSK][ESS]", "[CURRENT][TEMP-DISABLED]"] {
            assert_eq!(parse_flags(wire).to_string(), wire);
        }
    }
}
