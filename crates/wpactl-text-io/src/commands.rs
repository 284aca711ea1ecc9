//! Control command builders and simple reply parsers.
//!
//! The functions here are pure: they build command datagrams and interpret
//! short replies without performing any I/O. Sending the bytes and reading
//! the reply is the transport's job.
//!
//! Commands are a name followed by space-separated arguments, with no
//! terminator. String-valued network variables (`ssid`, `psk`) must be
//! quoted; numeric and keyword values must not.

use bytes::{BufMut, BytesMut};

use wpactl_core::{Error, Result, quote};

/// Reply sent for a successful command.
pub const REPLY_OK: &str = "OK";

/// Reply sent for a failed command.
pub const REPLY_FAIL: &str = "FAIL";

/// Encode a command name and its arguments into raw bytes.
///
/// # Example
///
/// ```
/// use wpactl_text_io::commands::encode_command;
///
/// assert_eq!(encode_command("LIST_NETWORKS", &[]), b"LIST_NETWORKS");
/// assert_eq!(encode_command("SELECT_NETWORK", &["2"]), b"SELECT_NETWORK 2");
/// ```
pub fn encode_command(name: &str, args: &[&str]) -> Vec<u8> {
    let capacity = name.len() + args.iter().map(|a| a.len() + 1).sum::<usize>();
    let mut buf = BytesMut::with_capacity(capacity);
    buf.put_slice(name.as_bytes());
    for arg in args {
        buf.put_u8(b' ');
        buf.put_slice(arg.as_bytes());
    }
    buf.to_vec()
}

// ---------------------------------------------------------------
// Listing commands
// ---------------------------------------------------------------

/// Build a "list configured networks" command (`LIST_NETWORKS`).
pub fn cmd_list_networks() -> Vec<u8> {
    encode_command("LIST_NETWORKS", &[])
}

/// Build a "start a scan" command (`SCAN`).
pub fn cmd_scan() -> Vec<u8> {
    encode_command("SCAN", &[])
}

/// Build a "read scan results" command (`SCAN_RESULTS`).
pub fn cmd_scan_results() -> Vec<u8> {
    encode_command("SCAN_RESULTS", &[])
}

// ---------------------------------------------------------------
// Network configuration commands
// ---------------------------------------------------------------

/// Build an "add network" command (`ADD_NETWORK`).
///
/// The reply is the new network ID; see [`parse_network_id_reply`].
pub fn cmd_add_network() -> Vec<u8> {
    encode_command("ADD_NETWORK", &[])
}

/// Build a `SET_NETWORK <id> <variable> <value>` command.
///
/// `value` is sent as given. Use [`cmd_set_network_ssid`] or
/// [`cmd_set_network_psk`] for string variables, or [`quote`] the value.
pub fn cmd_set_network(id: u32, variable: &str, value: &str) -> Vec<u8> {
    encode_command("SET_NETWORK", &[id.to_string().as_str(), variable, value])
}

/// Build a command setting the network's SSID, quoted.
pub fn cmd_set_network_ssid(id: u32, ssid: &str) -> Vec<u8> {
    cmd_set_network(id, "ssid", &quote(ssid))
}

/// Build a command setting the network's passphrase, quoted.
pub fn cmd_set_network_psk(id: u32, passphrase: &str) -> Vec<u8> {
    cmd_set_network(id, "psk", &quote(passphrase))
}

/// Build a `GET_NETWORK <id> <variable>` command.
pub fn cmd_get_network(id: u32, variable: &str) -> Vec<u8> {
    encode_command("GET_NETWORK", &[id.to_string().as_str(), variable])
}

/// Build a `SELECT_NETWORK <id>` command.
pub fn cmd_select_network(id: u32) -> Vec<u8> {
    encode_command("SELECT_NETWORK", &[id.to_string().as_str()])
}

/// Build an `ENABLE_NETWORK <id>` command.
pub fn cmd_enable_network(id: u32) -> Vec<u8> {
    encode_command("ENABLE_NETWORK", &[id.to_string().as_str()])
}

/// Build a `DISABLE_NETWORK <id>` command.
pub fn cmd_disable_network(id: u32) -> Vec<u8> {
    encode_command("DISABLE_NETWORK", &[id.to_string().as_str()])
}

/// Build a `REMOVE_NETWORK <id>` command.
pub fn cmd_remove_network(id: u32) -> Vec<u8> {
    encode_command("REMOVE_NETWORK", &[id.to_string().as_str()])
}

// ---------------------------------------------------------------
// Reply parsers
// ---------------------------------------------------------------

fn reply_text(reply: &[u8]) -> std::borrow::Cow<'_, str> {
    String::from_utf8_lossy(reply.trim_ascii())
}

/// Whether a reply is the plain `OK` acknowledgement.
pub fn is_ok_reply(reply: &[u8]) -> bool {
    reply_text(reply) == REPLY_OK
}

/// Whether a reply is the plain `FAIL` rejection.
pub fn is_fail_reply(reply: &[u8]) -> bool {
    reply_text(reply) == REPLY_FAIL
}

/// Parse the network ID returned by `ADD_NETWORK`.
///
/// Fails with [`Error::ParseId`] if the reply is not a bare non-negative
/// integer (a `FAIL` reply included).
pub fn parse_network_id_reply(reply: &[u8]) -> Result<u32> {
    let text = reply_text(reply);
    text.parse::<u32>().map_err(|source| Error::ParseId {
        input: text.into_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use wpactl_core::unquote;

    #[test]
    fn listing_commands() {
        assert_eq!(cmd_list_networks(), b"LIST_NETWORKS");
        assert_eq!(cmd_scan(), b"SCAN");
        assert_eq!(cmd_scan_results(), b"SCAN_RESULTS");
    }

    #[test]
    fn network_id_commands() {
        assert_eq!(cmd_add_network(), b"ADD_NETWORK");
        assert_eq!(cmd_select_network(3), b"SELECT_NETWORK 3");
        assert_eq!(cmd_enable_network(0), b"ENABLE_NETWORK 0");
        assert_eq!(cmd_disable_network(12), b"DISABLE_NETWORK 12");
        assert_eq!(cmd_remove_network(7), b"REMOVE_NETWORK 7");
        assert_eq!(cmd_get_network(1, "ssid"), b"GET_NETWORK 1 ssid");
    }

    #[test]
    fn set_network_raw_value() {
        assert_eq!(
            cmd_set_network(0, "key_mgmt", "WPA-PSK"),
            b"SET_NETWORK 0 key_mgmt WPA-PSK"
        );
    }

    #[test]
    fn set_network_string_values_are_quoted() {
        assert_eq!(
            cmd_set_network_ssid(4, "Cafe Wifi"),
            b"SET_NETWORK 4 ssid \"Cafe Wifi\""
        );
        assert_eq!(
            cmd_set_network_psk(4, "hunter22"),
            b"SET_NETWORK 4 psk \"hunter22\""
        );
    }

    #[test]
    fn quoted_value_round_trips_through_command() {
        let cmd = cmd_set_network_ssid(1, "HomeNet");
        let text = String::from_utf8(cmd).unwrap();
        let value = text.splitn(4, ' ').nth(3).unwrap();
        assert_eq!(unquote(value), "HomeNet");
    }

    #[test]
    fn ok_and_fail_replies() {
        assert!(is_ok_reply(b"OK\n"));
        assert!(is_ok_reply(b"OK"));
        assert!(!is_ok_reply(b"FAIL\n"));
        assert!(is_fail_reply(b"FAIL\n"));
        assert!(!is_fail_reply(b"OK"));
    }

    #[test]
    fn add_network_reply() {
        assert_eq!(parse_network_id_reply(b"5\n").unwrap(), 5);
        assert_eq!(parse_network_id_reply(b"0").unwrap(), 0);
    }

    #[test]
    fn add_network_fail_reply_is_parse_id_error() {
        match parse_network_id_reply(b"FAIL\n").unwrap_err() {
            Error::ParseId { input, .. } => assert_eq!(input, "FAIL"),
            other => panic!("expected ParseId, got {other:?}"),
        }
    }
}
