//! Decode a captured listing and print it.
//!
//! Builds a `SCAN_RESULTS` reply the way the daemon formats it, runs it
//! through a receive window the size of the daemon client's buffer, and
//! prints the decoded access points sorted by signal level. Then does the
//! same with a window far too small to show how truncation is reported.
//!
//! # Usage
//!
//! ```sh
//! cargo run -p wpactl --example decode_listing
//! ```

use wpactl::{DEFAULT_MAX_RECEIVE_SIZE, Error, ListingDecoder};
use wpactl_test_harness::{ListingBuilder, ReceiveWindow, fixtures};

fn main() -> anyhow::Result<()> {
    let reply = ListingBuilder::scan_results()
        .access_points(&fixtures::access_points())
        .line("malformed line without tabs")
        .build();

    let window = ReceiveWindow::new(DEFAULT_MAX_RECEIVE_SIZE);
    let received = window.receive(&reply);

    let mut aps = ListingDecoder::new()
        .max_receive_size(window.size())
        .decode_access_points(&received)?;
    aps.sort_by_key(|ap| std::cmp::Reverse(ap.signal));

    println!("{:<17}  {:>5}  {:>4}  {:>6}  SSID", "BSSID", "MHz", "CH", "dBm");
    for ap in &aps {
        let channel = ap.channel().map(|c| c.to_string()).unwrap_or_default();
        println!(
            "{:<17}  {:>5}  {:>4}  {:>6}  {}",
            ap.bssid.to_string(),
            ap.frequency,
            channel,
            ap.signal,
            ap.ssid
        );
    }

    // A tiny window with a tiny line limit: the cut-off reply cannot be
    // scanned, and the decoder blames the window.
    let small = ReceiveWindow::new(64);
    let result = ListingDecoder::new()
        .max_receive_size(small.size())
        .max_line_length(8)
        .decode_access_points(&small.receive(&reply));
    match result {
        Err(e @ Error::ListTooLong { .. }) => println!("\nsmall window: {e}"),
        other => println!("\nsmall window: unexpected {other:?}"),
    }

    Ok(())
}
