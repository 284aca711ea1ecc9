// wpactl test application -- CLI tool for decoding captured control daemon
// listings and printing the command datagrams the library builds.
//
// Usage:
//   wpactl-test-app networks capture.txt
//   wpactl-test-app aps --sort signal scan.txt
//   wpa_cli -i wlan0 scan_results | wpactl-test-app aps
//   wpactl-test-app --max-receive-size 2048 aps scan.txt
//   wpactl-test-app aps --raw scan.txt
//   wpactl-test-app command set-ssid 0 "Cafe Wifi"
//   wpactl-test-app -v networks capture.txt

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tokio::io::AsyncReadExt;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use wpactl::commands;
use wpactl::{AccessPoint, DEFAULT_MAX_RECEIVE_SIZE, ListingDecoder, MAX_LINE_LENGTH, Network};

// ---------------------------------------------------------------------------
// CLI argument definitions
// ---------------------------------------------------------------------------

/// wpactl test application -- decodes captured daemon listings.
#[derive(Parser)]
#[command(name = "wpactl-test-app", version, about)]
struct Cli {
    /// Size in bytes of the receive buffer the capture was read with.
    /// Used to tell a truncated reply from a corrupt one.
    #[arg(long, default_value_t = DEFAULT_MAX_RECEIVE_SIZE)]
    max_receive_size: usize,

    /// Size of the line scan buffer in bytes; a line must be shorter.
    #[arg(long, default_value_t = MAX_LINE_LENGTH)]
    max_line_length: usize,

    /// Log decoder activity (repeat for more detail). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a `LIST_NETWORKS` reply.
    Networks {
        /// Capture file; reads stdin when omitted or `-`.
        file: Option<PathBuf>,

        /// Print re-encoded listing lines instead of a table.
        #[arg(long)]
        raw: bool,
    },

    /// Decode a `SCAN_RESULTS` reply.
    Aps {
        /// Capture file; reads stdin when omitted or `-`.
        file: Option<PathBuf>,

        /// Sort order for the table.
        #[arg(long, default_value = "listing", value_enum)]
        sort: ApSort,

        /// Print re-encoded listing lines instead of a table.
        #[arg(long)]
        raw: bool,
    },

    /// Print the bytes of a control command.
    Command {
        #[command(subcommand)]
        action: CommandAction,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ApSort {
    /// Daemon listing order.
    Listing,
    /// Strongest signal first.
    Signal,
    /// Lowest frequency first.
    Frequency,
}

#[derive(Subcommand)]
enum CommandAction {
    /// `LIST_NETWORKS`
    ListNetworks,
    /// `SCAN`
    Scan,
    /// `SCAN_RESULTS`
    ScanResults,
    /// `ADD_NETWORK`
    AddNetwork,
    /// `SET_NETWORK <id> ssid "<ssid>"`
    SetSsid { id: u32, ssid: String },
    /// `SET_NETWORK <id> psk "<passphrase>"`
    SetPsk { id: u32, passphrase: String },
    /// `SET_NETWORK <id> <variable> <value>`, value sent unquoted.
    Set {
        id: u32,
        variable: String,
        value: String,
    },
    /// `SELECT_NETWORK <id>`
    Select { id: u32 },
    /// `ENABLE_NETWORK <id>`
    Enable { id: u32 },
    /// `DISABLE_NETWORK <id>`
    Disable { id: u32 },
    /// `REMOVE_NETWORK <id>`
    Remove { id: u32 },
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Read a capture from `file`, or stdin for `None` / `-`.
async fn read_capture(file: Option<&Path>) -> Result<Vec<u8>> {
    let capture = match file {
        Some(path) if path != Path::new("-") => tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buf)
                .await
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }?;
    debug!(bytes = capture.len(), "read capture");
    Ok(capture)
}

fn decoder(cli: &Cli) -> Result<ListingDecoder> {
    if cli.max_line_length == 0 {
        bail!("--max-line-length must be at least 1");
    }
    Ok(ListingDecoder::new()
        .max_receive_size(cli.max_receive_size)
        .max_line_length(cli.max_line_length))
}

/// Wrap a decode error with a hint on what to do about it.
fn explain(err: wpactl::Error, receive_size: usize) -> anyhow::Error {
    if err.is_truncation() {
        anyhow::Error::new(err).context(format!(
            "reply filled the {receive_size} byte receive window; re-capture with a larger buffer"
        ))
    } else {
        anyhow::Error::new(err).context("capture is not a valid listing")
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Write re-encoded listing lines to stdout, SSID bytes untouched.
fn write_raw_lines(lines: impl Iterator<Item = Vec<u8>>) -> Result<()> {
    let mut out = std::io::stdout().lock();
    for line in lines {
        out.write_all(&line)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

fn cmd_networks(nets: &[Network], raw: bool) -> Result<()> {
    if raw {
        return write_raw_lines(nets.iter().map(Network::to_line));
    }

    let ssid_width = nets
        .iter()
        .map(|n| n.ssid.to_string_lossy().chars().count())
        .max()
        .unwrap_or(4)
        .max(4);
    let bssid_width = nets.iter().map(|n| n.bssid.len()).max().unwrap_or(5).max(5);

    println!(
        "{:>4}  {:<ssid_width$}  {:<bssid_width$}  Flags",
        "ID", "SSID", "BSSID",
    );
    for net in nets {
        println!(
            "{:>4}  {:<ssid_width$}  {:<bssid_width$}  {}",
            net.id,
            net.ssid,
            net.bssid,
            net.flags.iter().collect::<Vec<_>>().join(" "),
        );
    }

    println!();
    println!("{} networks total.", nets.len());
    Ok(())
}

fn cmd_aps(mut aps: Vec<AccessPoint>, sort: ApSort, raw: bool) -> Result<()> {
    match sort {
        ApSort::Listing => {}
        ApSort::Signal => aps.sort_by_key(|ap| std::cmp::Reverse(ap.signal)),
        ApSort::Frequency => aps.sort_by_key(|ap| ap.frequency),
    }

    if raw {
        return write_raw_lines(aps.iter().map(AccessPoint::to_line));
    }

    println!(
        "{:<17}  {:>5}  {:>4}  {:<7}  {:>6}  {:<32}  Flags",
        "BSSID", "MHz", "CH", "Band", "Signal", "SSID"
    );
    for ap in &aps {
        println!(
            "{:<17}  {:>5}  {:>4}  {:<7}  {:>6}  {:<32}  {}",
            ap.bssid.to_string(),
            ap.frequency,
            ap.channel().map(|c| c.to_string()).unwrap_or_default(),
            ap.band().map(|b| b.to_string()).unwrap_or_default(),
            ap.signal,
            ap.ssid,
            ap.flags.iter().collect::<Vec<_>>().join(" "),
        );
    }

    println!();
    println!("{} access points total.", aps.len());
    Ok(())
}

fn cmd_command(action: &CommandAction) {
    let bytes = match action {
        CommandAction::ListNetworks => commands::cmd_list_networks(),
        CommandAction::Scan => commands::cmd_scan(),
        CommandAction::ScanResults => commands::cmd_scan_results(),
        CommandAction::AddNetwork => commands::cmd_add_network(),
        CommandAction::SetSsid { id, ssid } => commands::cmd_set_network_ssid(*id, ssid),
        CommandAction::SetPsk { id, passphrase } => commands::cmd_set_network_psk(*id, passphrase),
        CommandAction::Set {
            id,
            variable,
            value,
        } => commands::cmd_set_network(*id, variable, value),
        CommandAction::Select { id } => commands::cmd_select_network(*id),
        CommandAction::Enable { id } => commands::cmd_enable_network(*id),
        CommandAction::Disable { id } => commands::cmd_disable_network(*id),
        CommandAction::Remove { id } => commands::cmd_remove_network(*id),
    };
    println!("{}", String::from_utf8_lossy(&bytes));
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Command::Networks { file, raw } => {
            let decoder = decoder(&cli)?;
            let capture = read_capture(file.as_deref()).await?;
            let nets = decoder
                .decode_networks(&capture)
                .map_err(|e| explain(e, decoder.receive_size()))?;
            cmd_networks(&nets, *raw)?;
        }
        Command::Aps { file, sort, raw } => {
            let decoder = decoder(&cli)?;
            let capture = read_capture(file.as_deref()).await?;
            let aps = decoder
                .decode_access_points(&capture)
                .map_err(|e| explain(e, decoder.receive_size()))?;
            cmd_aps(aps, *sort, *raw)?;
        }
        Command::Command { action } => cmd_command(action),
    }

    Ok(())
}
