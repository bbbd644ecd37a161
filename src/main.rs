//! rtdump
//!
//! Decodes a radiotap-prefixed 802.11 capture given as hex or as a raw
//! binary file and prints the header fields and the decoded frame.

use clap::{Arg, ArgGroup, Command};
use radiotap_decoder::{
    DecoderConfig, Ieee80211Decoder, Payload, Radiotap, RadiotapError, Result,
};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let matches = Command::new("rtdump")
        .version(radiotap_decoder::VERSION)
        .about("Radiotap header decoder")
        .arg(
            Arg::new("hex")
                .short('x')
                .long("hex")
                .value_name("HEX")
                .help("Capture bytes as a hex string (whitespace and ':' ignored)"),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Raw binary capture file"),
        )
        .group(
            ArgGroup::new("input")
                .args(["hex", "file"])
                .required(true),
        )
        .arg(
            Arg::new("json")
                .short('j')
                .long("json")
                .help("Print the decoded header as JSON")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("raw-payload")
                .long("raw-payload")
                .help("Do not decode the 802.11 payload")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Decoder configuration file (.json or .toml)"),
        )
        .arg(
            Arg::new("log-level")
                .short('l')
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level (trace, debug, info, warn, error)"),
        )
        .get_matches();

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => DecoderConfig::load_from_file(PathBuf::from(path))?,
        None => DecoderConfig::default(),
    };

    if let Some(level) = matches.get_one::<String>("log-level") {
        config.logging.level = level.clone();
    }
    if matches.get_flag("raw-payload") {
        config.decode_payload = false;
    }

    init_logging(&config.logging.level)?;

    let validation = config.validate();
    for warning in &validation.warnings {
        warn!("{}", warning);
    }
    if !validation.valid {
        return Err(RadiotapError::Config(validation.errors.join(", ")));
    }

    let data = match (matches.get_one::<String>("hex"), matches.get_one::<String>("file")) {
        (Some(hex), _) => parse_hex(hex)?,
        (None, Some(path)) => {
            info!("Reading capture from {}", path);
            fs::read(path)?
        }
        (None, None) => return Err(RadiotapError::Config("No input given".to_string())),
    };
    debug!("Decoding {} bytes", data.len());

    let radiotap = Radiotap::parse_with(data, &Ieee80211Decoder, &config)?;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&radiotap)?);
    } else {
        print!("{}", Summary(&radiotap));
    }

    Ok(())
}

/// Initialize logging
fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .map_err(|e| RadiotapError::Config(format!("Invalid log level '{}': {}", level, e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let digits: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    let digits = digits.strip_prefix("0x").unwrap_or(&digits);

    hex::decode(digits).map_err(|e| RadiotapError::Config(format!("Invalid hex input: {}", e)))
}

/// Human readable decode summary
struct Summary<'a>(&'a Radiotap);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let radiotap = self.0;
        writeln!(
            out,
            "Radiotap v{} length {} present {}",
            radiotap.version(),
            radiotap.length(),
            radiotap.present()
        )?;

        for field in radiotap.fields() {
            writeln!(out, "  {}", field)?;
        }

        if let Some(channel) = radiotap.channel() {
            match channel.channel_number() {
                Some(number) => writeln!(out, "  channel {} ({} MHz)", number, channel.freq)?,
                None => writeln!(out, "  channel ? ({} MHz)", channel.freq)?,
            }
        }
        if let Some(snr) = radiotap.snr() {
            writeln!(out, "  snr {} dB", snr)?;
        }
        if !radiotap.unparsed().is_empty() {
            writeln!(
                out,
                "  {} unparsed bytes: {}",
                radiotap.unparsed().len(),
                hex::encode(radiotap.unparsed())
            )?;
        }

        match radiotap.payload() {
            Payload::Empty => writeln!(out, "No payload")?,
            Payload::Raw(raw) => writeln!(out, "Payload ({} bytes): {}", raw.len(), hex::encode(raw))?,
            Payload::Frame(frame) => writeln!(out, "{}", frame)?,
        }

        Ok(())
    }
}
