use std::path::PathBuf;

use tracing::debug;

use crate::cli::Cli;
use crate::error::{PstateError, Result};

/// Fully resolved run configuration.
///
/// Built once from the command line and never mutated afterwards. The
/// 0-255 bound on card and pstate is enforced by the field types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub card: u8,
    pub pstate: u8,
    pub verbose: bool,
    /// Debugfs node derived from the card index.
    pub path: PathBuf,
}

impl Config {
    /// Validate the raw command-line values and derive the debugfs path.
    ///
    /// Both numeric flags are required; a missing card means the tool
    /// takes no action at all.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let card = match cli.card.as_deref() {
            Some(raw) => parse_uint(raw).ok_or_else(|| PstateError::InvalidValue {
                what: "card number",
                input: raw.to_owned(),
            })?,
            None => return Err(PstateError::MissingCard),
        };

        let pstate = match cli.pstate.as_deref() {
            Some(raw) => parse_uint(raw).ok_or_else(|| PstateError::InvalidValue {
                what: "pstate value",
                input: raw.to_owned(),
            })?,
            None => return Err(PstateError::MissingPstate),
        };

        let path = pstate_path(card);
        debug!(
            "resolved configuration: card {} pstate 0x{:02x} path {}",
            card,
            pstate,
            path.display()
        );

        Ok(Self {
            card,
            pstate,
            verbose: cli.verbose,
            path,
        })
    }

    /// Configuration dump requested by --verbose.
    pub fn print(&self) {
        println!("Configuration:");
        println!("  card:   {}", self.card);
        println!("  path:   {}", self.path.display());
        println!("  pstate: 0x{:02X}", self.pstate);
    }
}

/// Derive the nouveau debugfs pstate node for a card index, with the
/// index substituted in decimal.
pub fn pstate_path(card: u8) -> PathBuf {
    PathBuf::from(format!("/sys/kernel/debug/dri/{card}/pstate"))
}

///// Parse an unsigned 0-255 integer accepting the usual bases: a
/// `0x`/`0X` prefix selects hex, a further leading zero selects octal,
/// anything else is decimal. Whole-token parse; trailing garbage and
/// out-of-range values are rejected.
fn parse_uint(input: &str) -> Option<u8> {
    let input = input.trim();
    if let Some(hex) = input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) {
        u8::from_str_radix(hex, 16).ok()
    } else if input.len() > 1 && input.starts_with('0') {
        u8::from_str_radix(&input[1..], 8).ok()
    } else {
        input.parse().ok()
    }
}
