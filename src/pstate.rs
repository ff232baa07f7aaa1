use std::fs::OpenOptions;
use std::io::Write;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{PstateError, Result};

/// Encode a pstate for the debugfs node: lowercase hex digits, no
/// prefix, no padding, one trailing NUL byte. The longest payload is
/// "ff" plus NUL, 3 bytes.
pub fn encode_pstate(pstate: u8) -> Vec<u8> {
    let mut payload = format!("{pstate:x}").into_bytes();
    payload.push(0);
    payload
}

/// Write the configured pstate to the card's debugfs node.
///
/// The node is opened write-only (never created or truncated) and the
/// payload is pushed with a single write call; a short count is a
/// failure and is not retried. The handle is dropped on every path
/// before returning. This is the only place in the crate that touches
/// the filesystem.
pub fn write_pstate(cfg: &Config) -> Result<()> {
    let payload = encode_pstate(cfg.pstate);

    debug!("opening {} write-only", cfg.path.display());
    let mut node = OpenOptions::new()
        .write(true)
        .open(&cfg.path)
        .map_err(|source| PstateError::Open {
            path: cfg.path.clone(),
            source,
        })?;

    let written = node.write(&payload).map_err(|source| PstateError::Write {
        path: cfg.path.clone(),
        source,
    })?;
    if written < payload.len() {
        return Err(PstateError::ShortWrite {
            path: cfg.path.clone(),
            written,
            expected: payload.len(),
        });
    }

    info!("wrote {} bytes to {}", written, cfg.path.display());
    Ok(())
}
