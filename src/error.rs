use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Pstate tool error types. Every variant is terminal for the
/// invocation: no retries, no partial success.
#[derive(Error, Debug)]
pub enum PstateError {
    #[error("invalid {what}: '{input}' (expected an integer in 0-255)")]
    InvalidValue { what: &'static str, input: String },

    #[error("no card number given")]
    MissingCard,

    #[error("invalid or missing pstate value")]
    MissingPstate,

    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write pstate to {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("short write to {path:?}: {written} of {expected} bytes")]
    ShortWrite {
        path: PathBuf,
        written: usize,
        expected: usize,
    },
}

impl PstateError {
    /// True for bad or missing command-line input, false for failures
    /// of the debugfs write itself. Usage errors get the --help hint
    /// appended by the binary.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            PstateError::InvalidValue { .. }
                | PstateError::MissingCard
                | PstateError::MissingPstate
        )
    }
}

pub type Result<T> = std::result::Result<T, PstateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_classification() {
        let invalid = PstateError::InvalidValue {
            what: "card number",
            input: "999".into(),
        };
        assert!(invalid.is_usage());
        assert!(PstateError::MissingCard.is_usage());
        assert!(PstateError::MissingPstate.is_usage());

        let open = PstateError::Open {
            path: PathBuf::from("/sys/kernel/debug/dri/0/pstate"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(!open.is_usage());
    }

    #[test]
    fn test_messages_carry_context() {
        let err = PstateError::InvalidValue {
            what: "pstate value",
            input: "0x1ff".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid pstate value: '0x1ff' (expected an integer in 0-255)"
        );

        let err = PstateError::ShortWrite {
            path: PathBuf::from("/sys/kernel/debug/dri/3/pstate"),
            written: 1,
            expected: 2,
        };
        assert_eq!(
            err.to_string(),
            "short write to \"/sys/kernel/debug/dri/3/pstate\": 1 of 2 bytes"
        );
    }
}
