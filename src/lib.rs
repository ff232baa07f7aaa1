// Re-export the main pieces for easy access
pub use cli::Cli;
pub use config::{pstate_path, Config};
pub use error::{PstateError, Result};
pub use pstate::{encode_pstate, write_pstate};

pub mod cli;
pub mod config;
pub mod error;
pub mod pstate;

/// Program name as printed in banners and hints.
pub const PROG_NAME: &str = "nv_pstate";

/// Version of the nv-pstate crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build timestamp baked in by the build script.
pub const BUILD_TIME: &str = env!("NV_PSTATE_BUILD_TIME");
