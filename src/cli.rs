use clap::Parser;

/// Command-line surface of nv_pstate.
///
/// The numeric flags are captured as raw strings; validation and range
/// checking happen in [`crate::config::Config::resolve`] so that
/// `--help` and `--version` always win over a malformed number. Both
/// value flags accept a leading-dash token as their argument, which
/// then fails validation with the offending text echoed.
#[derive(Debug, Parser)]
#[command(
    name = "nv_pstate",
    about = "Change the pstate of an nvidia gfx card through the nouveau debugfs interface",
    after_help = "Writes to /sys/kernel/debug/dri/<card>/pstate and therefore needs write \
                  access to debugfs. Changing pstates is experimental; use at your own risk.",
    disable_version_flag = true
)]
pub struct Cli {
    /// gfx card number (0-255; decimal, 0x-prefixed hex or 0-prefixed octal)
    #[arg(short = 'c', long, allow_hyphen_values = true)]
    pub card: Option<String>,

    /// pstate value to write (0-255; decimal, 0x-prefixed hex or 0-prefixed octal)
    #[arg(short = 's', long, allow_hyphen_values = true)]
    pub pstate: Option<String>,

    /// verbose mode
    #[arg(short = 'V', long)]
    pub verbose: bool,

    /// display program version
    #[arg(short = 'v', long)]
    pub version: bool,
}
