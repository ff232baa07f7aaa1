use std::process::ExitCode;

use clap::Parser;

use nv_pstate::cli::Cli;
use nv_pstate::config::Config;
use nv_pstate::pstate::write_pstate;
use nv_pstate::{BUILD_TIME, PROG_NAME, VERSION};

fn main() -> ExitCode {
    // clap renders help requests on stdout and parse errors on stderr;
    // only the latter fail the run.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let failed = err.use_stderr();
            let _ = err.print();
            return if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(cli.verbose);

    if cli.version {
        println!("{PROG_NAME} version {VERSION}, build: {BUILD_TIME}");
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            if err.is_usage() {
                eprintln!("use '{PROG_NAME} --help' to display usage info");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> nv_pstate::Result<()> {
    let resolved = Config::resolve(cli);

    // The --verbose dump is owed once the flags are known, on success
    // and failure paths alike.
    if cli.verbose {
        match &resolved {
            Ok(cfg) => cfg.print(),
            Err(_) => print_raw_config(cli),
        }
    }

    let cfg = resolved?;
    write_pstate(&cfg)?;

    if cfg.verbose {
        println!("pstate changed to 0x{:02X}", cfg.pstate);
    }
    Ok(())
}

/// Raw flag values, dumped when --verbose is set but resolution failed.
fn print_raw_config(cli: &Cli) {
    println!("Configuration:");
    println!("  card:   {}", cli.card.as_deref().unwrap_or("(not set)"));
    println!("  pstate: {}", cli.pstate.as_deref().unwrap_or("(not set)"));
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();
}
