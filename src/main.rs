//! Validates the logs a lattice agreement run left behind.
//!
//! Reads `proc{NN}.config` / `proc{NN}.output` pairs for hosts `1..=N`
//! and sweeps the recorded decisions against the protocol's safety
//! properties. The verdict is the printed report: the process exits
//! non-zero only for usage, configuration, or unreadable-trace errors,
//! never for a validation failure.

use std::path::PathBuf;

use clap::Parser;
use lattice_validator::{LogLayout, Validator};

#[derive(Parser, Debug)]
#[command(name = "lattice_validator")]
#[command(about = "Check lattice agreement traces for Validity 1/2 and Consistency")]
#[command(version)]
struct Cli {
    /// Number of hosts that took part in the run
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    nb_hosts: u64,

    /// Number of agreement instances each host was expected to decide
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    nb_agreements: u64,

    /// Directory holding the per-host trace files
    #[arg(long, default_value = "./logs")]
    logs_dir: PathBuf,

    /// Also dump the report as JSON after the sweep
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> eyre::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let layout = LogLayout::new(cli.logs_dir);
    layout.ensure_exists()?;

    let validator = Validator::load(&layout, cli.nb_hosts as usize, cli.nb_agreements as usize)?;
    let report = validator.run();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
