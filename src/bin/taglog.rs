//! `taglog` binary: one tagged log line from the command line.
//!
//! Usage:
//!   taglog info "service started"
//!   taglog --tag deploy --color red error rollback failed
//!   taglog --tag cron fatal "lock held"          (exits 1)

use clap::Parser;
use std::process::ExitCode;
use taglog::cli::{Cli, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    run(&cli)
}
