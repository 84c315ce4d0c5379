use clap::Parser;
use tracing_subscriber::EnvFilter;

use commit_guard::cli::{Cli, Commands};
use commit_guard::commands::{run_config, run_init, run_pre_commit, run_pre_receive};

/// Default log level for the `-v` count; `RUST_LOG` overrides it.
const fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("commit_guard={}", default_log_level(verbose))));
    // stdout carries the hook diagnostics; logs stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match &cli.command {
        Commands::PreCommit(args) => run_pre_commit(args, &cli),
        Commands::PreReceive => run_pre_receive(&cli),
        Commands::Config(args) => run_config(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
    };

    std::process::exit(exit_code);
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
