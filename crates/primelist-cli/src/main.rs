//! Prime list generator CLI.

use clap::Parser;
use primelist_cli::cli::{Cli, classify_parse_error};
use primelist_cli::commands::run_create;
use primelist_cli::logging::init_logging;
use primelist_cli::summary::print_summary;
use tracing::error;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(parse_error) => {
            let _ = parse_error.print();
            if !parse_error.use_stderr() {
                // --help and --version
                std::process::exit(0);
            }
            let arg_count = std::env::args_os().len().saturating_sub(1);
            std::process::exit(classify_parse_error(&parse_error, arg_count).exit_code());
        }
    };
    cli.color.write_global();
    let log_config = cli.log_config();
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run_create(&cli.request()) {
        Ok(outcome) => {
            if !cli.no_summary {
                print_summary(&outcome);
            }
            0
        }
        Err(run_error) => {
            error!(%run_error, "run failed");
            eprintln!("error: {run_error}");
            run_error.exit_code()
        }
    };
    std::process::exit(exit_code);
}
