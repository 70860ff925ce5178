//! infographize CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, info};

use infographize_cli::{
    Args,
    error_adapter::{ErrorAdapter, render_failure_line},
};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    // Missing positionals print usage to stderr and exit non-zero here
    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting infographize");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = infographize_cli::run(&args) {
        if let Some(line) = render_failure_line(&err) {
            eprintln!("{line}");
        } else {
            let reporter = miette::GraphicalReportHandler::new();
            let mut writer = String::new();
            reporter
                .render_report(&mut writer, &ErrorAdapter(&err))
                .expect("Writing to String buffer is infallible");

            // Printed directly so the report survives `--log-level off`
            eprintln!("{writer}");
        }

        process::exit(1);
    }

    info!("Completed successfully");
}
