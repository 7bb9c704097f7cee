//! lemin CLI entry point.

use std::{io, process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use lemin_cli::{Args, error_adapter::to_reportables, failure_report};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

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

    info!(log_level:?; "Starting lemin");
    debug!(args:?; "Parsed arguments");

    let result = lemin_cli::run(&args, &mut io::stdout().lock());
    if let Err(err) = result {
        let reporter = miette::GraphicalReportHandler::new();

        // Render each diagnostic independently
        for reportable in to_reportables(&err) {
            let mut writer = String::new();
            if reporter.render_report(&mut writer, &reportable).is_ok() {
                error!("{writer}");
            }
        }

        print!("{}", failure_report(&err));
        process::exit(1);
    }

    info!("Completed successfully");
}
