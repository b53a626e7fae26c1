extern crate env_logger;
#[macro_use]
extern crate log;
use std::io::stdout;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

mod cli;
mod monitor;
mod mutations;
mod plot;
mod seq;

use cli::{Cli, Commands};
use monitor::Monitor;

fn try_main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let cli = Cli::parse();

    println!("mutwatch v{}", cli::VERSION);

    match cli.command {
        Commands::Monitor { reading, interval } => {
            let monitor = Monitor::from(reading);
            info!("Monitoring {} against {}", monitor.sensor.display(), monitor.reference);

            // a second Ctrl+C while the first is still pending means the loop is stuck
            let (tx, rx) = crossbeam::channel::bounded(1);
            ctrlc::set_handler(move || {
                if crate::monitor::request_shutdown(&tx) {
                    std::process::exit(130);
                }
            })
            .context("Could not install the Ctrl+C handler")?;

            monitor.run(&mut stdout(), Duration::from_secs(interval), &rx)?;
        }
        Commands::Compare { reading } => {
            let monitor = Monitor::from(reading);
            let report = monitor.analyse(&mut stdout())?;

            if report.is_clean() {
                info!("Sample matches the reference");
            }
            info!("Completed successfully.")
        }
    };
    Ok(())
}

fn main() {
    if let Err(err) = try_main() {
        error!("{}", err);

        // report any errors that are produced
        err.chain()
            .skip(1)
            .for_each(|cause| error!("  because: {}", cause));

        std::process::exit(1);
    }
}
