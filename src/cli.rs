use clap::builder::styling::AnsiColor;
use clap::builder::Styles;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::seq::Seq;

const fn extra_build_info() -> &'static str {
    match option_env!("CARGO_BUILD_DESC") {
        Some(e) => e,
        None => env!("CARGO_PKG_VERSION"),
    }
}
pub const VERSION: &str = extra_build_info();
const INFO_STRING: &str = "
🧬 mutwatch version ";
const AFTER_STRING: &str = "
   ──────────────────────────────────
   watch a sensor's DNA readings for mutations against a reference";

/// The reference sequence used when none is given.
pub const DEFAULT_REFERENCE: &str = "ATGCTAGCTAAT";

// colouring of the help
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::BrightMagenta.on_default().bold())
    .literal(AnsiColor::BrightMagenta.on_default())
    .placeholder(AnsiColor::White.on_default());

#[derive(Parser)]
#[command(
    version = VERSION,
    about = format!("{}{}{}", INFO_STRING, VERSION, AFTER_STRING),
    arg_required_else_help = true,
    flatten_help = true,
    styles = STYLES
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Poll the sensor file at a fixed interval until interrupted with Ctrl+C
    Monitor {
        #[command(flatten)]
        reading: ReadingArgs,

        /// the number of seconds between readings
        #[arg(
            short,
            long,
            default_value_t = 5,
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        interval: u64,
    },

    /// Compare the sensor file against the reference once, then exit
    Compare {
        #[command(flatten)]
        reading: ReadingArgs,
    },
}

#[derive(Args, Clone)]
pub struct ReadingArgs {
    /// the text file holding the sampled sequence
    #[arg(default_value = "sensor_data.txt")]
    pub sensor: PathBuf,

    /// the reference sequence to compare against (A, T, C, G only)
    #[arg(short, long, default_value = DEFAULT_REFERENCE)]
    pub reference: Seq,

    /// where to write the plot of each reading
    #[arg(short, long, default_value = "mutations.svg")]
    pub output: PathBuf,

    /// do not draw the comparison in the terminal
    #[arg(long, action)]
    pub no_display: bool,
}
