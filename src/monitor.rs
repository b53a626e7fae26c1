use crate::cli::ReadingArgs;
use crate::mutations::{detect_mutations, MutationReport};
use crate::plot;
use crate::seq::{Seq, SequenceError};

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossbeam::channel::{Receiver, RecvTimeoutError, Sender, TrySendError};

/// Everything needed to compare a sensor reading against the reference, shared by every cycle.
///
/// # Fields
///
/// * `sensor` - The text file which holds the latest sampled sequence
/// * `reference` - The sequence that every reading is compared against
/// * `output` - Where the plot is written, overwritten every cycle
/// * `display` - Whether to also draw the comparison in the terminal
pub struct Monitor {
    pub sensor: PathBuf,
    pub reference: Seq,
    pub output: PathBuf,
    pub display: bool,
}

impl From<ReadingArgs> for Monitor {
    fn from(args: ReadingArgs) -> Self {
        Monitor {
            sensor: args.sensor,
            reference: args.reference,
            output: args.output,
            display: !args.no_display,
        }
    }
}

/// Asks a running `Monitor::run` to stop. Returns `true` if an earlier request is still waiting
/// in a single-slot channel, or nothing is listening any more; the caller should then exit
/// outright instead of waiting on the loop.
pub fn request_shutdown(shutdown: &Sender<()>) -> bool {
    match shutdown.try_send(()) {
        Ok(()) => false,
        Err(TrySendError::Full(())) => true,
        Err(TrySendError::Disconnected(())) => {
            warn!("Shutdown requested after monitoring had already finished");
            true
        }
    }
}

impl Monitor {
    /// Runs a single read, compare and render cycle, writing the report to `writer`.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// * The sensor file cannot be read, or contains a character outside of `{A, T, C, G}`.
    ///   The latter can be recovered from with `downcast_ref::<SequenceError>()`.
    /// * The plot cannot be written.
    pub fn analyse(&self, writer: &mut impl Write) -> Result<MutationReport> {
        let sample = Seq::from_path(&self.sensor)?;
        if sample.is_empty() {
            warn!("{} holds no sequence", self.sensor.display());
        }

        let report = detect_mutations(&self.reference, &sample);
        debug!("Mutations at {:?}", report.positions());

        writeln!(
            writer,
            "\n--- Analysis: {} ---",
            chrono::offset::Local::now().format("%a %b %e %H:%M:%S %Y")
        )?;
        report.write_summary(writer)?;

        if self.display {
            writeln!(writer, "\n{}", plot::render_track(&self.reference, &sample, &report))?;
        }
        writer.flush()?;

        plot::save_svg(&self.output, &self.reference, &sample, &report)?;
        info!(
            "Read {} bases from {}, plot saved to {}",
            sample.len(),
            self.sensor.display(),
            self.output.display()
        );

        Ok(report)
    }

    /// Repeatedly calls `analyse`, waiting `interval` between cycles, until a message arrives on
    /// `shutdown` or its sender is dropped. An interrupt during the wait ends it immediately.
    ///
    /// Readings with invalid characters are logged and skipped. Any other error stops
    /// monitoring and is returned.
    pub fn run(
        &self,
        writer: &mut impl Write,
        interval: Duration,
        shutdown: &Receiver<()>,
    ) -> Result<()> {
        writeln!(
            writer,
            "\nStarting monitoring every {} seconds. Press Ctrl+C to stop.",
            interval.as_secs()
        )?;

        loop {
            if let Err(e) = self.analyse(writer) {
                match e.downcast_ref::<SequenceError>() {
                    Some(SequenceError::InvalidNucleotide { .. }) => error!("{}", e),
                    _ => return Err(e),
                }
            }

            match shutdown.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => continue,
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        writeln!(writer, "\nMonitoring stopped.")?;
        Ok(())
    }
}
