use crate::seq::Seq;
use std::fmt;
use std::io::Write;

/// A single position at which the sample differs from the reference.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Mutation {
    pub pos: usize,
    pub reference: char,
    pub sample: char,
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position {}: {} → {}", self.pos, self.reference, self.sample)
    }
}

/// Raised when the reference and sample are not the same length. This is reported alongside
/// the mutations but never counts as one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LengthMismatch {
    pub reference: usize,
    pub sample: usize,
}

impl fmt::Display for LengthMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Warning! Lengths differ. Reference: {}, Sample: {}",
            self.reference, self.sample
        )
    }
}

/// The result of comparing a sample against the reference.
///
/// # Fields
///
/// * `mutations` - Every differing position within the overlapping prefix, in ascending order
/// * `length_warning` - Present only if the lengths are unequal
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct MutationReport {
    pub mutations: Vec<Mutation>,
    pub length_warning: Option<LengthMismatch>,
}

impl MutationReport {
    /// The 0-indexed positions of every mutation.
    pub fn positions(&self) -> Vec<usize> {
        self.mutations.iter().map(|m| m.pos).collect()
    }

    pub fn is_clean(&self) -> bool {
        self.mutations.is_empty() && self.length_warning.is_none()
    }

    /// Writes the human readable summary of this report, as shown after each reading.
    pub fn write_summary(&self, writer: &mut impl Write) -> std::io::Result<()> {
        if self.mutations.is_empty() {
            writeln!(writer, "No mutations detected.")?;
        } else {
            writeln!(writer, "Mutations detected:")?;
            for m in self.mutations.iter() {
                writeln!(writer, "  {m}")?;
            }
        }

        if let Some(warning) = &self.length_warning {
            writeln!(writer, "{warning}")?;
        }

        Ok(())
    }
}

/// Compares `sample` against `reference` position by position.
///
/// Only positions `0..min(reference.len(), sample.len())` are compared; any tail beyond the
/// shorter sequence is reported solely through `length_warning`.
pub fn detect_mutations(reference: &Seq, sample: &Seq) -> MutationReport {
    let mutations = reference
        .iter()
        .zip(sample.iter())
        .enumerate()
        .filter(|(_, (r, s))| r != s)
        .map(|(pos, (r, s))| Mutation {
            pos,
            reference: r.as_char(),
            sample: s.as_char(),
        })
        .collect::<Vec<_>>();

    let length_warning = (reference.len() != sample.len()).then_some(LengthMismatch {
        reference: reference.len(),
        sample: sample.len(),
    });

    debug!(
        "Compared {} positions, found {} mutations",
        reference.len().min(sample.len()),
        mutations.len()
    );

    MutationReport {
        mutations,
        length_warning,
    }
}
