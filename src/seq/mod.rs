pub mod dna;
pub mod sequence;

pub use self::dna::Nucleotide;
pub use self::sequence::{Seq, SequenceError};
