use std::fmt;

pub const A: u8 = 0b00;
pub const T: u8 = 0b10;
pub const C: u8 = 0b01;
pub const G: u8 = 0b11;

/// A single base from the DNA alphabet. The discriminants follow the usual 2-bit encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Nucleotide {
    A = A,
    T = T,
    C = C,
    G = G,
}

impl Nucleotide {
    /// Converts an upper-case character into a `Nucleotide`, returning `None` for anything
    /// outside of `{A, T, C, G}`.
    #[inline(always)]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Nucleotide::A),
            'T' => Some(Nucleotide::T),
            'C' => Some(Nucleotide::C),
            'G' => Some(Nucleotide::G),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn as_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::T => 'T',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
        }
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
