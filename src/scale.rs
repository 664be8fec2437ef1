//! # Chromatic Scale
//!
//! The twelve pitch classes a chord root and its tones are drawn from.
//!
//! ## Spelling
//! Each pitch class has one canonical spelling, used for every derived note:
//!
//! ```text
//! C  C#  D  Eb  E  F  F#  G  Ab  A  Bb  B
//! 0  1   2  3   4  5  6   7  8   9  10  11
//! ```
//!
//! Parsing also accepts the enharmonic aliases (`Db`, `D#`, `Gb`, `G#`, `A#`) and
//! the unicode accidentals `♯`/`♭`, resolving them to the canonical pitch class.
//!
//! ## Example
//! ```rust
//! use chordal::PitchClass;
//!
//! let g: PitchClass = "G".parse().unwrap();
//! assert_eq!(g.transpose(10).name(), "F");
//! assert_eq!("A#".parse::<PitchClass>().unwrap(), PitchClass::BFlat);
//! ```

use crate::error::ChordError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of pitch classes in the chromatic scale
pub const CHROMATIC_LEN: u8 = 12;

/// One of the twelve pitch classes, named by its canonical spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum PitchClass {
    #[default]
    C,
    CSharp,
    D,
    EFlat,
    E,
    F,
    FSharp,
    G,
    AFlat,
    A,
    BFlat,
    B,
}

/// The chromatic scale in ascending order from C
pub const CHROMATIC_SCALE: [PitchClass; 12] = [
    PitchClass::C,
    PitchClass::CSharp,
    PitchClass::D,
    PitchClass::EFlat,
    PitchClass::E,
    PitchClass::F,
    PitchClass::FSharp,
    PitchClass::G,
    PitchClass::AFlat,
    PitchClass::A,
    PitchClass::BFlat,
    PitchClass::B,
];

impl PitchClass {
    /// Position in the chromatic scale (C = 0)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Pitch class at `index`, wrapping around the octave
    pub fn from_index(index: u8) -> PitchClass {
        CHROMATIC_SCALE[(index % CHROMATIC_LEN) as usize]
    }

    /// Pitch class `semitones` above this one
    pub fn transpose(self, semitones: u8) -> PitchClass {
        PitchClass::from_index(self.index() + semitones % CHROMATIC_LEN)
    }

    /// Semitones from this pitch class up to `other`, within one octave
    pub fn interval_to(self, other: PitchClass) -> u8 {
        (other.index() + CHROMATIC_LEN - self.index()) % CHROMATIC_LEN
    }

    /// Canonical spelling
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::EFlat => "Eb",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::AFlat => "Ab",
            PitchClass::A => "A",
            PitchClass::BFlat => "Bb",
            PitchClass::B => "B",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PitchClass {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();

        let base: u8 = match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('C') => 0,
            Some('D') => 2,
            Some('E') => 4,
            Some('F') => 5,
            Some('G') => 7,
            Some('A') => 9,
            Some('B') => 11,
            _ => return Err(ChordError::UnknownRoot(s.to_string())),
        };

        // At most one accidental
        let index = match (chars.next(), chars.next()) {
            (None, _) => base,
            (Some('#') | Some('♯'), None) => base + 1,
            (Some('b') | Some('♭'), None) => base + CHROMATIC_LEN - 1,
            _ => return Err(ChordError::UnknownRoot(s.to_string())),
        };

        Ok(PitchClass::from_index(index))
    }
}

impl Serialize for PitchClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for PitchClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_has_twelve_distinct_classes() {
        for (i, pc) in CHROMATIC_SCALE.iter().enumerate() {
            assert_eq!(pc.index() as usize, i);
            assert_eq!(PitchClass::from_index(i as u8), *pc);
        }
        let mut names: Vec<&str> = CHROMATIC_SCALE.iter().map(|pc| pc.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn test_transpose_wraps() {
        assert_eq!(PitchClass::B.transpose(1), PitchClass::C);
        assert_eq!(PitchClass::G.transpose(4), PitchClass::B);
        assert_eq!(PitchClass::G.transpose(21), PitchClass::E);
        assert_eq!(PitchClass::A.transpose(12), PitchClass::A);
    }

    #[test]
    fn test_interval_to() {
        assert_eq!(PitchClass::C.interval_to(PitchClass::G), 7);
        assert_eq!(PitchClass::G.interval_to(PitchClass::D), 7);
        assert_eq!(PitchClass::E.interval_to(PitchClass::E), 0);
    }

    #[test]
    fn test_parse_canonical_and_enharmonic() {
        assert_eq!("C".parse::<PitchClass>().unwrap(), PitchClass::C);
        assert_eq!("Eb".parse::<PitchClass>().unwrap(), PitchClass::EFlat);
        assert_eq!("D#".parse::<PitchClass>().unwrap(), PitchClass::EFlat);
        assert_eq!("Db".parse::<PitchClass>().unwrap(), PitchClass::CSharp);
        assert_eq!("G♯".parse::<PitchClass>().unwrap(), PitchClass::AFlat);
        assert_eq!("Cb".parse::<PitchClass>().unwrap(), PitchClass::B);
        assert_eq!(" f# ".parse::<PitchClass>().unwrap(), PitchClass::FSharp);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "H".parse::<PitchClass>(),
            Err(ChordError::UnknownRoot("H".to_string()))
        );
        assert!("".parse::<PitchClass>().is_err());
        assert!("C##".parse::<PitchClass>().is_err());
    }
}
