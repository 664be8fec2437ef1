//! # Interval Table
//!
//! Named intervals and their distance in semitones above the root.
//!
//! The table is pre-extended: compound intervals (ninths, elevenths,
//! thirteenths) map straight to values of 12 and above, so a chord tone's offset
//! is read off the table with no octave arithmetic.
//!
//! Several names share a distance (`augmented_fourth` and `diminished_fifth` are
//! both 6). They stay separate entries so a chosen spelling survives.
//!
//! ## Example
//! ```rust
//! use chordal::IntervalName;
//!
//! assert_eq!(IntervalName::MajorThird.semitones(), 4);
//! assert_eq!("major_ninth".parse::<IntervalName>().unwrap().semitones(), 14);
//! ```

use crate::error::ChordError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalName {
    Unison,
    MinorSecond,
    MajorSecond,
    MinorThird,
    MajorThird,
    PerfectFourth,
    AugmentedFourth,
    DiminishedFifth,
    PerfectFifth,
    AugmentedFifth,
    MinorSixth,
    MajorSixth,
    DiminishedSeventh,
    MinorSeventh,
    MajorSeventh,
    Octave,
    MinorNinth,
    MajorNinth,
    MinorTenth,
    MajorTenth,
    PerfectEleventh,
    AugmentedEleventh,
    PerfectTwelfth,
    MinorThirteenth,
    MajorThirteenth,
}

impl IntervalName {
    /// Every entry of the table, in ascending order of distance
    pub const ALL: [IntervalName; 25] = [
        IntervalName::Unison,
        IntervalName::MinorSecond,
        IntervalName::MajorSecond,
        IntervalName::MinorThird,
        IntervalName::MajorThird,
        IntervalName::PerfectFourth,
        IntervalName::AugmentedFourth,
        IntervalName::DiminishedFifth,
        IntervalName::PerfectFifth,
        IntervalName::AugmentedFifth,
        IntervalName::MinorSixth,
        IntervalName::MajorSixth,
        IntervalName::DiminishedSeventh,
        IntervalName::MinorSeventh,
        IntervalName::MajorSeventh,
        IntervalName::Octave,
        IntervalName::MinorNinth,
        IntervalName::MajorNinth,
        IntervalName::MinorTenth,
        IntervalName::MajorTenth,
        IntervalName::PerfectEleventh,
        IntervalName::AugmentedEleventh,
        IntervalName::PerfectTwelfth,
        IntervalName::MinorThirteenth,
        IntervalName::MajorThirteenth,
    ];

    /// Distance above the root in semitones
    pub fn semitones(self) -> u8 {
        match self {
            IntervalName::Unison => 0,
            IntervalName::MinorSecond => 1,
            IntervalName::MajorSecond => 2,
            IntervalName::MinorThird => 3,
            IntervalName::MajorThird => 4,
            IntervalName::PerfectFourth => 5,
            IntervalName::AugmentedFourth | IntervalName::DiminishedFifth => 6,
            IntervalName::PerfectFifth => 7,
            IntervalName::AugmentedFifth | IntervalName::MinorSixth => 8,
            IntervalName::MajorSixth | IntervalName::DiminishedSeventh => 9,
            IntervalName::MinorSeventh => 10,
            IntervalName::MajorSeventh => 11,
            IntervalName::Octave => 12,
            IntervalName::MinorNinth => 13,
            IntervalName::MajorNinth => 14,
            IntervalName::MinorTenth => 15,
            IntervalName::MajorTenth => 16,
            IntervalName::PerfectEleventh => 17,
            IntervalName::AugmentedEleventh => 18,
            IntervalName::PerfectTwelfth => 19,
            IntervalName::MinorThirteenth => 20,
            IntervalName::MajorThirteenth => 21,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            IntervalName::Unison => "unison",
            IntervalName::MinorSecond => "minor_second",
            IntervalName::MajorSecond => "major_second",
            IntervalName::MinorThird => "minor_third",
            IntervalName::MajorThird => "major_third",
            IntervalName::PerfectFourth => "perfect_fourth",
            IntervalName::AugmentedFourth => "augmented_fourth",
            IntervalName::DiminishedFifth => "diminished_fifth",
            IntervalName::PerfectFifth => "perfect_fifth",
            IntervalName::AugmentedFifth => "augmented_fifth",
            IntervalName::MinorSixth => "minor_sixth",
            IntervalName::MajorSixth => "major_sixth",
            IntervalName::DiminishedSeventh => "diminished_seventh",
            IntervalName::MinorSeventh => "minor_seventh",
            IntervalName::MajorSeventh => "major_seventh",
            IntervalName::Octave => "octave",
            IntervalName::MinorNinth => "minor_ninth",
            IntervalName::MajorNinth => "major_ninth",
            IntervalName::MinorTenth => "minor_tenth",
            IntervalName::MajorTenth => "major_tenth",
            IntervalName::PerfectEleventh => "perfect_eleventh",
            IntervalName::AugmentedEleventh => "augmented_eleventh",
            IntervalName::PerfectTwelfth => "perfect_twelfth",
            IntervalName::MinorThirteenth => "minor_thirteenth",
            IntervalName::MajorThirteenth => "major_thirteenth",
        }
    }
}

impl fmt::Display for IntervalName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for IntervalName {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        IntervalName::ALL
            .iter()
            .copied()
            .find(|interval| interval.name() == wanted)
            .ok_or_else(|| ChordError::UnknownInterval(s.to_string()))
    }
}
