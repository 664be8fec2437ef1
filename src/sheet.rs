//! # Chord Sheets
//!
//! A chord sheet is a YAML document listing chords by root and slot qualities.
//! Slot keys are optional and take the quality labels of their slot; anything
//! left out follows the usual construction defaults.
//!
//! ```yaml
//! title: Turnaround
//! chords:
//!   - root: C
//!     seventh: major
//!   - root: A
//!     third: minor
//!     seventh: minor
//!   - root: D
//!     ninth: major
//!   - root: G
//!     thirteenth: major
//! ```
//!
//! ## Errors
//! - YAML that does not have this shape, including a missing `chords` list or
//!   an unrecognised top-level key → `ChordError::SheetError`
//! - A root outside the chromatic scale → `ChordError::UnknownRoot`
//! - A quality the slot does not accept → `ChordError::InvalidArgument`
//!
//! ## Example
//! ```rust
//! use chordal::{parse_sheet, PitchClass, Slot};
//!
//! let sheet = parse_sheet("chords:\n  - root: Bb\n    third: minor\n").unwrap();
//! assert_eq!(sheet.chords[0].note(Slot::Third), Some(PitchClass::CSharp));
//! ```

use crate::chord::Chord;
use crate::error::ChordError;
use crate::quality::{Quality, Slot};
use crate::scale::PitchClass;
use serde::Deserialize;
use std::str::FromStr;
use tracing::debug;

/// Raw chord entry for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawChord {
    pub root: String,
    pub second: Option<String>,
    pub third: Option<String>,
    pub fourth: Option<String>,
    pub fifth: Option<String>,
    pub sixth: Option<String>,
    pub seventh: Option<String>,
    pub ninth: Option<String>,
    pub eleventh: Option<String>,
    pub thirteenth: Option<String>,
}

impl RawChord {
    fn entries(&self) -> [(Slot, Option<&String>); Slot::COUNT] {
        [
            (Slot::Second, self.second.as_ref()),
            (Slot::Third, self.third.as_ref()),
            (Slot::Fourth, self.fourth.as_ref()),
            (Slot::Fifth, self.fifth.as_ref()),
            (Slot::Sixth, self.sixth.as_ref()),
            (Slot::Seventh, self.seventh.as_ref()),
            (Slot::Ninth, self.ninth.as_ref()),
            (Slot::Eleventh, self.eleventh.as_ref()),
            (Slot::Thirteenth, self.thirteenth.as_ref()),
        ]
    }

    fn to_chord(&self) -> Result<Chord, ChordError> {
        let root = PitchClass::from_str(&self.root)?;
        let qualities = self
            .entries()
            .into_iter()
            .filter_map(|(slot, label)| label.map(|label| format!("{}:{}", slot, label.trim())))
            .map(|text| text.parse::<Quality>())
            .collect::<Result<Vec<Quality>, ChordError>>()?;
        Ok(Chord::with_qualities(root, qualities))
    }
}

/// Raw sheet for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawSheet {
    pub title: Option<String>,
    pub chords: Vec<RawChord>,
}

/// A parsed chord sheet
#[derive(Debug, Clone, PartialEq)]
pub struct ChordSheet {
    pub title: Option<String>,
    pub chords: Vec<Chord>,
}

/// Parse a YAML chord sheet into chords
pub fn parse_sheet(content: &str) -> Result<ChordSheet, ChordError> {
    let raw: RawSheet =
        serde_yaml::from_str(content).map_err(|e| ChordError::SheetError(e.to_string()))?;

    let chords = raw
        .chords
        .iter()
        .map(RawChord::to_chord)
        .collect::<Result<Vec<Chord>, ChordError>>()?;

    debug!(title = ?raw.title, chords = chords.len(), "parsed chord sheet");
    Ok(ChordSheet {
        title: raw.title,
        chords,
    })
}

impl FromStr for ChordSheet {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sheet(s)
    }
}
