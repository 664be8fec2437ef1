//! # Signatures
//!
//! Flattened views of a chord, in fixed slot order (root first).
//!
//! - **Note signature**: the note of the root and of every set slot.
//! - **Interval signature**: the matching offsets, starting at 0 for the root.
//!   Each offset is raised by octaves until it is above the one before, so the
//!   result always reads as a stacked voicing.
//!
//! ```rust
//! use chordal::{Chord, NinthQuality, PitchClass};
//!
//! let mut chord = Chord::new(PitchClass::C);
//! chord.set_quality(NinthQuality::Major);
//! assert_eq!(chord.interval_signature(), vec![0, 4, 7, 10, 14]);
//! assert_eq!(chord.note_signature().len(), 5);
//! ```

use crate::chord::{Chord, ChordTone};
use crate::scale::{PitchClass, CHROMATIC_LEN};
use serde::Serialize;

impl Chord {
    /// Root followed by the note of every set slot
    pub fn note_signature(&self) -> Vec<PitchClass> {
        std::iter::once(self.root())
            .chain(self.tones().map(|tone| tone.note))
            .collect()
    }

    /// Root offset (0) followed by every set slot's offset, strictly increasing
    pub fn interval_signature(&self) -> Vec<u8> {
        stack_ascending(self.tones().map(|tone| tone.offset))
    }
}

/// Stack offsets above a root at 0, lifting each by octaves until it clears the
/// previous value. Pitch classes are preserved.
pub fn stack_ascending<I>(offsets: I) -> Vec<u8>
where
    I: IntoIterator<Item = u8>,
{
    let mut stacked = vec![0u8];
    for offset in offsets {
        let previous = stacked[stacked.len() - 1];
        let mut lifted = offset;
        while lifted <= previous {
            lifted += CHROMATIC_LEN;
        }
        stacked.push(lifted);
    }
    stacked
}

/// Everything derived from a chord, in a shape ready for serialization
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChordReport {
    pub root: PitchClass,
    pub tones: Vec<ChordTone>,
    pub notes: Vec<PitchClass>,
    pub intervals: Vec<u8>,
}

impl From<&Chord> for ChordReport {
    fn from(chord: &Chord) -> Self {
        ChordReport {
            root: chord.root(),
            tones: chord.tones().copied().collect(),
            notes: chord.note_signature(),
            intervals: chord.interval_signature(),
        }
    }
}
