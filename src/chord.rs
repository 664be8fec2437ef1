//! # Chord Model
//!
//! A root pitch class plus one optional tone per slot. Every tone stores the
//! quality that was chosen along with the note and offset derived from it, and
//! the chord keeps the three consistent through every mutation.
//!
//! ## Rules
//! - A chord built from a root alone is a major triad (major third, perfect fifth).
//! - Setting an extension fills its missing lower extensions with defaults:
//!   thirteenth → eleventh (perfect), ninth (major), seventh (minor).
//!   Prerequisites that are already set keep their quality.
//! - Clearing a slot never clears the slots that depend on it.
//! - Changing the root recomputes every set tone and leaves the set of slots alone.
//!
//! ## Example
//! ```rust
//! use chordal::{Chord, PitchClass, Slot, ThirteenthQuality};
//!
//! let mut chord = Chord::new(PitchClass::C);
//! chord.set_quality(ThirteenthQuality::Major);
//! assert_eq!(chord.note(Slot::Seventh), Some(PitchClass::BFlat));
//! assert_eq!(chord.note(Slot::Thirteenth), Some(PitchClass::A));
//!
//! chord.set_root(PitchClass::G);
//! assert_eq!(chord.note(Slot::Seventh), Some(PitchClass::F));
//! assert_eq!(chord.note(Slot::Thirteenth), Some(PitchClass::E));
//! ```
//!
//! A `Chord` has no internal synchronization; share it across threads only
//! behind a lock.

use crate::error::ChordError;
use crate::quality::{Quality, Slot};
use crate::scale::PitchClass;
use serde::Serialize;
use std::fmt;
use tracing::{debug, trace};

/// A chord tone: the chosen quality and what it resolves to above the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChordTone {
    pub quality: Quality,
    pub note: PitchClass,
    /// Semitones above the root, compound intervals included (a ninth is 13 or 14)
    pub offset: u8,
}

impl ChordTone {
    pub fn derive(root: PitchClass, quality: Quality) -> ChordTone {
        let offset = quality.semitones();
        ChordTone {
            quality,
            note: root.transpose(offset),
            offset,
        }
    }

    pub fn slot(&self) -> Slot {
        self.quality.slot()
    }
}

/// Outcome of [`Chord::add_or_remove`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    root: PitchClass,
    tones: [Option<ChordTone>; Slot::COUNT],
}

impl Chord {
    /// Major triad on `root`
    pub fn new(root: PitchClass) -> Chord {
        Chord::with_qualities(root, std::iter::empty())
    }

    /// Build a chord from a root and explicit qualities.
    ///
    /// The third and fifth default to major and perfect when not given. The
    /// highest extension given has its missing dependencies filled. If a slot
    /// appears twice the later quality wins.
    pub fn with_qualities<I>(root: PitchClass, qualities: I) -> Chord
    where
        I: IntoIterator<Item = Quality>,
    {
        let mut chord = Chord {
            root,
            tones: [None; Slot::COUNT],
        };

        for quality in qualities {
            chord.assign(quality);
        }

        for slot in [Slot::Third, Slot::Fifth] {
            if !chord.is_set(slot) {
                chord.assign(slot.default_quality());
            }
        }

        // Dependencies chain downward, so the highest extension covers the rest
        if let Some(highest) = Slot::EXTENSIONS_DESCENDING
            .iter()
            .copied()
            .find(|slot| chord.is_set(*slot))
        {
            chord.fill_dependencies(highest);
        }

        debug!(chord = %chord, "constructed chord");
        chord
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn tone(&self, slot: Slot) -> Option<&ChordTone> {
        self.tones[slot.index()].as_ref()
    }

    pub fn quality(&self, slot: Slot) -> Option<Quality> {
        self.tone(slot).map(|tone| tone.quality)
    }

    pub fn note(&self, slot: Slot) -> Option<PitchClass> {
        self.tone(slot).map(|tone| tone.note)
    }

    pub fn offset(&self, slot: Slot) -> Option<u8> {
        self.tone(slot).map(|tone| tone.offset)
    }

    pub fn is_set(&self, slot: Slot) -> bool {
        self.tones[slot.index()].is_some()
    }

    /// Set tones in slot order, lowest first
    pub fn tones(&self) -> impl Iterator<Item = &ChordTone> {
        self.tones.iter().flatten()
    }

    /// Replace the root and recompute every set tone against it
    pub fn set_root(&mut self, root: PitchClass) {
        debug!(from = %self.root, to = %root, "replacing root");
        self.root = root;
        for tone in self.tones.iter_mut().flatten() {
            *tone = ChordTone::derive(root, tone.quality);
            trace!(slot = %tone.slot(), note = %tone.note, "recomputed tone");
        }
    }

    /// Set the slot the quality belongs to, filling missing dependencies
    pub fn set_quality(&mut self, quality: impl Into<Quality>) {
        let quality = quality.into();
        self.assign(quality);
        self.fill_dependencies(quality.slot());
    }

    /// Empty one slot. Slots that depend on it are left as they are.
    pub fn clear(&mut self, slot: Slot) {
        debug!(slot = %slot, "clearing slot");
        self.tones[slot.index()] = None;
    }

    /// Remove `quality` if it is exactly what its slot holds, otherwise set it
    pub fn add_or_remove(&mut self, quality: impl Into<Quality>) -> Toggle {
        let quality = quality.into();
        if self.quality(quality.slot()) == Some(quality) {
            self.clear(quality.slot());
            Toggle::Removed
        } else {
            self.set_quality(quality);
            Toggle::Added
        }
    }

    /// [`Chord::add_or_remove`] for a textual quality such as `"ninth:add9"`.
    ///
    /// Returns [`ChordError::InvalidArgument`] when the text is not a quality of
    /// any slot; the chord is left unchanged.
    pub fn add_or_remove_named(&mut self, quality: &str) -> Result<Toggle, ChordError> {
        let quality: Quality = quality.parse()?;
        Ok(self.add_or_remove(quality))
    }

    fn assign(&mut self, quality: Quality) {
        let tone = ChordTone::derive(self.root, quality);
        trace!(quality = %quality, note = %tone.note, offset = tone.offset, "assigning tone");
        self.tones[quality.slot().index()] = Some(tone);
    }

    fn fill_dependencies(&mut self, slot: Slot) {
        for dependency in slot.dependencies() {
            if !self.is_set(*dependency) {
                let default = dependency.default_quality();
                debug!(required_by = %slot, filled = %default, "filling dependency");
                self.assign(default);
            }
        }
    }
}

impl Default for Chord {
    fn default() -> Self {
        Chord::new(PitchClass::default())
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let notes: Vec<&str> = self.note_signature().iter().map(|pc| pc.name()).collect();
        write!(f, "{} [{}]", self.root, notes.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::*;
    use crate::scale::CHROMATIC_SCALE;

    fn c(quality: impl Into<Quality>) -> Chord {
        let mut chord = Chord::new(PitchClass::C);
        chord.set_quality(quality);
        chord
    }

    #[test]
    fn test_default_construction_is_major_triad() {
        let chord = Chord::new(PitchClass::C);
        assert_eq!(chord.quality(Slot::Third), Some(ThirdQuality::Major.into()));
        assert_eq!(chord.note(Slot::Third), Some(PitchClass::E));
        assert_eq!(chord.offset(Slot::Third), Some(4));
        assert_eq!(chord.quality(Slot::Fifth), Some(FifthQuality::Perfect.into()));
        assert_eq!(chord.note(Slot::Fifth), Some(PitchClass::G));
        assert_eq!(chord.offset(Slot::Fifth), Some(7));
        for slot in Slot::ALL {
            if slot != Slot::Third && slot != Slot::Fifth {
                assert!(chord.tone(slot).is_none(), "{} should be empty", slot);
            }
        }
    }

    #[test]
    fn test_default_chord_is_c_major() {
        assert_eq!(Chord::default(), Chord::new(PitchClass::C));
        assert_eq!(Chord::default().to_string(), "C [C E G]");
    }

    #[test]
    fn test_notes_follow_scale_for_every_root() {
        let qualities = ThirdQuality::ALL
            .iter()
            .copied()
            .map(Quality::from)
            .chain(FifthQuality::ALL.iter().copied().map(Quality::from));
        for quality in qualities {
            for root in CHROMATIC_SCALE {
                let tone = ChordTone::derive(root, quality);
                let expected = CHROMATIC_SCALE
                    [(root.index() as usize + quality.semitones() as usize) % 12];
                assert_eq!(tone.note, expected, "{} above {}", quality, root);
                assert_eq!(tone.offset, quality.semitones());
                assert_eq!(root.interval_to(tone.note), tone.offset % 12);
            }
        }
    }

    #[test]
    fn test_explicit_triad_qualities_replace_defaults() {
        let chord = Chord::with_qualities(
            PitchClass::D,
            [ThirdQuality::Minor.into(), FifthQuality::Diminished.into()],
        );
        assert_eq!(chord.note(Slot::Third), Some(PitchClass::F));
        assert_eq!(chord.note(Slot::Fifth), Some(PitchClass::AFlat));
    }

    #[test]
    fn test_construct_with_thirteenth_fills_dependencies() {
        let chord =
            Chord::with_qualities(PitchClass::F, [ThirteenthQuality::Minor.into()]);
        assert_eq!(chord.quality(Slot::Seventh), Some(SeventhQuality::Minor.into()));
        assert_eq!(chord.quality(Slot::Ninth), Some(NinthQuality::Major.into()));
        assert_eq!(chord.quality(Slot::Eleventh), Some(EleventhQuality::Perfect.into()));
        assert_eq!(chord.quality(Slot::Thirteenth), Some(ThirteenthQuality::Minor.into()));
        assert_eq!(chord.note(Slot::Seventh), Some(PitchClass::EFlat));
        assert_eq!(chord.note(Slot::Ninth), Some(PitchClass::G));
        assert_eq!(chord.note(Slot::Eleventh), Some(PitchClass::BFlat));
        assert_eq!(chord.note(Slot::Thirteenth), Some(PitchClass::CSharp));
    }

    #[test]
    fn test_construct_keeps_explicit_dependencies() {
        let chord = Chord::with_qualities(
            PitchClass::D,
            [
                SeventhQuality::Diminished.into(),
                EleventhQuality::Augmented.into(),
            ],
        );
        assert_eq!(chord.quality(Slot::Seventh), Some(SeventhQuality::Diminished.into()));
        assert_eq!(chord.quality(Slot::Ninth), Some(NinthQuality::Major.into()));
        assert_eq!(chord.quality(Slot::Eleventh), Some(EleventhQuality::Augmented.into()));
        assert!(chord.tone(Slot::Thirteenth).is_none());
    }

    #[test]
    fn test_construct_later_quality_wins() {
        let chord = Chord::with_qualities(
            PitchClass::C,
            [SeventhQuality::Major.into(), SeventhQuality::Minor.into()],
        );
        assert_eq!(chord.quality(Slot::Seventh), Some(SeventhQuality::Minor.into()));
    }

    #[test]
    fn test_set_thirteenth_fills_dependencies() {
        let chord = c(ThirteenthQuality::Major);
        assert_eq!(chord.note(Slot::Seventh), Some(PitchClass::BFlat));
        assert_eq!(chord.note(Slot::Ninth), Some(PitchClass::D));
        assert_eq!(chord.note(Slot::Eleventh), Some(PitchClass::F));
        assert_eq!(chord.note(Slot::Thirteenth), Some(PitchClass::A));
        assert_eq!(chord.offset(Slot::Thirteenth), Some(21));
    }

    #[test]
    fn test_set_ninth_keeps_existing_seventh() {
        let mut chord = c(SeventhQuality::Major);
        chord.set_quality(NinthQuality::Minor);
        assert_eq!(chord.quality(Slot::Seventh), Some(SeventhQuality::Major.into()));
        assert_eq!(chord.note(Slot::Ninth), Some(PitchClass::CSharp));
        assert!(chord.tone(Slot::Eleventh).is_none());
    }

    #[test]
    fn test_set_root_recomputes_without_changing_membership() {
        let mut chord = Chord::with_qualities(
            PitchClass::C,
            [
                SeventhQuality::Minor.into(),
                NinthQuality::Major.into(),
                EleventhQuality::Perfect.into(),
                ThirteenthQuality::Major.into(),
            ],
        );
        let qualities_before: Vec<Quality> = chord.tones().map(|t| t.quality).collect();

        chord.set_root(PitchClass::G);

        assert_eq!(chord.root(), PitchClass::G);
        assert_eq!(chord.note(Slot::Third), Some(PitchClass::B));
        assert_eq!(chord.note(Slot::Fifth), Some(PitchClass::D));
        assert_eq!(chord.note(Slot::Seventh), Some(PitchClass::F));
        assert_eq!(chord.note(Slot::Ninth), Some(PitchClass::A));
        assert_eq!(chord.note(Slot::Eleventh), Some(PitchClass::C));
        assert_eq!(chord.note(Slot::Thirteenth), Some(PitchClass::E));
        for tone in chord.tones() {
            assert_eq!(chord.root().interval_to(tone.note), tone.offset % 12);
        }
        let qualities_after: Vec<Quality> = chord.tones().map(|t| t.quality).collect();
        assert_eq!(qualities_before, qualities_after);
        assert!(chord.tone(Slot::Second).is_none());
    }

    #[test]
    fn test_set_root_does_not_refill_cleared_dependency() {
        let mut chord = c(NinthQuality::Major);
        chord.clear(Slot::Seventh);
        chord.set_root(PitchClass::A);
        assert!(chord.tone(Slot::Seventh).is_none());
        assert_eq!(chord.note(Slot::Ninth), Some(PitchClass::B));
    }

    #[test]
    fn test_clear_does_not_cascade() {
        let mut chord = c(NinthQuality::Major);
        chord.clear(Slot::Seventh);
        assert!(chord.tone(Slot::Seventh).is_none());
        assert_eq!(chord.quality(Slot::Ninth), Some(NinthQuality::Major.into()));
    }

    #[test]
    fn test_add_or_remove_twice_returns_to_empty() {
        let mut chord = Chord::new(PitchClass::C);
        assert_eq!(chord.add_or_remove(SeventhQuality::Minor), Toggle::Added);
        assert_eq!(chord.note(Slot::Seventh), Some(PitchClass::BFlat));
        assert_eq!(chord.offset(Slot::Seventh), Some(10));
        assert_eq!(chord.add_or_remove(SeventhQuality::Minor), Toggle::Removed);
        assert!(chord.tone(Slot::Seventh).is_none());
        assert_eq!(chord, Chord::new(PitchClass::C));
    }

    #[test]
    fn test_add_or_remove_replaces_different_quality() {
        let mut chord = c(NinthQuality::Major);
        assert_eq!(chord.add_or_remove(NinthQuality::Add9), Toggle::Added);
        assert_eq!(chord.quality(Slot::Ninth), Some(NinthQuality::Add9.into()));
        assert_eq!(chord.add_or_remove(NinthQuality::Add9), Toggle::Removed);
        assert!(chord.tone(Slot::Ninth).is_none());
    }

    #[test]
    fn test_add_or_remove_fills_dependencies() {
        let mut chord = Chord::new(PitchClass::E);
        chord.add_or_remove(EleventhQuality::Add11);
        assert_eq!(chord.quality(Slot::Seventh), Some(SeventhQuality::Minor.into()));
        assert_eq!(chord.quality(Slot::Ninth), Some(NinthQuality::Major.into()));
        assert_eq!(chord.note(Slot::Eleventh), Some(PitchClass::A));
    }

    #[test]
    fn test_triad_can_be_emptied() {
        let mut chord = Chord::new(PitchClass::C);
        chord.add_or_remove(ThirdQuality::Major);
        chord.add_or_remove(FifthQuality::Perfect);
        assert_eq!(chord.tones().count(), 0);
        for slot in Slot::ALL {
            chord.add_or_remove(slot.default_quality());
            assert_eq!(chord.quality(slot), Some(slot.default_quality()));
        }
        assert_eq!(chord.tones().count(), Slot::COUNT);
    }

    #[test]
    fn test_add_or_remove_named() {
        let mut chord = Chord::new(PitchClass::C);
        assert_eq!(chord.add_or_remove_named("sixth:add6"), Ok(Toggle::Added));
        assert_eq!(chord.note(Slot::Sixth), Some(PitchClass::A));
        assert_eq!(chord.add_or_remove_named("add6"), Ok(Toggle::Removed));
    }

    #[test]
    fn test_add_or_remove_named_rejects_invalid() {
        let mut chord = Chord::new(PitchClass::C);
        let before = chord.clone();
        assert_eq!(
            chord.add_or_remove_named("ninth:perfect"),
            Err(ChordError::InvalidArgument { value: "ninth:perfect".to_string() })
        );
        assert_eq!(chord, before);
    }

    #[test]
    fn test_display() {
        assert_eq!(Chord::new(PitchClass::C).to_string(), "C [C E G]");
        assert_eq!(c(SeventhQuality::Minor).to_string(), "C [C E G Bb]");
    }
}
