//! # Slots and Qualities
//!
//! A chord has a root plus up to nine optional slots. Each slot accepts only
//! the qualities of its own enum, and every quality names one entry of the
//! interval table.
//!
//! ```text
//! Slot        Qualities                               Default
//! second      add2                                    add2
//! third       sus2, minor, major, sus4                major
//! fourth      add4                                    add4
//! fifth       diminished, perfect, augmented          perfect
//! sixth       add6                                    add6
//! seventh     diminished, minor, major                minor
//! ninth       minor, major, add9                      major
//! eleventh    perfect, augmented, add11               perfect
//! thirteenth  minor, major, add13                     major
//! ```
//!
//! ## Dependency Chain
//! - `ninth` requires `seventh`
//! - `eleventh` requires `seventh`, `ninth`
//! - `thirteenth` requires `seventh`, `ninth`, `eleventh`
//!
//! ## Aliases
//! `major` and `add9` on the ninth both resolve to `major_ninth`, but they remain
//! distinct values: toggling `add9` off a chord that holds `major` adds it instead.
//!
//! ## Text Form
//! A quality is written `slot:quality` (`"seventh:minor"`). Qualities whose label
//! is unique across all slots (`add9`, `sus4`, ...) may be written bare.
//!
//! ```rust
//! use chordal::{NinthQuality, Quality, Slot};
//!
//! let q: Quality = "ninth:add9".parse().unwrap();
//! assert_eq!(q, Quality::Ninth(NinthQuality::Add9));
//! assert_eq!(q.slot(), Slot::Ninth);
//! assert_eq!(q.semitones(), 14);
//! assert_eq!("sus4".parse::<Quality>().unwrap().slot(), Slot::Third);
//! ```

use crate::error::ChordError;
use crate::intervals::IntervalName;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A chord position above the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Ninth,
    Eleventh,
    Thirteenth,
}

impl Slot {
    pub const COUNT: usize = 9;

    /// Slots in chord order, lowest first
    pub const ALL: [Slot; Slot::COUNT] = [
        Slot::Second,
        Slot::Third,
        Slot::Fourth,
        Slot::Fifth,
        Slot::Sixth,
        Slot::Seventh,
        Slot::Ninth,
        Slot::Eleventh,
        Slot::Thirteenth,
    ];

    /// Extension slots in descending order, used when resolving dependencies
    pub const EXTENSIONS_DESCENDING: [Slot; 4] =
        [Slot::Thirteenth, Slot::Eleventh, Slot::Ninth, Slot::Seventh];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Slot::Second => "second",
            Slot::Third => "third",
            Slot::Fourth => "fourth",
            Slot::Fifth => "fifth",
            Slot::Sixth => "sixth",
            Slot::Seventh => "seventh",
            Slot::Ninth => "ninth",
            Slot::Eleventh => "eleventh",
            Slot::Thirteenth => "thirteenth",
        }
    }

    /// Lower slots that must be present whenever this slot is
    pub fn dependencies(self) -> &'static [Slot] {
        match self {
            Slot::Ninth => &[Slot::Seventh],
            Slot::Eleventh => &[Slot::Seventh, Slot::Ninth],
            Slot::Thirteenth => &[Slot::Seventh, Slot::Ninth, Slot::Eleventh],
            _ => &[],
        }
    }

    /// Quality assigned when this slot is filled without an explicit choice
    pub fn default_quality(self) -> Quality {
        match self {
            Slot::Second => SecondQuality::Add2.into(),
            Slot::Third => ThirdQuality::Major.into(),
            Slot::Fourth => FourthQuality::Add4.into(),
            Slot::Fifth => FifthQuality::Perfect.into(),
            Slot::Sixth => SixthQuality::Add6.into(),
            Slot::Seventh => SeventhQuality::Minor.into(),
            Slot::Ninth => NinthQuality::Major.into(),
            Slot::Eleventh => EleventhQuality::Perfect.into(),
            Slot::Thirteenth => ThirteenthQuality::Major.into(),
        }
    }

    /// Every quality this slot accepts
    pub fn qualities(self) -> impl Iterator<Item = Quality> {
        Quality::all().filter(move |q| q.slot() == self)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Slot {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Slot::ALL
            .iter()
            .copied()
            .find(|slot| slot.name() == wanted)
            .ok_or_else(|| ChordError::InvalidArgument { value: s.to_string() })
    }
}

/// Declares the quality enum of one slot: its variants, their labels (also the
/// serde names) and the interval each resolves to.
macro_rules! slot_quality {
    (
        $(#[$meta:meta])*
        $name:ident for $slot:ident {
            $($variant:ident => $label:literal, $interval:ident;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn interval(self) -> IntervalName {
                match self {
                    $($name::$variant => IntervalName::$interval,)+
                }
            }

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl From<$name> for Quality {
            fn from(quality: $name) -> Quality {
                Quality::$slot(quality)
            }
        }
    };
}

slot_quality! {
    /// Added second
    SecondQuality for Second {
        Add2 => "add2", MajorSecond;
    }
}

slot_quality! {
    /// Third, including the suspended replacements
    ThirdQuality for Third {
        Sus2 => "sus2", MajorSecond;
        Minor => "minor", MinorThird;
        Major => "major", MajorThird;
        Sus4 => "sus4", PerfectFourth;
    }
}

slot_quality! {
    /// Added fourth
    FourthQuality for Fourth {
        Add4 => "add4", PerfectFourth;
    }
}

slot_quality! {
    FifthQuality for Fifth {
        Diminished => "diminished", DiminishedFifth;
        Perfect => "perfect", PerfectFifth;
        Augmented => "augmented", AugmentedFifth;
    }
}

slot_quality! {
    /// Added sixth
    SixthQuality for Sixth {
        Add6 => "add6", MajorSixth;
    }
}

slot_quality! {
    SeventhQuality for Seventh {
        Diminished => "diminished", DiminishedSeventh;
        Minor => "minor", MinorSeventh;
        Major => "major", MajorSeventh;
    }
}

slot_quality! {
    NinthQuality for Ninth {
        Minor => "minor", MinorNinth;
        Major => "major", MajorNinth;
        Add9 => "add9", MajorNinth;
    }
}

slot_quality! {
    EleventhQuality for Eleventh {
        Perfect => "perfect", PerfectEleventh;
        Augmented => "augmented", AugmentedEleventh;
        Add11 => "add11", PerfectEleventh;
    }
}

slot_quality! {
    ThirteenthQuality for Thirteenth {
        Minor => "minor", MinorThirteenth;
        Major => "major", MajorThirteenth;
        Add13 => "add13", MajorThirteenth;
    }
}

/// A quality together with the slot it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    Second(SecondQuality),
    Third(ThirdQuality),
    Fourth(FourthQuality),
    Fifth(FifthQuality),
    Sixth(SixthQuality),
    Seventh(SeventhQuality),
    Ninth(NinthQuality),
    Eleventh(EleventhQuality),
    Thirteenth(ThirteenthQuality),
}

impl Quality {
    /// Every quality of every slot, in slot order
    pub fn all() -> impl Iterator<Item = Quality> {
        SecondQuality::ALL
            .iter()
            .copied()
            .map(Quality::from)
            .chain(ThirdQuality::ALL.iter().copied().map(Quality::from))
            .chain(FourthQuality::ALL.iter().copied().map(Quality::from))
            .chain(FifthQuality::ALL.iter().copied().map(Quality::from))
            .chain(SixthQuality::ALL.iter().copied().map(Quality::from))
            .chain(SeventhQuality::ALL.iter().copied().map(Quality::from))
            .chain(NinthQuality::ALL.iter().copied().map(Quality::from))
            .chain(EleventhQuality::ALL.iter().copied().map(Quality::from))
            .chain(ThirteenthQuality::ALL.iter().copied().map(Quality::from))
    }

    pub fn slot(self) -> Slot {
        match self {
            Quality::Second(_) => Slot::Second,
            Quality::Third(_) => Slot::Third,
            Quality::Fourth(_) => Slot::Fourth,
            Quality::Fifth(_) => Slot::Fifth,
            Quality::Sixth(_) => Slot::Sixth,
            Quality::Seventh(_) => Slot::Seventh,
            Quality::Ninth(_) => Slot::Ninth,
            Quality::Eleventh(_) => Slot::Eleventh,
            Quality::Thirteenth(_) => Slot::Thirteenth,
        }
    }

    pub fn interval(self) -> IntervalName {
        match self {
            Quality::Second(q) => q.interval(),
            Quality::Third(q) => q.interval(),
            Quality::Fourth(q) => q.interval(),
            Quality::Fifth(q) => q.interval(),
            Quality::Sixth(q) => q.interval(),
            Quality::Seventh(q) => q.interval(),
            Quality::Ninth(q) => q.interval(),
            Quality::Eleventh(q) => q.interval(),
            Quality::Thirteenth(q) => q.interval(),
        }
    }

    /// The quality's name within its slot (`"minor"`, `"add9"`)
    pub fn label(self) -> &'static str {
        match self {
            Quality::Second(q) => q.label(),
            Quality::Third(q) => q.label(),
            Quality::Fourth(q) => q.label(),
            Quality::Fifth(q) => q.label(),
            Quality::Sixth(q) => q.label(),
            Quality::Seventh(q) => q.label(),
            Quality::Ninth(q) => q.label(),
            Quality::Eleventh(q) => q.label(),
            Quality::Thirteenth(q) => q.label(),
        }
    }

    pub fn semitones(self) -> u8 {
        self.interval().semitones()
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.slot(), self.label())
    }
}

impl FromStr for Quality {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChordError::InvalidArgument { value: s.to_string() };
        let raw = s.trim();

        if let Some((slot, label)) = raw.split_once(':') {
            let slot: Slot = slot.trim().parse().map_err(|_| invalid())?;
            let label = label.trim();
            return slot.qualities().find(|q| q.label() == label).ok_or_else(invalid);
        }

        // Bare labels are only accepted when no other slot shares them
        let mut matches = Quality::all().filter(|q| q.label() == raw);
        match (matches.next(), matches.next()) {
            (Some(quality), None) => Ok(quality),
            _ => Err(invalid()),
        }
    }
}

impl Serialize for Quality {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
