//! # Error Types
//!
//! This module defines all error types for the chord engine.
//!
//! ## Error Types
//! - `InvalidArgument` - A value that is not a quality of any chord slot
//! - `UnknownRoot` - A root name that is not one of the 12 pitch classes
//! - `UnknownInterval` - A name missing from the interval table
//! - `SheetError` - A YAML chord sheet that could not be read
//!
//! Interval lookups and scale positions are total over their enums, so there is
//! no error for a "missing table entry": it cannot be expressed.
//!
//! ## Usage
//! ```rust
//! use chordal::{Chord, ChordError, PitchClass};
//!
//! let mut chord = Chord::new(PitchClass::C);
//! match chord.add_or_remove_named("ninth:perfect") {
//!     Ok(toggle) => println!("{:?}", toggle),
//!     Err(ChordError::InvalidArgument { value }) => eprintln!("not a chord quality: {}", value),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChordError {
    /// A value that does not belong to any slot's quality set.
    ///
    /// # Example
    /// ```
    /// # use chordal::ChordError;
    /// let err = ChordError::InvalidArgument { value: "ninth:perfect".to_string() };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Invalid interval quality: ninth:perfect is not a quality of any chord slot"
    /// );
    /// ```
    #[error("Invalid interval quality: {value} is not a quality of any chord slot")]
    InvalidArgument { value: String },

    /// Root name that is not a pitch class of the chromatic scale.
    ///
    /// # Example
    /// ```
    /// # use chordal::ChordError;
    /// let err = ChordError::UnknownRoot("H".to_string());
    /// assert_eq!(err.to_string(), "Unknown root note: H");
    /// ```
    #[error("Unknown root note: {0}")]
    UnknownRoot(String),

    /// Interval name absent from the interval table.
    #[error("Unknown interval: {0}")]
    UnknownInterval(String),

    /// Chord sheet YAML that does not describe a list of chords.
    #[error("Invalid chord sheet: {0}")]
    SheetError(String),
}
