pub mod chord;
pub mod error;
pub mod intervals;
pub mod quality;
pub mod scale;
pub mod sheet;
pub mod signature;

pub use chord::{Chord, ChordTone, Toggle};
pub use error::*;
pub use intervals::IntervalName;
pub use quality::*;
pub use scale::{PitchClass, CHROMATIC_LEN, CHROMATIC_SCALE};
pub use sheet::{parse_sheet, ChordSheet};
pub use signature::{stack_ascending, ChordReport};

/// Build a chord from a root name and textual qualities (`"seventh:minor"`, `"add9"`).
/// This is the main entry point for callers working with strings.
pub fn chord_from_names(root: &str, qualities: &[&str]) -> Result<Chord, ChordError> {
    let root: PitchClass = root.parse()?;
    let qualities = qualities
        .iter()
        .map(|quality| quality.parse::<Quality>())
        .collect::<Result<Vec<Quality>, ChordError>>()?;
    Ok(Chord::with_qualities(root, qualities))
}

/// Render every chord of a YAML sheet as a YAML list of chord reports
pub fn sheet_to_yaml(content: &str) -> Result<String, ChordError> {
    let sheet = parse_sheet(content)?;
    let reports: Vec<ChordReport> = sheet.chords.iter().map(ChordReport::from).collect();
    serde_yaml::to_string(&reports).map_err(|e| ChordError::SheetError(e.to_string()))
}
