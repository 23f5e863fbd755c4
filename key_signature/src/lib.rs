//! # key_signature
//!
//! Diatonic scales anchored on a root pitch.  A [`KeySignature`] turns an
//! `(octave, degree)` pair into a named [`Pitch`] from the shared
//! [`PitchRegistry`], and stacks thirds into triads.
//!
//! ```rust
//! use key_signature::KeySignature;
//! use pitch_names::MIDDLE_C_OCTAVE;
//!
//! let c_major = KeySignature::get("C_maj").unwrap();
//! let octave  = MIDDLE_C_OCTAVE as i64;
//! assert_eq!(c_major.resolve_degree(octave, 1).unwrap().note_number(), 60);
//! assert_eq!(c_major.resolve_degree(octave, 3).unwrap().note_number(), 64);
//! assert_eq!(c_major.resolve_degree(octave + 1, 1).unwrap().note_number(), 72);
//! ```

use std::fmt;

use pitch_names::{Chord, LookupError, Pitch, PitchRegistry, MIDDLE_C_OCTAVE};
use thiserror::Error;

/// Degrees per diatonic octave.
pub const DEGREES: u8 = 7;

// ════════════════════════════════════════════════════════════════════════════
// Errors
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    /// Degrees are numbered 1–7.
    #[error("scale degree {0} is outside 1–7")]
    InvalidDegree(u8),
    /// Not in the key catalog.
    #[error("no key signature with identifier {0:?}")]
    UnknownKey(String),
    /// The resolved pitch fell outside the MIDI range.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

// ════════════════════════════════════════════════════════════════════════════
// ScaleType
// ════════════════════════════════════════════════════════════════════════════

/// The interval pattern of a seven-note scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScaleType {
    /// W W H W W W H
    Major,
    /// Natural minor: W H W W H W W
    Minor,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
}

impl ScaleType {
    /// Semitone offsets of degrees 1–7 from the root.
    pub fn intervals(self) -> [u8; 7] {
        match self {
            ScaleType::Major      => [0, 2, 4, 5, 7, 9, 11],
            ScaleType::Minor      => [0, 2, 3, 5, 7, 8, 10],
            ScaleType::Dorian     => [0, 2, 3, 5, 7, 9, 10],
            ScaleType::Phrygian   => [0, 1, 3, 5, 7, 8, 10],
            ScaleType::Lydian     => [0, 2, 4, 6, 7, 9, 11],
            ScaleType::Mixolydian => [0, 2, 4, 5, 7, 9, 10],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Major      => "major",
            ScaleType::Minor      => "minor",
            ScaleType::Dorian     => "dorian",
            ScaleType::Phrygian   => "phrygian",
            ScaleType::Lydian     => "lydian",
            ScaleType::Mixolydian => "mixolydian",
        }
    }

    pub fn all() -> &'static [ScaleType] {
        &[
            ScaleType::Major, ScaleType::Minor, ScaleType::Dorian,
            ScaleType::Phrygian, ScaleType::Lydian, ScaleType::Mixolydian,
        ]
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Key catalog
// ════════════════════════════════════════════════════════════════════════════

struct CatalogEntry {
    id:         &'static str,
    name:       &'static str,
    /// Root identifier without its octave; the middle-C octave is appended.
    root:       &'static str,
    scale_type: ScaleType,
}

const fn entry(id: &'static str, name: &'static str, root: &'static str, scale_type: ScaleType)
    -> CatalogEntry
{
    CatalogEntry { id, name, root, scale_type }
}

// Major keys grouped with their relative minors.
const CATALOG: [CatalogEntry; 14] = [
    entry("C_maj",  "C major",  "C",  ScaleType::Major),
    entry("A_min",  "A minor",  "A",  ScaleType::Minor),

    entry("G_maj",  "G major",  "G",  ScaleType::Major),
    entry("D_min",  "D minor",  "D",  ScaleType::Minor),

    entry("D_maj",  "D major",  "D",  ScaleType::Major),
    entry("G_min",  "G minor",  "G",  ScaleType::Minor),

    entry("A_maj",  "A major",  "A",  ScaleType::Major),
    entry("C_min",  "C minor",  "C",  ScaleType::Minor),

    entry("E_maj",  "E major",  "E",  ScaleType::Major),
    entry("F_min",  "F minor",  "F",  ScaleType::Minor),

    entry("B_maj",  "B major",  "B",  ScaleType::Major),
    entry("Bb_min", "B♭ minor", "Bb", ScaleType::Minor),

    entry("Fs_maj", "F♯ major", "Fs", ScaleType::Major),
    entry("Eb_min", "E♭ minor", "Eb", ScaleType::Minor),
];

/// Identifiers of the catalog keys, in catalog order.
pub fn iter_keys() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|e| e.id)
}

// ════════════════════════════════════════════════════════════════════════════
// KeySignature
// ════════════════════════════════════════════════════════════════════════════

/// A named scale: root pitch plus interval pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeySignature {
    identifier:   String,
    display_name: String,
    root:         Pitch,
    scale_type:   ScaleType,
    intervals:    [u8; 7],
}

impl KeySignature {
    /// `root` is normally given in the middle-C octave; other octaves shift
    /// every resolved degree by the same amount.
    pub fn new(
        identifier:   impl Into<String>,
        display_name: impl Into<String>,
        root:         Pitch,
        scale_type:   ScaleType,
    ) -> Self {
        KeySignature {
            identifier:   identifier.into(),
            display_name: display_name.into(),
            root,
            scale_type,
            intervals:    scale_type.intervals(),
        }
    }

    /// Look up a catalog key, e.g. `"C_maj"` or `"Bb_min"`.
    pub fn get(identifier: &str) -> Result<Self, ScaleError> {
        let e = CATALOG.iter()
            .find(|e| e.id == identifier)
            .ok_or_else(|| ScaleError::UnknownKey(identifier.to_string()))?;
        let root = PitchRegistry::global()
            .by_identifier(&format!("{}{}", e.root, MIDDLE_C_OCTAVE))?;
        Ok(KeySignature::new(e.id, e.name, root, e.scale_type))
    }

    /// Every catalog key, in catalog order.
    pub fn catalog() -> Result<Vec<Self>, ScaleError> {
        iter_keys().map(KeySignature::get).collect()
    }

    pub fn identifier(&self) -> &str { &self.identifier }
    pub fn display_name(&self) -> &str { &self.display_name }
    pub fn root(&self) -> Pitch { self.root }
    pub fn scale_type(&self) -> ScaleType { self.scale_type }
    pub fn intervals(&self) -> &[u8; 7] { &self.intervals }

    /// The pitch at scale `degree` (1–7) of the scale starting in `octave`.
    ///
    /// Degrees that pass B roll over into the next octave label, so degree 1
    /// of `octave + 1` always lies above degree 7 of `octave`.  The plain
    /// spelling of the resulting note number is returned.
    pub fn resolve_degree(&self, octave: i64, degree: u8) -> Result<Pitch, ScaleError> {
        if !(1..=DEGREES).contains(&degree) {
            return Err(ScaleError::InvalidDegree(degree));
        }
        let mut note_octave = (self.root.octave() as i64 - MIDDLE_C_OCTAVE as i64)
            .saturating_add(octave);
        let mut offset = self.root.chromatic_offset() + self.intervals[(degree - 1) as usize];
        if offset >= 12 {
            note_octave = note_octave.saturating_add(1);
            offset -= 12;
        }
        let aliases = PitchRegistry::global().by_octave_offset(note_octave, offset as i64)?;
        Ok(aliases[0])
    }

    /// Degrees 1–7 of `octave`, ascending, resolved lazily.
    pub fn iter_octave(&self, octave: i64) -> impl Iterator<Item = Result<Pitch, ScaleError>> + '_ {
        (1..=DEGREES).map(move |d| self.resolve_degree(octave, d))
    }

    /// The triad on `degree`: that degree plus the third and fifth above it
    /// in this scale, climbing into the next octave where needed.
    pub fn triad(&self, octave: i64, degree: u8) -> Result<Chord, ScaleError> {
        if !(1..=DEGREES).contains(&degree) {
            return Err(ScaleError::InvalidDegree(degree));
        }
        [0u8, 2, 4].iter()
            .map(|step| {
                let d = degree - 1 + step;
                self.resolve_degree(octave + (d / DEGREES) as i64, d % DEGREES + 1)
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Chord::new)
    }
}

impl fmt::Display for KeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
