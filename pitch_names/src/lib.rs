//! # pitch_names
//!
//! Conventional pitch names for the 128 MIDI note numbers.
//!
//! Every note number carries a small ordered set of spellings: white keys are
//! named plainly and with a natural sign (`C4`, `C♮4`), black keys with both a
//! sharp and a flat (`C♯4`, `D♭4`).  The plain (or sharp) spelling is always
//! first.
//!
//! The table is built once, on first use, and is read-only afterwards, so
//! lookups may be made from any thread without locking.
//!
//! ## Quick start
//!
//! ```rust
//! use pitch_names::{PitchRegistry, MIDDLE_C};
//!
//! let registry = PitchRegistry::global();
//! let names: Vec<String> = registry
//!     .by_number(61).unwrap()
//!     .iter().map(|p| p.display_name()).collect();
//! assert_eq!(names.len(), 2);
//! assert_eq!(registry.middle_c().note_number(), MIDDLE_C);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use thiserror::Error;

pub mod chord;

pub use chord::Chord;

// ════════════════════════════════════════════════════════════════════════════
// Octave anchor
// ════════════════════════════════════════════════════════════════════════════

/// Number of MIDI note numbers (0–127).
pub const NOTE_COUNT: usize = 128;

/// Note number of middle C.
pub const MIDDLE_C: u8 = 60;

/// Octave label carried by middle C.
#[cfg(not(feature = "middle-c-c3"))]
pub const MIDDLE_C_OCTAVE: i8 = 4;
/// Octave label carried by middle C.
#[cfg(feature = "middle-c-c3")]
pub const MIDDLE_C_OCTAVE: i8 = 3;

/// Octave containing note number 0.
pub const LOWEST_OCTAVE: i8 = MIDDLE_C_OCTAVE - 5;
/// Octave containing note number 127.
pub const HIGHEST_OCTAVE: i8 = MIDDLE_C_OCTAVE + 5;

/// Note number of the C that starts `octave`.
///
/// Not range-checked: octaves outside the MIDI range give note numbers
/// outside 0–127.
pub fn octave_base(octave: i64) -> i64 {
    let octaves_from_middle = octave.saturating_sub(MIDDLE_C_OCTAVE as i64);
    (MIDDLE_C as i64).saturating_add(octaves_from_middle.saturating_mul(12))
}

pub const ACCIDENTAL_FLAT:    char = '♭'; // U+266D
pub const ACCIDENTAL_NATURAL: char = '♮'; // U+266E
pub const ACCIDENTAL_SHARP:   char = '♯'; // U+266F

// ════════════════════════════════════════════════════════════════════════════
// Errors
// ════════════════════════════════════════════════════════════════════════════

/// A pitch lookup failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The note number (or octave/offset pair) falls outside 0–127.
    #[error("note number {note_number} is outside the MIDI range 0–127")]
    OutOfRange { note_number: i64 },
    /// No pitch carries this identifier.
    #[error("no pitch with identifier {0:?}")]
    UnknownIdentifier(String),
}

// ════════════════════════════════════════════════════════════════════════════
// Pitch
// ════════════════════════════════════════════════════════════════════════════

/// One named spelling of a MIDI note number.
///
/// Values are only created by [`PitchRegistry`]; several may share a note
/// number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pitch {
    note_number:      u8,
    octave:           i8,
    chromatic_offset: u8,
    name:             &'static str,
    code:             &'static str,
}

impl Pitch {
    /// MIDI note number (0–127).
    pub fn note_number(&self) -> u8 { self.note_number }

    /// Octave label under the crate's octave anchor.
    pub fn octave(&self) -> i8 { self.octave }

    /// Semitone position within the octave (C = 0 … B = 11).
    pub fn chromatic_offset(&self) -> u8 { self.chromatic_offset }

    /// Name within the octave, e.g. `"C♯"`.
    pub fn name(&self) -> &'static str { self.name }

    /// Name with octave, e.g. `"C♯4"`.
    pub fn display_name(&self) -> String {
        format!("{}{}", self.name, self.octave)
    }

    /// Stable code form, e.g. `"Cs4"`, `"Db4"`, `"Cnat4"`, `"C-1"`.
    pub fn identifier(&self) -> String {
        format!("{}{}", self.code, self.octave)
    }

    /// True for the natural-marked alias of a white key.
    pub fn is_natural_marked(&self) -> bool {
        self.name.contains(ACCIDENTAL_NATURAL)
    }

    /// Verbose one-line description, for listings.
    pub fn long_form(&self) -> String {
        format!(
            "{:6} ({:3}): {},{},{}  {}",
            self.identifier(), self.note_number,
            self.name, self.octave, self.chromatic_offset,
            self.display_name(),
        )
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.octave)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Octave template
// ════════════════════════════════════════════════════════════════════════════

struct Spelling {
    name:   &'static str,
    code:   &'static str,
    offset: u8,
}

const fn spelling(name: &'static str, code: &'static str, offset: u8) -> Spelling {
    Spelling { name, code, offset }
}

/// The 24 spellings applied to every octave, in alias order.
const OCTAVE_TEMPLATE: [Spelling; 24] = [
    spelling("C",  "C",    0),
    spelling("C♮", "Cnat", 0),
    spelling("C♯", "Cs",   1),
    spelling("D♭", "Db",   1),
    spelling("D",  "D",    2),
    spelling("D♮", "Dnat", 2),
    spelling("D♯", "Ds",   3),
    spelling("E♭", "Eb",   3),
    spelling("E",  "E",    4),
    spelling("E♮", "Enat", 4),
    spelling("F",  "F",    5),
    spelling("F♮", "Fnat", 5),
    spelling("F♯", "Fs",   6),
    spelling("G♭", "Gb",   6),
    spelling("G",  "G",    7),
    spelling("G♮", "Gnat", 7),
    spelling("G♯", "Gs",   8),
    spelling("A♭", "Ab",   8),
    spelling("A",  "A",    9),
    spelling("A♮", "Anat", 9),
    spelling("A♯", "As",  10),
    spelling("B♭", "Bb",  10),
    spelling("B",  "B",   11),
    spelling("B♮", "Bnat",11),
];

// ════════════════════════════════════════════════════════════════════════════
// PitchRegistry
// ════════════════════════════════════════════════════════════════════════════

/// Immutable table of every pitch spelling, indexed by note number and by
/// identifier.
///
/// Use [`PitchRegistry::global`] for the shared process-wide instance, or
/// [`PitchRegistry::build`] for a private one.
#[derive(Debug)]
pub struct PitchRegistry {
    by_number:     Vec<Vec<Pitch>>,
    by_identifier: HashMap<String, Pitch>,
}

static REGISTRY: OnceLock<PitchRegistry> = OnceLock::new();

impl PitchRegistry {
    /// Build the full table.  Spellings whose note number would exceed 127
    /// (the top of the highest octave) are dropped.
    pub fn build() -> Self {
        let mut by_number     = vec![Vec::new(); NOTE_COUNT];
        let mut by_identifier = HashMap::new();

        for octave in LOWEST_OCTAVE..=HIGHEST_OCTAVE {
            let base = octave_base(octave as i64);
            for s in &OCTAVE_TEMPLATE {
                let n = base + s.offset as i64;
                if !(0..NOTE_COUNT as i64).contains(&n) { continue; }
                let pitch = Pitch {
                    note_number:      n as u8,
                    octave,
                    chromatic_offset: s.offset,
                    name:             s.name,
                    code:             s.code,
                };
                by_identifier.insert(pitch.identifier(), pitch);
                by_number[n as usize].push(pitch);
            }
        }

        tracing::debug!(
            pitches = by_identifier.len(),
            middle_c_octave = MIDDLE_C_OCTAVE,
            "pitch registry built"
        );
        PitchRegistry { by_number, by_identifier }
    }

    /// The shared registry, built on first call.
    pub fn global() -> &'static PitchRegistry {
        REGISTRY.get_or_init(PitchRegistry::build)
    }

    /// All spellings of `note_number`, plain spelling first.
    pub fn by_number(&self, note_number: i64) -> Result<&[Pitch], LookupError> {
        if !(0..NOTE_COUNT as i64).contains(&note_number) {
            return Err(LookupError::OutOfRange { note_number });
        }
        Ok(&self.by_number[note_number as usize])
    }

    /// All spellings of the note `chromatic_offset` semitones above the C
    /// starting `octave`.
    pub fn by_octave_offset(&self, octave: i64, chromatic_offset: i64)
        -> Result<&[Pitch], LookupError>
    {
        let note_number = octave_base(octave).saturating_add(chromatic_offset);
        self.by_number(note_number)
    }

    /// The pitch named by `identifier` (e.g. `"Cs4"`).
    pub fn by_identifier(&self, identifier: &str) -> Result<Pitch, LookupError> {
        self.by_identifier
            .get(identifier)
            .copied()
            .ok_or_else(|| LookupError::UnknownIdentifier(identifier.to_string()))
    }

    /// Plain spelling of note number 60.
    pub fn middle_c(&self) -> Pitch {
        self.by_number[MIDDLE_C as usize][0]
    }

    /// Number of distinct spellings in the table.
    pub fn len(&self) -> usize { self.by_identifier.len() }
    pub fn is_empty(&self) -> bool { self.by_identifier.is_empty() }

    /// `(note_number, spellings)` for every note number, ascending.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[Pitch])> + '_ {
        self.by_number
            .iter()
            .enumerate()
            .map(|(n, aliases)| (n as u8, aliases.as_slice()))
    }
}

// ── shortcuts onto the shared registry ─────────────────────────────────────

/// [`PitchRegistry::by_number`] on the shared registry.
pub fn from_note_number(note_number: i64) -> Result<&'static [Pitch], LookupError> {
    PitchRegistry::global().by_number(note_number)
}

/// [`PitchRegistry::by_octave_offset`] on the shared registry.
pub fn from_octave_offset(octave: i64, chromatic_offset: i64)
    -> Result<&'static [Pitch], LookupError>
{
    PitchRegistry::global().by_octave_offset(octave, chromatic_offset)
}

/// [`PitchRegistry::by_identifier`] on the shared registry.
pub fn pitch(identifier: &str) -> Result<Pitch, LookupError> {
    PitchRegistry::global().by_identifier(identifier)
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn id(octave: i8, code: &str) -> String {
        format!("{}{}", code, octave)
    }

    // ── table shape ──────────────────────────────────────────────────────
    #[test]
    fn every_note_number_has_aliases() {
        let reg = PitchRegistry::global();
        for n in 0..128i64 {
            let aliases = reg.by_number(n).unwrap();
            assert!(!aliases.is_empty(), "note {} has no spelling", n);
            for p in aliases {
                assert_eq!(p.note_number() as i64, n);
            }
        }
    }

    #[test]
    fn aliases_per_note_are_pairs() {
        for (_, aliases) in PitchRegistry::global().iter() {
            assert_eq!(aliases.len(), 2);
        }
    }

    #[test]
    fn top_octave_is_truncated() {
        // 10 full octaves plus C..G of the highest one
        assert_eq!(PitchRegistry::global().len(), 10 * 24 + 16);
        assert!(pitch(&id(HIGHEST_OCTAVE, "G")).is_ok());
        assert!(matches!(
            pitch(&id(HIGHEST_OCTAVE, "Gs")),
            Err(LookupError::UnknownIdentifier(_))
        ));
    }

    #[test]
    fn lowest_note_is_c_of_lowest_octave() {
        let p = from_note_number(0).unwrap()[0];
        assert_eq!(p.octave(), LOWEST_OCTAVE);
        assert_eq!(p.chromatic_offset(), 0);
        assert_eq!(p.name(), "C");
    }

    // ── alias order ──────────────────────────────────────────────────────
    #[test]
    fn white_key_plain_then_natural() {
        let names: Vec<&str> = from_note_number(60).unwrap()
            .iter().map(|p| p.name()).collect();
        assert_eq!(names, ["C", "C♮"]);
        assert!(!from_note_number(60).unwrap()[0].is_natural_marked());
        assert!(from_note_number(60).unwrap()[1].is_natural_marked());
    }

    #[test]
    fn black_key_sharp_then_flat() {
        let names: Vec<&str> = from_note_number(61).unwrap()
            .iter().map(|p| p.name()).collect();
        assert_eq!(names, ["C♯", "D♭"]);
    }

    // ── naming ───────────────────────────────────────────────────────────
    #[test]
    fn middle_c_names() {
        let c = PitchRegistry::global().middle_c();
        assert_eq!(c.note_number(), 60);
        assert_eq!(c.octave(), MIDDLE_C_OCTAVE);
        assert_eq!(c.display_name(), format!("C{}", MIDDLE_C_OCTAVE));
        assert_eq!(c.to_string(), c.display_name());
        assert_eq!(c.identifier(), id(MIDDLE_C_OCTAVE, "C"));
    }

    #[test]
    fn sharp_identifier_and_display() {
        let cs = from_note_number(61).unwrap()[0];
        assert_eq!(cs.identifier(), id(MIDDLE_C_OCTAVE, "Cs"));
        assert_eq!(cs.display_name(), format!("C♯{}", MIDDLE_C_OCTAVE));
    }

    #[test]
    fn negative_octave_identifier() {
        let p = from_note_number(1).unwrap()[1];
        assert_eq!(p.identifier(), format!("Db{}", LOWEST_OCTAVE));
        assert_eq!(pitch(&p.identifier()).unwrap(), p);
    }

    #[test]
    fn long_form_mentions_number() {
        let s = PitchRegistry::global().middle_c().long_form();
        assert!(s.contains("60"));
    }

    // ── identifier lookup ────────────────────────────────────────────────
    #[test]
    fn identifier_round_trips_to_same_pitch() {
        let reg = PitchRegistry::global();
        for (_, aliases) in reg.iter() {
            for p in aliases {
                assert_eq!(reg.by_identifier(&p.identifier()).unwrap(), *p);
            }
        }
    }

    #[test]
    fn enharmonics_share_a_number() {
        let cs = pitch(&id(MIDDLE_C_OCTAVE, "Cs")).unwrap();
        let db = pitch(&id(MIDDLE_C_OCTAVE, "Db")).unwrap();
        assert_ne!(cs, db);
        assert_eq!(cs.note_number(), db.note_number());
    }

    #[test]
    fn unknown_identifier() {
        assert_eq!(
            pitch("H4"),
            Err(LookupError::UnknownIdentifier("H4".to_string()))
        );
    }

    // ── range errors ─────────────────────────────────────────────────────
    #[test]
    fn out_of_range_numbers() {
        assert_eq!(from_note_number(-1), Err(LookupError::OutOfRange { note_number: -1 }));
        assert_eq!(from_note_number(128), Err(LookupError::OutOfRange { note_number: 128 }));
    }

    #[test]
    fn octave_offset_out_of_range() {
        assert!(from_octave_offset(HIGHEST_OCTAVE as i64, 8).is_err());
        assert!(from_octave_offset(LOWEST_OCTAVE as i64, -1).is_err());
        assert!(from_octave_offset(i64::MAX / 2, 0).is_err());
    }

    #[test]
    fn octave_offset_matches_anchor() {
        let p = from_octave_offset(MIDDLE_C_OCTAVE as i64, 4).unwrap()[0];
        assert_eq!(p.note_number(), 64);
        assert_eq!(p.name(), "E");
    }

    #[test]
    fn private_registry_matches_global() {
        let local = PitchRegistry::build();
        assert_eq!(local.len(), PitchRegistry::global().len());
        assert_eq!(local.by_number(69).unwrap(), PitchRegistry::global().by_number(69).unwrap());
    }

    proptest! {
        #[test]
        fn octave_offset_agrees_with_number(
            octave in LOWEST_OCTAVE as i64..=HIGHEST_OCTAVE as i64,
            offset in 0i64..12,
        ) {
            let n = octave_base(octave) + offset;
            prop_assume!(n < 128);
            prop_assert_eq!(
                from_octave_offset(octave, offset).unwrap(),
                from_note_number(n).unwrap()
            );
        }

        #[test]
        fn offset_and_octave_reconstruct_number(n in 0i64..128) {
            for p in from_note_number(n).unwrap() {
                prop_assert_eq!(
                    octave_base(p.octave() as i64) + p.chromatic_offset() as i64,
                    n
                );
            }
        }
    }
}
