//! An ordered group of pitches sounded together.

use std::fmt;

use crate::Pitch;

/// Pitches in the order supplied.  Duplicates and unrelated pitches are
/// allowed; nothing about the musical content is checked.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Chord {
    pitches: Vec<Pitch>,
}

impl Chord {
    pub fn new<I: IntoIterator<Item = Pitch>>(pitches: I) -> Self {
        Chord { pitches: pitches.into_iter().collect() }
    }

    /// Pitches in stored order.  Each call starts again from the first.
    pub fn iter(&self) -> std::slice::Iter<'_, Pitch> {
        self.pitches.iter()
    }

    /// A new chord with the order reversed; `self` is left unchanged.
    pub fn reversed(&self) -> Chord {
        Chord { pitches: self.pitches.iter().rev().copied().collect() }
    }

    pub fn note_numbers(&self) -> Vec<u8> {
        self.pitches.iter().map(Pitch::note_number).collect()
    }

    pub fn len(&self) -> usize { self.pitches.len() }
    pub fn is_empty(&self) -> bool { self.pitches.is_empty() }
}

impl FromIterator<Pitch> for Chord {
    fn from_iter<I: IntoIterator<Item = Pitch>>(iter: I) -> Self {
        Chord::new(iter)
    }
}

impl<'a> IntoIterator for &'a Chord {
    type Item = &'a Pitch;
    type IntoIter = std::slice::Iter<'a, Pitch>;

    fn into_iter(self) -> Self::IntoIter {
        self.pitches.iter()
    }
}

/// `C4+E4+G4`
impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.pitches.iter().enumerate() {
            if i > 0 { f.write_str("+")?; }
            write!(f, "{}", p)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{from_note_number, MIDDLE_C_OCTAVE};
    use proptest::prelude::*;

    fn plain(n: i64) -> Pitch {
        from_note_number(n).unwrap()[0]
    }

    fn c_major() -> Chord {
        Chord::new([plain(60), plain(64), plain(67)])
    }

    #[test]
    fn iterates_in_supplied_order() {
        let numbers: Vec<u8> = c_major().iter().map(|p| p.note_number()).collect();
        assert_eq!(numbers, [60, 64, 67]);
    }

    #[test]
    fn iteration_restarts() {
        let chord = c_major();
        assert_eq!(chord.iter().count(), 3);
        assert_eq!((&chord).into_iter().count(), 3);
    }

    #[test]
    fn reversed_leaves_original_alone() {
        let chord = c_major();
        let rev = chord.reversed();
        assert_eq!(rev.note_numbers(), [67, 64, 60]);
        assert_eq!(chord.note_numbers(), [60, 64, 67]);
    }

    #[test]
    fn duplicates_kept() {
        let chord: Chord = [plain(60), plain(60)].into_iter().collect();
        assert_eq!(chord.len(), 2);
    }

    #[test]
    fn empty_chord() {
        let chord = Chord::default();
        assert!(chord.is_empty());
        assert_eq!(chord.reversed(), chord);
        assert_eq!(chord.to_string(), "");
    }

    #[test]
    fn display_joins_with_plus() {
        let o = MIDDLE_C_OCTAVE;
        assert_eq!(c_major().to_string(), format!("C{o}+E{o}+G{o}"));
    }

    proptest! {
        #[test]
        fn double_reversal_is_identity(notes in prop::collection::vec(0i64..128, 0..12)) {
            let chord: Chord = notes.into_iter().map(plain).collect();
            prop_assert_eq!(chord.reversed().reversed(), chord);
        }
    }
}
