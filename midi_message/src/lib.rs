//! # midi_message
//!
//! Pure encoders from pitches, chords and patch selections to the literal
//! bytes of MIDI channel-voice and controller messages.
//!
//! Callers number channels 1–16 and programs/banks 1–128; the wire format
//! numbers them from zero.  The `- 1` happens here and nowhere else.
//!
//! | Message | Bytes |
//! |---|---|
//! | Note On | `0x90 + (ch-1), note, velocity` |
//! | Note Off | `0x80 + (ch-1), note, velocity` |
//! | Control Change (bank select) | `0xB0 + (ch-1), 32, bank-1` |
//! | Program Change | `0xC0 + (ch-1), program-1` |
//!
//! Parameters are checked before any byte is produced; a failed call returns
//! nothing partial.
//!
//! ```rust
//! use midi_message::{note_on, program_change, DEFAULT_VELOCITY};
//! use pitch_names::PitchRegistry;
//!
//! let c = PitchRegistry::global().middle_c();
//! assert_eq!(note_on(1, &c, DEFAULT_VELOCITY).unwrap(), [0x90, 60, 64]);
//! assert_eq!(program_change(1, 1).unwrap(), [0xC0, 0]);
//! ```

use std::convert::Infallible;

use thiserror::Error;

pub mod patch;

pub use patch::{GeneralMidi, GeneralMidiCatalog, PatchCatalog, UnknownPatch};
pub use pitch_names::{Chord, Pitch};

/// One encoded message: a status byte followed by one or two data bytes.
pub type Message = Vec<u8>;

/// Velocity used when the caller has no preference.
pub const DEFAULT_VELOCITY: u8 = 64;

/// Status-byte high nibbles.
pub const NOTE_OFF:       u8 = 0x80;
pub const NOTE_ON:        u8 = 0x90;
pub const CONTROL_CHANGE: u8 = 0xB0;
pub const PROGRAM_CHANGE: u8 = 0xC0;

/// Coarse bank-select controller number.
pub const BANK_SELECT_CONTROLLER: u8 = 32;

// ════════════════════════════════════════════════════════════════════════════
// Errors
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A channel, velocity, program or bank value is out of bounds.
    #[error("invalid {name} {value}: expected {min}–{max}")]
    InvalidParameter {
        name:  &'static str,
        value: u8,
        min:   u8,
        max:   u8,
    },
}

fn check(name: &'static str, value: u8, min: u8, max: u8) -> Result<u8, EncodeError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(EncodeError::InvalidParameter { name, value, min, max })
    }
}

/// Status byte for message `kind` on one-based `channel`.
fn status(kind: u8, channel: u8) -> Result<u8, EncodeError> {
    Ok(kind + (check("channel", channel, 1, 16)? - 1))
}

fn velocity(v: u8) -> Result<u8, EncodeError> {
    check("velocity", v, 0, 127)
}

// ════════════════════════════════════════════════════════════════════════════
// Encoders
// ════════════════════════════════════════════════════════════════════════════

/// Start sounding `pitch`.  Velocity 0 is accepted; receivers treat it as a
/// note off.
pub fn note_on(channel: u8, pitch: &Pitch, vel: u8) -> Result<Message, EncodeError> {
    Ok(vec![status(NOTE_ON, channel)?, pitch.note_number(), velocity(vel)?])
}

/// Stop sounding `pitch`; `vel` is the release velocity.
pub fn note_off(channel: u8, pitch: &Pitch, vel: u8) -> Result<Message, EncodeError> {
    Ok(vec![status(NOTE_OFF, channel)?, pitch.note_number(), velocity(vel)?])
}

/// One Note On per pitch, in chord order.
pub fn chord_on(channel: u8, chord: &Chord, vel: u8) -> Result<Vec<Message>, EncodeError> {
    let (status, vel) = (status(NOTE_ON, channel)?, velocity(vel)?);
    Ok(chord.iter().map(|p| vec![status, p.note_number(), vel]).collect())
}

/// One Note Off per pitch, in chord order.
pub fn chord_off(channel: u8, chord: &Chord, vel: u8) -> Result<Vec<Message>, EncodeError> {
    let (status, vel) = (status(NOTE_OFF, channel)?, velocity(vel)?);
    Ok(chord.iter().map(|p| vec![status, p.note_number(), vel]).collect())
}

/// Select instrument `program` (1–128) on `channel`.
pub fn program_change(channel: u8, program: u8) -> Result<Message, EncodeError> {
    let status = status(PROGRAM_CHANGE, channel)?;
    Ok(vec![status, check("program", program, 1, 128)? - 1])
}

/// [`program_change`] for a General MIDI patch.
pub fn program_change_for(channel: u8, patch: GeneralMidi) -> Result<Message, EncodeError> {
    program_change(channel, patch.number())
}

/// Select bank `bank` (1–128) via the coarse bank-select controller.
pub fn bank_switch(channel: u8, bank: u8) -> Result<Message, EncodeError> {
    let status = status(CONTROL_CHANGE, channel)?;
    Ok(vec![status, BANK_SELECT_CONTROLLER, check("bank", bank, 1, 128)? - 1])
}

// ════════════════════════════════════════════════════════════════════════════
// Transport
// ════════════════════════════════════════════════════════════════════════════

/// Somewhere encoded messages can be sent.
pub trait Transport {
    type Error;

    fn send(&mut self, message: &[u8]) -> Result<(), Self::Error>;

    /// Send each message in order, stopping at the first failure.
    fn send_all<I>(&mut self, messages: I) -> Result<(), Self::Error>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        for (i, m) in messages.into_iter().enumerate() {
            let bytes = m.as_ref();
            tracing::trace!(index = i, message = ?bytes, "send_all");
            self.send(bytes)?;
        }
        Ok(())
    }
}

/// Captures every message, in order.
impl Transport for Vec<Message> {
    type Error = Infallible;

    fn send(&mut self, message: &[u8]) -> Result<(), Infallible> {
        self.push(message.to_vec());
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    fn send(&mut self, message: &[u8]) -> Result<(), Self::Error> {
        (**self).send(message)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use key_signature::KeySignature;
    use pitch_names::{from_note_number, MIDDLE_C_OCTAVE};

    fn note(n: i64) -> Pitch {
        from_note_number(n).unwrap()[0]
    }

    fn invalid(name: &'static str, value: u8, min: u8, max: u8) -> EncodeError {
        EncodeError::InvalidParameter { name, value, min, max }
    }

    // ── note messages ────────────────────────────────────────────────────
    #[test]
    fn note_on_channel_offsets() {
        assert_eq!(note_on(1, &note(60), 64).unwrap(), [0x90, 60, 64]);
        assert_eq!(note_on(16, &note(60), 64).unwrap(), [0x9F, 60, 64]);
    }

    #[test]
    fn note_off_bytes() {
        assert_eq!(note_off(1, &note(60), DEFAULT_VELOCITY).unwrap(), [0x80, 60, 64]);
        assert_eq!(note_off(10, &note(36), 0).unwrap(), [0x89, 36, 0]);
    }

    #[test]
    fn zero_velocity_note_on_is_allowed() {
        assert_eq!(note_on(1, &note(60), 0).unwrap(), [0x90, 60, 0]);
    }

    #[test]
    fn aliases_encode_identically() {
        let aliases = from_note_number(61).unwrap();
        assert_eq!(note_on(1, &aliases[0], 64), note_on(1, &aliases[1], 64));
    }

    // ── chords ───────────────────────────────────────────────────────────
    #[test]
    fn chord_on_in_chord_order() {
        let c_major = Chord::new([note(60), note(64), note(67)]);
        assert_eq!(
            chord_on(1, &c_major, 64).unwrap(),
            [[0x90, 60, 64], [0x90, 64, 64], [0x90, 67, 64]]
        );
    }

    #[test]
    fn chord_off_reversed() {
        let chord = Chord::new([note(60), note(64), note(67)]).reversed();
        assert_eq!(
            chord_off(2, &chord, 64).unwrap(),
            [[0x81, 67, 64], [0x81, 64, 64], [0x81, 60, 64]]
        );
    }

    #[test]
    fn chord_from_key_triad() {
        let key = KeySignature::get("C_maj").unwrap();
        let tonic = key.triad(MIDDLE_C_OCTAVE as i64, 1).unwrap();
        let bytes = chord_on(1, &tonic, 100).unwrap();
        let notes: Vec<u8> = bytes.iter().map(|m| m[1]).collect();
        assert_eq!(notes, [60, 64, 67]);
    }

    #[test]
    fn empty_chord_encodes_nothing_but_still_validates() {
        assert_eq!(chord_on(1, &Chord::default(), 64).unwrap(), Vec::<Message>::new());
        assert!(chord_on(0, &Chord::default(), 64).is_err());
    }

    // ── program / bank ───────────────────────────────────────────────────
    #[test]
    fn program_change_is_zero_based_on_wire() {
        assert_eq!(program_change(1, 1).unwrap(), [0xC0, 0]);
        assert_eq!(program_change(3, 128).unwrap(), [0xC2, 127]);
        assert_eq!(
            program_change_for(1, GeneralMidi::ChurchOrgan).unwrap(),
            [0xC0, 19]
        );
    }

    #[test]
    fn bank_switch_bytes() {
        assert_eq!(bank_switch(1, 1).unwrap(), [0xB0, 32, 0]);
        assert_eq!(bank_switch(16, 128).unwrap(), [0xBF, 32, 127]);
    }

    // ── parameter bounds ─────────────────────────────────────────────────
    #[test]
    fn channel_bounds() {
        assert_eq!(note_on(0, &note(60), 64), Err(invalid("channel", 0, 1, 16)));
        assert_eq!(note_on(17, &note(60), 64), Err(invalid("channel", 17, 1, 16)));
        assert!(program_change(0, 1).is_err());
        assert!(bank_switch(17, 1).is_err());
    }

    #[test]
    fn velocity_bounds() {
        assert_eq!(note_on(1, &note(60), 128), Err(invalid("velocity", 128, 0, 127)));
        assert!(note_off(1, &note(60), 255).is_err());
        assert!(chord_off(1, &Chord::new([note(60)]), 128).is_err());
    }

    #[test]
    fn program_and_bank_bounds() {
        assert_eq!(program_change(1, 0), Err(invalid("program", 0, 1, 128)));
        assert_eq!(program_change(1, 129), Err(invalid("program", 129, 1, 128)));
        assert_eq!(bank_switch(1, 0), Err(invalid("bank", 0, 1, 128)));
        assert_eq!(bank_switch(1, 129), Err(invalid("bank", 129, 1, 128)));
    }

    #[test]
    fn error_message_names_parameter() {
        let e = program_change(1, 0).unwrap_err();
        assert_eq!(e.to_string(), "invalid program 0: expected 1–128");
    }

    // ── transport ────────────────────────────────────────────────────────
    #[test]
    fn capture_transport_keeps_order() {
        let mut out: Vec<Message> = Vec::new();
        let chord = Chord::new([note(60), note(64)]);
        out.send(&program_change(1, 1).unwrap()).unwrap();
        out.send_all(chord_on(1, &chord, 64).unwrap()).unwrap();
        assert_eq!(out, [vec![0xC0, 0], vec![0x90, 60, 64], vec![0x90, 64, 64]]);
    }

    #[test]
    fn transport_through_mut_reference() {
        fn play<T: Transport>(mut t: T) -> Result<(), T::Error> {
            t.send(&[0x90, 60, 64])
        }
        let mut out: Vec<Message> = Vec::new();
        play(&mut out).unwrap();
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn send_all_stops_at_first_failure() {
        struct FailsOnThird(Vec<Message>);
        impl Transport for FailsOnThird {
            type Error = usize;
            fn send(&mut self, message: &[u8]) -> Result<(), usize> {
                if self.0.len() == 2 { return Err(self.0.len()); }
                self.0.push(message.to_vec());
                Ok(())
            }
        }
        let chord = Chord::new([note(60), note(64), note(67), note(72)]);
        let mut out = FailsOnThird(Vec::new());
        assert_eq!(out.send_all(chord_on(1, &chord, 64).unwrap()), Err(2));
        assert_eq!(out.0, [vec![0x90, 60, 64], vec![0x90, 64, 64]]);
    }
}
