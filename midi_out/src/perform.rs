//! Paced performances: scales, chord progressions and arpeggios.
//!
//! A [`Performer`] owns a transport and a pause function.  Every wait goes
//! through the pause function, so tests can run a whole performance
//! instantly and inspect the pauses afterwards.

use std::time::Duration;

use key_signature::{KeySignature, ScaleError};
use midi_message::{
    chord_off, chord_on, note_off, note_on, program_change_for,
    Chord, EncodeError, GeneralMidi, Pitch, Transport, DEFAULT_VELOCITY,
};
use thiserror::Error;

// ════════════════════════════════════════════════════════════════════════════
// PlayError
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Error)]
pub enum PlayError<E> {
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Scale(#[from] ScaleError),
    #[error("transport error: {0}")]
    Transport(E),
}

// ════════════════════════════════════════════════════════════════════════════
// Pacing / Voice
// ════════════════════════════════════════════════════════════════════════════

/// How long things sound and how long the silences between them last.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pacing {
    /// Single melody note.
    pub note:     Duration,
    /// Held block chord.
    pub chord:    Duration,
    /// Each melody step of an arpeggio, and the rest after its chord.
    pub arpeggio: Duration,
    /// Silence after a note or chord is released.
    pub gap:      Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing {
            note:     Duration::from_millis(250),
            chord:    Duration::from_millis(500),
            arpeggio: Duration::from_millis(350),
            gap:      Duration::from_millis(50),
        }
    }
}

/// A channel and the instrument playing on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Voice {
    pub channel: u8,
    pub patch:   GeneralMidi,
}

/// Triads on `degrees` of `key`, e.g. `[1, 4, 5, 4, 1]`.
pub fn progression(key: &KeySignature, octave: i64, degrees: &[u8])
    -> Result<Vec<Chord>, ScaleError>
{
    degrees.iter().map(|&d| key.triad(octave, d)).collect()
}

// ════════════════════════════════════════════════════════════════════════════
// Performer
// ════════════════════════════════════════════════════════════════════════════

pub struct Performer<T, P> {
    out:      T,
    pause:    P,
    pacing:   Pacing,
    velocity: u8,
}

impl<T, P> Performer<T, P>
where
    T: Transport,
    P: FnMut(Duration),
{
    /// Defaults: [`Pacing::default`], velocity 64.
    pub fn new(out: T, pause: P) -> Self {
        Performer { out, pause, pacing: Pacing::default(), velocity: DEFAULT_VELOCITY }
    }

    pub fn pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn velocity(mut self, v: u8) -> Self {
        self.velocity = v;
        self
    }

    /// Give back the transport.
    pub fn into_inner(self) -> T { self.out }

    fn send(&mut self, message: &[u8]) -> Result<(), PlayError<T::Error>> {
        self.out.send(message).map_err(PlayError::Transport)
    }

    fn send_all(&mut self, messages: Vec<Vec<u8>>) -> Result<(), PlayError<T::Error>> {
        self.out.send_all(messages).map_err(PlayError::Transport)
    }

    pub fn select(&mut self, voice: Voice) -> Result<(), PlayError<T::Error>> {
        tracing::info!(channel = voice.channel, "program change: {}", voice.patch);
        let msg = program_change_for(voice.channel, voice.patch)?;
        self.send(&msg)
    }

    /// On, hold for `hold`, off.
    fn sound(&mut self, channel: u8, pitch: &Pitch, hold: Duration)
        -> Result<(), PlayError<T::Error>>
    {
        let on  = note_on(channel, pitch, self.velocity)?;
        let off = note_off(channel, pitch, self.velocity)?;
        self.send(&on)?;
        (self.pause)(hold);
        self.send(&off)
    }

    /// One note followed by the gap.
    pub fn play_note(&mut self, channel: u8, pitch: &Pitch) -> Result<(), PlayError<T::Error>> {
        tracing::debug!("play note {}", pitch);
        self.sound(channel, pitch, self.pacing.note)?;
        (self.pause)(self.pacing.gap);
        Ok(())
    }

    /// One block chord followed by the gap.
    pub fn play_chord(&mut self, channel: u8, chord: &Chord) -> Result<(), PlayError<T::Error>> {
        tracing::debug!("play chord {}", chord);
        let on  = chord_on(channel, chord, self.velocity)?;
        let off = chord_off(channel, chord, self.velocity)?;
        self.send_all(on)?;
        (self.pause)(self.pacing.chord);
        self.send_all(off)?;
        (self.pause)(self.pacing.gap);
        Ok(())
    }

    /// For each patch: select it, then play the scale of `key` from degree 1
    /// of `octave` up to degree 1 of the next octave.
    pub fn scale_tour<I>(&mut self, channel: u8, key: &KeySignature, octave: i64, patches: I)
        -> Result<(), PlayError<T::Error>>
    where
        I: IntoIterator<Item = GeneralMidi>,
    {
        let mut notes = key.iter_octave(octave).collect::<Result<Vec<_>, _>>()?;
        notes.push(key.resolve_degree(octave + 1, 1)?);

        for patch in patches {
            self.select(Voice { channel, patch })?;
            for p in &notes {
                self.play_note(channel, p)?;
            }
        }
        Ok(())
    }

    /// Select `voice`, then play `chords` as block chords `repeats` times.
    pub fn chord_progression(&mut self, voice: Voice, chords: &[Chord], repeats: usize)
        -> Result<(), PlayError<T::Error>>
    {
        self.select(voice)?;
        for _ in 0..repeats {
            for c in chords {
                self.play_chord(voice.channel, c)?;
            }
        }
        Ok(())
    }

    /// Hold each chord on `harmony` while `melody` walks up through it and
    /// back down again.
    pub fn arpeggios(&mut self, melody: Voice, harmony: Voice, chords: &[Chord], repeats: usize)
        -> Result<(), PlayError<T::Error>>
    {
        self.select(melody)?;
        self.select(harmony)?;
        for _ in 0..repeats {
            for c in chords {
                tracing::debug!("play arpeggio {}", c);
                let on  = chord_on(harmony.channel, c, self.velocity)?;
                let off = chord_off(harmony.channel, c, self.velocity)?;
                self.send_all(on)?;
                // up, then down without repeating the top note
                for p in c.iter().chain(c.reversed().iter().skip(1)) {
                    self.sound(melody.channel, p, self.pacing.arpeggio)?;
                }
                self.send_all(off)?;
                (self.pause)(self.pacing.arpeggio);
            }
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use midi_message::Message;
    use pitch_names::{HIGHEST_OCTAVE, MIDDLE_C_OCTAVE};

    const MID: i64 = MIDDLE_C_OCTAVE as i64;

    fn c_major() -> KeySignature {
        KeySignature::get("C_maj").unwrap()
    }

    fn piano(channel: u8) -> Voice {
        Voice { channel, patch: GeneralMidi::AcousticGrandPiano }
    }

    /// Notes of every Note On on `channel`, in order.
    fn notes_on(out: &[Message], channel: u8) -> Vec<u8> {
        out.iter()
            .filter(|m| m[0] == 0x90 + channel - 1)
            .map(|m| m[1])
            .collect()
    }

    struct Broken;
    impl Transport for Broken {
        type Error = &'static str;
        fn send(&mut self, _: &[u8]) -> Result<(), &'static str> { Err("unplugged") }
    }

    // ── progression ──────────────────────────────────────────────────────
    #[test]
    fn one_four_five() {
        let chords = progression(&c_major(), MID - 1, &[1, 4, 5, 4, 1]).unwrap();
        assert_eq!(chords.len(), 5);
        assert_eq!(chords[1].note_numbers(), [53, 57, 60]);
        assert!(progression(&c_major(), MID, &[0]).is_err());
    }

    // ── scale tour ───────────────────────────────────────────────────────
    #[test]
    fn scale_tour_plays_eight_notes_per_patch() {
        let mut pauses = Vec::new();
        let mut perf = Performer::new(Vec::<Message>::new(), |d| pauses.push(d));
        perf.scale_tour(1, &c_major(), MID, [GeneralMidi::AcousticGrandPiano]).unwrap();
        let out = perf.into_inner();

        assert_eq!(out[0], [0xC0, 0]);
        assert_eq!(out.len(), 1 + 8 * 2);
        assert_eq!(notes_on(&out, 1), [60, 62, 64, 65, 67, 69, 71, 72]);
        assert_eq!(pauses.len(), 16);
        assert_eq!(pauses[0], Pacing::default().note);
        assert_eq!(pauses[1], Pacing::default().gap);
    }

    #[test]
    fn scale_tour_each_patch_selected() {
        let mut perf = Performer::new(Vec::<Message>::new(), |_| {});
        perf.scale_tour(3, &c_major(), MID, GeneralMidi::all().take(3)).unwrap();
        let out = perf.into_inner();
        let programs: Vec<u8> = out.iter().filter(|m| m[0] == 0xC2).map(|m| m[1]).collect();
        assert_eq!(programs, [0, 1, 2]);
    }

    #[test]
    fn scale_tour_past_the_top_fails_before_sending() {
        let mut perf = Performer::new(Vec::<Message>::new(), |_| {});
        let r = perf.scale_tour(1, &c_major(), HIGHEST_OCTAVE as i64, [GeneralMidi::Celesta]);
        assert!(matches!(r, Err(PlayError::Scale(_))));
        assert!(perf.into_inner().is_empty());
    }

    // ── chords ───────────────────────────────────────────────────────────
    #[test]
    fn chord_progression_message_count() {
        let chords = progression(&c_major(), MID - 1, &[1, 4, 5, 4, 1]).unwrap();
        let mut perf = Performer::new(Vec::<Message>::new(), |_| {});
        perf.chord_progression(piano(1), &chords, 2).unwrap();
        let out = perf.into_inner();
        assert_eq!(out.len(), 1 + 2 * 5 * 6);
        assert_eq!(&out[1..4], [[0x90, 48, 64], [0x90, 52, 64], [0x90, 55, 64]]);
        assert_eq!(&out[4..7], [[0x80, 48, 64], [0x80, 52, 64], [0x80, 55, 64]]);
    }

    #[test]
    fn chord_pauses_use_chord_length() {
        let pacing = Pacing {
            note:     Duration::from_millis(1),
            chord:    Duration::from_millis(7),
            arpeggio: Duration::from_millis(3),
            gap:      Duration::from_millis(2),
        };
        let chord = c_major().triad(MID, 1).unwrap();
        let mut pauses = Vec::new();
        let mut perf = Performer::new(Vec::<Message>::new(), |d| pauses.push(d)).pacing(pacing);
        perf.play_chord(1, &chord).unwrap();
        drop(perf);
        assert_eq!(pauses, [pacing.chord, pacing.gap]);
    }

    // ── arpeggios ────────────────────────────────────────────────────────
    #[test]
    fn arpeggio_walks_up_and_down() {
        let chord = c_major().triad(MID - 1, 1).unwrap();
        let melody  = Voice { channel: 1, patch: GeneralMidi::ReedOrgan };
        let harmony = Voice { channel: 2, patch: GeneralMidi::OrchestralHarp };
        let mut perf = Performer::new(Vec::<Message>::new(), |_| {}).velocity(90);
        perf.arpeggios(melody, harmony, &[chord], 1).unwrap();
        let out = perf.into_inner();

        assert_eq!(out[0], [0xC0, 20]);
        assert_eq!(out[1], [0xC1, 46]);
        assert_eq!(notes_on(&out, 2), [48, 52, 55]);
        assert_eq!(notes_on(&out, 1), [48, 52, 55, 52, 48]);
        assert_eq!(out.len(), 2 + 3 + 5 * 2 + 3);
        assert!(out[2..].iter().all(|m| m[2] == 90));
    }

    #[test]
    fn arpeggio_steps_use_arpeggio_length() {
        let chords = progression(&c_major(), MID - 1, &[1, 4]).unwrap();
        let melody  = Voice { channel: 1, patch: GeneralMidi::ReedOrgan };
        let harmony = Voice { channel: 2, patch: GeneralMidi::OrchestralHarp };
        let mut pauses = Vec::new();
        let mut perf = Performer::new(Vec::<Message>::new(), |d| pauses.push(d));
        perf.arpeggios(melody, harmony, &chords, 1).unwrap();
        drop(perf);

        // five melody steps plus the rest after release, per chord
        assert_eq!(pauses.len(), 2 * 6);
        assert!(pauses.iter().all(|&d| d == Duration::from_millis(350)));
        assert_eq!(Pacing::default().arpeggio, Duration::from_millis(350));
    }

    // ── errors ───────────────────────────────────────────────────────────
    #[test]
    fn bad_channel_is_encode_error() {
        let mut perf = Performer::new(Vec::<Message>::new(), |_| {});
        let r = perf.chord_progression(piano(0), &[], 1);
        assert!(matches!(r, Err(PlayError::Encode(_))));
    }

    #[test]
    fn bad_velocity_sends_nothing() {
        let mut perf = Performer::new(Vec::<Message>::new(), |_| {}).velocity(200);
        let chord = c_major().triad(MID, 1).unwrap();
        assert!(perf.play_chord(1, &chord).is_err());
        assert!(perf.into_inner().is_empty());
    }

    #[test]
    fn transport_failure_surfaces() {
        let mut perf = Performer::new(Broken, |_| {});
        let r = perf.select(piano(1));
        assert!(matches!(r, Err(PlayError::Transport("unplugged"))));
    }
}
