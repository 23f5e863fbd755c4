//! midi_play — play scales, chord progressions and arpeggios on a MIDI port.
//!
//! ```text
//! midi_play --list
//! midi_play --port-name iPad arpeggios
//! midi_play --port-number 2 scales --key G_maj --patch VIBRAPHONE --patch CELLO
//! RUST_LOG=debug midi_play chords --key A_min --repeats 2
//! ```

use std::time::Duration;

use clap::{Parser, Subcommand};
use key_signature::KeySignature;
use midi_message::GeneralMidi;
use midi_out::{list_ports, progression, Output, Pacing, Performer, PortSelector, Voice};
use pitch_names::MIDDLE_C_OCTAVE;

/// I – IV – V – IV – I
const PRIMARY_PROGRESSION: [u8; 5] = [1, 4, 5, 4, 1];

#[derive(Parser)]
#[command(name = "midi_play")]
#[command(about = "Play scales, chords and arpeggios on a MIDI output port")]
#[command(version)]
struct Cli {
    /// List output ports and exit
    #[arg(long)]
    list: bool,

    /// Output port number (see --list)
    #[arg(long, conflicts_with = "port_name")]
    port_number: Option<usize>,

    /// Output port name substring; a virtual port with this name is created
    /// when none matches (Unix only)
    #[arg(long)]
    port_name: Option<String>,

    /// MIDI channel 1–16
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=16))]
    channel: u8,

    /// Note on → note off, in milliseconds
    #[arg(long, default_value_t = 250)]
    note_ms: u64,

    /// Held chord length, in milliseconds
    #[arg(long, default_value_t = 500)]
    chord_ms: u64,

    /// Each arpeggio step, in milliseconds
    #[arg(long, default_value_t = 350)]
    arpeggio_ms: u64,

    /// Silence after each note or chord, in milliseconds
    #[arg(long, default_value_t = 50)]
    gap_ms: u64,

    #[command(subcommand)]
    performance: Option<Performance>,
}

#[derive(Subcommand)]
enum Performance {
    /// The key's scale, once per patch
    Scales {
        #[arg(long, default_value = "C_maj")]
        key: String,
        /// Defaults to two octaves below middle C
        #[arg(long)]
        octave: Option<i64>,
        /// Patch identifier or number; repeat for several. Default: all 128
        #[arg(long)]
        patch: Vec<GeneralMidi>,
    },
    /// Block-chord I–IV–V–IV–I progression
    Chords {
        #[arg(long, default_value = "C_maj")]
        key: String,
        /// Defaults to the octave below middle C
        #[arg(long)]
        octave: Option<i64>,
        #[arg(long, default_value = "GRAND_PIANO")]
        patch: GeneralMidi,
        #[arg(long, default_value_t = 4)]
        repeats: usize,
    },
    /// I–IV–V–IV–I arpeggiated on one channel over held chords on another
    Arpeggios {
        #[arg(long, default_value = "C_maj")]
        key: String,
        #[arg(long)]
        octave: Option<i64>,
        #[arg(long, default_value = "REED_ORGAN")]
        melody_patch: GeneralMidi,
        #[arg(long, default_value = "ORCHESTRAL_HARP")]
        harmony_patch: GeneralMidi,
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=16))]
        harmony_channel: u8,
        #[arg(long, default_value_t = 2)]
        repeats: usize,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run(Cli::parse()) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.list {
        for (i, name) in list_ports()?.iter().enumerate() {
            println!("Port {:02}: {}", i, name);
        }
        return Ok(());
    }

    let Some(performance) = cli.performance else {
        return Err("no performance given; try `midi_play --help`".into());
    };

    let selector = match (cli.port_number, cli.port_name) {
        (Some(n), _)    => PortSelector::Number(n),
        (None, Some(s)) => PortSelector::Name(s),
        (None, None)    => PortSelector::FirstAvailable,
    };
    let out = Output::open(&selector)?;

    let pacing = Pacing {
        note:     Duration::from_millis(cli.note_ms),
        chord:    Duration::from_millis(cli.chord_ms),
        arpeggio: Duration::from_millis(cli.arpeggio_ms),
        gap:      Duration::from_millis(cli.gap_ms),
    };
    let mut performer = Performer::new(out, std::thread::sleep).pacing(pacing);
    let mid = MIDDLE_C_OCTAVE as i64;

    match performance {
        Performance::Scales { key, octave, patch } => {
            let key = KeySignature::get(&key)?;
            let octave = octave.unwrap_or(mid - 2);
            tracing::info!("scales in {} from octave {}", key, octave);
            if patch.is_empty() {
                performer.scale_tour(cli.channel, &key, octave, GeneralMidi::all())?;
            } else {
                performer.scale_tour(cli.channel, &key, octave, patch)?;
            }
        }
        Performance::Chords { key, octave, patch, repeats } => {
            let key = KeySignature::get(&key)?;
            let chords = progression(&key, octave.unwrap_or(mid - 1), &PRIMARY_PROGRESSION)?;
            tracing::info!("chords in {}", key);
            performer.chord_progression(Voice { channel: cli.channel, patch }, &chords, repeats)?;
        }
        Performance::Arpeggios {
            key, octave, melody_patch, harmony_patch, harmony_channel, repeats,
        } => {
            let key = KeySignature::get(&key)?;
            let chords = progression(&key, octave.unwrap_or(mid - 1), &PRIMARY_PROGRESSION)?;
            tracing::info!("arpeggios in {}", key);
            performer.arpeggios(
                Voice { channel: cli.channel, patch: melody_patch },
                Voice { channel: harmony_channel, patch: harmony_patch },
                &chords,
                repeats,
            )?;
        }
    }

    if let Output::Port(port) = performer.into_inner() {
        port.close();
    }
    Ok(())
}
