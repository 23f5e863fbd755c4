//! # midi_out
//!
//! Delivers the byte sequences built by [`midi_message`] to a MIDI output
//! port, and plays a few paced performances through any
//! [`Transport`](midi_message::Transport).
//!
//! ## Ports
//!
//! | Selector | Behaviour |
//! |---|---|
//! | `Number(n)` | Connect to the n-th output port |
//! | `Name(s)` | Connect to the first port whose name contains `s`; on Unix, create a virtual port named `s` when none does |
//! | `FirstAvailable` | Prefer a software synthesiser, else the first port |
//!
//! [`Output::open`] falls back to a silent transport when `FirstAvailable`
//! finds nothing to open, so performances still run without MIDI hardware.
//!
//! ## Timing
//!
//! Nothing in the encoding crates waits.  [`perform::Performer`] takes a
//! pause function, normally [`std::thread::sleep`], and calls it between
//! messages.

pub mod perform;
pub mod port;

pub use perform::{progression, Pacing, Performer, PlayError, Voice};
pub use port::{list_ports, MidiPort, Output, OutputError, PortSelector};
