//! MIDI output ports via midir.

use midi_message::Transport;
use midir::{MidiOutput, MidiOutputConnection};
use thiserror::Error;

/// Client name announced to the system MIDI service.
pub const CLIENT_NAME: &str = "midi_out";

// ════════════════════════════════════════════════════════════════════════════
// Errors
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("MIDI init error: {0}")]
    Init(#[from] midir::InitError),
    #[error("could not read MIDI port name: {0}")]
    PortInfo(#[from] midir::PortInfoError),
    #[error("no MIDI output ports available")]
    NoPorts,
    #[error("no MIDI output port number {0}")]
    NoSuchPort(usize),
    #[error("no MIDI output port matching {0:?}")]
    PortNotFound(String),
    #[error("failed to connect to {port}: {reason}")]
    Connect { port: String, reason: String },
    #[error("MIDI send failed: {0}")]
    Send(#[from] midir::SendError),
}

// ════════════════════════════════════════════════════════════════════════════
// Port selection
// ════════════════════════════════════════════════════════════════════════════

/// Which output port to open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PortSelector {
    Number(usize),
    /// Substring of the port name.
    Name(String),
    FirstAvailable,
}

/// Names of all output ports, in system order.
pub fn list_ports() -> Result<Vec<String>, OutputError> {
    let midi_out = MidiOutput::new(CLIENT_NAME)?;
    midi_out.ports()
        .iter()
        .map(|p| midi_out.port_name(p).map_err(OutputError::from))
        .collect()
}

fn looks_like_synth(name: &str) -> bool {
    let n = name.to_lowercase();
    n.contains("fluid") || n.contains("timidity") ||
    n.contains("microsoft") || n.contains("gm") ||
    n.contains("synth")
}

/// Index into `names` chosen by `selector`, if any.
fn pick_port(names: &[String], selector: &PortSelector) -> Option<usize> {
    match selector {
        PortSelector::Number(n) => (*n < names.len()).then_some(*n),
        PortSelector::Name(s) => names.iter().position(|n| n.contains(s.as_str())),
        PortSelector::FirstAvailable => {
            if names.is_empty() { return None; }
            Some(names.iter().position(|n| looks_like_synth(n)).unwrap_or(0))
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// MidiPort — an open connection
// ════════════════════════════════════════════════════════════════════════════

/// An open connection to one output port.
pub struct MidiPort {
    conn: MidiOutputConnection,
    name: String,
}

impl MidiPort {
    pub fn open(selector: &PortSelector) -> Result<MidiPort, OutputError> {
        let midi_out = MidiOutput::new(CLIENT_NAME)?;
        let ports = midi_out.ports();
        let names = ports.iter()
            .map(|p| midi_out.port_name(p))
            .collect::<Result<Vec<_>, _>>()?;
        for (i, n) in names.iter().enumerate() {
            tracing::info!("Port {:02}: {}", i, n);
        }

        let idx = match (pick_port(&names, selector), selector) {
            (Some(i), _) => i,
            (None, PortSelector::Name(name)) => return open_virtual(midi_out, name),
            (None, PortSelector::Number(n)) => return Err(OutputError::NoSuchPort(*n)),
            (None, PortSelector::FirstAvailable) => return Err(OutputError::NoPorts),
        };

        let name = names[idx].clone();
        tracing::info!(port = idx, "opening MIDI port {}", name);
        let conn = midi_out
            .connect(&ports[idx], CLIENT_NAME)
            .map_err(|e| OutputError::Connect { port: name.clone(), reason: e.to_string() })?;
        Ok(MidiPort { conn, name })
    }

    /// Name of the connected (or created) port.
    pub fn name(&self) -> &str { &self.name }

    pub fn close(self) {
        tracing::debug!("closing MIDI port {}", self.name);
        self.conn.close();
    }
}

#[cfg(unix)]
fn open_virtual(midi_out: MidiOutput, name: &str) -> Result<MidiPort, OutputError> {
    use midir::os::unix::VirtualOutput;

    tracing::info!("creating virtual MIDI port {}", name);
    let conn = midi_out
        .create_virtual(name)
        .map_err(|e| OutputError::Connect { port: name.to_string(), reason: e.to_string() })?;
    Ok(MidiPort { conn, name: name.to_string() })
}

#[cfg(not(unix))]
fn open_virtual(_midi_out: MidiOutput, name: &str) -> Result<MidiPort, OutputError> {
    Err(OutputError::PortNotFound(name.to_string()))
}

impl Transport for MidiPort {
    type Error = OutputError;

    fn send(&mut self, message: &[u8]) -> Result<(), OutputError> {
        tracing::trace!(?message, "send");
        self.conn.send(message)?;
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Output — a port, or nothing
// ════════════════════════════════════════════════════════════════════════════

/// A real port, or a sink that discards everything.
pub enum Output {
    Port(MidiPort),
    Null,
}

impl Output {
    /// Open `selector`.  Only [`PortSelector::FirstAvailable`] falls back to
    /// [`Output::Null`]; a named or numbered port that cannot be opened is
    /// an error.
    pub fn open(selector: &PortSelector) -> Result<Output, OutputError> {
        Ok(match fall_back(selector, MidiPort::open(selector))? {
            Some(p) => Output::Port(p),
            None    => Output::Null,
        })
    }

    pub fn is_null(&self) -> bool { matches!(self, Output::Null) }
}

/// `Ok(None)` when the open failed and `selector` allows the null output.
fn fall_back<P>(selector: &PortSelector, opened: Result<P, OutputError>)
    -> Result<Option<P>, OutputError>
{
    match (opened, selector) {
        (Ok(p), _) => Ok(Some(p)),
        (Err(e), PortSelector::FirstAvailable) => {
            tracing::warn!("{}; using null output", e);
            tracing::warn!("Install a MIDI synthesiser such as:");
            tracing::warn!("  • macOS: built-in CoreMIDI (always available)");
            tracing::warn!("  • Linux: `timidity -iA` or `fluidsynth`");
            tracing::warn!("  • Windows: built-in GS Wavetable Synth");
            Ok(None)
        }
        (Err(e), _) => Err(e),
    }
}

impl Transport for Output {
    type Error = OutputError;

    fn send(&mut self, message: &[u8]) -> Result<(), OutputError> {
        match self {
            Output::Port(p) => p.send(message),
            Output::Null    => Ok(()),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
