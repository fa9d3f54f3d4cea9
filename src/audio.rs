//! Sound cues and the terminal-bell audio backend.

use std::io::Write;

/// The three sound events the game emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Flap,
    Score,
    Death,
}

/// Plays sound cues. Playback is fire-and-forget: failures never reach
/// the simulation.
pub trait Audio {
    fn play(&mut self, cue: AudioCue);
}

/// Rings the terminal bell for score and death cues. Flaps are too
/// frequent for a bell and stay silent.
pub struct TerminalBell<W: Write> {
    out: W,
    enabled: bool,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W, enabled: bool) -> Self {
        Self { out, enabled }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Audio for TerminalBell<W> {
    fn play(&mut self, cue: AudioCue) {
        log::debug!("audio cue: {:?}", cue);
        if !self.enabled || cue == AudioCue::Flap {
            return;
        }
        let rung = self
            .out
            .write_all(b"\x07")
            .and_then(|_| self.out.flush());
        if let Err(e) = rung {
            log::warn!("Failed to ring terminal bell: {}", e);
        }
    }
}

/// Records cues instead of playing them.
#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub cues: Vec<AudioCue>,
}

impl Audio for RecordingAudio {
    fn play(&mut self, cue: AudioCue) {
        self.cues.push(cue);
    }
}
