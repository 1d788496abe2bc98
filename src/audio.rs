//! Sound cues. The terminal has no mixer, so the eat sound is the bell.

use std::io::{self, Stderr, Write};

pub trait Audio {
    fn play_eat_sound(&mut self);
}

/// Rings the terminal bell on the wrapped writer
pub struct TerminalBell<W: Write = Stderr> {
    out: W,
}

impl TerminalBell<Stderr> {
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }
}

impl Default for TerminalBell<Stderr> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Audio for TerminalBell<W> {
    fn play_eat_sound(&mut self) {
        if let Err(err) = self.out.write_all(b"\x07").and_then(|_| self.out.flush()) {
            log::warn!("failed to ring terminal bell: {err}");
        }
    }
}

/// No sound at all
#[derive(Debug, Default)]
pub struct Silent;

impl Audio for Silent {
    fn play_eat_sound(&mut self) {}
}

/// The cue backend for the given setting
pub fn from_config(sound: bool) -> Box<dyn Audio> {
    if sound {
        Box::new(TerminalBell::new())
    } else {
        Box::new(Silent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bell_writes_bel() {
        let mut bell = TerminalBell::with_writer(Vec::new());
        bell.play_eat_sound();
        bell.play_eat_sound();
        assert_eq!(bell.into_inner(), b"\x07\x07");
    }

    #[test]
    fn test_silent_is_silent() {
        let mut audio = Silent;
        audio.play_eat_sound();
    }
}
