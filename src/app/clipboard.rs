//! Clipboard access for copying user ids

use std::io::Write;

use base64::Engine;

/// Something that can receive copied text
pub trait ClipboardWriter: Send {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()>;
}

/// Writes the OSC 52 escape sequence so the terminal sets its clipboard.
/// Works over SSH; terminals without OSC 52 support ignore it.
pub struct Osc52Clipboard<W: Write + Send> {
    out: W,
}

impl Osc52Clipboard<std::io::Stdout> {
    pub fn stdout() -> Self {
        Osc52Clipboard::new(std::io::stdout())
    }
}

impl<W: Write + Send> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Osc52Clipboard { out }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> ClipboardWriter for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(text);
        write!(self.out, "\x1b]52;c;{}\x07", encoded)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence() {
        let mut clip = Osc52Clipboard::new(Vec::new());
        clip.write_text("u1").unwrap();
        let written = String::from_utf8(clip.into_inner()).unwrap();
        assert_eq!(written, "\x1b]52;c;dTE=\x07");
    }
}
