//! Console speech output.
use std::io::Write;

use scanner_core::{MessageLog, SpeechSink};

/// Prints each announcement on its own line and keeps a bounded history.
///
/// Lines end in `\r\n` because the terminal runs in raw mode.
pub struct ConsoleSpeech<W: Write> {
    out: W,
    history: MessageLog,
}

impl<W: Write> ConsoleSpeech<W> {
    pub fn new(out: W, history_capacity: usize) -> Self {
        Self {
            out,
            history: MessageLog::new(history_capacity),
        }
    }

    pub fn history(&self) -> &MessageLog {
        &self.history
    }

    pub fn output(&self) -> &W {
        &self.out
    }
}

impl<W: Write> SpeechSink for ConsoleSpeech<W> {
    fn say(&mut self, text: &str) {
        self.history.push_text(text);
        let written = write!(self.out, "{text}\r\n").and_then(|()| self.out.flush());
        if let Err(error) = written {
            tracing::warn!(%error, "failed to write announcement");
        }
    }
}
