//! Terminal plumbing for interactive play.
//!
//! Focus reporting (`ESC [ ? 1004 h`) makes the terminal write `ESC [ O` to
//! stdin when its window loses focus and `ESC [ I` when it regains it. The
//! terminal stays in cooked mode, so a report reaches the process together
//! with the next submitted line; the decoder emits it ahead of that line.

use std::io::{IsTerminal, Read, Write};

use tokio::sync::mpsc;

const ENABLE_FOCUS_REPORTING: &str = "\x1b[?1004h";
const DISABLE_FOCUS_REPORTING: &str = "\x1b[?1004l";
const FOCUS_OUT: &[u8] = b"\x1b[O";
const FOCUS_IN: &[u8] = b"\x1b[I";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    FocusLost,
    FocusGained,
    Line(String),
    /// stdin reached end of file.
    Closed,
}

/// Splits raw stdin bytes into focus reports and lines.
#[derive(Debug, Default)]
pub struct InputDecoder {
    pending: Vec<u8>,
    line: Vec<u8>,
}

impl InputDecoder {
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<InputEvent> {
        self.pending.extend_from_slice(bytes);
        let mut events = Vec::new();
        let mut consumed = 0;

        while consumed < self.pending.len() {
            let rest = &self.pending[consumed..];
            if rest.starts_with(FOCUS_OUT) {
                events.push(InputEvent::FocusLost);
                consumed += FOCUS_OUT.len();
                continue;
            }
            if rest.starts_with(FOCUS_IN) {
                events.push(InputEvent::FocusGained);
                consumed += FOCUS_IN.len();
                continue;
            }
            // A report split across reads: wait for the rest.
            if rest.len() < FOCUS_OUT.len() && (FOCUS_OUT.starts_with(rest) || FOCUS_IN.starts_with(rest)) {
                break;
            }
            if rest[0] == b'\n' {
                events.push(InputEvent::Line(self.take_line()));
            } else {
                self.line.push(rest[0]);
            }
            consumed += 1;
        }

        self.pending.drain(..consumed);
        events
    }

    /// Flush whatever is buffered at end of input.
    pub fn finish(&mut self) -> Vec<InputEvent> {
        let leftover = std::mem::take(&mut self.pending);
        self.line.extend_from_slice(&leftover);
        let mut events = Vec::new();
        if !self.line.is_empty() {
            events.push(InputEvent::Line(self.take_line()));
        }
        events.push(InputEvent::Closed);
        events
    }

    fn take_line(&mut self) -> String {
        let bytes = std::mem::take(&mut self.line);
        String::from_utf8_lossy(&bytes).trim_end_matches('\r').to_string()
    }
}

/// Read stdin on a dedicated thread.
///
/// A blocking read cannot be cancelled, so the thread is left detached and
/// ends with the process.
pub fn spawn_input_reader() -> mpsc::UnboundedReceiver<InputEvent> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        let mut decoder = InputDecoder::default();
        let mut stdin = std::io::stdin().lock();
        let mut buf = [0u8; 256];
        loop {
            let events = match stdin.read(&mut buf) {
                Ok(0) => decoder.finish(),
                Ok(n) => decoder.feed(&buf[..n]),
                Err(error) if error.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(error) => {
                    tracing::warn!(%error, "stdin read failed");
                    decoder.finish()
                }
            };
            let closed = events.last() == Some(&InputEvent::Closed);
            for event in events {
                if tx.send(event).is_err() {
                    return;
                }
            }
            if closed {
                return;
            }
        }
    });
    rx
}

/// Focus reporting enabled for as long as the guard lives.
pub struct FocusReporting {
    enabled: bool,
}

impl FocusReporting {
    /// Ask the terminal for focus reports. Does nothing when stdout is not a terminal.
    pub fn enable() -> Self {
        let enabled = std::io::stdout().is_terminal() && write_control(ENABLE_FOCUS_REPORTING);
        if enabled {
            tracing::debug!("terminal focus reporting enabled");
        }
        Self { enabled }
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Drop for FocusReporting {
    fn drop(&mut self) {
        if self.enabled {
            write_control(DISABLE_FOCUS_REPORTING);
        }
    }
}

fn write_control(sequence: &str) -> bool {
    let mut stdout = std::io::stdout();
    stdout
        .write_all(sequence.as_bytes())
        .and_then(|()| stdout.flush())
        .is_ok()
}
