//! Key events read line by line from standard input.
//!
//! Each character of a line becomes a press followed by a release. An empty
//! line is Enter, and a line reading `esc` is Escape. The channel disconnects
//! when stdin reaches end of file.

use std::io::{self, BufRead};

use crossbeam_channel::{Receiver, Sender};
use lodview_input::{Key, RawKeyEvent};
use tracing::{debug, warn};

/// Turn one input line into key events.
pub fn parse_line(line: &str) -> Vec<RawKeyEvent> {
    let line = line.trim_end_matches(['\r', '\n']);
    let keys: Vec<Key> = if line.is_empty() {
        vec![Key::Enter]
    } else if line.trim().eq_ignore_ascii_case("esc") {
        vec![Key::Escape]
    } else {
        line.chars()
            .map(|c| if c == '\u{1b}' { Key::Escape } else { Key::Char(c) })
            .collect()
    };

    keys.into_iter()
        .flat_map(|key| [RawKeyEvent::press(key), RawKeyEvent::release(key)])
        .collect()
}

/// Forward every line of `reader` to `tx` until EOF or the receiver hangs up.
pub fn pump_keys(reader: impl BufRead, tx: &Sender<RawKeyEvent>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Failed to read key input: {e}");
                return;
            }
        };
        for event in parse_line(&line) {
            if tx.send(event).is_err() {
                return;
            }
        }
    }
    debug!("Key input reached end of file");
}

/// Start a background thread reading keys from stdin.
///
/// # Errors
///
/// Returns an error if the thread cannot be spawned.
pub fn spawn_stdin_reader() -> io::Result<Receiver<RawKeyEvent>> {
    let (tx, rx) = crossbeam_channel::unbounded();
    std::thread::Builder::new()
        .name("stdin-keys".to_string())
        .spawn(move || pump_keys(io::stdin().lock(), &tx))?;
    Ok(rx)
}
