//! The asynchronous file-writer worker: an external collaborator the core
//! never constructs or depends on (it only needs a `FnMut(&[String])`
//! callback), but that the CLI binary wires up around it.
//!
//! Grounded in the original tool's `ProcessManager`: a bounded queue feeds
//! a dedicated worker that opens the output file in append mode once per
//! item, writes, and closes; a sentinel value signals end of stream.

use std::fs::OpenOptions;
use std::io::Write as _;
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread::{self, JoinHandle};

use crate::errors::WordSearchError;
use crate::grid::Grid;
use crate::placement::LetterMap;

/// A message sent to the writer thread.
pub enum WriterMessage {
    Puzzle { rows: Vec<String> },
    EndOfStream,
}

/// Spawns the writer thread, returning a sender to feed it and a handle to
/// join once the sentinel has been sent.
///
/// `capacity` bounds the channel. Once full, `send` blocks the producer;
/// that block is the only backpressure mechanism here, the writer itself
/// applies none of its own.
pub fn spawn_writer(
    path: &str,
    capacity: usize,
) -> (SyncSender<WriterMessage>, JoinHandle<Result<(), WordSearchError>>) {
    let (tx, rx): (SyncSender<WriterMessage>, Receiver<WriterMessage>) =
        mpsc::sync_channel(capacity);
    let path = path.to_string();

    let handle = thread::spawn(move || -> Result<(), WordSearchError> {
        loop {
            match rx.recv() {
                Ok(WriterMessage::Puzzle { rows }) => {
                    let mut file = OpenOptions::new()
                        .create(true)
                        .append(true)
                        .open(&path)
                        .map_err(|source| WordSearchError::OutputIo {
                            path: path.clone(),
                            source,
                        })?;
                    let encoded = encode_rows(&rows);
                    file.write_all(encoded.as_bytes()).map_err(|source| {
                        WordSearchError::OutputIo {
                            path: path.clone(),
                            source,
                        }
                    })?;
                }
                Ok(WriterMessage::EndOfStream) | Err(_) => return Ok(()),
            }
        }
    });

    (tx, handle)
}

/// Encodes already-rendered rows in the reference CLI's wire format,
/// without constructing a full [`Grid`].
fn encode_rows(rows: &[String]) -> String {
    let mut out = rows.join(",");
    out.push(';');
    out
}

/// Convenience used by callers that hold a [`LetterMap`] rather than
/// already-rendered rows.
pub fn encode_grid(letters: &LetterMap, width: usize, height: usize, placeholder: char) -> String {
    Grid::render(letters, width, height, placeholder).to_wire_format()
}
