//! JSON-lines action journal.
//!
//! One record per action, appended to the file named by
//! `TETRIS_RESERVE_LOG_PATH`:
//!
//! ```text
//! {"seq":1,"action":"reserve","ok":true,"outcome":"reserved [T 0], ...","next_id":6}
//! {"seq":2,"action":"bulkSwap","ok":false,"error":"stack_not_full","next_id":6}
//! ```
//!
//! (`queue_len` and `stack_len` omitted above.) A journal that fails to open
//! or to write is dropped; the game goes on without it.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::GameState;
use crate::types::{ActionError, ActionOutcome, GameAction};

#[derive(Debug, Serialize)]
pub struct JournalRecord<'a> {
    pub seq: u64,
    pub action: &'a str,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
    pub queue_len: usize,
    pub stack_len: usize,
    pub next_id: u64,
}

impl<'a> JournalRecord<'a> {
    pub fn new(
        seq: u64,
        action: GameAction,
        result: &Result<ActionOutcome, ActionError>,
        state: &GameState,
    ) -> Self {
        let (outcome, error) = match result {
            Ok(outcome) => (Some(outcome.to_string()), None),
            Err(err) => (None, Some(err.code())),
        };
        Self {
            seq,
            action: action.as_str(),
            ok: result.is_ok(),
            outcome,
            error,
            queue_len: state.queue().len(),
            stack_len: state.stack().len(),
            next_id: state.next_id(),
        }
    }
}

pub struct ActionJournal<W: Write> {
    out: W,
    seq: u64,
    buf: Vec<u8>,
}

impl ActionJournal<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening action journal {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> ActionJournal<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            seq: 0,
            buf: Vec::with_capacity(256),
        }
    }

    /// Append one record for `action` and flush it.
    pub fn record(
        &mut self,
        action: GameAction,
        result: &Result<ActionOutcome, ActionError>,
        state: &GameState,
    ) -> Result<()> {
        self.seq += 1;
        let rec = JournalRecord::new(self.seq, action, result, state);

        self.buf.clear();
        serde_json::to_writer(&mut self.buf, &rec)?;
        self.buf.push(b'\n');
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Status text shown once the journal has been turned off.
pub fn disabled_message(err: &anyhow::Error) -> String {
    format!("journal disabled: {err:#}")
}

/// Open the journal at `path`, if any. An open failure yields no journal and
/// the message to show instead.
pub fn open_or_disable(
    path: Option<&str>,
) -> (Option<ActionJournal<BufWriter<File>>>, Option<String>) {
    match path.map(ActionJournal::open) {
        Some(Ok(journal)) => (Some(journal), None),
        Some(Err(e)) => (None, Some(disabled_message(&e))),
        None => (None, None),
    }
}

/// Record into `journal` while it is active. A write failure drops the
/// journal and returns the message to show instead.
pub fn record_or_disable<W: Write>(
    journal: &mut Option<ActionJournal<W>>,
    action: GameAction,
    result: &Result<ActionOutcome, ActionError>,
    state: &GameState,
) -> Option<String> {
    let err = journal.as_mut()?.record(action, result, state).err()?;
    *journal = None;
    Some(disabled_message(&err))
}
