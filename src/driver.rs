//! Command driver: executes textual command streams against the heap.
//!
//! The driver owns the current heap instance, an identifier-to-handle
//! lookup table it maintains itself (the heap knows nothing about external
//! identifiers), and the step statistics of the running heap. A `#` command
//! flushes the previous heap's summary line before starting the next; end
//! of input flushes the last one.

use std::io::{self, BufRead, Write};

use log::{debug, info};
use thiserror::Error;

use crate::commands::{Command, CommandError};
use crate::heap::FibonacciHeap;
use crate::node::NodeKey;
use crate::stats::HeapStats;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("command {0:?} before any heap was declared")]
    NoHeap(Command),
}

/// One heap instance plus its bookkeeping, alive between two `#` commands.
struct HeapRun {
    heap: FibonacciHeap<usize, i64>,
    /// Identifier-indexed handle table; an entry is cleared as soon as its
    /// node is extracted, so later decrease-keys on that id are skipped.
    handles: Vec<Option<NodeKey>>,
    stats: HeapStats,
}

impl HeapRun {
    fn new(capacity: usize, naive: bool) -> Self {
        Self {
            heap: if naive {
                FibonacciHeap::naive()
            } else {
                FibonacciHeap::standard()
            },
            handles: vec![None; capacity],
            stats: HeapStats::new(capacity),
        }
    }

    fn handle_slot(&mut self, id: usize) -> &mut Option<NodeKey> {
        if id >= self.handles.len() {
            self.handles.resize(id + 1, None);
        }
        &mut self.handles[id]
    }
}

/// Executes commands and writes one statistics line per finished heap.
pub struct CommandDriver {
    naive: bool,
    run: Option<HeapRun>,
}

impl CommandDriver {
    pub fn new(naive: bool) -> Self {
        Self { naive, run: None }
    }

    /// Reads commands line by line (blank lines are skipped), executes
    /// them, and writes the per-heap summary lines to `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<(), DriverError> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let command: Command = line.parse()?;
            self.apply(command, output)?;
        }
        self.finish(output)?;
        Ok(())
    }

    /// Executes a single command.
    pub fn apply<W: Write>(&mut self, command: Command, output: &mut W) -> Result<(), DriverError> {
        if let Command::NewHeap { capacity } = command {
            self.flush(output)?;
            debug!("starting heap for {} nodes (naive: {})", capacity, self.naive);
            self.run = Some(HeapRun::new(capacity, self.naive));
            return Ok(());
        }

        let run = self.run.as_mut().ok_or(DriverError::NoHeap(command))?;
        match command {
            Command::NewHeap { .. } => unreachable!("handled above"),
            Command::Insert { id, key } => {
                let handle = run.heap.insert(id, key);
                *run.handle_slot(id) = Some(handle);
            }
            Command::DeleteMin => {
                if let Some((id, _key)) = run.heap.delete_min() {
                    *run.handle_slot(id) = None;
                    let steps = run.heap.last_operation_steps();
                    run.stats.record_delete_min(steps);
                }
            }
            Command::DecreaseKey { id, key } => {
                let Some(handle) = *run.handle_slot(id) else {
                    return Ok(());
                };
                if run.heap.decrease_key(handle, key).is_ok() {
                    let steps = run.heap.last_operation_steps();
                    run.stats.record_decrease_key(steps);
                }
            }
        }
        Ok(())
    }

    /// Flushes the statistics of the last heap, if any.
    pub fn finish<W: Write>(&mut self, output: &mut W) -> Result<(), DriverError> {
        self.flush(output)
    }

    fn flush<W: Write>(&mut self, output: &mut W) -> Result<(), DriverError> {
        if let Some(run) = self.run.take() {
            info!(
                "heap done: {} delete-mins, {} decrease-keys",
                run.stats.delete_min().count(),
                run.stats.decrease_key().count()
            );
            writeln!(output, "{}", run.stats)?;
        }
        Ok(())
    }
}
