//! Line-oriented command language for the benchmark driver.
//!
//! Four commands, one per line:
//!
//! ```text
//! # <n>         start a new heap sized for n nodes
//! I <id> <key>  insert node <id> with key <key>
//! M             delete the minimum
//! D <id> <key>  decrease node <id>'s key to <key>
//! ```

use std::str::FromStr;
use thiserror::Error;

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `# <n>` — start a new heap declared to hold up to `capacity` nodes.
    NewHeap { capacity: usize },
    /// `I <id> <key>`
    Insert { id: usize, key: i64 },
    /// `M`
    DeleteMin,
    /// `D <id> <key>`
    DecreaseKey { id: usize, key: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command {op:?} in line {line:?}")]
    UnknownCommand { op: String, line: String },
    #[error("malformed command line {0:?}")]
    Malformed(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, CommandError> {
        let malformed = || CommandError::Malformed(line.to_string());
        let mut tokens = line.split_whitespace();
        let op = tokens.next().ok_or_else(malformed)?;

        let number = |tokens: &mut std::str::SplitWhitespace<'_>| {
            tokens
                .next()
                .and_then(|t| t.parse::<i64>().ok())
                .ok_or_else(malformed)
        };

        match op {
            "#" => {
                let n = number(&mut tokens)?;
                usize::try_from(n)
                    .map(|capacity| Command::NewHeap { capacity })
                    .map_err(|_| malformed())
            }
            "I" | "D" => {
                let id = usize::try_from(number(&mut tokens)?).map_err(|_| malformed())?;
                let key = number(&mut tokens)?;
                Ok(if op == "I" {
                    Command::Insert { id, key }
                } else {
                    Command::DecreaseKey { id, key }
                })
            }
            "M" => Ok(Command::DeleteMin),
            other => Err(CommandError::UnknownCommand {
                op: other.to_string(),
                line: line.to_string(),
            }),
        }
    }
}
