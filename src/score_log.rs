//! Append-only score log.
//!
//! One final score per line, oldest first. The engine never touches this file;
//! the runner appends a session's final score once the session is over.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreLog {
    path: PathBuf,
}

impl ScoreLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one score, creating the file if needed
    pub fn append(&self, score: u32) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("score log: open {}", self.path.display()))?;
        writeln!(file, "{}", score)
            .with_context(|| format!("score log: write {}", self.path.display()))?;
        debug!(score, path = %self.path.display(), "score recorded");
        Ok(())
    }

    /// All recorded scores in file order. A missing file is an empty log;
    /// malformed lines are skipped.
    pub fn read_all(&self) -> Result<Vec<u32>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("score log: read {}", self.path.display()))
            }
        };

        let mut scores = Vec::new();
        for (n, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match line.parse::<u32>() {
                Ok(score) => scores.push(score),
                Err(_) => warn!(line = n + 1, content = line, "score log: skipping malformed line"),
            }
        }
        Ok(scores)
    }

    /// Highest recorded score, if any
    pub fn best(&self) -> Result<Option<u32>> {
        Ok(self.read_all()?.into_iter().max())
    }
}
