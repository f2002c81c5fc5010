//! Line-oriented runner.
//!
//! Reads one command per line and prints the resulting state:
//!
//! ```text
//! place <piece> <x> <y>   place pending piece <piece> with its top-left at column x, row y
//! restart                 start a new game
//! help                    list commands
//! quit                    exit
//! ```
//!
//! When a game ends its final score is appended to the score log (if one is
//! configured). In JSON mode every response is a single JSON line.

use std::io::{BufRead, Write};

use anyhow::{anyhow, Result};
use tracing::{info, warn};

use crate::config::GameConfig;
use crate::core::{GameSession, Piece};
use crate::observe::{build_error, build_observation, to_line};
use crate::score_log::ScoreLog;
use crate::types::{Cell, PlaceOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place { index: usize, x: i32, y: i32 },
    Restart,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Ok(None);
        };

        let cmd = match word.to_lowercase().as_str() {
            "place" | "p" => {
                let mut next_num = |name: &str| -> Result<i64> {
                    let v = parts
                        .next()
                        .ok_or_else(|| anyhow!("place: missing {}", name))?;
                    v.parse::<i64>()
                        .map_err(|_| anyhow!("place: invalid {}: {}", name, v))
                };
                let index = next_num("piece")?;
                let x = next_num("x")?;
                let y = next_num("y")?;
                Command::Place {
                    index: usize::try_from(index)
                        .map_err(|_| anyhow!("place: invalid piece: {}", index))?,
                    x: i32::try_from(x).map_err(|_| anyhow!("place: invalid x: {}", x))?,
                    y: i32::try_from(y).map_err(|_| anyhow!("place: invalid y: {}", y))?,
                }
            }
            "restart" | "r" => Command::Restart,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(anyhow!("unknown command: {}", other)),
        };

        if let Some(extra) = parts.next() {
            return Err(anyhow!("unexpected argument: {}", extra));
        }
        Ok(Some(cmd))
    }
}

const HELP: &str = "commands: place <piece> <x> <y> | restart | help | quit";

pub struct Runner {
    session: GameSession,
    score_log: Option<ScoreLog>,
    json: bool,
    seq: u64,
    /// Final score of the current episode already written to the log
    recorded: bool,
}

impl Runner {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            session: GameSession::with_seed(config.grid_size, config.seed, config.generator),
            score_log: config.score_log_path.clone().map(ScoreLog::new),
            json: config.json,
            seq: 0,
            recorded: false,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Process commands until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        self.print_state(out, None)?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            let cmd = match Command::parse(&line) {
                Ok(Some(cmd)) => cmd,
                Ok(None) => continue,
                Err(e) => {
                    self.print_error(out, "bad_command", &e.to_string())?;
                    out.flush()?;
                    continue;
                }
            };

            match cmd {
                Command::Quit => break,
                Command::Help => {
                    if self.json {
                        self.print_state(out, None)?;
                    } else {
                        writeln!(out, "{}", HELP)?;
                    }
                }
                Command::Restart => {
                    self.session.restart();
                    self.recorded = false;
                    self.print_state(out, None)?;
                }
                Command::Place { index, x, y } => match self.session.attempt_place(index, x, y) {
                    Ok(outcome) => {
                        if let Some(rejection) = outcome.rejection() {
                            if !self.json {
                                writeln!(out, "rejected: {}", rejection)?;
                            }
                        }
                        self.print_state(out, Some(outcome))?;
                        if outcome.is_over {
                            self.finish_game(out)?;
                        }
                    }
                    Err(e) => self.print_error(out, e.code(), &e.to_string())?,
                },
            }
            out.flush()?;
        }

        out.flush()?;
        Ok(())
    }

    fn finish_game<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let Some(score) = self.session.final_score() else {
            return Ok(());
        };
        info!(score, episode = self.session.episode_id(), "game finished");

        if !self.recorded {
            self.recorded = true;
            if let Some(log) = &self.score_log {
                if let Err(e) = log.append(score) {
                    warn!("{:#}", e);
                }
            }
        }

        if !self.json {
            writeln!(out, "game over, final score: {}", score)?;
            if let Some(log) = &self.score_log {
                match log.best() {
                    Ok(Some(best)) => writeln!(out, "best score: {}", best)?,
                    Ok(None) => {}
                    Err(e) => warn!("{:#}", e),
                }
            }
            writeln!(out, "type 'restart' to play again or 'quit' to exit")?;
        }
        Ok(())
    }

    fn print_error<W: Write>(&mut self, out: &mut W, code: &str, message: &str) -> Result<()> {
        if self.json {
            self.seq += 1;
            writeln!(out, "{}", to_line(&build_error(self.seq, code, message))?)?;
        } else {
            writeln!(out, "error: {}", message)?;
        }
        Ok(())
    }

    fn print_state<W: Write>(&mut self, out: &mut W, last: Option<PlaceOutcome>) -> Result<()> {
        self.seq += 1;
        if self.json {
            let obs = build_observation(self.seq, &self.session.snapshot(), last);
            writeln!(out, "{}", to_line(&obs)?)?;
        } else {
            write!(out, "{}", render_text(&self.session))?;
        }
        Ok(())
    }
}

/// Plain-text board and pending pieces
pub fn render_text(session: &GameSession) -> String {
    let mut s = String::new();
    let board = session.board();
    let n = board.size() as usize;

    s.push_str("   ");
    for x in 0..n {
        s.push_str(&format!("{:>2}", x));
    }
    s.push('\n');
    for (y, row) in board.rows().enumerate() {
        s.push_str(&format!("{:>2} ", y));
        for cell in row {
            s.push_str(match cell {
                Cell::Filled => " #",
                Cell::Empty => " .",
            });
        }
        s.push('\n');
    }

    s.push_str(&format!(
        "score: {}  multiplier: x{}\n",
        session.current_score(),
        session.current_multiplier()
    ));

    for (i, piece) in session.pending_pieces().iter().enumerate() {
        s.push_str(&render_piece(i, piece));
    }
    s
}

fn render_piece(index: usize, piece: &Piece) -> String {
    let mut s = format!("piece {} ({}):\n", index, piece.color.as_str());
    for row in piece.shape.rows() {
        s.push_str("  ");
        for &filled in row {
            s.push(if filled { '#' } else { '.' });
        }
        s.push('\n');
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_place() {
        assert_eq!(
            Command::parse("place 1 3 4").unwrap(),
            Some(Command::Place { index: 1, x: 3, y: 4 })
        );
        assert_eq!(
            Command::parse("  p 0 -1 2 ").unwrap(),
            Some(Command::Place { index: 0, x: -1, y: 2 })
        );
    }

    #[test]
    fn parse_simple_commands() {
        assert_eq!(Command::parse("restart").unwrap(), Some(Command::Restart));
        assert_eq!(Command::parse("QUIT").unwrap(), Some(Command::Quit));
        assert_eq!(Command::parse("?").unwrap(), Some(Command::Help));
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn parse_errors() {
        assert!(Command::parse("place 1 2").is_err());
        assert!(Command::parse("place -1 2 3").is_err());
        assert!(Command::parse("place a 2 3").is_err());
        assert!(Command::parse("place 0 0 0 0").is_err());
        assert!(Command::parse("rotate").is_err());
    }

    #[test]
    fn render_shows_board_and_pieces() {
        let session = GameSession::new(4);
        let text = render_text(&session);
        assert!(text.contains("score: 0  multiplier: x1"));
        assert!(text.contains("piece 0"));
        assert!(text.contains("piece 2"));
        assert_eq!(text.lines().filter(|l| l.ends_with(" . . . .")).count(), 4);
    }
}
