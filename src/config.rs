//! Runtime configuration for the `block-blast` binary.
//!
//! Values come from environment variables first and can be overridden on the
//! command line:
//!
//! | Variable | Flag | Default |
//! |----------|------|---------|
//! | `BLOCK_BLAST_GRID_SIZE` | `--size N` | 8 |
//! | `BLOCK_BLAST_SEED` | `--seed N` | derived from the clock |
//! | `BLOCK_BLAST_GENERATOR` | `--random-shapes` | `catalog` |
//! | `BLOCK_BLAST_SCORE_LOG` | `--scores PATH` | `scores.txt` (empty disables) |
//! | `BLOCK_BLAST_LOG` | | `warn` |
//! | | `--json` | off |

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use tracing::Level;

use crate::core::Generator;
use crate::types::{DEFAULT_GRID_SIZE, MAX_GRID_SIZE};

pub const DEFAULT_SCORE_LOG: &str = "scores.txt";

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub grid_size: u8,
    pub seed: u32,
    pub generator: Generator,
    pub score_log_path: Option<PathBuf>,
    pub log_level: Level,
    pub json: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            seed: 1,
            generator: Generator::Catalog,
            score_log_path: Some(PathBuf::from(DEFAULT_SCORE_LOG)),
            log_level: Level::WARN,
            json: false,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup. Invalid values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let grid_size = lookup("BLOCK_BLAST_GRID_SIZE")
            .and_then(|s| parse_grid_size(&s))
            .unwrap_or(defaults.grid_size);

        let seed = lookup("BLOCK_BLAST_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let generator = lookup("BLOCK_BLAST_GENERATOR")
            .and_then(|s| Generator::from_str(&s))
            .unwrap_or(defaults.generator);

        let score_log_path = match lookup("BLOCK_BLAST_SCORE_LOG") {
            Some(s) => {
                let s = s.trim();
                if s.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(s))
                }
            }
            None => defaults.score_log_path,
        };

        let log_level = lookup("BLOCK_BLAST_LOG")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.log_level);

        Self {
            grid_size,
            seed,
            generator,
            score_log_path,
            log_level,
            json: false,
        }
    }

    /// Apply command-line flags on top of this configuration
    pub fn apply_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--size" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --size"))?;
                    self.grid_size = parse_grid_size(v).ok_or_else(|| {
                        anyhow!("invalid --size value: {} (expected 1..={})", v, MAX_GRID_SIZE)
                    })?;
                }
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    self.seed = v
                        .parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                }
                "--scores" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --scores"))?;
                    self.score_log_path = if v.is_empty() {
                        None
                    } else {
                        Some(PathBuf::from(v))
                    };
                }
                "--random-shapes" => self.generator = Generator::RandomRect,
                "--json" => self.json = true,
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 1;
        }
        Ok(self)
    }
}

fn parse_grid_size(s: &str) -> Option<u8> {
    s.trim()
        .parse::<u8>()
        .ok()
        .filter(|n| (1..=MAX_GRID_SIZE).contains(n))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn env_values_are_read() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("BLOCK_BLAST_GRID_SIZE", "10"),
            ("BLOCK_BLAST_SEED", "42"),
            ("BLOCK_BLAST_GENERATOR", "random"),
            ("BLOCK_BLAST_SCORE_LOG", "/tmp/bb.txt"),
            ("BLOCK_BLAST_LOG", "debug"),
        ]));
        assert_eq!(config.grid_size, 10);
        assert_eq!(config.seed, 42);
        assert_eq!(config.generator, Generator::RandomRect);
        assert_eq!(config.score_log_path, Some(PathBuf::from("/tmp/bb.txt")));
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn invalid_env_values_fall_back() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("BLOCK_BLAST_GRID_SIZE", "0"),
            ("BLOCK_BLAST_SEED", "7"),
            ("BLOCK_BLAST_GENERATOR", "spiral"),
            ("BLOCK_BLAST_LOG", "loud"),
        ]));
        assert_eq!(config.grid_size, DEFAULT_GRID_SIZE);
        assert_eq!(config.generator, Generator::Catalog);
        assert_eq!(config.log_level, Level::WARN);
        assert_eq!(
            config.score_log_path,
            Some(PathBuf::from(DEFAULT_SCORE_LOG))
        );
    }

    #[test]
    fn empty_score_log_disables_it() {
        let config = GameConfig::from_lookup(lookup_from(&[("BLOCK_BLAST_SCORE_LOG", "  ")]));
        assert_eq!(config.score_log_path, None);
    }

    #[test]
    fn args_override_env() {
        let config = GameConfig::default()
            .apply_args(&args(&[
                "--size",
                "6",
                "--seed",
                "99",
                "--random-shapes",
                "--json",
                "--scores",
                "out.txt",
            ]))
            .unwrap();
        assert_eq!(config.grid_size, 6);
        assert_eq!(config.seed, 99);
        assert_eq!(config.generator, Generator::RandomRect);
        assert!(config.json);
        assert_eq!(config.score_log_path, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn bad_args_are_errors() {
        assert!(GameConfig::default().apply_args(&args(&["--size"])).is_err());
        assert!(GameConfig::default()
            .apply_args(&args(&["--size", "17"]))
            .is_err());
        assert!(GameConfig::default()
            .apply_args(&args(&["--seed", "x"]))
            .is_err());
        assert!(GameConfig::default()
            .apply_args(&args(&["--colour"]))
            .is_err());
    }
}
