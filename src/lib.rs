//! Block Blast (workspace facade crate).
//!
//! The engine lives in dedicated crates under `crates/` and is re-exported here
//! as `block_blast::{core, types}`. This package adds the I/O around it:
//! configuration, logging setup, the score log, JSON observations and the
//! line-oriented runner used by the `block-blast` binary.

pub mod config;
pub mod logging;
pub mod observe;
pub mod runner;
pub mod score_log;

pub use block_blast_core as core;
pub use block_blast_types as types;
