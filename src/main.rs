//! Block Blast runner (default binary).
//!
//! Plays one or more games on stdin/stdout. See [`block_blast::runner`] for
//! the command language and [`block_blast::config`] for settings.

use std::io::{self, BufWriter};

use anyhow::Result;

use block_blast::config::GameConfig;
use block_blast::logging;
use block_blast::runner::Runner;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = GameConfig::from_env().apply_args(&args)?;
    logging::init(config.log_level)?;

    let mut runner = Runner::new(&config);
    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());
    runner.run(stdin.lock(), &mut out)
}
