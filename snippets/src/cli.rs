//! CLI command implementations.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use tracing::{debug, info};

use crate::io::config::{SnippetsConfig, load_config, write_config};
use crate::io::input::InputSession;
use crate::io::random::BoundedRandomSource;
use crate::programs::Program;

/// Print every program with a one-line summary.
pub fn list_programs<W: Write>(out: &mut W) -> Result<()> {
    let programs = Program::value_variants();
    let width = programs
        .iter()
        .map(|program| program.name().len())
        .max()
        .unwrap_or(0);
    for program in programs {
        writeln!(out, "{:<width$}  {}", program.name(), program.summary())?;
    }
    Ok(())
}

/// Run one program against `reader`/`writer` with settings from `config_path`
/// and the command-line overrides.
pub fn run_program<R: BufRead, W: Write>(
    config_path: &Path,
    program: Program,
    seed: Option<u64>,
    max_retries: Option<u32>,
    reader: R,
    writer: W,
) -> Result<()> {
    let config = load_config(config_path)
        .context("load config")?
        .apply_overrides(seed, max_retries)?;
    debug!(?config, "config resolved");

    let mut source = match config.random.seed {
        Some(seed) => BoundedRandomSource::from_seed(seed),
        None => BoundedRandomSource::from_clock(),
    };
    let mut session = InputSession::new(reader, writer).with_max_retries(config.input.max_retries);

    program
        .run(&mut session, &mut source)
        .with_context(|| format!("run {}", program.name()))?;
    session.out().flush().context("flush output")?;
    Ok(())
}

/// Write the default config file.
pub fn init_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }
    write_config(config_path, &SnippetsConfig::default())?;
    info!(path = %config_path.display(), "config written");
    println!("init: config={}", config_path.display());
    Ok(())
}
