//! `snippets`: beginner console programs.
//!
//! Lists the available programs and runs one of them interactively on
//! stdin/stdout. Random programs share one generator seeded per run, from the
//! clock unless a seed is given.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use snippets::io::config::DEFAULT_CONFIG_FILE;
use snippets::programs::Program;
use snippets::{cli, exit_codes, logging};

#[derive(Parser)]
#[command(name = "snippets", version, about = "Beginner console programs")]
struct Cli {
    /// Config file (missing file means defaults).
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List available programs.
    List,
    /// Run one program interactively.
    Run {
        program: Program,
        /// Seed the random programs for a reproducible run.
        #[arg(long)]
        seed: Option<u64>,
        /// Fail after this many rejected inputs for a single prompt.
        #[arg(long)]
        max_retries: Option<u32>,
    },
    /// Write a default config file.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    let args = Cli::parse();
    match args.command {
        Command::List => cli::list_programs(&mut std::io::stdout().lock()),
        Command::Run {
            program,
            seed,
            max_retries,
        } => cli::run_program(
            &args.config,
            program,
            seed,
            max_retries,
            std::io::stdin().lock(),
            std::io::stdout().lock(),
        ),
        Command::Init { force } => cli::init_config(&args.config, force),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_run_with_seed() {
        let cli = Cli::parse_from(["snippets", "run", "dice-roll", "--seed", "7"]);
        assert!(matches!(
            cli.command,
            Command::Run {
                program: Program::DiceRoll,
                seed: Some(7),
                max_retries: None,
            }
        ));
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["snippets", "init", "--force"]);
        assert!(matches!(cli.command, Command::Init { force: true }));
    }

    #[test]
    fn rejects_unknown_program() {
        assert!(Cli::try_parse_from(["snippets", "run", "tic-tac-toe"]).is_err());
    }
}
