//! Word Solver - CLI
//!
//! Interactive solver for fixed-length word-guessing games. Suggests the
//! guess with the best worst-case split of the remaining candidates.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use word_solver::{
    commands::{SolveConfig, run_interactive, solve_target},
    output::display,
    solver::Game,
    wordlists::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "word_solver",
    about = "Interactive solver for fixed-length word-guessing games (worst-case minimax)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length for the game
    #[arg(short, long, global = true, default_value_t = 5)]
    length: usize,

    /// Dictionary of guessable words, one per line
    #[arg(short, long, global = true, default_value = "words.txt")]
    wordlist: PathBuf,

    /// Separate list of plausible solutions (defaults to the full dictionary)
    #[arg(short, long, global = true)]
    answers: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive solving session (default)
    Play,

    /// Simulate solving a known target word
    Solve {
        /// The target word to solve for
        word: String,

        /// Maximum number of guesses
        #[arg(short, long, default_value_t = 6)]
        max_guesses: usize,
    },

    /// Print the best opening guesses and exit
    Suggest {
        /// Number of suggestions to print
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut game = load_game(&cli)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_interactive(game).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { word, max_guesses } => {
            let config = SolveConfig {
                target: word,
                max_guesses,
            };
            let outcome = solve_target(&config, &mut game).map_err(|e| anyhow::anyhow!(e))?;
            display::print_solve_outcome(&outcome);
            Ok(())
        }
        Commands::Suggest { count } => {
            display::print_suggestions(&game.suggestions(), count);
            Ok(())
        }
    }
}

/// Load and normalize the word lists named on the command line
///
/// The dictionary defines the guessable universe; `--answers` optionally
/// narrows the initial candidate set to a separate list.
fn load_game(cli: &Cli) -> Result<Game> {
    let universe = load_from_file(&cli.wordlist, cli.length)
        .with_context(|| format!("Failed to read dictionary {}", cli.wordlist.display()))?;
    if universe.is_empty() {
        bail!(
            "Dictionary {} contains no {}-letter words",
            cli.wordlist.display(),
            cli.length
        );
    }

    match &cli.answers {
        Some(path) => {
            let candidates = load_from_file(path, cli.length)
                .with_context(|| format!("Failed to read answer list {}", path.display()))?;
            if candidates.is_empty() {
                bail!(
                    "Answer list {} contains no {}-letter words",
                    path.display(),
                    cli.length
                );
            }
            Ok(Game::new(cli.length, universe, candidates))
        }
        None => Ok(Game::from_universe(cli.length, universe)),
    }
}
