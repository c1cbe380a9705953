//! Wordle Tiles - CLI
//!
//! Play in the terminal, score single guesses, or run headless simulations.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_tiles::{
    commands::{run_simulation, score_guess},
    config::{DEFAULT_MAX_GUESSES, GameConfig, MAX_GUESSES_LIMIT},
    game::GameEngine,
    logging::{self, LogTarget},
    output::{print_score_result, print_simulation_result},
    wordlists::{Dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_tiles",
    about = "Wordle with animated tiles in the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file used for both answers and guesses
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for secret word selection
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Number of attempts per game (1-20)
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_MAX_GUESSES,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=MAX_GUESSES_LIMIT as u64)
    )]
    max_guesses: usize,

    /// Write logs to this file (the only log output in play mode)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Score one guess against a secret word
    Score {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },

    /// Play many games headlessly with a bot and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,
    },
}

/// Build the dictionary selected by the -w flag
///
/// - "embedded": compiled-in answer and allowed-guess lists
/// - "<path>": one custom list serving as both
fn load_dictionary(wordlist_mode: &str) -> Result<Dictionary> {
    match wordlist_mode {
        "embedded" => Ok(Dictionary::embedded()?),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to read word list {path}"))?;
            if words.is_empty() {
                bail!("Word list {path} contains no valid words");
            }
            Ok(Dictionary::from_words(words)?)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let log_target = match (&command, cli.log_file) {
        (_, Some(path)) => LogTarget::File(path),
        (Commands::Play, None) => LogTarget::Disabled,
        (_, None) => LogTarget::Stderr,
    };
    logging::init(cli.verbose, log_target)?;

    let config = GameConfig::default()
        .with_max_guesses(cli.max_guesses)
        .with_seed(cli.seed);

    match command {
        Commands::Play => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            run_play_command(&dictionary, config)
        }
        Commands::Score { guess, secret } => {
            let result = score_guess(&guess, &secret)?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Simulate { games } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            run_simulate_command(&dictionary, config, games);
            Ok(())
        }
    }
}

fn run_simulate_command(dictionary: &Dictionary, config: GameConfig, games: usize) {
    println!(
        "Simulating {games} games over {} answers...",
        dictionary.answers().len()
    );
    let result = run_simulation(dictionary, config, games);
    print_simulation_result(&result);
}

fn run_play_command(dictionary: &Dictionary, config: GameConfig) -> Result<()> {
    use wordle_tiles::interactive::{App, run_tui};

    let app = App::new(GameEngine::new(dictionary, config));
    run_tui(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_guesses_is_bounded() {
        let cli = Cli::try_parse_from(["wordle_tiles", "--max-guesses", "8"]).unwrap();
        assert_eq!(cli.max_guesses, 8);

        assert!(Cli::try_parse_from(["wordle_tiles", "--max-guesses", "0"]).is_err());
        assert!(Cli::try_parse_from(["wordle_tiles", "--max-guesses", "30000"]).is_err());
    }

    #[test]
    fn defaults_to_six_guesses() {
        let cli = Cli::try_parse_from(["wordle_tiles", "simulate", "-n", "5"]).unwrap();
        assert_eq!(cli.max_guesses, DEFAULT_MAX_GUESSES);
        assert!(matches!(cli.command, Some(Commands::Simulate { games: 5 })));
    }
}
