use std::io;

use blackjack::TableRules;
use clap::Parser;

mod console;
mod error;
mod session;

use console::{ConsoleDisplay, Prompter};
use error::AppError;
use session::SessionOptions;

#[derive(Parser, Debug)]
#[command(name = "blackjack", about = "Console blackjack against the House")]
struct Cli {
    /// Shuffle seed for a repeatable session
    #[arg(long, env = "BLACKJACK_SEED")]
    seed: Option<u64>,

    /// Comma-separated player names (1-7); skips the setup prompts
    #[arg(long, value_delimiter = ',')]
    players: Option<Vec<String>>,

    /// Repopulate and reshuffle the deck before a round when fewer cards remain
    #[arg(long, env = "BLACKJACK_RESHUFFLE_BELOW")]
    reshuffle_below: Option<usize>,

    /// Name shown for the dealer
    #[arg(long, default_value = "House")]
    house_name: String,
}

impl Cli {
    fn into_options(self) -> SessionOptions {
        let players = self.players.map(|names| {
            names
                .into_iter()
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty())
                .collect()
        });

        SessionOptions {
            players,
            seed: self.seed,
            rules: TableRules {
                house_name: self.house_name,
                reshuffle_below: self.reshuffle_below,
                ..TableRules::default()
            },
        }
    }
}

fn run(cli: Cli) -> Result<u32, AppError> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let mut display = ConsoleDisplay::new(io::stdout());
    session::run(&mut prompter, &mut display, cli.into_options())
}

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("{cli:?}");

    match run(cli) {
        Ok(rounds) => log::info!("Played {rounds} round(s)"),
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_players_and_rules() {
        let cli = Cli::try_parse_from([
            "blackjack",
            "--players",
            "Ann, Bob,,Cy",
            "--seed",
            "7",
            "--reshuffle-below",
            "20",
        ])
        .unwrap();
        let options = cli.into_options();

        assert_eq!(
            options.players,
            Some(vec!["Ann".to_string(), "Bob".to_string(), "Cy".to_string()])
        );
        assert_eq!(options.seed, Some(7));
        assert_eq!(options.rules.reshuffle_below, Some(20));
        assert_eq!(options.rules.house_name, "House");
        assert_eq!(options.rules.max_players, 7);
    }

    #[test]
    fn test_cli_defaults_prompt_for_players() {
        let cli = Cli::try_parse_from(["blackjack", "--house-name", "Dealer"]).unwrap();
        let options = cli.into_options();
        assert_eq!(options.players, None);
        assert_eq!(options.rules.house_name, "Dealer");
    }
}
