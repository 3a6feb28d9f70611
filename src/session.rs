use std::io::{BufRead, Write};

use blackjack::{Game, TableRules};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::console::{ConsoleDisplay, Prompter};
use crate::error::AppError;

/// Everything needed to open a table
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Seats to fill without asking; prompts for them when `None`
    pub players: Option<Vec<String>>,
    pub seed: Option<u64>,
    pub rules: TableRules,
}

/// Sets up the table, then plays rounds until the players stop.
/// Returns the number of rounds played.
pub fn run<R, W, D>(
    prompter: &mut Prompter<R, W>,
    display: &mut ConsoleDisplay<D>,
    options: SessionOptions,
) -> Result<u32, AppError>
where
    R: BufRead,
    W: Write,
    D: Write,
{
    prompter.banner()?;

    let names = match options.players {
        Some(names) => names,
        None => {
            let count = prompter.ask_player_count(TableRules::MIN_PLAYERS, options.rules.max_players)?;
            (0..count)
                .map(|_| prompter.ask_player_name())
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    let rng = match options.seed {
        Some(seed) => {
            log::info!("Using shuffle seed {seed}");
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };
    let mut game = Game::new(&names, options.rules, rng)?;

    loop {
        let report = game.play(prompter, display);
        display.finish_round()?;
        log::info!("{}", serde_json::to_string(&report)?);

        if !prompter.ask_play_again()? {
            break;
        }
    }

    log::info!(
        "Session over after {} round(s), {} cards left in the deck",
        game.rounds_played(),
        game.deck().remaining()
    );
    Ok(game.rounds_played())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io::{self, Cursor};
    use std::rc::Rc;

    /// Lets prompts and table output land in one transcript
    #[derive(Clone, Default)]
    struct Transcript(Rc<RefCell<Vec<u8>>>);

    impl Write for Transcript {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Transcript {
        fn text(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    fn run_with(input: &str, options: SessionOptions) -> (Result<u32, AppError>, String) {
        let transcript = Transcript::default();
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), transcript.clone());
        let mut display = ConsoleDisplay::new(transcript.clone());
        let result = run(&mut prompter, &mut display, options);
        (result, transcript.text())
    }

    fn seeded() -> SessionOptions {
        SessionOptions {
            seed: Some(42),
            ..SessionOptions::default()
        }
    }

    #[test]
    fn test_prompts_for_table_then_plays_one_round() {
        // two players, both stand, then quit
        let (result, out) = run_with("2\nAnn\nBob\nn\nn\nn\n", seeded());
        assert_eq!(result.unwrap(), 1);
        assert!(out.starts_with("\t\tWelcome to Blackjack\n\nHow many players? (1-7): "));
        assert!(out.contains("Ann: \t"));
        assert!(out.contains("Bob: \t"));
        assert!(out.contains("House: \tXX\t"));
        assert!(out.contains("Do you want to play again? (Y/N): "));
    }

    #[test]
    fn test_preset_players_skip_prompts() {
        let options = SessionOptions {
            players: Some(vec!["Ann".to_string()]),
            ..seeded()
        };
        let (result, out) = run_with("n\nn\n", options);
        assert_eq!(result.unwrap(), 1);
        assert!(!out.contains("How many players?"));
        assert!(!out.contains("Enter player name: "));
    }

    #[test]
    fn test_play_again_until_no() {
        let options = SessionOptions {
            players: Some(vec!["Ann".to_string()]),
            ..seeded()
        };
        // two cards never bust, so each round asks once for a hit and once to play again
        let (result, out) = run_with("n\ny\nn\ny\nn\nn\n", options);
        assert_eq!(result.unwrap(), 3);
        assert_eq!(out.matches("Do you want to play again?").count(), 3);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let options = SessionOptions {
            players: Some(vec!["Ann".to_string()]),
            ..seeded()
        };
        let (result, _) = run_with("", options);
        assert_eq!(result.unwrap(), 1);
    }

    #[test]
    fn test_input_closed_during_setup() {
        let (result, _) = run_with("2\nAnn\n", seeded());
        assert!(matches!(result, Err(AppError::InputClosed)));
    }

    #[test]
    fn test_too_many_preset_players() {
        let options = SessionOptions {
            players: Some((0..8).map(|i| format!("p{i}")).collect()),
            ..seeded()
        };
        let (result, _) = run_with("", options);
        assert!(matches!(
            result,
            Err(AppError::Engine(blackjack::Error::PlayerCount { count: 8, .. }))
        ));
    }

    #[test]
    fn test_same_seed_same_transcript() {
        let (_, first) = run_with("1\nAnn\ny\nn\nn\n", seeded());
        let (_, second) = run_with("1\nAnn\ny\nn\nn\n", seeded());
        assert_eq!(first, second);
    }
}
