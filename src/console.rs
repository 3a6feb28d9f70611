//! Terminal side of the table: prompts on one stream, hands and
//! announcements on another (both normally stdout).

use std::io::{self, BufRead, Write};

use blackjack::{DecisionSource, Hand, HandView, TableDisplay, TableEvent};

use crate::error::AppError;

pub const BANNER: &str = "\t\tWelcome to Blackjack\n\n";

fn first_char(answer: &str) -> Option<char> {
    answer.trim_start().chars().next()
}

fn is_yes(answer: &str) -> bool {
    matches!(first_char(answer), Some('y' | 'Y'))
}

fn is_no(answer: &str) -> bool {
    matches!(first_char(answer), Some('n' | 'N'))
}

/// Reads answers line by line, writing each question first
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn banner(&mut self) -> io::Result<()> {
        self.output.write_all(BANNER.as_bytes())?;
        self.output.flush()
    }

    /// Asks `question` and returns the reply without its line ending.
    /// `None` once the input is exhausted.
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        self.output.write_all(question.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Re-asks until the reply is a number in `min..=max`
    pub fn ask_player_count(&mut self, min: usize, max: usize) -> Result<usize, AppError> {
        let question = format!("How many players? ({min}-{max}): ");
        loop {
            let answer = self.ask(&question)?.ok_or(AppError::InputClosed)?;
            match answer.trim().parse::<usize>() {
                Ok(count) if (min..=max).contains(&count) => return Ok(count),
                _ => log::debug!("Rejected player count {answer:?}"),
            }
        }
    }

    /// First word of the reply; blank replies are asked again
    pub fn ask_player_name(&mut self) -> Result<String, AppError> {
        loop {
            let answer = self.ask("Enter player name: ")?.ok_or(AppError::InputClosed)?;
            if let Some(name) = answer.split_whitespace().next() {
                return Ok(name.to_string());
            }
        }
    }

    /// Anything but an answer starting with `n` keeps playing; end of input stops
    pub fn ask_play_again(&mut self) -> Result<bool, AppError> {
        match self.ask("\nDo you want to play again? (Y/N): ")? {
            Some(answer) => Ok(!is_no(&answer)),
            None => Ok(false),
        }
    }
}

impl<R: BufRead, W: Write> DecisionSource for Prompter<R, W> {
    fn wants_hit(&mut self, name: &str, _hand: &Hand) -> bool {
        match self.ask(&format!("{name}, do you want another hit?(y/n): \n")) {
            Ok(Some(answer)) => is_yes(&answer),
            Ok(None) => false,
            Err(err) => {
                log::warn!("Could not read a decision for {name}: {err}");
                false
            }
        }
    }
}

/// Writes hands and announcements, one per line.
///
/// `TableDisplay` cannot fail, so the first write error is kept and handed
/// back by [`ConsoleDisplay::finish_round`].
pub struct ConsoleDisplay<W> {
    output: W,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn new(output: W) -> Self {
        Self {
            output,
            error: None,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn line(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.output, "{text}") {
            self.error = Some(err);
        }
    }

    pub fn finish_round(&mut self) -> io::Result<()> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.output.flush()
    }
}

impl<W: Write> TableDisplay for ConsoleDisplay<W> {
    fn show_hand(&mut self, view: &HandView) {
        self.line(&view.to_string());
    }

    fn announce(&mut self, event: &TableEvent) {
        self.line(&event.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack::{Card, Rank, Suit};
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn test_player_count_reprompts_until_valid() {
        let mut p = prompter("abc\n0\n8\n3\n");
        assert_eq!(p.ask_player_count(1, 7).unwrap(), 3);
        assert_eq!(written(p).matches("How many players? (1-7): ").count(), 4);
    }

    #[test]
    fn test_player_count_input_closed() {
        let mut p = prompter("9\n");
        assert!(matches!(p.ask_player_count(1, 7), Err(AppError::InputClosed)));
    }

    #[test]
    fn test_player_name_takes_first_word() {
        let mut p = prompter("\n  Ann Smith\n");
        assert_eq!(p.ask_player_name().unwrap(), "Ann");
        assert_eq!(written(p).matches("Enter player name: ").count(), 2);
    }

    #[test]
    fn test_hit_decision_tokens() {
        let mut p = prompter("y\nYes\n  y\nn\nmaybe\n\n");
        let hand = Hand::new();
        assert!(p.wants_hit("Ann", &hand));
        assert!(p.wants_hit("Ann", &hand));
        assert!(p.wants_hit("Ann", &hand));
        assert!(!p.wants_hit("Ann", &hand));
        assert!(!p.wants_hit("Ann", &hand));
        assert!(!p.wants_hit("Ann", &hand));
        // end of input stands
        assert!(!p.wants_hit("Ann", &hand));
        assert!(written(p).starts_with("Ann, do you want another hit?(y/n): \n"));
    }

    #[test]
    fn test_play_again_tokens() {
        let mut p = prompter("y\n\nwhatever\nN\n");
        assert!(p.ask_play_again().unwrap());
        assert!(p.ask_play_again().unwrap());
        assert!(p.ask_play_again().unwrap());
        assert!(!p.ask_play_again().unwrap());
        assert!(!p.ask_play_again().unwrap());
    }

    #[test]
    fn test_display_writes_lines() {
        let mut display = ConsoleDisplay::new(Vec::new());
        let hand = Hand::from_cards(vec![
            Card::new(Rank::Ace, Suit::Clubs),
            Card::new(Rank::Queen, Suit::Diamonds),
        ]);
        display.show_hand(&HandView::new("Ann", &hand));
        display.show_hand(&HandView::new("Bob", &Hand::new()));
        display.announce(&TableEvent::Win {
            name: "Ann".to_string(),
        });
        display.finish_round().unwrap();

        let out = String::from_utf8(display.into_output()).unwrap();
        assert_eq!(out, "Ann: \tAc\tQd\t(21)\nBob: \t<empty>\nAnn wins!\n");
    }

    /// Accepts one write, then fails every write after it
    struct BrokenPipe {
        writes: usize,
    }

    impl Write for BrokenPipe {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            if self.writes > 1 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_display_write_error_reported_at_round_end() {
        let mut display = ConsoleDisplay::new(BrokenPipe { writes: 0 });
        display.announce(&TableEvent::OutOfCards);
        display.announce(&TableEvent::OutOfCards);
        display.announce(&TableEvent::OutOfCards);

        let err = display.finish_round().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        // the failed write stops further output
        assert_eq!(display.output.writes, 2);
        // reported once, then the display is usable again
        assert!(display.finish_round().is_ok());
    }

    #[test]
    fn test_banner() {
        let mut p = prompter("");
        p.banner().unwrap();
        assert_eq!(written(p), BANNER);
    }
}
