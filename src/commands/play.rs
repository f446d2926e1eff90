//! Interactive play loop
//!
//! Menu-driven rounds: draw letters, read the player's word, then show how it
//! compares with the best word available.

use super::rate::{RoundError, rate_word};
use crate::engine::{DrawSource, Engine};
use crate::output::display::{write_round_error, write_round_result};
use std::io::{self, BufRead, Write};
use tracing::info;

/// Configuration for a play session
#[derive(Debug, Clone, Copy)]
pub struct PlayConfig {
    /// Letters drawn per round
    pub letters_count: usize,
    /// Search each word length on its own rayon task
    pub parallel: bool,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(letters_count: usize) -> Self {
        Self {
            letters_count,
            parallel: false,
        }
    }
}

/// Counters for a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayStats {
    /// Rounds that reached a score
    pub rounds_scored: usize,
    /// Rounds where the word was rejected
    pub rounds_rejected: usize,
}

/// Menu choices
enum MenuCommand {
    Play,
    Quit,
}

impl MenuCommand {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().to_uppercase().as_str() {
            "P" | "PLAY" => Some(Self::Play),
            "Q" | "QUIT" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Run the play loop until the player quits or input ends
///
/// A rejected word ends that round and returns to the menu. Engine failures
/// are reported the same way so one bad draw does not end the session.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<D, R, W>(
    engine: &Engine,
    draw: &mut D,
    config: PlayConfig,
    input: &mut R,
    out: &mut W,
) -> io::Result<PlayStats>
where
    D: DrawSource + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut stats = PlayStats::default();

    loop {
        let Some(command) = prompt(input, out, "\n\nScrabble Game Options: [P]lay, [Q]uit : ")?
        else {
            break;
        };

        match MenuCommand::parse(&command) {
            Some(MenuCommand::Play) => {}
            Some(MenuCommand::Quit) => break,
            None => continue,
        }

        let letters = draw.draw(config.letters_count);
        writeln!(out, "Letters drawn: {letters}")?;

        let Some(word) = prompt(input, out, "Form a valid word: ")? else {
            break;
        };

        match rate_word(engine, letters, &word, config.parallel) {
            Ok(result) => {
                stats.rounds_scored += 1;
                write_round_result(out, &result)?;
            }
            Err(error) => {
                if matches!(error, RoundError::Invalid(_)) {
                    stats.rounds_rejected += 1;
                }
                write_round_error(out, &error)?;
            }
        }
    }

    info!(
        scored = stats.rounds_scored,
        rejected = stats.rounds_rejected,
        "session finished"
    );
    Ok(stats)
}

/// Print a prompt and read one line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dictionary, LetterPool, ScoreTable};
    use crate::engine::FixedDraw;
    use std::io::Cursor;

    fn session(script: &str) -> (PlayStats, String) {
        let dictionary = Dictionary::new(["cat", "act", "at", "a"]);
        let scores = ScoreTable::new([('C', 3), ('A', 1), ('T', 1)]);
        let engine = Engine::new(&dictionary, &scores);
        let pool: LetterPool = "CATXXXX".parse().unwrap();
        let mut draw = FixedDraw::new(pool);

        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let stats = run_play(&engine, &mut draw, PlayConfig::new(7), &mut input, &mut out).unwrap();
        (stats, String::from_utf8(out).unwrap())
    }

    #[test]
    fn quit_immediately() {
        let (stats, out) = session("q\n");
        assert_eq!(stats, PlayStats::default());
        assert!(out.contains("[P]lay, [Q]uit"));
        assert!(!out.contains("Letters drawn"));
    }

    #[test]
    fn plays_a_round() {
        let (stats, out) = session("p\ncat\nquit\n");
        assert_eq!(stats.rounds_scored, 1);
        assert!(out.contains("Letters drawn: C, A, T, X, X, X, X"));
        assert!(out.contains("Form a valid word: "));
        assert!(out.contains("cat"));
        assert!(out.contains("CAT"));
        assert!(out.contains("100.0"));
    }

    #[test]
    fn rejected_word_returns_to_menu() {
        let (stats, out) = session("PLAY\ndog\np\nat\nq\n");
        assert_eq!(stats.rounds_rejected, 1);
        assert_eq!(stats.rounds_scored, 1);
        assert!(out.contains("Not a valid word combination!"));
        assert!(out.contains("40.0"));
    }

    #[test]
    fn unknown_commands_reprompt() {
        let (stats, out) = session("x\nhelp\nq\n");
        assert_eq!(stats, PlayStats::default());
        assert_eq!(out.matches("[P]lay, [Q]uit").count(), 3);
    }

    #[test]
    fn end_of_input_stops() {
        let (stats, _) = session("p\n");
        assert_eq!(stats, PlayStats::default());

        let (stats, _) = session("");
        assert_eq!(stats, PlayStats::default());
    }
}
