use std::fmt;
use std::io::{self, Write};
use tracing::warn;

#[cfg(test)]
pub mod mock;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    Question(String),
    TimeUp,
    Score { score: usize, total: usize },
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Message::*;
        match self {
            Question(question) => write!(f, "{}? ", question),
            TimeUp => writeln!(f),
            Score { score, total } => writeln!(f, "Your score is {}/{}", score, total),
        }
    }
}

pub trait QuizOutput {
    fn say(&self, message: &Message);
}

#[derive(Clone, Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    fn write(&self, message: &Message) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write!(handle, "{}", message)?;
        handle.flush()
    }
}

impl QuizOutput for TerminalOutput {
    fn say(&self, message: &Message) {
        if let Err(e) = self.write(message) {
            warn!("Could not write to terminal: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_is_a_prompt_without_newline() {
        let message = Message::Question("2+2".to_owned());
        assert_eq!(message.to_string(), "2+2? ");
    }

    #[test]
    fn score_is_a_full_line() {
        let message = Message::Score { score: 1, total: 2 };
        assert_eq!(message.to_string(), "Your score is 1/2\n");
    }

    #[test]
    fn time_up_ends_the_prompt_line() {
        assert_eq!(Message::TimeUp.to_string(), "\n");
    }
}
