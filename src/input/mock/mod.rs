use std::io;
use std::sync::mpsc::{channel, Receiver, Sender};

use crate::input::AnswerSource;

/// Answers typed by a simulated player. Reads block until the test sends a
/// response; dropping the sender makes every pending and future read fail.
pub struct MockAnswers {
    responses: Receiver<String>,
}

impl MockAnswers {
    pub fn pair() -> (Sender<String>, Self) {
        let (sender, responses) = channel();
        (sender, MockAnswers { responses })
    }

    pub fn with_responses(responses: &[&str]) -> (Sender<String>, Self) {
        let (sender, answers) = MockAnswers::pair();
        for response in responses {
            sender.send(response.to_string()).unwrap();
        }
        (sender, answers)
    }
}

impl AnswerSource for MockAnswers {
    fn read_answer(&mut self) -> io::Result<String> {
        self.responses
            .recv()
            .map_err(|e| io::Error::new(io::ErrorKind::BrokenPipe, e))
    }
}
