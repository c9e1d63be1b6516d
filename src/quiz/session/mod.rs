use parking_lot::Mutex;
use std::io;
use std::sync::mpsc::{sync_channel, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use tracing::{debug, info, warn};

use crate::input::AnswerSource;
use crate::output::{Message, QuizOutput};
use crate::quiz::deadline::Deadline;
use crate::quiz::definition::QuizItem;


pub type InputHandle<I> = Arc<Mutex<I>>;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SessionResult {
    pub score: usize,
    pub presented: usize,
}

#[derive(Debug, Eq, PartialEq)]
enum Race {
    Answered(String),
    TimedOut,
}

/// Asks questions one at a time until every item is answered or the deadline
/// passes, whichever comes first.
pub struct Session<'a, I, O> {
    items: &'a [QuizItem],
    input: InputHandle<I>,
    output: &'a O,
}

impl<'a, I: AnswerSource, O: QuizOutput> Session<'a, I, O> {
    pub fn new(items: &'a [QuizItem], input: InputHandle<I>, output: &'a O) -> Self {
        Session {
            items,
            input,
            output,
        }
    }

    pub fn run(&self, deadline: &Deadline) -> SessionResult {
        let mut result = SessionResult::default();

        for (index, item) in self.items.iter().enumerate() {
            if deadline.has_passed() {
                info!("Time is up before question {}", index);
                break;
            }

            debug!("Presenting question {}: {}", index, item.question);
            self.output.say(&Message::Question(item.question.clone()));
            result.presented += 1;

            match self.race(deadline) {
                Race::Answered(response) => {
                    if item.is_answer_correct(&response) {
                        result.score += 1;
                    }
                }
                Race::TimedOut => {
                    info!("Time is up while waiting on question {}", index);
                    self.output.say(&Message::TimeUp);
                    break;
                }
            }
        }

        result
    }

    /// Reads the next response on a detached thread and waits for it until the
    /// deadline. Every question gets its own channel, so a read that loses the
    /// race can never be attributed to a later question.
    fn race(&self, deadline: &Deadline) -> Race {
        let (sender, receiver) = sync_channel::<io::Result<String>>(1);
        let input = Arc::clone(&self.input);
        let spawned = thread::Builder::new()
            .name("answer-reader".to_owned())
            .spawn(move || {
                let answer = input.lock().read_answer();
                // Capacity 1 never blocks; the send only fails if the session gave up on us
                sender.send(answer).ok();
            });
        if let Err(e) = spawned {
            warn!("Could not start answer reader: {}", e);
            return Race::Answered(String::new());
        }

        match receiver.recv_timeout(deadline.remaining()) {
            Ok(Ok(response)) => Race::Answered(response),
            Ok(Err(e)) => {
                warn!("Could not read answer: {}", e);
                Race::Answered(String::new())
            }
            Err(RecvTimeoutError::Timeout) => Race::TimedOut,
            Err(RecvTimeoutError::Disconnected) => {
                warn!("Answer reader stopped without responding");
                Race::Answered(String::new())
            }
        }
    }
}
