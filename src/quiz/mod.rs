use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use self::deadline::Deadline;
use self::definition::QuizDefinition;
use self::session::{InputHandle, Session, SessionResult};
use crate::input::AnswerSource;
use crate::output::{Message, QuizOutput};

pub mod deadline;
pub mod definition;
pub mod session;


pub struct Quiz<I, O> {
    definition: QuizDefinition,
    time_limit: Duration,
    input: InputHandle<I>,
    output: O,
}

impl<I: AnswerSource, O: QuizOutput> Quiz<I, O> {
    pub fn new(definition: QuizDefinition, time_limit: Duration, input: I, output: O) -> Self {
        Quiz {
            definition,
            time_limit,
            input: Arc::new(Mutex::new(input)),
            output,
        }
    }

    /// Runs a whole session and reports the score against every loaded item,
    /// including the ones time did not allow to be asked.
    pub fn run(&self) -> SessionResult {
        info!(
            "Entering session: {} questions, {:?} time limit",
            self.definition.len(),
            self.time_limit
        );
        let deadline = Deadline::after(self.time_limit);
        let session = Session::new(
            self.definition.get_items(),
            Arc::clone(&self.input),
            &self.output,
        );
        let result = session.run(&deadline);
        info!(
            "Session over: {} correct out of {} presented",
            result.score, result.presented
        );

        self.output.say(&Message::Score {
            score: result.score,
            total: self.definition.len(),
        });
        result
    }
}
