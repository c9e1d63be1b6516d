use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct RawQuizItem {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizItem {
    pub question: String,
    pub answer: String,
}

impl QuizItem {
    pub fn new<Q: Into<String>, A: AsRef<str>>(question: Q, answer: A) -> Self {
        QuizItem {
            question: question.into(),
            answer: answer.as_ref().trim().to_owned(),
        }
    }

    pub fn is_answer_correct(&self, response: &str) -> bool {
        self.answer == response
    }
}

impl From<RawQuizItem> for QuizItem {
    fn from(raw_item: RawQuizItem) -> Self {
        QuizItem::new(raw_item.question, raw_item.answer)
    }
}
