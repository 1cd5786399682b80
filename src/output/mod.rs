use crate::game::quiz::definition::{Question, Verdict};
use crate::game::quiz::score::{Progress, Summary};

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    AnswerFeedback {
        is_correct: bool,
        expected: Verdict,
        feedback: Option<String>,
    },
    LoadFailed,
    NotEnoughQuestions {
        available: usize,
        required: usize,
    },
    Progress(Progress),
    QuestionBegins {
        number: usize,
        total: usize,
        question: Question,
    },
    QuizRules {
        pool_size: usize,
        round_size: usize,
    },
    RoundResults(Summary),
}

pub trait GameOutput: Clone {
    fn say(&self, message: &Message);
}
