use std::time::Duration;
use tracing::debug;

use crate::game::error::{QuizError, QuizResult};
use crate::game::quiz::definition::{Question, Verdict};
use crate::game::quiz::State;
use crate::output::{GameOutput, Message};


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnswerResult {
    pub choice: Verdict,
    pub is_correct: bool,
}

pub struct QuestionState<O> {
    question: Question,
    number: usize,
    total: usize,
    result: Option<AnswerResult>,
    output: O,
}

impl<O: GameOutput> QuestionState<O> {
    pub fn new(question: Question, number: usize, total: usize, output: O) -> Self {
        QuestionState {
            question,
            number,
            total,
            result: None,
            output,
        }
    }

    pub fn answer(&mut self, choice: Verdict) -> QuizResult<AnswerResult> {
        if self.result.is_some() {
            return Err(QuizError::InvalidPhase("This question was already answered"));
        }

        let is_correct = self.question.is_answer_correct(choice);
        debug!(number = self.number, ?choice, is_correct, "Answer submitted");
        let result = AnswerResult { choice, is_correct };
        self.result = Some(result);
        Ok(result)
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn result(&self) -> Option<AnswerResult> {
        self.result
    }
}

impl<O: GameOutput> State for QuestionState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Message::QuestionBegins {
            number: self.number,
            total: self.total,
            question: self.question.clone(),
        });
    }

    fn on_tick(&mut self, _dt: Duration) {}

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        self.result.is_some()
    }
}
