use std::time::Duration;

use crate::game::quiz::definition::Question;
use crate::game::quiz::phase::AnswerResult;
use crate::game::quiz::score::Progress;
use crate::game::quiz::settings::FeedbackPolicy;
use crate::game::quiz::State;
use crate::output::{GameOutput, Message};

#[cfg(test)]
mod tests;

pub struct FeedbackState<O> {
    question: Question,
    result: AnswerResult,
    progress: Progress,
    policy: FeedbackPolicy,
    time_elapsed: Duration,
    dismissed: bool,
    output: O,
}

impl<O: GameOutput> FeedbackState<O> {
    pub fn new(
        question: Question,
        result: AnswerResult,
        progress: Progress,
        policy: FeedbackPolicy,
        output: O,
    ) -> Self {
        FeedbackState {
            question,
            result,
            progress,
            policy,
            time_elapsed: Duration::default(),
            dismissed: false,
            output,
        }
    }

    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    pub fn question(&self) -> &Question {
        &self.question
    }
}

impl<O: GameOutput> State for FeedbackState<O> {
    fn on_begin(&mut self) {
        let is_correct = self.result.is_correct;
        self.output.say(&Message::AnswerFeedback {
            is_correct,
            expected: self.question.expected_answer,
            feedback: self.question.feedback(is_correct).map(str::to_owned),
        });
        self.output.say(&Message::Progress(self.progress));
    }

    fn on_tick(&mut self, dt: Duration) {
        if let FeedbackPolicy::Timed(_) = self.policy {
            self.time_elapsed += dt;
        }
    }

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        if self.dismissed {
            return true;
        }
        match self.policy {
            FeedbackPolicy::Manual => false,
            FeedbackPolicy::Timed(delay) => self.time_elapsed >= delay,
        }
    }
}
