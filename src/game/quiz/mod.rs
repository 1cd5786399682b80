use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;
use tracing::{debug, info};

use self::definition::{Question, Verdict};
use self::phase::*;
use self::score::{Progress, Summary};
use self::settings::Settings;
use crate::game::error::{QuizError, QuizResult};
use crate::output::{GameOutput, Message};

pub mod definition;
mod phase;
pub mod score;
pub mod settings;

pub use self::phase::AnswerResult;


trait State {
    fn on_begin(&mut self);
    fn on_tick(&mut self, dt: Duration);
    fn on_end(&mut self);
    fn is_over(&self) -> bool;
}

enum Phase<O> {
    Question(QuestionState<O>),
    Feedback(FeedbackState<O>),
    Results(ResultsState<O>),
}

impl<O: GameOutput> Phase<O> {
    fn get_state(&mut self) -> &mut dyn State {
        match self {
            Phase::Question(s) => s,
            Phase::Feedback(s) => s,
            Phase::Results(s) => s,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Phase::Question(_) => "question",
            Phase::Feedback(_) => "feedback",
            Phase::Results(_) => "results",
        }
    }
}

/// One round: a fixed selection of questions, the answers given so far and the score.
pub struct Quiz<O> {
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
    settings: Settings,
    current_phase: Phase<O>,
    output: O,
}

impl<O: GameOutput> Quiz<O> {
    pub fn new<R: Rng + ?Sized>(
        pool: &[Question],
        settings: Settings,
        output: O,
        rng: &mut R,
    ) -> QuizResult<Quiz<O>> {
        let required = settings.round_size.max(1);
        if pool.len() < required {
            return Err(QuizError::InsufficientQuestions {
                available: pool.len(),
                required,
            });
        }

        let mut questions = pool.to_vec();
        questions.shuffle(rng);
        questions.truncate(required);

        let first_question = QuestionState::new(questions[0].clone(), 1, required, output.clone());
        let mut quiz = Quiz {
            questions,
            current_index: 0,
            score: 0,
            settings,
            current_phase: Phase::Question(first_question),
            output,
        };
        info!(round_size = required, "Starting round");
        quiz.output.say(&Message::Progress(quiz.progress()));
        quiz.current_phase.get_state().on_begin();
        Ok(quiz)
    }

    pub fn is_over(&self) -> bool {
        match self.current_phase {
            Phase::Results(_) => true,
            _ => false,
        }
    }

    pub fn is_awaiting_answer(&self) -> bool {
        match self.current_phase {
            Phase::Question(_) => true,
            _ => false,
        }
    }

    pub fn is_showing_feedback(&self) -> bool {
        match self.current_phase {
            Phase::Feedback(_) => true,
            _ => false,
        }
    }

    pub fn get_questions(&self) -> &[Question] {
        &self.questions
    }

    /// The question on screen: the one awaiting an answer, or the one whose feedback is showing.
    pub fn current_question(&self) -> QuizResult<&Question> {
        match &self.current_phase {
            Phase::Question(s) => Ok(s.question()),
            Phase::Feedback(s) => Ok(s.question()),
            Phase::Results(_) => Err(QuizError::InvalidPhase("The round is over")),
        }
    }

    pub fn progress(&self) -> Progress {
        Progress {
            answered: self.current_index,
            total: self.questions.len(),
            score: self.score,
        }
    }

    pub fn summary(&self) -> QuizResult<Summary> {
        match &self.current_phase {
            Phase::Results(s) => Ok(s.summary()),
            _ => Err(QuizError::InvalidPhase("The round is not over yet")),
        }
    }

    pub fn submit_answer(&mut self, choice: Verdict) -> QuizResult<AnswerResult> {
        let result = match &mut self.current_phase {
            Phase::Question(s) => s.answer(choice)?,
            _ => {
                return Err(QuizError::InvalidPhase(
                    "There is no question waiting for an answer",
                ))
            }
        };
        if result.is_correct {
            self.score += 1;
        }
        self.current_index += 1;
        self.next_phase();
        Ok(result)
    }

    pub fn advance(&mut self) -> QuizResult<()> {
        match &mut self.current_phase {
            Phase::Feedback(s) => s.dismiss(),
            _ => return Err(QuizError::InvalidPhase("There is no feedback to move past")),
        };
        self.next_phase();
        Ok(())
    }

    pub fn tick(&mut self, dt: Duration) {
        let state = self.current_phase.get_state();
        state.on_tick(dt);
        if state.is_over() {
            self.next_phase();
        }
    }

    fn set_current_phase(&mut self, phase: Phase<O>) {
        self.current_phase.get_state().on_end();
        debug!(
            from = self.current_phase.name(),
            to = phase.name(),
            "Entering round phase"
        );
        self.current_phase = phase;
        self.current_phase.get_state().on_begin();
    }

    fn next_phase(&mut self) {
        let phase = match &self.current_phase {
            Phase::Question(s) => match s.result() {
                Some(result) => Phase::Feedback(FeedbackState::new(
                    s.question().clone(),
                    result,
                    self.progress(),
                    self.settings.feedback,
                    self.output.clone(),
                )),
                None => return,
            },
            Phase::Feedback(_) => {
                if self.current_index >= self.questions.len() {
                    let summary = Summary::new(self.score, self.questions.len());
                    Phase::Results(ResultsState::new(summary, self.output.clone()))
                } else {
                    Phase::Question(QuestionState::new(
                        self.questions[self.current_index].clone(),
                        self.current_index + 1,
                        self.questions.len(),
                        self.output.clone(),
                    ))
                }
            }
            Phase::Results(_) => return,
        };
        self.set_current_phase(phase);
    }
}
