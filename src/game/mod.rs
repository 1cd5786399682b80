use anyhow::Result;
use rand::Rng;
use std::path::Path;
use std::time::Duration;
use tracing::{error, info, warn};

pub mod error;
pub mod quiz;

use crate::game::error::{QuizError, QuizResult};
use crate::game::quiz::definition::{Layout, Question, QuizDefinition, Verdict};
use crate::game::quiz::score::{Progress, Summary};
use crate::game::quiz::settings::Settings;
use crate::game::quiz::{AnswerResult, Quiz};
use crate::output::{GameOutput, Message};


enum Phase<O> {
    NotLoaded,
    Ready,
    Round(Quiz<O>),
}

impl<O> Phase<O> {
    fn name(&self) -> &'static str {
        match self {
            Phase::NotLoaded => "not loaded",
            Phase::Ready => "ready",
            Phase::Round(_) => "round",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GameState {
    NotLoaded,
    Ready,
    AwaitingAnswer,
    ShowingFeedback,
    RoundComplete,
}

pub struct Game<O> {
    definition: QuizDefinition,
    settings: Settings,
    current_phase: Phase<O>,
    output: O,
}

impl<O: GameOutput> Game<O> {
    pub fn new(settings: Settings, output: O) -> Game<O> {
        Game {
            definition: QuizDefinition::default(),
            settings,
            current_phase: Phase::NotLoaded,
            output,
        }
    }

    fn set_current_phase(&mut self, phase: Phase<O>) {
        info!(
            from = self.current_phase.name(),
            to = phase.name(),
            "Entering game phase"
        );
        self.current_phase = phase;
    }

    pub fn open(&mut self, path: &Path, layout: Layout) -> Result<()> {
        match QuizDefinition::open(path, layout) {
            Ok(definition) => {
                self.load(definition)?;
                Ok(())
            }
            Err(e) => {
                let reason = format!("{:#}", e);
                error!(error = %reason, "Could not load questions");
                self.unload();
                Err(e)
            }
        }
    }

    pub fn load(&mut self, definition: QuizDefinition) -> QuizResult<()> {
        if definition.is_empty() {
            warn!("Question pool is empty");
            self.unload();
            return Err(QuizError::LoadFailure);
        }

        info!(
            questions = definition.len(),
            categories = ?definition.categories(),
            "Question pool loaded"
        );
        self.definition = definition;
        self.set_current_phase(Phase::Ready);
        self.show_rules();
        Ok(())
    }

    fn unload(&mut self) {
        self.definition = QuizDefinition::default();
        self.set_current_phase(Phase::NotLoaded);
        self.output.say(&Message::LoadFailed);
    }

    pub fn show_rules(&self) {
        match self.current_phase {
            Phase::NotLoaded => self.output.say(&Message::LoadFailed),
            _ => self.output.say(&Message::QuizRules {
                pool_size: self.definition.len(),
                round_size: self.settings.round_size,
            }),
        }
    }

    pub fn start_round(&mut self) -> QuizResult<()> {
        self.start_round_with_rng(&mut rand::thread_rng())
    }

    /// Draws a new round. A round already in progress is replaced, along with any pending feedback timer.
    pub fn start_round_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> QuizResult<()> {
        if let Phase::NotLoaded = self.current_phase {
            self.output.say(&Message::LoadFailed);
            return Err(QuizError::LoadFailure);
        }

        let quiz = Quiz::new(
            self.definition.get_questions(),
            self.settings.clone(),
            self.output.clone(),
            rng,
        );
        match quiz {
            Ok(quiz) => {
                self.set_current_phase(Phase::Round(quiz));
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Could not start round");
                if let QuizError::InsufficientQuestions {
                    available,
                    required,
                } = e
                {
                    self.output.say(&Message::NotEnoughQuestions {
                        available,
                        required,
                    });
                }
                Err(e)
            }
        }
    }

    pub fn submit_answer(&mut self, choice: Verdict) -> QuizResult<AnswerResult> {
        self.get_quiz_mut()?.submit_answer(choice)
    }

    pub fn advance(&mut self) -> QuizResult<()> {
        self.get_quiz_mut()?.advance()
    }

    pub fn tick(&mut self, dt: Duration) {
        if let Phase::Round(quiz) = &mut self.current_phase {
            quiz.tick(dt);
        }
    }

    pub fn present_current(&self) -> QuizResult<&Question> {
        self.get_quiz()?.current_question()
    }

    pub fn progress(&self) -> QuizResult<Progress> {
        Ok(self.get_quiz()?.progress())
    }

    pub fn summary(&self) -> QuizResult<Summary> {
        self.get_quiz()?.summary()
    }

    pub fn get_definition(&self) -> &QuizDefinition {
        &self.definition
    }

    pub fn get_state(&self) -> GameState {
        match &self.current_phase {
            Phase::NotLoaded => GameState::NotLoaded,
            Phase::Ready => GameState::Ready,
            Phase::Round(quiz) if quiz.is_over() => GameState::RoundComplete,
            Phase::Round(quiz) if quiz.is_showing_feedback() => GameState::ShowingFeedback,
            Phase::Round(_) => GameState::AwaitingAnswer,
        }
    }

    fn get_quiz(&self) -> QuizResult<&Quiz<O>> {
        match &self.current_phase {
            Phase::Round(quiz) => Ok(quiz),
            Phase::NotLoaded => Err(QuizError::InvalidPhase("No questions are loaded")),
            Phase::Ready => Err(QuizError::InvalidPhase("No round is in progress")),
        }
    }

    fn get_quiz_mut(&mut self) -> QuizResult<&mut Quiz<O>> {
        match &mut self.current_phase {
            Phase::Round(quiz) => Ok(quiz),
            Phase::NotLoaded => Err(QuizError::InvalidPhase("No questions are loaded")),
            Phase::Ready => Err(QuizError::InvalidPhase("No round is in progress")),
        }
    }
}
