use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum QuizError {
    #[error("Failed to load questions")]
    LoadFailure,
    #[error("Not enough questions to start a round ({available} available, {required} needed)")]
    InsufficientQuestions { available: usize, required: usize },
    #[error("{0}")]
    InvalidPhase(&'static str),
}

pub type QuizResult<T> = Result<T, QuizError>;
