use std::time::Duration;

pub const DEFAULT_ROUND_SIZE: usize = 10;
pub const DEFAULT_AUTO_ADVANCE: Duration = Duration::from_millis(1500);

/// What happens once an answer's feedback is on screen.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FeedbackPolicy {
    /// Stay on the feedback until the player asks for the next question.
    Manual,
    /// Move on by itself once the delay has elapsed.
    Timed(Duration),
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub round_size: usize,
    pub feedback: FeedbackPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            round_size: DEFAULT_ROUND_SIZE,
            feedback: FeedbackPolicy::Manual,
        }
    }
}
