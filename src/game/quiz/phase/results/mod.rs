use std::time::Duration;
use tracing::info;

use crate::game::quiz::score::Summary;
use crate::game::quiz::State;
use crate::output::{GameOutput, Message};


#[derive(Debug)]
pub struct ResultsState<O> {
    summary: Summary,
    output: O,
}

impl<O> ResultsState<O> {
    pub fn new(summary: Summary, output: O) -> Self {
        ResultsState { summary, output }
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }
}

impl<O: GameOutput> State for ResultsState<O> {
    fn on_tick(&mut self, _dt: Duration) {}

    fn on_begin(&mut self) {
        info!(
            score = self.summary.score,
            total = self.summary.total,
            rating = ?self.summary.rating,
            "Round complete"
        );
        self.output.say(&Message::RoundResults(self.summary));
    }

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        false
    }
}
