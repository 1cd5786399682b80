use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;
use tracing::warn;

use crate::game::quiz::definition::Verdict;
use crate::output::{GameOutput, Message};


const PROGRESS_BAR_WIDTH: usize = 20;

#[derive(Clone, Debug)]
pub struct TerminalOutput {
    category_labels: Arc<HashMap<i64, String>>,
}

impl TerminalOutput {
    pub fn new(category_labels: HashMap<i64, String>) -> Self {
        TerminalOutput {
            category_labels: Arc::new(category_labels),
        }
    }

    fn get_category_label(&self, category: i64) -> String {
        self.category_labels
            .get(&category)
            .cloned()
            .unwrap_or_else(|| "Unknown".to_owned())
    }

    fn interpret_message(&self, message: &Message) -> String {
        use Message::*;
        match message {
            QuizRules { pool_size, round_size } => format!(
                "🤖 AI or not? {} statements loaded, {} per round.\n\
                 For each statement, decide whether it was written by an AI.\n\
                 Commands: `ai`, `not`, `next`, `restart`, `help`, `quit`",
                pool_size, round_size
            ),
            LoadFailed => "❗ Failed to load questions.".into(),
            NotEnoughQuestions { available, required } => format!(
                "❗ Not enough questions to start a new round of {} ({} available).",
                required, available
            ),
            QuestionBegins { number, total, question } => format!(
                "\n[{}/{}] Category: {}\n{}\nAI or not?",
                number,
                total,
                self.get_category_label(question.category),
                question.prompt
            ),
            AnswerFeedback { is_correct, expected, feedback } => {
                let verdict = match expected {
                    Verdict::Ai => "AI",
                    Verdict::NotAi => "NOT AI",
                };
                let mut text = if *is_correct {
                    format!("✅ Correct! It was {}.", verdict)
                } else {
                    format!("❌ Incorrect. It was {}.", verdict)
                };
                if let Some(feedback) = feedback {
                    text += &format!("\n{}", feedback);
                }
                text
            }
            Progress(progress) => {
                let filled = progress.percentage() * PROGRESS_BAR_WIDTH / 100;
                format!(
                    "[{}{}] Points: {}",
                    "#".repeat(filled),
                    "-".repeat(PROGRESS_BAR_WIDTH - filled),
                    progress.score
                )
            }
            RoundResults(summary) => format!(
                "\n🏁 Final score: {}/{}\n{}\nType `restart` to play again.",
                summary.score,
                summary.total,
                summary.description()
            ),
        }
    }
}

impl GameOutput for TerminalOutput {
    fn say(&self, message: &Message) {
        let text = self.interpret_message(message);
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = writeln!(handle, "{}", text).and_then(|_| handle.flush()) {
            warn!(error = %e, "Could not write to terminal");
        }
    }
}
