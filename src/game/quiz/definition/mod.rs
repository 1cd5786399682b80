use anyhow::{Context, Result};
use csv::StringRecord;
use itertools::Itertools;
use std::convert::TryFrom;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub mod question;

pub use question::{Layout, Question, RawQuestion, Verdict};


/// The pool of questions rounds are drawn from.
#[derive(Clone, Debug, Default)]
pub struct QuizDefinition {
    questions: Vec<Question>,
}

impl QuizDefinition {
    pub fn open(source: &Path, layout: Layout) -> Result<QuizDefinition> {
        let raw_bytes = fs::read(source)
            .with_context(|| format!("Could not read questions from {:?}", source))?;
        let definition = QuizDefinition::parse_bytes(&raw_bytes, layout);
        info!(
            path = %source.display(),
            questions = definition.len(),
            "Parsed question file"
        );
        Ok(definition)
    }

    /// Parses semicolon-delimited question lines. Malformed lines are skipped.
    pub fn parse(raw_text: &str, layout: Layout) -> QuizDefinition {
        QuizDefinition::parse_bytes(raw_text.as_bytes(), layout)
    }

    /// Like `parse`, but a line that is not valid UTF-8 only costs that line.
    pub fn parse_bytes(raw_bytes: &[u8], layout: Layout) -> QuizDefinition {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::All)
            .from_reader(raw_bytes);

        let mut questions = Vec::new();
        for record in csv_reader.byte_records() {
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    debug!(error = %e, "Skipping unreadable question line");
                    continue;
                }
            };
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let record = match StringRecord::from_byte_record(record) {
                Ok(record) => record,
                Err(e) => {
                    debug!(line, error = %e, "Skipping question line with invalid UTF-8");
                    continue;
                }
            };
            let question = RawQuestion::from_record(&record, layout).and_then(Question::try_from);
            match question {
                Ok(question) => questions.push(question),
                Err(e) => debug!(line, error = %e, "Skipping malformed question line"),
            }
        }

        QuizDefinition { questions }
    }

    pub fn get_questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn categories(&self) -> Vec<i64> {
        self.questions
            .iter()
            .map(|q| q.category)
            .unique()
            .sorted()
            .collect()
    }
}

impl From<Vec<Question>> for QuizDefinition {
    fn from(questions: Vec<Question>) -> Self {
        QuizDefinition { questions }
    }
}
