use anyhow::{anyhow, Result};
use csv::StringRecord;
use serde::Deserialize;
use std::convert::TryFrom;

/// Column layout of a question file. Layouts are never guessed from the data.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// `prompt;category;answer`
    ThreeField,
    /// `prompt;category;answer;correct feedback;incorrect feedback`
    FiveField,
}

impl Layout {
    pub fn field_count(&self) -> usize {
        match self {
            Layout::ThreeField => 3,
            Layout::FiveField => 5,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verdict {
    NotAi,
    Ai,
}

impl Verdict {
    pub fn from_flag(flag: i64) -> Option<Verdict> {
        match flag {
            0 => Some(Verdict::NotAi),
            1 => Some(Verdict::Ai),
            _ => None,
        }
    }
}

/// A question line split into columns, before any validation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawQuestion {
    pub prompt: String,
    pub category: String,
    pub answer: String,
    pub correct_feedback: Option<String>,
    pub incorrect_feedback: Option<String>,
}

impl RawQuestion {
    pub fn from_record(record: &StringRecord, layout: Layout) -> Result<RawQuestion> {
        if record.len() < layout.field_count() {
            return Err(anyhow!(
                "Expected {} fields, found {}",
                layout.field_count(),
                record.len()
            ));
        }
        let field = |index: usize| record.get(index).unwrap_or_default().to_owned();
        let (correct_feedback, incorrect_feedback) = match layout {
            Layout::ThreeField => (None, None),
            Layout::FiveField => (Some(field(3)), Some(field(4))),
        };
        Ok(RawQuestion {
            prompt: field(0),
            category: field(1),
            answer: field(2),
            correct_feedback,
            incorrect_feedback,
        })
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub prompt: String,
    pub category: i64,
    pub expected_answer: Verdict,
    pub correct_feedback: Option<String>,
    pub incorrect_feedback: Option<String>,
}

impl Question {
    pub fn is_answer_correct(&self, choice: Verdict) -> bool {
        self.expected_answer == choice
    }

    pub fn feedback(&self, is_correct: bool) -> Option<&str> {
        let feedback = if is_correct {
            &self.correct_feedback
        } else {
            &self.incorrect_feedback
        };
        feedback.as_deref().filter(|f| !f.is_empty())
    }
}

impl TryFrom<RawQuestion> for Question {
    type Error = anyhow::Error;

    fn try_from(raw_question: RawQuestion) -> Result<Self> {
        if raw_question.prompt.is_empty() {
            return Err(anyhow!("Question prompt is blank"));
        }

        let category: i64 = raw_question
            .category
            .parse()
            .map_err(|_| anyhow!("Invalid category {:?}", raw_question.category))?;

        let answer: i64 = raw_question
            .answer
            .parse()
            .map_err(|_| anyhow!("Invalid answer {:?}", raw_question.answer))?;
        let expected_answer = Verdict::from_flag(answer)
            .ok_or_else(|| anyhow!("Answer must be 0 or 1, found {}", answer))?;

        Ok(Question {
            prompt: raw_question.prompt,
            category,
            expected_answer,
            correct_feedback: raw_question.correct_feedback,
            incorrect_feedback: raw_question.incorrect_feedback,
        })
    }
}
