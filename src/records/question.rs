//! Question and Answer - community Q&A

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Collection;

/// A reply to a community question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    id: String,
    answer: String,
    is_anonymous: bool,
    created_at: DateTime<Utc>,
}

impl Answer {
    /// Create an answer timestamped now.
    #[must_use]
    pub fn new(id: impl Into<String>, answer: impl Into<String>, is_anonymous: bool) -> Self {
        Self {
            id: id.into(),
            answer: answer.into(),
            is_anonymous,
            created_at: Utc::now(),
        }
    }

    /// Get the answer ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the answer text.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Whether the author chose to stay anonymous.
    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        self.is_anonymous
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// A community question with its answers in posting order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    id: String,
    question: String,
    is_anonymous: bool,
    created_at: DateTime<Utc>,
    #[serde(default)]
    answers: Vec<Answer>,
}

impl Question {
    /// Create a question with no answers, timestamped now.
    #[must_use]
    pub fn new(id: impl Into<String>, question: impl Into<String>, is_anonymous: bool) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            is_anonymous,
            created_at: Utc::now(),
            answers: Vec::new(),
        }
    }

    /// Get the question ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the question text.
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Whether the author chose to stay anonymous.
    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        self.is_anonymous
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Get the answers in posting order.
    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Append an answer.
    pub fn add_answer(&mut self, answer: Answer) {
        self.answers.push(answer);
    }
}

impl Collection for Question {
    const KEY: &'static str = super::keys::QUESTIONS;
    const KIND: &'static str = "question";

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_answers_in_order() {
        let mut question = Question::new("q-1", "Is spotting normal?", true);
        assert!(question.answers().is_empty());

        question.add_answer(Answer::new("a-1", "Often, yes.", false));
        question.add_answer(Answer::new("a-2", "Ask your doctor.", true));

        let ids: Vec<&str> = question.answers().iter().map(Answer::id).collect();
        assert_eq!(ids, ["a-1", "a-2"]);
    }

    #[test]
    fn test_question_without_answers_field() {
        let json = r#"{
            "id": "q-7",
            "question": "Cycle tracking apps?",
            "isAnonymous": false,
            "createdAt": "2024-06-01T12:00:00Z"
        }"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert!(question.answers().is_empty());
        assert!(!question.is_anonymous());
    }
}
