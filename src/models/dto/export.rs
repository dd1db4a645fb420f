use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::question::QuestionType;
use crate::models::domain::score::Score;

/// Flat, storable record of one evaluated submission. Derives
/// `Deserialize` as well so stored records can be read back and compared
/// against the answers that produced them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SubmissionRecord {
    pub submission_id: Uuid,
    pub form_id: i64,
    pub submitted_at: DateTime<Utc>,
    pub questions: Vec<QuestionEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<ScoreSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionEntry {
    pub question_id: i64,
    pub question_text: String,
    pub question_type: QuestionType,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subquestions: Vec<SubQuestionEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubQuestionEntry {
    pub subquestion_id: i64,
    pub question_text: String,
    pub question_type: QuestionType,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScoreSummary {
    pub score: i32,
    pub max_score: i32,
    pub score_percentage: f64,
    pub passed: bool,
}

impl From<&Score> for ScoreSummary {
    fn from(score: &Score) -> Self {
        ScoreSummary {
            score: score.score,
            max_score: score.max_score,
            score_percentage: score.score_percentage,
            passed: score.passed,
        }
    }
}

impl SubmissionRecord {
    /// Every `(id, answer)` pair in the record, nested entries included,
    /// in record order.
    pub fn answer_pairs(&self) -> Vec<(i64, &str)> {
        let mut pairs = Vec::new();
        for entry in &self.questions {
            pairs.push((entry.question_id, entry.answer.as_str()));
            for sub in &entry.subquestions {
                pairs.push((sub.subquestion_id, sub.answer.as_str()));
            }
        }
        pairs
    }
}
