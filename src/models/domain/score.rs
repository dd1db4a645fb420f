use serde::{Deserialize, Serialize};

/// Grading outcome for one quiz submission.
///
/// `max_score` sums the point values of the quiz questions that were
/// actually answered, not of every quiz question the form defines.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Score {
    pub score: i32,
    pub max_score: i32,
    pub score_percentage: f64,
    pub passed: bool,
    pub question_results: Vec<QuestionResult>,
}

/// Per-question grading detail, echoed back so callers can render
/// feedback next to each answer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionResult {
    pub question_id: i64,
    pub is_correct: bool,
    pub points_earned: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}
