use serde::{Deserialize, Serialize};

/// Answers extracted from one submission, in schema order. Built
/// append-only by the interpreter, then persisted or exported verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerSet {
    pub answers: Vec<QuestionAnswer>,
}

/// Answer to a top-level question, with the answers to whichever of its
/// follow-ups were revealed by the selection. Keeping the linkage here
/// means downstream consumers never re-derive which branches fired.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionAnswer {
    pub question_id: i64,
    pub value: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subanswers: Vec<SubAnswer>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubAnswer {
    pub subquestion_id: i64,
    pub value: String,
}

impl AnswerSet {
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Answer text recorded for a top-level question, if it was answered.
    pub fn value_for(&self, question_id: i64) -> Option<&str> {
        self.answers
            .iter()
            .find(|a| a.question_id == question_id)
            .map(|a| a.value.as_str())
    }

    /// Every `(id, value)` pair in the set, follow-up answers included,
    /// in evaluation order.
    pub fn flattened(&self) -> Vec<(i64, &str)> {
        let mut pairs = Vec::new();
        for answer in &self.answers {
            pairs.push((answer.question_id, answer.value.as_str()));
            for sub in &answer.subanswers {
                pairs.push((sub.subquestion_id, sub.value.as_str()));
            }
        }
        pairs
    }
}
