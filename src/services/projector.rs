use chrono::Utc;
use uuid::Uuid;

use crate::models::domain::answer::AnswerSet;
use crate::models::domain::form::Form;
use crate::models::domain::score::Score;
use crate::models::dto::export::{
    QuestionEntry, ScoreSummary, SubQuestionEntry, SubmissionRecord,
};

/// Assembles an answer set into a flat record for storage or export.
/// Branch linkage comes from the answer set itself, so reachability is
/// never re-derived here.
pub struct ExportProjector;

impl ExportProjector {
    pub fn project(form: &Form, answers: &AnswerSet, score: Option<&Score>) -> SubmissionRecord {
        let mut questions = Vec::with_capacity(answers.answers.len());

        for answer in &answers.answers {
            // answers for questions deleted since interpretation are dropped
            let Some(question) = form.question(answer.question_id) else {
                continue;
            };

            let subquestions = answer
                .subanswers
                .iter()
                .filter_map(|sub| {
                    question
                        .subquestions
                        .iter()
                        .find(|s| s.id == sub.subquestion_id)
                        .map(|s| SubQuestionEntry {
                            subquestion_id: s.id,
                            question_text: s.question_text.clone(),
                            question_type: s.question_type,
                            answer: sub.value.clone(),
                        })
                })
                .collect();

            questions.push(QuestionEntry {
                question_id: question.id,
                question_text: question.question_text.clone(),
                question_type: question.question_type,
                answer: answer.value.clone(),
                subquestions,
            });
        }

        SubmissionRecord {
            submission_id: Uuid::new_v4(),
            form_id: form.id,
            submitted_at: Utc::now(),
            questions,
            score: score.map(ScoreSummary::from),
        }
    }
}
