use crate::models::domain::answer::AnswerSet;
use crate::models::domain::form::Form;
use crate::models::domain::question::{AnswerKind, Question};
use crate::models::domain::score::{QuestionResult, Score};

/// Grades answered quiz questions against their stored answer keys.
///
/// The maximum sums the point values of quiz questions that were actually
/// answered, so skipping a question lowers the ceiling rather than
/// counting as a wrong answer.
pub struct QuizScorer;

impl QuizScorer {
    /// Score a submission. Returns `None` for forms that are not quizzes.
    pub fn score(form: &Form, answers: &AnswerSet) -> Option<Score> {
        if !form.is_quiz {
            return None;
        }

        let mut total = 0;
        let mut max_score = 0;
        let mut question_results = Vec::new();

        for question in &form.questions {
            if !question.is_quiz_question {
                continue;
            }
            let Some(answered) = answers.value_for(question.id) else {
                continue;
            };

            max_score += question.points;
            let is_correct = Self::is_correct(question, answered);
            let points_earned = if is_correct { question.points } else { 0 };
            total += points_earned;

            question_results.push(QuestionResult {
                question_id: question.id,
                is_correct,
                points_earned,
                feedback: question.feedback.clone(),
            });
        }

        let (score_percentage, passed) = if max_score > 0 {
            let percentage = f64::from(total) / f64::from(max_score) * 100.0;
            (percentage, percentage >= f64::from(form.passing_score))
        } else {
            (0.0, false)
        };

        Some(Score {
            score: total,
            max_score,
            score_percentage,
            passed,
            question_results,
        })
    }

    /// Choice questions store the correct answer as an option index;
    /// everything else stores the expected text, compared exactly.
    fn is_correct(question: &Question, answered: &str) -> bool {
        let Some(key) = question.correct_answer.as_deref() else {
            return false;
        };

        match question.question_type.answer_kind() {
            AnswerKind::SingleChoice | AnswerKind::MultiChoice => {
                match Self::option_index(key) {
                    Some(index) => question
                        .options
                        .get(index)
                        .is_some_and(|text| text == answered),
                    None => {
                        log::warn!(
                            "unusable correct-answer key `{key}` for question {}",
                            question.id
                        );
                        false
                    }
                }
            }
            AnswerKind::FreeText => answered == key,
        }
    }

    /// Answer keys have been stored as bare integers, JSON numbers and
    /// JSON-encoded numeric strings across editor revisions; accept all
    /// three. Anything else leaves the question unanswerable-correctly.
    fn option_index(key: &str) -> Option<usize> {
        if let Ok(index) = key.trim().parse::<usize>() {
            return Some(index);
        }
        match serde_json::from_str::<serde_json::Value>(key) {
            Ok(value) => value
                .as_u64()
                .map(|index| index as usize)
                .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok())),
            Err(_) => None,
        }
    }
}
