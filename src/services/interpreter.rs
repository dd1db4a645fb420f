use crate::models::domain::answer::{AnswerSet, QuestionAnswer, SubAnswer};
use crate::models::domain::form::Form;
use crate::models::domain::question::{
    composite_parent_key, AnswerKind, NestingLevel, Question, QuestionType,
    MULTI_VALUE_SEPARATOR,
};
use crate::models::domain::submission::RawSubmission;

/// Reconciles one raw form post against a form's conditional question
/// tree: records an answer for every question that received a non-empty
/// value and descends only into the branches the selection reveals.
///
/// Required-ness is a presentation concern enforced before submission; an
/// unanswered question is skipped here regardless of its flag.
pub struct SubmissionInterpreter;

impl SubmissionInterpreter {
    pub fn interpret(form: &Form, submission: &RawSubmission) -> AnswerSet {
        let mut answers = AnswerSet::default();

        for question in &form.questions {
            let Some(value) =
                Self::extract_value(question.question_type, &question.field_key(), submission)
            else {
                continue;
            };

            let mut entry = QuestionAnswer {
                question_id: question.id,
                value,
                subanswers: Vec::new(),
            };

            if question.question_type.is_choice() {
                let selected = Self::split_selections(question.question_type, &entry.value);
                Self::evaluate_branches(
                    question,
                    NestingLevel::One,
                    None,
                    &selected,
                    submission,
                    &mut entry.subanswers,
                );
            }

            answers.answers.push(entry);
        }

        answers
    }

    /// Raw value for one field key. Multi-choice fields collect every
    /// posted value and join them with `", "`; everything else takes the
    /// first value. An empty extraction means the field is unanswered.
    fn extract_value(
        question_type: QuestionType,
        key: &str,
        submission: &RawSubmission,
    ) -> Option<String> {
        match question_type.answer_kind() {
            AnswerKind::MultiChoice => {
                let selected: Vec<&str> = submission
                    .values(key)
                    .iter()
                    .map(String::as_str)
                    .filter(|value| !value.is_empty())
                    .collect();
                if selected.is_empty() {
                    None
                } else {
                    Some(selected.join(MULTI_VALUE_SEPARATOR))
                }
            }
            AnswerKind::SingleChoice | AnswerKind::FreeText => submission
                .first_value(key)
                .filter(|value| !value.is_empty())
                .map(str::to_string),
        }
    }

    /// Option texts encoded in a recorded choice value.
    fn split_selections(question_type: QuestionType, value: &str) -> Vec<String> {
        match question_type.answer_kind() {
            AnswerKind::MultiChoice => value
                .split(MULTI_VALUE_SEPARATOR)
                .map(str::to_string)
                .collect(),
            AnswerKind::SingleChoice | AnswerKind::FreeText => vec![value.to_string()],
        }
    }

    /// Evaluate the follow-ups one nesting level down from a selection
    /// path, then recurse for follow-ups revealed by *their* answers.
    /// A follow-up fires only on an exact key match; keys that match no
    /// selected option are dead branches and are skipped silently.
    fn evaluate_branches(
        question: &Question,
        level: NestingLevel,
        path: Option<&str>,
        selected: &[String],
        submission: &RawSubmission,
        sink: &mut Vec<SubAnswer>,
    ) {
        for selection in selected {
            let parent_key = match path {
                None => selection.clone(),
                Some(prefix) => composite_parent_key(prefix, selection),
            };

            for sub in question
                .subquestions
                .iter()
                .filter(|s| s.level == level && s.parent_option == parent_key)
            {
                let Some(value) =
                    Self::extract_value(sub.question_type, &sub.field_key(), submission)
                else {
                    continue;
                };

                sink.push(SubAnswer {
                    subquestion_id: sub.id,
                    value: value.clone(),
                });

                if sub.question_type.is_choice() {
                    if let Some(next_level) = level.deeper() {
                        let nested = Self::split_selections(sub.question_type, &value);
                        Self::evaluate_branches(
                            question,
                            next_level,
                            Some(&parent_key),
                            &nested,
                            submission,
                            sink,
                        );
                    }
                }
            }
        }
    }
}
