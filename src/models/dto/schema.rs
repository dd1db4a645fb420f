use serde::Deserialize;
use validator::Validate;

use crate::models::domain::question::QuestionType;

/// Form description as authored through the editor. This is the shape the
/// schema builder consumes; nothing here is trusted until it has been
/// validated and turned into a domain `Form`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FormSchemaDto {
    #[serde(default)]
    #[validate(length(max = 200))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub is_quiz: bool,
    #[serde(default)]
    #[validate(range(min = 0, max = 100))]
    pub passing_score: i32,
    #[serde(default)]
    pub show_score: bool,
    pub questions: Vec<QuestionDescriptor>,
}

/// One authored question. `question_text` and `question_type` are checked
/// by the builder rather than required at parse time, so a descriptor
/// missing one of them is reported with its position instead of failing
/// the whole payload as unreadable.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionDescriptor {
    pub question_text: Option<String>,
    pub question_type: Option<QuestionType>,
    #[serde(default)]
    pub required: bool,
    pub options: Option<OptionsField>,
    pub order: Option<i16>,
    #[serde(default)]
    pub is_quiz_question: bool,
    pub correct_answer: Option<String>,
    pub points: Option<i32>,
    pub feedback: Option<String>,
}

/// Options arrive in two encodings depending on which editor revision
/// authored the form: an inline array, or the whole list packed into a
/// single JSON string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OptionsField {
    Inline(Vec<OptionDescriptor>),
    Encoded(String),
}

/// An inline option: either a bare text, or an object carrying its own
/// follow-up question descriptors.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OptionDescriptor {
    Text(String),
    Nested(NestedOptionDescriptor),
}

#[derive(Debug, Clone, Deserialize)]
pub struct NestedOptionDescriptor {
    pub text: String,
    #[serde(default)]
    pub subquestions: Vec<QuestionDescriptor>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_flat_string_options() {
        let payload = json!({
            "title": "Pets",
            "questions": [
                { "question_text": "Pet?", "question_type": "radio", "options": ["Dog", "Cat"] }
            ]
        });

        let dto: FormSchemaDto = serde_json::from_value(payload).unwrap();
        let question = &dto.questions[0];
        match question.options.as_ref().unwrap() {
            OptionsField::Inline(entries) => {
                assert_eq!(entries.len(), 2);
                assert!(matches!(entries[0], OptionDescriptor::Text(ref t) if t == "Dog"));
            }
            OptionsField::Encoded(_) => panic!("expected inline options"),
        }
    }

    #[test]
    fn parses_nested_option_objects() {
        let payload = json!({
            "questions": [
                {
                    "question_text": "Pet?",
                    "question_type": "radio",
                    "options": [
                        { "text": "Dog", "subquestions": [
                            { "question_text": "Breed?", "question_type": "text" }
                        ]},
                        "Cat"
                    ]
                }
            ]
        });

        let dto: FormSchemaDto = serde_json::from_value(payload).unwrap();
        match dto.questions[0].options.as_ref().unwrap() {
            OptionsField::Inline(entries) => {
                match &entries[0] {
                    OptionDescriptor::Nested(nested) => {
                        assert_eq!(nested.text, "Dog");
                        assert_eq!(nested.subquestions.len(), 1);
                        assert_eq!(
                            nested.subquestions[0].question_text.as_deref(),
                            Some("Breed?")
                        );
                    }
                    OptionDescriptor::Text(_) => panic!("expected nested option"),
                }
                assert!(matches!(entries[1], OptionDescriptor::Text(ref t) if t == "Cat"));
            }
            OptionsField::Encoded(_) => panic!("expected inline options"),
        }
    }

    #[test]
    fn parses_string_encoded_options() {
        let payload = json!({
            "questions": [
                { "question_text": "Pet?", "question_type": "radio", "options": "[\"Dog\",\"Cat\"]" }
            ]
        });

        let dto: FormSchemaDto = serde_json::from_value(payload).unwrap();
        assert!(matches!(
            dto.questions[0].options,
            Some(OptionsField::Encoded(_))
        ));
    }

    #[test]
    fn missing_questions_array_fails_to_parse() {
        let payload = json!({ "title": "No questions here" });

        let result = serde_json::from_value::<FormSchemaDto>(payload);
        assert!(result.is_err());
    }

    #[test]
    fn passing_score_outside_percent_range_fails_validation() {
        let payload = json!({ "passing_score": 140, "questions": [] });

        let dto: FormSchemaDto = serde_json::from_value(payload).unwrap();
        assert!(dto.validate().is_err());
    }
}
