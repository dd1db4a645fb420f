use validator::Validate;

use crate::errors::{SchemaError, SchemaResult};
use crate::models::domain::form::Form;
use crate::models::domain::question::{
    composite_parent_key, NestingLevel, Question, SubQuestion,
};
use crate::models::dto::schema::{
    FormSchemaDto, NestedOptionDescriptor, OptionDescriptor, OptionsField, QuestionDescriptor,
};

/// Turns an authored schema payload into a validated, immutable `Form`.
///
/// Identities are assigned from a sequential counter in traversal order
/// (each question, then its follow-ups depth-first), so a given payload
/// always builds to the same ids. Editing a form rebuilds it from scratch
/// under fresh ids.
pub struct SchemaBuilder;

/// Outcome of normalizing a JSON-string-encoded options list. Undecodable
/// input degrades to no options instead of failing the build; the reason
/// is kept so the degraded path can be asserted on directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedOptions {
    Decoded(Vec<String>),
    Degraded { reason: String },
}

/// Option texts plus the follow-up descriptors attached to them, staged
/// so a question can be pushed before its children are built.
type PendingFollowUps = Vec<(String, Vec<QuestionDescriptor>)>;

impl SchemaBuilder {
    /// Parse a raw authoring payload. Input that is not JSON, or that
    /// lacks a `questions` array, is a client error.
    pub fn parse_payload(payload: &str) -> SchemaResult<FormSchemaDto> {
        let dto = serde_json::from_str::<FormSchemaDto>(payload)?;
        Ok(dto)
    }

    pub fn build(form_id: i64, dto: FormSchemaDto) -> SchemaResult<Form> {
        dto.validate()?;

        let mut next_id = 1;
        let mut questions = Vec::with_capacity(dto.questions.len());
        for (position, descriptor) in dto.questions.into_iter().enumerate() {
            questions.push(Self::build_question(
                descriptor,
                position,
                dto.is_quiz,
                &mut next_id,
            )?);
        }

        Ok(Form {
            id: form_id,
            title: dto.title,
            description: dto.description,
            is_quiz: dto.is_quiz,
            passing_score: dto.passing_score,
            show_score: dto.show_score,
            questions,
        })
    }

    fn build_question(
        descriptor: QuestionDescriptor,
        position: usize,
        is_quiz: bool,
        next_id: &mut i64,
    ) -> SchemaResult<Question> {
        let question_text = descriptor.question_text.ok_or(SchemaError::MissingField {
            field: "question_text",
            position,
        })?;
        let question_type = descriptor.question_type.ok_or(SchemaError::MissingField {
            field: "question_type",
            position,
        })?;

        let id = Self::allocate(next_id);

        let mut options = Vec::new();
        let mut pending = PendingFollowUps::new();
        if question_type.is_choice() {
            Self::normalize_options(descriptor.options, &mut options, &mut pending);
        }

        let mut subquestions = Vec::new();
        for (option_text, descriptors) in pending {
            for (sub_position, sub) in descriptors.into_iter().enumerate() {
                Self::build_subquestion(
                    sub,
                    sub_position,
                    option_text.clone(),
                    NestingLevel::One,
                    next_id,
                    &mut subquestions,
                )?;
            }
        }

        Ok(Question {
            id,
            question_text,
            question_type,
            options,
            required: descriptor.required,
            order: descriptor.order.unwrap_or(position as i16),
            is_quiz_question: is_quiz && descriptor.is_quiz_question,
            correct_answer: if is_quiz { descriptor.correct_answer } else { None },
            points: if is_quiz {
                descriptor.points.unwrap_or(0)
            } else {
                0
            },
            feedback: if is_quiz { descriptor.feedback } else { None },
            subquestions,
        })
    }

    /// Build one follow-up question and append it (and, at level one, its
    /// own level-two follow-ups) to `sink` in authoring order.
    fn build_subquestion(
        descriptor: QuestionDescriptor,
        position: usize,
        parent_option: String,
        level: NestingLevel,
        next_id: &mut i64,
        sink: &mut Vec<SubQuestion>,
    ) -> SchemaResult<()> {
        let question_text = descriptor.question_text.ok_or(SchemaError::MissingField {
            field: "question_text",
            position,
        })?;
        let question_type = descriptor.question_type.ok_or(SchemaError::MissingField {
            field: "question_type",
            position,
        })?;

        let id = Self::allocate(next_id);

        let mut options = Vec::new();
        let mut pending = PendingFollowUps::new();
        if question_type.is_choice() {
            Self::normalize_options(descriptor.options, &mut options, &mut pending);
        }

        sink.push(SubQuestion {
            id,
            question_text,
            question_type,
            options,
            required: descriptor.required,
            order: descriptor.order.unwrap_or(position as i16),
            parent_option: parent_option.clone(),
            level,
        });

        match level.deeper() {
            Some(next_level) => {
                for (option_text, descriptors) in pending {
                    let key = composite_parent_key(&parent_option, &option_text);
                    for (sub_position, sub) in descriptors.into_iter().enumerate() {
                        Self::build_subquestion(
                            sub,
                            sub_position,
                            key.clone(),
                            next_level,
                            next_id,
                            sink,
                        )?;
                    }
                }
            }
            None => {
                for (option_text, descriptors) in &pending {
                    if !descriptors.is_empty() {
                        log::warn!(
                            "ignoring follow-ups nested past two levels under option `{option_text}`"
                        );
                    }
                }
            }
        }

        Ok(())
    }

    /// Normalize an options field into option texts, staging any inline
    /// follow-up descriptors against the option that carries them.
    fn normalize_options(
        field: Option<OptionsField>,
        options: &mut Vec<String>,
        pending: &mut PendingFollowUps,
    ) {
        match field {
            None => {}
            Some(OptionsField::Encoded(raw)) => match Self::decode_options(&raw) {
                DecodedOptions::Decoded(texts) => options.extend(texts),
                DecodedOptions::Degraded { reason } => {
                    log::warn!("dropping undecodable options list: {reason}");
                }
            },
            Some(OptionsField::Inline(entries)) => {
                for entry in entries {
                    match entry {
                        OptionDescriptor::Text(text) => options.push(text),
                        OptionDescriptor::Nested(NestedOptionDescriptor {
                            text,
                            subquestions,
                        }) => {
                            options.push(text.clone());
                            if !subquestions.is_empty() {
                                pending.push((text, subquestions));
                            }
                        }
                    }
                }
            }
        }
    }

    /// Decode a JSON-string-encoded option list.
    pub fn decode_options(raw: &str) -> DecodedOptions {
        match serde_json::from_str::<Vec<String>>(raw) {
            Ok(texts) => DecodedOptions::Decoded(texts),
            Err(err) => DecodedOptions::Degraded {
                reason: err.to_string(),
            },
        }
    }

    fn allocate(next_id: &mut i64) -> i64 {
        let id = *next_id;
        *next_id += 1;
        id
    }
}
