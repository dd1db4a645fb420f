use serde::{Deserialize, Serialize};

/// Separator used when joining multi-choice selections into one stored
/// value. An option text containing this exact substring cannot be split
/// back apart; authors are expected to avoid it.
pub const MULTI_VALUE_SEPARATOR: &str = ", ";

/// Separator between option texts in a level-two parent key, e.g.
/// `"Dog|Large"` for the follow-ups revealed by picking "Large" under the
/// "Dog" branch.
pub const PARENT_KEY_SEPARATOR: char = '|';

/// Field types a form author can pick in the editor. The wire names match
/// the authoring payload (`text`, `email`, `tel`, `number`, `radio`,
/// `multiple_choice`, `checkbox`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Text,
    Email,
    Tel,
    Number,
    Radio,
    MultipleChoice,
    Checkbox,
}

/// How a submitted value is extracted and matched for a given field type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerKind {
    FreeText,
    SingleChoice,
    MultiChoice,
}

impl QuestionType {
    pub fn answer_kind(self) -> AnswerKind {
        match self {
            QuestionType::Radio | QuestionType::MultipleChoice => AnswerKind::SingleChoice,
            QuestionType::Checkbox => AnswerKind::MultiChoice,
            QuestionType::Text | QuestionType::Email | QuestionType::Tel | QuestionType::Number => {
                AnswerKind::FreeText
            }
        }
    }

    /// Whether the question carries an option list and can reveal
    /// follow-up questions.
    pub fn is_choice(self) -> bool {
        self.answer_kind() != AnswerKind::FreeText
    }
}

/// Conditional nesting depth of a follow-up question. Depth is capped at
/// two; `deeper` returns `None` at the bottom so traversal cannot recurse
/// past it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum NestingLevel {
    One,
    Two,
}

impl NestingLevel {
    pub fn deeper(self) -> Option<NestingLevel> {
        match self {
            NestingLevel::One => Some(NestingLevel::Two),
            NestingLevel::Two => None,
        }
    }
}

/// A top-level form field. Choice-typed questions own an ordered option
/// list and any conditional follow-ups attached to those options.
///
/// Quiz attributes are populated only when the owning form is a quiz;
/// follow-ups never carry them.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: i64,
    pub question_text: String,
    pub question_type: QuestionType,
    pub options: Vec<String>,
    pub required: bool,
    pub order: i16,
    pub is_quiz_question: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    pub points: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    pub subquestions: Vec<SubQuestion>,
}

impl Question {
    /// Form-post field name carrying this question's value.
    pub fn field_key(&self) -> String {
        format!("question_{}", self.id)
    }
}

/// A conditionally visible follow-up field, revealed when its parent
/// option is selected.
///
/// `parent_option` is the join key: at level one it is the owning
/// option's text verbatim; at level two it is the composite
/// `"<level-0 text>|<level-1 text>"` so that identically named level-1
/// options under different branches do not collide.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubQuestion {
    pub id: i64,
    pub question_text: String,
    pub question_type: QuestionType,
    pub options: Vec<String>,
    pub required: bool,
    pub order: i16,
    pub parent_option: String,
    pub level: NestingLevel,
}

impl SubQuestion {
    /// Form-post field name carrying this follow-up's value. Identities
    /// are unique across the whole form, so one key shape covers both
    /// nesting levels.
    pub fn field_key(&self) -> String {
        format!("subq_{}", self.id)
    }
}

/// Build the composite parent key for follow-ups nested under a level-1
/// selection.
pub fn composite_parent_key(level0_option: &str, level1_option: &str) -> String {
    format!("{level0_option}{PARENT_KEY_SEPARATOR}{level1_option}")
}
