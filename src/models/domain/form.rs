use serde::{Deserialize, Serialize};

use crate::models::domain::question::Question;

/// A built form schema: ordered questions plus form-level quiz settings.
///
/// Read-only once built. Editing a form is modelled as a full
/// delete-and-recreate of the schema, never in-place mutation, since
/// question identities are not stable across edits.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Form {
    pub id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_quiz: bool,
    /// Pass threshold as a percentage, 0-100.
    pub passing_score: i32,
    /// Whether the respondent should be shown their score. Carried for
    /// the presentation layer; grading itself does not consult it.
    pub show_score: bool,
    pub questions: Vec<Question>,
}

impl Form {
    pub fn question(&self, id: i64) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;

    #[test]
    fn question_lookup_by_identity() {
        let form = fixtures::pet_form();

        assert!(form.question(1).is_some());
        assert_eq!(form.question(1).unwrap().question_text, "Pet?");
        assert!(form.question(99).is_none());
    }

    #[test]
    fn form_round_trip_serialization_preserves_question_order() {
        let form = fixtures::pet_form();

        let json = serde_json::to_string(&form).expect("form should serialize");
        let parsed: Form = serde_json::from_str(&json).expect("form should deserialize");

        assert_eq!(parsed, form);
        let ids: Vec<i64> = parsed.questions.iter().map(|q| q.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }
}
