use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Raw field values from one form post, keyed by field name
/// (`question_<id>` / `subq_<id>`). A key may carry several values;
/// checkbox groups post one value per checked box.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawSubmission {
    fields: HashMap<String, Vec<String>>,
}

impl RawSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect `(key, value)` pairs as they arrive from a form post,
    /// accumulating repeated keys into multi-valued entries.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut submission = Self::new();
        for (key, value) in pairs {
            submission.insert(key, value);
        }
        submission
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.entry(key.into()).or_default().push(value.into());
    }

    /// All values posted under `key`, empty if the field is absent.
    pub fn values(&self, key: &str) -> &[String] {
        self.fields.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First value posted under `key`, if any.
    pub fn first_value(&self, key: &str) -> Option<&str> {
        self.values(key).first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
