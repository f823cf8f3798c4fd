use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A search the host is about to execute.
///
/// `q` is the query text in the engine's syntax; before-search hooks append
/// to it. `extras` is the raw side-band of the request: form fields the
/// search page itself does not interpret, delivered by the HTTP layer as
/// strings or lists of strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub q: String,

    #[serde(default)]
    pub extras: HashMap<String, Value>,
}

impl SearchRequest {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            extras: HashMap::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extras.insert(key.into(), value);
        self
    }

    /// Values stored under an extras key, treating a lone string as a
    /// one-element list. Non-string list entries are dropped.
    pub fn extra_list(&self, key: &str) -> Vec<String> {
        match self.extras.get(key) {
            Some(Value::String(s)) => vec![s.clone()],
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Append a fragment to the query text, space-separated. Empty
    /// fragments leave the query untouched.
    pub fn append_q(&mut self, fragment: &str) {
        if fragment.is_empty() {
            return;
        }
        if !self.q.is_empty() {
            self.q.push(' ');
        }
        self.q.push_str(fragment);
    }
}
