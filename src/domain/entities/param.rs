use serde::{Deserialize, Serialize};

/// Boolean combinator linking a search parameter to the rest of the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Junction {
    #[default]
    And,
    Or,
    Not,
}

impl Junction {
    pub fn as_str(&self) -> &str {
        match self {
            Junction::And => "AND",
            Junction::Or => "OR",
            Junction::Not => "NOT",
        }
    }

    /// Parse raw form input, falling back to `default` for anything
    /// unrecognised. The first row of a composite search form ships an
    /// empty junction, which takes the fallback path.
    pub fn parse_or(raw: &str, default: Junction) -> Junction {
        match raw.trim().to_ascii_uppercase().as_str() {
            "AND" => Junction::And,
            "OR" => Junction::Or,
            "NOT" => Junction::Not,
            _ => default,
        }
    }

    /// Lenient parse with the standard `AND` fallback.
    pub fn parse_lenient(raw: &str) -> Junction {
        Self::parse_or(raw, Junction::default())
    }
}

impl std::fmt::Display for Junction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single typed search parameter supplied by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParam {
    /// Index field the parameter searches against
    #[serde(rename = "type")]
    pub field: String,

    /// Raw user text; whitespace-delimited into words
    pub value: String,

    /// How this parameter combines with the rest of the query
    pub junction: Junction,
}

impl SearchParam {
    pub fn new(
        field: impl Into<String>,
        value: impl Into<String>,
        junction: Junction,
    ) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            junction,
        }
    }

    /// Whitespace-delimited words of the raw value.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.value.split_whitespace()
    }
}
