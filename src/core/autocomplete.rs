//! Autocomplete suggestions

use serde::Serialize;

/// Kind of suggestion the caller wants to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutocompleteKind {
    Channel,
    Topic,
}

impl AutocompleteKind {
    /// Value of the `type` field on matching entries
    pub fn as_str(&self) -> &'static str {
        match self {
            AutocompleteKind::Channel => "channel",
            AutocompleteKind::Topic => "topic",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<AutocompleteKind> {
        match s.to_lowercase().as_str() {
            "channel" => Some(AutocompleteKind::Channel),
            "topic" => Some(AutocompleteKind::Topic),
            _ => None,
        }
    }
}

/// A single autocomplete suggestion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutocompleteEntry {
    /// Suggestion type as reported by the server (`channel`, `topic`, ...)
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub text: Option<String>,
}

impl AutocompleteEntry {
    pub fn is_kind(&self, kind: AutocompleteKind) -> bool {
        self.kind == kind.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!(AutocompleteKind::from_str("Topic"), Some(AutocompleteKind::Topic));
        assert_eq!(AutocompleteKind::from_str("channel"), Some(AutocompleteKind::Channel));
        assert_eq!(AutocompleteKind::from_str("org"), None);
    }

    #[test]
    fn test_is_kind() {
        let entry = AutocompleteEntry {
            kind: "topic".to_string(),
            value: "singing".to_string(),
            text: None,
        };
        assert!(entry.is_kind(AutocompleteKind::Topic));
        assert!(!entry.is_kind(AutocompleteKind::Channel));
    }
}
