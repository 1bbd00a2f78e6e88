//! Query string construction

use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Display;

/// Ordered set of query parameters; absent options are never added
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter
    pub fn push(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a parameter only when the value is present
    pub fn push_opt<V: Display>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Add a comma-joined list; absent and empty lists are omitted
    pub fn push_list<I, V>(&mut self, key: &str, values: Option<I>) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Display,
    {
        if let Some(values) = values {
            let joined = values
                .into_iter()
                .map(|value| value.to_string())
                .collect::<Vec<_>>()
                .join(",");
            if !joined.is_empty() {
                self.push(key, joined);
            }
        }
        self
    }

    /// Add an instant as ISO-8601 with millisecond precision
    pub fn push_date(&mut self, key: &str, value: Option<DateTime<Utc>>) -> &mut Self {
        self.push_opt(key, value.map(iso8601))
    }

    /// Value of the first parameter named `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

/// Format an instant the way the API expects, e.g. `2024-01-01T00:00:00.000Z`
pub fn iso8601(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_absent_values_are_omitted() {
        let mut params = QueryParams::new();
        params
            .push_opt("lang", None::<&str>)
            .push_opt("limit", Some(10))
            .push_list("include", None::<Vec<&str>>)
            .push_date("from", None);

        assert_eq!(params.len(), 1);
        assert_eq!(params.get("limit"), Some("10"));
        assert!(!params.contains("lang"));
        assert!(!params.contains("include"));
        assert!(!params.contains("from"));
    }

    #[test]
    fn test_lists_are_comma_joined() {
        let mut params = QueryParams::new();
        params.push_list("channels", Some(["UC1", "UC2", "UC3"]));
        assert_eq!(params.get("channels"), Some("UC1,UC2,UC3"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_empty_list_is_omitted() {
        let mut params = QueryParams::new();
        params.push_list("include", Some(Vec::<String>::new()));
        assert!(params.is_empty());
    }

    #[test]
    fn test_dates_are_iso8601() {
        let mut params = QueryParams::new();
        params.push_date("from", Some(Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap()));
        assert_eq!(params.get("from"), Some("2024-05-06T07:08:09.000Z"));
    }
}
