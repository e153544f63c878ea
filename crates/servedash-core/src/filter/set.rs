use std::collections::BTreeMap;

use crate::FilterSchema;

/// Current filter input, keyed by field name.
///
/// Only non-empty values are stored; an absent field places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    entries: BTreeMap<String, String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the value for `field`; an empty value clears it.
    ///
    /// Returns `true` when the effective filter changed.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) -> bool {
        let field = field.into();
        let value = value.into();
        if value.is_empty() {
            return self.entries.remove(&field).is_some();
        }
        match self.entries.get(&field) {
            Some(current) if *current == value => false,
            _ => {
                self.entries.insert(field, value);
                true
            }
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether `item` passes every active filter.
    ///
    /// Entries for fields the schema does not know place no constraint.
    pub fn matches<T>(&self, schema: &FilterSchema<T>, item: &T) -> bool {
        self.entries.iter().all(|(field, value)| {
            schema
                .get(field)
                .is_none_or(|matcher| matcher.matches(item, value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldMatcher;

    struct Row {
        id: &'static str,
        kind: &'static str,
    }

    fn schema() -> FilterSchema<Row> {
        FilterSchema::new()
            .with(FieldMatcher::contains("id", |r: &Row| r.id))
            .with(FieldMatcher::exact("kind", |r: &Row| r.kind))
    }

    #[test]
    fn set_reports_changes() {
        let mut set = FilterSet::new();
        assert!(set.set("id", "a"));
        assert!(!set.set("id", "a"));
        assert!(set.set("id", "b"));
        assert!(set.set("id", ""));
        assert!(!set.set("id", ""));
        assert!(set.is_empty());
    }

    #[test]
    fn fields_are_independent() {
        let mut set = FilterSet::new();
        set.set("id", "a");
        set.set("kind", "X");
        set.set("id", "b");

        assert_eq!(set.get("kind"), Some("X"));
        assert_eq!(set.get("id"), Some("b"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn all_filters_must_match() {
        let schema = schema();
        let mut set = FilterSet::new();
        set.set("id", "r-1");
        set.set("kind", "RUNNING");

        assert!(set.matches(&schema, &Row { id: "r-10", kind: "RUNNING" }));
        assert!(!set.matches(&schema, &Row { id: "r-10", kind: "STOPPING" }));
        assert!(!set.matches(&schema, &Row { id: "r-2", kind: "RUNNING" }));
    }

    #[test]
    fn unknown_field_is_ignored() {
        let schema = schema();
        let mut set = FilterSet::new();
        set.set("node_ip", "10.0.0.1");
        assert!(set.matches(&schema, &Row { id: "x", kind: "y" }));
    }
}
