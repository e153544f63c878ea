/// How a filter value is compared against a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Field text must equal the filter value.
    Exact,
    /// Field text must contain the filter value (case-sensitive).
    Contains,
}

/// Predicate for a single named field of `T`.
pub struct FieldMatcher<T> {
    name: &'static str,
    mode: MatchMode,
    extract: fn(&T) -> &str,
    placeholder: Option<&'static str>,
}

impl<T> FieldMatcher<T> {
    pub fn new(name: &'static str, mode: MatchMode, extract: fn(&T) -> &str) -> Self {
        Self {
            name,
            mode,
            extract,
            placeholder: None,
        }
    }

    pub fn exact(name: &'static str, extract: fn(&T) -> &str) -> Self {
        Self::new(name, MatchMode::Exact, extract)
    }

    pub fn contains(name: &'static str, extract: fn(&T) -> &str) -> Self {
        Self::new(name, MatchMode::Contains, extract)
    }

    /// Input that stands for "no filter" in this field (e.g. the `-` option of a picker).
    pub fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Field text of `item`.
    pub fn value_of<'a>(&self, item: &'a T) -> &'a str {
        (self.extract)(item)
    }

    /// Trim raw input; the placeholder collapses to the empty string.
    pub fn normalize(&self, raw: &str) -> String {
        let value = raw.trim();
        match self.placeholder {
            Some(placeholder) if value == placeholder => String::new(),
            _ => value.to_string(),
        }
    }

    /// Whether `item` satisfies `value`. An empty value matches everything.
    pub fn matches(&self, item: &T, value: &str) -> bool {
        if value.is_empty() {
            return true;
        }
        let field = self.value_of(item);
        match self.mode {
            MatchMode::Exact => field == value,
            MatchMode::Contains => field.contains(value),
        }
    }
}

impl<T> Clone for FieldMatcher<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            mode: self.mode,
            extract: self.extract,
            placeholder: self.placeholder,
        }
    }
}

impl<T> std::fmt::Debug for FieldMatcher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldMatcher")
            .field("name", &self.name)
            .field("mode", &self.mode)
            .field("placeholder", &self.placeholder)
            .finish()
    }
}
