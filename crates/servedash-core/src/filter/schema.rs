use crate::FieldMatcher;

/// Registry of filterable fields for items of type `T`.
///
/// Adding a field means registering a matcher; the filtering loop itself
/// never changes.
pub struct FilterSchema<T> {
    matchers: Vec<FieldMatcher<T>>,
}

impl<T> FilterSchema<T> {
    pub fn new() -> Self {
        Self {
            matchers: Vec::new(),
        }
    }

    /// Builder form of [`FilterSchema::register`].
    pub fn with(mut self, matcher: FieldMatcher<T>) -> Self {
        self.register(matcher);
        self
    }

    /// Register a matcher, returning the one it replaced if the field was
    /// already registered.
    pub fn register(&mut self, matcher: FieldMatcher<T>) -> Option<FieldMatcher<T>> {
        match self.matchers.iter_mut().find(|m| m.name() == matcher.name()) {
            Some(slot) => Some(std::mem::replace(slot, matcher)),
            None => {
                self.matchers.push(matcher);
                None
            }
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldMatcher<T>> {
        self.matchers.iter().find(|m| m.name() == field)
    }

    /// Registered field names in registration order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.matchers.iter().map(FieldMatcher::name)
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl<T> Default for FilterSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FilterSchema<T> {
    fn clone(&self) -> Self {
        Self {
            matchers: self.matchers.clone(),
        }
    }
}

impl<T> std::fmt::Debug for FilterSchema<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.matchers.iter()).finish()
    }
}
