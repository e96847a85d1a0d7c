//! Typed WHERE conditions for list queries.
//!
//! Columns are `&'static str`, so only code can name them; request input
//! only ever reaches a query as a bound value.

/// A value compared for equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Flag(bool),
}

/// How a column is matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Equals(FilterValue),
    /// Substring match, ASCII case-insensitive. `%` and `_` in the needle
    /// match literally.
    Contains(String),
}

/// One condition on one column. A listing ANDs all of its conditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterField {
    pub field: &'static str,
    pub predicate: Predicate,
}

impl FilterField {
    pub fn eq(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            predicate: Predicate::Equals(FilterValue::Text(value.into())),
        }
    }

    pub fn flag(field: &'static str, value: bool) -> Self {
        Self {
            field,
            predicate: Predicate::Equals(FilterValue::Flag(value)),
        }
    }

    pub fn contains(field: &'static str, needle: impl Into<String>) -> Self {
        Self {
            field,
            predicate: Predicate::Contains(needle.into()),
        }
    }
}
