//! Type definitions for lookup paths.

use std::fmt;

use serde_json::Value;

/// A behavior modifier embedded in a lookup path.
///
/// Options must appear before any [`PathStep::Key`] or [`PathStep::Index`]
/// step; the resolver rejects paths that violate this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOption {
    /// Report a resolved JSON null as a null-value error instead of letting
    /// the accessor substitute its zero value.
    ErrorOnNull,
}

impl fmt::Display for LookupOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupOption::ErrorOnNull => f.write_str("ErrorOnNull"),
        }
    }
}

/// One step in a lookup path.
///
/// Can be an object key, an array index, or an option flag.
#[derive(Debug, Clone, PartialEq)]
pub enum PathStep {
    /// Object member lookup.
    Key(String),
    /// Array index lookup. Signed so that a negative index is representable
    /// and reported as out of bounds rather than rejected at construction.
    Index(i64),
    /// Behavior flag; must precede all `Key`/`Index` steps.
    Opt(LookupOption),
}

/// A lookup path.
pub type Path = Vec<PathStep>;

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Key(key) => f.write_str(key),
            PathStep::Index(idx) => write!(f, "{}", idx),
            PathStep::Opt(opt) => write!(f, "{}", opt),
        }
    }
}

impl From<&str> for PathStep {
    fn from(key: &str) -> Self {
        PathStep::Key(key.to_string())
    }
}

impl From<String> for PathStep {
    fn from(key: String) -> Self {
        PathStep::Key(key)
    }
}

impl From<i64> for PathStep {
    fn from(idx: i64) -> Self {
        PathStep::Index(idx)
    }
}

impl From<i32> for PathStep {
    fn from(idx: i32) -> Self {
        PathStep::Index(idx as i64)
    }
}

impl From<LookupOption> for PathStep {
    fn from(opt: LookupOption) -> Self {
        PathStep::Opt(opt)
    }
}

/// Build a lookup path from mixed keys, indexes, and options.
///
/// # Example
///
/// ```
/// use json_prop::{path, LookupOption, PathStep};
///
/// let path = path![LookupOption::ErrorOnNull, "users", 0, "name"];
/// assert_eq!(path[1], PathStep::Key("users".to_string()));
/// assert_eq!(path[2], PathStep::Index(0));
/// ```
#[macro_export]
macro_rules! path {
    ($($step:expr),* $(,)?) => {
        vec![$($crate::PathStep::from($step)),*]
    };
}

/// Expected-type assertion for a resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    Array,
    Number,
    String,
    Bool,
}

impl TypeTag {
    /// Check whether a value carries this tag.
    ///
    /// Null matches no tag here; the resolver exempts null from the type
    /// check itself, since null is a valid value of any JSON type.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            TypeTag::Array => value.is_array(),
            TypeTag::Number => value.is_number(),
            TypeTag::String => value.is_string(),
            TypeTag::Bool => value.is_boolean(),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeTag::Array => "array",
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::Bool => "bool",
        };
        f.write_str(name)
    }
}
