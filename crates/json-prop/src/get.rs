//! Typed accessors layered over the path resolver.
//!
//! Each accessor fixes the expected type and maps a resolved null to its
//! zero value (empty slice, zero, empty string, false), unless the path
//! carried [`LookupOption::ErrorOnNull`][crate::LookupOption::ErrorOnNull],
//! in which case the resolver already reported the null.

use serde_json::{Number, Value};

use crate::error::PropertyError;
use crate::resolve::resolve_with_type;
use crate::types::{PathStep, TypeTag};

const EMPTY_ARRAY: &[Value] = &[];

/// Get a property without a type assertion.
///
/// Returns whatever value the path reaches, null included.
pub fn get_property<'a>(doc: &'a Value, path: &[PathStep]) -> Result<&'a Value, PropertyError> {
    resolve_with_type(doc, None, path)
}

/// Get an array property.
///
/// Element-level typing is the caller's responsibility via further lookups
/// into the returned slice.
pub fn get_array<'a>(doc: &'a Value, path: &[PathStep]) -> Result<&'a [Value], PropertyError> {
    match resolve_with_type(doc, Some(TypeTag::Array), path)? {
        Value::Array(arr) => Ok(arr),
        // The type check passed, so anything else is null.
        _ => Ok(EMPTY_ARRAY),
    }
}

/// Get a number property in its lossless text-backed form.
///
/// The returned [`Number`] preserves the source text, so a later integer or
/// float conversion is exact.
pub fn get_number(doc: &Value, path: &[PathStep]) -> Result<Number, PropertyError> {
    match resolve_with_type(doc, Some(TypeTag::Number), path)? {
        Value::Number(num) => Ok(num.clone()),
        _ => Ok(Number::from(0)),
    }
}

/// Get a number property as an `i64`.
///
/// # Errors
///
/// [`PropertyError::Convert`] if the number has a fractional part or does
/// not fit in an `i64`, on top of anything [`get_number`] reports.
///
/// # Example
///
/// ```
/// use json_prop::{get_int, path};
/// use serde_json::json;
///
/// let doc = json!({"count": 42, "ratio": 0.5});
/// assert_eq!(get_int(&doc, &path!["count"]).unwrap(), 42);
/// assert!(get_int(&doc, &path!["ratio"]).is_err());
/// ```
pub fn get_int(doc: &Value, path: &[PathStep]) -> Result<i64, PropertyError> {
    let num = get_number(doc, path)?;
    num.as_i64().ok_or_else(|| PropertyError::Convert {
        value: num.to_string(),
        target: "i64",
    })
}

/// Get a number property as an `f64`.
///
/// # Errors
///
/// [`PropertyError::Convert`] if the textual number cannot be parsed as a
/// finite `f64`, on top of anything [`get_number`] reports.
pub fn get_float(doc: &Value, path: &[PathStep]) -> Result<f64, PropertyError> {
    let num = get_number(doc, path)?;
    num.as_f64().ok_or_else(|| PropertyError::Convert {
        value: num.to_string(),
        target: "f64",
    })
}

/// Get a string property.
pub fn get_string<'a>(doc: &'a Value, path: &[PathStep]) -> Result<&'a str, PropertyError> {
    match resolve_with_type(doc, Some(TypeTag::String), path)? {
        Value::String(s) => Ok(s),
        _ => Ok(""),
    }
}

/// Get a boolean property.
pub fn get_bool(doc: &Value, path: &[PathStep]) -> Result<bool, PropertyError> {
    match resolve_with_type(doc, Some(TypeTag::Bool), path)? {
        Value::Bool(b) => Ok(*b),
        _ => Ok(false),
    }
}
