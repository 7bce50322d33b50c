//! The path-walking core.
//!
//! Walks a decoded document step by step, validating structure at every
//! step and the expected type at the end, and reports failures with the
//! position and stringified key of the step that failed.

use serde_json::Value;

use crate::error::{PropertyError, ResolveError};
use crate::types::{LookupOption, PathStep, TypeTag};

/// Resolve a lookup path against a decoded document.
///
/// Walks `path` in order. Option flags must appear before any key or index
/// step and only update resolver state; key steps navigate into objects,
/// index steps into arrays. After traversal, if `expected` is given and the
/// resolved value is not null, the value must carry that type tag. A
/// resolved null with [`LookupOption::ErrorOnNull`] in the path becomes a
/// [`PropertyError::NullValue`].
///
/// An empty path resolves to `doc` itself; if that fails the type or null
/// check, the error reports index 0 and an empty key.
///
/// # Errors
///
/// - [`ResolveError`] for any structural, ordering, or type-mismatch
///   failure, tagged with the failing step's position.
/// - [`PropertyError::NullValue`] when the value is null and `ErrorOnNull`
///   was requested.
///
/// # Example
///
/// ```
/// use json_prop::{resolve_with_type, path, TypeTag};
/// use serde_json::json;
///
/// let doc = json!({"items": [{"id": 7}]});
/// let val = resolve_with_type(&doc, Some(TypeTag::Number), &path!["items", 0, "id"]).unwrap();
/// assert_eq!(val, &json!(7));
/// ```
pub fn resolve_with_type<'a>(
    doc: &'a Value,
    expected: Option<TypeTag>,
    path: &[PathStep],
) -> Result<&'a Value, PropertyError> {
    let mut current = doc;
    let mut error_on_null = false;
    let mut expect_options = true;
    let mut last_index = 0usize;
    let mut last_key = String::new();

    for (i, step) in path.iter().enumerate() {
        match step {
            PathStep::Opt(opt) => {
                if !expect_options {
                    return Err(ResolveError::OptionAfterKey {
                        index: i,
                        key: opt.to_string(),
                    }
                    .into());
                }
                last_index = i;
                match opt {
                    LookupOption::ErrorOnNull => error_on_null = true,
                }
            }
            PathStep::Index(idx) => {
                expect_options = false;
                last_index = i;
                last_key = idx.to_string();
                match current {
                    Value::Array(arr) => {
                        let element = usize::try_from(*idx).ok().and_then(|idx| arr.get(idx));
                        match element {
                            Some(value) => current = value,
                            None => {
                                return Err(ResolveError::IndexOutOfBounds {
                                    index: i,
                                    key: last_key,
                                }
                                .into())
                            }
                        }
                    }
                    _ => {
                        return Err(ResolveError::NotAnArray {
                            index: i,
                            key: last_key,
                        }
                        .into())
                    }
                }
            }
            PathStep::Key(key) => {
                expect_options = false;
                last_index = i;
                last_key = key.clone();
                match current {
                    Value::Object(map) => match map.get(key) {
                        Some(value) => current = value,
                        None => {
                            return Err(ResolveError::PropertyNotFound {
                                index: i,
                                key: last_key,
                            }
                            .into())
                        }
                    },
                    _ => {
                        return Err(ResolveError::NotAnObject {
                            index: i,
                            key: last_key,
                        }
                        .into())
                    }
                }
            }
        }
    }

    // Null is exempt from the type check: any JSON value can be null.
    if let Some(tag) = expected {
        if !current.is_null() && !tag.matches(current) {
            return Err(ResolveError::TypeMismatch {
                index: last_index,
                key: last_key,
                expected: tag,
            }
            .into());
        }
    }

    if current.is_null() && error_on_null {
        return Err(PropertyError::NullValue { key: last_key });
    }

    Ok(current)
}

/// Resolve a lookup path without a type assertion.
///
/// Equivalent to [`resolve_with_type`] with no expected type: whatever value
/// the path reaches is returned, null included.
pub fn resolve<'a>(doc: &'a Value, path: &[PathStep]) -> Result<&'a Value, PropertyError> {
    resolve_with_type(doc, None, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use serde_json::json;

    #[test]
    fn test_resolve_empty_path_returns_root() {
        let doc = json!({"a": 1});
        assert_eq!(resolve(&doc, &[]).unwrap(), &doc);

        let scalar = json!(42);
        assert_eq!(resolve(&scalar, &[]).unwrap(), &scalar);
    }

    #[test]
    fn test_resolve_nested() {
        let doc = json!({"a": {"b": [10, 20]}});
        assert_eq!(resolve(&doc, &path!["a", "b", 1]).unwrap(), &json!(20));
    }

    #[test]
    fn test_resolve_missing_property() {
        let doc = json!({"a": 1});
        let err = resolve(&doc, &path!["b"]).unwrap_err();
        assert_eq!(
            err,
            PropertyError::Resolve(ResolveError::PropertyNotFound {
                index: 0,
                key: "b".to_string(),
            })
        );
    }

    #[test]
    fn test_resolve_key_into_scalar() {
        let doc = json!({"a": 1});
        let err = resolve(&doc, &path!["a", "b"]).unwrap_err();
        assert_eq!(
            err,
            PropertyError::Resolve(ResolveError::NotAnObject {
                index: 1,
                key: "b".to_string(),
            })
        );
    }

    #[test]
    fn test_resolve_index_into_object() {
        let doc = json!({"a": 1});
        let err = resolve(&doc, &path![0]).unwrap_err();
        assert_eq!(
            err,
            PropertyError::Resolve(ResolveError::NotAnArray {
                index: 0,
                key: "0".to_string(),
            })
        );
    }

    #[test]
    fn test_resolve_index_bounds() {
        let doc = json!([1, 2, 3]);
        assert_eq!(resolve(&doc, &path![2]).unwrap(), &json!(3));

        // Length itself is out of bounds (exclusive upper bound).
        let err = resolve(&doc, &path![3]).unwrap_err();
        assert_eq!(
            err,
            PropertyError::Resolve(ResolveError::IndexOutOfBounds {
                index: 0,
                key: "3".to_string(),
            })
        );

        let err = resolve(&doc, &path![-1]).unwrap_err();
        assert_eq!(
            err,
            PropertyError::Resolve(ResolveError::IndexOutOfBounds {
                index: 0,
                key: "-1".to_string(),
            })
        );
    }

    #[test]
    fn test_resolve_type_check() {
        let doc = json!({"n": 42});
        assert_eq!(
            resolve_with_type(&doc, Some(TypeTag::Number), &path!["n"]).unwrap(),
            &json!(42)
        );

        let err = resolve_with_type(&doc, Some(TypeTag::String), &path!["n"]).unwrap_err();
        assert_eq!(
            err,
            PropertyError::Resolve(ResolveError::TypeMismatch {
                index: 0,
                key: "n".to_string(),
                expected: TypeTag::String,
            })
        );
    }

    #[test]
    fn test_resolve_null_passes_type_check() {
        let doc = json!({"n": null});
        assert_eq!(
            resolve_with_type(&doc, Some(TypeTag::String), &path!["n"]).unwrap(),
            &Value::Null
        );
    }

    #[test]
    fn test_resolve_error_on_null() {
        let doc = json!({"n": null});
        let err = resolve(&doc, &path![LookupOption::ErrorOnNull, "n"]).unwrap_err();
        assert_eq!(
            err,
            PropertyError::NullValue {
                key: "n".to_string(),
            }
        );

        // Without the option, null resolves normally.
        assert_eq!(resolve(&doc, &path!["n"]).unwrap(), &Value::Null);
    }

    #[test]
    fn test_resolve_option_after_key_rejected() {
        let doc = json!({"n": null});
        let err = resolve(&doc, &path!["n", LookupOption::ErrorOnNull]).unwrap_err();
        assert_eq!(
            err,
            PropertyError::Resolve(ResolveError::OptionAfterKey {
                index: 1,
                key: "ErrorOnNull".to_string(),
            })
        );
    }

    #[test]
    fn test_resolve_empty_path_error_context() {
        // Type mismatch on an empty path reports index 0 and an empty key.
        let doc = json!(42);
        let err = resolve_with_type(&doc, Some(TypeTag::String), &[]).unwrap_err();
        assert_eq!(
            err,
            PropertyError::Resolve(ResolveError::TypeMismatch {
                index: 0,
                key: String::new(),
                expected: TypeTag::String,
            })
        );

        // Same for an all-options path resolving to null.
        let err = resolve(&Value::Null, &path![LookupOption::ErrorOnNull]).unwrap_err();
        assert_eq!(err, PropertyError::NullValue { key: String::new() });
    }

    #[test]
    fn test_resolve_mismatch_reports_last_step() {
        let doc = json!({"a": {"b": "text"}});
        let err = resolve_with_type(&doc, Some(TypeTag::Number), &path!["a", "b"]).unwrap_err();
        assert_eq!(
            err,
            PropertyError::Resolve(ResolveError::TypeMismatch {
                index: 1,
                key: "b".to_string(),
                expected: TypeTag::Number,
            })
        );
    }
}
