//! Boundary validation for lookup paths.

use crate::error::ResolveError;
use crate::types::PathStep;

/// Maximum allowed path depth for [`validate_path`].
pub const MAX_PATH_LENGTH: usize = 256;

/// Validate a lookup path before use.
///
/// Checks in one pass that option flags only appear before the first key or
/// index step, and that the path does not exceed [`MAX_PATH_LENGTH`] steps.
/// The resolver enforces the ordering rule itself during traversal; this is
/// an up-front check for callers accepting paths across a boundary. The
/// depth cap applies here only.
///
/// # Example
///
/// ```
/// use json_prop::{validate_path, path, LookupOption};
///
/// validate_path(&path![LookupOption::ErrorOnNull, "foo", 0]).unwrap();
/// validate_path(&path!["foo", LookupOption::ErrorOnNull]).unwrap_err();
/// ```
pub fn validate_path(path: &[PathStep]) -> Result<(), ResolveError> {
    if path.len() > MAX_PATH_LENGTH {
        return Err(ResolveError::PathTooLong);
    }
    let mut expect_options = true;
    for (index, step) in path.iter().enumerate() {
        match step {
            PathStep::Opt(opt) => {
                if !expect_options {
                    return Err(ResolveError::OptionAfterKey {
                        index,
                        key: opt.to_string(),
                    });
                }
            }
            PathStep::Key(_) | PathStep::Index(_) => expect_options = false,
        }
    }
    Ok(())
}
