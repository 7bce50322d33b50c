//! Schema-free lookup of nested values in decoded JSON documents.
//!
//! Decode arbitrary JSON into a generic value tree, then pull nested values
//! out of it with a path of mixed object keys and array indexes - no schema
//! structs required. Numbers stay in their lossless textual form until a
//! typed accessor converts them, and every failure is a typed error naming
//! the path step that failed.
//!
//! # Example
//!
//! ```
//! use json_prop::{decode_str, get_int, get_string, path, LookupOption};
//!
//! let doc = decode_str(r#"{"user": {"name": "ada", "logins": [3, 5]}}"#).unwrap();
//!
//! assert_eq!(get_string(&doc, &path!["user", "name"]).unwrap(), "ada");
//! assert_eq!(get_int(&doc, &path!["user", "logins", 1]).unwrap(), 5);
//!
//! // Opt in to strict null handling with a leading flag.
//! let doc = decode_str(r#"{"name": null}"#).unwrap();
//! assert!(get_string(&doc, &path![LookupOption::ErrorOnNull, "name"]).is_err());
//! ```
//!
//! Resolution never mutates the document; sharing a decoded [`Value`]
//! across threads for concurrent lookups is safe.

pub mod decode;
pub mod error;
pub mod get;
pub mod resolve;
pub mod types;
pub mod validate;

pub use decode::{decode_bytes, decode_str};
pub use error::{PropertyError, ResolveError};
pub use get::{get_array, get_bool, get_float, get_int, get_number, get_property, get_string};
pub use resolve::{resolve, resolve_with_type};
pub use types::{LookupOption, Path, PathStep, TypeTag};
pub use validate::{validate_path, MAX_PATH_LENGTH};

// Collaborator types callers need to hold decoded documents and numbers.
pub use serde_json::{Number, Value};
