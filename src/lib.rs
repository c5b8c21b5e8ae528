#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![deny(unreachable_pub)]

//! Utilities for "key-tagged values": composite values with a single key,
//! hinting at their value. Useful for tagged unions encoded as plain JSON
//! objects rather than a dedicated sum type.
//!
//! A key-tagged value is a [`serde_json::Value`] that exposes exactly one
//! member: an object with one entry, or an array with one element (whose
//! key is its index, `"0"`). The member's name is the *key* and identifies
//! the variant; the member's value is the variant's payload.
//!
//! Because JSON keys are always strings, the questions the reference
//! semantics leave open on other hosts (symbol keys, non-enumerable
//! members, prototype members) are settled here by construction: only
//! string-named members that survive serialization exist in a `Value`, and
//! only those count.
//!
//! ```
//! use key_tagged::{get_key, is_key_tagged_value, unpack};
//! use serde_json::json;
//!
//! assert!(is_key_tagged_value(&json!({ "foo": "bar" })));
//! assert!(!is_key_tagged_value(&json!({ "foo": "bar", "herp": "derp" })));
//!
//! assert_eq!(get_key(&json!({ "content": 42 }))?, "content");
//! assert_eq!(unpack(&json!({ "content": 42 }))?, ("content", &json!(42)));
//! # Ok::<(), key_tagged::ConformanceError>(())
//! ```
//!
//! Dispatching on the key works like a `switch` over the variant name,
//! except that it has a return value and runs at most one arm per call:
//!
//! ```
//! use key_tagged::{match_key, HandlerMap};
//! use serde_json::json;
//!
//! let spell = match_key(
//!     &json!({ "sypha": "belnades" }),
//!     &HandlerMap::new()
//!         .on("trevor", |_val, _key| "vampire killer")
//!         .on("sypha", |_val, _key| "magic")
//!         .on("grant", |_val, _key| "daggers"),
//! )?;
//!
//! assert_eq!(spell, "magic");
//! # Ok::<(), key_tagged::Error>(())
//! ```

pub mod dispatch;
pub mod error;
pub mod tagged;

pub use dispatch::{match_key, on_key, HandlerMap};
pub use error::{ConformanceError, Error, MatchError};
pub use tagged::{get_key, is_key_tagged_value, unpack, unpack_record, Unpacked};

#[cfg(test)]
mod tests;
