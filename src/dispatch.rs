//! Dispatch on the key of a key-tagged value

use std::collections::BTreeMap;
use std::fmt;

use log::trace;
use serde_json::Value;

use crate::error::{Error, MatchError};
use crate::tagged::unpack;

type Action<'a, T> = Box<dyn Fn(&Value, &str) -> T + 'a>;

/// A mapping from keys to the actions that handle them, with an optional
/// fallback for keys no entry covers.
///
/// Built by chaining [`on`](HandlerMap::on) calls; every entry is a
/// function by construction, so dispatch is a plain lookup. The map need
/// not be exhaustive. Registering the same key twice replaces the earlier
/// action.
pub struct HandlerMap<'a, T> {
    actions: BTreeMap<String, Action<'a, T>>,
    otherwise: Option<Action<'a, T>>,
}

impl<'a, T> HandlerMap<'a, T> {
    /// Creates an empty handler map.
    pub fn new() -> Self {
        HandlerMap {
            actions: BTreeMap::new(),
            otherwise: None,
        }
    }

    /// Registers the action to run when `key` matches.
    ///
    /// The action receives the payload first and the matched key second.
    pub fn on<F>(mut self, key: impl Into<String>, action: F) -> Self
    where
        F: Fn(&Value, &str) -> T + 'a,
    {
        self.actions.insert(key.into(), Box::new(action));
        self
    }

    /// Registers a fallback, run with the same `(payload, key)` signature
    /// when no entry matches the key.
    pub fn otherwise<F>(mut self, action: F) -> Self
    where
        F: Fn(&Value, &str) -> T + 'a,
    {
        self.otherwise = Some(Box::new(action));
        self
    }
}

impl<T> Default for HandlerMap<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for HandlerMap<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerMap")
            .field("keys", &self.actions.keys().collect::<Vec<_>>())
            .field("otherwise", &self.otherwise.is_some())
            .finish()
    }
}

/// Runs an action depending on the single key of a key-tagged value, and
/// returns that action's result.
///
/// Similar to a `match` over the variant name: at most one action runs per
/// call. The matched action is called with the payload and the key,
/// respectively. When no entry matches, the map's fallback runs instead;
/// without a fallback the call fails.
///
/// ```
/// use key_tagged::{match_key, HandlerMap};
/// use serde_json::json;
///
/// let handlers = HandlerMap::new()
///     .on("circle", |val, _key| val["radius"].as_f64().unwrap_or(0.0) * 2.0)
///     .otherwise(|_val, _key| 0.0);
///
/// assert_eq!(match_key(&json!({ "circle": { "radius": 2.0 } }), &handlers)?, 4.0);
/// assert_eq!(match_key(&json!({ "blob": null }), &handlers)?, 0.0);
/// # Ok::<(), key_tagged::Error>(())
/// ```
///
/// # Errors
///
/// Fails with [`Error::Conformance`] when `value` is not a key-tagged
/// value, and with [`Error::Match`] when no entry matches the key and no
/// fallback was registered.
pub fn match_key<T>(value: &Value, handlers: &HandlerMap<'_, T>) -> Result<T, Error> {
    let (key, payload) = unpack(value)?;

    if let Some(action) = handlers.actions.get(key) {
        return Ok(action(payload, key));
    }

    match &handlers.otherwise {
        Some(action) => {
            trace!("no action for key {key}, running fallback");
            Ok(action(payload, key))
        }
        None => Err(MatchError {
            key: key.to_string(),
        }
        .into()),
    }
}

/// Former name of [`match_key`]; identical behavior.
#[deprecated(since = "0.3.0", note = "renamed to match_key")]
pub fn on_key<T>(value: &Value, handlers: &HandlerMap<'_, T>) -> Result<T, Error> {
    match_key(value, handlers)
}
