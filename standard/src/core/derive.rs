//! Projection of store fields onto a flat set of output keys.
//!
//! A mapping such as `{ trigger: "appStore" }` projects `stores.appStore.trigger`
//! onto `trigger`; `{ x: "a.b" }` projects `stores.a.b` onto `x`.

use crate::errors::{Error, Result};
use crate::value::{Map, Value};

/// Ordered output-key to source-path entries.
///
/// Re-inserting an existing output key replaces its path in place, keeping
/// its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: Vec<(String, String)>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, output_key: impl Into<String>, source_path: impl Into<String>) {
        let output_key = output_key.into();
        let source_path = source_path.into();
        match self.entries.iter_mut().find(|(key, _)| *key == output_key) {
            Some(entry) => entry.1 = source_path,
            None => self.entries.push((output_key, source_path)),
        }
    }

    pub fn with(mut self, output_key: impl Into<String>, source_path: impl Into<String>) -> Self {
        self.insert(output_key, source_path);
        self
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, path)| (key.as_str(), path.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, P: Into<String>> FromIterator<(K, P)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        for (key, path) in iter {
            mapping.insert(key, path);
        }
        mapping
    }
}

/// Build a mapping from a JSON object whose values are all strings.
///
/// Object key order is kept, so entries are projected in document order.
impl TryFrom<serde_json::Value> for Mapping {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        let serde_json::Value::Object(entries) = value else {
            return Err(Error::InvalidMapping("expected a JSON object".to_string()));
        };
        let mut mapping = Mapping::new();
        for (key, path) in entries {
            let serde_json::Value::String(path) = path else {
                return Err(Error::InvalidMapping(format!(
                    "source path for '{}' must be a string",
                    key
                )));
            };
            mapping.insert(key, path);
        }
        Ok(mapping)
    }
}

/// Split a source path into `(store_name, field_key)`.
///
/// Without a `.`, the field key is the output key. Only the first two
/// segments are used: `"a.b.c"` reads field `b` of store `a`.
pub fn split_source_path<'a>(source_path: &'a str, output_key: &'a str) -> (&'a str, &'a str) {
    match source_path.split_once('.') {
        Some((store_name, rest)) => {
            let field_key = rest.split_once('.').map_or(rest, |(field, _)| field);
            (store_name, field_key)
        }
        None => (source_path, output_key),
    }
}

/// A projector holding a [`Mapping`], applied to stores with [`Derive::project`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derive {
    mapping: Mapping,
}

impl Derive {
    pub fn new(mapping: Mapping) -> Self {
        Self { mapping }
    }

    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    /// Project `store` through the mapping.
    ///
    /// Returns `Null` when no entry names a store present in `store` (or
    /// `store` is not an object); otherwise an object holding one key per
    /// resolved entry. A resolved store that lacks the field, or is not an
    /// object, contributes `Undefined`. The store is never modified.
    pub fn project(&self, store: &Value) -> Value {
        derive_from(&self.mapping, store)
    }
}

/// Capture `mapping` in a projector, mirroring `derive(mapping)(store)`.
pub fn derive(mapping: Mapping) -> Derive {
    Derive::new(mapping)
}

/// Two-argument form of [`derive`].
pub fn derive_from(mapping: &Mapping, store: &Value) -> Value {
    let Some(stores) = store.as_object() else {
        tracing::debug!(tag = %store.tag(), "derive store is not an object");
        return Value::Null;
    };
    let mut result: Option<Map> = None;
    for (output_key, source_path) in mapping.entries() {
        let (store_name, field_key) = split_source_path(source_path, output_key);
        let Some(entry) = stores.get(store_name) else {
            tracing::trace!(output_key, store_name, "derive entry unresolved");
            continue;
        };
        let value = entry.field(field_key).cloned().unwrap_or_default();
        result
            .get_or_insert_with(Map::new)
            .insert(output_key.to_string(), value);
    }
    result.map_or(Value::Null, Value::Object)
}
