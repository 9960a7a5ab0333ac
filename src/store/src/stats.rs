//! Typed stat map with dot-path access.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Raw entity statistics keyed by dot path, e.g. `custom.play_time`.
///
/// Lookups never fail: missing keys and non-finite values read as 0, which
/// keeps every caller safe against partial or corrupt stat data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct StatMap(HashMap<String, f64>);

impl StatMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value at `path`, or 0.0 when absent or non-finite.
    pub fn value(&self, path: &str) -> f64 {
        match self.0.get(path) {
            Some(v) if v.is_finite() => *v,
            _ => 0.0,
        }
    }

    pub fn set(&mut self, path: impl Into<String>, value: f64) {
        self.0.insert(path.into(), value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &f64)> {
        self.0.iter()
    }

    /// Flatten a nested JSON stats document into dot paths.
    ///
    /// `{"custom": {"play_time": 7}}` becomes `custom.play_time = 7.0`.
    /// Non-numeric leaves are skipped.
    pub fn from_json(value: &Value) -> Self {
        let mut map = Self::new();
        flatten(value, String::new(), &mut map);
        map
    }
}

impl FromIterator<(String, f64)> for StatMap {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn flatten(value: &Value, prefix: String, out: &mut StatMap) {
    match value {
        Value::Object(fields) => {
            for (key, child) in fields {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(child, path, out);
            }
        }
        Value::Number(n) => {
            if let Some(v) = n.as_f64() {
                out.set(prefix, v);
            }
        }
        _ => {}
    }
}
