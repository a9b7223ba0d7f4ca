//! Raw provider payloads
//!
//! Input providers hand the core a loosely typed key/value payload at
//! creation and on every move. Only the keys below are interpreted; anything
//! else is ignored. A key that is missing, or whose value has the wrong type,
//! leaves the corresponding attribute unchanged.
//!
//! | Key | Type | Effect |
//! |-----|------|--------|
//! | `sx`, `sy`, `sz` | number | normalized position |
//! | `profile` | array of strings, or comma separated string | replaces the profile |
//! | `button` | string | pointer button |
//! | `pressure` | number | contact pressure |
//! | `angle` / `a` | number | 2D angle |
//! | `markerid` / `fid` | integer | marker (fiducial) id |
//! | `shape` | any | opaque contact shape |

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::profile::{Button, Profile};

/// Key/value payload supplied by an input provider
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawArgs {
    values: Map<String, Value>,
}

impl RawArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalized 2D position payload
    pub fn at(sx: f64, sy: f64) -> Self {
        Self::new().with("sx", sx).with("sy", sy)
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn float(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    pub fn int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// First numeric value among `keys`
    pub(crate) fn float_any(&self, keys: &[&str]) -> Option<f64> {
        keys.iter().find_map(|key| self.float(key))
    }

    pub(crate) fn int_any(&self, keys: &[&str]) -> Option<i64> {
        keys.iter().find_map(|key| self.int(key))
    }

    pub fn profile(&self) -> Option<Profile> {
        match self.get("profile")? {
            Value::Array(items) => Some(items.iter().filter_map(Value::as_str).collect()),
            Value::String(list) => Some(
                list.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .collect(),
            ),
            _ => None,
        }
    }

    pub fn button(&self) -> Option<Button> {
        self.text("button").and_then(|name| name.parse().ok())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Map<String, Value>> for RawArgs {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}
