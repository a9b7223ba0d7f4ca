//! Per-event user data
//!
//! Consumers annotate events with arbitrary values (e.g. the widget that
//! started a drag). Values are JSON-like so they can be cloned with the event
//! and logged.

use rustc_hash::FxHashMap;
use serde_json::Value;

/// Open key/value annotations attached to a motion event
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserData {
    entries: FxHashMap<String, Value>,
}

impl UserData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Set a value, returning the previous one
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let mut ud = UserData::new();
        assert!(ud.set("drag_origin", "scrollview").is_none());
        assert_eq!(ud.set("drag_origin", 3).unwrap(), Value::from("scrollview"));
        assert_eq!(ud.get("drag_origin"), Some(&Value::from(3)));
        assert!(ud.contains("drag_origin"));
        assert_eq!(ud.remove("drag_origin"), Some(Value::from(3)));
        assert!(ud.is_empty());
    }
}
