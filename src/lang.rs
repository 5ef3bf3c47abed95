//! JSON locale dictionary with dot-path key lookup.
use serde_json::{Map, Value};

/// One language's translations: a (possibly nested) JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary(Map<String, Value>);

impl Dictionary {
    /// Empty dictionary, also cached as the "tried and not found" marker.
    pub fn empty() -> Self { Self(Map::new()) }

    /// Wrap a parsed document. Anything but a JSON object yields `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        match value { Value::Object(map) => Some(Self(map)), _ => None }
    }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Resolve a dot-separated key (`"nav.home"`) level by level.
    pub fn get(&self, key: &str) -> Option<&Value> { lookup(&self.0, key) }

    pub fn as_value(&self) -> Value { Value::Object(self.0.clone()) }
}

impl Default for Dictionary {
    fn default() -> Self { Self::empty() }
}

/// Walk `key` through nested objects. Stops with `None` at the first absent
/// level or the first non-object it has to descend into. A present value is
/// always `Some`, even `""`, `false`, `0` or `null`.
pub fn lookup<'a>(root: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    let mut parts = key.split('.');
    let mut current = root.get(parts.next()?)?;
    for part in parts {
        current = current.as_object()?.get(part)?;
    }
    Some(current)
}

/// Text written into the page for a found value.
pub fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
