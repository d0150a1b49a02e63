//! Per-segment attribute storage
//!
//! Every segment owns exactly one [`AttributeMap`], created empty with the
//! segment and destroyed with it. The map holds at most one value per
//! attribute: `set` inserts or overwrites, `get` is a pure lookup. Neither
//! operation can fail; absence is reported as `None`, never as a sentinel
//! payload.

use super::attribute::Attribute;
use super::value::Value;
use std::collections::HashMap;
use std::fmt;

/// Mapping from [`Attribute`] to [`Value`], owned by one segment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeMap {
    entries: HashMap<Attribute, Value>,
}

impl AttributeMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the value for `attr`, if present.
    pub fn get(&self, attr: &Attribute) -> Option<&Value> {
        self.entries.get(attr)
    }

    /// Look up by attribute name.
    pub fn get_named(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Insert or overwrite the value for `attr`. Always succeeds; keys
    /// stay unique, so setting the same attribute twice leaves one entry.
    pub fn set(&mut self, attr: impl Into<Attribute>, value: impl Into<Value>) {
        self.entries.insert(attr.into(), value.into());
    }

    /// Remove the value for `attr`, returning it if it was present.
    pub fn remove(&mut self, attr: &Attribute) -> Option<Value> {
        self.entries.remove(attr)
    }

    /// Whether a value is present for `attr`.
    pub fn contains(&self, attr: &Attribute) -> bool {
        self.entries.contains_key(attr)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&Attribute, &Value)> {
        self.entries.iter()
    }

    /// Entries sorted by attribute name, for deterministic display and
    /// snapshots. Allocates; the plain accessors stay O(1).
    pub fn sorted_iter(&self) -> impl Iterator<Item = (&Attribute, &Value)> {
        let mut entries: Vec<(&Attribute, &Value)> = self.entries.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries.into_iter()
    }
}

impl fmt::Display for AttributeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (attr, value) in self.sorted_iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", attr, value)?;
            first = false;
        }
        Ok(())
    }
}
