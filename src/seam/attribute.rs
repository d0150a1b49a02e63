//! Attribute identifiers
//!
//! An attribute names a piece of contextual metadata attached to a segment:
//! a language, a casing rule, an indentation level computed by an earlier
//! pass. Attributes constructed from the same name compare, hash, and order
//! identically, so any two of them are interchangeable as map keys. The
//! backing allocation is shared where possible, but sharing is an
//! optimization only; value equality governs every lookup.
//!
//! Interning goes through [`AttributeSet`], an explicit object created
//! where the tree is built and passed along. There is no process-wide
//! instance.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A named key for contextual metadata on a segment.
///
/// Cheap to clone (a shared allocation handle). Equality and hashing are
/// based on the name alone.
#[derive(Debug, Clone)]
pub struct Attribute(Arc<str>);

impl Attribute {
    /// Create an attribute from a name.
    ///
    /// Total over any string; the empty name is a legal (if unusual) key.
    pub fn of(name: impl Into<Arc<str>>) -> Self {
        Attribute(name.into())
    }

    /// The attribute's name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Attribute {
    fn eq(&self, other: &Self) -> bool {
        // Pointer comparison is a fast path for interned attributes; the
        // name comparison is what defines equality.
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Eq for Attribute {}

impl Hash for Attribute {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must stay consistent with `Borrow<str>`: hash the name exactly
        // as `str` hashes itself.
        self.0.hash(state);
    }
}

impl PartialOrd for Attribute {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Attribute {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl Borrow<str> for Attribute {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Attribute {
    fn from(name: &str) -> Self {
        Attribute::of(name)
    }
}

impl From<String> for Attribute {
    fn from(name: String) -> Self {
        Attribute::of(name)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Deduplicating attribute interner.
///
/// Tree-construction code that creates many segments with the same
/// attribute names can route them through a set so equal names share one
/// allocation. Purely an efficiency layer: [`Attribute::of`] alone is
/// correct, the set only dedups allocations.
#[derive(Debug, Clone, Default)]
pub struct AttributeSet {
    names: HashSet<Attribute>,
}

impl AttributeSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a name, returning the canonical attribute for it.
    ///
    /// The first call for a name allocates; later calls return handles to
    /// the same allocation.
    pub fn intern(&mut self, name: &str) -> Attribute {
        if let Some(existing) = self.names.get(name) {
            return existing.clone();
        }
        let attr = Attribute::of(name);
        self.names.insert(attr.clone());
        attr
    }

    /// Number of distinct names interned so far.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no names have been interned.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
