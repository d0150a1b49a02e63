//! Attribute payload values
//!
//! The value attached to an attribute is opaque to the tree itself; passes
//! assign whatever they need. Rather than fully dynamic typing, the payload
//! is a small tagged union covering the kinds transformation passes
//! actually store: text, numbers, flags, and enum-like tags.
//!
//! Presence is always carried by `Option` at the lookup site. A present
//! value that happens to be "falsy" (`Int(0)`, `Bool(false)`, empty text)
//! is a found value, never an absence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payload stored under an attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Free-form text, e.g. a language code or a caption.
    Text(String),
    /// Signed integer, e.g. an indentation level or column count.
    Int(i64),
    /// Floating point, e.g. a scale factor.
    Float(f64),
    /// Boolean flag.
    Bool(bool),
    /// Enum-like symbolic marker, distinct from free text so passes can
    /// tell "the word left" from "the alignment left".
    Tag(String),
}

impl Value {
    /// Create a symbolic tag value.
    pub fn tag(name: impl Into<String>) -> Self {
        Value::Tag(name.into())
    }

    /// The text payload, if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The integer payload, if this is an `Int` value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// The float payload, if this is a `Float` value.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// The boolean payload, if this is a `Bool` value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// The tag name, if this is a `Tag` value.
    pub fn as_tag(&self) -> Option<&str> {
        match self {
            Value::Tag(name) => Some(name),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => write!(f, "{}", text),
            Value::Int(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", value),
            Value::Bool(value) => write!(f, "{}", value),
            Value::Tag(name) => write!(f, "{}", name),
        }
    }
}
