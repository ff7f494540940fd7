//! Scalar values carried by structure elements
//!
//! This module defines [`Value`], the payload of every element. Values are
//! either integers or free text; the playground accepts whatever the student
//! types and only upgrades it to [`Value::Int`] when the text is an exact
//! integer literal.
//!
//! # Parsing Rules
//!
//! - Surrounding whitespace is trimmed
//! - Blank input yields no value at all
//! - `"42"` and `"-7"` become integers
//! - `"007"`, `"+3"`, `"3.5"` stay text so they display exactly as typed

use std::fmt;

/// Payload stored in an element
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Int(i64),
    Text(String),
}

impl Value {
    /// Parse raw user input, returns None for blank input
    pub fn parse(raw: &str) -> Option<Value> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        match trimmed.parse::<i64>() {
            // Only accept canonical integers so the display matches the input
            Ok(n) if n.to_string() == trimmed => Some(Value::Int(n)),
            _ => Some(Value::Text(trimmed.to_string())),
        }
    }

}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}
