//! Loosely typed arguments for callers that receive untyped input
//! (command lines, scripting bridges) and must validate before shifting.

use crate::cipher::caesar_cipher;
use crate::error::{CipherError, Result};
use crate::shift::{ALPHABET_LEN, Shift, floor_mod};

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Classify a raw token: integer first, then real, otherwise text
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return Value::Int(n);
        }
        if let Some(residue) = reduce_integer(trimmed) {
            return Value::Int(residue);
        }
        match trimmed.parse::<f64>() {
            // "nan" / "inf" parse as f64 but are not usable shifts
            Ok(f) if f.is_finite() => Value::Float(f),
            _ => Value::Text(raw.to_string()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric values as a truncated shift; anything else is `None`
    pub fn as_shift(&self) -> Option<Shift> {
        match *self {
            Value::Int(n) => Some(Shift::new(n)),
            Value::Float(f) => Shift::from_real(f),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Exact residue mod 26 of a signed decimal integer of any length, keeping
/// the sign so the shift direction survives
fn reduce_integer(token: &str) -> Option<i64> {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let residue = digits.bytes().fold(0i64, |acc, b| {
        floor_mod(acc * 10 + i64::from(b - b'0'), ALPHABET_LEN)
    });
    Some(if negative { -residue } else { residue })
}

/// Validates untyped arguments, then applies [`caesar_cipher`]
///
/// A missing `shift` defaults to zero; an explicit [`Value::Null`] is rejected.
/// Text is checked before shift.
pub fn transform(text: &Value, shift: Option<&Value>) -> Result<String> {
    let text = text.as_text().ok_or(CipherError::NonStringText)?;
    let shift = match shift {
        None => Shift::default(),
        Some(v) => v.as_shift().ok_or(CipherError::NonNumericShift)?,
    };

    Ok(caesar_cipher(text, shift))
}
