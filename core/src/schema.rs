//! Validation of untyped update bodies into [`TodoPatch`].
//!
//! # Design
//! The schema is an object with two optional, independently typed fields:
//! `complete` (boolean) and `description` (string). Values are coerced the
//! permissive way schema libraries usually do: `"true"`, `"0"`, `1` and
//! friends are booleans; numbers and booleans stringify into descriptions.
//! `null` is never accepted for an optional field. Unknown fields are
//! ignored. The first failing field wins.

use serde_json::{Map, Number, Value};

use crate::error::ValidationError;
use crate::types::TodoPatch;

/// Expected type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Boolean,
    String,
}

impl FieldType {
    fn name(self) -> &'static str {
        match self {
            FieldType::Boolean => "boolean",
            FieldType::String => "string",
        }
    }
}

/// A named, optional field in the update schema.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub ty: FieldType,
}

/// Fields accepted by a `PUT` body, in validation order.
pub const UPDATE_SCHEMA: [Field; 2] = [
    Field {
        name: "complete",
        ty: FieldType::Boolean,
    },
    Field {
        name: "description",
        ty: FieldType::String,
    },
];

/// Validate a parsed JSON payload against [`UPDATE_SCHEMA`].
pub fn validate(payload: &Value) -> Result<TodoPatch, ValidationError> {
    let object = as_object(payload)?;

    let mut patch = TodoPatch::default();
    for field in UPDATE_SCHEMA {
        let Some(raw) = object.get(field.name) else {
            continue;
        };
        match field.ty {
            FieldType::Boolean => patch.complete = Some(coerce_bool(field, raw)?),
            FieldType::String => patch.description = Some(coerce_string(field, raw)?),
        }
    }
    Ok(patch)
}

fn as_object(payload: &Value) -> Result<&Map<String, Value>, ValidationError> {
    match payload {
        Value::Object(map) => Ok(map),
        Value::Null => Err(ValidationError::null("this")),
        other => Err(ValidationError::type_mismatch("this", "object", other)),
    }
}

fn coerce_bool(field: Field, raw: &Value) -> Result<bool, ValidationError> {
    let coerced = match raw {
        Value::Bool(b) => Some(*b),
        Value::String(s) => bool_from_text(s),
        Value::Number(n) => match n.as_f64() {
            Some(v) if v == 1.0 => Some(true),
            Some(v) if v == 0.0 => Some(false),
            _ => None,
        },
        Value::Null => return Err(ValidationError::null(field.name)),
        Value::Array(_) | Value::Object(_) => None,
    };
    coerced.ok_or_else(|| ValidationError::type_mismatch(field.name, field.ty.name(), raw))
}

fn bool_from_text(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") || s == "1" {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") || s == "0" {
        Some(false)
    } else {
        None
    }
}

fn coerce_string(field: Field, raw: &Value) -> Result<String, ValidationError> {
    match raw {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(number_text(n)),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Err(ValidationError::null(field.name)),
        Value::Array(_) | Value::Object(_) => Err(ValidationError::type_mismatch(
            field.name,
            field.ty.name(),
            raw,
        )),
    }
}

/// Whole-valued floats print without a fraction (`1.0` as `1`, `1.5e3` as `1500`).
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(v) if n.is_f64() && v.is_finite() && v.fract() == 0.0 => format!("{v}"),
        _ => n.to_string(),
    }
}
