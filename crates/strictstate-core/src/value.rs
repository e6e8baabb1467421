use serde::{Deserialize, Serialize};

use crate::object::Object;

/// A runtime value held by a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Object(Box<Object>),
    /// A callable reference, identified by the function or closure name.
    Callable(String),
}

impl Value {
    /// Runtime type name, as reported in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Callable(_) => "callable",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Short rendering for error messages. Strings are truncated and
    /// containers summarized so a report never embeds a whole object graph.
    pub fn describe(&self) -> String {
        const MAX_STRING: usize = 32;
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => format!("{f:?}"),
            Value::String(s) if s.chars().count() > MAX_STRING => {
                let head: String = s.chars().take(MAX_STRING).collect();
                format!("\"{head}...\"")
            }
            Value::String(s) => format!("\"{s}\""),
            Value::Array(items) => format!("array({})", items.len()),
            Value::Object(obj) => format!("object({})", obj.class()),
            Value::Callable(name) => format!("callable({name})"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::Object(Box::new(obj))
    }
}

/// The state of a property slot at the time it is read.
///
/// `Absent` is a declared property that was never assigned. It is distinct
/// from `Present(Value::Null)`, a property explicitly holding null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum PropertyValue {
    Absent,
    Present(Value),
}

impl PropertyValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, PropertyValue::Absent)
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            PropertyValue::Present(v) => Some(v),
            PropertyValue::Absent => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Present(v) => v.type_name(),
            PropertyValue::Absent => "uninitialized",
        }
    }

    pub fn describe(&self) -> String {
        match self {
            PropertyValue::Present(v) => v.describe(),
            PropertyValue::Absent => "uninitialized".to_string(),
        }
    }
}

impl From<Value> for PropertyValue {
    fn from(v: Value) -> Self {
        PropertyValue::Present(v)
    }
}
