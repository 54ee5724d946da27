use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::criteria::{Column, Value};

/// Capability for enum-like wrapper types that carry a scalar payload.
///
/// A wrapped operand is unwrapped to `scalar_value()` before rendering, so
/// domain enums (status codes, typed keys) can appear directly in criteria.
pub trait ScalarValue: std::fmt::Debug + Send + Sync {
    /// The underlying bind value.
    fn scalar_value(&self) -> Value;
}

/// One side of a leaf criterion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "OperandRepr", into = "OperandRepr")]
pub enum Operand {
    /// A column reference, rendered as its qualified name with no binding.
    Column(Column),
    /// A literal value, rendered as a placeholder with one binding.
    Value(Value),
    /// A list of values, for IN / NOT IN.
    List(Vec<Value>),
    /// An enum-like wrapper; unwrapped to its scalar before rendering.
    Wrapped(Arc<dyn ScalarValue>),
}

impl Operand {
    /// True when the operand is NULL, either directly or through a wrapper
    /// whose payload is null.
    pub fn is_null(&self) -> bool {
        match self {
            Operand::Value(v) => v.is_null(),
            Operand::Wrapped(w) => w.scalar_value().is_null(),
            _ => false,
        }
    }

    /// True when the operand is a text value (directly or wrapped).
    pub fn is_text(&self) -> bool {
        match self {
            Operand::Value(v) => v.is_text(),
            Operand::Wrapped(w) => w.scalar_value().is_text(),
            _ => false,
        }
    }

    /// Short type label used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Column(_) => "column",
            Operand::Value(v) => v.type_name(),
            Operand::List(_) => "list",
            Operand::Wrapped(_) => "wrapped",
        }
    }
}

impl PartialEq for Operand {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Operand::Column(a), Operand::Column(b)) => a == b,
            (Operand::Value(a), Operand::Value(b)) => a == b,
            (Operand::List(a), Operand::List(b)) => a == b,
            (Operand::Wrapped(a), Operand::Wrapped(b)) => a.scalar_value() == b.scalar_value(),
            _ => false,
        }
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Column(c) => write!(f, "{}", c),
            Operand::Value(v) => write!(f, "{}", v),
            Operand::List(vs) => {
                write!(f, "[")?;
                for (i, v) in vs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            Operand::Wrapped(w) => write!(f, "{}", w.scalar_value()),
        }
    }
}

impl From<Column> for Operand {
    fn from(c: Column) -> Self {
        Operand::Column(c)
    }
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Operand::Value(v)
    }
}

impl From<Vec<Value>> for Operand {
    fn from(vs: Vec<Value>) -> Self {
        Operand::List(vs)
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::Value(Value::Text(s.to_string()))
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand::Value(Value::Text(s))
    }
}

impl From<i32> for Operand {
    fn from(n: i32) -> Self {
        Operand::Value(Value::Int(n as i64))
    }
}

impl From<i64> for Operand {
    fn from(n: i64) -> Self {
        Operand::Value(Value::Int(n))
    }
}

impl From<bool> for Operand {
    fn from(b: bool) -> Self {
        Operand::Value(Value::Bool(b))
    }
}

impl From<Arc<dyn ScalarValue>> for Operand {
    fn from(w: Arc<dyn ScalarValue>) -> Self {
        Operand::Wrapped(w)
    }
}

/// Serde mirror: wrapped operands serialize as their scalar payload, the
/// only information that survives a round trip.
#[derive(Serialize, Deserialize)]
enum OperandRepr {
    Column(Column),
    Value(Value),
    List(Vec<Value>),
}

impl From<Operand> for OperandRepr {
    fn from(operand: Operand) -> Self {
        match operand {
            Operand::Column(c) => OperandRepr::Column(c),
            Operand::Value(v) => OperandRepr::Value(v),
            Operand::List(vs) => OperandRepr::List(vs),
            Operand::Wrapped(w) => OperandRepr::Value(w.scalar_value()),
        }
    }
}

impl From<OperandRepr> for Operand {
    fn from(repr: OperandRepr) -> Self {
        match repr {
            OperandRepr::Column(c) => Operand::Column(c),
            OperandRepr::Value(v) => Operand::Value(v),
            OperandRepr::List(vs) => Operand::List(vs),
        }
    }
}
