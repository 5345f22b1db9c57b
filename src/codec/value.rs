// Numeric scalar exchanged across the pack/unpack boundary

use serde::{Deserialize, Serialize};

/// A numeric scalar: integer up to 64 bits, or an IEEE-754 float
///
/// 32-bit floats are held widened to `f64`; narrowing happens at encode
/// time based on the directive. Untagged serde representation maps a plain
/// JSON number array directly onto a value sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

impl Value {
    /// Two's-complement bit pattern of the value, floats truncated
    pub fn as_u64(&self) -> u64 {
        match *self {
            Value::Unsigned(v) => v,
            Value::Signed(v) => v as u64,
            Value::Float(v) => v as i64 as u64,
        }
    }

    pub fn as_i64(&self) -> i64 {
        match *self {
            Value::Unsigned(v) => v as i64,
            Value::Signed(v) => v,
            Value::Float(v) => v as i64,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Value::Unsigned(v) => v as f64,
            Value::Signed(v) => v as f64,
            Value::Float(v) => v,
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }
}

macro_rules! value_from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Value::Unsigned(v as u64)
            }
        })*
    };
}

macro_rules! value_from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Value::Signed(v as i64)
            }
        })*
    };
}

value_from_unsigned!(u8, u16, u32, u64);
value_from_signed!(i8, i16, i32, i64);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}
