// Fixed-width element encoding and decoding for all directive kinds

use super::value::Value;
use crate::directive::Kind;
use crate::format::Endianness;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ElementError {
    #[error("Insufficient data: expected {expected} bytes, got {actual}")]
    InsufficientData { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, ElementError>;

/// Read an unsigned integer of `width` bytes (1..=8)
pub fn read_uint(data: &[u8], width: usize, order: Endianness) -> Result<u64> {
    if data.len() < width {
        return Err(ElementError::InsufficientData {
            expected: width,
            actual: data.len(),
        });
    }
    let mut value: u64 = 0;
    match order {
        Endianness::Big => {
            for &byte in &data[..width] {
                value = (value << 8) | byte as u64;
            }
        }
        Endianness::Little => {
            for &byte in data[..width].iter().rev() {
                value = (value << 8) | byte as u64;
            }
        }
    }
    Ok(value)
}

/// Read a signed integer, sign-extending from `width` bytes to 64 bits
pub fn read_int(data: &[u8], width: usize, order: Endianness) -> Result<i64> {
    let raw = read_uint(data, width, order)?;
    let shift = 64 - 8 * width as u32;
    // Arithmetic shift propagates the element's sign bit
    Ok(((raw << shift) as i64) >> shift)
}

/// Read a 32-bit IEEE-754 float
pub fn read_f32(data: &[u8], order: Endianness) -> Result<f32> {
    let bits = read_uint(data, 4, order)? as u32;
    Ok(f32::from_bits(bits))
}

/// Read a 64-bit IEEE-754 float
pub fn read_f64(data: &[u8], order: Endianness) -> Result<f64> {
    let bits = read_uint(data, 8, order)?;
    Ok(f64::from_bits(bits))
}

/// Append the low `width` bytes of `value` in the given order
///
/// Values wider than the element wrap modulo 2^(8*width).
pub fn write_uint(out: &mut Vec<u8>, value: u64, width: usize, order: Endianness) {
    match order {
        Endianness::Big => {
            for i in (0..width).rev() {
                out.push((value >> (8 * i)) as u8);
            }
        }
        Endianness::Little => {
            for i in 0..width {
                out.push((value >> (8 * i)) as u8);
            }
        }
    }
}

/// Append a 32-bit IEEE-754 float
pub fn write_f32(out: &mut Vec<u8>, value: f32, order: Endianness) {
    write_uint(out, value.to_bits() as u64, 4, order);
}

/// Append a 64-bit IEEE-754 float
pub fn write_f64(out: &mut Vec<u8>, value: f64, order: Endianness) {
    write_uint(out, value.to_bits(), 8, order);
}

/// Decode one element from the front of `data`
pub fn decode_element(data: &[u8], kind: Kind, width: usize, order: Endianness) -> Result<Value> {
    let value = match kind {
        Kind::Unsigned => Value::Unsigned(read_uint(data, width, order)?),
        Kind::Signed => Value::Signed(read_int(data, width, order)?),
        Kind::Float32 => Value::Float(read_f32(data, order)? as f64),
        Kind::Float64 => Value::Float(read_f64(data, order)?),
    };
    Ok(value)
}

/// Encode one value as a fixed-width element appended to `out`
pub fn encode_element(out: &mut Vec<u8>, value: &Value, kind: Kind, width: usize, order: Endianness) {
    match kind {
        Kind::Unsigned => write_uint(out, value.as_u64(), width, order),
        Kind::Signed => write_uint(out, value.as_i64() as u64, width, order),
        Kind::Float32 => write_f32(out, value.as_f64() as f32, order),
        Kind::Float64 => write_f64(out, value.as_f64(), order),
    }
}
