// Unpack engine: byte buffer -> value sequence

use super::elements;
use super::value::Value;
use crate::format::{parse_format, Count, FormatError, Instruction};

/// Unpack `data` into a value sequence according to `format`
///
/// Fails only on a malformed format string. Decoding stops at the first
/// element for which too few bytes remain; trailing bytes are left
/// unconsumed rather than raising an error.
pub fn unpack(data: &[u8], format: &str) -> Result<Vec<Value>, FormatError> {
    let instructions = parse_format(format)?;
    Ok(unpack_instructions(data, &instructions))
}

fn unpack_instructions(data: &[u8], instructions: &[Instruction]) -> Vec<Value> {
    let mut values = Vec::new();
    let mut cursor = 0usize;

    'instructions: for instr in instructions {
        let kind = instr.kind();
        let width = instr.width();
        let order = instr.byte_order();

        let count = match instr.count {
            Count::All => (data.len() - cursor) / width,
            Count::Fixed(n) => n,
        };

        for _ in 0..count {
            match elements::decode_element(&data[cursor..], kind, width, order) {
                Ok(value) => {
                    values.push(value);
                    cursor += width;
                }
                Err(_) => {
                    tracing::debug!(
                        "'{}' needs {} bytes but {} remain, stopping",
                        instr.directive.code,
                        width,
                        data.len() - cursor
                    );
                    break 'instructions;
                }
            }
        }
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::pack::pack;

    fn values<T: Copy + Into<Value>>(input: &[T]) -> Vec<Value> {
        input.iter().map(|&v| v.into()).collect()
    }

    /// Compare decoded floats against expectations within a tolerance
    fn floats_match(decoded: &[Value], expected: &[f64], tolerance: f64) -> bool {
        decoded.len() == expected.len()
            && decoded.iter().zip(expected).all(|(value, &expected)| {
                let actual = value.as_f64();
                if actual.is_finite() && expected.is_finite() {
                    (actual - expected).abs() < tolerance
                } else {
                    true
                }
            })
    }

    #[test]
    fn test_roundtrip_u8() {
        let input = values(&[97u64, 0, 98, 99, 100]);
        assert_eq!(unpack(&pack(&input, "CCCCC").unwrap(), "CCCCC").unwrap(), input);
    }

    #[test]
    fn test_roundtrip_u16() {
        let input = values(&[1234u64, 42, 0, 65535]);
        assert_eq!(unpack(&pack(&input, "SSSS").unwrap(), "SSSS").unwrap(), input);
    }

    #[test]
    fn test_roundtrip_u32() {
        let input = values(&[0u64, 65536, 100000, 2147483647]);
        assert_eq!(unpack(&pack(&input, "LLLL").unwrap(), "LLLL").unwrap(), input);
    }

    #[test]
    fn test_roundtrip_u64() {
        let input = values(&[0u64, 2147483648, 3007, 100000000000]);
        assert_eq!(unpack(&pack(&input, "QQQQ").unwrap(), "QQQQ").unwrap(), input);
    }

    #[test]
    fn test_roundtrip_i8() {
        let input = values(&[100i64, 0, -1, -3]);
        assert_eq!(unpack(&pack(&input, "cccc").unwrap(), "cccc").unwrap(), input);
    }

    #[test]
    fn test_roundtrip_i16() {
        let input = values(&[0i64, 32767, -10]);
        assert_eq!(unpack(&pack(&input, "sss").unwrap(), "sss").unwrap(), input);
    }

    #[test]
    fn test_roundtrip_i32() {
        let input = values(&[0i64, 65536, -2147483648, 2147483647]);
        assert_eq!(unpack(&pack(&input, "llll").unwrap(), "llll").unwrap(), input);
    }

    #[test]
    fn test_roundtrip_i64() {
        let input = values(&[0i64, 2147483648, -3007, 100000000000]);
        assert_eq!(unpack(&pack(&input, "qqqq").unwrap(), "qqqq").unwrap(), input);
    }

    #[test]
    fn test_roundtrip_wildcard() {
        let input = values(&[1i64, 2, 3, 4, 5, 0, -1, -2]);
        assert_eq!(unpack(&pack(&input, "s*").unwrap(), "s*").unwrap(), input);
    }

    #[test]
    fn test_wildcard_law() {
        let input = values(&[1u64, 2, 3, 4, 5]);
        assert_eq!(unpack(&pack(&input, "C*").unwrap(), "C*").unwrap(), input);
    }

    #[test]
    fn test_roundtrip_explicit_endian() {
        let input = vec![
            Value::Unsigned(45),
            Value::Unsigned(1234),
            Value::Signed(-90000),
        ];
        assert_eq!(
            unpack(&pack(&input, "S>L>q>").unwrap(), "S>L>q>").unwrap(),
            input
        );

        let input = vec![
            Value::Signed(-10),
            Value::Signed(1234),
            Value::Unsigned(65535),
        ];
        assert_eq!(
            unpack(&pack(&input, "s<l<Q<").unwrap(), "s<l<Q<").unwrap(),
            input
        );
    }

    #[test]
    fn test_single_floats_within_tolerance() {
        // 'F' and 'f' are interchangeable; single precision loses bits
        let input = [1.1, 2.34, 5.601, 100.001, 0.0, -7.123];
        let buffer = pack(&values(&input), "FfFfFf").unwrap();
        let decoded = unpack(&buffer, "fFfFfF").unwrap();
        assert!(floats_match(&decoded, &input, 1e-5));
    }

    #[test]
    fn test_double_floats_exact() {
        let input = [2.345678, 3.1415926535, -1.23456789, 0.00000001];
        let buffer = pack(&values(&input), "DDdd").unwrap();
        let decoded = unpack(&buffer, "ddDD").unwrap();
        assert_eq!(decoded, values(&input));
    }

    #[test]
    fn test_fixed_order_float_roundtrip() {
        let input = values(&[1.23, -4.56, 9.87654321, -7.7890123456]);
        let buffer = pack(&input, "egGE").unwrap();
        let decoded = unpack(&buffer, "egGE").unwrap();
        assert!(floats_match(&decoded, &[1.23, -4.56, 9.87654321, -7.7890123456], 1e-5));
        // The double halves survive exactly
        assert_eq!(decoded[2], Value::Float(9.87654321));
        assert_eq!(decoded[3], Value::Float(-7.7890123456));
    }

    #[test]
    fn test_unsigned_bytes() {
        let decoded = unpack(&[0x61, 0x00, 0xFF], "C3").unwrap();
        assert_eq!(decoded, values(&[0x61u64, 0x00, 0xFF]));

        let decoded = unpack(&[0xFF], "c").unwrap();
        assert_eq!(decoded, vec![Value::Signed(-1)]);
    }

    #[test]
    fn test_wildcard_leaves_trailing_bytes() {
        // Two full elements fit; the odd trailing byte stays unconsumed
        let decoded = unpack(&[0xAA, 0xBB, 0xCC, 0xDD, 0xEE], "S<*").unwrap();
        assert_eq!(decoded, values(&[0xBBAAu64, 0xDDCC]));
    }

    #[test]
    fn test_fixed_count_exceeding_buffer_truncates() {
        let decoded = unpack(&[0x01, 0x02], "C5").unwrap();
        assert_eq!(decoded, values(&[1u64, 2]));
    }

    #[test]
    fn test_stops_at_short_element() {
        // The second 'S' cannot be read; nothing past that point is decoded
        let decoded = unpack(&[0x00, 0x01, 0x02], "S>2C").unwrap();
        assert_eq!(decoded, vec![Value::Unsigned(1)]);

        // A buffer shorter than a single element decodes to nothing
        assert!(unpack(&[0x01, 0x02, 0x03], "L").unwrap().is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        assert!(unpack(&[], "C*").unwrap().is_empty());
        assert!(unpack(&[0x01], "").unwrap().is_empty());
    }

    #[test]
    fn test_dangling_wildcard() {
        let err = unpack(b"abc", "*").unwrap_err();
        assert_eq!(err, FormatError::DanglingWildcard);
        assert_eq!(err.to_string(), "'*' must follow existing directives!");
    }
}
