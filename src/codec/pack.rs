// Pack engine: value sequence -> byte buffer

use super::elements;
use super::value::Value;
use crate::format::{parse_format, Count, FormatError, Instruction};

/// Pack `values` into a byte buffer according to `format`
///
/// Fails only on a malformed format string; a fixed count larger than the
/// number of remaining values encodes just the values that are left.
pub fn pack(values: &[Value], format: &str) -> Result<Vec<u8>, FormatError> {
    let instructions = parse_format(format)?;
    Ok(pack_instructions(values, &instructions))
}

fn pack_instructions(values: &[Value], instructions: &[Instruction]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut cursor = 0usize;

    for instr in instructions {
        let remaining = values.len() - cursor;
        let count = match instr.count {
            Count::All => remaining,
            Count::Fixed(n) => {
                if n > remaining {
                    tracing::debug!(
                        "'{}' count {} exceeds {} remaining values, truncating",
                        instr.directive.code,
                        n,
                        remaining
                    );
                }
                n.min(remaining)
            }
        };

        let kind = instr.kind();
        let width = instr.width();
        let order = instr.byte_order();
        for value in &values[cursor..cursor + count] {
            elements::encode_element(&mut out, value, kind, width, order);
        }
        cursor += count;
    }

    out
}
