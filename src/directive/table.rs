// Static directive table mapping format characters to encoding metadata

use crate::format::Endianness;
use std::collections::HashMap;

/// Byte width used by the `I`/`i` directives
pub const NATIVE_INT_WIDTH: usize = 4;

/// Byte order used by directives whose default order is "native"
#[cfg(target_endian = "little")]
pub const NATIVE_ORDER: Endianness = Endianness::Little;
#[cfg(target_endian = "big")]
pub const NATIVE_ORDER: Endianness = Endianness::Big;

/// Numeric interpretation of an encoded element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Unsigned,
    Signed,
    Float32,
    Float64,
}

/// Encoding metadata for a single format character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub code: char,
    pub width: usize,
    pub kind: Kind,
    pub default_order: Endianness,
    pub allows_native: bool,
    pub allows_endian: bool,
}

impl Directive {
    pub fn new(
        code: char,
        width: usize,
        kind: Kind,
        default_order: Endianness,
        allows_native: bool,
        allows_endian: bool,
    ) -> Self {
        Self {
            code,
            width,
            kind,
            default_order,
            allows_native,
            allows_endian,
        }
    }
}

/// Global directive table, built once and read-only afterwards
lazy_static::lazy_static! {
    static ref DIRECTIVE_TABLE: HashMap<char, Directive> = build_table();
}

fn build_table() -> HashMap<char, Directive> {
    let mut table = HashMap::new();
    let mut register = |d: Directive| {
        table.insert(d.code, d);
    };

    // Single bytes carry no order; stored order is never consulted
    register(Directive::new('C', 1, Kind::Unsigned, NATIVE_ORDER, false, false));
    register(Directive::new('c', 1, Kind::Signed, NATIVE_ORDER, false, false));

    register(Directive::new('S', 2, Kind::Unsigned, NATIVE_ORDER, true, true));
    register(Directive::new('s', 2, Kind::Signed, NATIVE_ORDER, true, true));
    register(Directive::new('L', 4, Kind::Unsigned, NATIVE_ORDER, true, true));
    register(Directive::new('l', 4, Kind::Signed, NATIVE_ORDER, true, true));
    register(Directive::new('Q', 8, Kind::Unsigned, NATIVE_ORDER, true, true));
    register(Directive::new('q', 8, Kind::Signed, NATIVE_ORDER, true, true));

    register(Directive::new('I', NATIVE_INT_WIDTH, Kind::Unsigned, NATIVE_ORDER, true, true));
    register(Directive::new('i', NATIVE_INT_WIDTH, Kind::Signed, NATIVE_ORDER, true, true));

    register(Directive::new('F', 4, Kind::Float32, NATIVE_ORDER, false, true));
    register(Directive::new('f', 4, Kind::Float32, NATIVE_ORDER, false, true));
    register(Directive::new('D', 8, Kind::Float64, NATIVE_ORDER, false, true));
    register(Directive::new('d', 8, Kind::Float64, NATIVE_ORDER, false, true));

    // Fixed-order float directives; endian modifiers do not apply
    register(Directive::new('e', 4, Kind::Float32, Endianness::Little, false, false));
    register(Directive::new('g', 4, Kind::Float32, Endianness::Big, false, false));
    register(Directive::new('E', 8, Kind::Float64, Endianness::Little, false, false));
    register(Directive::new('G', 8, Kind::Float64, Endianness::Big, false, false));

    table
}

/// Look up the metadata for a format character
pub fn lookup(code: char) -> Option<Directive> {
    DIRECTIVE_TABLE.get(&code).copied()
}
