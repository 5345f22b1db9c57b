// Common type definitions for format instructions

use crate::directive::{Directive, Kind};
use serde::{Deserialize, Serialize};

/// Endianness for multi-byte values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Endianness {
    Big,
    Little,
}

impl Endianness {
    pub fn is_big(&self) -> bool {
        matches!(self, Endianness::Big)
    }

    pub fn is_little(&self) -> bool {
        matches!(self, Endianness::Little)
    }
}

/// Repeat count attached to a directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Count {
    /// Fixed number of elements; a bare directive is `Fixed(1)`
    Fixed(usize),
    /// `*`: consume or produce all remaining elements
    All,
}

/// One parsed unit of a format string
///
/// The directive metadata is embedded at parse time, so width, kind and
/// byte order are fully resolved before either engine touches a byte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instruction {
    pub directive: Directive,
    pub count: Count,
    pub native_override: bool,
    pub endian_override: Option<Endianness>,
}

impl Instruction {
    pub fn new(directive: Directive) -> Self {
        Self {
            directive,
            count: Count::Fixed(1),
            native_override: false,
            endian_override: None,
        }
    }

    /// Record a modifier character; unknown characters are ignored
    pub fn apply_modifier(&mut self, modifier: char) {
        match modifier {
            '<' => self.endian_override = Some(Endianness::Little),
            '>' => self.endian_override = Some(Endianness::Big),
            '!' | '_' => self.native_override = true,
            _ => {}
        }
    }

    /// Effective byte order; overrides on fixed-order directives are ignored
    pub fn byte_order(&self) -> Endianness {
        match self.endian_override {
            Some(order) if self.directive.allows_endian => order,
            _ => self.directive.default_order,
        }
    }

    /// Element width in bytes
    ///
    /// The native modifier never changes the width: every native-width
    /// integer directive already resolves to its fixed cross-platform size.
    pub fn width(&self) -> usize {
        self.directive.width
    }

    pub fn kind(&self) -> Kind {
        self.directive.kind
    }
}
