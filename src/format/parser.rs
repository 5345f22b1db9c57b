// Parser combinators using nom for the format string grammar

use super::types::{Count, Instruction};
use crate::directive;
use nom::{
    branch::alt,
    character::complete::{anychar, char, digit1, multispace0, one_of},
    combinator::{map, map_opt, map_res, opt},
    multi::many0,
    sequence::preceded,
    IResult, Parser,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("'*' must follow existing directives!")]
    DanglingWildcard,

    #[error("unknown directive '{0}' in format string")]
    UnknownDirective(char),
}

/// Parse a repeat count: a decimal digit run or the `*` wildcard
fn count(input: &str) -> IResult<&str, Count> {
    preceded(
        multispace0,
        alt((
            map(char('*'), |_| Count::All),
            map_res(digit1, |digits: &str| {
                digits.parse::<usize>().map(Count::Fixed)
            }),
        )),
    )
    .parse(input)
}

/// Parse a single modifier character
fn modifier(input: &str) -> IResult<&str, char> {
    preceded(multispace0, one_of("<>!_")).parse(input)
}

/// Parse one directive with its modifiers and optional count
fn instruction(input: &str) -> IResult<&str, Instruction> {
    let (input, directive) = map_opt(anychar, directive::lookup).parse(input)?;
    let (input, modifiers) = many0(modifier).parse(input)?;
    let (input, count) = opt(count).parse(input)?;

    let mut instr = Instruction::new(directive);
    for m in modifiers {
        instr.apply_modifier(m);
    }
    if let Some(count) = count {
        instr.count = count;
    }

    Ok((input, instr))
}

/// Tokenize a format string into its ordered instruction list
///
/// Whitespace between tokens is ignored. A `*` that is not attached to a
/// directive fails before any byte is encoded or decoded.
pub fn parse_format(format: &str) -> Result<Vec<Instruction>, FormatError> {
    let mut rest = format.trim_start();
    let mut instructions = Vec::new();

    while let Some(next) = rest.chars().next() {
        if next == '*' {
            return Err(FormatError::DanglingWildcard);
        }
        match instruction(rest) {
            Ok((remaining, instr)) => {
                instructions.push(instr);
                rest = remaining.trim_start();
            }
            Err(_) => return Err(FormatError::UnknownDirective(next)),
        }
    }

    Ok(instructions)
}
