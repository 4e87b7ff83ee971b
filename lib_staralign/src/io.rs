//! Parsing helpers for the plain text formats.
//!
//! Whitespace within a line is spaces and tabs, line breaks are `\n` and `\r`.

use nom::{
    IResult,
    character::complete::{char, multispace0, not_line_ending, space0},
    combinator::{map, verify},
    sequence::{preceded, tuple},
};

use crate::error::Error;

/// Parses a `# title` line, preceded by any whitespace, and returns the trimmed title.
pub fn parse_title(input: &str) -> IResult<&str, &str> {
    map(
        preceded(
            tuple((multispace0, char('#'), space0)),
            verify(not_line_ending, |title: &str| !title.trim().is_empty()),
        ),
        str::trim,
    )(input)
}

pub fn parse_whitespace(input: &str) -> IResult<&str, ()> {
    map(space0, |_| ())(input)
}

pub fn parse_any_whitespace(input: &str) -> IResult<&str, ()> {
    map(multispace0, |_| ())(input)
}

/// Skips spaces and tabs, but not line breaks.
pub fn skip_whitespace(
    input: &str,
) -> std::result::Result<&str, nom::Err<nom::error::Error<&str>>> {
    parse_whitespace(input).map(|(input, ())| input)
}

/// Skips spaces, tabs and line breaks.
pub fn skip_any_whitespace(
    input: &str,
) -> std::result::Result<&str, nom::Err<nom::error::Error<&str>>> {
    parse_any_whitespace(input).map(|(input, ())| input)
}

pub fn translate_nom_error(error: nom::Err<nom::error::Error<&str>>) -> Error {
    match error {
        nom::Err::Incomplete(needed) => Error::ParserIncomplete(needed),
        nom::Err::Error(error) | nom::Err::Failure(error) => Error::Parser {
            input: error.input.to_string(),
            kind: error.code,
        },
    }
}
