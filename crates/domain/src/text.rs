//! Flat text format for clocks.
//!
//! Input is a stream of integer tokens separated by any run of `:`, `\n` or
//! `\r`. Every three consecutive tokens form one clock, regardless of how they
//! are spread across lines. Output writes one `H:M:S` line per clock.

use std::fmt;

use crate::clock::Clock;
use crate::error::{DomainError, DomainResult};

/// Line terminator used when writing clocks.
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

const DELIMITERS: [char; 3] = [':', '\n', '\r'];
/// Number of tokens that make up one clock.
pub const FIELDS_PER_CLOCK: usize = 3;

/// Splits `input` into raw tokens.
///
/// Runs of delimiters count as one separator; spaces and tabs around a token
/// are ignored.
pub fn tokenize(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(DELIMITERS)
        .filter(|token| !token.is_empty())
        .map(|token| token.trim_matches([' ', '\t']))
}

/// Parses every clock in `input`.
///
/// Nothing is returned unless the whole input is valid.
///
/// # Errors
///
/// - [`DomainError::Parse`] if a token is not an integer or the input ends
///   part-way through a clock.
/// - [`DomainError::OutOfRange`] if a triple is not a valid time.
pub fn parse_clocks(input: &str) -> DomainResult<Vec<Clock>> {
    let values = tokenize(input)
        .enumerate()
        .map(|(index, token)| {
            token.parse::<i32>().map_err(|_| {
                DomainError::parse(index + 1, format!("expected an integer, found {token:?}"))
            })
        })
        .collect::<DomainResult<Vec<_>>>()?;

    let chunks = values.chunks_exact(FIELDS_PER_CLOCK);
    let leftover = chunks.remainder().len();
    if leftover > 0 {
        return Err(DomainError::parse(
            values.len() + 1,
            format!("truncated record: expected {FIELDS_PER_CLOCK} fields, found {leftover}"),
        ));
    }

    chunks
        .map(|fields| Clock::new(fields[0], fields[1], fields[2]))
        .collect()
}

/// Writes each clock as an `H:M:S` line.
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn write_clocks<'a, W>(out: &mut W, clocks: impl IntoIterator<Item = &'a Clock>) -> fmt::Result
where
    W: fmt::Write + ?Sized,
{
    for clock in clocks {
        write!(out, "{clock}{LINE_ENDING}")?;
    }
    Ok(())
}
