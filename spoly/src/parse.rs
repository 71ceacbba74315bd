//! The textual notation of polynomials.
//!
//! ```text
//! poly  := coeff | mono ('+' mono)*
//! mono  := '(' poly ',' exp ')'
//! coeff := '-'? digit+          (fits in `Coeff`)
//! exp   := digit+               (fits in `Exp`)
//! ```
//!
//! This is the notation produced by `Display for Poly`, e.g.
//! `((1,0)+(2,1),3)+(-4,0)`. Monomials may come in any order and may
//! repeat exponents, the result is always canonical.

use std::borrow::Cow;
use std::str::FromStr;
use derive_more::Display;
use log::trace;

use crate::{Coeff, Exp, Mono, Poly};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum ParseError {
    #[display("invalid character at {_0}")]
    InvalidChar(usize),
    #[display("empty expression")]
    Empty,
    #[display("invalid coefficient")]
    Literal,
    #[display("unbalanced parentheses")]
    Paren,
    #[display("malformed monomial")]
    Mono,
    #[display("invalid exponent")]
    Exp,
}

impl std::error::Error for ParseError {}

pub fn is_poly_char(c: u8) -> bool {
    c.is_ascii_digit() || matches!(c, b'(' | b')' | b',' | b'+' | b'-')
}

/// Parses one line (without its line terminator).
pub fn parse_poly(line: &[u8]) -> Result<Poly, ParseError> {
    let res = check_chars(line).and_then(|s| poly(&s));
    if let Err(e) = &res {
        trace!("parse failed: {e}, input: {:?}", String::from_utf8_lossy(line));
    }
    res
}

fn check_chars(line: &[u8]) -> Result<Cow<'_, str>, ParseError> {
    if let Some(i) = line.iter().position(|&c| !is_poly_char(c)) {
        return Err(ParseError::InvalidChar(i))
    }
    // only ASCII is left, so this borrows `line` as is.
    Ok(String::from_utf8_lossy(line))
}

fn poly(s: &str) -> Result<Poly, ParseError> {
    if s.is_empty() {
        Err(ParseError::Empty)
    } else if s.starts_with('(') {
        let monos = split_monos(s)?.into_iter()
            .map(mono)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Poly::from_monos(monos))
    } else {
        coeff(s).map(Poly::from_const)
    }
}

// Splits at the '+' outside of any parentheses.
fn split_monos(s: &str) -> Result<Vec<&str>, ParseError> {
    let mut res = vec![];
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in s.bytes().enumerate() {
        match c {
            b'(' => depth += 1,
            b')' => depth = depth.checked_sub(1).ok_or(ParseError::Paren)?,
            b'+' if depth == 0 => {
                res.push(&s[start..i]);
                start = i + 1;
            },
            _ => ()
        }
    }

    if depth != 0 {
        return Err(ParseError::Paren)
    }

    res.push(&s[start..]);
    Ok(res)
}

fn mono(s: &str) -> Result<Mono, ParseError> {
    let inner = s.strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or(ParseError::Mono)?;

    // the exponent has no commas, so the last one is the separator.
    let (c, e) = inner.rsplit_once(',').ok_or(ParseError::Mono)?;
    let e = exp(e)?;
    let c = poly(c)?;

    Ok(Mono::new(c, e))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|c| c.is_ascii_digit())
}

fn coeff(s: &str) -> Result<Coeff, ParseError> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if !is_digits(digits) {
        return Err(ParseError::Literal)
    }
    Coeff::from_str(s).map_err(|_| ParseError::Literal)
}

fn exp(s: &str) -> Result<Exp, ParseError> {
    if !is_digits(s) {
        return Err(ParseError::Exp)
    }
    Exp::from_str(s).map_err(|_| ParseError::Exp)
}

impl FromStr for Poly {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_poly(s.as_bytes())
    }
}
