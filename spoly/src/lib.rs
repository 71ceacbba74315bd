//! Sparse polynomials in an arbitrary number of variables.
//!
//! A polynomial in `x₀, x₁, …, xₙ` is stored as a sum of monomials in `x₀`
//! whose coefficients are polynomials in `x₁, …, xₙ`, down to integer
//! constants. Every value is kept in canonical form, so structural equality
//! is mathematical equality.
//!
//! All algorithms recurse over the nesting depth of their input (and the
//! parser over the parenthesis depth of its text). Extremely deep inputs
//! can exhaust the call stack; callers decide how deep an input they accept.

mod poly;

pub use poly::*;

pub mod parse;
pub mod util;
