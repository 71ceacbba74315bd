mod mono;
mod poly;
mod ops;
mod deg;
mod eval;

pub use mono::Mono;
pub use poly::Poly;

cfg_if::cfg_if! {
    if #[cfg(feature = "i128")] {
        pub type Coeff = i128;
    } else {
        pub type Coeff = i64;
    }
}

// Exponents are non-negative inside monomials; degrees use -1 for zero.
pub type Exp = i32;
