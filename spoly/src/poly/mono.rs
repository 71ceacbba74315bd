use std::fmt::{Display, Debug};
use super::{Exp, Poly};

// `Mono` : the term `coeff * x^exp` of a polynomial in `x`,
// where `coeff` is a polynomial in the remaining variables.

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Mono {
    pub(super) exp: Exp,
    pub(super) coeff: Poly
}

impl Mono {
    pub fn new(coeff: Poly, exp: Exp) -> Self {
        assert!(exp >= 0, "negative exponent: {exp}");
        Self { exp, coeff }
    }

    pub fn exp(&self) -> Exp {
        self.exp
    }

    pub fn coeff(&self) -> &Poly {
        &self.coeff
    }

    pub fn into_parts(self) -> (Poly, Exp) {
        (self.coeff, self.exp)
    }
}

impl From<(Poly, Exp)> for Mono {
    fn from(pair: (Poly, Exp)) -> Self {
        let (coeff, exp) = pair;
        Self::new(coeff, exp)
    }
}

impl Display for Mono {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.coeff, self.exp)
    }
}

impl Debug for Mono {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
