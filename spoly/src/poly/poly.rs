use std::fmt::{Display, Debug};
use itertools::Itertools;
use num_traits::{Zero, One};

use super::{Coeff, Mono};

// A polynomial in x₀, x₁, ... is either an integer constant, or a sum of
// monomials c_i x₀^{e_i} where each c_i is a polynomial in x₁, x₂, ... .
//
// Invariants of `Terms`:
//  * non-empty, exponents strictly ascending,
//  * no coefficient is zero,
//  * not a single x₀^0 term with a constant coefficient (that is `Const`).
//
// Values are only built through `from_monos` (or operations that end in it),
// so two polynomials are equal iff they are structurally equal.

#[derive(Clone, PartialEq, Eq, Hash)]
pub(super) enum Repr {
    Const(Coeff),
    Terms(Vec<Mono>)
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Poly {
    pub(super) repr: Repr
}

impl Poly {
    pub fn from_const(c: Coeff) -> Self {
        Self { repr: Repr::Const(c) }
    }

    /// Builds the canonical form of the sum of `monos`.
    pub fn from_monos(mut monos: Vec<Mono>) -> Self {
        monos.retain(|m| !m.coeff.is_zero());
        monos.sort_by_key(|m| m.exp); // stable

        let terms = monos.into_iter()
            .coalesce(|m, n|
                if m.exp == n.exp {
                    Ok(Mono::new(&m.coeff + &n.coeff, m.exp))
                } else {
                    Err((m, n))
                }
            )
            .filter(|m| !m.coeff.is_zero())
            .collect_vec();

        Self::from_reduced(terms)
    }

    /// Same as `from_monos`, leaving `monos` untouched.
    pub fn from_monos_cloned(monos: &[Mono]) -> Self {
        Self::from_monos(monos.to_vec())
    }

    // `terms` must be sorted, duplicate-free and without zero coefficients.
    fn from_reduced(mut terms: Vec<Mono>) -> Self {
        if terms.is_empty() {
            return Self::zero()
        }

        if terms.len() == 1 && terms[0].exp == 0 && terms[0].coeff.is_const() {
            return terms.swap_remove(0).coeff
        }

        Self { repr: Repr::Terms(terms) }
    }

    /// The polynomial `x_i`.
    pub fn variable(i: usize) -> Self {
        let x = Self::from_monos(vec![Mono::new(Self::one(), 1)]);
        (0..i).fold(x, |p, _|
            Self::from_monos(vec![Mono::new(p, 0)])
        )
    }

    pub fn is_const(&self) -> bool {
        matches!(self.repr, Repr::Const(_))
    }

    pub fn as_const(&self) -> Option<Coeff> {
        match self.repr {
            Repr::Const(c) => Some(c),
            Repr::Terms(_) => None
        }
    }

    /// The monomials in ascending order of exponent; empty for constants.
    pub fn terms(&self) -> &[Mono] {
        match &self.repr {
            Repr::Const(_) => &[],
            Repr::Terms(terms) => terms
        }
    }

    pub fn nterms(&self) -> usize {
        self.terms().len()
    }
}

impl Default for Poly {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Coeff> for Poly {
    fn from(c: Coeff) -> Self {
        Self::from_const(c)
    }
}

impl FromIterator<Mono> for Poly {
    fn from_iter<T: IntoIterator<Item = Mono>>(iter: T) -> Self {
        Self::from_monos(iter.into_iter().collect())
    }
}

impl Zero for Poly {
    fn zero() -> Self {
        Self::from_const(0)
    }

    fn is_zero(&self) -> bool {
        matches!(self.repr, Repr::Const(0))
    }
}

impl One for Poly {
    fn one() -> Self {
        Self::from_const(1)
    }

    fn is_one(&self) -> bool {
        matches!(self.repr, Repr::Const(1))
    }
}

impl Display for Poly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.repr {
            Repr::Const(c) => write!(f, "{c}"),
            Repr::Terms(terms) => write!(f, "{}", terms.iter().format("+"))
        }
    }
}

impl Debug for Poly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
