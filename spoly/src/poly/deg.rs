use num_traits::Zero;

use super::{Exp, Poly};

impl Poly {
    /// Total degree; `-1` for the zero polynomial. Saturates at `Exp::MAX`.
    pub fn deg(&self) -> Exp {
        if self.is_zero() {
            return -1
        }

        self.terms().iter()
            .map(|m| m.exp.saturating_add(m.coeff.deg()))
            .max()
            .unwrap_or(0)
    }

    /// Degree in `x_i`; `-1` for the zero polynomial.
    pub fn deg_by(&self, i: usize) -> Exp {
        if self.is_zero() {
            return -1
        }

        let terms = self.terms().iter();
        let deg = if i == 0 {
            terms.map(|m| m.exp).max()
        } else {
            terms.map(|m| m.coeff.deg_by(i - 1)).max()
        };

        deg.unwrap_or(0)
    }
}
