use log::trace;
use num_traits::{Zero, One, Pow};

use super::{Coeff, Poly};

impl Poly {
    /// Substitutes `x` for `x₀`. The result is a polynomial in the
    /// remaining variables, renumbered from `x₀`.
    pub fn at(&self, x: Coeff) -> Poly {
        if self.is_const() {
            return self.clone()
        }

        self.terms().iter().fold(Poly::zero(), |res, m| {
            let a = x.wrapping_pow(m.exp as u32);
            res + m.coeff.mul_coeff(a)
        })
    }

    /// Substitutes `qs[i]` for `x_i` (`i < qs.len()`) and zero for every
    /// variable beyond.
    pub fn compose(&self, qs: &[Poly]) -> Poly {
        trace!("compose: {} terms, {} substitutes", self.nterms(), qs.len());
        self.compose_from(qs, 0)
    }

    // `self` is a coefficient at depth `d`, its variable is x_d.
    fn compose_from(&self, qs: &[Poly], d: usize) -> Poly {
        if self.is_const() {
            return self.clone()
        }

        self.terms().iter().fold(Poly::zero(), |res, m| {
            let r = if m.exp == 0 {
                Poly::one()
            } else if let Some(q) = qs.get(d) {
                q.pow(m.exp)
            } else {
                Poly::zero()
            };

            if r.is_zero() {
                return res
            }

            let c = m.coeff.compose_from(qs, d + 1);
            res + &r * &c
        })
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use crate::Exp;
    use super::*;

    fn p(s: &str) -> Poly {
        s.parse().unwrap()
    }

    fn samples() -> Vec<Poly> {
        [
            "0",
            "5",
            "(1,1)",
            "(1,0)+(1,2)",
            "((1,1),1)+(2,0)",
            "((1,2)+(-1,0),3)+(5,1)",
            "(((2,1),1),2)+((3,1),0)",
        ].into_iter().map(p).collect()
    }

    #[test]
    fn at_const() {
        assert_eq!(p("0").at(3), p("0"));
        assert_eq!(p("-4").at(3), p("-4"));
    }

    #[test]
    fn at() {
        let f = p("(1,0)+(1,2)");
        assert_eq!(f.at(3), p("10"));
        assert_eq!(f.at(-3), p("10"));
        assert_eq!(f.at(0), p("1"));

        let g = p("(-2,1)+(1,3)");
        assert_eq!(g.at(2), p("4"));
        assert_eq!(g.at(0), p("0"));
    }

    #[test]
    fn at_nested() {
        // x₀x₁ + 2 at x₀ = 3 is 3x₀ + 2
        let f = p("((1,1),1)+(2,0)");
        assert_eq!(f.at(3), p("(2,0)+(3,1)"));

        // (x₁² - 1)x₀³ + 5x₀ at x₀ = -1 is -x₀² - 4
        let g = p("((1,2)+(-1,0),3)+(5,1)");
        assert_eq!(g.at(-1), p("(-4,0)+(-1,2)"));
    }

    #[test]
    fn at_is_homomorphism() {
        let ss = samples();
        for (f, g) in ss.iter().cartesian_product(ss.iter()) {
            for x in [-2, 0, 1, 3] {
                assert_eq!((f + g).at(x), f.at(x) + g.at(x));
                assert_eq!((f * g).at(x), f.at(x) * g.at(x));
            }
        }
    }

    #[test]
    fn at_max_exp() {
        let max = Exp::MAX;
        let f = p(&format!("(1,{max})"));
        assert_eq!(f.at(1), p("1"));
        assert_eq!(f.at(-1), p("-1"));
        assert_eq!(f.at(0), p("0"));

        let g = p(&format!("((1,{max}),{max})"));
        assert_eq!(g.at(1), p(&format!("(1,{max})")));
    }

    #[test]
    fn compose_max_exp() {
        let max = Exp::MAX;
        let f = p(&format!("(1,{max})"));
        assert_eq!(f.compose(&[]), p("0"));
        assert_eq!(f.compose(&[p("1")]), p("1"));
        assert_eq!(f.compose(&[p("-1")]), p("-1"));
        assert_eq!(f.compose(&[Poly::variable(0)]), f);
        assert_eq!(f.compose(&[p("(1,2)")]), f);
    }

    #[test]
    fn compose_const() {
        assert_eq!(p("7").compose(&[]), p("7"));
        assert_eq!(p("7").compose(&[p("(1,1)")]), p("7"));
        assert_eq!(p("0").compose(&[p("(1,1)")]), p("0"));
    }

    #[test]
    fn compose_none() {
        assert_eq!(p("(1,0)+(1,2)").compose(&[]), p("1"));
        assert_eq!(p("(3,2)").compose(&[]), p("0"));
        assert_eq!(p("((1,0)+(1,1),0)+(3,1)").compose(&[]), p("1"));
    }

    #[test]
    fn compose() {
        // x₀² + 1 with x₀ -> x₀ + 1
        let f = p("(1,0)+(1,2)");
        let q = p("(1,0)+(1,1)");
        assert_eq!(f.compose(&[q]), p("(2,0)+(2,1)+(1,2)"));
    }

    #[test]
    fn compose_zeroes_rest() {
        // x₀x₁ + 2 with x₀ -> 5, x₁ -> 0
        let f = p("((1,1),1)+(2,0)");
        assert_eq!(f.compose(&[p("5")]), p("2"));
    }

    #[test]
    fn compose_multi() {
        // x₀x₁ + 2 with x₀ -> x₀ + 1, x₁ -> x₀²
        let f = p("((1,1),1)+(2,0)");
        let qs = [p("(1,0)+(1,1)"), p("(1,2)")];
        assert_eq!(f.compose(&qs), p("(2,0)+(1,2)+(1,3)"));
    }

    #[test]
    fn compose_extra_substitutes() {
        let f = p("(1,0)+(1,2)");
        let qs = [p("(1,1)"), p("17"), p("(1,5)")];
        assert_eq!(f.compose(&qs), f);
    }

    #[test]
    fn compose_identity() {
        let xs = (0..3).map(Poly::variable).collect_vec();
        for f in samples() {
            assert_eq!(f.compose(&xs), f);
        }
    }

    #[test]
    fn compose_univar_is_at() {
        let f = p("(-2,1)+(1,3)+(7,0)");
        for x in [-3, 0, 2, 5] {
            assert_eq!(f.compose(&[Poly::from_const(x)]), f.at(x));
        }
    }
}
