use std::ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Neg};
use auto_impl_ops::auto_ops;
use is_even::IsEven;
use itertools::{EitherOrBoth, Itertools};
use num_traits::{Zero, One, Pow};

use super::{Coeff, Exp, Mono, Poly};
use super::poly::Repr;

// Coefficient arithmetic wraps on overflow. Exponent sums saturate at
// `Exp::MAX`, so exponents stay non-negative.

impl Poly {
    pub fn mul_coeff(&self, c: Coeff) -> Poly {
        match &self.repr {
            Repr::Const(a) => Poly::from_const(a.wrapping_mul(c)),
            Repr::Terms(_) if c == 0 => Poly::zero(),
            Repr::Terms(terms) => terms.iter().map(|m|
                Mono::new(m.coeff.mul_coeff(c), m.exp)
            ).collect()
        }
    }
}

// Merges two ascending term lists; a constant `c` enters as the term (c, 0).
fn merge_terms(lhs: &[Mono], rhs: &[Mono]) -> Poly {
    lhs.iter().merge_join_by(rhs, |m, n| m.exp.cmp(&n.exp)).map(|e|
        match e {
            EitherOrBoth::Both(m, n) => Mono::new(&m.coeff + &n.coeff, m.exp),
            EitherOrBoth::Left(m) |
            EitherOrBoth::Right(m) => m.clone()
        }
    ).collect()
}

#[auto_ops]
impl Add for &Poly {
    type Output = Poly;

    fn add(self, rhs: Self) -> Self::Output {
        if self.is_zero() {
            return rhs.clone()
        } else if rhs.is_zero() {
            return self.clone()
        }

        match (&self.repr, &rhs.repr) {
            (Repr::Const(a), Repr::Const(b)) => Poly::from_const(a.wrapping_add(*b)),
            (Repr::Const(_), Repr::Terms(ts)) => merge_terms(&[Mono::new(self.clone(), 0)], ts),
            (Repr::Terms(ts), Repr::Const(_)) => merge_terms(ts, &[Mono::new(rhs.clone(), 0)]),
            (Repr::Terms(ts), Repr::Terms(us)) => merge_terms(ts, us)
        }
    }
}

impl Neg for &Poly {
    type Output = Poly;

    fn neg(self) -> Self::Output {
        self.mul_coeff(-1)
    }
}

impl Neg for Poly {
    type Output = Poly;

    fn neg(self) -> Self::Output {
        -&self
    }
}

#[auto_ops]
impl Sub for &Poly {
    type Output = Poly;

    fn sub(self, rhs: Self) -> Self::Output {
        self + &(-rhs)
    }
}

#[auto_ops]
impl Mul for &Poly {
    type Output = Poly;

    fn mul(self, rhs: Self) -> Self::Output {
        match (&self.repr, &rhs.repr) {
            (Repr::Const(a), Repr::Const(b)) => Poly::from_const(a.wrapping_mul(*b)),
            (Repr::Const(a), _) => rhs.mul_coeff(*a),
            (_, Repr::Const(b)) => self.mul_coeff(*b),
            (Repr::Terms(ts), Repr::Terms(us)) => {
                ts.iter().cartesian_product(us).map(|(m, n)|
                    Mono::new(&m.coeff * &n.coeff, m.exp.saturating_add(n.exp))
                ).collect()
            }
        }
    }
}

macro_rules! impl_pow_unsigned {
    ($t:ty) => {
        impl Pow<$t> for &Poly {
            type Output = Poly;

            // square-and-multiply
            fn pow(self, n: $t) -> Self::Output {
                if n == 0 {
                    Poly::one()
                } else if self.is_zero() || self.is_one() {
                    self.clone()
                } else if n.is_even() {
                    let h = self.pow(n / 2);
                    &h * &h
                } else {
                    self * &self.pow(n - 1)
                }
            }
        }
    };
}

impl_pow_unsigned!(u32);

impl Pow<Exp> for &Poly {
    type Output = Poly;

    fn pow(self, n: Exp) -> Self::Output {
        assert!(n >= 0, "negative power: {n}");
        self.pow(n as u32)
    }
}
