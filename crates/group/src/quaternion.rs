//! Quaternions over Z and over F_q.
//!
//! [`LipschitzQuaternion`] is a plain integer quaternion, used while
//! enumerating elements of a given norm. [`ReducedQuaternion`] lives in the
//! quaternion algebra over F_q with entries kept in the centered interval;
//! [`ProjectiveQuaternion`] further quotients by the scalars F_q^*.

use core::fmt::{Display, Formatter};

use cayley_arith::{modular, ArithmeticError};

use crate::GroupElement;

/// Hamilton product of integer quaternions, `i² = j² = k² = ijk = −1`.
fn hamilton(a: [i64; 4], b: [i64; 4]) -> [i64; 4] {
    [
        a[0] * b[0] - a[1] * b[1] - a[2] * b[2] - a[3] * b[3],
        a[0] * b[1] + a[1] * b[0] + a[2] * b[3] - a[3] * b[2],
        a[0] * b[2] - a[1] * b[3] + a[2] * b[0] + a[3] * b[1],
        a[0] * b[3] + a[1] * b[2] - a[2] * b[1] + a[3] * b[0],
    ]
}

/// An integer quaternion `x₀ + x₁i + x₂j + x₃k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LipschitzQuaternion {
    coords: [i64; 4],
}

impl LipschitzQuaternion {
    #[must_use]
    pub fn new(coords: [i64; 4]) -> Self {
        Self { coords }
    }

    #[must_use]
    pub fn coords(&self) -> [i64; 4] {
        self.coords
    }

    /// The reduced norm `x₀² + x₁² + x₂² + x₃²`.
    #[must_use]
    pub fn norm(&self) -> i64 {
        self.coords.iter().map(|&c| c * c).sum()
    }

    #[must_use]
    pub fn conjugate(&self) -> Self {
        let [a, b, c, d] = self.coords;
        Self {
            coords: [a, -b, -c, -d],
        }
    }

    #[must_use]
    pub fn product(&self, other: &Self) -> Self {
        Self {
            coords: hamilton(self.coords, other.coords),
        }
    }
}

impl Display for LipschitzQuaternion {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let [a, b, c, d] = self.coords;
        write!(f, "{a} {b} {c} {d}")
    }
}

/// A unit of the quaternion algebra over F_q, entries centered in
/// `[−(q−1)/2, (q−1)/2]` for an odd prime `q`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReducedQuaternion {
    coords: [i32; 4],
    modulus: i32,
}

impl ReducedQuaternion {
    /// Reduce the coordinates modulo the odd prime `q`.
    ///
    /// Fails with [`ArithmeticError::NotInvertible`] when the norm vanishes
    /// modulo `q` (such a quaternion has no inverse and is not a group
    /// element).
    pub fn new(coords: [i32; 4], q: i32) -> Result<Self, ArithmeticError> {
        let coords = coords.map(|c| modular::reduce(c, q));
        let candidate = Self { coords, modulus: q };
        if candidate.norm() == 0 {
            return Err(ArithmeticError::NotInvertible);
        }
        Ok(candidate)
    }

    /// Reduce an integer quaternion modulo `q`.
    pub fn from_lipschitz(quat: &LipschitzQuaternion, q: i32) -> Result<Self, ArithmeticError> {
        let coords = quat
            .coords()
            .map(|c| modular::reduce((c % i64::from(q)) as i32, q));
        Self::new(coords, q)
    }

    #[must_use]
    pub fn one(q: i32) -> Self {
        Self {
            coords: [1, 0, 0, 0],
            modulus: q,
        }
    }

    #[must_use]
    pub fn coords(&self) -> [i32; 4] {
        self.coords
    }

    #[must_use]
    pub fn modulus(&self) -> i32 {
        self.modulus
    }

    /// The reduced norm modulo `q`, centered.
    #[must_use]
    pub fn norm(&self) -> i32 {
        let q = self.modulus;
        self.coords
            .iter()
            .fold(0, |acc, &c| modular::reduced_sum(acc, modular::reduced_product(c, c, q), q))
    }

    #[must_use]
    pub fn conjugate(&self) -> Self {
        let [a, b, c, d] = self.coords;
        Self {
            coords: [
                a,
                modular::reduce(-b, self.modulus),
                modular::reduce(-c, self.modulus),
                modular::reduce(-d, self.modulus),
            ],
            modulus: self.modulus,
        }
    }
}

impl GroupElement for ReducedQuaternion {
    fn identity(&self) -> Self {
        Self::one(self.modulus)
    }

    fn inverse(&self) -> Self {
        // x⁻¹ = conj(x) · N(x)⁻¹
        let norm_inv = modular::inverse(self.norm(), self.modulus)
            .expect("group element has unit norm class");
        let conj = self.conjugate();
        Self {
            coords: conj
                .coords
                .map(|c| modular::reduced_product(c, norm_inv, self.modulus)),
            modulus: self.modulus,
        }
    }

    fn left_mul(&self, h: &Self) -> Self {
        h.right_mul(self)
    }

    fn right_mul(&self, h: &Self) -> Self {
        assert!(self.is_operational_with(h));
        let a = self.coords.map(i64::from);
        let b = h.coords.map(i64::from);
        let coords = hamilton(a, b)
            .map(|c| modular::reduce((c % i64::from(self.modulus)) as i32, self.modulus));
        Self {
            coords,
            modulus: self.modulus,
        }
    }

    fn is_operational_with(&self, other: &Self) -> bool {
        self.modulus == other.modulus
    }
}

impl Display for ReducedQuaternion {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let [a, b, c, d] = self.coords;
        write!(f, "{a} {b} {c} {d} {}", self.modulus)
    }
}

/// The scalar class of a [`ReducedQuaternion`]: the canonical representative
/// has entries in `[0, q)` and its first nonzero coordinate is 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectiveQuaternion {
    coords: [i32; 4],
    modulus: i32,
}

impl ProjectiveQuaternion {
    /// The canonical class of the given representative.
    pub fn new(coords: [i32; 4], q: i32) -> Result<Self, ArithmeticError> {
        Ok(Self::from_reduced(&ReducedQuaternion::new(coords, q)?))
    }

    /// Canonicalize a reduced quaternion into its projective class.
    #[must_use]
    pub fn from_reduced(quat: &ReducedQuaternion) -> Self {
        let q = quat.modulus();
        let positive = quat.coords().map(|c| c.rem_euclid(q));
        let leading = positive
            .iter()
            .copied()
            .find(|&c| c != 0)
            .expect("a unit quaternion is nonzero");
        let scale = modular::inverse(leading, q).expect("nonzero entries of F_q are units");
        Self {
            coords: positive
                .map(|c| (i64::from(c) * i64::from(scale)).rem_euclid(i64::from(q)) as i32),
            modulus: q,
        }
    }

    #[must_use]
    pub fn one(q: i32) -> Self {
        Self {
            coords: [1, 0, 0, 0],
            modulus: q,
        }
    }

    #[must_use]
    pub fn coords(&self) -> [i32; 4] {
        self.coords
    }

    #[must_use]
    pub fn modulus(&self) -> i32 {
        self.modulus
    }

    fn reduced(&self) -> ReducedQuaternion {
        ReducedQuaternion::new(self.coords, self.modulus)
            .expect("canonical representative is a unit")
    }
}

impl GroupElement for ProjectiveQuaternion {
    fn identity(&self) -> Self {
        Self::one(self.modulus)
    }

    fn inverse(&self) -> Self {
        Self::from_reduced(&self.reduced().inverse())
    }

    fn left_mul(&self, h: &Self) -> Self {
        h.right_mul(self)
    }

    fn right_mul(&self, h: &Self) -> Self {
        Self::from_reduced(&self.reduced().right_mul(&h.reduced()))
    }

    fn is_operational_with(&self, other: &Self) -> bool {
        self.modulus == other.modulus
    }
}

impl Display for ProjectiveQuaternion {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let [a, b, c, d] = self.coords;
        write!(f, "{a} {b} {c} {d} {}", self.modulus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element_order;

    #[test]
    fn lipschitz_norm_is_multiplicative() {
        let x = LipschitzQuaternion::new([1, 2, 0, 0]);
        let y = LipschitzQuaternion::new([3, 0, 1, 1]);
        assert_eq!(x.product(&y).norm(), x.norm() * y.norm());
    }

    #[test]
    fn conjugate_gives_norm() {
        let x = LipschitzQuaternion::new([2, -1, 3, 1]);
        let n = x.product(&x.conjugate());
        assert_eq!(n.coords(), [x.norm(), 0, 0, 0]);
    }

    #[test]
    fn reduced_entries_are_centered() {
        let x = ReducedQuaternion::new([6, -6, 13, 2], 17).unwrap();
        assert_eq!(x.coords(), [6, -6, -4, 2]);
    }

    #[test]
    fn zero_norm_is_rejected() {
        // 1² + 2² = 5 ≡ 0 (mod 5)
        assert_eq!(
            ReducedQuaternion::new([1, 2, 0, 0], 5),
            Err(ArithmeticError::NotInvertible)
        );
    }

    #[test]
    fn reduced_inverse_roundtrip() {
        let x = ReducedQuaternion::new([1, 2, 3, 1], 11).unwrap();
        assert_eq!(x.right_mul(&x.inverse()), x.identity());
        assert_eq!(x.inverse().right_mul(&x), x.identity());
    }

    #[test]
    fn i_has_order_four() {
        let i = ReducedQuaternion::new([0, 1, 0, 0], 7).unwrap();
        assert_eq!(element_order(&i), 4);
    }

    #[test]
    fn projective_classes_collapse_scalars() {
        let a = ProjectiveQuaternion::new([2, 4, 0, 2], 7).unwrap();
        let b = ProjectiveQuaternion::new([1, 2, 0, 1], 7).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.coords()[0], 1);
    }

    #[test]
    fn projective_i_has_order_two() {
        // i and −i are identified, so i squares to the class of −1 = class of 1
        let i = ProjectiveQuaternion::new([0, 1, 0, 0], 7).unwrap();
        assert_eq!(element_order(&i), 2);
    }

    #[test]
    fn associativity_sample() {
        let q = 13;
        let x = ReducedQuaternion::new([1, 2, 0, 5], q).unwrap();
        let y = ReducedQuaternion::new([0, 1, 1, 0], q).unwrap();
        let z = ReducedQuaternion::new([3, 0, 2, 1], q).unwrap();
        assert_eq!(x.right_mul(&y).right_mul(&z), x.right_mul(&y.right_mul(&z)));
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        const Q: i32 = 11;

        fn units() -> impl Strategy<Value = ReducedQuaternion> {
            prop::array::uniform4(-20..20_i32)
                .prop_filter_map("norm must not vanish", |coords| {
                    ReducedQuaternion::new(coords, Q).ok()
                })
        }

        proptest! {
            #[test]
            fn inverse_cancels(x in units()) {
                prop_assert_eq!(x.right_mul(&x.inverse()), x.identity());
            }

            #[test]
            fn products_associate(x in units(), y in units(), z in units()) {
                prop_assert_eq!(
                    x.right_mul(&y).right_mul(&z),
                    x.right_mul(&y.right_mul(&z))
                );
            }

            #[test]
            fn canonical_classes_agree(x in units()) {
                // a quaternion and a nonzero scalar multiple collapse to
                // the same projective class
                let scaled = ReducedQuaternion::new(
                    x.coords().map(|c| c.wrapping_mul(3)),
                    Q,
                )
                .expect("scaling by a unit preserves the norm class");
                prop_assert_eq!(
                    ProjectiveQuaternion::from_reduced(&x),
                    ProjectiveQuaternion::from_reduced(&scaled)
                );
            }
        }
    }
}
