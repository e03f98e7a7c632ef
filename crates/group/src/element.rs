use core::hash::Hash;

use crate::GroupError;

/// A finite-group element as a value.
///
/// Implementations keep a canonical internal representation: two values
/// that denote the same mathematical group element compare equal and hash
/// equal, and `Hash` covers exactly the canonical data. The Cayley builder
/// relies on this to deduplicate vertices through a hash map.
///
/// `identity` and `inverse` are instance methods because the ambient group
/// (dimension, modulus, letter count) is carried by the value itself.
pub trait GroupElement: Clone + Eq + Hash {
    /// The identity of the group this element lives in.
    fn identity(&self) -> Self;

    /// The group inverse. `x.right_mul(&x.inverse())` is `x.identity()`.
    fn inverse(&self) -> Self;

    /// `h · self`.
    ///
    /// # Panics
    ///
    /// May panic when `self` and `h` are not operational with each other;
    /// use [`checked_right_mul`](Self::checked_right_mul) where the operands
    /// are not known to be compatible.
    fn left_mul(&self, h: &Self) -> Self;

    /// `self · h`.
    ///
    /// # Panics
    ///
    /// May panic when `self` and `h` are not operational with each other.
    fn right_mul(&self, h: &Self) -> Self;

    /// Whether `self` and `other` belong to the same concrete group and can
    /// be multiplied.
    fn is_operational_with(&self, other: &Self) -> bool;

    /// `self · h`, with the compatibility check made explicit.
    fn checked_right_mul(&self, h: &Self) -> Result<Self, GroupError> {
        if self.is_operational_with(h) {
            Ok(self.right_mul(h))
        } else {
            Err(GroupError::OperationalMismatch)
        }
    }
}

/// The order of `g`: the least `k ≥ 1` with `g^k` the identity.
///
/// Runs forever only if `g` does not generate a finite cyclic group, which
/// cannot happen for the element families in this crate.
#[must_use]
pub fn element_order<G: GroupElement>(g: &G) -> usize {
    let e = g.identity();
    let mut acc = g.clone();
    let mut k = 1;
    while acc != e {
        acc = acc.right_mul(g);
        k += 1;
    }
    k
}

/// `h⁻¹ · g · h`.
#[must_use]
pub fn conjugate<G: GroupElement>(g: &G, h: &G) -> G {
    h.inverse().right_mul(g).right_mul(h)
}

/// `g⁻¹ · h⁻¹ · g · h`.
#[must_use]
pub fn commutator<G: GroupElement>(g: &G, h: &G) -> G {
    g.inverse().right_mul(&h.inverse()).right_mul(g).right_mul(h)
}
