#![cfg_attr(not(feature = "std"), no_std)]

//! Finite group elements as values.
//!
//! The [`GroupElement`] trait is the seam between group arithmetic and the
//! graph machinery: anything with identity, inverse, two-sided products and
//! canonical value equality can label the vertices of a Cayley graph. The
//! concrete families here are the ones the expander constructions need:
//! invertible matrices over a short prime field and their projective
//! quotients, permutations, quaternions reduced modulo an odd prime, and
//! matrices over the byte-indexed small fields.

extern crate alloc;

mod byte_linear;
mod element;
mod error;
mod linear;
mod permutation;
mod quaternion;

pub use self::{
    byte_linear::ByteGeneralLinear,
    element::{commutator, conjugate, element_order, GroupElement},
    error::GroupError,
    linear::{GeneralLinear, ProjectiveLinear},
    permutation::Permutation,
    quaternion::{LipschitzQuaternion, ProjectiveQuaternion, ReducedQuaternion},
};
