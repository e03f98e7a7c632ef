#![cfg_attr(not(feature = "std"), no_std)]

//! Generating sets for named finite groups.
//!
//! Factory functions here produce the inputs of the Cayley builder: an
//! insertion-ordered set of group elements (or, for the LPS construction,
//! a list that keeps multiplicities). Families covered: the classical
//! linear and symplectic groups over short prime fields, the symmetric and
//! alternating groups, a selection of sporadic and exceptional groups from
//! their published generator data, and the Lubotzky–Phillips–Sarnak
//! Ramanujan generators.

extern crate alloc;

mod common;
mod error;
pub mod lps;
mod linear;
mod sporadic;
mod symmetric;

pub use self::{
    common::IndexSet,
    error::CatalogError,
    linear::{gl_pair, gsp_pair, pgl_pair, pgsp_pair, psl_pair, psp_pair, sl_pair, sp_pair},
    lps::lps_generators,
    sporadic::{janko_1, mathieu_11, mathieu_12, mathieu_22, suzuki_8},
    symmetric::{adjacent_transpositions, alternating_pair, symmetric_pair},
};
