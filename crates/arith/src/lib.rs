#![cfg_attr(not(feature = "std"), no_std)]

//! Reduced integer arithmetic and linear algebra over short prime fields.
//!
//! Everything in this crate works on `i32` scalars ("short" integers) and
//! widens to `i64` internally, so no operation on a reduced input can
//! overflow. Failures are surfaced as values: [`Option`] where a result may
//! simply not exist (square roots), [`Result`] where the caller violated a
//! precondition (inverting a non-unit, composite modulus).

extern crate alloc;

pub mod byte_field;
mod error;
pub mod matrix;
pub mod modular;

pub use self::{
    byte_field::ByteField,
    error::{ArithmeticError, MatrixError},
    matrix::Matrix,
};
