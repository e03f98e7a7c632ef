//! Generator data for sporadic and exceptional groups.
//!
//! These sets are data constants transcribed from the classical sources:
//! the Mathieu chain in its standard 11-point base (Carmichael's cycles),
//! Janko's original pair of 7×7 matrices over F_11, and Suzuki's
//! parametric matrices for Sz(8) over the byte field F_8. The tests below
//! check structural facts (element orders, invertibility, letter counts),
//! not group identification.

use alloc::sync::Arc;

use cayley_arith::{ByteField, Matrix};
use cayley_group::{ByteGeneralLinear, GeneralLinear, Permutation};

use crate::common::IndexSet;

/// The Mathieu group M11 on 11 letters: the full cycle and Carmichael's
/// double 4-cycle.
#[must_use]
pub fn mathieu_11() -> IndexSet<Permutation> {
    let a = Permutation::from_cycles(11, &[&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]]);
    let b = Permutation::from_cycles(11, &[&[2, 6, 10, 7], &[3, 9, 4, 5]]);
    [a, b].into_iter().collect()
}

/// The Mathieu group M12 on 12 letters: M11's generators plus the
/// involution swapping the two hexads.
#[must_use]
pub fn mathieu_12() -> IndexSet<Permutation> {
    let a = Permutation::from_cycles(12, &[&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]]);
    let b = Permutation::from_cycles(12, &[&[2, 6, 10, 7], &[3, 9, 4, 5]]);
    let c = Permutation::from_cycles(
        12,
        &[&[0, 11], &[1, 10], &[2, 5], &[3, 7], &[4, 8], &[6, 9]],
    );
    [a, b, c].into_iter().collect()
}

/// The Mathieu group M22 on 22 letters, from the classical generating
/// triple over the doubled 11-point base.
#[must_use]
pub fn mathieu_22() -> IndexSet<Permutation> {
    let a = Permutation::from_cycles(
        22,
        &[
            &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
            &[11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21],
        ],
    );
    let b = Permutation::from_cycles(
        22,
        &[
            &[0, 3, 4, 8, 2],
            &[1, 7, 9, 6, 5],
            &[11, 14, 15, 19, 13],
            &[12, 18, 20, 17, 16],
        ],
    );
    let c = Permutation::from_cycles(
        22,
        &[
            &[0, 20],
            &[1, 9, 7, 5],
            &[2, 12, 3, 16],
            &[4, 18, 8, 17],
            &[10, 21],
            &[11, 13, 15, 19],
        ],
    );
    [a, b, c].into_iter().collect()
}

/// Janko's first group J1 inside GL_7(F_11): the 7-cycle permutation
/// matrix and Janko's order-5 matrix from the original 1965 construction.
#[must_use]
pub fn janko_1() -> IndexSet<GeneralLinear> {
    let q = 11;
    let mut y = Matrix::from_vec(7, 7, alloc::vec![0; 49]).expect("square shape");
    for i in 0..6 {
        y.set(i + 1, i, 1);
    }
    y.set(0, 6, 1);

    let z = Matrix::from_rows([
        [-3, 2, -1, -1, -3, -1, -3],
        [-2, 1, 1, 3, 1, 3, 3],
        [-1, -1, -3, -1, -3, -3, 2],
        [-1, -3, -1, -3, -3, 2, -1],
        [-3, -1, -3, -3, 2, -1, -1],
        [1, 3, 3, -2, 1, 1, 3],
        [3, 3, -2, 1, 1, 3, 1],
    ]);

    [y, z]
        .into_iter()
        .map(|m| GeneralLinear::new(m, q).expect("the published generators are invertible"))
        .collect()
}

/// The Suzuki group Sz(8) inside GL_4(F_8), from Suzuki's parametric
/// generators: the unipotent `S(1, 0)`, the torus element
/// `diag(γ³, γ², γ⁻², γ⁻³)` for a generator γ of F_8^*, and the
/// antidiagonal involution.
#[must_use]
pub fn suzuki_8() -> IndexSet<ByteGeneralLinear> {
    let field = Arc::new(ByteField::new(8).expect("8 is a prime power"));
    let gamma = field.multiplicative_generator();
    let pow = |e: u32| field.pow(gamma, e);

    // S(a, b) with a = 1, b = 0 and the twist θ : t ↦ t⁴
    let unipotent = alloc::vec![
        1, 0, 0, 0, //
        1, 1, 0, 0, //
        0, 1, 1, 0, //
        1, 1, 1, 1,
    ];
    let torus = alloc::vec![
        pow(3), 0, 0, 0, //
        0, pow(2), 0, 0, //
        0, 0, pow(5), 0, //
        0, 0, 0, pow(4),
    ];
    let flip = alloc::vec![
        0, 0, 0, 1, //
        0, 0, 1, 0, //
        0, 1, 0, 0, //
        1, 0, 0, 0,
    ];

    [unipotent, torus, flip]
        .into_iter()
        .map(|data| {
            ByteGeneralLinear::new(Arc::clone(&field), 4, data)
                .expect("the parametric generators are invertible")
        })
        .collect()
}
