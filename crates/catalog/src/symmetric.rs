//! Generating sets for the symmetric and alternating families.

use cayley_group::Permutation;

use crate::{common::IndexSet, CatalogError};

/// The classic pair for S_n: the full n-cycle and the transposition
/// `(0 1)`.
pub fn symmetric_pair(n: usize) -> Result<IndexSet<Permutation>, CatalogError> {
    if n < 2 {
        return Err(CatalogError::UnsupportedRank);
    }
    let cycle: alloc::vec::Vec<usize> = (0..n).collect();
    Ok([
        Permutation::from_cycles(n, &[&cycle]),
        Permutation::transposition(n, 0, 1),
    ]
    .into_iter()
    .collect())
}

/// The Coxeter generators of S_n: all adjacent transpositions `(i i+1)`.
pub fn adjacent_transpositions(n: usize) -> Result<IndexSet<Permutation>, CatalogError> {
    if n < 2 {
        return Err(CatalogError::UnsupportedRank);
    }
    Ok((0..n - 1)
        .map(|i| Permutation::transposition(n, i, i + 1))
        .collect())
}

/// The classic pair for A_n: the 3-cycle `(0 1 2)` and an even long cycle
/// (the full cycle for odd `n`, the cycle on `1, …, n−1` for even `n`).
pub fn alternating_pair(n: usize) -> Result<IndexSet<Permutation>, CatalogError> {
    if n < 3 {
        return Err(CatalogError::UnsupportedRank);
    }
    let long: alloc::vec::Vec<usize> = if n % 2 == 1 {
        (0..n).collect()
    } else {
        (1..n).collect()
    };
    Ok([
        Permutation::from_cycles(n, &[&[0, 1, 2]]),
        Permutation::from_cycles(n, &[&long]),
    ]
    .into_iter()
    .collect())
}
