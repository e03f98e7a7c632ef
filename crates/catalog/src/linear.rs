//! Generating sets for the classical matrix families over F_q.
//!
//! The constructions are the standard ones: a transvection and a signed
//! cycle for the special linear family, a torus element on top for the
//! general linear family, and a long-root transvection with the form
//! matrix (plus a block permutation in higher rank) for the symplectic
//! family. Projective variants push the same matrices into PGL_n(F_q).

use cayley_arith::{modular, Matrix};
use cayley_group::{GeneralLinear, ProjectiveLinear};

use crate::{common::IndexSet, CatalogError};

fn require_prime(q: i32) -> Result<(), CatalogError> {
    if modular::is_prime(q) {
        Ok(())
    } else {
        Err(CatalogError::PrimeRequired)
    }
}

/// The transvection `E₁₂(1)`.
fn shear(n: usize) -> Matrix {
    Matrix::elementary(n, 1, 2)
}

/// The cycle matrix `e₁ → e₂ → … → eₙ → corner · e₁`.
fn cycle_with_corner(n: usize, corner: i32, q: i32) -> Matrix {
    let mut matrix = Matrix::from_vec(n, n, alloc::vec![0; n * n]).expect("square shape");
    for i in 0..n - 1 {
        matrix.set(i + 1, i, 1);
    }
    matrix.set(0, n - 1, corner.rem_euclid(q));
    matrix
}

/// The determinant-one signed cycle: corner `(−1)^{n−1}`.
fn signed_cycle(n: usize, q: i32) -> Matrix {
    let corner = if n % 2 == 1 { 1 } else { -1 };
    cycle_with_corner(n, corner, q)
}

/// `diag(γ, 1, …, 1)` for the smallest multiplicative generator γ of F_q^*.
fn torus(n: usize, q: i32) -> Result<Matrix, CatalogError> {
    let gamma = modular::multiplicative_generator(q).map_err(|_| CatalogError::PrimeRequired)?;
    let mut matrix = Matrix::identity(n);
    matrix.set(0, 0, gamma);
    Ok(matrix)
}

fn wrap(matrices: impl IntoIterator<Item = Matrix>, q: i32) -> IndexSet<GeneralLinear> {
    matrices
        .into_iter()
        .map(|m| GeneralLinear::new(m, q).expect("catalog matrices are invertible"))
        .collect()
}

fn projectivize(set: IndexSet<GeneralLinear>) -> IndexSet<ProjectiveLinear> {
    set.into_iter()
        .map(|g| {
            ProjectiveLinear::new(g.matrix().clone(), g.modulus())
                .expect("catalog matrices are invertible")
        })
        .collect()
}

/// Generators of SL_n(F_q): the Lubotzky pair of opposite transvections
/// for `n = 2`, a transvection and the signed cycle for `n ≥ 3`.
pub fn sl_pair(n: usize, q: i32) -> Result<IndexSet<GeneralLinear>, CatalogError> {
    require_prime(q)?;
    if n < 2 {
        return Err(CatalogError::UnsupportedRank);
    }
    let matrices = if n == 2 {
        alloc::vec![shear(2), Matrix::elementary(2, 2, 1)]
    } else {
        alloc::vec![shear(n), signed_cycle(n, q)]
    };
    Ok(wrap(matrices, q))
}

/// Generators of GL_n(F_q): the torus element `diag(γ, 1, …, 1)` and the
/// cycle composed with a shear.
pub fn gl_pair(n: usize, q: i32) -> Result<IndexSet<GeneralLinear>, CatalogError> {
    require_prime(q)?;
    if n < 2 {
        return Err(CatalogError::UnsupportedRank);
    }
    let cycle_shear = cycle_with_corner(n, 1, q)
        .product(&shear(n), q)
        .expect("shapes agree");
    Ok(wrap([torus(n, q)?, cycle_shear], q))
}

/// Generators of PGL_n(F_q): the images of [`gl_pair`].
pub fn pgl_pair(n: usize, q: i32) -> Result<IndexSet<ProjectiveLinear>, CatalogError> {
    Ok(projectivize(gl_pair(n, q)?))
}

/// Generators of PSL_n(F_q): the images of [`sl_pair`].
pub fn psl_pair(n: usize, q: i32) -> Result<IndexSet<ProjectiveLinear>, CatalogError> {
    Ok(projectivize(sl_pair(n, q)?))
}

/// The symplectic form `J = [[0, I], [−I, 0]]` on 2m coordinates.
fn form_matrix(m: usize, q: i32) -> Matrix {
    let n = 2 * m;
    let mut matrix = Matrix::from_vec(n, n, alloc::vec![0; n * n]).expect("square shape");
    for i in 0..m {
        matrix.set(i, m + i, 1);
        matrix.set(m + i, i, (-1_i32).rem_euclid(q));
    }
    matrix
}

/// The block permutation `diag(P, P)` for the m-cycle `P`.
fn block_cycle(m: usize) -> Matrix {
    let n = 2 * m;
    let mut matrix = Matrix::from_vec(n, n, alloc::vec![0; n * n]).expect("square shape");
    for block in [0, m] {
        for i in 0..m - 1 {
            matrix.set(block + i + 1, block + i, 1);
        }
        matrix.set(block, block + m - 1, 1);
    }
    matrix
}

/// Generators of Sp_{2m}(F_q): the long-root transvection `I + E_{1,m+1}`,
/// the form matrix itself, and (for `m ≥ 2`) the block permutation
/// `diag(P, P)` of the m-cycle.
pub fn sp_pair(m: usize, q: i32) -> Result<IndexSet<GeneralLinear>, CatalogError> {
    require_prime(q)?;
    if m < 1 {
        return Err(CatalogError::UnsupportedRank);
    }
    let n = 2 * m;
    let mut matrices = alloc::vec![Matrix::elementary(n, 1, m + 1), form_matrix(m, q)];
    if m >= 2 {
        matrices.push(block_cycle(m));
    }
    Ok(wrap(matrices, q))
}

/// Generators of GSp_{2m}(F_q): [`sp_pair`] plus the similitude element
/// `diag(γ I, I)` scaling the form by γ.
pub fn gsp_pair(m: usize, q: i32) -> Result<IndexSet<GeneralLinear>, CatalogError> {
    let mut set = sp_pair(m, q)?;
    let gamma = modular::multiplicative_generator(q).map_err(|_| CatalogError::PrimeRequired)?;
    let n = 2 * m;
    let mut similitude = Matrix::identity(n);
    for i in 0..m {
        similitude.set(i, i, gamma);
    }
    set.insert(GeneralLinear::new(similitude, q).expect("diagonal units are invertible"));
    Ok(set)
}

/// Generators of PSp_{2m}(F_q): the images of [`sp_pair`].
pub fn psp_pair(m: usize, q: i32) -> Result<IndexSet<ProjectiveLinear>, CatalogError> {
    Ok(projectivize(sp_pair(m, q)?))
}

/// Generators of PGSp_{2m}(F_q): the images of [`gsp_pair`].
pub fn pgsp_pair(m: usize, q: i32) -> Result<IndexSet<ProjectiveLinear>, CatalogError> {
    Ok(projectivize(gsp_pair(m, q)?))
}

#[cfg(test)]
mod tests {
    use cayley_builder::build_cayley_graph;
    use cayley_group::GroupElement;

    use super::*;

    #[test]
    fn sl2_is_the_lubotzky_pair() {
        let set = sl_pair(2, 13).unwrap();
        assert_eq!(set.len(), 2);
        let shear = set.get_index(0).unwrap();
        assert_eq!(shear.matrix().entries(), &[1, 1, 0, 1]);
        let opposite = set.get_index(1).unwrap();
        assert_eq!(opposite.matrix().entries(), &[1, 0, 1, 1]);
    }

    #[test]
    fn sl2_f3_has_full_group_order() {
        // |SL_2(F_3)| = 24
        let set = sl_pair(2, 3).unwrap();
        let root = set.get_index(0).unwrap().identity();
        let graph = build_cayley_graph(set, root).unwrap();
        assert_eq!(graph.vertex_count(), 24);
    }

    #[test]
    fn psl2_f5_has_order_sixty() {
        let set = psl_pair(2, 5).unwrap();
        let root = set.get_index(0).unwrap().identity();
        let graph = build_cayley_graph(set, root).unwrap();
        assert_eq!(graph.vertex_count(), 60);
    }

    #[test]
    fn gl2_f3_component_is_the_full_group() {
        // |GL_2(F_3)| = 48
        let set = gl_pair(2, 3).unwrap();
        let root = set.get_index(0).unwrap().identity();
        let graph = build_cayley_graph(set, root).unwrap();
        assert_eq!(graph.vertex_count(), 48);
    }

    #[test]
    fn signed_cycle_has_unit_determinant() {
        for n in 2..6 {
            assert_eq!(signed_cycle(n, 7).determinant(7), 1, "n = {n}");
        }
    }

    #[test]
    fn symplectic_generators_preserve_the_form() {
        for (m, q) in [(1, 3), (1, 7), (2, 3), (3, 5)] {
            let j = form_matrix(m, q);
            for g in sp_pair(m, q).unwrap() {
                let m_t = g.matrix().transposed();
                let conjugated = m_t
                    .product(&j, q)
                    .unwrap()
                    .product(g.matrix(), q)
                    .unwrap();
                assert_eq!(conjugated, j.reduced(q), "m = {m}, q = {q}");
            }
        }
    }

    #[test]
    fn similitude_scales_the_form() {
        let (m, q) = (2, 5);
        let j = form_matrix(m, q);
        let set = gsp_pair(m, q).unwrap();
        let similitude = set.last().unwrap();
        let m_t = similitude.matrix().transposed();
        let conjugated = m_t
            .product(&j, q)
            .unwrap()
            .product(similitude.matrix(), q)
            .unwrap();
        let gamma = modular::multiplicative_generator(q).unwrap();
        assert_eq!(conjugated, j.scalar_product(gamma, q));
    }

    #[test]
    fn sp2_is_sl2() {
        // Sp_2 = SL_2: the same group through the symplectic construction
        let set = sp_pair(1, 3).unwrap();
        let root = set.get_index(0).unwrap().identity();
        let graph = build_cayley_graph(set, root).unwrap();
        assert_eq!(graph.vertex_count(), 24);
    }

    #[test]
    fn rank_and_primality_validation() {
        assert_eq!(sl_pair(1, 5), Err(CatalogError::UnsupportedRank));
        assert_eq!(gl_pair(2, 6), Err(CatalogError::PrimeRequired));
        assert_eq!(sp_pair(0, 5), Err(CatalogError::UnsupportedRank));
    }
}
