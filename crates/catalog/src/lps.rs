//! The Lubotzky–Phillips–Sarnak generator construction.
//!
//! For distinct odd primes p and q, the p+1 integer quaternions of norm p
//! (one representative per class under the eight unit quaternions) are
//! pushed into PGL_2(F_q) through the map π. The resulting generator list
//! defines a (p+1)-regular Ramanujan graph on PSL_2(F_q) or PGL_2(F_q).

use alloc::vec::Vec;

use cayley_arith::{modular, Matrix};
use cayley_group::{LipschitzQuaternion, ProjectiveLinear};
use cayley_lattice::{points_on_sphere, Point3};

use crate::CatalogError;

fn require_odd_prime(p: i32) -> Result<(), CatalogError> {
    if p < 3 || !modular::is_prime(p) {
        return Err(CatalogError::PrimeRequired);
    }
    Ok(())
}

/// One representative per unit-quaternion class of the integer solutions of
/// `x₀² + x₁² + x₂² + x₃² = p`, in a deterministic order. There are exactly
/// `p + 1` of them for an odd prime `p`.
///
/// For `p ≡ 1 (mod 4)` the representative is the associate with `x₀` odd
/// and positive (the other three coordinates are then even). For
/// `p ≡ 3 (mod 4)` exactly one coordinate of each solution is even; the
/// representative puts it first, non-negative, with the first nonzero of
/// the remaining coordinates positive when `x₀ = 0`.
pub fn admissible_quaternions(p: i32) -> Result<Vec<LipschitzQuaternion>, CatalogError> {
    require_odd_prime(p)?;
    let p = i64::from(p);
    let mut representatives = Vec::new();

    if p % 4 == 1 {
        let mut x0 = 1;
        while x0 * x0 <= p {
            // p − x₀² ≡ 0 (mod 4): every solution has all coordinates even
            for point in points_on_sphere(p - x0 * x0) {
                representatives.push(LipschitzQuaternion::new([x0, point.x, point.y, point.z]));
            }
            x0 += 2;
        }
    } else {
        let mut x0 = 0;
        while x0 * x0 <= p {
            for point in points_on_sphere(p - x0 * x0) {
                if x0 == 0 && !leading_coordinate_positive(point) {
                    continue;
                }
                representatives.push(LipschitzQuaternion::new([x0, point.x, point.y, point.z]));
            }
            x0 += 2;
        }
    }

    debug_assert_eq!(representatives.len() as i64, p + 1);
    Ok(representatives)
}

fn leading_coordinate_positive(point: Point3) -> bool {
    for c in [point.x, point.y, point.z] {
        if c != 0 {
            return c > 0;
        }
    }
    false
}

/// The pair `(x, y)` parameterizing π for the odd prime `q`.
///
/// For `q ≡ 1 (mod 4)`: `x = ι` with `ι² ≡ −1` and `y = 0`. Otherwise `x`
/// and `y` solve `x² + y² + 1 ≡ 0 (mod q)`, taking for `x²` the largest
/// square in `[1, q)`; its successor is then a non-square, so `−x² − 1` is
/// a square and `y` exists.
pub fn pi_parameters(q: i32) -> Result<(i32, i32), CatalogError> {
    require_odd_prime(q)?;
    if q % 4 == 1 {
        let x = modular::iota(q).expect("q ≡ 1 (mod 4) has a square root of −1");
        return Ok((x, 0));
    }
    let a = (1..=i64::from(q) / 2)
        .map(|i| (i * i % i64::from(q)) as i32)
        .max()
        .expect("q ≥ 3");
    let x = modular::square_root(a, q).expect("a is a square by construction");
    let y = modular::square_root(modular::reduce(-a - 1, q), q)
        .expect("the successor of the largest square is not a square");
    Ok((x, y))
}

/// The 2×2 matrix over F_q associated to an integer quaternion:
///
/// ```text
/// π(a, b, c, d) = | a + xb + yd    c + xd − yb |
///                 | −c + xd − yb   a − xb − yd |
/// ```
///
/// where `(x, y) = pi_parameters(q)`. The determinant is the quaternion
/// norm modulo q.
#[must_use]
pub fn pi(quat: &LipschitzQuaternion, x: i32, y: i32, q: i32) -> Matrix {
    let [a, b, c, d] = quat.coords().map(|v| modular::reduce((v % i64::from(q)) as i32, q));
    let (x, y) = (i64::from(x), i64::from(y));
    let (a, b, c, d) = (i64::from(a), i64::from(b), i64::from(c), i64::from(d));
    let entries = [
        a + x * b + y * d,
        c + x * d - y * b,
        -c + x * d - y * b,
        a - x * b - y * d,
    ];
    let q64 = i64::from(q);
    Matrix::from_vec(
        2,
        2,
        entries.iter().map(|&e| e.rem_euclid(q64) as i32).collect(),
    )
    .expect("2×2 shape is consistent")
}

/// The LPS generator list for distinct odd primes `p ≠ q`: the images of
/// the `p + 1` admissible quaternions in PGL_2(F_q).
///
/// Returned as a list, not a set: for `p ≥ q²/4` distinct quaternions can
/// project to the same matrix class, and the generator contracts encode
/// that multiplicity.
pub fn lps_generators(p: i32, q: i32) -> Result<Vec<ProjectiveLinear>, CatalogError> {
    require_odd_prime(p)?;
    require_odd_prime(q)?;
    if p == q {
        return Err(CatalogError::DistinctPrimesRequired);
    }
    let (x, y) = pi_parameters(q)?;
    let generators = admissible_quaternions(p)?
        .iter()
        .map(|quat| {
            ProjectiveLinear::new(pi(quat, x, y, q), q)
                .expect("the norm p of an admissible quaternion is a unit modulo q")
        })
        .collect();
    Ok(generators)
}
