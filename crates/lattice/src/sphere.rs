//! Integer points on spheres about the origin.

use alloc::{vec, vec::Vec};

use cayley_arith::modular::perfect_sqrt;

use crate::{bc3_orbit, Point3};

/// The points of `x² + y² + z² = n` inside the fundamental region
/// `0 ≤ x ≤ y ≤ z`, ordered by `x` then `y`.
///
/// A multiple of 4 is delegated to the sphere of radius `√(n/4)` and the
/// result rescaled, since `x² + y² + z² ≡ 0 (mod 4)` forces all three
/// coordinates even. For `n ≡ 3 (mod 4)` all coordinates are odd, so `x`
/// walks the odd numbers only.
#[must_use]
pub fn fundamental_points_on_sphere(n: i64) -> Vec<Point3> {
    assert!(n >= 0);
    if n == 0 {
        return vec![Point3::new(0, 0, 0)];
    }
    if n % 4 == 0 {
        return fundamental_points_on_sphere(n / 4)
            .into_iter()
            .map(|p| p.scaled(2))
            .collect();
    }

    let mut points = Vec::new();
    // x², maintained incrementally: stepping x by δ adds δ·2x + δ².
    let (mut x, delta) = if n % 4 == 3 { (1, 2) } else { (0, 1) };
    let (delta_sq_a, delta_sq_b) = if delta == 2 { (4, 4) } else { (2, 1) };
    let mut x_sq = x * x;
    while 3 * x_sq <= n {
        let rest = n - x_sq;
        let mut y = x;
        let mut y_sq = y * y;
        while 2 * y_sq <= rest {
            if let Some(z) = perfect_sqrt(rest - y_sq) {
                points.push(Point3::new(x, y, z));
            }
            y_sq += 2 * y + 1;
            y += 1;
        }
        x_sq += delta_sq_a * x + delta_sq_b;
        x += delta;
    }
    points
}

/// All integer points on the sphere of squared radius `n`: the fundamental
/// points expanded through their BC3 orbits.
#[must_use]
pub fn points_on_sphere(n: i64) -> Vec<Point3> {
    fundamental_points_on_sphere(n)
        .into_iter()
        .flat_map(bc3_orbit)
        .collect()
}
