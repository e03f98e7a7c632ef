//! Orbit types and orbit expansion under BC3 and its rotation subgroup.

use alloc::{collections::BTreeSet, vec::Vec};

use crate::Point3;

/// The six coordinate permutations, paired with their parity.
const PERMUTATIONS: [([usize; 3], bool); 6] = [
    ([0, 1, 2], true),
    ([1, 2, 0], true),
    ([2, 0, 1], true),
    ([0, 2, 1], false),
    ([1, 0, 2], false),
    ([2, 1, 0], false),
];

/// The stratum of a fundamental point within the region `0 ≤ x ≤ y ≤ z`,
/// written `(major, minor)`.
///
/// `major` counts the independent constraints the point satisfies: 4 for
/// the origin, 3 on an edge of the region, 2 in the interior of a face,
/// 1 in the open interior. `minor` distinguishes the edge or face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrbitClass {
    pub major: u8,
    pub minor: u8,
}

impl OrbitClass {
    /// The size of the BC3 orbit of any point in this stratum.
    #[must_use]
    pub fn orbit_size(&self) -> usize {
        match (self.major, self.minor) {
            (4, _) => 1,
            (3, 1) => 6,  // (0, 0, c): signed axis points
            (3, 2) => 12, // (0, c, c)
            (3, 3) => 8,  // (c, c, c): signed diagonals
            (2, _) => 24,
            _ => 48,
        }
    }
}

/// The representative of the BC3 orbit of `p` inside `0 ≤ x ≤ y ≤ z`.
#[must_use]
pub fn fundamental_representative(p: Point3) -> Point3 {
    let mut coords = [p.x.abs(), p.y.abs(), p.z.abs()];
    coords.sort_unstable();
    Point3::new(coords[0], coords[1], coords[2])
}

/// Classify a fundamental point by the faces `x = 0`, `y = x`, `z = y` it
/// lies on.
///
/// # Panics
///
/// Panics when `p` is not fundamental.
#[must_use]
pub fn classify(p: Point3) -> OrbitClass {
    assert!(
        0 <= p.x && p.x <= p.y && p.y <= p.z,
        "point is not in the fundamental region"
    );
    let on_wall = [p.x == 0, p.y == p.x, p.z == p.y];
    let (major, minor) = match on_wall {
        [true, true, true] => (4, 1),
        [true, true, false] => (3, 1),
        [true, false, true] => (3, 2),
        [false, true, true] => (3, 3),
        [true, false, false] => (2, 1),
        [false, true, false] => (2, 2),
        [false, false, true] => (2, 3),
        [false, false, false] => (1, 1),
    };
    OrbitClass { major, minor }
}

fn expand(p: Point3, rotations_only: bool) -> Vec<Point3> {
    let coords = [p.x, p.y, p.z];
    let mut orbit = BTreeSet::new();
    for (perm, even_perm) in PERMUTATIONS {
        for signs in 0..8_u8 {
            let mut flips = 0;
            let mut image = [0_i64; 3];
            for (slot, &source) in perm.iter().enumerate() {
                let negate = signs >> slot & 1 == 1;
                if negate {
                    flips += 1;
                }
                image[slot] = if negate { -coords[source] } else { coords[source] };
            }
            // a signed permutation is a rotation iff its determinant is +1
            if rotations_only && (even_perm == (flips % 2 == 1)) {
                continue;
            }
            orbit.insert(Point3::new(image[0], image[1], image[2]));
        }
    }
    orbit.into_iter().collect()
}

/// The full BC3 orbit of `p`, sorted and without repeats.
#[must_use]
pub fn bc3_orbit(p: Point3) -> Vec<Point3> {
    expand(p, false)
}

/// The orbit of `p` under the rotation subgroup of BC3 (the octahedral
/// group, 24 elements): signed permutations of determinant +1.
#[must_use]
pub fn octahedral_orbit(p: Point3) -> Vec<Point3> {
    expand(p, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stratum_sizes_match_orbits() {
        let cases = [
            (Point3::new(0, 0, 0), 1),
            (Point3::new(0, 0, 3), 6),
            (Point3::new(0, 2, 2), 12),
            (Point3::new(1, 1, 1), 8),
            (Point3::new(0, 1, 2), 24),
            (Point3::new(1, 1, 2), 24),
            (Point3::new(1, 2, 2), 24),
            (Point3::new(1, 2, 3), 48),
        ];
        for (p, expected) in cases {
            assert_eq!(classify(p).orbit_size(), expected, "{p:?}");
            assert_eq!(bc3_orbit(p).len(), expected, "{p:?}");
        }
    }

    #[test]
    fn octahedral_orbit_is_the_rotation_half() {
        assert_eq!(octahedral_orbit(Point3::new(1, 2, 3)).len(), 24);
        // stabilized strata keep their full orbit under rotations alone
        assert_eq!(octahedral_orbit(Point3::new(0, 0, 3)).len(), 6);
        assert_eq!(octahedral_orbit(Point3::new(1, 1, 1)).len(), 8);
    }

    #[test]
    fn orbits_preserve_norm() {
        let p = Point3::new(1, 2, 3);
        for image in bc3_orbit(p) {
            assert_eq!(image.norm(), p.norm());
        }
    }

    #[test]
    fn representative_is_fundamental() {
        let p = Point3::new(-3, 1, -2);
        assert_eq!(fundamental_representative(p), Point3::new(1, 2, 3));
        for image in bc3_orbit(Point3::new(1, 2, 3)) {
            assert_eq!(fundamental_representative(image), Point3::new(1, 2, 3));
        }
    }

    #[test]
    #[should_panic(expected = "fundamental")]
    fn classify_rejects_unsorted_points() {
        let _ = classify(Point3::new(2, 1, 0));
    }
}
