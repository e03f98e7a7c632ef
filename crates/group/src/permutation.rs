//! Permutations of `{0, …, n−1}` as image arrays.

use alloc::vec::Vec;
use core::fmt::{Display, Formatter};

use crate::GroupElement;

/// An element of the symmetric group S_n.
///
/// Stored as the image array: `map[x]` is where `x` is sent. Products
/// compose like matrices acting on the left, `(p · q)(x) = p(q(x))`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    map: Vec<usize>,
}

impl Permutation {
    /// The identity permutation on `n` letters.
    #[must_use]
    pub fn one(n: usize) -> Self {
        Self {
            map: (0..n).collect(),
        }
    }

    /// Build a permutation from its image array.
    ///
    /// # Panics
    ///
    /// Panics unless `images` is a bijection of `{0, …, n−1}`.
    #[must_use]
    pub fn from_images(images: Vec<usize>) -> Self {
        let n = images.len();
        let mut seen = alloc::vec![false; n];
        for &image in &images {
            assert!(image < n, "image {image} out of range for {n} letters");
            assert!(!seen[image], "image {image} repeated");
            seen[image] = true;
        }
        Self { map: images }
    }

    /// Build a permutation on `n` letters from disjoint cycles.
    ///
    /// Letters not mentioned are fixed.
    ///
    /// # Example
    ///
    /// ```
    /// use cayley_group::Permutation;
    ///
    /// let g = Permutation::from_cycles(4, &[&[0, 1, 2]]);
    /// assert_eq!(g.image_of(2), 0);
    /// assert_eq!(g.image_of(3), 3);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics when a letter is out of range or mentioned twice.
    #[must_use]
    pub fn from_cycles(n: usize, cycles: &[&[usize]]) -> Self {
        let mut map: Vec<usize> = (0..n).collect();
        let mut seen = alloc::vec![false; n];
        for cycle in cycles {
            for (k, &x) in cycle.iter().enumerate() {
                assert!(x < n, "letter {x} out of range for {n} letters");
                assert!(!seen[x], "letter {x} appears in two cycles");
                seen[x] = true;
                map[x] = cycle[(k + 1) % cycle.len()];
            }
        }
        Self { map }
    }

    /// The transposition `(i j)` on `n` letters.
    #[must_use]
    pub fn transposition(n: usize, i: usize, j: usize) -> Self {
        Self::from_cycles(n, &[&[i, j]])
    }

    /// The number of letters.
    #[must_use]
    pub fn letters(&self) -> usize {
        self.map.len()
    }

    /// Where `x` is sent.
    #[must_use]
    pub fn image_of(&self, x: usize) -> usize {
        self.map[x]
    }

    /// The underlying image array.
    #[must_use]
    pub fn images(&self) -> &[usize] {
        &self.map
    }

    /// Whether the permutation is even.
    #[must_use]
    pub fn is_even(&self) -> bool {
        // count transpositions by walking the cycle decomposition
        let n = self.map.len();
        let mut seen = alloc::vec![false; n];
        let mut swaps = 0;
        for start in 0..n {
            if seen[start] {
                continue;
            }
            let mut x = start;
            let mut length = 0;
            while !seen[x] {
                seen[x] = true;
                x = self.map[x];
                length += 1;
            }
            swaps += length - 1;
        }
        swaps % 2 == 0
    }
}

impl GroupElement for Permutation {
    fn identity(&self) -> Self {
        Self::one(self.map.len())
    }

    fn inverse(&self) -> Self {
        let mut map = alloc::vec![0; self.map.len()];
        for (x, &image) in self.map.iter().enumerate() {
            map[image] = x;
        }
        Self { map }
    }

    fn left_mul(&self, h: &Self) -> Self {
        h.right_mul(self)
    }

    fn right_mul(&self, h: &Self) -> Self {
        assert_eq!(self.map.len(), h.map.len());
        Self {
            map: (0..self.map.len()).map(|x| self.map[h.map[x]]).collect(),
        }
    }

    fn is_operational_with(&self, other: &Self) -> bool {
        self.map.len() == other.map.len()
    }
}

impl Display for Permutation {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for &image in &self.map {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{image}")?;
            first = false;
        }
        Ok(())
    }
}
