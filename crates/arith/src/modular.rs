//! Scalar arithmetic over Z/qZ with centered canonical representatives.

use alloc::vec::Vec;

use crate::ArithmeticError;

/// Map `r` from `[0, q)` into the centered interval.
#[inline]
fn center(r: i64, q: i64) -> i32 {
    debug_assert!((0..q).contains(&r));
    if r > q / 2 {
        (r - q) as i32
    } else {
        r as i32
    }
}

/// The centered representative of `m` modulo `q`.
///
/// The result `r` satisfies `r ≡ m (mod q)` and `−⌊q/2⌋ ≤ r ≤ ⌊q/2⌋`; for
/// even `q` the representative `+q/2` is chosen over `−q/2`, so the result
/// is canonical. In particular `reduce(m, 2)` is always 0 or 1.
///
/// # Example
///
/// ```
/// use cayley_arith::modular::reduce;
///
/// assert_eq!(reduce(13, 5), -2);
/// assert_eq!(reduce(-13, 5), 2);
/// assert_eq!(reduce(2, 4), 2);
/// ```
#[must_use]
pub fn reduce(m: i32, q: i32) -> i32 {
    let q = i64::from(q).abs();
    debug_assert!(q != 0);
    center(i64::from(m).rem_euclid(q), q)
}

/// `reduce(a + b, q)`, computed with 64-bit intermediates.
#[must_use]
pub fn reduced_sum(a: i32, b: i32, q: i32) -> i32 {
    let q = i64::from(q).abs();
    center((i64::from(a) + i64::from(b)).rem_euclid(q), q)
}

/// `reduce(a · b, q)`, computed with 64-bit intermediates.
#[must_use]
pub fn reduced_product(a: i32, b: i32, q: i32) -> i32 {
    let q = i64::from(q).abs();
    center((i64::from(a) * i64::from(b)).rem_euclid(q), q)
}

/// Greatest common divisor of `|a|` and `|b|`.
#[must_use]
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// The unique `r` in `[0, q)` with `a · r ≡ 1 (mod q)`.
///
/// Extended Euclid; fails with [`ArithmeticError::NotInvertible`] when
/// `gcd(a, q) ≠ 1`.
pub fn inverse(a: i32, q: i32) -> Result<i32, ArithmeticError> {
    let q = i64::from(q).abs();
    let a = i64::from(a).rem_euclid(q);

    // Invariants: old_r = old_s·a + _·q, r = s·a + _·q.
    let (mut old_r, mut r) = (a, q);
    let (mut old_s, mut s) = (1_i64, 0_i64);
    while r != 0 {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_s, s) = (s, old_s - quotient * s);
    }

    if old_r != 1 {
        return Err(ArithmeticError::NotInvertible);
    }
    Ok(old_s.rem_euclid(q) as i32)
}

/// `base^exp mod q`, by square and multiply. `q` need not be prime.
#[must_use]
pub fn pow_mod(base: i64, mut exp: u64, q: i64) -> i64 {
    let q = q.abs();
    let mut base = base.rem_euclid(q);
    let mut acc = 1 % q;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc * base % q;
        }
        base = base * base % q;
        exp >>= 1;
    }
    acc
}

/// Trial-division primality test, adequate for short moduli.
#[must_use]
pub fn is_prime(q: i32) -> bool {
    let q = i64::from(q).abs();
    if q < 2 {
        return false;
    }
    if q % 2 == 0 {
        return q == 2;
    }
    let mut d = 3;
    while d * d <= q {
        if q % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// The non-negative integer `s` with `s² = n`, if `n` is a perfect square.
#[must_use]
pub fn perfect_sqrt(n: i64) -> Option<i64> {
    if n < 0 {
        return None;
    }
    // f64 sqrt is exact enough to land within one of the true root.
    let mut s = (n as f64).sqrt() as i64;
    while s > 0 && s * s > n {
        s -= 1;
    }
    while (s + 1) * (s + 1) <= n {
        s += 1;
    }
    (s * s == n).then_some(s)
}

/// Whether `a` is a square modulo the odd prime `q` (Euler's criterion).
#[must_use]
pub fn is_square(a: i32, q: i32) -> bool {
    let q = i64::from(q).abs();
    let a = i64::from(a).rem_euclid(q);
    if a == 0 {
        return true;
    }
    pow_mod(a, ((q - 1) / 2) as u64, q) == 1
}

/// Some `r` in `[0, q)` with `r² ≡ a (mod q)`, or `None` when `a` is not a
/// square. Linear scan over the half range; fine for short primes.
#[must_use]
pub fn square_root(a: i32, q: i32) -> Option<i32> {
    let q = i64::from(q).abs();
    let a = i64::from(a).rem_euclid(q);
    if a == 0 {
        return Some(0);
    }
    (1..=q / 2).find(|&r| r * r % q == a).map(|r| r as i32)
}

/// A square root of −1 modulo `q`; exists for prime `q ≡ 1 (mod 4)`.
#[must_use]
pub fn iota(q: i32) -> Option<i32> {
    square_root(q - 1, q)
}

/// Distinct prime factors of `n`, ascending.
fn prime_factors(mut n: i64) -> Vec<i64> {
    let mut factors = Vec::new();
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            factors.push(d);
            while n % d == 0 {
                n /= d;
            }
        }
        d += 1;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

/// The smallest generator of the cyclic group F_q^*.
///
/// Fails with [`ArithmeticError::NonPrimeModulus`] for composite `q`.
pub fn multiplicative_generator(q: i32) -> Result<i32, ArithmeticError> {
    if !is_prime(q) {
        return Err(ArithmeticError::NonPrimeModulus);
    }
    let q = i64::from(q).abs();
    if q == 2 {
        return Ok(1);
    }
    let factors = prime_factors(q - 1);
    for g in 2..q {
        if factors
            .iter()
            .all(|&p| pow_mod(g, ((q - 1) / p) as u64, q) != 1)
        {
            return Ok(g as i32);
        }
    }
    unreachable!("every prime field has a multiplicative generator")
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn reduce_centers() {
        assert_eq!(reduce(0, 5), 0);
        assert_eq!(reduce(7, 5), 2);
        assert_eq!(reduce(8, 5), -2);
        assert_eq!(reduce(-8, 5), 2);
        assert_eq!(reduce(-7, 5), -2);
        // even modulus: +q/2 is the canonical half-point
        assert_eq!(reduce(2, 4), 2);
        assert_eq!(reduce(-2, 4), 2);
        assert_eq!(reduce(5, 2), 1);
        assert_eq!(reduce(-4, 2), 0);
    }

    #[test]
    fn inverse_of_unit() {
        let q = 17;
        for a in 1..q {
            let r = inverse(a, q).unwrap();
            assert_eq!(reduced_product(a, r, q), 1, "a = {a}");
        }
    }

    #[test]
    fn inverse_of_non_unit_fails() {
        assert_eq!(inverse(6, 9), Err(ArithmeticError::NotInvertible));
        assert_eq!(inverse(0, 7), Err(ArithmeticError::NotInvertible));
    }

    #[test]
    fn primality() {
        let primes = [2, 3, 5, 7, 11, 13, 101, 251];
        for p in primes {
            assert!(is_prime(p), "{p}");
        }
        for n in [-1, 0, 1, 4, 9, 91, 255] {
            assert!(!is_prime(n), "{n}");
        }
    }

    #[test]
    fn perfect_squares() {
        for k in 0..10_000_i64 {
            assert_eq!(perfect_sqrt(k * k), Some(k));
        }
        for k in 2..10_000_i64 {
            assert_eq!(perfect_sqrt(k * k + 1), None, "k = {k}");
        }
        assert_eq!(perfect_sqrt(-4), None);
    }

    #[test]
    fn square_roots() {
        assert_eq!(square_root(4, 13), Some(2));
        assert_eq!(square_root(0, 13), Some(0));
        // 2 is not a square mod 5
        assert_eq!(square_root(2, 5), None);
    }

    #[test]
    fn iota_exists_iff_one_mod_four() {
        for q in [5, 13, 17, 29] {
            let r = iota(q).unwrap();
            assert_eq!(reduced_product(r, r, q), reduce(-1, q));
        }
        for q in [3, 7, 11, 19, 23] {
            assert_eq!(iota(q), None);
        }
    }

    #[test]
    fn generator_has_full_order() {
        for q in [3, 5, 7, 13, 101] {
            let g = multiplicative_generator(q).unwrap();
            let mut seen = 1_i64;
            for e in 1..i64::from(q) - 1 {
                seen = seen * i64::from(g) % i64::from(q);
                assert_ne!(seen, 1, "g = {g} has order {e} < q - 1 for q = {q}");
            }
        }
        assert_eq!(
            multiplicative_generator(8),
            Err(ArithmeticError::NonPrimeModulus)
        );
    }

    proptest! {
        #[test]
        fn reduce_is_congruent_and_centered(m in any::<i32>(), q in 2..10_000_i32) {
            let r = reduce(m, q);
            prop_assert_eq!(
                i64::from(r).rem_euclid(i64::from(q)),
                i64::from(m).rem_euclid(i64::from(q))
            );
            prop_assert!(i64::from(r).abs() <= i64::from(q) / 2);
        }

        #[test]
        fn product_with_inverse_is_one(a in 1..10_000_i32) {
            let q = 10_007; // prime, larger than any sampled a
            let r = inverse(a, q).unwrap();
            prop_assert_eq!(reduced_product(a, r, q), 1);
        }
    }
}
