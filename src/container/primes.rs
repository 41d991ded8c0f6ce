//! Prime helpers used to size the bucket array.

/// Trial division over odd divisors up to `√n`.
pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut divisor = 3;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Smallest prime `>= candidate`, or `None` if the search runs past `usize::MAX`.
///
/// Even candidates are bumped to the next odd number and the search then
/// walks odd numbers only.
pub fn next_prime(candidate: usize) -> Option<usize> {
    if candidate <= 2 {
        return Some(2);
    }
    let mut n = if candidate % 2 == 0 {
        candidate.checked_add(1)?
    } else {
        candidate
    };
    while !is_prime(n) {
        n = n.checked_add(2)?;
    }
    Some(n)
}
