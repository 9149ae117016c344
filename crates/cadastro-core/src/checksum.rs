//! # Check-Digit Arithmetic
//!
//! The positional weighted-sum modulo-11 rule shared by CPF and CNPJ.
//! Each check digit is derived from the digits before it: multiply each
//! digit by its weight, sum, take the remainder mod 11; remainders below
//! the threshold (2) yield digit 0, anything else yields `11 - remainder`.

/// Compute one check digit over the leading `weights.len()` characters
/// of `digits`.
///
/// # Panics
///
/// The caller guarantees that `digits` holds at least `weights.len()`
/// ASCII digits. Violating that is a programming error, not a recoverable
/// input condition, so this function panics rather than silently coercing.
pub fn check_digit(digits: &str, weights: &[u32], modulus: u32, remainder_threshold: u32) -> u32 {
    assert!(
        digits.len() >= weights.len(),
        "check_digit needs {} digits, got {}",
        weights.len(),
        digits.len()
    );

    let sum: u32 = digits
        .chars()
        .take(weights.len())
        .zip(weights)
        .map(|(c, &w)| {
            let d = c.to_digit(10).expect("caller guarantees ASCII digits");
            d * w
        })
        .sum();

    let remainder = sum % modulus;
    if remainder < remainder_threshold {
        0
    } else {
        modulus - remainder
    }
}
