//! # Luhn Checksum
//!
//! Shared by bank cards, personal identity numbers and organization numbers.
//!
//! ## Algorithm
//! ```text
//!   digits:     4  5  3  9  1  4  8  8  0  3  4  3  6  4  6  7
//!   role:       D  .  D  .  D  .  D  .  D  .  D  .  D  .  D  .   (from the right)
//!   value:      8  5  6  9  2  4  7  8  0  3  8  3  3  4  3  7   (D = 2d, digit sum)
//!   sum = 80    80 % 10 == 0  ──►  valid
//! ```
//!
//! The rightmost digit is kept as is, the one left of it is doubled, and so
//! on. A zero sum is rejected so that an all-zero sequence never validates.

/// Doubled value of each digit with its own digits summed (`7 -> 14 -> 5`).
const DOUBLED: [u32; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Returns true when `digits` passes the Luhn checksum.
///
/// Characters other than ASCII digits are skipped.
///
/// ## Example
/// ```rust
/// use formator_core::luhn;
///
/// assert!(luhn("4539148803436467"));
/// assert!(!luhn("4539148803436468"));
/// assert!(!luhn("0000000000"));
/// ```
pub fn luhn(digits: &str) -> bool {
    let sum: u32 = digits
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(position, digit)| {
            if position % 2 == 1 {
                DOUBLED[digit as usize]
            } else {
                digit
            }
        })
        .sum();

    sum != 0 && sum % 10 == 0
}
