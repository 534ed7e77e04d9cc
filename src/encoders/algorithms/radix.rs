//! Base-1000 digit arithmetic.
//!
//! Bytes are read as one unsigned big-endian integer and split into
//! three-decimal-digit groups. Chunking the decimal string `"00" + V` from the
//! right is the same as repeated division by 1000, so both directions are done
//! with `BigUint` rather than string slicing.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

/// Number of distinct digit values.
pub const BASE: u16 = 1000;

/// Splits `data` into base-1000 digits, most significant first.
///
/// A zero value still produces the single digit `0`, matching the group that
/// the `"00"` sentinel leaves behind for `"000"`.
pub fn to_digits(data: &[u8]) -> Vec<u16> {
    let mut num = BigUint::from_bytes_be(data);
    if num.is_zero() {
        return vec![0];
    }

    let base = BigUint::from(BASE);
    // 8 bits per byte, just under 10 bits per digit
    let mut digits = Vec::with_capacity(data.len() * 8 / 9 + 1);

    while !num.is_zero() {
        let (quotient, remainder) = num.div_rem(&base);
        // remainder < 1000 always fits
        digits.push(remainder.to_u16().unwrap_or_default());
        num = quotient;
    }

    digits.reverse();
    digits
}

/// Rebuilds the minimal big-endian byte string from base-1000 digits.
///
/// Equivalent to concatenating each digit as `{:03}` and parsing the result as
/// a decimal integer. A zero value yields an empty byte string.
pub fn from_digits(digits: &[u16]) -> Vec<u8> {
    let mut num = BigUint::zero();
    for &digit in digits {
        num *= u32::from(BASE);
        num += u32::from(digit);
    }
    to_bytes(&num)
}

/// Minimal big-endian bytes of `num`; empty for zero.
pub(crate) fn to_bytes(num: &BigUint) -> Vec<u8> {
    if num.is_zero() {
        Vec::new()
    } else {
        num.to_bytes_be()
    }
}
