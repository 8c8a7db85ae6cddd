//! Primitive operations over 128-bit big-endian buffers
//!
//! Every range computation in this crate is expressed through these four functions, which keeps
//! IPv4 (mapped) and IPv6 handling identical until the result is rendered.

use core::cmp::Ordering;

///Number of bits within buffer
pub const WIDTH: u32 = 128;

///Unsigned 128-bit quantity, most significant byte first
pub type Octets = [u8; 16];

#[inline(always)]
const fn to_bits(value: &Octets) -> u128 {
    u128::from_be_bytes(*value)
}

#[inline]
///Compares `a` and `b` as unsigned integers
pub const fn cmp(a: &Octets, b: &Octets) -> Ordering {
    let a = to_bits(a);
    let b = to_bits(b);
    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

#[inline]
///Returns `a + b` together with carry out of the most significant bit.
///
///On carry the sum wraps around; it is up to the caller whether this is reachable.
pub const fn add(a: &Octets, b: &Octets) -> (Octets, bool) {
    let (sum, carry) = to_bits(a).overflowing_add(to_bits(b));
    (sum.to_be_bytes(), carry)
}

#[inline]
///Returns bit `n`, counting from the least significant bit.
///
///Bits beyond [WIDTH](constant.WIDTH.html) are always unset.
pub const fn get_bit(value: &Octets, n: u32) -> bool {
    if n >= WIDTH {
        return false;
    }
    (to_bits(value) >> n) & 1 == 1
}

#[inline]
///Sets or clears bit `n`, counting from the least significant bit.
///
///Does nothing for `n` beyond [WIDTH](constant.WIDTH.html).
pub const fn set_bit(value: &mut Octets, n: u32, is_set: bool) {
    if n >= WIDTH {
        return;
    }
    let bits = to_bits(value);
    let bits = if is_set {
        bits | (1 << n)
    } else {
        bits & !(1 << n)
    };
    *value = bits.to_be_bytes();
}
