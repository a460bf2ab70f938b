//! Big-endian octet arithmetic over fixed-width addresses.
//!
//! Every helper here is generic over the address width `N`, so the same code
//! path serves 4-byte (IPv4) and 16-byte (IPv6) addresses. Values are treated
//! as unsigned big-endian integers: index `0` is the most significant byte.

use std::iter::FusedIterator;

/// Clears the host bits of `addr`.
pub fn network<const N: usize>(addr: [u8; N], mask: [u8; N]) -> [u8; N] {
    std::array::from_fn(|i| addr[i] & mask[i])
}

/// Sets the host bits of `addr`.
pub fn broadcast<const N: usize>(addr: [u8; N], mask: [u8; N]) -> [u8; N] {
    std::array::from_fn(|i| addr[i] | !mask[i])
}

/// Builds a mask with `prefix` leading one bits. Prefixes wider than the
/// address saturate to all ones.
pub fn prefix_mask<const N: usize>(prefix: u32) -> [u8; N] {
    std::array::from_fn(|i| {
        let bits = prefix.saturating_sub(i as u32 * 8).min(8);
        if bits == 0 { 0 } else { 0xFF << (8 - bits) }
    })
}

/// Adds one, carrying from the least significant byte upwards.
///
/// Returns `false` if the value wrapped around past all ones.
pub fn increment<const N: usize>(octets: &mut [u8; N]) -> bool {
    for byte in octets.iter_mut().rev() {
        let (next, overflowed) = byte.overflowing_add(1);
        *byte = next;
        if !overflowed {
            return true;
        }
    }
    false
}

/// Number of trailing zero bits across the whole mask.
pub fn host_bits(mask: &[u8]) -> u32 {
    let mut bits = 0;
    for byte in mask.iter().rev() {
        if *byte != 0 {
            return bits + byte.trailing_zeros();
        }
        bits += 8;
    }
    bits
}

/// True when the mask reads as a run of ones followed only by zeros.
pub fn is_contiguous(mask: &[u8]) -> bool {
    let mut seen_zero = false;
    for &byte in mask {
        if seen_zero {
            if byte != 0 {
                return false;
            }
            continue;
        }
        let ones = byte.leading_ones();
        if ones < 8 {
            if byte << ones != 0 {
                return false;
            }
            seen_zero = true;
        }
    }
    true
}

fn to_u128(octets: &[u8]) -> u128 {
    octets.iter().fold(0u128, |acc, &b| (acc << 8) | u128::from(b))
}

/// Inclusive, ascending range of addresses of width `N`.
///
/// Nothing is materialized: each step is a single increment-with-carry, and
/// the range ends by comparison with its last address, so even a full
/// 16-byte space never needs its size represented as an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OctetRange<const N: usize> {
    next: Option<[u8; N]>,
    last: [u8; N],
}

impl<const N: usize> OctetRange<N> {
    /// An empty range is produced when `first > last`.
    pub fn new(first: [u8; N], last: [u8; N]) -> Self {
        let next = (first <= last).then_some(first);
        Self { next, last }
    }

    pub fn last(&self) -> [u8; N] {
        self.last
    }

    /// Addresses still to be yielded; `None` when that is 2^128.
    pub fn remaining(&self) -> Option<u128> {
        match self.next {
            None => Some(0),
            Some(next) => (to_u128(&self.last) - to_u128(&next)).checked_add(1),
        }
    }
}

impl<const N: usize> Iterator for OctetRange<N> {
    type Item = [u8; N];

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current == self.last {
            None
        } else {
            let mut following = current;
            increment(&mut following).then_some(following)
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining().map(usize::try_from) {
            Some(Ok(n)) => (n, Some(n)),
            _ => (usize::MAX, None),
        }
    }
}

impl<const N: usize> FusedIterator for OctetRange<N> {}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
