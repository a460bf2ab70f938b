use std::net::IpAddr;

use thiserror::Error;

/// Reasons a subnet cannot be expanded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubnetError {
    /// The prefix address and the mask are not the same width.
    #[error("address {addr} and mask {mask} belong to different address families")]
    FamilyMismatch { addr: IpAddr, mask: IpAddr },

    /// The mask has a one bit following a zero bit.
    #[error("mask {mask} is not a contiguous prefix")]
    NonContiguousMask { mask: IpAddr },

    #[error("prefix length {prefix} exceeds {max} bits")]
    PrefixTooLong { prefix: u8, max: u8 },

    #[error("invalid subnet '{input}': {reason}")]
    Parse { input: String, reason: String },
}
