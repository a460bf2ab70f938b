//! # Subnet Model
//!
//! A [`Subnet`] is a prefix address paired with a mask. The prefix address does
//! not have to be the network address; host bits are cleared when the subnet is
//! expanded. Address and mask are kept as independent [`IpAddr`] values so that
//! malformed input (an IPv4 address with an IPv6 mask, or a mask with holes) can
//! be represented and is only rejected once the subnet is actually used.
//!
//! Accepted text forms:
//! * `192.168.1.0/24` and `fe80::/64` (CIDR).
//! * `10.0.0.1` or `::1` (a single host, full-width mask).

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use pnet::ipnetwork::IpNetwork;

use crate::error::SubnetError;
use crate::network::octets::{self, OctetRange};

pub const IPV4_BITS: u8 = 32;
pub const IPV6_BITS: u8 = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subnet {
    pub addr: IpAddr,
    pub mask: IpAddr,
}

fn family_width(addr: &IpAddr) -> u8 {
    match addr {
        IpAddr::V4(_) => IPV4_BITS,
        IpAddr::V6(_) => IPV6_BITS,
    }
}

/// Mask of `addr`'s family with `prefix` leading ones.
fn prefix_mask(addr: &IpAddr, prefix: u8) -> IpAddr {
    match addr {
        IpAddr::V4(_) => IpAddr::from(octets::prefix_mask::<4>(prefix.into())),
        IpAddr::V6(_) => IpAddr::from(octets::prefix_mask::<16>(prefix.into())),
    }
}

/// Address and mask octets of a subnet whose families agree.
enum Octets {
    V4([u8; 4], [u8; 4]),
    V6([u8; 16], [u8; 16]),
}

impl Subnet {
    pub fn new(addr: IpAddr, mask: IpAddr) -> Self {
        Self { addr, mask }
    }

    /// Creates a subnet from an address and a CIDR prefix length.
    pub fn with_prefix(addr: IpAddr, prefix: u8) -> Result<Self, SubnetError> {
        let max = family_width(&addr);
        if prefix > max {
            return Err(SubnetError::PrefixTooLong { prefix, max });
        }
        Ok(Self {
            addr,
            mask: prefix_mask(&addr, prefix),
        })
    }

    /// A subnet holding exactly `addr`.
    pub fn host(addr: IpAddr) -> Self {
        Self {
            addr,
            mask: prefix_mask(&addr, family_width(&addr)),
        }
    }

    fn octets(&self) -> Result<Octets, SubnetError> {
        match (self.addr, self.mask) {
            (IpAddr::V4(addr), IpAddr::V4(mask)) => Ok(Octets::V4(addr.octets(), mask.octets())),
            (IpAddr::V6(addr), IpAddr::V6(mask)) => Ok(Octets::V6(addr.octets(), mask.octets())),
            _ => Err(SubnetError::FamilyMismatch {
                addr: self.addr,
                mask: self.mask,
            }),
        }
    }

    /// Checks that address and mask share a family and that the mask is a
    /// contiguous prefix. Returns the family width in bits.
    pub fn validate(&self) -> Result<u8, SubnetError> {
        let (contiguous, width) = match self.octets()? {
            Octets::V4(_, mask) => (octets::is_contiguous(&mask), IPV4_BITS),
            Octets::V6(_, mask) => (octets::is_contiguous(&mask), IPV6_BITS),
        };
        if !contiguous {
            return Err(SubnetError::NonContiguousMask { mask: self.mask });
        }
        Ok(width)
    }

    /// The network address (prefix AND mask).
    pub fn base(&self) -> Result<IpAddr, SubnetError> {
        self.validate()?;
        Ok(match self.octets()? {
            Octets::V4(addr, mask) => IpAddr::from(octets::network(addr, mask)),
            Octets::V6(addr, mask) => IpAddr::from(octets::network(addr, mask)),
        })
    }

    /// The highest address in the subnet (base OR NOT mask).
    pub fn last(&self) -> Result<IpAddr, SubnetError> {
        self.validate()?;
        Ok(match self.octets()? {
            Octets::V4(addr, mask) => IpAddr::from(octets::broadcast(addr, mask)),
            Octets::V6(addr, mask) => IpAddr::from(octets::broadcast(addr, mask)),
        })
    }

    pub fn host_bits(&self) -> Result<u32, SubnetError> {
        self.validate()?;
        Ok(match self.octets()? {
            Octets::V4(_, mask) => octets::host_bits(&mask),
            Octets::V6(_, mask) => octets::host_bits(&mask),
        })
    }

    pub fn prefix_len(&self) -> Result<u8, SubnetError> {
        let width = self.validate()?;
        let host_bits = self.host_bits()? as u8;
        Ok(width - host_bits)
    }

    /// Number of addresses in the subnet, `2^host_bits`.
    ///
    /// Yields `Ok(None)` only for an all-zero IPv6 mask, whose 2^128 addresses
    /// do not fit in a `u128`.
    pub fn address_count(&self) -> Result<Option<u128>, SubnetError> {
        Ok(1u128.checked_shl(self.host_bits()?))
    }

    /// Lazily walks every address of the subnet in ascending order.
    pub fn addresses(&self) -> Result<SubnetAddresses, SubnetError> {
        self.validate()?;
        Ok(match self.octets()? {
            Octets::V4(addr, mask) => SubnetAddresses::V4(OctetRange::new(
                octets::network(addr, mask),
                octets::broadcast(addr, mask),
            )),
            Octets::V6(addr, mask) => SubnetAddresses::V6(OctetRange::new(
                octets::network(addr, mask),
                octets::broadcast(addr, mask),
            )),
        })
    }
}

/// Ascending iterator over the addresses of one [`Subnet`].
#[derive(Debug, Clone)]
pub enum SubnetAddresses {
    V4(OctetRange<4>),
    V6(OctetRange<16>),
}

impl SubnetAddresses {
    /// Addresses not yet yielded; `None` when that is 2^128.
    pub fn remaining(&self) -> Option<u128> {
        match self {
            SubnetAddresses::V4(range) => range.remaining(),
            SubnetAddresses::V6(range) => range.remaining(),
        }
    }
}

impl Iterator for SubnetAddresses {
    type Item = IpAddr;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            SubnetAddresses::V4(range) => range.next().map(IpAddr::from),
            SubnetAddresses::V6(range) => range.next().map(IpAddr::from),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            SubnetAddresses::V4(range) => range.size_hint(),
            SubnetAddresses::V6(range) => range.size_hint(),
        }
    }
}

impl std::iter::FusedIterator for SubnetAddresses {}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.prefix_len() {
            Ok(prefix) => write!(f, "{}/{}", self.addr, prefix),
            Err(_) => write!(f, "{}/{}", self.addr, self.mask),
        }
    }
}

impl FromStr for Subnet {
    type Err = SubnetError;

    /// Parses `addr/prefix` or a bare address.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parse_err = |reason: String| SubnetError::Parse {
            input: s.to_string(),
            reason,
        };

        let Some((addr_str, prefix_str)) = s.split_once('/') else {
            let addr = s
                .parse::<IpAddr>()
                .map_err(|e| parse_err(format!("invalid address: {e}")))?;
            return Ok(Subnet::host(addr));
        };

        let addr = addr_str
            .parse::<IpAddr>()
            .map_err(|e| parse_err(format!("invalid address '{addr_str}': {e}")))?;
        let prefix = prefix_str
            .parse::<u8>()
            .map_err(|e| parse_err(format!("invalid prefix '{prefix_str}': {e}")))?;

        Subnet::with_prefix(addr, prefix)
    }
}

impl From<IpNetwork> for Subnet {
    fn from(network: IpNetwork) -> Self {
        Subnet::new(network.ip(), network.mask())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
