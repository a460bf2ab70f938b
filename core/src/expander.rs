//! The **Subnet Expander**.
//!
//! [`expand`] walks each subnet in input order and calls the visitor once per
//! address, ascending within a subnet. The first error wins: a malformed subnet
//! or a failing visitor stops the walk immediately and that error is returned
//! unchanged. Overlapping subnets are not merged, so the visitor may see the
//! same address more than once.
//!
//! Nothing is buffered. Addresses are produced one at a time by
//! increment-with-carry, so a `/0` is as cheap to start as a `/32`; bounding the
//! total work is left to the caller (typically by having the visitor fail).

use std::borrow::Borrow;
use std::net::IpAddr;

use netexpand_common::error::SubnetError;
use netexpand_common::network::subnet::Subnet;
use tracing::{debug, trace};

/// Visits every address of every subnet, in order.
///
/// The visitor's error type must be able to carry a [`SubnetError`], which is
/// what gets returned when a subnet is malformed. Errors produced by the
/// visitor itself are passed through untouched.
pub fn expand<I, F, E>(subnets: I, mut visit: F) -> Result<(), E>
where
    I: IntoIterator,
    I::Item: Borrow<Subnet>,
    F: FnMut(IpAddr) -> Result<(), E>,
    E: From<SubnetError>,
{
    for subnet in subnets {
        let subnet: &Subnet = subnet.borrow();
        let addresses = subnet.addresses()?;

        debug!(
            %subnet,
            count = ?addresses.remaining(),
            "Expanding subnet"
        );

        for addr in addresses {
            trace!(%addr, "Visiting address");
            visit(addr)?;
        }
    }
    Ok(())
}

/// Total number of addresses [`expand`] would visit for `subnets`.
///
/// Returns `Ok(None)` when the sum does not fit in a `u128`. Fails on the
/// first malformed subnet, like [`expand`] does.
pub fn total_addresses<I>(subnets: I) -> Result<Option<u128>, SubnetError>
where
    I: IntoIterator,
    I::Item: Borrow<Subnet>,
{
    let mut total: Option<u128> = Some(0);
    for subnet in subnets {
        let subnet: &Subnet = subnet.borrow();
        let count = subnet.address_count()?;
        total = total.zip(count).and_then(|(acc, n)| acc.checked_add(n));
    }
    Ok(total)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
