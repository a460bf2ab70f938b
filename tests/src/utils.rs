use netexpand_common::network::subnet::Subnet;
use netexpand_core::expander;
use pnet::ipnetwork::{IpNetwork, Ipv4Network, Ipv6Network};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

pub fn v4(a: u8, b: u8, c: u8, d: u8, p: u8) -> Subnet {
    Subnet::from(IpNetwork::V4(
        Ipv4Network::new(Ipv4Addr::new(a, b, c, d), p).unwrap(),
    ))
}

pub fn v6(s: &str, p: u8) -> Subnet {
    Subnet::from(IpNetwork::V6(
        Ipv6Network::new(s.parse::<Ipv6Addr>().unwrap(), p).unwrap(),
    ))
}

pub fn ip4(a: u8, b: u8, c: u8, d: u8) -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(a, b, c, d))
}

pub fn ip6(s: &str) -> IpAddr {
    IpAddr::V6(s.parse::<Ipv6Addr>().unwrap())
}

/// Expands `subnets` into a vector, in visit order.
pub fn collect(subnets: &[Subnet]) -> anyhow::Result<Vec<IpAddr>> {
    let mut got: Vec<IpAddr> = Vec::new();
    expander::expand(subnets, |ip| {
        got.push(ip);
        Ok::<(), anyhow::Error>(())
    })?;
    Ok(got)
}
