#![cfg(test)]
use crate::utils::{collect, ip4, ip6, v4, v6};
use netexpand_common::error::SubnetError;
use netexpand_common::network::subnet::Subnet;
use netexpand_core::expander;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

#[test]
fn one_ipv4_ip() {
    let got = collect(&[v4(127, 0, 0, 1, 32)]).unwrap();
    assert_eq!(got, vec![ip4(127, 0, 0, 1)]);
}

#[test]
fn one_ipv4_subnet() {
    let got = collect(&[v4(127, 0, 0, 1, 31)]).unwrap();
    assert_eq!(got, vec![ip4(127, 0, 0, 0), ip4(127, 0, 0, 1)]);
}

#[test]
fn two_ipv4_subnets() {
    let got = collect(&[v4(127, 0, 0, 2, 31), v4(127, 0, 0, 4, 31)]).unwrap();
    assert_eq!(
        got,
        vec![
            ip4(127, 0, 0, 2),
            ip4(127, 0, 0, 3),
            ip4(127, 0, 0, 4),
            ip4(127, 0, 0, 5),
        ]
    );
}

#[test]
fn one_ipv6_ip() {
    let subnet = Subnet::new(
        IpAddr::V6(Ipv6Addr::UNSPECIFIED),
        IpAddr::V6(Ipv6Addr::from([0xFF; 16])),
    );
    let got = collect(&[subnet]).unwrap();
    assert_eq!(got, vec![IpAddr::V6(Ipv6Addr::UNSPECIFIED)]);
}

#[test]
fn one_ipv6_subnet() {
    let got = collect(&[v6("::1", 127)]).unwrap();
    assert_eq!(got, vec![ip6("::"), ip6("::1")]);
}

#[test]
fn two_ipv6_subnets() {
    let got = collect(&[v6("::1", 127), v6("ff02::1", 127)]).unwrap();
    assert_eq!(
        got,
        vec![ip6("::"), ip6("::1"), ip6("ff02::"), ip6("ff02::1")]
    );
}

#[test]
fn prefix_length_determines_count() {
    for prefix in 24..=32u8 {
        let got = collect(&[v4(192, 168, 7, 99, prefix)]).unwrap();
        assert_eq!(got.len(), 1usize << (32 - prefix), "prefix /{prefix}");
        assert_eq!(got[0], v4(192, 168, 7, 99, prefix).base().unwrap());
        assert!(got.windows(2).all(|w| w[0] < w[1]), "prefix /{prefix}");
    }
}

#[test]
fn adjacent_subnets_have_no_gap() {
    let got = collect(&[v4(10, 0, 0, 0, 25), v4(10, 0, 0, 128, 25)]).unwrap();
    let whole = collect(&[v4(10, 0, 0, 0, 24)]).unwrap();
    assert_eq!(got, whole);
}

#[test]
fn overlapping_subnets_deliver_duplicates() {
    let got = collect(&[v4(10, 0, 0, 0, 30), v4(10, 0, 0, 2, 31)]).unwrap();
    assert_eq!(got.len(), 6);
    assert_eq!(&got[4..], &[ip4(10, 0, 0, 2), ip4(10, 0, 0, 3)]);
}

#[test]
fn visitor_error_is_returned_and_stops_visits() {
    let subnets = [v4(10, 0, 0, 0, 29), v6("fe80::", 126)];
    let mut calls = 0usize;
    let result = expander::expand(&subnets, |ip| {
        calls += 1;
        if calls == 5 {
            anyhow::bail!("rejected {ip}");
        }
        Ok(())
    });

    assert_eq!(result.unwrap_err().to_string(), "rejected 10.0.0.4");
    assert_eq!(calls, 5);
}

#[test]
fn family_mismatch_is_malformed() {
    let bad = Subnet::new(
        IpAddr::V6(Ipv6Addr::LOCALHOST),
        IpAddr::V4(Ipv4Addr::BROADCAST),
    );
    let err = collect(&[v4(127, 0, 0, 1, 32), bad]).unwrap_err();
    assert_eq!(
        err.downcast_ref::<SubnetError>(),
        Some(&SubnetError::FamilyMismatch {
            addr: IpAddr::V6(Ipv6Addr::LOCALHOST),
            mask: IpAddr::V4(Ipv4Addr::BROADCAST),
        })
    );
}
