#![cfg(test)]
use crate::utils::{collect, ip4, ip6, v4, v6};
use netexpand_common::network::subnet::Subnet;
use netexpand_core::expander;

#[test]
fn mixed_families_keep_input_order() {
    let got = collect(&[
        v6("2001:db8::ff", 127),
        v4(192, 0, 2, 255, 32),
        v6("2001:db8::", 128),
        v4(192, 0, 2, 0, 31),
    ])
    .unwrap();

    assert_eq!(
        got,
        vec![
            ip6("2001:db8::fe"),
            ip6("2001:db8::ff"),
            ip4(192, 0, 2, 255),
            ip6("2001:db8::"),
            ip4(192, 0, 2, 0),
            ip4(192, 0, 2, 1),
        ]
    );
}

#[test]
fn ipv6_carry_crosses_groups() {
    let got = collect(&[v6("2001:db8::ffff", 120), v6("2001:db8::1:0", 128)]).unwrap();
    assert_eq!(got.len(), 257);
    assert_eq!(got[0], ip6("2001:db8::ff00"));
    assert_eq!(got[255], ip6("2001:db8::ffff"));
    assert_eq!(got[256], ip6("2001:db8::1:0"));
}

#[test]
fn parsed_and_converted_subnets_agree() {
    let parsed: Subnet = "fd00::1234/124".parse().unwrap();
    assert_eq!(parsed, v6("fd00::1234", 124));
    assert_eq!(collect(&[parsed]).unwrap().len(), 16);
}

#[test]
fn totals_span_both_families() {
    let subnets = [v4(10, 0, 0, 0, 24), v6("::", 120), v4(10, 0, 0, 7, 32)];
    assert_eq!(expander::total_addresses(&subnets).unwrap(), Some(513));
    assert_eq!(collect(&subnets).unwrap().len(), 513);
}
