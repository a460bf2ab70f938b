use std::io::{self, Write};

use anyhow::Context;
use colored::*;
use netexpand_common::{config::Config, network::subnet::Subnet};
use netexpand_core::expander;

use crate::terminal::{colors, print};

pub fn count(subnets: &[Subnet], cfg: &Config) -> anyhow::Result<()> {
    print::header("subnet sizes", cfg.quiet);

    let width: usize = subnets.iter().map(|s| s.to_string().len()).max().unwrap_or(0);
    print::set_key_width(width);

    let mut out = io::stdout().lock();
    for subnet in subnets {
        let line: String = describe(subnet).with_context(|| format!("cannot size {subnet}"))?;
        writeln!(out, "{line}")?;
    }

    let total: Option<u128> = expander::total_addresses(subnets)?;
    let total: String = total.map_or_else(|| "at least 2^128".to_string(), |n| n.to_string());
    print::print_status(
        format!("{} address(es) in total", total.color(colors::COUNT)),
        cfg.quiet,
    );
    Ok(())
}

/// `subnet....: base - last (n addresses)`
fn describe(subnet: &Subnet) -> anyhow::Result<String> {
    let addr_color = match subnet.addr {
        std::net::IpAddr::V4(_) => colors::IPV4_ADDR,
        std::net::IpAddr::V6(_) => colors::IPV6_ADDR,
    };
    let base = subnet.base()?.to_string().color(addr_color);
    let last = subnet.last()?.to_string().color(addr_color);
    let count: String = format_count(subnet.address_count()?);

    let value: String = format!(
        "{} {} {} ({} addresses)",
        base,
        "-".color(colors::SEPARATOR),
        last,
        count.color(colors::COUNT)
    );
    Ok(print::aligned(&subnet.to_string(), value))
}

fn format_count(count: Option<u128>) -> String {
    count.map_or_else(|| "2^128".to_string(), |n| n.to_string())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_subnet() {
        colored::control::set_override(false);
        print::set_key_width(0);
        let subnet: Subnet = "172.16.5.10/20".parse().unwrap();
        assert_eq!(
            describe(&subnet).unwrap(),
            "172.16.5.10/20: 172.16.0.0 - 172.16.15.255 (4096 addresses)"
        );
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(Some(1)), "1");
        assert_eq!(format_count(None), "2^128");
    }
}
