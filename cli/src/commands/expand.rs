use std::io::{self, BufWriter, Write};
use std::net::IpAddr;
use std::time::Instant;

use anyhow::{Context, bail};
use colored::*;
use netexpand_common::{config::Config, network::subnet::Subnet};
use netexpand_core::expander;
use tracing::info_span;

use crate::terminal::{colors, print};

pub fn expand(subnets: &[Subnet], cfg: &Config) -> anyhow::Result<()> {
    print::header("expanding subnets", cfg.quiet);

    let span = info_span!("expand", subnets = subnets.len());
    let _guard = span.enter();

    let start_time: Instant = Instant::now();
    let mut out = BufWriter::new(io::stdout().lock());
    let emitted: u128 = write_addresses(subnets, cfg.limit, &mut out)?;
    out.flush().context("failed to flush stdout")?;

    let summary: String = format!(
        "Expanded {} subnet(s) into {} address(es) in {:.2?}",
        subnets.len().to_string().color(colors::ACCENT),
        emitted.to_string().color(colors::COUNT),
        start_time.elapsed()
    );
    print::print_status(summary, cfg.quiet);
    Ok(())
}

/// Writes one address per line and returns how many were written.
///
/// Fails as soon as writing one more address would exceed `limit`; whatever
/// was written before that stays written.
pub fn write_addresses<W: Write>(
    subnets: &[Subnet],
    limit: Option<u64>,
    out: &mut W,
) -> anyhow::Result<u128> {
    let mut emitted: u128 = 0;

    expander::expand(subnets, |addr: IpAddr| -> anyhow::Result<()> {
        if let Some(limit) = limit {
            if emitted >= u128::from(limit) {
                bail!("more than {limit} addresses requested, raise --limit or pass --limit 0");
            }
        }
        writeln!(out, "{addr}").context("failed to write address")?;
        emitted += 1;
        Ok(())
    })
    .context("failed to expand subnets")?;

    Ok(emitted)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
