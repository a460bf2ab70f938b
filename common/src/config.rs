/// Default ceiling on how many addresses a single run may emit.
pub const DEFAULT_LIMIT: u64 = 65_536;

#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of addresses to emit before aborting.
    ///
    /// `None` removes the ceiling entirely; the expander itself never caps.
    pub limit: Option<u64>,
    /// Suppresses headers and summaries when greater than zero.
    pub quiet: u8,
    /// Raises the log level (`debug`, then `trace`).
    pub verbose: u8,
    pub no_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limit: Some(DEFAULT_LIMIT),
            quiet: 0,
            verbose: 0,
            no_banner: false,
        }
    }
}

impl Config {
    /// Maps the CLI's `--limit` value onto [`Config::limit`], where `0` means unlimited.
    pub fn limit_from_arg(limit: u64) -> Option<u64> {
        (limit != 0).then_some(limit)
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
