pub mod count;
pub mod expand;

use clap::{ArgAction, Parser, Subcommand};
use netexpand_common::config::{Config, DEFAULT_LIMIT};
use netexpand_common::network::subnet::Subnet;

#[derive(Parser)]
#[command(name = "netexpand")]
#[command(about = "Expands subnets into the addresses they contain.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Abort after this many addresses (0 disables the limit)
    #[arg(short, long, global = true, default_value_t = DEFAULT_LIMIT)]
    pub limit: u64,

    /// Suppress headers and summaries
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every address of the given subnets, in order
    #[command(alias = "e")]
    Expand {
        #[arg(required = true)]
        subnets: Vec<Subnet>,
    },
    /// Show the range and size of the given subnets without expanding them
    #[command(alias = "c")]
    Count {
        #[arg(required = true)]
        subnets: Vec<Subnet>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            limit: Config::limit_from_arg(self.limit),
            quiet: self.quiet,
            verbose: self.verbose,
            no_banner: self.no_banner,
        }
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
