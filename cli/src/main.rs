mod commands;
mod terminal;

use commands::{CommandLine, Commands, count, expand};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(&cfg);
    print::banner(cfg.no_banner, cfg.quiet);

    let result = match commands.command {
        Commands::Expand { subnets } => expand::expand(&subnets, &cfg),
        Commands::Count { subnets } => count::count(&subnets, &cfg),
    };

    print::end_of_program(cfg.quiet);
    result
}
