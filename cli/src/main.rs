mod commands;
mod terminal;

use commands::{CommandLine, Commands, digit, inspect, reverse, session, zeros};
use numflip_core::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let command_line = CommandLine::parse_args();

    logging::init();

    let cfg = Config {
        quiet: command_line.quiet,
        plain: command_line.plain,
    };

    if cfg.plain {
        colored::control::set_override(false);
    }

    match command_line.command {
        Commands::Inspect { number } => {
            print::header("number inspection", cfg.quiet);
            inspect::inspect(&number, &cfg);
            Ok(())
        }
        Commands::Digit { number, index } => {
            print::header("digit lookup", cfg.quiet);
            digit::digit(&number, index, &cfg);
            Ok(())
        }
        Commands::Zeros { number } => {
            print::header("zero count", cfg.quiet);
            zeros::zeros(&number, &cfg);
            Ok(())
        }
        Commands::Reverse { number } => {
            print::header("digit reversal", cfg.quiet);
            reverse::reverse(&number, &cfg);
            Ok(())
        }
        Commands::Session => session::run(&cfg),
    }
}
