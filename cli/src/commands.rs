pub mod digit;
pub mod inspect;
pub mod reverse;
pub mod session;
pub mod zeros;

use clap::{ArgAction, Parser, Subcommand};
use numflip_core::natural::NaturalNumber;

#[derive(Parser)]
#[command(name = "numflip")]
#[command(about = "A digit-level toolbox for natural numbers.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Trim the output; repeat for results only
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub plain: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show everything known about a number
    #[command(alias = "i")]
    Inspect { number: NaturalNumber },
    /// Look up the digit at a position, counted from the left
    #[command(alias = "d")]
    Digit {
        number: NaturalNumber,
        #[arg(allow_negative_numbers = true)]
        index: isize,
    },
    /// Count the zero digits in a number
    #[command(alias = "z")]
    Zeros { number: NaturalNumber },
    /// Print the digit-reversed number
    #[command(alias = "r")]
    Reverse { number: NaturalNumber },
    /// Work on numbers interactively
    #[command(alias = "s")]
    Session,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
