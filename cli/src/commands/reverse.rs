use colored::*;
use numflip_core::{config::Config, natural::NaturalNumber};

use crate::terminal::print;

pub fn reverse(number: &NaturalNumber, cfg: &Config) {
    print::set_key_width(&["Value", "Reversed"]);

    if cfg.quiet < 2 {
        print::aligned_line("Value", number.to_string());
    }
    print::aligned_line("Reversed", number.reversed().to_string().bold());
}
