use colored::*;
use numflip_core::{config::Config, natural::NaturalNumber};

use crate::terminal::print;

pub fn zeros(number: &NaturalNumber, cfg: &Config) {
    print::set_key_width(&["Value", "Zeros"]);

    if cfg.quiet < 2 {
        print::aligned_line("Value", number.to_string());
    }
    print::aligned_line("Zeros", number.count_zeros().to_string().bold());
}
