use colored::*;
use numflip_core::{config::Config, natural::NaturalNumber};
use tracing::warn;

use crate::terminal::print;

pub fn digit(number: &NaturalNumber, index: isize, cfg: &Config) {
    print::set_key_width(&["Value", "Index", "Digit"]);

    if cfg.quiet < 2 {
        print::aligned_line("Value", number.to_string());
        print::aligned_line("Index", index.to_string());
    }
    print::aligned_line("Digit", number.digit(index).to_string().bold());

    let in_range = (0..number.len() as isize).contains(&index);
    if !in_range {
        warn!(
            "position {} lies outside 0..{}; digits beyond the stored range read as 0",
            index,
            number.len()
        );
    }
}
