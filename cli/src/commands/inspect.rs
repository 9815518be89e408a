use numflip_core::{config::Config, natural::NaturalNumber};

use crate::terminal::{format, print};

pub fn inspect(number: &NaturalNumber, cfg: &Config) {
    print::set_key_width(&["Value", "Digits", "Length", "Zeros", "Reversed"]);

    print::aligned_line("Value", number.to_string());
    if cfg.quiet == 0 {
        print::aligned_line("Digits", format::digits_spaced(number));
    }
    print::aligned_line("Length", format::digit_count(number.len()));
    print::aligned_line("Zeros", number.count_zeros().to_string());
    print::aligned_line("Reversed", number.reversed().to_string());
}
