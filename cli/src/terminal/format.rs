use crate::terminal::colors;
use colored::*;
use numflip_core::natural::NaturalNumber;

/// Renders the digits as a spaced strip, zeros dimmed so they stand out
/// against the digits that carry value.
pub fn digits_spaced(number: &NaturalNumber) -> String {
    number
        .as_str()
        .chars()
        .map(|digit| {
            let color = if digit == '0' {
                colors::ZERO_DIGIT
            } else {
                colors::DIGIT
            };
            digit.to_string().color(color).to_string()
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn digit_count(len: usize) -> String {
    let unit: &str = if len == 1 { "digit" } else { "digits" };
    format!("{len} {unit}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_count_picks_the_unit() {
        assert_eq!(digit_count(1), "1 digit");
        assert_eq!(digit_count(4), "4 digits");
    }

    #[test]
    fn digits_spaced_has_a_gap_between_digits() {
        colored::control::set_override(false);
        let n = NaturalNumber::from_text("105").unwrap();
        assert_eq!(digits_spaced(&n), "1 0 5");
        colored::control::unset_override();
    }
}
