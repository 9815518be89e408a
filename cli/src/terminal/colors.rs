use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

/// Digit strips: ordinary digits vs the zeros the tool keeps counting.
pub const DIGIT: Color = Color::BrightYellow;
pub const ZERO_DIGIT: Color = Color::BrightBlack;

/// Live input feedback.
pub const VALID: Color = Color::BrightGreen;
pub const INVALID: Color = Color::BrightRed;
