//! Shared fixtures for the integration tests.

/// Inputs that must construct, paired with their canonical digit string.
pub fn valid_inputs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("1", "1"),
        ("9", "9"),
        ("10", "10"),
        ("120", "120"),
        ("1002003", "1002003"),
        ("  64  ", "64"),
        ("\t908\n", "908"),
        // Far beyond machine-integer range; only the digit string matters.
        ("123456789123456789123456789", "123456789123456789123456789"),
    ]
}

/// Inputs the text constructor must reject.
pub fn invalid_inputs() -> Vec<&'static str> {
    vec![
        "", "   ", "0", "00", "042", "-1", "+1", "1.5", "1e5", "abc", "12a", "1 2", "١٢٣",
    ]
}
