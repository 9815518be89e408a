use thiserror::Error;

/// Failures raised while constructing a [`NaturalNumber`].
///
/// Construction either fully succeeds or fails with one of these; no other
/// operation on a constructed value can fail.
///
/// [`NaturalNumber`]: crate::natural::NaturalNumber
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NaturalError {
    /// The text does not spell a natural number.
    #[error("invalid natural number \"{input}\": expected a positive number without leading zeros")]
    InvalidText { input: String },

    /// The numeric value is not a whole number greater than zero.
    #[error("invalid natural number {value}: expected a positive whole number")]
    InvalidNumber { value: f64 },

    /// Input of a kind the constructors cannot interpret.
    #[error("unsupported input: {found} is not a finite number")]
    Unsupported { found: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_text_keeps_the_offending_input() {
        let err = NaturalError::InvalidText {
            input: " 0123 ".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains(" 0123 "));
        assert!(msg.contains("leading zeros"));
    }

    #[test]
    fn invalid_number_prints_whole_values_without_fraction() {
        let err = NaturalError::InvalidNumber { value: -7.0 };
        assert!(err.to_string().contains("-7:"));

        let err = NaturalError::InvalidNumber { value: 2.5 };
        assert!(err.to_string().contains("2.5"));
    }

    #[test]
    fn unsupported_names_the_input() {
        let err = NaturalError::Unsupported {
            found: "NaN".to_string(),
        };
        assert!(err.to_string().contains("NaN"));
    }
}
