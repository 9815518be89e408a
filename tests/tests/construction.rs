use numflip_core::{NaturalError, NaturalNumber};
use numflip_integration_tests::{invalid_inputs, valid_inputs};

#[test]
fn valid_text_round_trips() -> anyhow::Result<()> {
    for (input, canonical) in valid_inputs() {
        let number = NaturalNumber::from_text(input)?;
        assert_eq!(number.as_str(), canonical, "canonical form of {input:?}");
        assert_eq!(number.to_string(), canonical);
    }
    Ok(())
}

#[test]
fn invalid_text_is_rejected_with_the_original_input() {
    for input in invalid_inputs() {
        match NaturalNumber::from_text(input) {
            Err(NaturalError::InvalidText { input: carried }) => {
                assert_eq!(carried, input, "error must carry the untrimmed input");
            }
            other => panic!("expected InvalidText for {input:?}, got {other:?}"),
        }
    }
}

#[test]
fn validation_helper_agrees_with_the_constructor() {
    let mut corpus: Vec<&str> = invalid_inputs();
    corpus.extend(valid_inputs().into_iter().map(|(input, _)| input));

    for input in corpus {
        assert_eq!(
            NaturalNumber::is_valid_natural_number(input),
            NaturalNumber::from_text(input).is_ok(),
            "disagreement on {input:?}"
        );
    }
}

#[test]
fn integers_construct_iff_positive() {
    for value in [1_i64, 7, 42, 1_000_000, i64::MAX] {
        let number = NaturalNumber::from_integer(value).unwrap();
        assert_eq!(number.as_str(), value.to_string());
    }

    for value in [0_i64, -1, -42, i64::MIN] {
        assert!(matches!(
            NaturalNumber::from_integer(value),
            Err(NaturalError::InvalidNumber { .. })
        ));
    }
}

#[test]
fn try_from_mirrors_from_integer() {
    let number = NaturalNumber::try_from(305_i64).unwrap();
    assert_eq!(number.as_str(), "305");
    assert!(NaturalNumber::try_from(-2_i64).is_err());
}

#[test]
fn arbitrary_numbers_are_triaged() {
    assert_eq!(NaturalNumber::from_number(120.0).unwrap().as_str(), "120");

    for value in [2.5, 0.0, -0.0, -3.0, 0.999] {
        assert!(
            matches!(
                NaturalNumber::from_number(value),
                Err(NaturalError::InvalidNumber { .. })
            ),
            "expected InvalidNumber for {value}"
        );
    }

    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(
            matches!(
                NaturalNumber::from_number(value),
                Err(NaturalError::Unsupported { .. })
            ),
            "expected Unsupported for {value}"
        );
    }
}

#[test]
fn parse_goes_through_text_validation() {
    let number: NaturalNumber = "98".parse().unwrap();
    assert_eq!(number.as_str(), "98");
    assert!("098".parse::<NaturalNumber>().is_err());
}
