use numflip_core::NaturalNumber;
use numflip_integration_tests::valid_inputs;

#[test]
fn digits_index_from_the_most_significant() {
    let number = NaturalNumber::from_text("42").unwrap();
    assert_eq!(number.digit(0), 4);
    assert_eq!(number.digit(1), 2);
    assert_eq!(number.digit(5), 0);
    assert_eq!(number.digit(-1), 0);
    assert_eq!(number.digit(isize::MIN), 0);
}

#[test]
fn zero_census_counts_every_zero_digit() {
    let number = NaturalNumber::from_text("1002003").unwrap();
    assert_eq!(number.count_zeros(), 3);

    assert_eq!(NaturalNumber::from_text("10").unwrap().count_zeros(), 1);
    assert_eq!(NaturalNumber::from_text("999").unwrap().count_zeros(), 0);
}

#[test]
fn reversed_leaves_the_receiver_alone() {
    let number = NaturalNumber::from_text("123").unwrap();
    let reversed = number.reversed();

    assert_eq!(reversed.as_str(), "321");
    assert_eq!(number.as_str(), "123");
}

#[test]
fn reversal_normalizes_former_trailing_zeros() {
    assert_eq!(
        NaturalNumber::from_text("120").unwrap().reversed().as_str(),
        "21"
    );
    assert_eq!(
        NaturalNumber::from_text("100").unwrap().reversed().as_str(),
        "1"
    );
}

#[test]
fn double_reversal_is_identity_without_trailing_zeros() {
    for (input, _) in valid_inputs() {
        let number = NaturalNumber::from_text(input).unwrap();
        if number.as_str().ends_with('0') {
            continue;
        }
        assert_eq!(
            number.reversed().reversed(),
            number,
            "double reversal drifted for {input:?}"
        );
    }
}

#[test]
fn reverse_in_place_mutates_and_returns_the_receiver() {
    let mut number = NaturalNumber::from_text("500").unwrap();

    // The returned reference is the receiver itself, so calls chain.
    let after = number.reverse_in_place().to_string();
    assert_eq!(after, "5");
    assert_eq!(number.as_str(), "5");

    let mut chained = NaturalNumber::from_text("123").unwrap();
    chained.reverse_in_place().reverse_in_place();
    assert_eq!(chained.as_str(), "123");
}

#[test]
fn equality_is_digit_string_equality() {
    let a = NaturalNumber::from_text("1010").unwrap();
    let b = NaturalNumber::from_text(" 1010 ").unwrap();
    let c = NaturalNumber::from_integer(1010).unwrap();

    assert_eq!(a, b);
    assert_eq!(a, c);
    assert_ne!(a, NaturalNumber::from_text("101").unwrap());
}
