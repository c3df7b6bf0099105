use outcome_rail::traits::IntoOutcome;
use outcome_rail::Outcome;

#[test]
fn option_into_outcome_mirrors_from_nullable() {
    for value in [true, false] {
        assert_eq!(Some(value).into_outcome(), Outcome::Success(value));
    }

    let absent: Option<bool> = None;
    assert_eq!(absent.into_outcome(), Outcome::Failure(()));
}

#[test]
fn result_into_outcome_keeps_the_variant() {
    assert_eq!("12".parse::<u8>().into_outcome(), Outcome::Success(12));
    assert!("1200".parse::<u8>().into_outcome().is_failure());
}

#[test]
fn into_outcome_starts_a_chain() {
    let first_even = [1, 3, 4, 6]
        .iter()
        .find(|n| *n % 2 == 0)
        .copied()
        .into_outcome()
        .map_error(|()| "no even number")
        .map(|n| n * 10);
    assert_eq!(first_even, Outcome::Success(40));
}
