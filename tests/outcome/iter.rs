use outcome_rail::Outcome;
use smallvec::SmallVec;

#[test]
fn iter_yields_the_value_once() {
    let success: Outcome<&str, i32> = Outcome::Success(3);
    assert_eq!(success.iter().collect::<Vec<_>>(), vec![&3]);
    assert_eq!(success.iter().len(), 1);

    let failure: Outcome<&str, i32> = Outcome::Failure("nope");
    assert_eq!(failure.iter().next(), None);
    assert_eq!(failure.iter().len(), 0);
}

#[test]
fn into_iter_moves_the_value_out() {
    let success: Outcome<&str, String> = Outcome::Success("owned".to_string());
    let values: Vec<String> = success.into_iter().collect();
    assert_eq!(values, vec!["owned".to_string()]);

    let mut total = 0;
    for n in &Outcome::<&str, i32>::Success(5) {
        total += n;
    }
    assert_eq!(total, 5);
}

#[test]
fn flat_map_over_outcomes_drops_failures() {
    let outcomes: Vec<Outcome<&str, i32>> =
        vec![Outcome::Success(1), Outcome::Failure("skip"), Outcome::Success(3)];
    let values: Vec<i32> = outcomes.into_iter().flatten().collect();
    assert_eq!(values, vec![1, 3]);
}

#[test]
fn collecting_successes_gathers_every_value() {
    let outcomes = vec![Outcome::<&str, i32>::Success(1), Outcome::Success(2), Outcome::Success(3)];
    let collected: Outcome<&str, Vec<i32>> = outcomes.into_iter().collect();
    assert_eq!(collected, Outcome::Success(vec![1, 2, 3]));
}

#[test]
fn collecting_returns_the_first_failure_only() {
    let outcomes = vec![Outcome::Success(1), Outcome::Failure("err1"), Outcome::Failure("err2")];
    let collected: Outcome<&str, Vec<i32>> = outcomes.into_iter().collect();
    assert_eq!(collected, Outcome::Failure("err1"));
}

#[test]
fn collecting_stops_pulling_after_the_first_failure() {
    let mut pulled = 0;
    let collected: Outcome<&str, Vec<i32>> = (0..10)
        .map(|n| {
            pulled += 1;
            if n == 2 {
                Outcome::Failure("two")
            } else {
                Outcome::Success(n)
            }
        })
        .collect();

    assert_eq!(collected, Outcome::Failure("two"));
    assert_eq!(pulled, 3);
}

#[test]
fn collecting_an_empty_iterator_is_a_success() {
    let collected: Outcome<&str, Vec<i32>> = std::iter::empty().collect();
    assert_eq!(collected, Outcome::Success(vec![]));
}

#[test]
fn collecting_into_custom_collection_type() {
    let outcomes = vec![Outcome::<&str, i32>::Success(1), Outcome::Success(2)];
    let collected: Outcome<&str, SmallVec<[i32; 4]>> = outcomes.into_iter().collect();

    let values = collected.with_default(SmallVec::new());
    assert_eq!(values.as_slice(), &[1, 2]);
    assert!(!values.spilled());
}
