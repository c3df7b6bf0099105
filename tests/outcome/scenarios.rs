//! End-to-end chains mixing every combinator, modelled on a flaky random-number source.

use outcome_rail::{combine3, Outcome};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Problem {
    Connection,
    Timeout,
    Overflow,
}

trait Source {
    fn random(&mut self) -> Outcome<Problem, i64>;
}

/// Always produces the same number.
struct Always(i64);

impl Source for Always {
    fn random(&mut self) -> Outcome<Problem, i64> {
        Outcome::Success(self.0)
    }
}

/// Produces its number on a fixed schedule and fails otherwise.
struct Sometimes {
    schedule: Vec<bool>,
    number: i64,
    calls: usize,
}

impl Sometimes {
    fn scheduled(schedule: Vec<bool>, number: i64) -> Self {
        Self {
            schedule,
            number,
            calls: 0,
        }
    }
}

impl Source for Sometimes {
    fn random(&mut self) -> Outcome<Problem, i64> {
        let call = self.calls;
        self.calls += 1;
        match self.schedule.get(call) {
            Some(true) => Outcome::Success(self.number),
            Some(false) if call % 2 == 0 => Outcome::Failure(Problem::Timeout),
            Some(false) => Outcome::Failure(Problem::Overflow),
            None => Outcome::Failure(Problem::Connection),
        }
    }
}

fn threshold_chain(start: i64) -> i64 {
    Outcome::<&str, i64>::Success(start)
        .map(|n| n * 2)
        .and_then(|n| {
            if n > 5 {
                Outcome::Success(n)
            } else {
                Outcome::Failure("too small")
            }
        })
        .with_default(-1)
}

#[test]
fn doubling_past_the_threshold_keeps_the_value() {
    assert_eq!(threshold_chain(3), 6);
}

#[test]
fn doubling_below_the_threshold_falls_back_to_default() {
    assert_eq!(threshold_chain(1), -1);
}

#[test]
fn chain_over_sources_either_combines_or_defaults() {
    let mut always = Always(20);
    let mut sometimes = Sometimes::scheduled(vec![true], 2);

    let number = always
        .random()
        .map(|m| 2 * m)
        .and_then(|m| sometimes.random().map(|n| (m, n)))
        .map(|(m, n)| m + n)
        .with_default(0);
    assert_eq!(number, 42);

    let number = always
        .random()
        .map(|m| 2 * m)
        .and_then(|m| sometimes.random().map(|n| (m, n)))
        .map(|(m, n)| m + n)
        .with_default(0);
    assert_eq!(number, 0);
}

#[test]
fn recovery_mid_chain_resumes_processing() {
    let mut flaky = Sometimes::scheduled(vec![false, true], 7);

    let mut log = Vec::new();
    let value = flaky
        .random()
        .inspect_error(|problem| log.push(format!("first attempt: {problem:?}")))
        .and_then_error(|_| flaky.random())
        .inspect(|n| log.push(format!("recovered with {n}")))
        .map(|n| n * 6)
        .with_default(0);

    assert_eq!(value, 42);
    assert_eq!(
        log,
        vec!["first attempt: Timeout".to_string(), "recovered with 7".to_string()]
    );
}

#[test]
fn three_sources_combine_with_left_priority() {
    let mut exhausted = Sometimes::scheduled(vec![], 0);
    let mut overflowing = Sometimes {
        calls: 1,
        ..Sometimes::scheduled(vec![false, false], 0)
    };

    let combined = combine3(
        Always(1).random(),
        overflowing.random(),
        exhausted.random(),
        |a, b, c| a + b + c,
    );
    assert_eq!(combined, Outcome::Failure(Problem::Overflow));

    let combined = combine3(
        Always(1).random(),
        Always(2).random(),
        Always(3).random(),
        |a, b, c| a + b + c,
    );
    assert_eq!(combined, Outcome::Success(6));
}

proptest! {
    #[test]
    fn complete_chain_is_zero_or_the_full_sum(
        first in -1_000_000i64..1_000_000,
        second in -1_000_000i64..1_000_000,
        ok in any::<bool>()
    ) {
        let mut sometimes = Sometimes::scheduled(vec![ok], second);

        let number = Always(first)
            .random()
            .map(|m| 2 * m)
            .and_then(|m| sometimes.random().map(|n| (m, n)))
            .map(|(m, n)| m + n)
            .with_default(0);

        prop_assert!(number == 0 || number == 2 * first + second);
    }
}
