//! Dice specifications such as `3d6`, and rolling them against a [`Source`].

use std::fmt;
use std::sync::LazyLock;

use outcome_rail::{combine2, from_nullable, IntoOutcome, Outcome};
use regex::{Captures, Regex};
use smallvec::SmallVec;

use crate::source::{Source, SourceError};

static DICE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([1-9]\d*)d([1-9]\d*)$").expect("dice pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiceError {
    Parse(String),
    Source(SourceError),
}

impl fmt::Display for DiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(input) => write!(f, "'{input}' is not a dice specification like 3d6"),
            Self::Source(error) => write!(f, "{error}"),
        }
    }
}

/// `number` dice with `faces` faces each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dice {
    pub number: u32,
    pub faces: u32,
}

impl Dice {
    pub fn parse(input: &str) -> Outcome<DiceError, Self> {
        from_nullable(DICE_PATTERN.captures(input))
            .and_then(|caps| {
                combine2(group(&caps, 1), group(&caps, 2), |number, faces| Self {
                    number,
                    faces,
                })
            })
            .map_error(|()| DiceError::Parse(input.to_string()))
    }

    /// Sums one draw per die; the first failing draw aborts the roll.
    pub fn roll<S: Source + ?Sized>(&self, source: &mut S) -> Outcome<DiceError, i64> {
        (0..self.number)
            .map(|_| self.single(source))
            .collect::<Outcome<DiceError, SmallVec<[i64; 8]>>>()
            .map(|pips| pips.iter().sum())
    }

    fn single<S: Source + ?Sized>(&self, source: &mut S) -> Outcome<DiceError, i64> {
        source
            .integer()
            .map_error(DiceError::Source)
            .map(|n| modulo(n, i64::from(self.faces)) + 1)
    }
}

fn group(caps: &Captures<'_>, index: usize) -> Outcome<(), u32> {
    from_nullable(caps.get(index))
        .and_then(|m| m.as_str().parse::<u32>().into_outcome().map_error(|_| ()))
}

/// Remainder of `n` divided by `m`, always in `0..m` for positive `m`.
pub fn modulo(n: i64, m: i64) -> i64 {
    n.rem_euclid(m)
}
