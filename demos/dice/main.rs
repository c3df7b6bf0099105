//! Rolls dice such as `3d6` with integers drawn from random.org.
//!
//! ```text
//! cargo run --example dice -- 3d6
//! cargo run --example dice -- 2d10 --even
//! ```
//!
//! Set `DICE_CONFIG` to a JSON file to change how integers are requested, and `RUST_LOG` to
//! change what gets logged.

mod config;
mod dice;
mod network;
mod source;

use std::fmt;
use std::process::ExitCode;

use outcome_rail::{combine, from_nullable, Outcome};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, Configuration};
use crate::dice::{Dice, DiceError};
use crate::network::RandomOrg;
use crate::source::{EvenSource, NetworkSource, Source};

const EVEN_FLAG: &str = "--even";

#[derive(Debug)]
enum AppError {
    MissingArgument,
    Config(ConfigError),
    Dice(DiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArgument => write!(f, "usage: dice <NdM> [{EVEN_FLAG}]"),
            Self::Config(error) => write!(f, "{error}"),
            Self::Dice(error) => write!(f, "{error}"),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn source_for(configuration: Configuration, even: bool) -> Box<dyn Source> {
    let network = NetworkSource::new(RandomOrg::new(configuration));
    if even {
        Box::new(EvenSource::new(network))
    } else {
        Box::new(network)
    }
}

fn run(args: &[String]) -> Outcome<AppError, (String, i64)> {
    let even = args.iter().any(|arg| arg == EVEN_FLAG);
    let input = args.iter().find(|arg| arg.as_str() != EVEN_FLAG).cloned();

    combine!(
        input = from_nullable(input).map_error(|()| AppError::MissingArgument),
        configuration = Configuration::load().map_error(AppError::Config),
        => (input, configuration)
    )
    .and_then(|(input, configuration)| {
        tracing::debug!(?configuration, "configuration loaded");
        let mut source = source_for(configuration, even);
        Dice::parse(&input)
            .inspect_error(|error| tracing::warn!(%error, "could not parse dice"))
            .and_then(|dice| dice.roll(&mut source))
            .inspect(|pips| tracing::info!(input = %input, pips, "rolled dice"))
            .map_error(AppError::Dice)
            .map(|pips| (input, pips))
    })
}

fn main() -> ExitCode {
    init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();

    run(&args)
        .inspect(|(input, pips)| println!("{input} threw {pips}"))
        .inspect_error(|error| eprintln!("could not roll dice: {error}"))
        .map(|_| ExitCode::SUCCESS)
        .with_default(ExitCode::FAILURE)
}
