//! Batches of random integers fetched over HTTP.

use std::fmt;

use outcome_rail::{IntoOutcome, Outcome};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;

use crate::config::Configuration;

/// A remote service producing batches of integers.
pub trait Network {
    fn fetch(&mut self) -> Outcome<NetworkError, Vec<i64>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkError {
    Generic,
    NotOk,
    NotAnInteger,
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => write!(f, "request failed"),
            Self::NotOk => write!(f, "service did not answer 200 OK"),
            Self::NotAnInteger => write!(f, "response contained something other than integers"),
        }
    }
}

/// Parses the newline separated plain-text body random.org answers with.
#[derive(Debug, Default, Clone, Copy)]
pub struct BodyParser;

impl BodyParser {
    pub fn parse(&self, body: &str) -> Outcome<NetworkError, Vec<i64>> {
        if body.trim().is_empty() {
            return Outcome::Success(Vec::new());
        }
        body.trim_end()
            .split('\n')
            .map(|line| {
                line.parse::<i64>()
                    .into_outcome()
                    .map_error(|_| NetworkError::NotAnInteger)
            })
            .collect()
    }
}

/// [`Network`] backed by the random.org integer generator.
pub struct RandomOrg {
    configuration: Configuration,
    parser: BodyParser,
    client: Client,
}

impl RandomOrg {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            configuration,
            parser: BodyParser,
            client: Client::new(),
        }
    }
}

impl Network for RandomOrg {
    fn fetch(&mut self) -> Outcome<NetworkError, Vec<i64>> {
        let url = self.configuration.url();
        tracing::debug!(%url, "requesting batch");

        received(self.client.get(&url).send()).and_then(|body| self.parser.parse(&body))
    }
}

/// Body of a sent request; a transport error is `Generic`.
fn received(sent: reqwest::Result<Response>) -> Outcome<NetworkError, String> {
    sent.into_outcome()
        .inspect_error(|error| tracing::warn!(%error, "request failed"))
        .map_error(|_| NetworkError::Generic)
        .and_then(|response| {
            let status = response.status();
            body_of(status, || response.text())
        })
}

/// Reads the body only for a `200 OK` answer.
fn body_of<F>(status: StatusCode, text: F) -> Outcome<NetworkError, String>
where
    F: FnOnce() -> reqwest::Result<String>,
{
    if status != StatusCode::OK {
        tracing::warn!(%status, "unexpected status");
        return Outcome::Failure(NetworkError::NotOk);
    }
    text()
        .into_outcome()
        .inspect_error(|error| tracing::warn!(%error, "could not read body"))
        .map_error(|_| NetworkError::Generic)
}
