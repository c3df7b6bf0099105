//! Query configuration for the random.org integer service.

use std::fmt;
use std::path::Path;

use outcome_rail::{from_nullable, IntoOutcome, Outcome};
use serde::Deserialize;

/// Environment variable naming an optional JSON configuration file.
pub const CONFIG_ENV: &str = "DICE_CONFIG";

const INTEGERS_URL: &str = "https://www.random.org/integers/";

/// How many integers to request per batch, and their range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub number: u32,
    pub minimum: i64,
    pub maximum: i64,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            number: 100,
            minimum: 1,
            maximum: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Unreadable { path: String, reason: String },
    Invalid(String),
    EmptyRange { minimum: i64, maximum: i64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { path, reason } => {
                write!(f, "cannot read configuration '{path}': {reason}")
            }
            Self::Invalid(reason) => write!(f, "invalid configuration: {reason}"),
            Self::EmptyRange { minimum, maximum } => {
                write!(f, "empty range: minimum {minimum} exceeds maximum {maximum}")
            }
        }
    }
}

impl Configuration {
    /// Loads the file named by [`CONFIG_ENV`], or the defaults when the variable is unset.
    pub fn load() -> Outcome<ConfigError, Self> {
        from_nullable(std::env::var_os(CONFIG_ENV))
            .map(|path| Self::from_path(Path::new(&path)))
            .with_default_else(|()| Outcome::Success(Self::default()))
    }

    pub fn from_path(path: &Path) -> Outcome<ConfigError, Self> {
        std::fs::read_to_string(path)
            .into_outcome()
            .map_error(|e| ConfigError::Unreadable {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
            .and_then(|text| Self::from_json(&text))
    }

    pub fn from_json(text: &str) -> Outcome<ConfigError, Self> {
        serde_json::from_str::<Self>(text)
            .into_outcome()
            .map_error(|e| ConfigError::Invalid(e.to_string()))
            .and_then(Self::validated)
    }

    fn validated(self) -> Outcome<ConfigError, Self> {
        if self.minimum <= self.maximum {
            Outcome::Success(self)
        } else {
            Outcome::Failure(ConfigError::EmptyRange {
                minimum: self.minimum,
                maximum: self.maximum,
            })
        }
    }

    /// The plain-text random.org query for this configuration.
    pub fn url(&self) -> String {
        format!(
            "{INTEGERS_URL}?num={}&min={}&max={}&col=1&base=10&format=plain&rnd=new",
            self.number, self.minimum, self.maximum
        )
    }
}
