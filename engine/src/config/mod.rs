//! Generator configuration
//!
//! Selects an algorithm and its seed at run time, typically from JSON:
//!
//! ```json
//! { "algorithm": "mersenne_twister", "seed": 123, "twist": "canonical" }
//! ```
//!
//! A missing seed means "seed from the wall clock".

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::seed::Seed;
use crate::rng::middle_square::{self, DEFAULT_DIGITS};
use crate::rng::{LinearCongruentialGenerator, MersenneTwister, MiddleSquare, RandomSource, TwistMode};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid generator config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Middle-square digits must be even and between 2 and 8, got {0}")]
    InvalidDigits(u32),

    #[error("Unknown algorithm '{0}'")]
    UnknownAlgorithm(String),
}

/// Algorithm names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Lcg,
    MersenneTwister,
    MiddleSquare,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Lcg => "lcg",
            Algorithm::MersenneTwister => "mersenne_twister",
            Algorithm::MiddleSquare => "middle_square",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = ConfigError;

    /// Accepts the config names plus the short forms `mt` and `mt19937`
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "lcg" => Ok(Algorithm::Lcg),
            "mersenne_twister" | "mt" | "mt19937" => Ok(Algorithm::MersenneTwister),
            "middle_square" => Ok(Algorithm::MiddleSquare),
            other => Err(ConfigError::UnknownAlgorithm(other.to_string())),
        }
    }
}

fn default_digits() -> u32 {
    DEFAULT_DIGITS
}

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum GeneratorConfig {
    Lcg {
        #[serde(default)]
        seed: Option<Seed>,
    },
    MersenneTwister {
        #[serde(default)]
        seed: Option<Seed>,
        #[serde(default)]
        twist: TwistMode,
    },
    MiddleSquare {
        #[serde(default)]
        seed: Option<Seed>,
        #[serde(default = "default_digits")]
        digits: u32,
    },
}

impl GeneratorConfig {
    /// Default configuration for `algorithm` with an optional seed
    pub fn for_algorithm(algorithm: Algorithm, seed: Option<Seed>) -> Self {
        match algorithm {
            Algorithm::Lcg => GeneratorConfig::Lcg { seed },
            Algorithm::MersenneTwister => GeneratorConfig::MersenneTwister {
                seed,
                twist: TwistMode::default(),
            },
            Algorithm::MiddleSquare => GeneratorConfig::MiddleSquare {
                seed,
                digits: DEFAULT_DIGITS,
            },
        }
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            GeneratorConfig::Lcg { .. } => Algorithm::Lcg,
            GeneratorConfig::MersenneTwister { .. } => Algorithm::MersenneTwister,
            GeneratorConfig::MiddleSquare { .. } => Algorithm::MiddleSquare,
        }
    }

    pub fn seed(&self) -> Option<Seed> {
        match self {
            GeneratorConfig::Lcg { seed }
            | GeneratorConfig::MersenneTwister { seed, .. }
            | GeneratorConfig::MiddleSquare { seed, .. } => *seed,
        }
    }

    /// Replace the seed, keeping all other settings
    pub fn with_seed(mut self, new_seed: Option<Seed>) -> Self {
        match &mut self {
            GeneratorConfig::Lcg { seed }
            | GeneratorConfig::MersenneTwister { seed, .. }
            | GeneratorConfig::MiddleSquare { seed, .. } => *seed = new_seed,
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let GeneratorConfig::MiddleSquare { digits, .. } = self {
            if !middle_square::valid_digits(*digits) {
                return Err(ConfigError::InvalidDigits(*digits));
            }
        }
        Ok(())
    }

    /// Build a seeded generator
    pub fn build(&self) -> Result<Generator, ConfigError> {
        self.validate()?;

        let seed = self.seed().unwrap_or_else(Seed::from_system_time);
        debug!("building {} generator with seed {}", self.algorithm(), seed.value());

        let generator = match self {
            GeneratorConfig::Lcg { .. } => Generator::Lcg(LinearCongruentialGenerator::new(seed)),
            GeneratorConfig::MersenneTwister { twist, .. } => {
                let mut rng = MersenneTwister::with_mode(*twist);
                rng.reseed(seed);
                Generator::MersenneTwister(Box::new(rng))
            }
            GeneratorConfig::MiddleSquare { digits, .. } => {
                Generator::MiddleSquare(MiddleSquare::with_digits(*digits, seed))
            }
        };
        Ok(generator)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig::for_algorithm(Algorithm::MersenneTwister, None)
    }
}

/// Any of the supported generators, chosen at run time
///
/// The Mersenne Twister is boxed to keep the variant small.
#[derive(Debug, Clone, PartialEq)]
pub enum Generator {
    Lcg(LinearCongruentialGenerator),
    MersenneTwister(Box<MersenneTwister>),
    MiddleSquare(MiddleSquare),
}

impl Generator {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Generator::Lcg(_) => Algorithm::Lcg,
            Generator::MersenneTwister(_) => Algorithm::MersenneTwister,
            Generator::MiddleSquare(_) => Algorithm::MiddleSquare,
        }
    }
}

impl RandomSource for Generator {
    fn reseed(&mut self, seed: Seed) {
        match self {
            Generator::Lcg(rng) => rng.reseed(seed),
            Generator::MersenneTwister(rng) => rng.reseed(seed),
            Generator::MiddleSquare(rng) => rng.reseed(seed),
        }
    }

    fn next_u32(&mut self) -> u32 {
        match self {
            Generator::Lcg(rng) => rng.next_u32(),
            Generator::MersenneTwister(rng) => rng.next_u32(),
            Generator::MiddleSquare(rng) => rng.next_u32(),
        }
    }

    fn random(&mut self) -> f64 {
        match self {
            Generator::Lcg(rng) => rng.random(),
            Generator::MersenneTwister(rng) => rng.random(),
            Generator::MiddleSquare(rng) => rng.random(),
        }
    }
}

impl From<LinearCongruentialGenerator> for Generator {
    fn from(rng: LinearCongruentialGenerator) -> Self {
        Generator::Lcg(rng)
    }
}

impl From<MersenneTwister> for Generator {
    fn from(rng: MersenneTwister) -> Self {
        Generator::MersenneTwister(Box::new(rng))
    }
}

impl From<MiddleSquare> for Generator {
    fn from(rng: MiddleSquare) -> Self {
        Generator::MiddleSquare(rng)
    }
}
