//! Configuration options for the engine

use anyhow::{bail, Context, Result};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyKind {
    /// Uniformly random legal move
    Random,
    /// First legal move in request order
    First,
}

impl FromStr for StrategyKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(StrategyKind::Random),
            "first" => Ok(StrategyKind::First),
            _ => bail!("Unknown strategy: {}", s),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// The strategy that answers move requests
    pub strategy: StrategyKind,
    /// Seed for strategies that use randomness
    pub seed: Option<u64>,
}

impl EngineOptions {
    pub fn new(strategy: StrategyKind, seed: Option<u64>) -> Self {
        Self { strategy, seed }
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "strategy" => self.strategy = value.parse()?,
            "seed" => self.seed = Some(value.parse().context("invalid seed")?),
            _ => bail!("Unknown option: {}", name),
        }

        Ok(())
    }

    /// Apply a `name=value` setting, as given on the command line.
    pub fn apply(&mut self, setting: &str) -> Result<()> {
        let (name, value) = setting
            .split_once('=')
            .with_context(|| format!("expected NAME=VALUE, got `{}`", setting))?;
        self.set_option(name.trim(), value.trim())
            .with_context(|| format!("bad option `{}`", setting))
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Random,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_option() {
        let mut options = EngineOptions::default();
        options.set_option("strategy", "first").unwrap();
        options.set_option("seed", "99").unwrap();

        assert_eq!(options.strategy, StrategyKind::First);
        assert_eq!(options.seed, Some(99));
    }

    #[test]
    fn test_set_option_rejects() {
        let mut options = EngineOptions::default();
        assert!(options.set_option("strategy", "minimax").is_err());
        assert!(options.set_option("seed", "-1").is_err());
        assert!(options.set_option("depth", "3").is_err());
        assert_eq!(options.strategy, StrategyKind::Random);
        assert_eq!(options.seed, None);
    }

    #[test]
    fn test_apply_setting() {
        let mut options = EngineOptions::default();
        options.apply("strategy=first").unwrap();
        options.apply("seed = 7").unwrap();
        assert_eq!(options.strategy, StrategyKind::First);
        assert_eq!(options.seed, Some(7));

        assert!(options.apply("seed").is_err());
        assert!(options.apply("depth=3").is_err());
    }
}
