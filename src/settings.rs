use anyhow::{anyhow, Context};
use std::env;
use std::str::FromStr;

pub const STRATEGY_VAR: &str = "ALGO_STRATEGY";
pub const SEED_VAR: &str = "ALGO_SEED";
pub const PING_COUNT_VAR: &str = "ALGO_PING_COUNT";

pub const DEFAULT_PING_COUNT: u32 = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum StrategyKind {
    #[default]
    GreatWall,
    Starter,
}

impl FromStr for StrategyKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "great-wall" | "great_wall" => Ok(StrategyKind::GreatWall),
            "starter" => Ok(StrategyKind::Starter),
            other => Err(anyhow!("Unknown strategy: {}", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlgoSettings {
    pub strategy: StrategyKind,
    pub seed: Option<u64>,
    pub ping_count: u32,
}

impl Default for AlgoSettings {
    fn default() -> Self {
        AlgoSettings {
            strategy: StrategyKind::default(),
            seed: None,
            ping_count: DEFAULT_PING_COUNT,
        }
    }
}

impl AlgoSettings {
    pub fn from_env() -> anyhow::Result<AlgoSettings> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read settings through `lookup`, which returns the raw value of a variable if set.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<AlgoSettings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = AlgoSettings::default();

        if let Some(strategy) = lookup(STRATEGY_VAR) {
            settings.strategy = strategy
                .parse()
                .with_context(|| format!("parsing ${{{}}}", STRATEGY_VAR))?;
        }

        if let Some(seed) = lookup(SEED_VAR) {
            let seed = seed
                .trim()
                .parse()
                .with_context(|| format!("parsing ${{{}}} as u64", SEED_VAR))?;
            settings.seed = Some(seed);
        }

        if let Some(count) = lookup(PING_COUNT_VAR) {
            settings.ping_count = count
                .trim()
                .parse()
                .with_context(|| format!("parsing ${{{}}} as u32", PING_COUNT_VAR))?;
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnv::FnvHashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: FnvHashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let settings = AlgoSettings::from_lookup(lookup_in(&[])).unwrap();
        assert_eq!(settings, AlgoSettings::default());
        assert_eq!(settings.strategy, StrategyKind::GreatWall);
        assert_eq!(settings.ping_count, 10);
    }

    #[test]
    fn reads_all_variables() {
        let settings = AlgoSettings::from_lookup(lookup_in(&[
            ("ALGO_STRATEGY", "Starter"),
            ("ALGO_SEED", "42"),
            ("ALGO_PING_COUNT", " 6 "),
        ]))
        .unwrap();

        assert_eq!(settings.strategy, StrategyKind::Starter);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.ping_count, 6);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(AlgoSettings::from_lookup(lookup_in(&[("ALGO_STRATEGY", "turtle")])).is_err());
        assert!(AlgoSettings::from_lookup(lookup_in(&[("ALGO_SEED", "-1")])).is_err());
        assert!(AlgoSettings::from_lookup(lookup_in(&[("ALGO_PING_COUNT", "many")])).is_err());
    }
}
