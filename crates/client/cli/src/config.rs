//! CLI configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

use arena_core::ArenaConfig;

/// Configuration for a single `arena` run.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub arena: ArenaConfig,
    /// JSON roster to load instead of the built-in one.
    pub roster_path: Option<PathBuf>,
    /// Directory for an additional log file.
    pub log_dir: Option<PathBuf>,
    pub first: String,
    pub second: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            roster_path: None,
            log_dir: None,
            first: Self::DEFAULT_FIRST.to_owned(),
            second: Self::DEFAULT_SECOND.to_owned(),
        }
    }
}

impl CliConfig {
    pub const DEFAULT_FIRST: &'static str = "Charmander";
    pub const DEFAULT_SECOND: &'static str = "Bulbasaur";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_BASE_POWER` - Base power of every attack (default: 50)
    /// - `ARENA_MAX_TURNS` - Turn limit per combat (default: 10000)
    /// - `ARENA_ROSTER` - Path to a JSON roster (default: built-in starters)
    /// - `ARENA_LOG_DIR` - Also write logs to `<dir>/arena.log` (default: off)
    /// - `ARENA_FIRST` / `ARENA_SECOND` - Combatant names (default: Charmander / Bulbasaur)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`CliConfig::from_env`], reading values through `lookup`.
    ///
    /// Values that fail to parse, and non-positive or non-finite base powers,
    /// leave the default in place.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(power) =
            parse_var::<f64>(&lookup, "ARENA_BASE_POWER").filter(|p| p.is_finite() && *p > 0.0)
        {
            config.arena.base_power = power;
        }
        if let Some(turns) = parse_var::<u32>(&lookup, "ARENA_MAX_TURNS") {
            config.arena.max_turns = turns.max(1);
        }

        config.roster_path = lookup("ARENA_ROSTER").map(PathBuf::from);
        config.log_dir = lookup("ARENA_LOG_DIR").map(PathBuf::from);

        if let Some(name) = lookup("ARENA_FIRST") {
            config.first = name;
        }
        if let Some(name) = lookup("ARENA_SECOND") {
            config.second = name;
        }

        config
    }

    /// Positional arguments `[FIRST] [SECOND]` override the environment.
    #[must_use]
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        if let Some(first) = args.next() {
            self.first = first;
        }
        if let Some(second) = args.next() {
            self.second = second;
        }
        self
    }
}

fn parse_var<T>(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> CliConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        CliConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn reads_every_variable() {
        let config = from_pairs(&[
            ("ARENA_BASE_POWER", "25.5"),
            ("ARENA_MAX_TURNS", "40"),
            ("ARENA_ROSTER", "roster.json"),
            ("ARENA_LOG_DIR", "logs"),
            ("ARENA_FIRST", "Squirtle"),
            ("ARENA_SECOND", "Pikachu"),
        ]);
        assert_eq!(config.arena.base_power, 25.5);
        assert_eq!(config.arena.max_turns, 40);
        assert_eq!(config.roster_path, Some(PathBuf::from("roster.json")));
        assert_eq!(config.log_dir, Some(PathBuf::from("logs")));
        assert_eq!((config.first.as_str(), config.second.as_str()), ("Squirtle", "Pikachu"));
    }

    #[test]
    fn unparseable_values_fall_back_to_defaults() {
        let config = from_pairs(&[("ARENA_BASE_POWER", "strong"), ("ARENA_MAX_TURNS", "-3")]);
        assert_eq!(config.arena, ArenaConfig::default());
    }

    #[test]
    fn base_power_must_be_positive_and_finite() {
        for raw in ["0", "-10", "NaN", "inf"] {
            let config = from_pairs(&[("ARENA_BASE_POWER", raw)]);
            assert_eq!(
                config.arena.base_power,
                ArenaConfig::DEFAULT_BASE_POWER,
                "ARENA_BASE_POWER={raw}"
            );
        }
    }

    #[test]
    fn max_turns_is_at_least_one() {
        let config = from_pairs(&[("ARENA_MAX_TURNS", "0")]);
        assert_eq!(config.arena.max_turns, 1);
    }

    #[test]
    fn missing_variables_keep_defaults() {
        let config = from_pairs(&[]);
        assert_eq!(config.first, CliConfig::DEFAULT_FIRST);
        assert_eq!(config.second, CliConfig::DEFAULT_SECOND);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn args_override_names_in_order() {
        let config = CliConfig::default().with_args(["Squirtle".to_owned()]);
        assert_eq!(config.first, "Squirtle");
        assert_eq!(config.second, CliConfig::DEFAULT_SECOND);

        let config = CliConfig::default().with_args(["A".to_owned(), "B".to_owned()]);
        assert_eq!((config.first.as_str(), config.second.as_str()), ("A", "B"));
    }

    #[test]
    fn defaults_match_core() {
        let config = CliConfig::default();
        assert_eq!(config.arena, ArenaConfig::default());
        assert!(config.roster_path.is_none());
    }
}
