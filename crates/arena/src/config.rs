//! Arena configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// How exchange reports are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    /// One message per line.
    #[default]
    Text,
    /// One JSON report per exchange.
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Fixed seed for a reproducible fight; random when unset.
    pub seed: Option<u64>,
    pub roster: PathBuf,
    /// Balance tables; the built-in defaults when unset.
    pub tables: Option<PathBuf>,
    pub player: String,
    /// Opponent id; picked at random from the roster when unset.
    pub opponent: Option<String>,
    pub max_exchanges: u32,
    pub output: OutputFormat,
    /// Directory for an additional log file.
    pub log_dir: Option<PathBuf>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            seed: None,
            roster: PathBuf::from("data/roster.toml"),
            tables: None,
            player: "rook".to_string(),
            opponent: None,
            max_exchanges: 100,
            output: OutputFormat::Text,
            log_dir: None,
        }
    }
}

impl ArenaConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_SEED` - RNG seed (default: random)
    /// - `ARENA_ROSTER` - roster file, TOML or RON (default: `data/roster.toml`)
    /// - `ARENA_TABLES` - balance tables TOML (default: built-in)
    /// - `ARENA_PLAYER` - player id (default: `rook`)
    /// - `ARENA_OPPONENT` - opponent id (default: random)
    /// - `ARENA_MAX_EXCHANGES` - exchange cap (default: 100, minimum 1)
    /// - `ARENA_OUTPUT` - `text` or `json` (default: `text`)
    /// - `ARENA_LOG_DIR` - also log to `arena.log` in this directory
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        config.seed = read("ARENA_SEED").and_then(|v| v.trim().parse().ok());
        if let Some(roster) = read("ARENA_ROSTER") {
            config.roster = PathBuf::from(roster);
        }
        config.tables = read("ARENA_TABLES").map(PathBuf::from);
        if let Some(player) = read("ARENA_PLAYER") {
            config.player = player;
        }
        config.opponent = read("ARENA_OPPONENT");
        if let Some(max) = read("ARENA_MAX_EXCHANGES").and_then(|v| v.trim().parse::<u32>().ok()) {
            config.max_exchanges = max.max(1);
        }
        if let Some(output) = read("ARENA_OUTPUT").and_then(|v| v.trim().parse().ok()) {
            config.output = output;
        }
        config.log_dir = read("ARENA_LOG_DIR").map(PathBuf::from);

        config
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> ArenaConfig {
        let vars: HashMap<_, _> = vars.iter().copied().collect();
        ArenaConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn defaults_without_variables() {
        assert_eq!(config_from(&[]), ArenaConfig::default());
    }

    #[test]
    fn variables_override_defaults() {
        let config = config_from(&[
            ("ARENA_SEED", "42"),
            ("ARENA_ROSTER", "/srv/roster.ron"),
            ("ARENA_OPPONENT", "cave_troll"),
            ("ARENA_MAX_EXCHANGES", "0"),
            ("ARENA_OUTPUT", "JSON"),
            ("ARENA_LOG_DIR", "/var/log/arena"),
        ]);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.roster, PathBuf::from("/srv/roster.ron"));
        assert_eq!(config.opponent.as_deref(), Some("cave_troll"));
        assert_eq!(config.max_exchanges, 1);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/arena")));
        assert_eq!(config.player, "rook");
    }

    #[test]
    fn unparsable_values_fall_back() {
        let config = config_from(&[
            ("ARENA_SEED", "soon"),
            ("ARENA_OUTPUT", "yaml"),
            ("ARENA_OPPONENT", "  "),
        ]);
        assert_eq!(config.seed, None);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.opponent, None);
    }
}
