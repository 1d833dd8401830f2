//! Simulator configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

/// Configuration required to run a hand script.
#[derive(Clone, Debug)]
pub struct SimConfig {
    pub data_dir: PathBuf,
    pub actor_kind: String,
    pub log_dir: Option<PathBuf>,
}

impl SimConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "data";
    pub const DEFAULT_ACTOR_KIND: &'static str = "humanoid";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HANDS_DATA_DIR` - Directory holding `hands.toml` and `items.ron` (default: `data`)
    /// - `HANDS_ACTOR_KIND` - Layout to instantiate (default: `humanoid`)
    /// - `HANDS_LOG_DIR` - Also write logs to `sim.log` in this directory (default: unset)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("HANDS_DATA_DIR") {
            config.data_dir = dir;
        }
        if let Some(kind) = read_env::<String>("HANDS_ACTOR_KIND") {
            config.actor_kind = kind;
        }
        config.log_dir = read_env::<PathBuf>("HANDS_LOG_DIR");

        config
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            actor_kind: Self::DEFAULT_ACTOR_KIND.to_owned(),
            log_dir: None,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| value.trim().parse::<T>().ok())
}
