//! Runtime settings.
//!
//! Settings are layered with the `config` crate: built-in defaults, then an
//! optional TOML file, then `GROUPWATCH_*` environment variables.
//!
//! ```toml
//! theme = "dark"
//! initial_group = "system-health"
//! status_seconds = 5
//!
//! [[groups]]
//! name = "API Performance"
//! icon = "Activity"
//! refresh_interval = "300"
//! metrics = "Latency, Errors"
//! ```

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::data::{GroupForm, DEFAULT_GROUP_ID};

/// Prefix for environment overrides (e.g. `GROUPWATCH_THEME=light`).
pub const ENV_PREFIX: &str = "GROUPWATCH";

/// Which color theme to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// Detect from the terminal background.
    #[default]
    Auto,
    Dark,
    Light,
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemeChoice,
    /// Group selected when the session starts.
    pub initial_group: String,
    /// How long toast messages stay in the status bar.
    pub status_seconds: u64,
    /// Extra groups created at startup, after the built-in ones.
    pub groups: Vec<GroupForm>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Auto,
            initial_group: DEFAULT_GROUP_ID.to_string(),
            status_seconds: 3,
            groups: Vec::new(),
        }
    }
}

impl Settings {
    /// Load settings from `path` (if it exists) and the environment.
    pub fn load(path: &Path) -> Result<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(path: &Path, env: Environment) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(env)
            .build()
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        config
            .try_deserialize()
            .with_context(|| format!("Invalid settings in {}", path.display()))
    }

    /// Toast lifetime as a [`Duration`].
    pub fn status_duration(&self) -> Duration {
        Duration::from_secs(self.status_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// An environment source that never sees the real process environment.
    fn isolated_env(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings =
            Settings::load_with_env(Path::new("/nonexistent/groupwatch.toml"), isolated_env(&[]))
                .unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.initial_group, "performance");
        assert_eq!(settings.status_duration(), Duration::from_secs(3));
    }

    #[test]
    fn test_file_settings() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
theme = "light"
initial_group = "system-health"
status_seconds = 5

[[groups]]
name = "API Performance"
icon = "Activity"
refresh_interval = "300"
metrics = "Latency, Errors"

[[groups]]
name = "Queues"
"#
        )
        .unwrap();

        let settings = Settings::load_with_env(file.path(), isolated_env(&[])).unwrap();
        assert_eq!(settings.theme, ThemeChoice::Light);
        assert_eq!(settings.initial_group, "system-health");
        assert_eq!(settings.status_seconds, 5);
        assert_eq!(settings.groups.len(), 2);
        assert_eq!(settings.groups[0].name, "API Performance");
        assert_eq!(settings.groups[0].refresh_interval, "300");

        // Unset fields fall back to the form defaults
        assert_eq!(settings.groups[1].icon, "BarChart3");
        assert_eq!(settings.groups[1].refresh_interval, "60");
    }

    #[test]
    fn test_environment_overrides_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"light\"").unwrap();

        let env = isolated_env(&[("GROUPWATCH_THEME", "dark")]);
        let settings = Settings::load_with_env(file.path(), env).unwrap();
        assert_eq!(settings.theme, ThemeChoice::Dark);
    }

    #[test]
    fn test_invalid_theme_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"sepia\"").unwrap();

        let result = Settings::load_with_env(file.path(), isolated_env(&[]));
        assert!(result.is_err());
    }
}
