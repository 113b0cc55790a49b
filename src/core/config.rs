//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.artspace/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::ButtonPolicy;
use clap::ValueEnum;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ArtspaceConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub catalog_file: Option<String>,
    pub buttons: Option<ButtonPolicy>,
    pub show_position: Option<bool>,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub catalog_file: Option<PathBuf>,
    pub button_policy: Option<ButtonPolicy>,
}

pub const CATALOG_ENV: &str = "ARTSPACE_CATALOG";
pub const BUTTONS_ENV: &str = "ARTSPACE_BUTTONS";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// `None` = use the built-in catalog.
    pub catalog_file: Option<PathBuf>,
    pub button_policy: ButtonPolicy,
    pub show_position: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.artspace/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".artspace").join("config.toml"))
}

/// Load config from `~/.artspace/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ArtspaceConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ArtspaceConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ArtspaceConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ArtspaceConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<ArtspaceConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ArtspaceConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Art Space Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# catalog_file = "~/gallery.toml"   # Or set ARTSPACE_CATALOG; omit for the built-in catalog
# buttons = "inert"                 # "inert" or "dim" (grey out buttons at either end)
# show_position = true              # Show "2/3" in the title bar
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ArtspaceConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading env vars through `env` instead of the process.
pub fn resolve_with_env(
    config: &ArtspaceConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Catalog: CLI → env → config → built-in
    let catalog_file = cli
        .catalog_file
        .clone()
        .or_else(|| env(CATALOG_ENV).filter(|s| !s.trim().is_empty()).map(PathBuf::from))
        .or_else(|| config.general.catalog_file.as_deref().map(expand_home));

    // Buttons: CLI → env → config → default
    let button_policy = cli
        .button_policy
        .or_else(|| {
            env(BUTTONS_ENV).and_then(|value| {
                let parsed = ButtonPolicy::from_str(value.trim(), true).ok();
                if parsed.is_none() {
                    warn!("Ignoring {}={:?}: expected \"inert\" or \"dim\"", BUTTONS_ENV, value);
                }
                parsed
            })
        })
        .or(config.general.buttons)
        .unwrap_or_default();

    ResolvedConfig {
        catalog_file,
        button_policy,
        show_position: config.general.show_position.unwrap_or(true),
    }
}

/// Expands a leading `~/` against the home directory.
fn expand_home(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::scratch_dir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = ArtspaceConfig::default();
        assert!(config.general.catalog_file.is_none());
        assert!(config.general.buttons.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&ArtspaceConfig::default(), &CliOverrides::default(), no_env);
        assert!(resolved.catalog_file.is_none());
        assert_eq!(resolved.button_policy, ButtonPolicy::Inert);
        assert!(resolved.show_position);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ArtspaceConfig {
            general: GeneralConfig {
                catalog_file: Some("/srv/gallery.toml".to_string()),
                buttons: Some(ButtonPolicy::Dim),
                show_position: Some(false),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.catalog_file, Some(PathBuf::from("/srv/gallery.toml")));
        assert_eq!(resolved.button_policy, ButtonPolicy::Dim);
        assert!(!resolved.show_position);
    }

    #[test]
    fn test_resolve_env_wins_over_config() {
        let config = ArtspaceConfig {
            general: GeneralConfig {
                catalog_file: Some("/srv/config.toml".to_string()),
                buttons: Some(ButtonPolicy::Inert),
                ..Default::default()
            },
        };
        let env = |key: &str| match key {
            CATALOG_ENV => Some("/srv/env.toml".to_string()),
            BUTTONS_ENV => Some("DIM".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.catalog_file, Some(PathBuf::from("/srv/env.toml")));
        assert_eq!(resolved.button_policy, ButtonPolicy::Dim);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let env = |key: &str| match key {
            CATALOG_ENV => Some("/srv/env.toml".to_string()),
            BUTTONS_ENV => Some("dim".to_string()),
            _ => None,
        };
        let cli = CliOverrides {
            catalog_file: Some(PathBuf::from("cli.json")),
            button_policy: Some(ButtonPolicy::Inert),
        };
        let resolved = resolve_with_env(&ArtspaceConfig::default(), &cli, env);
        assert_eq!(resolved.catalog_file, Some(PathBuf::from("cli.json")));
        assert_eq!(resolved.button_policy, ButtonPolicy::Inert);
    }

    #[test]
    fn test_invalid_env_buttons_falls_through_to_config() {
        let config = ArtspaceConfig {
            general: GeneralConfig {
                buttons: Some(ButtonPolicy::Dim),
                ..Default::default()
            },
        };
        let env = |key: &str| (key == BUTTONS_ENV).then(|| "sparkly".to_string());
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.button_policy, ButtonPolicy::Dim);
    }

    #[test]
    fn test_env_buttons_ignore_case_and_padding() {
        let env = |key: &str| (key == BUTTONS_ENV).then(|| " Dim\n".to_string());
        let resolved = resolve_with_env(&ArtspaceConfig::default(), &CliOverrides::default(), env);
        assert_eq!(resolved.button_policy, ButtonPolicy::Dim);
    }

    #[test]
    fn test_blank_env_catalog_is_ignored() {
        let env = |key: &str| (key == CATALOG_ENV).then(|| "  ".to_string());
        let resolved = resolve_with_env(&ArtspaceConfig::default(), &CliOverrides::default(), env);
        assert!(resolved.catalog_file.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[general]
buttons = "dim"
"#;
        let config: ArtspaceConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.buttons, Some(ButtonPolicy::Dim));
        assert!(config.general.catalog_file.is_none());
        assert!(config.general.show_position.is_none());
    }

    #[test]
    fn test_unknown_button_policy_is_a_parse_error() {
        let dir = scratch_dir("config_bad_policy");
        let path = dir.join("config.toml");
        fs::write(&path, "[general]\nbuttons = \"sparkly\"\n").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_generated_default_is_valid_toml() {
        let dir = scratch_dir("config_generated");
        let path = dir.join("nested").join("config.toml");
        generate_default_config(&path);

        let config = load_config_from(&path).unwrap();
        assert!(config.general.catalog_file.is_none());
        assert!(config.general.buttons.is_none());
    }

    #[test]
    fn test_expand_home_leaves_plain_paths() {
        assert_eq!(expand_home("/srv/a.toml"), PathBuf::from("/srv/a.toml"));
        assert_eq!(expand_home("rel/a.toml"), PathBuf::from("rel/a.toml"));
    }
}
