//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.lemon/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LemonConfig {
    #[serde(default)]
    pub menu: MenuConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MenuConfig {
    pub url: Option<String>,
    pub category: Option<String>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_MENU_URL: &str = "https://raw.githubusercontent.com/Meta-Mobile-Developer-PC/Working-With-Data-API/main/littleLemonMenu.json";
pub const DEFAULT_CATEGORY: &str = "Salads";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub url: String,
    pub category: String,
    /// `None` means the request may wait indefinitely.
    pub timeout: Option<Duration>,
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub url: Option<String>,
    pub category: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    EmptyCategory,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::EmptyCategory => write!(f, "menu category must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.lemon/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".lemon").join("config.toml"))
}

/// Load config from `~/.lemon/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LemonConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LemonConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(LemonConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(LemonConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<LemonConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: LemonConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = format!(
        r#"# Lemon Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [menu]
# url = "{DEFAULT_MENU_URL}"   # Or set LEMON_MENU_URL
# category = "{DEFAULT_CATEGORY}"                # Or set LEMON_CATEGORY
# timeout_secs = 10                      # No timeout when omitted
"#
    );

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
pub fn resolve(config: &LemonConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    // URL: CLI → env → config → default
    let url = cli
        .url
        .clone()
        .or_else(|| std::env::var("LEMON_MENU_URL").ok())
        .or_else(|| config.menu.url.clone())
        .unwrap_or_else(|| DEFAULT_MENU_URL.to_string());

    // Category: CLI → env → config → default
    let category = cli
        .category
        .clone()
        .or_else(|| std::env::var("LEMON_CATEGORY").ok())
        .or_else(|| config.menu.category.clone())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    let category = category.trim().to_string();
    if category.is_empty() {
        return Err(ConfigError::EmptyCategory);
    }

    Ok(ResolvedConfig {
        url,
        category,
        timeout: config.menu.timeout_secs.map(Duration::from_secs),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = LemonConfig::default();
        assert!(config.menu.url.is_none());
        assert!(config.menu.category.is_none());
        assert!(config.menu.timeout_secs.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(&LemonConfig::default(), &CliOverrides::default()).unwrap();
        // Env vars may be set by the developer; only check what they can't touch.
        assert_eq!(resolved.timeout, None);
        assert!(!resolved.category.is_empty());
        assert!(!resolved.url.is_empty());
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = LemonConfig {
            menu: MenuConfig {
                url: Some("http://config/menu.json".to_string()),
                category: Some("Desserts".to_string()),
                timeout_secs: Some(5),
            },
        };
        let cli = CliOverrides {
            url: Some("http://cli/menu.json".to_string()),
            category: Some("Drinks".to_string()),
        };
        let resolved = resolve(&config, &cli).unwrap();
        assert_eq!(resolved.url, "http://cli/menu.json");
        assert_eq!(resolved.category, "Drinks");
        assert_eq!(resolved.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_resolve_rejects_blank_category() {
        let cli = CliOverrides {
            url: None,
            category: Some("   ".to_string()),
        };
        let result = resolve(&LemonConfig::default(), &cli);
        assert!(matches!(result, Err(ConfigError::EmptyCategory)));
    }

    #[test]
    fn test_resolve_trims_category() {
        let cli = CliOverrides {
            url: Some("http://cli/menu.json".to_string()),
            category: Some(" Salads ".to_string()),
        };
        let resolved = resolve(&LemonConfig::default(), &cli).unwrap();
        assert_eq!(resolved.category, "Salads");
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[menu]
url = "http://localhost:8080/menu.json"
category = "Desserts"
timeout_secs = 10
"#;
        let config: LemonConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.menu.url.as_deref(),
            Some("http://localhost:8080/menu.json")
        );
        assert_eq!(config.menu.category.as_deref(), Some("Desserts"));
        assert_eq!(config.menu.timeout_secs, Some(10));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[menu]
category = "Drinks"
"#;
        let config: LemonConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.menu.category.as_deref(), Some("Drinks"));
        assert!(config.menu.url.is_none());
        assert!(config.menu.timeout_secs.is_none());
    }

    #[test]
    fn test_empty_file_parses() {
        let config: LemonConfig = toml::from_str("").unwrap();
        assert!(config.menu.url.is_none());
    }

    #[test]
    fn test_load_config_from_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("lemon-does-not-exist").join("config.toml");
        assert!(matches!(load_config_from(&path), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_from_malformed_file_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("lemon-config-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[menu\nurl = ").unwrap();

        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_generate_default_config_is_valid_toml() {
        let dir = std::env::temp_dir().join(format!("lemon-default-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        generate_default_config(&path);

        let config = load_config_from(&path).unwrap();
        assert!(config.menu.url.is_none());

        fs::remove_dir_all(&dir).unwrap();
    }
}
