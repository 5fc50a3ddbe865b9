//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rsbuilder/rsbuilder.toml`
//! 3. Environment variables: `RSBUILDER_*` prefix
//!
//! Command line flags (`--indent`) are applied on top by the CLI.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::IndentUnit;
use crate::util::path::expand_env_vars;

/// Unified configuration for rsbuilder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Spaces per level for tag-style (HTML) output
    pub html_indent: usize,
    /// Spaces per level for declaration-style (class) output
    pub code_indent: usize,
    /// Base directory for relative output paths (default: cwd)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            html_indent: IndentUnit::TAG.width(),
            code_indent: IndentUnit::DECLARATION.width(),
            output_dir: None,
        }
    }
}

/// Raw settings for intermediate parsing: `None` means "not specified, inherit".
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub html_indent: Option<usize>,
    pub code_indent: Option<usize>,
    pub output_dir: Option<PathBuf>,
}

/// Get the XDG config directory for rsbuilder.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rsbuilder").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rsbuilder.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

fn parse_indent(key: &str, raw: &str) -> Result<usize, ApplicationError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|e| ApplicationError::Config {
            message: format!("{key}: invalid indent {raw:?}: {e}"),
        })
}

impl Settings {
    pub fn html_indent_unit(&self) -> IndentUnit {
        IndentUnit::new(self.html_indent)
    }

    pub fn code_indent_unit(&self) -> IndentUnit {
        IndentUnit::new(self.code_indent)
    }

    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            html_indent: overlay.html_indent.unwrap_or(self.html_indent),
            code_indent: overlay.code_indent.unwrap_or(self.code_indent),
            output_dir: overlay
                .output_dir
                .clone()
                .or_else(|| self.output_dir.clone()),
        }
    }

    /// Expand `~` and `$VAR` in path-like fields.
    fn expand_paths(&mut self) {
        if let Some(dir) = &self.output_dir {
            let expanded = expand_env_vars(dir.to_string_lossy().as_ref());
            self.output_dir = Some(PathBuf::from(expanded));
        }
    }

    /// Reject values the renderers cannot use.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        for (key, value) in [
            ("html_indent", self.html_indent),
            ("code_indent", self.code_indent),
        ] {
            if value == 0 {
                return Err(ApplicationError::Config {
                    message: format!("{key} must be at least 1"),
                });
            }
        }
        Ok(())
    }

    /// Load settings with layered precedence.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/rsbuilder/rsbuilder.toml`
    /// 3. Environment variables: `RSBUILDER_*` prefix
    pub fn load() -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("loading global config: {}", global_path.display());
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = current.with_env_overrides()?;
        current.expand_paths();
        current.validate()?;

        Ok(current)
    }

    /// Defaults overlaid with one explicit TOML file; no environment lookup.
    pub fn load_from(path: &Path) -> Result<Self, ApplicationError> {
        let raw = load_raw_settings(path)?;
        let mut current = Self::default().merge_with(&raw);
        current.expand_paths();
        current.validate()?;
        Ok(current)
    }

    /// Apply RSBUILDER_* environment variables as explicit overrides.
    pub fn with_env_overrides(mut self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(Environment::with_prefix("RSBUILDER").separator("__"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("html_indent") {
            self.html_indent = parse_indent("RSBUILDER_HTML_INDENT", &val)?;
        }
        if let Ok(val) = config.get_string("code_indent") {
            self.code_indent = parse_indent("RSBUILDER_CODE_INDENT", &val)?;
        }
        if let Ok(val) = config.get_string("output_dir") {
            self.output_dir = Some(PathBuf::from(val));
        }

        Ok(self)
    }

    /// TOML form of the effective settings, as shown by `rsbuilder config show`.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_render_styles() {
        let settings = Settings::default();
        assert_eq!(settings.html_indent_unit(), IndentUnit::TAG);
        assert_eq!(settings.code_indent_unit(), IndentUnit::DECLARATION);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_merge_with_keeps_unspecified_fields() {
        let overlay = RawSettings {
            code_indent: Some(8),
            ..RawSettings::default()
        };
        let merged = Settings::default().merge_with(&overlay);
        assert_eq!(merged.html_indent, 2);
        assert_eq!(merged.code_indent, 8);
        assert_eq!(merged.output_dir, None);
    }

    #[test]
    fn test_validate_rejects_zero_indent() {
        let settings = Settings {
            html_indent: 0,
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("html_indent"));
    }

    #[test]
    fn test_parse_indent_reports_key() {
        let err = parse_indent("RSBUILDER_CODE_INDENT", "four").unwrap_err();
        assert!(err.to_string().contains("RSBUILDER_CODE_INDENT"));
    }
}
