//! Application configuration.
//!
//! The configuration is loaded from `$XDG_CONFIG_HOME/i3cmds/config.json`
//! (or the path passed with `--config`).  Command-line flags override the
//! file.
//!
//! # Example
//!
//! ```json
//! {
//!   "sections": ["workspace", "focus"],
//!   "quote_style": "escaped",
//!   "skip_inactive_outputs": true
//! }
//! ```

use crate::command::Section;
use crate::sanitize::QuoteStyle;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration.
///
/// Every field is optional; a minimal `{}` file is valid and falls back to
/// the compiled-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Blocks to emit.  Order in the file does not matter.
    pub sections: Vec<Section>,
    /// How workspace and output names are quoted.
    pub quote_style: QuoteStyle,
    /// Leave out outputs the window manager reports as inactive.
    pub skip_inactive_outputs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sections: Section::ALL.to_vec(),
            quote_style: QuoteStyle::Plain,
            skip_inactive_outputs: false,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }
}

/// Resolve the default config file (`$XDG_CONFIG_HOME/i3cmds/config.json`).
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    PathBuf::from(base).join("i3cmds").join("config.json")
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_config() {
        let json = r#"{
            "sections": ["focus", "workspace"],
            "quote_style": "escaped",
            "skip_inactive_outputs": true
        }"#;
        let cfg: Config = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.sections, vec![Section::Focus, Section::Workspace]);
        assert_eq!(cfg.quote_style, QuoteStyle::Escaped);
        assert!(cfg.skip_inactive_outputs);
    }

    #[test]
    fn deserialize_empty_uses_defaults() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.sections, Section::ALL.to_vec());
        assert_eq!(cfg.quote_style, QuoteStyle::Plain);
        assert!(!cfg.skip_inactive_outputs);
    }

    #[test]
    fn unknown_section_is_rejected() {
        let json = r#"{ "sections": ["workspace", "scratchpad"] }"#;
        assert!(serde_json::from_str::<Config>(json).is_err());
    }

    #[test]
    fn unknown_top_level_keys_ignored() {
        let json = r#"{ "quote_style": "plain", "future_section": { "key": 42 } }"#;
        // Should not fail — unknown keys are silently ignored.
        let _cfg: Config = serde_json::from_str(json).unwrap();
    }

    #[test]
    fn load_reports_missing_file() {
        let path = std::env::temp_dir().join(format!(
            "i3cmds-test-missing-{}.json",
            std::process::id()
        ));
        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "i3cmds-test-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "sections": ["layout"] }"#).unwrap();
        let cfg = Config::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(cfg.sections, vec![Section::Layout]);
    }
}
