// File: src/config.rs
// Purpose: Page and overlay configuration parsing from taller.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Presentation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub page: PageConfig,

    #[serde(default)]
    pub overlay: OverlayConfig,
}

/// Page-level settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageConfig {
    #[serde(default = "default_title")]
    pub title: String,
}

/// Confirmation overlay settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverlayConfig {
    #[serde(default = "default_heading")]
    pub heading: String,

    #[serde(default = "default_dismiss_label")]
    pub dismiss_label: String,

    /// CSS color of the dimmed backdrop
    #[serde(default = "default_backdrop")]
    pub backdrop: String,

    #[serde(default = "default_z_index")]
    pub z_index: i32,

    #[serde(default = "default_max_width")]
    pub max_width_px: u32,

    /// Show only the last four digits of the card
    #[serde(default = "default_false")]
    pub mask_card_number: bool,
}

// Default values
fn default_title() -> String {
    "Taller - Reserva de servicio".to_string()
}

fn default_heading() -> String {
    "Reserva Confirmada (Simulada)".to_string()
}

fn default_dismiss_label() -> String {
    "Cerrar".to_string()
}

fn default_backdrop() -> String {
    "rgba(0,0,0,0.5)".to_string()
}

fn default_z_index() -> i32 {
    1000
}

fn default_max_width() -> u32 {
    400
}

fn default_false() -> bool {
    false
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            heading: default_heading(),
            dismiss_label: default_dismiss_label(),
            backdrop: default_backdrop(),
            z_index: default_z_index(),
            max_width_px: default_max_width(),
            mask_card_number: default_false(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file, falling back to defaults when
    /// the file does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config = toml::from_str(content).context("Invalid taller configuration")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.page.title, "Taller - Reserva de servicio");
        assert_eq!(config.overlay.heading, "Reserva Confirmada (Simulada)");
        assert_eq!(config.overlay.dismiss_label, "Cerrar");
        assert_eq!(config.overlay.z_index, 1000);
        assert_eq!(config.overlay.max_width_px, 400);
        assert!(!config.overlay.mask_card_number);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            [overlay]
            mask_card_number = true
            dismiss_label = "Aceptar"
            "#,
        )
        .unwrap();

        assert!(config.overlay.mask_card_number);
        assert_eq!(config.overlay.dismiss_label, "Aceptar");
        assert_eq!(config.overlay.heading, "Reserva Confirmada (Simulada)");
        assert_eq!(config.page, PageConfig::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let err = Config::from_toml_str("[overlay]\nz_index = \"alto\"").unwrap_err();
        assert!(err.to_string().contains("Invalid taller configuration"));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = Config::load("/nonexistent/taller.toml").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("taller-config-{}.toml", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[page]\ntitle = \"Taller Martínez\"").unwrap();
        drop(file);

        let config = Config::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.page.title, "Taller Martínez");
        assert_eq!(config.overlay, OverlayConfig::default());
    }
}
