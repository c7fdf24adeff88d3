use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use ancients::alphabet::cipher::{Cipher, CipherError};
use ancients::alphabet::Variant;

const MIN_FLASH_MS: u64 = 50;
const MAX_FLASH_MS: u64 = 5000;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_variant")]
    pub variant: String,
    #[serde(default = "default_flash_ms")]
    pub flash_ms: u64,
    #[serde(default = "default_show_legend")]
    pub show_legend: bool,
    #[serde(default = "default_face")]
    pub face: String,
    /// Letter -> glyph overrides on top of the identity cipher.
    #[serde(default)]
    pub cipher: BTreeMap<String, String>,
}

fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_variant() -> String {
    Variant::default().as_str().to_string()
}
fn default_flash_ms() -> u64 {
    500
}
fn default_show_legend() -> bool {
    false
}
fn default_face() -> String {
    "runic".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            variant: default_variant(),
            flash_ms: default_flash_ms(),
            show_legend: default_show_legend(),
            face: default_face(),
            cipher: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.normalize_variant();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ancients")
            .join("config.toml")
    }

    pub fn variant(&self) -> Variant {
        self.variant.parse().unwrap_or_default()
    }

    /// Reset an unrecognised `variant` to the default.
    pub fn normalize_variant(&mut self) {
        if self.variant.parse::<Variant>().is_err() {
            tracing::warn!(variant = %self.variant, "unknown variant in config, using default");
            self.variant = default_variant();
        }
    }

    pub fn flash_delay(&self) -> Duration {
        Duration::from_millis(self.flash_ms.clamp(MIN_FLASH_MS, MAX_FLASH_MS))
    }

    pub fn build_cipher(&self) -> Result<Cipher, CipherError> {
        Cipher::with_overrides(&self.cipher)
    }
}
