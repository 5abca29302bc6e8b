//! ConfigStore - Gallery Configuration Storage
//!
//! The gallery reads an optional TOML file. A missing file yields the
//! defaults; out-of-range values are normalised after loading.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::components::composite::data_table::TableVariant;
use crate::constants::{
    DEFAULT_PAGE_SIZE, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::error::{Error, Result};
use crate::i18n::Locale;
use crate::theme::tokens::Size;

const CONFIG_FILE: &str = "config.toml";

/// Get or create the application data directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/design-kit/`
/// - **macOS**: `~/Library/Application Support/com.cyenx.design-kit/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\cyenx\design-kit\data\`
pub fn app_data_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("com", "cyenx", "design-kit") else {
        return Err(Error::NoDataDir);
    };

    let dir = project_dirs.data_dir();
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    Ok(dir.to_path_buf())
}

/// Default location of the config file
pub fn default_config_path() -> Result<PathBuf> {
    Ok(app_data_dir()?.join(CONFIG_FILE))
}

/// Settings of the gallery window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// `None` follows the system locale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    pub page_size: usize,
    pub table_size: Size,
    pub table_variant: TableVariant,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            locale: None,
            page_size: DEFAULT_PAGE_SIZE,
            table_size: Size::Medium,
            table_variant: TableVariant::Striped,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl GalleryConfig {
    /// Parse from TOML text and normalise
    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content)?;
        config.normalise();
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Clamp values into their usable ranges
    pub fn normalise(&mut self) {
        self.page_size = self.page_size.max(1);
        if !self.window_width.is_finite() {
            self.window_width = DEFAULT_WINDOW_WIDTH;
        }
        if !self.window_height.is_finite() {
            self.window_height = DEFAULT_WINDOW_HEIGHT;
        }
        self.window_width = self.window_width.max(MIN_WINDOW_WIDTH);
        self.window_height = self.window_height.max(MIN_WINDOW_HEIGHT);
    }

    /// Configured locale, else the system one
    pub fn resolved_locale(&self) -> Locale {
        self.locale.unwrap_or_else(Locale::detect)
    }
}

/// Load the config named by `arg`, else the default file.
/// Falls back to defaults (with a warning) when anything goes wrong.
pub fn load_gallery_config(arg: Option<PathBuf>) -> GalleryConfig {
    let path = match arg {
        Some(path) => path,
        None => match default_config_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("Config directory unavailable: {}", e);
                return GalleryConfig::default();
            }
        },
    };

    GalleryConfig::load(&path).unwrap_or_else(|e| {
        tracing::warn!("Failed to load config {}: {}", path.display(), e);
        GalleryConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("design-kit-test-{}-{}", std::process::id(), name))
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config = GalleryConfig::from_toml("").expect("parse");
        assert_eq!(config, GalleryConfig::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = GalleryConfig::from_toml(
            "locale = \"zh\"\npage_size = 5\ntable_size = \"small\"\ntable_variant = \"bordered\"\n",
        )
        .expect("parse");
        assert_eq!(config.locale, Some(Locale::ZhCN));
        assert_eq!(config.page_size, 5);
        assert_eq!(config.table_size, Size::Small);
        assert_eq!(config.table_variant, TableVariant::Bordered);
        assert_eq!(config.window_width, DEFAULT_WINDOW_WIDTH);
    }

    #[test]
    fn out_of_range_values_are_normalised() {
        let config = GalleryConfig::from_toml("page_size = 0\nwindow_width = 10.0\nwindow_height = 20.0\n")
            .expect("parse");
        assert_eq!(config.page_size, 1);
        assert_eq!(config.window_width, MIN_WINDOW_WIDTH);
        assert_eq!(config.window_height, MIN_WINDOW_HEIGHT);
    }

    #[test]
    fn bad_toml_is_an_error() {
        assert!(matches!(GalleryConfig::from_toml("page_size = \"ten\""), Err(Error::TomlDe { .. })));
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = temp_path("roundtrip.toml");
        let config = GalleryConfig {
            locale: Some(Locale::EnUS),
            page_size: 25,
            table_size: Size::Large,
            table_variant: TableVariant::Plain,
            window_width: 1440.0,
            window_height: 900.0,
        };
        config.save(&path).expect("save");
        let loaded = GalleryConfig::load(&path).expect("load");
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = temp_path("missing.toml");
        let config = GalleryConfig::load(&path).expect("load");
        assert_eq!(config, GalleryConfig::default());
        assert_eq!(load_gallery_config(Some(path)), GalleryConfig::default());
    }
}
