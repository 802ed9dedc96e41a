use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (catalog and bookmarks live here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Number of items visible at once
    #[serde(default = "default_window_size")]
    pub window_size: usize,
    /// Route collection used for brand links, e.g. "explore" -> /explore/<id>
    #[serde(default = "default_link_collection")]
    pub link_collection: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            link_collection: default_link_collection(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Delivery location shown on restaurant pages
    #[serde(default = "default_location")]
    pub location: String,
    /// Opening hour (0-23, inclusive)
    #[serde(default = "default_open_hour")]
    pub open_hour: u32,
    /// Closing hour (1-24, exclusive)
    #[serde(default = "default_close_hour")]
    pub close_hour: u32,
    /// Route returned when a restaurant cannot be resolved
    #[serde(default = "default_not_found_route")]
    pub not_found_route: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
            open_hour: default_open_hour(),
            close_hour: default_close_hour(),
            not_found_route: default_not_found_route(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tiffin")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_window_size() -> usize {
    6
}

fn default_link_collection() -> String {
    "explore".to_string()
}

fn default_location() -> String {
    "delhi".to_string()
}

fn default_open_hour() -> u32 {
    10
}

fn default_close_hour() -> u32 {
    23
}

fn default_not_found_route() -> String {
    "/not-found".to_string()
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let mut config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.normalize();
        Ok(config)
    }

    /// Get the configuration file path
    /// Always uses ~/.config/tiffin/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("tiffin")
            .join("config.toml")
    }

    /// Get the catalog file path
    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir().join("catalog.json")
    }

    /// Get the bookmarks file path
    pub fn bookmarks_path(&self) -> PathBuf {
        self.data_dir().join("bookmarks.json")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Replace out-of-range values with their defaults
    fn normalize(&mut self) {
        if self.carousel.window_size == 0 {
            tracing::warn!(
                "carousel.window_size must be at least 1, using {}",
                default_window_size()
            );
            self.carousel.window_size = default_window_size();
        }

        let store = &mut self.store;
        if store.open_hour > 23 || store.close_hour > 24 || store.open_hour >= store.close_hour {
            tracing::warn!(
                open_hour = store.open_hour,
                close_hour = store.close_hour,
                "Invalid opening hours, falling back to defaults"
            );
            store.open_hour = default_open_hour();
            store.close_hour = default_close_hour();
        }
    }
}
