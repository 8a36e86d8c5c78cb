use serde::{Deserialize, Serialize};

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tunetree/config.toml` or `~/.config/tunetree/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TUNETREE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub limits: LimitSettings,
    pub shuffle: ShuffleSettings,
    pub shell: ShellSettings,
    pub logging: LoggingSettings,
}

/// Bounds enforced on new entries before they reach the index.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitSettings {
    /// Maximum title length, in characters.
    pub max_title_len: usize,
    /// Maximum artist length, in characters.
    pub max_artist_len: usize,
    /// Maximum genre length, in characters.
    pub max_genre_len: usize,
    /// Smallest accepted release year.
    pub min_year: u32,
}

impl Default for LimitSettings {
    fn default() -> Self {
        Self {
            max_title_len: 99,
            max_artist_len: 99,
            max_genre_len: 49,
            min_year: 1,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ShuffleSettings {
    /// Fixed RNG seed. When unset the shell seeds from the OS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShellSettings {
    /// Heading printed above the main menu.
    pub banner: String,
    /// Whether to print the menu before every prompt.
    pub show_menu: bool,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            banner: "Music Playlist Organizer".to_string(),
            show_menu: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive, used when `RUST_LOG` is unset.
    ///
    /// Example: "tunetree=debug"
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}
