use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use checker_logging::{checker_debug, checker_warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key holding the persisted theme choice.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("preference store unavailable")]
    Unavailable,
    #[error("failed to write {key:?}: {reason}")]
    Write { key: String, reason: String },
}

/// Durable per-origin key-value store (browser `localStorage` or a fake).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store used by tests and when the browser store is unavailable.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stored preference, else OS preference, else light.
pub fn resolve_theme(store: &dyn PreferenceStore, os_prefers_dark: Option<bool>) -> Theme {
    if let Some(raw) = store.get(THEME_KEY) {
        match raw.parse::<Theme>() {
            Ok(theme) => {
                checker_debug!("Using stored theme {}", theme);
                return theme;
            }
            Err(err) => checker_warn!("Ignoring stored theme: {}", err),
        }
    }
    match os_prefers_dark {
        Some(true) => Theme::Dark,
        Some(false) | None => Theme::Light,
    }
}

pub fn store_theme(store: &mut dyn PreferenceStore, theme: Theme) -> Result<(), StoreError> {
    store.set(THEME_KEY, theme.as_str())
}

/// Icon and tooltip for the toggle control; both describe the target theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeControlView {
    pub icon: &'static str,
    pub tooltip: &'static str,
}

impl ThemeControlView {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                icon: "bi-moon-stars-fill",
                tooltip: "Switch to dark mode",
            },
            Theme::Dark => Self {
                icon: "bi-sun-fill",
                tooltip: "Switch to light mode",
            },
        }
    }
}
