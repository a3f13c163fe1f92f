use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{KeyValueStore, StorageError};

pub const DEFAULT_THEME_KEY: &str = "theme";

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Value of the document's `data-theme` attribute.
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

/// Theme preference, stored apart from the view snapshot.
#[derive(Debug)]
pub struct ThemeStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ThemeStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Saved theme, or `None` if nothing usable is stored.
    pub fn load(&self) -> Option<Theme> {
        match self.store.get(&self.key) {
            Ok(Some(raw)) => {
                let theme = Theme::parse(&raw);
                if theme.is_none() {
                    debug!(key = %self.key, raw = %raw, "unknown saved theme");
                }
                theme
            }
            Ok(None) => None,
            Err(e) => {
                warn!(key = %self.key, error = %e, "could not read saved theme");
                None
            }
        }
    }

    pub fn save(&mut self, theme: Theme) -> Result<(), StorageError> {
        self.store.set(&self.key, theme.as_str())
    }
}
