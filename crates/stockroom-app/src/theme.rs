//! Light/dark theme preference, persisted on the key-value surface.

use serde::{Deserialize, Serialize};
use stockroom_core::error::StockroomResult;
use stockroom_core::repository::KeyValueStore;
use tracing::warn;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Holds the current theme. Built once and passed to whatever renders.
#[derive(Debug)]
pub struct ThemeHolder<K: KeyValueStore> {
    storage: K,
    theme: Theme,
}

impl<K: KeyValueStore> ThemeHolder<K> {
    /// Read the stored preference; anything missing or unreadable is
    /// `Light`.
    pub fn load(storage: K) -> Self {
        let theme = match storage.get(THEME_KEY) {
            Ok(Some(raw)) => Theme::parse(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "Ignoring unknown theme preference");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!(error = %e, "Failed to read theme preference");
                Theme::default()
            }
        };
        Self { storage, theme }
    }

    pub fn current(&self) -> Theme {
        self.theme
    }

    pub fn set(&mut self, theme: Theme) -> StockroomResult<()> {
        self.storage.set(THEME_KEY, theme.as_str())?;
        self.theme = theme;
        Ok(())
    }

    pub fn toggle(&mut self) -> StockroomResult<Theme> {
        let next = match self.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        self.set(next)?;
        Ok(next)
    }
}
