//! Light/dark theme preference and its persistence.
//!
//! The preference is a single literal under one `localStorage` key. Anything
//! other than `"light"` (including an unreadable store) means dark, which is
//! also the page's default styling. The root element carries the `light`
//! class exactly when the theme is light.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a failed write is reported to the caller for
//! logging but the in-page toggle still takes effect.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use thiserror::Error;

/// Class on the root element marking the light theme.
pub const LIGHT_CLASS: &str = "light";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Interpret a stored value; absence and unknown literals are dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Derive the theme from the root element's class state.
    pub fn from_light_class(has_light_class: bool) -> Self {
        if has_light_class { Self::Light } else { Self::Dark }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn has_light_class(self) -> bool {
        self == Self::Light
    }

    /// Text of the polite live-region notice emitted after a toggle.
    pub fn announcement(self) -> String {
        format!("Theme changed to {} mode", self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    WriteFailed(String),
}

/// Durable origin-scoped key/value store.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Read the persisted theme.
pub fn load<S: PreferenceStore>(store: &S, key: &str) -> Theme {
    Theme::from_stored(store.read(key).as_deref())
}

/// Flip `current`, persist the result, and return it together with the
/// outcome of the write.
pub fn toggle<S: PreferenceStore>(store: &S, key: &str, current: Theme) -> (Theme, Result<(), StorageError>) {
    let next = current.toggled();
    let saved = store.write(key, next.as_str());
    (next, saved)
}

/// `window.localStorage`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().unwrap_or(None))
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).unwrap_or(None)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::WriteFailed(format!("{e:?}")))
    }
}
