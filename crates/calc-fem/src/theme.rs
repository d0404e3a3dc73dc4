//! Theme preference
//!
//! Three colour themes, selected through a three-position toggle and
//! remembered across sessions under a single storage key.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, warn};

use crate::core::{CalcError, CalcResult};

/// Storage key the theme preference lives under
pub const THEME_STORAGE_KEY: &str = "calc-fem-theme";

/// Colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Theme {
    /// Theme "1"
    #[default]
    #[serde(rename = "1")]
    One,
    /// Theme "2"
    #[serde(rename = "2")]
    Two,
    /// Theme "3"
    #[serde(rename = "3")]
    Three,
}

impl Theme {
    /// All themes in toggle order
    pub const ALL: [Self; 3] = [Self::One, Self::Two, Self::Three];

    /// Identifier written to storage and to `data-theme`
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
        }
    }

    /// Toggle position that shows this theme
    #[must_use]
    pub const fn indicator(&self) -> ToggleIndicator {
        match self {
            Self::One => ToggleIndicator::Left,
            Self::Two => ToggleIndicator::Center,
            Self::Three => ToggleIndicator::Right,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Self::One),
            "2" => Ok(Self::Two),
            "3" => Ok(Self::Three),
            other => Err(CalcError::unknown_theme(other)),
        }
    }
}

/// Position of the theme toggle knob
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleIndicator {
    /// First position
    Left,
    /// Middle position
    Center,
    /// Last position
    Right,
}

impl ToggleIndicator {
    /// Every indicator class, cleared before one is applied
    pub const ALL: [Self; 3] = [Self::Left, Self::Center, Self::Right];

    /// CSS class name
    #[must_use]
    pub const fn class_name(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Durable key-value storage for preferences
pub trait ThemeStorage {
    /// Reads a stored value
    fn get_item(&self, key: &str) -> CalcResult<Option<String>>;

    /// Writes a value
    fn set_item(&mut self, key: &str, value: &str) -> CalcResult<()>;
}

/// In-memory storage, used by tests and headless sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates empty storage
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage holding one item
    #[must_use]
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.items.insert(key.to_string(), value.to_string());
        storage
    }
}

impl ThemeStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> CalcResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> CalcResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads and persists the theme preference
#[derive(Debug)]
pub struct ThemeSwitcher<S> {
    storage: S,
    current: Theme,
}

impl<S: ThemeStorage> ThemeSwitcher<S> {
    /// Creates a switcher, loading the stored preference
    pub fn new(storage: S) -> Self {
        let current = Self::load(&storage);
        Self { storage, current }
    }

    /// The stored theme, or the default when unset or unreadable
    #[must_use]
    pub fn initial_theme(&self) -> Theme {
        Self::load(&self.storage)
    }

    /// The theme most recently selected
    #[must_use]
    pub const fn current(&self) -> Theme {
        self.current
    }

    /// Selects a theme and persists it
    ///
    /// A failed write is logged; the selection itself always succeeds.
    pub fn select(&mut self, theme: Theme) -> Theme {
        self.current = theme;
        if let Err(e) = self.storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
            warn!(error = %e, theme = %theme, "failed to persist theme");
        }
        theme
    }

    /// Selects a theme from its raw identifier
    pub fn select_raw(&mut self, raw: &str) -> CalcResult<Theme> {
        let theme = raw.parse()?;
        Ok(self.select(theme))
    }

    /// Borrows the backing storage
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consumes the switcher, returning the storage
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn load(storage: &S) -> Theme {
        match storage.get_item(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|_| {
                warn!(stored = %raw, "ignoring unknown stored theme");
                Theme::default()
            }),
            Ok(None) => {
                debug!("no stored theme, using default");
                Theme::default()
            }
            Err(e) => {
                warn!(error = %e, "failed to read stored theme");
                Theme::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Storage whose writes always fail
    #[derive(Debug, Default)]
    struct ReadOnlyStorage;

    impl ThemeStorage for ReadOnlyStorage {
        fn get_item(&self, _key: &str) -> CalcResult<Option<String>> {
            Ok(Some("3".to_string()))
        }

        fn set_item(&mut self, _key: &str, _value: &str) -> CalcResult<()> {
            Err(CalcError::storage("read-only"))
        }
    }

    // ===== Theme =====

    #[test]
    fn test_theme_identifiers() {
        assert_eq!(Theme::One.as_str(), "1");
        assert_eq!(Theme::Two.as_str(), "2");
        assert_eq!(Theme::Three.as_str(), "3");
    }

    #[test]
    fn test_theme_default_is_one() {
        assert_eq!(Theme::default(), Theme::One);
    }

    #[test]
    fn test_theme_parse_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
        }
    }

    #[test]
    fn test_theme_parse_rejects_unknown() {
        assert!(matches!(
            "4".parse::<Theme>(),
            Err(CalcError::UnknownTheme(_))
        ));
        assert!(" 1".parse::<Theme>().is_err());
    }

    #[test]
    fn test_theme_indicators() {
        assert_eq!(Theme::One.indicator(), ToggleIndicator::Left);
        assert_eq!(Theme::Two.indicator(), ToggleIndicator::Center);
        assert_eq!(Theme::Three.indicator(), ToggleIndicator::Right);
    }

    #[test]
    fn test_indicator_class_names() {
        let classes: Vec<_> = ToggleIndicator::ALL.iter().map(|i| i.class_name()).collect();
        assert_eq!(classes, ["left", "center", "right"]);
    }

    #[test]
    fn test_theme_serializes_as_identifier() {
        assert_eq!(serde_json::to_string(&Theme::Two).unwrap(), "\"2\"");
        assert_eq!(
            serde_json::to_string(&ToggleIndicator::Center).unwrap(),
            "\"center\""
        );
    }

    // ===== ThemeSwitcher =====

    #[test]
    fn test_initial_theme_defaults_when_unset() {
        let switcher = ThemeSwitcher::new(MemoryStorage::new());
        assert_eq!(switcher.initial_theme(), Theme::One);
        assert_eq!(switcher.current().indicator().class_name(), "left");
    }

    #[test]
    fn test_initial_theme_reads_storage() {
        let switcher = ThemeSwitcher::new(MemoryStorage::with_item(THEME_STORAGE_KEY, "2"));
        assert_eq!(switcher.initial_theme(), Theme::Two);
        assert_eq!(switcher.current(), Theme::Two);
    }

    #[test]
    fn test_initial_theme_ignores_garbage() {
        let switcher = ThemeSwitcher::new(MemoryStorage::with_item(THEME_STORAGE_KEY, "dark"));
        assert_eq!(switcher.initial_theme(), Theme::One);
    }

    #[test]
    fn test_select_persists() {
        let mut switcher = ThemeSwitcher::new(MemoryStorage::new());
        switcher.select(Theme::Three);
        assert_eq!(switcher.current(), Theme::Three);
        assert_eq!(
            switcher.storage().get_item(THEME_STORAGE_KEY).unwrap(),
            Some("3".to_string())
        );
    }

    #[test]
    fn test_select_raw() {
        let mut switcher = ThemeSwitcher::new(MemoryStorage::new());
        assert_eq!(switcher.select_raw("2"), Ok(Theme::Two));
        assert!(switcher.select_raw("9").is_err());
        assert_eq!(switcher.current(), Theme::Two);
    }

    #[test]
    fn test_select_survives_write_failure() {
        let mut switcher = ThemeSwitcher::new(ReadOnlyStorage);
        assert_eq!(switcher.current(), Theme::Three);
        assert_eq!(switcher.select(Theme::One), Theme::One);
        assert_eq!(switcher.current(), Theme::One);
    }

    #[test]
    fn test_into_storage_keeps_items() {
        let mut switcher = ThemeSwitcher::new(MemoryStorage::new());
        switcher.select(Theme::Two);
        let storage = switcher.into_storage();
        assert_eq!(
            storage.get_item(THEME_STORAGE_KEY).unwrap().as_deref(),
            Some("2")
        );
    }
}
