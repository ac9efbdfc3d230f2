use std::cell::RefCell;
use std::collections::HashMap;

pub const THEME_KEY: &str = "portfolio-theme";
pub const DEFAULT_THEME: Theme = Theme::Dark;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
    Cyberpunk,
    Ocean,
    Forest,
    Sunset,
    Nord,
    Dracula,
    /// A stored name this build does not know. Applied verbatim.
    Unrecognized(String),
}

impl Theme {
    pub const ALL: [Theme; 8] = [
        Theme::Dark,
        Theme::Light,
        Theme::Cyberpunk,
        Theme::Ocean,
        Theme::Forest,
        Theme::Sunset,
        Theme::Nord,
        Theme::Dracula,
    ];

    pub fn parse(value: &str) -> Self {
        match value {
            "dark" => Self::Dark,
            "light" => Self::Light,
            "cyberpunk" => Self::Cyberpunk,
            "ocean" => Self::Ocean,
            "forest" => Self::Forest,
            "sunset" => Self::Sunset,
            "nord" => Self::Nord,
            "dracula" => Self::Dracula,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Cyberpunk => "cyberpunk",
            Self::Ocean => "ocean",
            Self::Forest => "forest",
            Self::Sunset => "sunset",
            Self::Nord => "nord",
            Self::Dracula => "dracula",
            Self::Unrecognized(name) => name,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
            Self::Cyberpunk => "Cyberpunk",
            Self::Ocean => "Ocean",
            Self::Forest => "Forest",
            Self::Sunset => "Sunset",
            Self::Nord => "Nord",
            Self::Dracula => "Dracula",
            Self::Unrecognized(name) => name,
        }
    }

    pub fn icon(&self) -> ThemeIcon {
        match self {
            Self::Light => ThemeIcon::Sun,
            _ => ThemeIcon::Moon,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeIcon {
    Sun,
    Moon,
}

/// Durable key/value storage for user preferences.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

pub struct ThemeController<S> {
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn saved_theme(&self) -> Theme {
        self.store
            .read(THEME_KEY)
            .map(|value| Theme::parse(&value))
            .unwrap_or(DEFAULT_THEME)
    }

    /// Persists `theme`. Painting it onto the document is the caller's job.
    pub fn apply(&self, theme: &Theme) {
        self.store.write(THEME_KEY, theme.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_preference_falls_back_to_dark() {
        let controller = ThemeController::new(MemoryStore::default());

        assert_eq!(controller.saved_theme(), Theme::Dark);
    }

    #[test]
    fn every_theme_round_trips_through_the_store() {
        let controller = ThemeController::new(MemoryStore::default());

        for theme in Theme::ALL {
            controller.apply(&theme);
            assert_eq!(controller.saved_theme(), theme);
        }
    }

    #[test]
    fn unknown_stored_name_is_kept_verbatim() {
        let store = MemoryStore::default();
        store.write(THEME_KEY, "solarized");
        let controller = ThemeController::new(store);

        let theme = controller.saved_theme();
        assert_eq!(theme, Theme::Unrecognized("solarized".to_string()));
        assert_eq!(theme.as_str(), "solarized");
        assert_eq!(theme.icon(), ThemeIcon::Moon);
    }

    #[test]
    fn only_light_uses_the_sun_icon() {
        for theme in Theme::ALL {
            let expected = if theme == Theme::Light { ThemeIcon::Sun } else { ThemeIcon::Moon };
            assert_eq!(theme.icon(), expected, "{}", theme.as_str());
        }
    }
}
