use tracing::info;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    /// Icon of the theme the toggle switches to.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette {
                background: "#F8F9FC",
                surface: "#FFFFFF",
                heading: "#2D3348",
                text: "#4A5680",
                accent: "#91a1d1",
                accent_strong: "#91a1d1",
            },
            Self::Dark => Palette {
                background: "#23283C",
                surface: "#2D3348",
                heading: "#CCCDFA",
                text: "#CCCDFA",
                accent: "#91a1d1",
                accent_strong: "#8B9FE8",
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub heading: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
    pub accent_strong: &'static str,
}

impl Palette {
    /// CSS custom properties consumed by the stylesheet.
    pub fn css_variables(&self) -> String {
        format!(
            "--color-bg: {}; --color-surface: {}; --color-heading: {}; --color-text: {}; --color-accent: {}; --color-accent-strong: {};",
            self.background, self.surface, self.heading, self.text, self.accent, self.accent_strong
        )
    }
}

/// Where the chosen theme survives between visits.
pub trait ThemeStorage {
    fn load(&self) -> Option<Theme>;
    fn save(&self, theme: Theme);
    fn prefers_dark(&self) -> bool;
}

/// Session-long owner of the current theme. Created once at the page root.
#[derive(Debug)]
pub struct ThemeStore<S> {
    theme: Theme,
    storage: S,
}

impl<S: ThemeStorage> ThemeStore<S> {
    /// Stored choice first, then the system preference.
    pub fn open(storage: S) -> Self {
        let theme = storage.load().unwrap_or_else(|| {
            if storage.prefers_dark() {
                Theme::Dark
            } else {
                Theme::Light
            }
        });

        Self { theme, storage }
    }

    pub fn get_theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.storage.save(self.theme);
        info!(theme = self.theme.as_str(), "theme toggled");
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[derive(Debug, Default)]
    struct MemoryStorage {
        stored: Cell<Option<Theme>>,
        prefers_dark: bool,
    }

    impl MemoryStorage {
        fn new(stored: Option<Theme>, prefers_dark: bool) -> Self {
            Self {
                stored: Cell::new(stored),
                prefers_dark,
            }
        }

        fn stored(&self) -> Option<Theme> {
            self.stored.get()
        }
    }

    impl ThemeStorage for &MemoryStorage {
        fn load(&self) -> Option<Theme> {
            self.stored.get()
        }

        fn save(&self, theme: Theme) {
            self.stored.set(Some(theme));
        }

        fn prefers_dark(&self) -> bool {
            self.prefers_dark
        }
    }

    #[test]
    fn stored_theme_wins_over_system_preference() {
        let storage = MemoryStorage::new(Some(Theme::Light), true);
        let store = ThemeStore::open(&storage);
        assert_eq!(store.get_theme(), Theme::Light);
    }

    #[test]
    fn falls_back_to_system_preference() {
        let (prefers_dark, prefers_light) =
            (MemoryStorage::new(None, true), MemoryStorage::new(None, false));
        let dark = ThemeStore::open(&prefers_dark);
        let light = ThemeStore::open(&prefers_light);

        assert_eq!(dark.get_theme(), Theme::Dark);
        assert_eq!(light.get_theme(), Theme::Light);
    }

    #[test]
    fn toggle_flips_and_persists() {
        let storage = MemoryStorage::default();
        let mut store = ThemeStore::open(&storage);

        assert_eq!(store.toggle_theme(), Theme::Dark);
        assert_eq!(storage.stored(), Some(Theme::Dark));
        assert_eq!(store.toggle_theme(), Theme::Light);
        assert_eq!(storage.stored(), Some(Theme::Light));
    }

    #[test]
    fn parses_only_known_names() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse(" light\n"), Some(Theme::Light));
        assert_eq!(Theme::parse("dim"), None);
    }

    #[test]
    fn labels_name_the_next_theme() {
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
    }

    #[test]
    fn palettes_differ_per_theme() {
        let css = Theme::Dark.palette().css_variables();
        assert!(css.contains("--color-bg: #23283C;"));
        assert_ne!(Theme::Light.palette(), Theme::Dark.palette());
    }
}
