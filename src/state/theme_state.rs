// ============================================================================
// THEME STATE - Light/dark preference persisted under `theme`
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::utils::constants::THEME_KEY;
use crate::utils::storage::KeyValueStore;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
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

    /// Anything but "light" is dark, the app's default look
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn toggle_title(&self) -> &'static str {
        match self {
            Theme::Light => "Switch to Dark Mode",
            Theme::Dark => "Switch to Light Mode",
        }
    }

    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

#[derive(Clone)]
pub struct ThemeState {
    theme: Rc<RefCell<Theme>>,
    store: Rc<dyn KeyValueStore>,
}

impl ThemeState {
    pub fn load(store: Rc<dyn KeyValueStore>) -> Self {
        let theme = Theme::parse(store.get(THEME_KEY).as_deref());
        Self {
            theme: Rc::new(RefCell::new(theme)),
            store,
        }
    }

    pub fn current(&self) -> Theme {
        *self.theme.borrow()
    }

    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        *self.theme.borrow_mut() = next;
        if let Err(e) = self.store.set(THEME_KEY, next.as_str()) {
            log::warn!("⚠️ [THEME] Could not persist theme: {}", e);
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;

    #[test]
    fn defaults_to_dark() {
        let theme = ThemeState::load(Rc::new(MemoryStorage::new()));
        assert_eq!(theme.current(), Theme::Dark);
    }

    #[test]
    fn toggle_persists_the_new_theme() {
        let store = MemoryStorage::new();
        let theme = ThemeState::load(Rc::new(store.clone()));

        assert_eq!(theme.toggle(), Theme::Light);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));

        let reloaded = ThemeState::load(Rc::new(store));
        assert_eq!(reloaded.current(), Theme::Light);
    }
}
