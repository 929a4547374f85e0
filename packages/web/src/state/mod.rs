//! Global UI state: category tabs, theme, bookmarks

use dioxus::prelude::*;

use catalog::{BookmarkStore, Category};

use crate::storage::{load_theme, persist_theme, BrowserStorage};

/// Category tab strip model for the browsing screens
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CategoryTab {
    #[default]
    All,
    Notes,
    Videos,
    Documents,
    Papers,
}

impl CategoryTab {
    pub fn label(&self) -> &'static str {
        match self {
            CategoryTab::All => "All Resources",
            CategoryTab::Notes => "Notes",
            CategoryTab::Videos => "Video Lectures",
            CategoryTab::Documents => "Documents",
            CategoryTab::Papers => "Question Papers",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CategoryTab::All => "\u{1F4DA}",       // 📚
            CategoryTab::Notes => "\u{1F4DD}",     // 📝
            CategoryTab::Videos => "\u{1F3AC}",    // 🎬
            CategoryTab::Documents => "\u{1F4C4}", // 📄
            CategoryTab::Papers => "\u{1F4DC}",    // 📜
        }
    }

    pub fn variants() -> &'static [CategoryTab] {
        &[
            CategoryTab::All,
            CategoryTab::Notes,
            CategoryTab::Videos,
            CategoryTab::Documents,
            CategoryTab::Papers,
        ]
    }

    /// Stable token used in query params.
    pub fn slug(&self) -> &'static str {
        match self {
            CategoryTab::All => "all",
            CategoryTab::Notes => "notes",
            CategoryTab::Videos => "videos",
            CategoryTab::Documents => "documents",
            CategoryTab::Papers => "papers",
        }
    }

    /// Unknown or empty tokens fall back to `All`.
    pub fn from_slug(slug: &str) -> CategoryTab {
        CategoryTab::variants()
            .iter()
            .copied()
            .find(|tab| tab.slug() == slug)
            .unwrap_or(CategoryTab::All)
    }

    /// The category criterion this tab contributes; `None` means "all"
    /// (the criterion stays inactive).
    pub fn as_criterion(&self) -> Option<Category> {
        match self {
            CategoryTab::All => None,
            CategoryTab::Notes => Some(Category::Note),
            CategoryTab::Videos => Some(Category::Video),
            CategoryTab::Documents => Some(Category::Document),
            CategoryTab::Papers => Some(Category::Paper),
        }
    }
}

/// Color theme
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

/// Theme state shared through context
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: Signal<Theme>,
}

impl ThemeState {
    pub fn is_dark(&self) -> bool {
        *self.theme.read() == Theme::Dark
    }

    /// Class applied at the app root; styles key off the `dark` ancestor.
    pub fn root_class(&self) -> &'static str {
        match *self.theme.read() {
            Theme::Light => "theme-light",
            Theme::Dark => "dark theme-dark",
        }
    }

    pub fn toggle(&self) {
        let next = match *self.theme.peek() {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        let mut theme = self.theme;
        theme.set(next);
        persist_theme(next);
    }
}

/// Theme provider component that wraps the app
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let mut theme = use_signal(|| Theme::Light);

    use_context_provider(|| ThemeState { theme });

    // Hydrate from persisted storage once the client is up
    use_effect(move || {
        if let Some(saved) = load_theme() {
            theme.set(saved);
        }
    });

    children
}

/// Hook to access the theme state
pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>()
}

/// Bookmark state shared through context, backed by browser storage
#[derive(Clone, Copy)]
pub struct BookmarkState {
    store: Signal<BookmarkStore<BrowserStorage>>,
}

impl BookmarkState {
    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.store.read().contains(id)
    }

    pub fn count(&self) -> usize {
        self.store.read().len()
    }

    pub fn toggle(&self, id: &str) {
        let mut store = self.store;
        if let Err(err) = store.write().toggle(id) {
            tracing::warn!(%err, "failed to persist bookmark change");
        };
    }
}

/// Bookmark provider component that wraps the app
#[component]
pub fn BookmarkProvider(children: Element) -> Element {
    let store = use_signal(|| BookmarkStore::hydrate(BrowserStorage));

    use_context_provider(|| BookmarkState { store });

    children
}

/// Hook to access the bookmark state
pub fn use_bookmarks() -> BookmarkState {
    use_context::<BookmarkState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tab_is_inactive_criterion() {
        assert_eq!(CategoryTab::All.as_criterion(), None);
        assert_eq!(CategoryTab::default(), CategoryTab::All);
    }

    #[test]
    fn test_tab_slug_round_trip() {
        for tab in CategoryTab::variants() {
            assert_eq!(CategoryTab::from_slug(tab.slug()), *tab);
        }
        assert_eq!(CategoryTab::from_slug(""), CategoryTab::All);
        assert_eq!(CategoryTab::from_slug("astrology"), CategoryTab::All);
    }

    #[test]
    fn test_tabs_cover_every_category() {
        let covered: Vec<Category> = CategoryTab::variants()
            .iter()
            .filter_map(|t| t.as_criterion())
            .collect();
        assert_eq!(covered, Category::variants());
    }
}
