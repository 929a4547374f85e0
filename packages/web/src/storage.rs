//! Browser persistence adapters
//!
//! `localStorage`-backed implementations of the catalog storage seams. On the
//! server build (SSR) these are no-ops; hydration on the client reads the
//! real persisted state.

use catalog::{BookmarkStorage, CatalogError};

use crate::state::Theme;

#[cfg(feature = "web")]
const BOOKMARKS_KEY: &str = "studyvault.bookmarks";
#[cfg(feature = "web")]
const THEME_KEY: &str = "studyvault.theme";

#[cfg(feature = "web")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Bookmark persistence in `localStorage` as a JSON string array
pub struct BrowserStorage;

impl BookmarkStorage for BrowserStorage {
    fn load(&self) -> Result<Vec<String>, CatalogError> {
        #[cfg(feature = "web")]
        {
            let Some(storage) = local_storage() else {
                return Ok(Vec::new());
            };
            return match storage.get_item(BOOKMARKS_KEY) {
                Ok(Some(raw)) => serde_json::from_str(&raw)
                    .map_err(|e| CatalogError::Storage(e.to_string())),
                Ok(None) => Ok(Vec::new()),
                Err(_) => Err(CatalogError::Storage("localStorage read failed".into())),
            };
        }
        #[cfg(not(feature = "web"))]
        return Ok(Vec::new());
    }

    fn save(&self, ids: &[String]) -> Result<(), CatalogError> {
        #[cfg(feature = "web")]
        {
            let Some(storage) = local_storage() else {
                return Ok(());
            };
            let raw = serde_json::to_string(ids)
                .map_err(|e| CatalogError::Storage(e.to_string()))?;
            return storage
                .set_item(BOOKMARKS_KEY, &raw)
                .map_err(|_| CatalogError::Storage("localStorage write failed".into()));
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = ids;
            return Ok(());
        }
    }
}

/// Persisted theme, if the browser has one saved
pub fn load_theme() -> Option<Theme> {
    #[cfg(feature = "web")]
    {
        let saved = local_storage()?.get_item(THEME_KEY).ok().flatten()?;
        return Some(match saved.as_str() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        });
    }
    #[cfg(not(feature = "web"))]
    return None;
}

/// Write the theme choice through to the browser
pub fn persist_theme(theme: Theme) {
    #[cfg(feature = "web")]
    if let Some(storage) = local_storage() {
        let value = match theme {
            Theme::Dark => "dark",
            Theme::Light => "light",
        };
        let _ = storage.set_item(THEME_KEY, value);
    }
    #[cfg(not(feature = "web"))]
    let _ = theme;
}
