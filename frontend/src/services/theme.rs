//! Theme preference persistence.
//!
//! The preference lives under a single `localStorage` key and is applied
//! as a class on the document root element. A stored value of "dark", or
//! no stored value at all, selects the dark theme; anything else selects
//! light. Requires a browser environment.

use crate::services::logging::Logger;

const STORAGE_KEY: &str = "promo-admin-theme";
const LIGHT_CLASS: &str = "light-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    fn storage_value(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// Classify a stored preference value. Dark is the default: an absent key
/// and the literal "dark" both select it.
pub fn classify(stored: Option<&str>) -> Theme {
    match stored {
        None | Some("dark") => Theme::Dark,
        Some(_) => Theme::Light,
    }
}

/// Read the persisted theme preference from localStorage.
pub fn read_preference() -> Theme {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
    classify(stored.as_deref())
}

/// Apply or remove the light-theme class on the document root element.
pub fn apply(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());

    if let Some(el) = root {
        let class_list = el.class_list();
        let result = match theme {
            Theme::Light => class_list.add_1(LIGHT_CLASS),
            Theme::Dark => class_list.remove_1(LIGHT_CLASS),
        };
        if result.is_err() {
            Logger::warn_with_component("theme", "Failed to update the document theme class");
        }
    }
}

/// Switch to the other theme, persist the new preference, and apply it.
pub fn toggle(current: Theme) -> Theme {
    let next = match current {
        Theme::Dark => Theme::Light,
        Theme::Light => Theme::Dark,
    };

    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY, next.storage_value());
    }

    apply(next);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_classify_defaults_to_dark() {
        assert_eq!(classify(None), Theme::Dark);
        assert_eq!(classify(Some("dark")), Theme::Dark);
    }

    #[wasm_bindgen_test]
    fn test_classify_anything_else_is_light() {
        assert_eq!(classify(Some("light")), Theme::Light);
        assert_eq!(classify(Some("banana")), Theme::Light);
        assert_eq!(classify(Some("")), Theme::Light);
    }

    #[wasm_bindgen_test]
    fn test_apply_sets_and_clears_root_class() {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .unwrap();

        apply(Theme::Light);
        assert!(root.class_list().contains(LIGHT_CLASS));

        apply(Theme::Dark);
        assert!(!root.class_list().contains(LIGHT_CLASS));
    }

    #[wasm_bindgen_test]
    fn test_toggle_persists_preference() {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .unwrap();
        storage.remove_item(STORAGE_KEY).unwrap();

        let next = toggle(Theme::Dark);
        assert_eq!(next, Theme::Light);
        assert_eq!(
            storage.get_item(STORAGE_KEY).unwrap().as_deref(),
            Some("light")
        );
        assert_eq!(read_preference(), Theme::Light);

        let next = toggle(next);
        assert_eq!(next, Theme::Dark);
        assert_eq!(read_preference(), Theme::Dark);
    }
}
