use std::cell::Cell;

use crate::config::PageConfig;
use crate::dom::{PageDocument, PageElement};
use crate::error::PageError;
use crate::store::{KeyValueStore, ThemePreference};
use crate::theme::Theme;

/// Returns the style-holding element, creating it when the page has none.
/// Calling this repeatedly never yields a second element.
pub fn ensure_style_element<D: PageDocument>(
    document: &D,
    id: &str,
) -> Result<D::Element, PageError> {
    if let Some(existing) = document.element_by_id(id) {
        return Ok(existing);
    }

    log::debug!("Creating <style id=\"{}\">", id);
    document.create_style_element(id)
}

/// Owns the active theme: the injected CSS, the toggle label and the
/// persisted preference move together through [`ThemeController::apply`].
pub struct ThemeController<E, S> {
    style: E,
    toggle: Option<E>,
    preference: ThemePreference<S>,
    current: Cell<Theme>,
}

impl<E: PageElement, S: KeyValueStore> ThemeController<E, S> {
    /// Ensures the style element, reads the stored preference and applies it.
    pub fn install<D>(document: &D, config: &PageConfig, store: S) -> Result<Self, PageError>
    where
        D: PageDocument<Element = E>,
    {
        let style = ensure_style_element(document, &config.style_element_id)?;

        let toggle = document.element_by_id(&config.toggle_element_id);
        if toggle.is_none() {
            log::debug!(
                "No #{} element, theme toggle unavailable",
                config.toggle_element_id
            );
        }

        let preference = ThemePreference::new(store, config.storage_key.clone());
        let initial = preference.read();

        let controller = Self {
            style,
            toggle,
            preference,
            current: Cell::new(initial),
        };
        controller.apply(initial);

        Ok(controller)
    }

    pub fn apply(&self, theme: Theme) {
        self.style.set_text(theme.css());

        if let Some(toggle) = &self.toggle {
            toggle.set_text(theme.toggle_label());
        }

        self.current.set(theme);
        self.preference.write(theme);
        log::debug!("Applied {} theme", theme);
    }

    /// Flips the active theme and returns the new one.
    pub fn toggle(&self) -> Theme {
        let next = self.current.get().toggled();
        self.apply(next);
        next
    }

    pub fn current(&self) -> Theme {
        self.current.get()
    }

    pub fn toggle_element(&self) -> Option<&E> {
        self.toggle.as_ref()
    }

    pub fn preference(&self) -> &ThemePreference<S> {
        &self.preference
    }
}
