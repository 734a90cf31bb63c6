//! The slice of the DOM the enhancements need.
//!
//! The browser adapter implements these over `web_sys::Document` and
//! `web_sys::Element`; tests use an in-memory document.

use crate::error::PageError;

/// Handle to one element. Handles are cheap to clone and share the node.
pub trait PageElement: Clone {
    fn attribute(&self, name: &str) -> Option<String>;

    fn text(&self) -> String;

    /// Replaces all children with a single text node.
    fn set_text(&self, text: &str);

    /// Current value of a form control; `None` for other elements.
    fn value(&self) -> Option<String>;

    /// Sets the value of a form control. Returns `false` for other elements.
    fn set_value(&self, value: &str) -> bool;
}

pub trait PageDocument {
    type Element: PageElement;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// All elements carrying `class`, in document order.
    fn elements_by_class(&self, class: &str) -> Vec<Self::Element>;

    fn first_by_class(&self, class: &str) -> Option<Self::Element> {
        self.elements_by_class(class).into_iter().next()
    }

    /// Creates a `<style>` element with `id` and appends it to `<head>`.
    fn create_style_element(&self, id: &str) -> Result<Self::Element, PageError>;
}
