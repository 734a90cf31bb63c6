use medtracker_core::{PageDocument, PageElement, PageError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement};

pub(crate) fn dom_error(e: JsValue) -> PageError {
    PageError::Dom(format!("{:?}", e))
}

#[derive(Debug, Clone)]
pub struct WebElement(Element);

impl WebElement {
    pub fn as_element(&self) -> &Element {
        &self.0
    }
}

impl PageElement for WebElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn value(&self) -> Option<String> {
        self.0.dyn_ref::<HtmlInputElement>().map(|input| input.value())
    }

    fn set_value(&self, value: &str) -> bool {
        match self.0.dyn_ref::<HtmlInputElement>() {
            Some(input) => {
                input.set_value(value);
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WebDocument(Document);

impl WebDocument {
    pub fn new(document: Document) -> Self {
        Self(document)
    }
}

impl PageDocument for WebDocument {
    type Element = WebElement;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.0.get_element_by_id(id).map(WebElement)
    }

    fn elements_by_class(&self, class: &str) -> Vec<WebElement> {
        // The collection is live; snapshot it before anything is rewritten.
        let collection = self.0.get_elements_by_class_name(class);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .map(WebElement)
            .collect()
    }

    fn create_style_element(&self, id: &str) -> Result<WebElement, PageError> {
        let style = self.0.create_element("style").map_err(dom_error)?;
        style.set_id(id);

        let head = self
            .0
            .head()
            .ok_or_else(|| PageError::Dom("document has no <head>".to_string()))?;
        head.append_child(&style).map_err(dom_error)?;

        Ok(WebElement(style))
    }
}
