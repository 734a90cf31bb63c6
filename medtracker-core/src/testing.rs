use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::dom::{PageDocument, PageElement};
use crate::error::PageError;

#[derive(Debug, Default)]
struct FakeNode {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: HashMap<String, String>,
    text: RefCell<String>,
    value: RefCell<Option<String>>,
}

#[derive(Debug, Clone)]
pub struct FakeElement(Rc<FakeNode>);

impl FakeElement {
    pub fn tag(&self) -> &str {
        &self.0.tag
    }
}

impl PageElement for FakeElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.attributes.get(name).cloned()
    }

    fn text(&self) -> String {
        self.0.text.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        *self.0.text.borrow_mut() = text.to_string();
    }

    fn value(&self) -> Option<String> {
        self.0.value.borrow().clone()
    }

    fn set_value(&self, value: &str) -> bool {
        let mut slot = self.0.value.borrow_mut();
        match slot.as_mut() {
            Some(current) => {
                *current = value.to_string();
                true
            }
            None => false,
        }
    }
}

/// In-memory document: a flat list of elements in insertion order.
#[derive(Debug, Default)]
pub struct FakeDocument {
    nodes: RefCell<Vec<FakeElement>>,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, node: FakeNode) -> FakeElement {
        let element = FakeElement(Rc::new(node));
        self.nodes.borrow_mut().push(element.clone());
        element
    }

    pub fn add_with_id(&self, tag: &str, id: &str, text: &str) -> FakeElement {
        self.push(FakeNode {
            tag: tag.to_string(),
            id: Some(id.to_string()),
            text: RefCell::new(text.to_string()),
            ..FakeNode::default()
        })
    }

    pub fn add_with_class(
        &self,
        class: &str,
        attributes: &[(&str, &str)],
        text: &str,
    ) -> FakeElement {
        self.push(FakeNode {
            tag: "span".to_string(),
            classes: vec![class.to_string()],
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            text: RefCell::new(text.to_string()),
            ..FakeNode::default()
        })
    }

    pub fn add_input(&self, class: &str, attributes: &[(&str, &str)], value: &str) -> FakeElement {
        self.push(FakeNode {
            tag: "input".to_string(),
            classes: vec![class.to_string()],
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            value: RefCell::new(Some(value.to_string())),
            ..FakeNode::default()
        })
    }

    pub fn count_by_id(&self, id: &str) -> usize {
        self.nodes
            .borrow()
            .iter()
            .filter(|n| n.0.id.as_deref() == Some(id))
            .count()
    }
}

impl PageDocument for FakeDocument {
    type Element = FakeElement;

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.nodes
            .borrow()
            .iter()
            .find(|n| n.0.id.as_deref() == Some(id))
            .cloned()
    }

    fn elements_by_class(&self, class: &str) -> Vec<FakeElement> {
        self.nodes
            .borrow()
            .iter()
            .filter(|n| n.0.classes.iter().any(|c| c == class))
            .cloned()
            .collect()
    }

    fn create_style_element(&self, id: &str) -> Result<FakeElement, PageError> {
        Ok(self.add_with_id("style", id, ""))
    }
}
