use std::fmt;

use uuid::Uuid;

use crate::element::{Element, ElementId};

/// A unique identifier for a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(Uuid);

impl LayerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered container of elements; later elements are drawn on top
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    id: LayerId,
    /// Display name of the layer
    pub name: String,
    /// Whether the layer is currently visible
    pub visible: bool,
    elements: Vec<Element>,
}

impl Layer {
    pub fn new(name: &str) -> Self {
        Self {
            id: LayerId::new(),
            name: name.to_string(),
            visible: true,
            elements: Vec::new(),
        }
    }

    pub fn id(&self) -> LayerId {
        self.id
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn position(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|element| element.id() == id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.position(id).is_some()
    }

    /// Insert before the sibling `before`, or on top when it is `None` or not
    /// a child of this layer.
    pub(crate) fn insert_before(&mut self, element: Element, before: Option<ElementId>) {
        let index = before
            .and_then(|sibling| self.position(sibling))
            .unwrap_or(self.elements.len());
        self.elements.insert(index, element);
    }

    pub(crate) fn remove(&mut self, id: ElementId) -> Option<Element> {
        let index = self.position(id)?;
        Some(self.elements.remove(index))
    }

    /// The element drawn directly above `id`
    pub(crate) fn next_sibling(&self, id: ElementId) -> Option<ElementId> {
        let index = self.position(id)?;
        self.elements.get(index + 1).map(Element::id)
    }

    pub(crate) fn clear(&mut self) {
        self.elements.clear();
    }
}
