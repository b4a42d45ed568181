//! In-memory drawing surface: ordered layers of elements plus the preview slot.

use egui::{Pos2, Rect, Vec2};

pub use crate::layer::{Layer, LayerId};

use crate::element::{Element, ElementId};
use crate::error::SurfaceError;
use crate::surface::{Placement, Surface};

#[derive(Debug, Clone)]
pub struct Document {
    layers: Vec<Layer>,
    active_layer: usize,
    preview: Option<Element>,
    screen_rect: Rect,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// A document with a single empty layer
    pub fn new() -> Self {
        Self {
            layers: vec![Layer::new("Layer 1")],
            active_layer: 0,
            preview: None,
            screen_rect: Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0)),
        }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.id() == id)
    }

    fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|layer| layer.id() == id)
    }

    pub fn active_layer(&self) -> Option<&Layer> {
        self.layers.get(self.active_layer)
    }

    pub fn active_layer_id(&self) -> Option<LayerId> {
        self.active_layer().map(Layer::id)
    }

    pub fn set_active_layer(&mut self, id: LayerId) -> Result<(), SurfaceError> {
        let index = self
            .layers
            .iter()
            .position(|layer| layer.id() == id)
            .ok_or(SurfaceError::LayerNotFound(id))?;
        self.active_layer = index;
        Ok(())
    }

    /// Add a new layer on top and make it active
    pub fn add_layer(&mut self, name: &str) -> LayerId {
        let layer = Layer::new(name);
        let id = layer.id();
        self.layers.push(layer);
        self.active_layer = self.layers.len() - 1;
        log::info!("Added layer {} ({})", name, id);
        id
    }

    pub fn set_layer_visible(&mut self, id: LayerId, visible: bool) {
        if let Some(layer) = self.layer_mut(id) {
            layer.visible = visible;
        }
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.element(id).is_some()
    }

    /// All elements in draw order, bottom-most first
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.layers.iter().flat_map(|layer| layer.elements())
    }

    /// Visible elements in draw order, bottom-most first
    pub fn visible_elements(&self) -> impl Iterator<Item = &Element> {
        self.layers
            .iter()
            .filter(|layer| layer.visible)
            .flat_map(|layer| layer.elements())
    }

    /// Ids of all elements in draw order
    pub fn element_ids(&self) -> Vec<ElementId> {
        self.elements().map(Element::id).collect()
    }

    pub fn len(&self) -> usize {
        self.layers.iter().map(Layer::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(Layer::is_empty)
    }

    pub fn preview(&self) -> Option<&Element> {
        self.preview.as_ref()
    }

    /// Remove every element from every layer. History is not touched; the
    /// caller resets it separately.
    pub fn clear(&mut self) {
        for layer in &mut self.layers {
            layer.clear();
        }
        self.preview = None;
    }

    /// The canvas bounding box on screen
    pub fn screen_rect(&self) -> Rect {
        self.screen_rect
    }

    pub fn set_screen_rect(&mut self, rect: Rect) {
        self.screen_rect = rect;
    }
}

impl Surface for Document {
    fn insert(&mut self, element: Element, placement: Placement) -> Result<(), SurfaceError> {
        if self.contains(element.id()) {
            return Err(SurfaceError::DuplicateElement(element.id()));
        }
        let layer = self
            .layer_mut(placement.parent)
            .ok_or(SurfaceError::LayerNotFound(placement.parent))?;
        layer.insert_before(element, placement.before);
        Ok(())
    }

    fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements().find(|element| element.id() == id)
    }

    fn remove(&mut self, id: ElementId) -> Option<Element> {
        self.layers.iter_mut().find_map(|layer| layer.remove(id))
    }

    fn placement_of(&self, id: ElementId) -> Option<Placement> {
        self.layers.iter().find(|layer| layer.contains(id)).map(|layer| Placement {
            parent: layer.id(),
            before: layer.next_sibling(id),
        })
    }

    fn stacking_index(&self, id: ElementId) -> Option<usize> {
        self.elements().position(|element| element.id() == id)
    }

    fn has_parent(&self, parent: LayerId) -> bool {
        self.layer(parent).is_some()
    }

    fn remove_layer(&mut self, id: LayerId) -> Option<(usize, Layer)> {
        let index = self.layers.iter().position(|layer| layer.id() == id)?;
        let layer = self.layers.remove(index);
        if self.active_layer >= index && self.active_layer > 0 {
            self.active_layer -= 1;
        }
        log::info!("Removed layer {} ({} elements)", layer.name, layer.len());
        Some((index, layer))
    }

    fn restore_layer(&mut self, index: usize, layer: Layer) -> Result<(), SurfaceError> {
        if self.has_parent(layer.id()) {
            return Err(SurfaceError::DuplicateLayer(layer.id()));
        }
        let index = index.min(self.layers.len());
        // Keep the same layer active
        if !self.layers.is_empty() && self.active_layer >= index {
            self.active_layer += 1;
        }
        log::info!("Restored layer {} at {}", layer.name, index);
        self.layers.insert(index, layer);
        Ok(())
    }

    fn elements_at_point(&self, point: Pos2, tolerance: f32) -> Vec<ElementId> {
        let mut hits: Vec<ElementId> = self
            .visible_elements()
            .filter(|element| element.hit_test(point, tolerance))
            .map(Element::id)
            .collect();
        hits.reverse();
        hits
    }

    fn set_preview(&mut self, preview: Option<Element>) {
        self.preview = preview;
    }

    fn screen_rect(&self) -> Rect {
        self.screen_rect
    }
}
