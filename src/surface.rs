use egui::{Pos2, Rect};

use crate::document::{Layer, LayerId};
use crate::element::{Element, ElementId};
use crate::error::SurfaceError;

/// Where an element sits on the surface: its parent container and the sibling
/// it is drawn beneath. `before: None` means "last child".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub parent: LayerId,
    pub before: Option<ElementId>,
}

impl Placement {
    /// Append as the topmost child of `parent`
    pub fn append(parent: LayerId) -> Self {
        Self { parent, before: None }
    }
}

/// The drawable-surface collaborator that commands and tools mutate.
///
/// Implementations own the elements that are currently shown. The trait is
/// object safe so commands and tools can work through `&mut dyn Surface`.
pub trait Surface {
    /// Insert `element` at `placement`. If the recorded sibling is no longer a
    /// child of the parent the element is appended instead.
    fn insert(&mut self, element: Element, placement: Placement) -> Result<(), SurfaceError>;

    /// Look up an element currently on the surface
    fn element(&self, id: ElementId) -> Option<&Element>;

    /// Detach an element, handing ownership back to the caller.
    fn remove(&mut self, id: ElementId) -> Option<Element>;

    /// Current parent and next sibling of an element
    fn placement_of(&self, id: ElementId) -> Option<Placement>;

    /// Position of an element in overall draw order (0 = bottom-most)
    fn stacking_index(&self, id: ElementId) -> Option<usize>;

    /// Whether the given parent container still exists
    fn has_parent(&self, parent: LayerId) -> bool;

    /// Detach a layer together with its elements. Returns the layer and the
    /// position it had in the stack.
    fn remove_layer(&mut self, id: LayerId) -> Option<(usize, Layer)>;

    /// Put a detached layer back at `index`, or on top if the stack is shorter.
    fn restore_layer(&mut self, index: usize, layer: Layer) -> Result<(), SurfaceError>;

    /// Ids of all elements whose painted area is within `tolerance` of `point`,
    /// topmost first.
    fn elements_at_point(&self, point: Pos2, tolerance: f32) -> Vec<ElementId>;

    /// Show (or hide) the in-progress element a tool is shaping.
    fn set_preview(&mut self, preview: Option<Element>);

    /// The surface's bounding box on screen
    fn screen_rect(&self) -> Rect;
}
