use crate::document::{Layer, LayerId};
use crate::element::{Element, ElementId, ElementKind};
use crate::error::SurfaceError;
use crate::surface::{Placement, Surface};

/// A reversible mutation of the drawing surface
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add a finished freehand stroke on top of `parent`
    Draw { element: Element, parent: LayerId },

    /// Add a finished rectangle, circle or line on top of `parent`
    Shape { element: Element, parent: LayerId },

    /// Remove a set of elements, remembering where each one sat
    Erase(EraseCommand),

    /// Remove a whole layer; `layer` is its content at removal time and
    /// `index` its position in the stack
    RemoveLayer { layer: Layer, index: usize },
}

impl Command {
    /// Perform the mutation on the surface
    pub fn apply(&self, surface: &mut dyn Surface) -> Result<(), SurfaceError> {
        match self {
            Self::Draw { element, parent } | Self::Shape { element, parent } => {
                surface.insert(element.clone(), Placement::append(*parent))
            }
            Self::Erase(erase) => {
                erase.apply(surface);
                Ok(())
            }
            Self::RemoveLayer { layer, .. } => surface
                .remove_layer(layer.id())
                .map(|_| ())
                .ok_or(SurfaceError::LayerNotFound(layer.id())),
        }
    }

    /// Undo the mutation. Must only be called after a successful `apply`.
    pub fn revert(&self, surface: &mut dyn Surface) {
        match self {
            Self::Draw { element, .. } | Self::Shape { element, .. } => {
                if surface.remove(element.id()).is_none() {
                    log::debug!("{} revert: element {} already gone", self.name(), element.id());
                }
            }
            Self::Erase(erase) => erase.revert(surface),
            Self::RemoveLayer { layer, index } => {
                if let Err(err) = surface.restore_layer(*index, layer.clone()) {
                    log::warn!("Remove layer revert: {}", err);
                }
            }
        }
    }

    /// Short label for history listings
    pub fn name(&self) -> &'static str {
        match self {
            Self::Draw { .. } => "Draw",
            Self::Shape { element, .. } => match element.kind() {
                ElementKind::Rectangle => "Rectangle",
                ElementKind::Circle => "Circle",
                ElementKind::Line => "Line",
                ElementKind::Path => "Shape",
            },
            Self::Erase(_) => "Erase",
            Self::RemoveLayer { .. } => "Remove layer",
        }
    }
}

/// Removal of one or more elements.
///
/// Entries are kept in removal order, each with the placement it had just
/// before it was removed. Reverting walks the list backwards, so a recorded
/// sibling that was erased in the same command is always back in place before
/// anything is inserted in front of it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EraseCommand {
    erased: Vec<(Element, Placement)>,
}

impl EraseCommand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an unapplied erase of `ids`. Ids not on the surface are ignored,
    /// duplicates collapse, and removal runs bottom-most first.
    pub fn capture(surface: &dyn Surface, ids: &[ElementId]) -> Self {
        let mut ordered: Vec<(usize, ElementId)> = ids
            .iter()
            .filter_map(|id| surface.stacking_index(*id).map(|index| (index, *id)))
            .collect();
        ordered.sort_by_key(|(index, _)| *index);
        ordered.dedup_by_key(|(index, _)| *index);

        // Removing lower elements never changes the next sibling of a higher
        // one, so current placements equal the ones seen at removal time.
        let erased = ordered
            .into_iter()
            .filter_map(|(_, id)| {
                let placement = surface.placement_of(id)?;
                let element = surface.element(id)?.clone();
                Some((element, placement))
            })
            .collect();

        Self { erased }
    }

    /// Remove `ids` from the surface right away, appending them to this
    /// command. Returns how many elements were actually removed.
    pub fn erase_now(&mut self, surface: &mut dyn Surface, ids: &[ElementId]) -> usize {
        let mut removed = 0;
        for &id in ids {
            let Some(placement) = surface.placement_of(id) else {
                continue;
            };
            if let Some(element) = surface.remove(id) {
                self.erased.push((element, placement));
                removed += 1;
            }
        }
        removed
    }

    pub fn is_empty(&self) -> bool {
        self.erased.is_empty()
    }

    pub fn len(&self) -> usize {
        self.erased.len()
    }

    /// Erased elements with their recorded placements, in removal order
    pub fn erased(&self) -> &[(Element, Placement)] {
        &self.erased
    }

    fn apply(&self, surface: &mut dyn Surface) {
        for (element, _) in &self.erased {
            surface.remove(element.id());
        }
    }

    fn revert(&self, surface: &mut dyn Surface) {
        for (element, placement) in self.erased.iter().rev() {
            if !surface.has_parent(placement.parent) {
                log::debug!(
                    "Erase revert: layer {} is gone, skipping {}",
                    placement.parent,
                    element.id()
                );
                continue;
            }
            if let Err(err) = surface.insert(element.clone(), *placement) {
                log::warn!("Erase revert: could not restore {}: {}", element.id(), err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::element::StrokeStyle;
    use egui::pos2;

    fn seeded(count: usize) -> (Document, LayerId, Vec<ElementId>) {
        let mut doc = Document::new();
        let layer = doc.active_layer_id().unwrap();
        let mut ids = Vec::new();
        for i in 0..count {
            let element = Element::path(pos2(i as f32 * 10.0, 0.0), StrokeStyle::default());
            ids.push(element.id());
            doc.insert(element, Placement::append(layer)).unwrap();
        }
        (doc, layer, ids)
    }

    #[test]
    fn test_draw_apply_and_revert() {
        let mut doc = Document::new();
        let layer = doc.active_layer_id().unwrap();
        let element = Element::path(pos2(1.0, 1.0), StrokeStyle::default());
        let id = element.id();
        let command = Command::Draw { element, parent: layer };

        command.apply(&mut doc).unwrap();
        assert!(doc.contains(id));
        command.revert(&mut doc);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_capture_orders_by_stacking_and_dedups() {
        let (doc, _, ids) = seeded(3);
        let erase = EraseCommand::capture(&doc, &[ids[2], ids[0], ids[2]]);

        let erased: Vec<ElementId> = erase.erased().iter().map(|(e, _)| e.id()).collect();
        assert_eq!(erased, vec![ids[0], ids[2]]);
    }

    #[test]
    fn test_erase_restores_sibling_order() {
        let (mut doc, _, ids) = seeded(3);
        let command = Command::Erase(EraseCommand::capture(&doc, &[ids[0], ids[2]]));

        command.apply(&mut doc).unwrap();
        assert_eq!(doc.element_ids(), vec![ids[1]]);
        command.revert(&mut doc);
        assert_eq!(doc.element_ids(), ids);
    }

    #[test]
    fn test_erase_now_topmost_first_restores_order() {
        let (mut doc, _, ids) = seeded(3);
        let mut erase = EraseCommand::new();

        assert_eq!(erase.erase_now(&mut doc, &[ids[1], ids[0]]), 2);
        assert_eq!(erase.erase_now(&mut doc, &[ids[0]]), 0);
        assert_eq!(doc.element_ids(), vec![ids[2]]);

        Command::Erase(erase).revert(&mut doc);
        assert_eq!(doc.element_ids(), ids);
    }

    #[test]
    fn test_erase_revert_skips_missing_layer() {
        let mut doc = Document::new();
        let keep = doc.active_layer_id().unwrap();
        let doomed = doc.add_layer("Doomed");

        let a = Element::path(pos2(0.0, 0.0), StrokeStyle::default());
        let b = Element::path(pos2(5.0, 0.0), StrokeStyle::default());
        let (a_id, b_id) = (a.id(), b.id());
        doc.insert(a, Placement::append(keep)).unwrap();
        doc.insert(b, Placement::append(doomed)).unwrap();

        let command = Command::Erase(EraseCommand::capture(&doc, &[a_id, b_id]));
        command.apply(&mut doc).unwrap();
        doc.remove_layer(doomed);

        command.revert(&mut doc);
        assert_eq!(doc.element_ids(), vec![a_id]);
    }

    #[test]
    fn test_erase_revert_appends_when_sibling_missing() {
        let (mut doc, layer, ids) = seeded(2);
        let command = Command::Erase(EraseCommand::capture(&doc, &[ids[0]]));
        command.apply(&mut doc).unwrap();

        doc.remove(ids[1]);
        let late = Element::path(pos2(50.0, 0.0), StrokeStyle::default());
        let late_id = late.id();
        doc.insert(late, Placement::append(layer)).unwrap();

        command.revert(&mut doc);
        assert_eq!(doc.element_ids(), vec![late_id, ids[0]]);
    }

    #[test]
    fn test_remove_layer_round_trip() {
        let (mut doc, base, ids) = seeded(2);
        let top = doc.add_layer("Top");
        let above = Element::path(pos2(0.0, 0.0), StrokeStyle::default());
        let above_id = above.id();
        doc.insert(above, Placement::append(top)).unwrap();

        let layer = doc.layer(base).unwrap().clone();
        let command = Command::RemoveLayer { layer, index: 0 };
        command.apply(&mut doc).unwrap();
        assert_eq!(doc.element_ids(), vec![above_id]);
        assert_eq!(command.apply(&mut doc), Err(SurfaceError::LayerNotFound(base)));

        command.revert(&mut doc);
        assert_eq!(doc.element_ids(), vec![ids[0], ids[1], above_id]);
        assert_eq!(command.name(), "Remove layer");
    }
}
