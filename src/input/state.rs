use egui::Pos2;

use super::InputEvent;

/// Phase of a single touch point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    Cancelled,
}

impl From<egui::TouchPhase> for TouchPhase {
    fn from(phase: egui::TouchPhase) -> Self {
        match phase {
            egui::TouchPhase::Start => Self::Started,
            egui::TouchPhase::Move => Self::Moved,
            egui::TouchPhase::End => Self::Ended,
            egui::TouchPhase::Cancel => Self::Cancelled,
        }
    }
}

/// The set of fingers currently on the surface, in the order they touched down
#[derive(Debug, Clone, Default)]
pub struct TouchState {
    active: Vec<(u64, Pos2)>,
}

impl TouchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions of all active touches
    pub fn positions(&self) -> Vec<Pos2> {
        self.active.iter().map(|(_, pos)| *pos).collect()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Apply one touch update and produce the matching event. Moves of
    /// touches that were never started are dropped.
    pub fn update(&mut self, id: u64, phase: TouchPhase, pos: Pos2) -> Option<InputEvent> {
        match phase {
            TouchPhase::Started => {
                match self.active.iter_mut().find(|(touch, _)| *touch == id) {
                    Some(entry) => entry.1 = pos,
                    None => self.active.push((id, pos)),
                }
                Some(InputEvent::TouchStart { touches: self.positions() })
            }
            TouchPhase::Moved => {
                let entry = self.active.iter_mut().find(|(touch, _)| *touch == id)?;
                entry.1 = pos;
                Some(InputEvent::TouchMove { touches: self.positions() })
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                let index = self.active.iter().position(|(touch, _)| *touch == id)?;
                self.active.remove(index);
                Some(InputEvent::TouchEnd { touches: self.positions() })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_touch_lifecycle() {
        let mut touches = TouchState::new();
        assert_eq!(
            touches.update(1, TouchPhase::Started, pos2(0.0, 0.0)),
            Some(InputEvent::TouchStart { touches: vec![pos2(0.0, 0.0)] })
        );
        touches.update(2, TouchPhase::Started, pos2(10.0, 0.0));
        assert_eq!(
            touches.update(2, TouchPhase::Moved, pos2(20.0, 0.0)),
            Some(InputEvent::TouchMove { touches: vec![pos2(0.0, 0.0), pos2(20.0, 0.0)] })
        );
        assert_eq!(
            touches.update(1, TouchPhase::Ended, pos2(0.0, 0.0)),
            Some(InputEvent::TouchEnd { touches: vec![pos2(20.0, 0.0)] })
        );
        assert_eq!(touches.len(), 1);
    }

    #[test]
    fn test_unknown_touch_ignored() {
        let mut touches = TouchState::new();
        assert_eq!(touches.update(7, TouchPhase::Moved, pos2(1.0, 1.0)), None);
        assert_eq!(touches.update(7, TouchPhase::Cancelled, pos2(1.0, 1.0)), None);
        assert!(touches.is_empty());
    }
}
