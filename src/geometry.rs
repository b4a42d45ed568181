//! Pure coordinate math shared by the viewport, gesture tracking and hit-testing.

use egui::{Pos2, Rect};

/// Map a screen-space point inside `screen` into the logical rectangle `view`.
///
/// Returns `None` when `screen` has no area, since no linear mapping exists.
pub fn screen_to_logical(point: Pos2, screen: Rect, view: Rect) -> Option<Pos2> {
    if !has_area(screen) {
        return None;
    }

    let ratio = view.size() / screen.size();
    Some(Pos2::new(
        (point.x - screen.left()) * ratio.x + view.left(),
        (point.y - screen.top()) * ratio.y + view.top(),
    ))
}

/// Inverse of [`screen_to_logical`].
pub fn logical_to_screen(point: Pos2, screen: Rect, view: Rect) -> Option<Pos2> {
    if !has_area(view) {
        return None;
    }

    let ratio = screen.size() / view.size();
    Some(Pos2::new(
        (point.x - view.left()) * ratio.x + screen.left(),
        (point.y - view.top()) * ratio.y + screen.top(),
    ))
}

/// Euclidean distance between two touch points
pub fn pinch_distance(a: Pos2, b: Pos2) -> f32 {
    a.distance(b)
}

/// Midpoint between two touch points
pub fn midpoint(a: Pos2, b: Pos2) -> Pos2 {
    Pos2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Distance from `point` to the segment `start..end`.
pub fn distance_to_segment(point: Pos2, start: Pos2, end: Pos2) -> f32 {
    let segment = end - start;
    let length_sq = segment.length_sq();
    if length_sq == 0.0 {
        return point.distance(start);
    }

    let t = ((point - start).dot(segment) / length_sq).clamp(0.0, 1.0);
    point.distance(start + segment * t)
}

/// Distance from `point` to the polyline through `points`.
///
/// A single point is treated as a dot; an empty polyline is infinitely far away.
pub fn distance_to_polyline(point: Pos2, points: &[Pos2]) -> f32 {
    match points {
        [] => f32::INFINITY,
        [only] => point.distance(*only),
        _ => points
            .windows(2)
            .map(|pair| distance_to_segment(point, pair[0], pair[1]))
            .fold(f32::INFINITY, f32::min),
    }
}

fn has_area(rect: Rect) -> bool {
    rect.width() > 0.0
        && rect.height() > 0.0
        && rect.width().is_finite()
        && rect.height().is_finite()
}
