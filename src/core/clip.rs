//! Rectangle clipping primitives shared by the trace pipeline.

use smallvec::SmallVec;

use crate::core::types::{PlotRect, ScreenPoint};

/// Clips the segment `p`..`q` against `rect` (Liang-Barsky).
///
/// Returns `true` when any portion of the segment remains, with `p` and `q`
/// updated in place to the clipped endpoints.
pub fn clip_segment(rect: PlotRect, p: &mut ScreenPoint, q: &mut ScreenPoint) -> bool {
    let dx = q.x - p.x;
    let dy = q.y - p.y;

    let mut t_enter = 0.0_f64;
    let mut t_exit = 1.0_f64;

    let edges = [
        (-dx, p.x - rect.left),
        (dx, rect.right - p.x),
        (-dy, p.y - rect.top),
        (dy, rect.bottom - p.y),
    ];

    for (denom, numer) in edges {
        if denom == 0.0 {
            if numer < 0.0 {
                return false;
            }
            continue;
        }
        let t = numer / denom;
        if denom < 0.0 {
            if t > t_exit {
                return false;
            }
            if t > t_enter {
                t_enter = t;
            }
        } else {
            if t < t_enter {
                return false;
            }
            if t < t_exit {
                t_exit = t;
            }
        }
    }

    // Interpolation can overshoot the boundary by one ulp; clamp so clipped
    // endpoints always satisfy boundary-inclusive containment.
    let start = *p;
    if t_exit < 1.0 {
        q.x = (start.x + t_exit * dx).clamp(rect.left, rect.right);
        q.y = (start.y + t_exit * dy).clamp(rect.top, rect.bottom);
    }
    if t_enter > 0.0 {
        p.x = (start.x + t_enter * dx).clamp(rect.left, rect.right);
        p.y = (start.y + t_enter * dy).clamp(rect.top, rect.bottom);
    }
    true
}

#[derive(Clone, Copy)]
enum Edge {
    Left(f64),
    Right(f64),
    Top(f64),
    Bottom(f64),
}

impl Edge {
    fn inside(self, point: ScreenPoint) -> bool {
        match self {
            Edge::Left(x) => point.x >= x,
            Edge::Right(x) => point.x <= x,
            Edge::Top(y) => point.y >= y,
            Edge::Bottom(y) => point.y <= y,
        }
    }

    fn intersect(self, a: ScreenPoint, b: ScreenPoint) -> ScreenPoint {
        match self {
            Edge::Left(x) | Edge::Right(x) => {
                let t = (x - a.x) / (b.x - a.x);
                ScreenPoint::new(x, a.y + t * (b.y - a.y))
            }
            Edge::Top(y) | Edge::Bottom(y) => {
                let t = (y - a.y) / (b.y - a.y);
                ScreenPoint::new(a.x + t * (b.x - a.x), y)
            }
        }
    }
}

/// Clips a polygon against `rect` (Sutherland-Hodgman, four half-plane passes).
///
/// The returned vertex list may be empty or degenerate (< 3 vertices) when the
/// polygon lies outside the rectangle; callers decide whether that is worth
/// keeping.
#[must_use]
pub fn clip_polygon(rect: PlotRect, points: &[ScreenPoint]) -> Vec<ScreenPoint> {
    if points.is_empty() {
        return Vec::new();
    }

    let edges = [
        Edge::Left(rect.left),
        Edge::Right(rect.right),
        Edge::Top(rect.top),
        Edge::Bottom(rect.bottom),
    ];

    let mut current: SmallVec<[ScreenPoint; 16]> = SmallVec::from_slice(points);
    for edge in edges {
        if current.is_empty() {
            break;
        }
        let mut next: SmallVec<[ScreenPoint; 16]> = SmallVec::new();
        for i in 0..current.len() {
            let a = current[i];
            let b = current[(i + 1) % current.len()];
            let a_in = edge.inside(a);
            let b_in = edge.inside(b);
            match (a_in, b_in) {
                (true, true) => next.push(b),
                (true, false) => next.push(edge.intersect(a, b)),
                (false, true) => {
                    next.push(edge.intersect(a, b));
                    next.push(b);
                }
                (false, false) => {}
            }
        }
        current = next;
    }

    current.into_vec()
}
