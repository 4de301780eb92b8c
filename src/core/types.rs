use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Point in screen (pixel) space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Plotting rectangle in screen space, bounds inclusive.
///
/// Follows the usual pixel orientation: `top < bottom`, `left < right`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotRect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> GraphResult<Self> {
        let rect = Self {
            left,
            top,
            right,
            bottom,
        };
        if !rect.is_valid() {
            return Err(GraphError::InvalidPlotRect {
                left,
                top,
                right,
                bottom,
            });
        }
        Ok(rect)
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
            && self.left < self.right
            && self.top < self.bottom
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    /// Boundary-inclusive containment test.
    #[must_use]
    pub fn contains(self, point: ScreenPoint) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }
}
