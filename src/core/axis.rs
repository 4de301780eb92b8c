use serde::{Deserialize, Serialize};

use crate::core::types::{PlotRect, ScreenPoint};
use crate::error::{GraphError, GraphResult};

/// Data-space to screen-space transform consumed by the trace pipeline.
///
/// Implementations must stay stable for the duration of one remap.
pub trait AxisTransform {
    /// Maps a data-space pair to screen space.
    fn map(&self, x: f64, y: f64) -> ScreenPoint;

    /// Maps a screen-space point back to data space.
    fn inv_map(&self, point: ScreenPoint) -> (f64, f64);

    /// Current plotting rectangle, screen space.
    fn plot_rect(&self) -> PlotRect;

    /// True when the value axis runs horizontally (x and y screen roles swap).
    fn inverted(&self) -> bool;
}

/// Linear axis pair over a plot rectangle.
///
/// Pixel Y grows downward, so larger data Y maps toward `rect.top`. Under
/// `inverted`, the x data axis runs vertically and the y data axis
/// horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearAxes {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    rect: PlotRect,
    inverted: bool,
}

impl LinearAxes {
    pub fn new(x_domain: (f64, f64), y_domain: (f64, f64), rect: PlotRect) -> GraphResult<Self> {
        validate_domain(x_domain, "x")?;
        validate_domain(y_domain, "y")?;
        if !rect.is_valid() {
            return Err(GraphError::InvalidPlotRect {
                left: rect.left,
                top: rect.top,
                right: rect.right,
                bottom: rect.bottom,
            });
        }
        Ok(Self {
            x_min: x_domain.0,
            x_max: x_domain.1,
            y_min: y_domain.0,
            y_max: y_domain.1,
            rect,
            inverted: false,
        })
    }

    #[must_use]
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    fn x_to_horizontal(&self, x: f64) -> f64 {
        let norm = (x - self.x_min) / (self.x_max - self.x_min);
        self.rect.left + norm * self.rect.width()
    }

    fn y_to_vertical(&self, y: f64) -> f64 {
        let norm = (y - self.y_min) / (self.y_max - self.y_min);
        self.rect.bottom - norm * self.rect.height()
    }

    fn x_to_vertical(&self, x: f64) -> f64 {
        let norm = (x - self.x_min) / (self.x_max - self.x_min);
        self.rect.bottom - norm * self.rect.height()
    }

    fn y_to_horizontal(&self, y: f64) -> f64 {
        let norm = (y - self.y_min) / (self.y_max - self.y_min);
        self.rect.left + norm * self.rect.width()
    }
}

impl AxisTransform for LinearAxes {
    fn map(&self, x: f64, y: f64) -> ScreenPoint {
        if self.inverted {
            ScreenPoint::new(self.y_to_horizontal(y), self.x_to_vertical(x))
        } else {
            ScreenPoint::new(self.x_to_horizontal(x), self.y_to_vertical(y))
        }
    }

    fn inv_map(&self, point: ScreenPoint) -> (f64, f64) {
        let x_span = self.x_max - self.x_min;
        let y_span = self.y_max - self.y_min;
        if self.inverted {
            let x = self.x_min + (self.rect.bottom - point.y) / self.rect.height() * x_span;
            let y = self.y_min + (point.x - self.rect.left) / self.rect.width() * y_span;
            (x, y)
        } else {
            let x = self.x_min + (point.x - self.rect.left) / self.rect.width() * x_span;
            let y = self.y_min + (self.rect.bottom - point.y) / self.rect.height() * y_span;
            (x, y)
        }
    }

    fn plot_rect(&self) -> PlotRect {
        self.rect
    }

    fn inverted(&self) -> bool {
        self.inverted
    }
}

fn validate_domain(domain: (f64, f64), axis: &str) -> GraphResult<()> {
    if !domain.0.is_finite() || !domain.1.is_finite() || domain.0 == domain.1 {
        return Err(GraphError::InvalidData(format!(
            "{axis} axis domain must be finite and non-degenerate"
        )));
    }
    Ok(())
}
