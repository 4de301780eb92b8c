//! tracegraph: trace synthesis and screen-space geometry for graph elements.
//!
//! This crate turns raw data-coordinate arrays into renderable, clipped,
//! smoothed, pen-styled polylines, fill polygons, and error-bar segments.
//! The finalized trace chain is the sole interface a rendering backend
//! consumes; backends never inspect raw data arrays directly.

pub mod core;
pub mod error;
pub mod telemetry;

pub use crate::core::{
    AxisTransform, ClosestSearch, Element, LinearAxes, Pen, PenDirection, PenTable, PlotRect,
    ScreenPoint, SearchAxis, Smoothing, Trace,
};
pub use error::{GraphError, GraphResult};
