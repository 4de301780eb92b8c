pub mod arena;
pub mod axis;
pub mod chain_builder;
pub mod clip;
pub mod element;
pub mod error_bars;
pub mod fill;
pub mod pen;
pub mod smoothing;
pub mod spline;
pub mod style_split;
pub mod trace;
pub mod types;
pub mod viewport_clip;

pub use arena::{PointArena, PointId, SegmentArena, SegmentId};
pub use axis::{AxisTransform, LinearAxes};
pub use element::Element;
pub use error_bars::{ErrorData, ErrorDirection};
pub use hit_test::{ClosestHit, ClosestSearch, SearchAxis};
pub use pen::{Color, Pen, PenDirection, PenTable, WeightRange};
pub use smoothing::{SmoothOutcome, Smoothing};
pub use spline::Spline1D;
pub use trace::{PointFlags, Trace, TracePoint, TraceSegment};
pub use types::{PlotRect, ScreenPoint};
