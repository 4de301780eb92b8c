//! Error-bar stem and cap segment generation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::arena::{PointArena, SegmentArena};
use crate::core::axis::AxisTransform;
use crate::core::clip::clip_segment;
use crate::core::trace::{Trace, TraceSegment};
use crate::core::types::ScreenPoint;

/// Which error direction a segment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorDirection {
    XHigh,
    XLow,
    YHigh,
    YLow,
}

impl ErrorDirection {
    #[must_use]
    pub fn is_x(self) -> bool {
        matches!(self, ErrorDirection::XHigh | ErrorDirection::XLow)
    }
}

/// Error values for one axis.
///
/// `high`/`low` hold explicit endpoint values and take precedence; the
/// `symmetric` sequence holds relative errors applied as `value ± error`.
/// Missing or out-of-range entries mean "no segment" for that direction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorData {
    pub symmetric: Option<Vec<f64>>,
    pub high: Option<Vec<f64>>,
    pub low: Option<Vec<f64>>,
}

impl ErrorData {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symmetric.is_none() && self.high.is_none() && self.low.is_none()
    }

    /// Endpoint value for one direction, or NaN when absent.
    fn endpoint(&self, value: f64, index: usize, high: bool) -> f64 {
        let explicit = if high { &self.high } else { &self.low };
        if let Some(endpoint) = explicit.as_ref().and_then(|v| v.get(index)) {
            return *endpoint;
        }
        match self.symmetric.as_ref().and_then(|v| v.get(index)) {
            Some(error) if high => value + error,
            Some(error) => value - error,
            None => f64::NAN,
        }
    }
}

/// Generates stem+cap segments for every knot that is still visible.
///
/// Must run after all trace splitting: segments are not re-partitioned when
/// a trace splits, so they are attached to the trace that finally owns
/// their knot. Segments that clip to nothing are discarded.
pub fn generate_error_bars<A: AxisTransform>(
    traces: &mut [Trace],
    x: &[f64],
    y: &[f64],
    x_error: &ErrorData,
    y_error: &ErrorData,
    axes: &A,
    points: &PointArena,
    segments: &mut SegmentArena,
) {
    if x_error.is_empty() && y_error.is_empty() {
        return;
    }

    let rect = axes.plot_rect();
    let inverted = axes.inverted();
    let mut emitted = 0_usize;

    for trace_item in traces.iter_mut() {
        let knots: Vec<(ScreenPoint, usize)> = trace_item
            .iter(points)
            .filter(|(_, point)| point.flags.knot && point.flags.visible)
            .map(|(_, point)| (point.pos, point.data_index))
            .collect();

        let cap = trace_item.error_cap_width;
        for (pos, index) in knots {
            if index >= x.len() || index >= y.len() {
                continue;
            }

            let mut candidates: SmallVec<[(ScreenPoint, ScreenPoint, ErrorDirection); 8]> =
                SmallVec::new();
            let directions = [
                (ErrorDirection::XHigh, true),
                (ErrorDirection::XLow, false),
                (ErrorDirection::YHigh, true),
                (ErrorDirection::YLow, false),
            ];
            for (direction, high) in directions {
                let endpoint_value = if direction.is_x() {
                    x_error.endpoint(x[index], index, high)
                } else {
                    y_error.endpoint(y[index], index, high)
                };
                if !endpoint_value.is_finite() {
                    continue;
                }

                let endpoint = if direction.is_x() {
                    axes.map(endpoint_value, y[index])
                } else {
                    axes.map(x[index], endpoint_value)
                };

                candidates.push((pos, endpoint, direction));

                // Cap perpendicular to the stem's screen orientation; the
                // axis-inversion swap is what makes X-error caps horizontal
                // on an inverted graph.
                let vertical_cap = direction.is_x() != inverted;
                let (cap_p, cap_q) = if vertical_cap {
                    (
                        ScreenPoint::new(endpoint.x, endpoint.y - cap),
                        ScreenPoint::new(endpoint.x, endpoint.y + cap),
                    )
                } else {
                    (
                        ScreenPoint::new(endpoint.x - cap, endpoint.y),
                        ScreenPoint::new(endpoint.x + cap, endpoint.y),
                    )
                };
                candidates.push((cap_p, cap_q, direction));
            }

            for (mut p, mut q, direction) in candidates {
                if !clip_segment(rect, &mut p, &mut q) {
                    continue;
                }
                let id = segments.alloc(TraceSegment {
                    p,
                    q,
                    data_index: index,
                    direction,
                    next: None,
                });
                trace_item.prepend_segment(segments, id);
                emitted += 1;
            }
        }
    }

    trace!(segments = emitted, "generated error-bar segments");
}
