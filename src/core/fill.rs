//! Area-under-curve fill polygons.

use tracing::trace;

use crate::core::arena::PointArena;
use crate::core::axis::AxisTransform;
use crate::core::clip::clip_polygon;
use crate::core::trace::Trace;
use crate::core::types::ScreenPoint;

/// Builds the fill polygon for every trace in the chain.
///
/// Must run after smoothing (so the curve shape is final) and before style
/// or viewport splitting (so the polygon reflects the whole trace rather
/// than a clip fragment). The polygon is the trace's point run extended by
/// two vertices down to the plot's baseline edge (bottom edge, or the left
/// edge under inverted axes), then clipped to the plot rectangle. A clipped
/// result with fewer than three vertices produces no fill.
pub fn build_fill_polygons<A: AxisTransform>(traces: &mut [Trace], axes: &A, points: &PointArena) {
    let rect = axes.plot_rect();
    let inverted = axes.inverted();

    for trace_item in traces.iter_mut() {
        if trace_item.num_points < 2 {
            trace_item.fill = None;
            continue;
        }

        let mut vertices: Vec<ScreenPoint> = Vec::with_capacity(trace_item.num_points + 2);
        vertices.extend(trace_item.iter(points).map(|(_, point)| point.pos));

        let first = vertices[0];
        let last = vertices[vertices.len() - 1];
        if inverted {
            vertices.push(ScreenPoint::new(rect.left, last.y));
            vertices.push(ScreenPoint::new(rect.left, first.y));
        } else {
            vertices.push(ScreenPoint::new(last.x, rect.bottom));
            vertices.push(ScreenPoint::new(first.x, rect.bottom));
        }

        let clipped = clip_polygon(rect, &vertices);
        if clipped.len() < 3 {
            trace!(
                vertices = clipped.len(),
                "fill polygon degenerate after clipping, omitted"
            );
            trace_item.fill = None;
        } else {
            trace_item.fill = Some(clipped);
        }
    }
}
