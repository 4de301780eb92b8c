//! Viewport clipper: splits traces against the plot rectangle.

use tracing::trace;

use crate::core::arena::PointArena;
use crate::core::clip::clip_segment;
use crate::core::pen::PenTable;
use crate::core::trace::{PointFlags, Trace, TracePoint, fix_up_traces};
use crate::core::types::PlotRect;

/// Clips every trace against the plot rectangle, producing sub-traces whose
/// segments are each fully on-screen or exactly clipped at the boundary.
///
/// Per adjacent pair (p, q):
/// - both visible: advance;
/// - p visible, q not: the clipped boundary point terminates the current
///   trace (visible, non-knot) and a new trace begins at q, carrying the
///   closing trace's pen, symbol size, and error-cap width;
/// - p not visible, q visible: p is overwritten in place with the clipped
///   boundary point, marked visible and demoted from knot;
/// - neither visible: p (the current head) is dropped.
///
/// Traces with fewer than two points, or whose pen has zero line width, are
/// left untouched; symbols-only traces are never clip-split.
#[must_use]
pub fn clip_traces(
    traces: Vec<Trace>,
    rect: PlotRect,
    pens: &PenTable,
    points: &mut PointArena,
) -> Vec<Trace> {
    let input_count = traces.len();
    let mut out: Vec<Trace> = Vec::with_capacity(input_count);

    for trace_item in traces {
        if trace_item.num_points < 2 || pens.pen_or_default(&trace_item.pen).line_width <= 0.0 {
            out.push(trace_item);
            continue;
        }
        clip_one(trace_item, rect, points, &mut out);
    }

    let fixed = fix_up_traces(out, points);
    trace!(
        input = input_count,
        output = fixed.len(),
        "clipped traces against plot rectangle"
    );
    fixed
}

fn clip_one(trace_item: Trace, rect: PlotRect, points: &mut PointArena, out: &mut Vec<Trace>) {
    let mut current = trace_item;
    let mut p = match current.head {
        Some(head) => head,
        None => return,
    };

    while let Some(q) = points.get(p).next {
        let p_visible = points.get(p).flags.visible;
        let q_visible = points.get(q).flags.visible;

        match (p_visible, q_visible) {
            (true, true) => {
                p = q;
            }
            (true, false) => {
                // Exiting the plot: terminate with the boundary point, then
                // restart from q.
                let mut a = points.get(p).pos;
                let mut b = points.get(q).pos;
                if clip_segment(rect, &mut a, &mut b) {
                    let boundary = points.alloc(TracePoint {
                        pos: b,
                        data_index: points.get(p).data_index,
                        flags: PointFlags {
                            visible: true,
                            knot: false,
                            symbol: false,
                            active: false,
                        },
                        next: None,
                    });
                    points.get_mut(p).next = Some(boundary);
                } else {
                    points.get_mut(p).next = None;
                }

                let mut next_trace =
                    Trace::new(current.pen.clone(), current.symbol_size, current.error_cap_width);
                next_trace.head = Some(q);
                out.push(std::mem::replace(&mut current, next_trace));
                p = q;
            }
            (false, true) => {
                // Entering the plot: overwrite p with the boundary point. It
                // no longer sits at an original data position, so it is
                // demoted from knot.
                let mut a = points.get(p).pos;
                let mut b = points.get(q).pos;
                if clip_segment(rect, &mut a, &mut b) {
                    let point = points.get_mut(p);
                    point.pos = a;
                    point.flags.visible = true;
                    point.flags.knot = false;
                    point.flags.symbol = false;
                }
                p = q;
            }
            (false, false) => {
                // Wholly off-screen head; drop it.
                current.head = Some(q);
                p = q;
            }
        }
    }

    // A trailing single off-screen point would leave a wholly invisible
    // trace behind; discard it.
    let lone_invisible = current.head == Some(p)
        && points.get(p).next.is_none()
        && !points.get(p).flags.visible;
    if !lone_invisible {
        out.push(current);
    }
}
