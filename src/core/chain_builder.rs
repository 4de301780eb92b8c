//! Raw coordinate arrays to the initial trace chain.

use tracing::trace;

use crate::core::arena::PointArena;
use crate::core::axis::AxisTransform;
use crate::core::pen::{PenDirection, PenTable};
use crate::core::trace::{PointFlags, Trace, TracePoint};

/// Builds the initial chain of traces covering all finite, non-hole data in
/// data-index order.
///
/// A pair with either coordinate non-finite is a hole: it terminates the
/// current trace and the next finite pair begins a new one. A transition
/// whose transformed X violates the direction constraint also starts a new
/// trace (the classic retrace break). Traces are instantiated lazily, so
/// leading holes never produce empty traces; no data at all is a no-op.
#[must_use]
pub fn build_trace_chain<A: AxisTransform>(
    x: &[f64],
    y: &[f64],
    direction: PenDirection,
    pens: &PenTable,
    axes: &A,
    points: &mut PointArena,
) -> Vec<Trace> {
    let mut traces: Vec<Trace> = Vec::new();

    let rect = axes.plot_rect();
    let pen_name = pens.default_pen_name();
    let pen = pens.pen_or_default(pen_name);
    let (symbol_size, cap_width) = (pen.symbol_size, pen.error_cap_width);

    let mut current: Option<Trace> = None;
    let mut prev_x: Option<f64> = None;

    let count = x.len().min(y.len());
    for index in 0..count {
        if !x[index].is_finite() || !y[index].is_finite() {
            // Hole: close the current trace, if any.
            if let Some(trace) = current.take() {
                traces.push(trace);
            }
            prev_x = None;
            continue;
        }

        let pos = axes.map(x[index], y[index]);
        let flags = PointFlags {
            visible: rect.contains(pos),
            knot: true,
            symbol: true,
            active: false,
        };
        let id = points.alloc(TracePoint {
            pos,
            data_index: index,
            flags,
            next: None,
        });

        let retrace = prev_x.is_some_and(|prev| direction.breaks_between(prev, pos.x));
        if retrace {
            if let Some(trace) = current.take() {
                traces.push(trace);
            }
        }

        let trace = current
            .get_or_insert_with(|| Trace::new(pen_name.to_owned(), symbol_size, cap_width));
        trace.push_point(points, id);
        prev_x = Some(pos.x);
    }

    if let Some(trace) = current.take() {
        traces.push(trace);
    }

    trace!(
        traces = traces.len(),
        points = points.len(),
        "built initial trace chain"
    );
    traces
}
