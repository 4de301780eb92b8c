//! Weight-driven pen assignment and trace splitting.

use tracing::trace;

use crate::core::arena::PointArena;
use crate::core::pen::PenTable;
use crate::core::trace::{Trace, fix_up_traces};

/// Assigns every point to a pen via the weight-range table and splits each
/// trace at the first point whose resolved pen differs from the trace's
/// current pen.
///
/// At a pen change at point `q`, `q` is duplicated as a non-knot point that
/// terminates the current trace, and a new trace begins at the original `q`
/// with the new pen and that pen's resolved symbol size and error-cap
/// width. A global fix-up pass then recomputes counts and tails and drops
/// empty traces.
#[must_use]
pub fn split_by_pen(
    traces: Vec<Trace>,
    weights: Option<&[f64]>,
    pens: &PenTable,
    points: &mut PointArena,
) -> Vec<Trace> {
    // Without weight data every point resolves to the default pen; the
    // chain is already homogeneous.
    if weights.is_none() {
        return traces;
    }

    let input_count = traces.len();
    let mut out: Vec<Trace> = Vec::with_capacity(input_count);

    for trace_item in traces {
        let ids = trace_item.point_ids(points);
        let Some(&first) = ids.first() else {
            continue;
        };

        let mut current = trace_item;
        let mut current_pen =
            pens.resolve_for_index(weights, points.get(first).data_index).to_owned();
        let resolved = pens.pen_or_default(&current_pen);
        current.pen = current_pen.clone();
        current.symbol_size = resolved.symbol_size;
        current.error_cap_width = resolved.error_cap_width;

        let mut prev = first;
        for &qid in &ids[1..] {
            let pen_name = pens.resolve_for_index(weights, points.get(qid).data_index);
            if pen_name != current_pen {
                // Duplicate q to terminate the current trace; the original q
                // becomes the head of the new trace.
                let mut boundary = *points.get(qid);
                boundary.flags.knot = false;
                boundary.flags.symbol = false;
                boundary.flags.active = false;
                boundary.next = None;
                let dup = points.alloc(boundary);
                points.get_mut(prev).next = Some(dup);
                out.push(current);

                let pen = pens.pen_or_default(pen_name);
                current = Trace::new(pen_name, pen.symbol_size, pen.error_cap_width);
                current.head = Some(qid);
                current_pen = pen_name.to_owned();
            }
            prev = qid;
        }
        out.push(current);
    }

    let fixed = fix_up_traces(out, points);
    trace!(
        input = input_count,
        output = fixed.len(),
        "split traces at pen boundaries"
    );
    fixed
}
