//! Smoothing engine: injects generated points between existing knots.
//!
//! Four interchangeable algorithms. None of them removes or reorders
//! existing points, and none changes the knot/visible status of existing
//! points. Every algorithm fails soft: when a spline cannot be constructed
//! (degenerate geometry, non-monotonic abscissae) the trace is left
//! completely unmodified, never partially smoothed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::arena::{PointArena, PointId};
use crate::core::axis::AxisTransform;
use crate::core::clip::clip_segment;
use crate::core::pen::PenTable;
use crate::core::spline::{Spline1D, catmull_rom};
use crate::core::trace::{PointFlags, Trace, TracePoint};
use crate::core::types::{PlotRect, ScreenPoint};

/// Parameter step for parametric walks, screen units.
const PARAMETRIC_STEP: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Smoothing {
    #[default]
    None,
    /// Right-angle steps between adjacent knots.
    Step,
    /// Natural cubic spline of screen Y over screen X; requires strictly
    /// increasing X.
    Natural,
    /// Independent X(t)/Y(t) natural splines over cumulative arc length.
    Parametric,
    /// Catmull-Rom basis with per-segment local parameterization.
    CatmullRom,
}

/// Whether a smoothing pass modified the trace. Silent-abort policy: a
/// failed precondition yields `Unchanged`, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmoothOutcome {
    Smoothed,
    Unchanged,
}

/// Applies `mode` to every eligible trace in the chain.
///
/// A trace is eligible when its pen has nonzero line width and it has at
/// least two points (more than three for the spline variants).
pub fn smooth_traces<A: AxisTransform>(
    traces: &mut [Trace],
    mode: Smoothing,
    pens: &PenTable,
    axes: &A,
    points: &mut PointArena,
) {
    if mode == Smoothing::None {
        return;
    }
    for trace in traces.iter_mut() {
        if pens.pen_or_default(&trace.pen).line_width <= 0.0 {
            continue;
        }
        let outcome = smooth_trace(trace, mode, axes, points);
        if outcome == SmoothOutcome::Unchanged && trace.num_points > 3 {
            debug!(
                points = trace.num_points,
                ?mode,
                "smoothing precondition not met, trace left unsmoothed"
            );
        }
    }
}

/// Applies `mode` to one trace. See the module docs for the fail-soft
/// contract.
pub fn smooth_trace<A: AxisTransform>(
    trace: &mut Trace,
    mode: Smoothing,
    axes: &A,
    points: &mut PointArena,
) -> SmoothOutcome {
    let min_points = match mode {
        Smoothing::None => return SmoothOutcome::Unchanged,
        Smoothing::Step => 2,
        Smoothing::Natural | Smoothing::Parametric | Smoothing::CatmullRom => 4,
    };
    if trace.num_points < min_points {
        return SmoothOutcome::Unchanged;
    }

    let knots = collect_knots(trace, points);
    let rect = axes.plot_rect();

    let generated = match mode {
        Smoothing::None => return SmoothOutcome::Unchanged,
        Smoothing::Step => generate_step(&knots, axes.inverted()),
        Smoothing::Natural => generate_natural(&knots, rect),
        Smoothing::Parametric => generate_parametric(&knots, rect),
        Smoothing::CatmullRom => generate_catmull_rom(&knots, rect),
    };

    let Some(generated) = generated else {
        return SmoothOutcome::Unchanged;
    };
    if generated.iter().all(Vec::is_empty) {
        return SmoothOutcome::Unchanged;
    }

    splice(trace, &knots, generated, rect, points);
    SmoothOutcome::Smoothed
}

struct Knot {
    id: PointId,
    pos: ScreenPoint,
    data_index: usize,
}

fn collect_knots(trace: &Trace, points: &PointArena) -> Vec<Knot> {
    trace
        .iter(points)
        .map(|(id, point)| Knot {
            id,
            pos: point.pos,
            data_index: point.data_index,
        })
        .collect()
}

/// Inserts the generated samples for each adjacent knot pair into the point
/// list, in list order between the pair's two original knots.
fn splice(
    trace: &mut Trace,
    knots: &[Knot],
    generated: Vec<Vec<ScreenPoint>>,
    rect: PlotRect,
    points: &mut PointArena,
) {
    for (pair, samples) in knots.windows(2).zip(generated) {
        if samples.is_empty() {
            continue;
        }
        let mut prev = pair[0].id;
        let tail_next = points.get(pair[0].id).next;
        for pos in samples {
            let id = points.alloc(TracePoint {
                pos,
                data_index: pair[0].data_index,
                flags: PointFlags {
                    visible: rect.contains(pos),
                    knot: false,
                    symbol: false,
                    active: false,
                },
                next: tail_next,
            });
            points.get_mut(prev).next = Some(id);
            prev = id;
            trace.num_points += 1;
        }
    }
}

fn generate_step(knots: &[Knot], inverted: bool) -> Option<Vec<Vec<ScreenPoint>>> {
    let mut generated = Vec::with_capacity(knots.len() - 1);
    for pair in knots.windows(2) {
        let (p, q) = (pair[0].pos, pair[1].pos);
        let corner = if inverted {
            ScreenPoint::new(p.x, q.y)
        } else {
            ScreenPoint::new(q.x, p.y)
        };
        generated.push(vec![corner]);
    }
    Some(generated)
}

fn generate_natural(knots: &[Knot], rect: PlotRect) -> Option<Vec<Vec<ScreenPoint>>> {
    let xs: Vec<f64> = knots.iter().map(|k| k.pos.x).collect();
    let ys: Vec<f64> = knots.iter().map(|k| k.pos.y).collect();

    // Entirely left or right of the plot: nothing visible to sample.
    let first_x = *xs.first()?;
    let last_x = *xs.last()?;
    if last_x < rect.left || first_x > rect.right {
        return None;
    }

    let spline = Spline1D::fit(&xs, &ys)?;

    let mut generated = Vec::with_capacity(knots.len() - 1);
    for pair in knots.windows(2) {
        let lo = pair[0].pos.x.max(rect.left);
        let hi = pair[1].pos.x.min(rect.right);
        let mut samples = Vec::new();
        // One sample per integer pixel column strictly between the segment's
        // visible X bounds.
        let mut x = lo.floor() + 1.0;
        while x < hi {
            samples.push(ScreenPoint::new(x, spline.eval(x)));
            x += 1.0;
        }
        generated.push(samples);
    }
    Some(generated)
}

fn generate_parametric(knots: &[Knot], rect: PlotRect) -> Option<Vec<Vec<ScreenPoint>>> {
    let mut params = Vec::with_capacity(knots.len());
    let mut arc = 0.0_f64;
    params.push(0.0);
    for pair in knots.windows(2) {
        arc += pair[0].pos.distance_to(pair[1].pos);
        params.push(arc);
    }

    let xs: Vec<f64> = knots.iter().map(|k| k.pos.x).collect();
    let ys: Vec<f64> = knots.iter().map(|k| k.pos.y).collect();
    let spline_x = Spline1D::fit(&params, &xs)?;
    let spline_y = Spline1D::fit(&params, &ys)?;

    let mut generated = Vec::with_capacity(knots.len() - 1);
    for (i, pair) in knots.windows(2).enumerate() {
        let mut samples = Vec::new();
        let mut start = pair[0].pos;
        let mut end = pair[1].pos;
        if clip_segment(rect, &mut start, &mut end) {
            let t_begin = params[i] + pair[0].pos.distance_to(start);
            let t_end = params[i] + pair[0].pos.distance_to(end);
            let mut t = if t_begin > params[i] {
                t_begin
            } else {
                params[i] + PARAMETRIC_STEP
            };
            while t < t_end {
                samples.push(ScreenPoint::new(spline_x.eval(t), spline_y.eval(t)));
                t += PARAMETRIC_STEP;
            }
        }
        generated.push(samples);
    }
    Some(generated)
}

fn generate_catmull_rom(knots: &[Knot], rect: PlotRect) -> Option<Vec<Vec<ScreenPoint>>> {
    let n = knots.len();
    let at = |i: isize| -> ScreenPoint {
        // Duplicate boundary knots as phantom neighbors.
        let clamped = i.clamp(0, n as isize - 1) as usize;
        knots[clamped].pos
    };

    let mut generated = Vec::with_capacity(n - 1);
    for i in 0..n - 1 {
        let mut samples = Vec::new();
        let p0 = at(i as isize - 1);
        let p1 = knots[i].pos;
        let p2 = knots[i + 1].pos;
        let p3 = at(i as isize + 2);

        let seg_len = p1.distance_to(p2);
        if seg_len > 0.0 {
            let mut start = p1;
            let mut end = p2;
            if clip_segment(rect, &mut start, &mut end) {
                let step = PARAMETRIC_STEP / seg_len;
                let t_begin = p1.distance_to(start) / seg_len;
                let t_end = p1.distance_to(end) / seg_len;
                let mut t = if t_begin > 0.0 { t_begin } else { step };
                while t < t_end {
                    let x = catmull_rom(p0.x, p1.x, p2.x, p3.x, t);
                    let y = catmull_rom(p0.y, p1.y, p2.y, p3.y, t);
                    samples.push(ScreenPoint::new(x, y));
                    t += step;
                }
            }
        }
        generated.push(samples);
    }
    Some(generated)
}
