//! Graph element: data model plus the remap pipeline entry point.

use tracing::debug;

use crate::core::arena::{PointArena, SegmentArena};
use crate::core::axis::AxisTransform;
use crate::core::chain_builder::build_trace_chain;
use crate::core::error_bars::{ErrorData, generate_error_bars};
use crate::core::fill::build_fill_polygons;
use crate::core::hit_test::{ClosestSearch, SearchAxis, closest_point, closest_segment};
use crate::core::pen::{Color, PenDirection, PenTable};
use crate::core::smoothing::{Smoothing, smooth_traces};
use crate::core::style_split::split_by_pen;
use crate::core::trace::Trace;
use crate::core::types::ScreenPoint;
use crate::core::viewport_clip::clip_traces;
use crate::error::{GraphError, GraphResult};

/// One line/stripchart graph element.
///
/// Owns the raw coordinate sequences, optional per-point weights and error
/// values, styling configuration, and the trace chain with its backing
/// arenas. The chain is rebuilt in full by [`Element::remap`] whenever data,
/// axis range, or styling changes; the old chain and arenas are discarded
/// and replaced atomically. The finalized chain is the sole surface a
/// rendering backend consumes.
#[derive(Debug, Clone, Default)]
pub struct Element {
    x: Vec<f64>,
    y: Vec<f64>,
    weights: Option<Vec<f64>>,
    x_error: ErrorData,
    y_error: ErrorData,
    smoothing: Smoothing,
    direction: PenDirection,
    pens: PenTable,
    area_fill: Option<Color>,
    active_indices: Vec<usize>,
    traces: Vec<Trace>,
    points: PointArena,
    segments: SegmentArena,
}

impl Element {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the coordinate sequences. Pairs with either value non-finite
    /// are holes; they stay in place and break traces during remap.
    pub fn set_data(&mut self, x: Vec<f64>, y: Vec<f64>) -> GraphResult<()> {
        if x.len() != y.len() {
            return Err(GraphError::InvalidData(format!(
                "coordinate sequences must have equal length: x={}, y={}",
                x.len(),
                y.len()
            )));
        }
        let holes = x
            .iter()
            .zip(y.iter())
            .filter(|(px, py)| !px.is_finite() || !py.is_finite())
            .count();
        debug!(count = x.len(), holes, "set element data");
        self.x = x;
        self.y = y;
        Ok(())
    }

    /// Replaces the weight sequence used for pen selection. The sequence may
    /// be shorter than the data; out-of-range indices use the default pen.
    pub fn set_weights(&mut self, weights: Vec<f64>) {
        debug!(count = weights.len(), "set element weights");
        self.weights = Some(weights);
    }

    pub fn clear_weights(&mut self) {
        self.weights = None;
    }

    /// Error values for the x axis; shorter sequences leave trailing points
    /// without error bars.
    pub fn set_x_error(&mut self, error: ErrorData) {
        self.x_error = error;
    }

    /// Error values for the y axis; shorter sequences leave trailing points
    /// without error bars.
    pub fn set_y_error(&mut self, error: ErrorData) {
        self.y_error = error;
    }

    pub fn set_smoothing(&mut self, smoothing: Smoothing) {
        self.smoothing = smoothing;
    }

    pub fn set_direction(&mut self, direction: PenDirection) {
        self.direction = direction;
    }

    pub fn set_pen_table(&mut self, pens: PenTable) {
        self.pens = pens;
    }

    #[must_use]
    pub fn pen_table(&self) -> &PenTable {
        &self.pens
    }

    pub fn pen_table_mut(&mut self) -> &mut PenTable {
        &mut self.pens
    }

    /// Enables (or disables, with `None`) the area-under-curve fill.
    pub fn set_area_fill(&mut self, fill: Option<Color>) {
        self.area_fill = fill;
    }

    /// Marks data indices as active for hit-test filtering. Applied on the
    /// next remap and to the current chain.
    pub fn mark_active(&mut self, indices: &[usize]) {
        self.active_indices = indices.to_vec();
        self.apply_active_flags();
    }

    fn apply_active_flags(&mut self) {
        for trace in &self.traces {
            for id in trace.point_ids(&self.points) {
                let point = self.points.get_mut(id);
                point.flags.active =
                    point.flags.knot && self.active_indices.contains(&point.data_index);
            }
        }
    }

    /// Rebuilds the trace chain from scratch against `axes`.
    ///
    /// Runs the full pipeline: chain building, smoothing, fill polygons,
    /// style splitting, viewport clipping, error bars. Single-threaded and
    /// synchronous; no other operation may observe the element mid-remap.
    pub fn remap<A: AxisTransform>(&mut self, axes: &A) -> GraphResult<()> {
        let rect = axes.plot_rect();
        if !rect.is_valid() {
            return Err(GraphError::InvalidPlotRect {
                left: rect.left,
                top: rect.top,
                right: rect.right,
                bottom: rect.bottom,
            });
        }

        // Drop the old chain before invalidating the arenas it points into.
        self.traces = Vec::new();
        self.points.clear();
        self.segments.clear();

        let mut traces = build_trace_chain(
            &self.x,
            &self.y,
            self.direction,
            &self.pens,
            axes,
            &mut self.points,
        );

        smooth_traces(&mut traces, self.smoothing, &self.pens, axes, &mut self.points);

        if self.area_fill.is_some() {
            build_fill_polygons(&mut traces, axes, &self.points);
        }

        let traces = split_by_pen(traces, self.weights.as_deref(), &self.pens, &mut self.points);
        let mut traces = clip_traces(traces, rect, &self.pens, &mut self.points);

        generate_error_bars(
            &mut traces,
            &self.x,
            &self.y,
            &self.x_error,
            &self.y_error,
            axes,
            &self.points,
            &mut self.segments,
        );

        self.traces = traces;
        self.apply_active_flags();

        debug!(
            traces = self.traces.len(),
            points = self.points.len(),
            segments = self.segments.len(),
            "remapped element"
        );
        Ok(())
    }

    /// Finalized trace chain, in data order.
    #[must_use]
    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    #[must_use]
    pub fn point_arena(&self) -> &PointArena {
        &self.points
    }

    #[must_use]
    pub fn segment_arena(&self) -> &SegmentArena {
        &self.segments
    }

    #[must_use]
    pub fn data_len(&self) -> usize {
        self.x.len()
    }

    /// Closest-knot query; see [`closest_point`].
    pub fn closest_data_point(
        &self,
        query: ScreenPoint,
        axis: SearchAxis,
        active_only: bool,
        best: &mut ClosestSearch,
    ) -> bool {
        closest_point(
            &self.traces,
            &self.points,
            &self.x,
            &self.y,
            query,
            axis,
            active_only,
            best,
        )
    }

    /// Closest-segment query; see [`closest_segment`].
    pub fn closest_trace_segment<A: AxisTransform>(
        &self,
        axes: &A,
        query: ScreenPoint,
        axis: SearchAxis,
        best: &mut ClosestSearch,
    ) -> bool {
        closest_segment(&self.traces, &self.points, axes, query, axis, best)
    }
}
