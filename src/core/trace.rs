use serde::{Deserialize, Serialize};

use crate::core::arena::{PointArena, PointId, SegmentArena, SegmentId};
use crate::core::error_bars::ErrorDirection;
use crate::core::types::ScreenPoint;

/// Per-point status flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointFlags {
    /// Inside the plot rectangle.
    pub visible: bool,
    /// Original, non-generated data point.
    pub knot: bool,
    /// Eligible for symbol decimation.
    pub symbol: bool,
    /// Externally marked active (hit-test filtering).
    pub active: bool,
}

/// One node of a trace's point list, arena-allocated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracePoint {
    pub pos: ScreenPoint,
    /// Back-reference into the element's original data sequence. Generated
    /// points carry the index of the knot starting their source interval.
    pub data_index: usize,
    pub flags: PointFlags,
    pub next: Option<PointId>,
}

/// One error-bar stem or cap, arena-allocated; prepend-only list per trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceSegment {
    pub p: ScreenPoint,
    pub q: ScreenPoint,
    pub data_index: usize,
    pub direction: ErrorDirection,
    pub next: Option<SegmentId>,
}

/// A maximal contiguous run of connected, same-pen line segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub head: Option<PointId>,
    pub tail: Option<PointId>,
    pub num_points: usize,
    /// Pen name resolved at creation or split time.
    pub pen: String,
    pub symbol_size: f64,
    pub error_cap_width: f64,
    pub segments_head: Option<SegmentId>,
    /// Clipped area-under-curve polygon, when the element has a fill style.
    pub fill: Option<Vec<ScreenPoint>>,
}

impl Trace {
    #[must_use]
    pub fn new(pen: impl Into<String>, symbol_size: f64, error_cap_width: f64) -> Self {
        Self {
            head: None,
            tail: None,
            num_points: 0,
            pen: pen.into(),
            symbol_size,
            error_cap_width,
            segments_head: None,
            fill: None,
        }
    }

    /// Appends an already-allocated point to the tail.
    pub fn push_point(&mut self, points: &mut PointArena, id: PointId) {
        points.get_mut(id).next = None;
        match self.tail {
            Some(tail) => points.get_mut(tail).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.num_points += 1;
    }

    /// Prepends an already-allocated segment to the error-bar list.
    pub fn prepend_segment(&mut self, segments: &mut SegmentArena, id: SegmentId) {
        segments.get_mut(id).next = self.segments_head;
        self.segments_head = Some(id);
    }

    #[must_use]
    pub fn iter<'a>(&self, points: &'a PointArena) -> PointIter<'a> {
        PointIter {
            points,
            next: self.head,
        }
    }

    #[must_use]
    pub fn iter_segments<'a>(&self, segments: &'a SegmentArena) -> SegmentIter<'a> {
        SegmentIter {
            segments,
            next: self.segments_head,
        }
    }

    /// Ids of the point list in order, for passes that mutate while walking.
    #[must_use]
    pub fn point_ids(&self, points: &PointArena) -> Vec<PointId> {
        let mut ids = Vec::with_capacity(self.num_points);
        let mut cursor = self.head;
        while let Some(id) = cursor {
            ids.push(id);
            cursor = points.get(id).next;
        }
        ids
    }
}

pub struct PointIter<'a> {
    points: &'a PointArena,
    next: Option<PointId>,
}

impl<'a> Iterator for PointIter<'a> {
    type Item = (PointId, &'a TracePoint);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let point = self.points.get(id);
        self.next = point.next;
        Some((id, point))
    }
}

pub struct SegmentIter<'a> {
    segments: &'a SegmentArena,
    next: Option<SegmentId>,
}

impl<'a> Iterator for SegmentIter<'a> {
    type Item = (SegmentId, &'a TraceSegment);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let segment = self.segments.get(id);
        self.next = segment.next;
        Some((id, segment))
    }
}

/// Recomputes `num_points` and the tail pointer of every trace by walking
/// its list, then drops traces that ended up empty. Run after any pass that
/// splits or edits trace point lists.
#[must_use]
pub fn fix_up_traces(traces: Vec<Trace>, points: &PointArena) -> Vec<Trace> {
    let mut fixed = Vec::with_capacity(traces.len());
    for mut trace in traces {
        let mut count = 0_usize;
        let mut tail = None;
        let mut cursor = trace.head;
        while let Some(id) = cursor {
            count += 1;
            tail = Some(id);
            cursor = points.get(id).next;
        }
        if count == 0 {
            continue;
        }
        trace.num_points = count;
        trace.tail = tail;
        fixed.push(trace);
    }
    fixed
}
