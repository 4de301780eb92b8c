//! Epoch-reset arenas backing the trace chain.
//!
//! Points and segments are stored in push-only slot vectors addressed by
//! plain `u32` ids with explicit `next` links. Both arenas are cleared
//! wholesale at the start of every remap, so ids never outlive one epoch and
//! stale ids from a prior epoch cannot be dereferenced through the public
//! API.

use crate::core::trace::{TracePoint, TraceSegment};

pub type PointId = u32;
pub type SegmentId = u32;

#[derive(Debug, Clone, Default)]
pub struct PointArena {
    slots: Vec<TracePoint>,
}

impl PointArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Epoch reset; all outstanding ids become invalid.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn alloc(&mut self, point: TracePoint) -> PointId {
        let id = self.slots.len() as PointId;
        self.slots.push(point);
        id
    }

    #[must_use]
    pub fn get(&self, id: PointId) -> &TracePoint {
        &self.slots[id as usize]
    }

    pub fn get_mut(&mut self, id: PointId) -> &mut TracePoint {
        &mut self.slots[id as usize]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SegmentArena {
    slots: Vec<TraceSegment>,
}

impl SegmentArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Epoch reset; all outstanding ids become invalid.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn alloc(&mut self, segment: TraceSegment) -> SegmentId {
        let id = self.slots.len() as SegmentId;
        self.slots.push(segment);
        id
    }

    #[must_use]
    pub fn get(&self, id: SegmentId) -> &TraceSegment {
        &self.slots[id as usize]
    }

    pub fn get_mut(&mut self, id: SegmentId) -> &mut TraceSegment {
        &mut self.slots[id as usize]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
