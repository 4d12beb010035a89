//! Track segments and the recycling ring
//!
//! The endless track is a fixed window of finite segments. The world scrolls
//! toward the player; once the head segment has fully exited behind them it
//! is detached, emptied and reattached ahead of the tail, so the ring never
//! grows or shrinks and the track never ends.

use std::collections::VecDeque;

use glam::Vec3;

use super::collision::Capsule;
use crate::config::ConfigError;
use crate::consts;

/// A single static hazard on a segment.
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Offset along the scroll axis from the owning segment's origin,
    /// in `[0, length)`
    pub position: f32,
    /// Hit volume in segment-local coordinates
    pub volume: Capsule,
}

impl Obstacle {
    /// Place an obstacle at a local position with the standard hit capsule
    /// attached.
    pub fn at(position: f32) -> Self {
        let shift = Vec3::new(0.0, position, 0.0);
        Self {
            position,
            volume: Capsule::new(
                consts::OBSTACLE_CAPSULE_A + shift,
                consts::OBSTACLE_CAPSULE_B + shift,
                consts::OBSTACLE_RADIUS,
            ),
        }
    }

    /// Hit volume in world coordinates, given the owning segment's origin.
    pub fn world_volume(&self, segment_origin: f32) -> Capsule {
        self.volume.offset_scroll(segment_origin)
    }
}

/// One fixed-length stretch of track.
#[derive(Debug, Clone)]
pub struct Segment {
    /// Stable handle; scene events refer to segments by this id
    pub id: u32,
    /// World position of the segment start along the scroll axis. The
    /// player sits at scroll position 0, so a segment spans
    /// `[origin, origin + length]` and has fully exited once
    /// `origin <= -length`.
    pub origin: f32,
    /// Obstacles in generation order
    pub obstacles: Vec<Obstacle>,
}

impl Segment {
    fn new(id: u32, origin: f32) -> Self {
        Self {
            id,
            origin,
            obstacles: Vec::new(),
        }
    }
}

/// Fixed-capacity rotating window of track segments.
///
/// Segments abut along the scroll axis and stay contiguous across recycles.
/// The ring is addressed by rotation only: segments leave at the head and
/// re-enter at the tail, never by index.
#[derive(Debug)]
pub struct SegmentRing {
    segments: VecDeque<Segment>,
    capacity: usize,
    length: f32,
}

impl SegmentRing {
    /// Build `count` abutting segments, segment `i` spawning at
    /// `i * length`, ahead of the player.
    pub fn new(count: usize, length: f32) -> Result<Self, ConfigError> {
        if count == 0 {
            return Err(ConfigError::SegmentCount);
        }
        if !(length > 0.0) {
            return Err(ConfigError::SegmentLength(length));
        }
        let segments = (0..count)
            .map(|i| Segment::new(i as u32, i as f32 * length))
            .collect();
        Ok(Self {
            segments,
            capacity: count,
            length,
        })
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segment_length(&self) -> f32 {
        self.length
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// The segment closest to exiting behind the player.
    pub fn head(&self) -> Option<&Segment> {
        self.segments.front()
    }

    /// The most recently recycled (or last initial) segment; obstacle
    /// generation consults its layout for the cross-boundary gap.
    pub fn tail(&self) -> Option<&Segment> {
        self.segments.back()
    }

    /// Shift every segment backward by `delta` world units. Pure
    /// bookkeeping; no allocation.
    pub fn advance(&mut self, delta: f32) {
        for segment in &mut self.segments {
            segment.origin -= delta;
        }
    }

    /// Detach the head segment once it has fully exited behind the player.
    ///
    /// The returned segment is emptied and repositioned directly after the
    /// current tail; the caller populates it and hands it back via
    /// [`SegmentRing::reattach`]. Repositioning adds exactly
    /// `capacity * length` to the old origin, so any scroll overflow past
    /// the threshold is carried rather than dropped. At most one segment
    /// recycles per call; a second pending crossing is deferred to the next
    /// tick.
    pub fn recycle_if_needed(&mut self) -> Option<Segment> {
        if self.segments.front()?.origin > -self.length {
            return None;
        }
        let mut segment = self.segments.pop_front()?;
        segment.obstacles.clear();
        segment.origin += self.capacity as f32 * self.length;
        log::debug!(
            "segment {} recycled to origin {:.2}",
            segment.id,
            segment.origin
        );
        if let Some(head) = self.segments.front() {
            if head.origin <= -self.length {
                // Only reachable on a dt spike well beyond design speeds
                log::warn!(
                    "segment {} already past the recycle threshold",
                    head.id
                );
            }
        }
        Some(segment)
    }

    /// Reattach a recycled segment at the tail, restoring the ring to
    /// capacity.
    pub fn reattach(&mut self, segment: Segment) {
        self.segments.push_back(segment);
        debug_assert_eq!(self.segments.len(), self.capacity);
    }

    /// All obstacle hit volumes currently on the track, in ring order,
    /// positioned in world coordinates.
    pub fn active_obstacles(&self) -> impl Iterator<Item = Capsule> + '_ {
        self.segments.iter().flat_map(|segment| {
            segment
                .obstacles
                .iter()
                .map(|obstacle| obstacle.world_volume(segment.origin))
        })
    }
}
