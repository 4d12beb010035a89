//! Procedural obstacle placement
//!
//! A freshly recycled segment is populated front to back: sample a position,
//! roll against the placement threshold, then either place an obstacle and
//! advance by the full minimum gap, or skip and advance by half of it. The
//! half-gap skip advance makes the spacing less predictable than a pure
//! place-or-nothing scheme and is deliberate; changing it to a full gap
//! would measurably thin out the track.

use rand::Rng;

use crate::config::GameConfig;

use super::track::{Obstacle, Segment};

/// Populate `target` with obstacles, honoring a minimum world-distance gap
/// of `config.min_gap` between consecutive placements even across the
/// boundary from `previous` (the segment that was at the tail of the ring
/// when `target` was recycled).
///
/// Each loop iteration advances the cursor by at least half the minimum
/// gap, so generation finishes within `length / (min_gap / 2)` iterations;
/// a segment no longer than the gap stays empty.
pub fn populate(
    previous: Option<&Segment>,
    target: &mut Segment,
    config: &GameConfig,
    rng: &mut impl Rng,
) {
    let end = config.floor_length;
    let mut start = match previous.and_then(furthest_position) {
        None => 0.0,
        Some(furthest) => {
            // Space left after the previous segment's last obstacle; pad
            // the new segment's start until the gap spans the boundary
            let space = config.floor_length - furthest;
            if space >= config.min_gap {
                0.0
            } else {
                config.min_gap - space
            }
        }
    };

    while end - start > config.min_gap {
        let y = rng.random_range(start..end);
        if rng.random::<f32>() > config.place_threshold {
            target.obstacles.push(Obstacle::at(y));
            start = y + config.min_gap;
        } else {
            start = y + config.min_gap / 2.0;
        }
    }
}

/// Local position of the obstacle furthest along `segment`, if any.
fn furthest_position(segment: &Segment) -> Option<f32> {
    segment
        .obstacles
        .iter()
        .map(|obstacle| obstacle.position)
        .reduce(f32::max)
}
