#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Wave-indexed portal unlocking and nearest-path lane classification.
//!
//! Progression state is never stored: every query is a pure function of the
//! current wave number and the session's static geometry, so callers can
//! evaluate it on demand from any thread.

use arena_bastion_core::{
    LanePolyline, LaneSide, LaneUnlockSchedule, RouteLane, SpawnPortal, WorldPoint, LANE_COUNT,
};

/// Lanes in the order they unlock as waves advance.
static UNLOCK_ORDER: [RouteLane; LANE_COUNT] = RouteLane::routing_priority();

/// Number of portals active on the given wave, clamped to the portal count.
///
/// A step function of the wave number: one portal before the second
/// threshold, two from the second threshold, three from the third. The
/// result is monotonically non-decreasing in the wave number for a fixed
/// schedule and portal count.
#[must_use]
pub fn active_portal_count(
    wave: u32,
    total_portals: usize,
    schedule: &LaneUnlockSchedule,
) -> usize {
    let unlocked = if wave >= schedule.third_portal_wave {
        LANE_COUNT
    } else if wave >= schedule.second_portal_wave {
        2
    } else {
        1
    };
    unlocked.min(total_portals)
}

/// The set of lanes open on the given wave, in unlock order.
///
/// Lanes open in routing priority order: Mid first, then Top, then Bottom.
#[must_use]
pub fn active_lane_set(
    wave: u32,
    total_portals: usize,
    schedule: &LaneUnlockSchedule,
) -> &'static [RouteLane] {
    &UNLOCK_ORDER[..active_portal_count(wave, total_portals, schedule)]
}

/// Classifies a world point into the lane whose reference path is nearest.
///
/// Distance is the minimum point-to-segment distance over every segment of
/// each lane's polylines. Ties resolve in evaluation order Mid, Top, Bottom,
/// which is also the answer when no polylines are supplied. Pure lookup; no
/// spawning side effects.
#[must_use]
pub fn classify_lane(point: WorldPoint, polylines: &[LanePolyline]) -> RouteLane {
    let mut best_lane = RouteLane::Mid;
    let mut best_distance = f64::INFINITY;
    for lane in RouteLane::routing_priority() {
        for polyline in polylines.iter().filter(|polyline| polyline.lane() == lane) {
            let distance = polyline.distance_to(point);
            if distance < best_distance {
                best_distance = distance;
                best_lane = lane;
            }
        }
    }
    best_lane
}

/// Names the horizontal position of an active portal for UI callouts.
///
/// Active portals (the first [`active_portal_count`] entries) are ranked by
/// x, then y; the rank maps to a side: a lone portal is `Center`, two rank
/// `Left`/`Right`, three rank `Left`/`Center`/`Right`. Returns `None` for a
/// portal that is not yet active or out of range.
#[must_use]
pub fn resolve_lane_by_portal_rank(
    wave: u32,
    portals: &[SpawnPortal],
    portal_index: usize,
    schedule: &LaneUnlockSchedule,
) -> Option<LaneSide> {
    let active = active_portal_count(wave, portals.len(), schedule);
    if portal_index >= active {
        return None;
    }

    let mut ranked: Vec<usize> = (0..active).collect();
    ranked.sort_by(|&first, &second| {
        let a = portals[first].position();
        let b = portals[second].position();
        a.x().total_cmp(&b.x()).then(a.y().total_cmp(&b.y()))
    });

    let rank = ranked.iter().position(|&candidate| candidate == portal_index)?;
    Some(side_for_rank(active, rank))
}

fn side_for_rank(active: usize, rank: usize) -> LaneSide {
    match (active, rank) {
        (1, _) => LaneSide::Center,
        (2, 0) => LaneSide::Left,
        (2, _) => LaneSide::Right,
        (_, 0) => LaneSide::Left,
        (_, 1) => LaneSide::Center,
        (_, _) => LaneSide::Right,
    }
}
