#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic assignment of spawn portals to the three attack lanes.
//!
//! Lanes are processed in the fixed priority order Mid, Top, Bottom; each
//! takes the still-unassigned portal whose direction from the base best
//! matches the lane's canonical direction. Removing the winner from the pool
//! before the next lane guarantees a bijection whenever three or more
//! distinct portals exist.

use arena_bastion_core::{LanePortalRouting, RouteLane, SpawnPortal, WorldPoint, LANE_COUNT};
use glam::DVec2;

/// Weight of the portal-distance term in the matching score. Small enough
/// that distance only separates portals with near-identical directions.
const DISTANCE_TIEBREAK_EPSILON: f64 = 1e-4;

struct Candidate {
    direction: DVec2,
    distance: f64,
}

/// Routes each portal to exactly one lane and derives per-lane escape
/// directions from the actual base-to-portal vectors.
///
/// With fewer than three portals the pool is reused so every lane still
/// receives an index; lanes then share portals (degraded mode). An empty
/// portal slice yields index 0 and the canonical direction for every lane.
#[must_use]
pub fn route_portals(base: WorldPoint, portals: &[SpawnPortal]) -> LanePortalRouting {
    let origin = DVec2::new(base.x(), base.y());
    let mid_canonical = canonical_vector(RouteLane::Mid);

    let candidates: Vec<Candidate> = portals
        .iter()
        .map(|portal| {
            let offset = DVec2::new(portal.position().x(), portal.position().y()) - origin;
            Candidate {
                // A portal sitting on the base has no direction of its own;
                // the Mid canonical stands in for it.
                direction: offset.try_normalize().unwrap_or(mid_canonical),
                distance: offset.length(),
            }
        })
        .collect();

    let allow_reuse = candidates.len() < LANE_COUNT;
    let mut assigned = vec![false; candidates.len()];
    let mut portal_index_by_lane = [0usize; LANE_COUNT];
    let mut direction_by_lane = [WorldPoint::ORIGIN; LANE_COUNT];

    for lane in RouteLane::routing_priority() {
        let target = canonical_vector(lane);
        let mut best: Option<(usize, f64)> = None;
        for (index, candidate) in candidates.iter().enumerate() {
            if !allow_reuse && assigned[index] {
                continue;
            }
            let score = candidate.direction.dot(target)
                + DISTANCE_TIEBREAK_EPSILON * candidate.distance;
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }

        match best {
            Some((index, _)) => {
                if !allow_reuse {
                    assigned[index] = true;
                }
                portal_index_by_lane[lane.index()] = index;
                let direction = candidates[index].direction;
                direction_by_lane[lane.index()] = WorldPoint::new(direction.x, direction.y);
            }
            None => {
                portal_index_by_lane[lane.index()] = 0;
                direction_by_lane[lane.index()] = lane.canonical_direction();
            }
        }
    }

    LanePortalRouting::new(portal_index_by_lane, direction_by_lane)
}

fn canonical_vector(lane: RouteLane) -> DVec2 {
    let canonical = lane.canonical_direction();
    DVec2::new(canonical.x(), canonical.y())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_vectors_match_core_directions() {
        for lane in RouteLane::ALL {
            let vector = canonical_vector(lane);
            let direction = lane.canonical_direction();
            assert_eq!((vector.x, vector.y), (direction.x(), direction.y()));
        }
    }
}
