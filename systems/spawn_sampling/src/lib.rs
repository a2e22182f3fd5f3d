#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Per-spawn position sampling and lane-unlock focus points.
//!
//! The jitter draw is the only randomized operation in the workspace; it is
//! driven by a caller-supplied [`Rng`] so replay tests can pin a seed. Every
//! other function here is a pure lookup over the cached routing geometry.

use arena_bastion_core::{
    ArenaBounds, BuildingPad, FocusPoint, LanePolyline, LanePortalRouting, PadTypeId, RouteLane,
    SpawnPortal, WorldPoint,
};
use arena_bastion_system_progression::classify_lane;
use glam::DVec2;
use rand::Rng;

const TWO_PI: f64 = std::f64::consts::PI * 2.0;

/// Fraction of the jitter radius a sample may drift toward the base before
/// the minimum-distance guard pushes it back out.
const JITTER_APPROACH_FRACTION: f64 = 0.2;

/// Presentation elevation shared by every lane focus point.
pub const FOCUS_HEIGHT: f64 = 1.5;

/// Samples a spawn position on the lane's portal with area-uniform jitter.
///
/// The disk sample uses `radius = sqrt(u) * jitter_radius`, which distributes
/// spawns uniformly over the disk area instead of clustering them at the
/// portal. When a base position is supplied, samples are kept at least
/// `portal_distance - jitter_radius * 0.2` away from it by projecting them
/// outward along the base-to-portal direction. The result is always clamped to
/// the arena rectangle.
///
/// A missing or invalid routing falls back to the fixed corner at
/// `(half_width, half_height)` rather than failing.
#[must_use]
pub fn sample_spawn_position<R: Rng>(
    lane: RouteLane,
    portals: &[SpawnPortal],
    routing: Option<&LanePortalRouting>,
    jitter_radius: f64,
    bounds: ArenaBounds,
    base: Option<WorldPoint>,
    rng: &mut R,
) -> WorldPoint {
    let portal =
        lane_portal(lane, portals, routing).unwrap_or_else(|| fallback_corner(bounds));

    if jitter_radius <= 0.0 {
        return portal;
    }

    let center = DVec2::new(portal.x(), portal.y());
    let angle = rng.gen_range(0.0..TWO_PI);
    let radius = rng.gen::<f64>().sqrt() * jitter_radius;
    let mut sample = center + DVec2::new(angle.cos(), angle.sin()) * radius;

    if let Some(base) = base {
        let anchor = DVec2::new(base.x(), base.y());
        sample = enforce_minimum_distance(sample, anchor, center, jitter_radius);
    }

    bounds.clamp(WorldPoint::new(sample.x, sample.y))
}

/// Focus point just inside the arena from a newly unlocked lane's portal.
///
/// The portal is pulled inward along the lane's escape direction by
/// `inward_offset`, clamped to bounds, and lifted to [`FOCUS_HEIGHT`].
#[must_use]
pub fn resolve_lane_unlock_focus(
    lane: RouteLane,
    portals: &[SpawnPortal],
    routing: &LanePortalRouting,
    bounds: ArenaBounds,
    inward_offset: f64,
) -> FocusPoint {
    let portal =
        lane_portal(lane, portals, Some(routing)).unwrap_or_else(|| fallback_corner(bounds));
    let direction = routing.direction(lane);
    let pulled = WorldPoint::new(
        portal.x() - direction.x() * inward_offset,
        portal.y() - direction.y() * inward_offset,
    );
    let clamped = bounds.clamp(pulled);
    FocusPoint::new(clamped.x(), FOCUS_HEIGHT, clamped.y())
}

/// Focus point on the locked building pad that best represents the lane.
///
/// Pads whose type is not in `locked_kinds` are ignored; the rest are
/// classified by nearest lane path and, restricted to the target lane, the
/// pad closest to the base wins. Returns `None` when no pad matches, in
/// which case callers fall back to [`resolve_lane_unlock_focus`].
#[must_use]
pub fn resolve_lane_unlock_pad_focus(
    lane: RouteLane,
    pads: &[BuildingPad],
    locked_kinds: &[PadTypeId],
    polylines: &[LanePolyline],
    bounds: ArenaBounds,
    base: WorldPoint,
) -> Option<FocusPoint> {
    let mut best: Option<(f64, WorldPoint)> = None;
    for pad in pads {
        if !locked_kinds.contains(&pad.kind()) {
            continue;
        }
        if classify_lane(pad.position(), polylines) != lane {
            continue;
        }
        let distance = pad.position().distance_to(base);
        if best.map_or(true, |(best_distance, _)| distance < best_distance) {
            best = Some((distance, pad.position()));
        }
    }

    best.map(|(_, position)| {
        let clamped = bounds.clamp(position);
        FocusPoint::new(clamped.x(), FOCUS_HEIGHT, clamped.y())
    })
}

fn lane_portal(
    lane: RouteLane,
    portals: &[SpawnPortal],
    routing: Option<&LanePortalRouting>,
) -> Option<WorldPoint> {
    let routing = routing?;
    portals
        .get(routing.portal_index(lane))
        .map(|portal| portal.position())
}

fn fallback_corner(bounds: ArenaBounds) -> WorldPoint {
    WorldPoint::new(bounds.half_width(), bounds.half_height())
}

/// Keeps the sample's projection onto the base-to-portal axis at or beyond the
/// minimum spawn distance. Pushing along that axis bounds the true distance
/// from below by the projection, so the guard holds without iteration.
fn enforce_minimum_distance(
    sample: DVec2,
    base: DVec2,
    portal: DVec2,
    jitter_radius: f64,
) -> DVec2 {
    let Some(outward) = (portal - base).try_normalize() else {
        return sample;
    };
    let minimum = portal.distance(base) - jitter_radius * JITTER_APPROACH_FRACTION;
    let projected = (sample - base).dot(outward);
    if projected >= minimum {
        return sample;
    }
    sample + outward * (minimum - projected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_projects_close_samples_back_out() {
        let base = DVec2::ZERO;
        let portal = DVec2::new(20.0, 0.0);
        let sample = DVec2::new(18.5, 0.4);

        let adjusted = enforce_minimum_distance(sample, base, portal, 1.2);
        assert!(adjusted.distance(base) >= 20.0 - 1.2 * JITTER_APPROACH_FRACTION - 1e-12);
    }

    #[test]
    fn guard_ignores_a_degenerate_portal_axis() {
        let sample = DVec2::new(0.3, -0.4);
        let adjusted = enforce_minimum_distance(sample, DVec2::ZERO, DVec2::ZERO, 1.0);
        assert_eq!(adjusted, sample);
    }
}
