#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic portal placement along the arena boundary.
//!
//! Portals are derived from the base position and the arena rectangle alone:
//! the corner nearest the base is discarded, rays are cast toward the three
//! far corners, and a single shared travel distance keeps all three entry
//! points equidistant from the base regardless of where the base sits.

use arena_bastion_core::{ArenaBounds, PortalLayoutConfig, SpawnPortal, WorldPoint, LANE_COUNT};
use glam::DVec2;

/// Travel distances at or below this threshold count as degenerate and route
/// the resolver onto the raw-corner fallback.
const DEGENERATE_DISTANCE: f64 = 0.01;

const DISTANCE_FACTOR_MIN: f64 = 0.3;
const DISTANCE_FACTOR_MAX: f64 = 1.0;

/// Resolves the three spawn portals for a (base, bounds) pair.
///
/// The same inputs always produce the same portals; callers cache the result
/// for the lifetime of the arena. Degenerate input (a corner coinciding with
/// the base, or a ray with no positive travel distance) falls back to the
/// three far corners unscaled, which is a defined outcome rather than an
/// error.
#[must_use]
pub fn resolve_portals(
    base: WorldPoint,
    bounds: ArenaBounds,
    config: &PortalLayoutConfig,
) -> [SpawnPortal; LANE_COUNT] {
    let far_corners = discard_nearest_corner(base, bounds.corners());
    let origin = DVec2::new(base.x(), base.y());

    let mut directions = [DVec2::ZERO; LANE_COUNT];
    for (slot, corner) in directions.iter_mut().zip(far_corners.iter()) {
        let offset = DVec2::new(corner.x(), corner.y()) - origin;
        match offset.try_normalize() {
            Some(direction) => *slot = direction,
            None => return corner_fallback(far_corners),
        }
    }

    let rectangle = usable_rectangle(bounds, config.edge_margin);
    let mut shared_distance = f64::INFINITY;
    for direction in directions {
        let exit = exit_distance(origin, direction, &rectangle);
        if !exit.is_finite() || exit <= DEGENERATE_DISTANCE {
            return corner_fallback(far_corners);
        }
        shared_distance = shared_distance.min(exit);
    }

    let factor = config
        .distance_factor
        .clamp(DISTANCE_FACTOR_MIN, DISTANCE_FACTOR_MAX);
    let travel = shared_distance * factor;
    directions.map(|direction| {
        let position = origin + direction * travel;
        SpawnPortal::at(WorldPoint::new(position.x, position.y))
    })
}

fn discard_nearest_corner(
    base: WorldPoint,
    corners: [WorldPoint; 4],
) -> [WorldPoint; LANE_COUNT] {
    let mut nearest = 0;
    let mut nearest_distance = f64::INFINITY;
    for (index, corner) in corners.iter().enumerate() {
        let distance = base.distance_to(*corner);
        if distance < nearest_distance {
            nearest_distance = distance;
            nearest = index;
        }
    }

    let mut survivors = [WorldPoint::ORIGIN; LANE_COUNT];
    let mut cursor = 0;
    for (index, corner) in corners.iter().enumerate() {
        if index != nearest {
            survivors[cursor] = *corner;
            cursor += 1;
        }
    }
    survivors
}

fn corner_fallback(far_corners: [WorldPoint; LANE_COUNT]) -> [SpawnPortal; LANE_COUNT] {
    far_corners.map(SpawnPortal::at)
}

struct Rectangle {
    min: DVec2,
    max: DVec2,
}

/// Shrinks the arena rectangle by the edge margin, reverting to the full
/// rectangle when the margin would invert it.
fn usable_rectangle(bounds: ArenaBounds, edge_margin: f64) -> Rectangle {
    let margin = edge_margin.max(0.0);
    let half_width = bounds.half_width() - margin;
    let half_height = bounds.half_height() - margin;
    if half_width > 0.0 && half_height > 0.0 {
        Rectangle {
            min: DVec2::new(-half_width, -half_height),
            max: DVec2::new(half_width, half_height),
        }
    } else {
        Rectangle {
            min: DVec2::new(-bounds.half_width(), -bounds.half_height()),
            max: DVec2::new(bounds.half_width(), bounds.half_height()),
        }
    }
}

/// Slab intersection: how far a ray from `origin` travels along `direction`
/// before exiting the rectangle. Minimum positive plane distance across the
/// two axes; an origin already outside a parallel slab exits immediately.
fn exit_distance(origin: DVec2, direction: DVec2, rectangle: &Rectangle) -> f64 {
    let x = axis_exit(origin.x, direction.x, rectangle.min.x, rectangle.max.x);
    let y = axis_exit(origin.y, direction.y, rectangle.min.y, rectangle.max.y);
    match (x, y) {
        (Some(first), Some(second)) => first.min(second),
        (Some(first), None) => first,
        (None, Some(second)) => second,
        (None, None) => f64::INFINITY,
    }
}

fn axis_exit(origin: f64, direction: f64, min: f64, max: f64) -> Option<f64> {
    if direction.abs() <= f64::EPSILON {
        if origin < min || origin > max {
            Some(0.0)
        } else {
            None
        }
    } else {
        let plane = if direction > 0.0 { max } else { min };
        Some((plane - origin) / direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_exit_reports_immediate_exit_outside_parallel_slab() {
        assert_eq!(axis_exit(12.0, 0.0, -10.0, 10.0), Some(0.0));
        assert_eq!(axis_exit(3.0, 0.0, -10.0, 10.0), None);
    }

    #[test]
    fn usable_rectangle_reverts_when_margin_inverts() {
        let bounds = ArenaBounds::new(3.0, 3.0);
        let rectangle = usable_rectangle(bounds, 10.0);
        assert_eq!(rectangle.max, DVec2::new(3.0, 3.0));
    }
}
