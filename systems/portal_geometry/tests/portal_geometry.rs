use arena_bastion_core::{ArenaBounds, PortalLayoutConfig, SpawnPortal, WorldPoint};
use arena_bastion_system_portal_geometry::resolve_portals;

const DISTANCE_TOLERANCE: f64 = 1e-6;

fn portal_distances(base: WorldPoint, portals: &[SpawnPortal]) -> Vec<f64> {
    portals
        .iter()
        .map(|portal| portal.position().distance_to(base))
        .collect()
}

#[test]
fn off_center_base_discards_a_nearest_corner_and_keeps_equidistance() {
    let bounds = ArenaBounds::new(25.0, 25.0);
    let base = WorldPoint::new(0.0, -9.0);
    let config = PortalLayoutConfig {
        edge_margin: 4.0,
        distance_factor: 0.9,
    };

    let portals = resolve_portals(base, bounds, &config);

    // The two corners on the y = -25 wall are the two nearest to (0, -9);
    // exactly one of them may be discarded, so every portal direction must
    // line up with one of the surviving corners.
    let survivors = [
        WorldPoint::new(25.0, -25.0),
        WorldPoint::new(25.0, 25.0),
        WorldPoint::new(-25.0, 25.0),
    ];
    for portal in &portals {
        let aligned = survivors.iter().any(|corner| {
            let to_corner = (corner.x() - base.x(), corner.y() - base.y());
            let to_portal = (
                portal.position().x() - base.x(),
                portal.position().y() - base.y(),
            );
            let dot = to_corner.0 * to_portal.0 + to_corner.1 * to_portal.1;
            let lengths = (to_corner.0.hypot(to_corner.1)) * (to_portal.0.hypot(to_portal.1));
            dot / lengths > 0.999_999
        });
        assert!(aligned, "portal {portal:?} points at no surviving corner");
    }

    let distances = portal_distances(base, &portals);
    let spread = distances
        .iter()
        .fold(f64::NEG_INFINITY, |max, d| max.max(*d))
        - distances.iter().fold(f64::INFINITY, |min, d| min.min(*d));
    assert!(
        spread < DISTANCE_TOLERANCE,
        "portal distances spread {spread} exceeds tolerance"
    );
}

#[test]
fn portals_stay_inside_the_arena_for_varied_bases() {
    let bounds = ArenaBounds::new(30.0, 20.0);
    let config = PortalLayoutConfig::default();

    for base in [
        WorldPoint::ORIGIN,
        WorldPoint::new(12.0, 5.0),
        WorldPoint::new(-28.0, -18.0),
        WorldPoint::new(0.0, 19.5),
    ] {
        for portal in resolve_portals(base, bounds, &config) {
            assert!(
                bounds.contains(portal.position()),
                "portal {portal:?} escaped bounds for base {base:?}"
            );
        }
    }
}

#[test]
fn centered_base_produces_equidistant_portals() {
    let bounds = ArenaBounds::new(25.0, 25.0);
    let portals = resolve_portals(WorldPoint::ORIGIN, bounds, &PortalLayoutConfig::default());

    let distances = portal_distances(WorldPoint::ORIGIN, &portals);
    for pair in distances.windows(2) {
        assert!((pair[0] - pair[1]).abs() < DISTANCE_TOLERANCE);
    }
}

#[test]
fn resolution_is_idempotent() {
    let bounds = ArenaBounds::new(40.0, 25.0);
    let base = WorldPoint::new(-7.0, 11.0);
    let config = PortalLayoutConfig {
        edge_margin: 2.5,
        distance_factor: 0.75,
    };

    let first = resolve_portals(base, bounds, &config);
    let second = resolve_portals(base, bounds, &config);
    assert_eq!(first, second, "portal resolution diverged between calls");
}

#[test]
fn zero_sized_arena_falls_back_to_raw_corners() {
    let bounds = ArenaBounds::new(0.0, 0.0);
    let portals = resolve_portals(WorldPoint::ORIGIN, bounds, &PortalLayoutConfig::default());
    for portal in portals {
        assert_eq!(portal.position(), WorldPoint::ORIGIN);
    }
}

#[test]
fn oversized_margin_reverts_to_the_full_rectangle() {
    let bounds = ArenaBounds::new(3.0, 3.0);
    let config = PortalLayoutConfig {
        edge_margin: 10.0,
        distance_factor: 1.0,
    };

    let portals = resolve_portals(WorldPoint::ORIGIN, bounds, &config);

    // Full-rectangle ray casts from the center reach the boundary corners.
    let distances = portal_distances(WorldPoint::ORIGIN, &portals);
    let expected = 3.0f64.hypot(3.0);
    for distance in distances {
        assert!((distance - expected).abs() < DISTANCE_TOLERANCE);
    }
}

#[test]
fn distance_factor_is_clamped_to_its_range() {
    let bounds = ArenaBounds::new(25.0, 25.0);
    let base = WorldPoint::new(3.0, -4.0);

    let below = PortalLayoutConfig {
        edge_margin: 4.0,
        distance_factor: 0.05,
    };
    let floor = PortalLayoutConfig {
        edge_margin: 4.0,
        distance_factor: 0.3,
    };
    assert_eq!(
        resolve_portals(base, bounds, &below),
        resolve_portals(base, bounds, &floor)
    );

    let above = PortalLayoutConfig {
        edge_margin: 4.0,
        distance_factor: 7.0,
    };
    let ceiling = PortalLayoutConfig {
        edge_margin: 4.0,
        distance_factor: 1.0,
    };
    assert_eq!(
        resolve_portals(base, bounds, &above),
        resolve_portals(base, bounds, &ceiling)
    );
}

#[test]
fn base_on_a_corner_discards_that_corner() {
    let bounds = ArenaBounds::new(10.0, 10.0);
    let base = WorldPoint::new(10.0, 10.0);
    let portals = resolve_portals(base, bounds, &PortalLayoutConfig::default());

    for portal in portals {
        assert!(
            portal.position().distance_to(base) > 1.0,
            "portal {portal:?} sits on the discarded corner"
        );
    }
}
