#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Session-scoped lane routing state for Arena Bastion.
//!
//! The [`LaneRoutingTable`] is the single cached artifact of the geometry
//! core: portals and their lane routing are resolved once when the arena and
//! base position are established, then the table is handed by reference to
//! every query for the rest of the session. There is no ambient global and
//! no lazy initialization: construction is explicit, and the finished table
//! is plain immutable data that can be shared freely across threads.

use arena_bastion_core::{
    ArenaBounds, LanePolyline, LanePortalRouting, PortalLayoutConfig, RouteLane, SpawnPortal,
    WorldPoint, LANE_COUNT,
};
use arena_bastion_system_lane_routing::route_portals;
use arena_bastion_system_portal_geometry::resolve_portals;

/// Immutable portal/lane geometry for one arena session.
#[derive(Clone, Debug, PartialEq)]
pub struct LaneRoutingTable {
    base: WorldPoint,
    bounds: ArenaBounds,
    portals: [SpawnPortal; LANE_COUNT],
    routing: LanePortalRouting,
    polylines: Vec<LanePolyline>,
}

impl LaneRoutingTable {
    /// Resolves portals and routing for a (base, bounds) pair.
    ///
    /// Identical inputs always produce an identical table, so re-resolving
    /// after a session restart is safe. Reference polylines default to the
    /// straight portal-to-base path per lane; level setups with hand-authored
    /// paths should assemble the table through [`LaneRoutingTable::from_parts`].
    #[must_use]
    pub fn resolve(base: WorldPoint, bounds: ArenaBounds, layout: &PortalLayoutConfig) -> Self {
        let portals = resolve_portals(base, bounds, layout);
        let routing = route_portals(base, &portals);
        let polylines = reference_polylines(base, &portals, &routing);
        Self {
            base,
            bounds,
            portals,
            routing,
            polylines,
        }
    }

    /// Assembles a table from externally produced pieces.
    #[must_use]
    pub fn from_parts(
        base: WorldPoint,
        bounds: ArenaBounds,
        portals: [SpawnPortal; LANE_COUNT],
        routing: LanePortalRouting,
        polylines: Vec<LanePolyline>,
    ) -> Self {
        Self {
            base,
            bounds,
            portals,
            routing,
            polylines,
        }
    }
}

fn reference_polylines(
    base: WorldPoint,
    portals: &[SpawnPortal; LANE_COUNT],
    routing: &LanePortalRouting,
) -> Vec<LanePolyline> {
    RouteLane::ALL
        .iter()
        .map(|&lane| {
            let start = portals[routing.portal_index(lane)].position();
            LanePolyline::new(lane, vec![start, base])
        })
        .collect()
}

/// Read-only queries over a resolved [`LaneRoutingTable`].
pub mod query {
    use super::{LaneRoutingTable, LANE_COUNT};
    use arena_bastion_core::{
        ArenaBounds, LanePolyline, LanePortalRouting, RouteLane, SpawnPortal, WorldPoint,
    };

    /// Base position the table was resolved against.
    #[must_use]
    pub fn base_position(table: &LaneRoutingTable) -> WorldPoint {
        table.base
    }

    /// Arena bounds the table was resolved against.
    #[must_use]
    pub fn bounds(table: &LaneRoutingTable) -> ArenaBounds {
        table.bounds
    }

    /// The session's three spawn portals in resolution order.
    #[must_use]
    pub fn portals(table: &LaneRoutingTable) -> &[SpawnPortal; LANE_COUNT] {
        &table.portals
    }

    /// The lane-to-portal routing resolved for the session.
    #[must_use]
    pub fn routing(table: &LaneRoutingTable) -> &LanePortalRouting {
        &table.routing
    }

    /// Portal assigned to the lane.
    #[must_use]
    pub fn portal_for_lane(table: &LaneRoutingTable, lane: RouteLane) -> SpawnPortal {
        table.portals[table.routing.portal_index(lane)]
    }

    /// Unit escape direction from the base toward the lane's portal.
    #[must_use]
    pub fn escape_direction(table: &LaneRoutingTable, lane: RouteLane) -> WorldPoint {
        table.routing.direction(lane)
    }

    /// Reference polylines for every lane.
    #[must_use]
    pub fn lane_polylines(table: &LaneRoutingTable) -> &[LanePolyline] {
        &table.polylines
    }

    /// Reference polyline for one lane, when the table carries one.
    #[must_use]
    pub fn polyline_for_lane(
        table: &LaneRoutingTable,
        lane: RouteLane,
    ) -> Option<&LanePolyline> {
        table
            .polylines
            .iter()
            .find(|polyline| polyline.lane() == lane)
    }
}
