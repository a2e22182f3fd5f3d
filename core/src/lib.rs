#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Arena Bastion lane geometry workspace.
//!
//! This crate defines the value types that connect the geometry systems: the
//! portal resolver produces [`SpawnPortal`] sets, the router turns them into a
//! [`LanePortalRouting`], the progression gate classifies points against
//! [`LanePolyline`] references, and the spawn sampler consumes all of the
//! above. Every type is plain immutable data; systems never share mutable
//! state through this crate.

use serde::{Deserialize, Serialize};

/// Number of attack lanes, fixed for the game's lifetime.
pub const LANE_COUNT: usize = 3;

/// A position or unit direction in world space, mapped to the world X/Z plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldPoint {
    x: f64,
    y: f64,
}

impl WorldPoint {
    /// The world origin, where the arena rectangle is centered.
    pub const ORIGIN: WorldPoint = WorldPoint::new(0.0, 0.0);

    /// Creates a new world point from its two planar coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinate along the world X axis.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Coordinate along the world Y axis (world Z for 3-D consumers).
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance between two world points.
    #[must_use]
    pub fn distance_to(self, other: WorldPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A 3-D guidance coordinate used for camera pans and UI callouts.
///
/// The planar components live on the same X/Z plane as [`WorldPoint`];
/// `height` is a presentation elevation chosen by the producer, not terrain
/// data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusPoint {
    x: f64,
    height: f64,
    y: f64,
}

impl FocusPoint {
    /// Creates a new focus point from planar coordinates and an elevation.
    #[must_use]
    pub const fn new(x: f64, height: f64, y: f64) -> Self {
        Self { x, height, y }
    }

    /// Planar X coordinate of the focus point.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Elevation of the focus point above the arena plane.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Planar Y coordinate of the focus point.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }
}

/// Symmetric rectangular play area centered at the world origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArenaBounds {
    half_width: f64,
    half_height: f64,
}

impl ArenaBounds {
    /// Creates new arena bounds from the rectangle's half extents.
    #[must_use]
    pub const fn new(half_width: f64, half_height: f64) -> Self {
        Self {
            half_width,
            half_height,
        }
    }

    /// Half extent of the arena along the X axis.
    #[must_use]
    pub const fn half_width(&self) -> f64 {
        self.half_width
    }

    /// Half extent of the arena along the Y axis.
    #[must_use]
    pub const fn half_height(&self) -> f64 {
        self.half_height
    }

    /// The four arena corners in fixed enumeration order.
    ///
    /// Order: (-x, -y), (+x, -y), (+x, +y), (-x, +y). Corner discard and the
    /// raw-corner fallback both rely on this order being stable.
    #[must_use]
    pub const fn corners(&self) -> [WorldPoint; 4] {
        [
            WorldPoint::new(-self.half_width, -self.half_height),
            WorldPoint::new(self.half_width, -self.half_height),
            WorldPoint::new(self.half_width, self.half_height),
            WorldPoint::new(-self.half_width, self.half_height),
        ]
    }

    /// Reports whether the point lies inside the arena rectangle.
    #[must_use]
    pub fn contains(&self, point: WorldPoint) -> bool {
        point.x().abs() <= self.half_width && point.y().abs() <= self.half_height
    }

    /// Clamps the point to the arena rectangle component-wise.
    #[must_use]
    pub fn clamp(&self, point: WorldPoint) -> WorldPoint {
        WorldPoint::new(
            point.x().clamp(-self.half_width, self.half_width),
            point.y().clamp(-self.half_height, self.half_height),
        )
    }
}

/// The three named attack routes connecting portals to the defended base.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteLane {
    /// Route entering along the world +X side of the arena.
    Top,
    /// Primary route entering along the diagonal between the two others.
    Mid,
    /// Route entering along the world +Y side of the arena.
    Bottom,
}

impl RouteLane {
    /// All lanes in storage order, matching [`RouteLane::index`].
    pub const ALL: [RouteLane; LANE_COUNT] = [RouteLane::Top, RouteLane::Mid, RouteLane::Bottom];

    /// Dense storage index for per-lane arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            RouteLane::Top => 0,
            RouteLane::Mid => 1,
            RouteLane::Bottom => 2,
        }
    }

    /// Canonical target direction used when matching portals to lanes.
    ///
    /// Top points along +X, Bottom along +Y, and Mid along the diagonal
    /// bisector between them. All three are unit vectors.
    #[must_use]
    pub const fn canonical_direction(self) -> WorldPoint {
        match self {
            RouteLane::Top => WorldPoint::new(1.0, 0.0),
            RouteLane::Mid => WorldPoint::new(
                std::f64::consts::FRAC_1_SQRT_2,
                std::f64::consts::FRAC_1_SQRT_2,
            ),
            RouteLane::Bottom => WorldPoint::new(0.0, 1.0),
        }
    }

    /// Fixed lane order used by routing assignment, tie-breaking, and lane
    /// unlocking: Mid first, then Top, then Bottom.
    #[must_use]
    pub const fn routing_priority() -> [RouteLane; LANE_COUNT] {
        [RouteLane::Mid, RouteLane::Top, RouteLane::Bottom]
    }
}

/// UI-facing horizontal naming for active portals, distinct from lane names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaneSide {
    /// Leftmost active portal when ranked by position.
    Left,
    /// Central active portal when ranked by position.
    Center,
    /// Rightmost active portal when ranked by position.
    Right,
}

/// A fixed world point from which enemies enter the arena for one lane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnPortal {
    position: WorldPoint,
}

impl SpawnPortal {
    /// Creates a portal anchored at the provided world position.
    #[must_use]
    pub const fn at(position: WorldPoint) -> Self {
        Self { position }
    }

    /// World position of the portal.
    #[must_use]
    pub const fn position(&self) -> WorldPoint {
        self.position
    }
}

/// Bijective lane-to-portal assignment plus per-lane escape directions.
///
/// Both arrays are indexed by [`RouteLane::index`]. The stored directions are
/// the actual unit base-to-portal vectors, not the canonical lane directions the
/// router matched against. With three or more distinct portals the indices
/// are pairwise distinct; below three the router reuses the pool and lanes
/// may share a portal.
#[derive(Clone, Debug, PartialEq)]
pub struct LanePortalRouting {
    portal_index_by_lane: [usize; LANE_COUNT],
    direction_by_lane: [WorldPoint; LANE_COUNT],
}

impl LanePortalRouting {
    /// Creates a routing from per-lane portal indices and escape directions.
    #[must_use]
    pub const fn new(
        portal_index_by_lane: [usize; LANE_COUNT],
        direction_by_lane: [WorldPoint; LANE_COUNT],
    ) -> Self {
        Self {
            portal_index_by_lane,
            direction_by_lane,
        }
    }

    /// Index into the portal set assigned to the lane.
    #[must_use]
    pub const fn portal_index(&self, lane: RouteLane) -> usize {
        self.portal_index_by_lane[lane.index()]
    }

    /// Unit escape direction from the base toward the lane's portal.
    #[must_use]
    pub const fn direction(&self, lane: RouteLane) -> WorldPoint {
        self.direction_by_lane[lane.index()]
    }

    /// All portal indices in lane storage order.
    #[must_use]
    pub const fn portal_indices(&self) -> [usize; LANE_COUNT] {
        self.portal_index_by_lane
    }
}

/// Ordered vertex sequence approximating a lane's visual path in world space.
///
/// Polylines exist only to classify arbitrary world points (such as building
/// pads) by nearest path; they are never sampled for spawning. Two or more
/// vertices are expected, but degenerate sequences are tolerated: a single
/// vertex classifies by point distance and an empty one is infinitely far
/// from everything.
#[derive(Clone, Debug, PartialEq)]
pub struct LanePolyline {
    lane: RouteLane,
    points: Vec<WorldPoint>,
}

impl LanePolyline {
    /// Creates a polyline for the lane from ordered vertices.
    #[must_use]
    pub fn new(lane: RouteLane, points: Vec<WorldPoint>) -> Self {
        Self { lane, points }
    }

    /// Lane this polyline is the reference path for.
    #[must_use]
    pub const fn lane(&self) -> RouteLane {
        self.lane
    }

    /// Ordered vertices of the polyline.
    #[must_use]
    pub fn points(&self) -> &[WorldPoint] {
        &self.points
    }

    /// Minimum distance from the point to any segment of the polyline.
    #[must_use]
    pub fn distance_to(&self, point: WorldPoint) -> f64 {
        match self.points.as_slice() {
            [] => f64::INFINITY,
            [only] => point.distance_to(*only),
            vertices => vertices
                .windows(2)
                .map(|pair| segment_distance(point, pair[0], pair[1]))
                .fold(f64::INFINITY, f64::min),
        }
    }
}

fn segment_distance(point: WorldPoint, start: WorldPoint, end: WorldPoint) -> f64 {
    let seg_x = end.x() - start.x();
    let seg_y = end.y() - start.y();
    let length_squared = seg_x * seg_x + seg_y * seg_y;
    if length_squared <= f64::EPSILON {
        return point.distance_to(start);
    }

    let offset_x = point.x() - start.x();
    let offset_y = point.y() - start.y();
    let t = ((offset_x * seg_x + offset_y * seg_y) / length_squared).clamp(0.0, 1.0);
    point.distance_to(WorldPoint::new(start.x() + seg_x * t, start.y() + seg_y * t))
}

/// Opaque identifier for a building-pad type supplied by the placement
/// subsystem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PadTypeId(u32);

impl PadTypeId {
    /// Creates a new pad type identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// A building-pad location reported by the placement subsystem.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuildingPad {
    kind: PadTypeId,
    position: WorldPoint,
}

impl BuildingPad {
    /// Creates a pad descriptor from its type and world position.
    #[must_use]
    pub const fn new(kind: PadTypeId, position: WorldPoint) -> Self {
        Self { kind, position }
    }

    /// Type of structure the pad accepts.
    #[must_use]
    pub const fn kind(&self) -> PadTypeId {
        self.kind
    }

    /// World position of the pad.
    #[must_use]
    pub const fn position(&self) -> WorldPoint {
        self.position
    }
}

/// Tuning knobs for portal placement along the arena boundary.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortalLayoutConfig {
    /// Distance kept between portals and each arena wall. Ignored when the
    /// shrunk rectangle would invert (arena smaller than twice the margin).
    pub edge_margin: f64,
    /// Fraction of the shared boundary distance actually travelled, pulling
    /// portals inward from the absolute edge. Clamped to [0.3, 1.0] at use.
    pub distance_factor: f64,
}

impl Default for PortalLayoutConfig {
    fn default() -> Self {
        Self {
            edge_margin: 4.0,
            distance_factor: 0.9,
        }
    }
}

/// Wave thresholds at which the second and third portals unlock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneUnlockSchedule {
    /// First wave on which two portals are active. Must be strictly below
    /// [`LaneUnlockSchedule::third_portal_wave`].
    pub second_portal_wave: u32,
    /// First wave on which all three portals are active.
    pub third_portal_wave: u32,
}

impl Default for LaneUnlockSchedule {
    fn default() -> Self {
        Self {
            second_portal_wave: 4,
            third_portal_wave: 8,
        }
    }
}
