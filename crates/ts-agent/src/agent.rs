//! The `Agent` struct and its tagged kinematic variants.

use glam::Vec2;
use ts_core::{AgentClass, AgentId, SimParams, TileId, WalkParams};
use ts_grid::Goal;
use ts_path::TilePath;

use crate::kinematics::{VehicleState, WalkerState};

// ── AgentKind ─────────────────────────────────────────────────────────────────

/// Class tag plus the variant-specific kinematic payload.
#[derive(Clone, Debug)]
pub enum AgentKind {
    Pedestrian(WalkerState),
    Driver(VehicleState),
    /// Micro-mobility vehicle.  Carries both payloads; exactly one kinematic
    /// mode is active per tick, selected by `dismounted`.
    Mmv {
        vehicle: VehicleState,
        walker: WalkerState,
        dismounted: bool,
    },
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// One simulation participant.
///
/// Created unplaced (`start_tile == TileId::INVALID`); the spawner assigns a
/// start tile/position or the agent never enters the active set.  During the
/// run exactly one step function mutates it once per tick.  Reaching the goal
/// (or losing render presence on the consumer side) removes it permanently.
#[derive(Clone, Debug)]
pub struct Agent {
    pub id: AgentId,
    pub kind: AgentKind,
    /// Owned copy of the assigned goal (goals are setup-time constants).
    pub goal: Goal,
    /// Risk score 0–100; drives the distraction model.
    pub risk: u8,

    pub start_position: Vec2,
    pub position: Vec2,
    /// Heading angle, radians, kept normalized to (−π, π].
    pub heading: f32,
    /// Scalar speed, units/s.
    pub speed: f32,
    /// Last applied acceleration, units/s² (observability only).
    pub acceleration: f32,
    /// Bounding-circle radius for spawn collision checks.
    pub radius: f32,

    pub start_tile: TileId,
    /// Planned tile path; empty when no path was found.
    pub path: TilePath,
    /// Monotone, bounded by `path.len()`; all waypoint reads are guarded.
    pub path_index: usize,
    pub reached_goal: bool,
}

impl Agent {
    // ── Constructors ──────────────────────────────────────────────────────

    fn base(id: AgentId, kind: AgentKind, goal: Goal, risk: u8, radius: f32) -> Self {
        Self {
            id,
            kind,
            goal,
            risk,
            start_position: Vec2::ZERO,
            position: Vec2::ZERO,
            heading: 0.0,
            speed: 0.0,
            acceleration: 0.0,
            radius,
            start_tile: TileId::INVALID,
            path: TilePath::empty(),
            path_index: 0,
            reached_goal: false,
        }
    }

    pub fn pedestrian(id: AgentId, goal: Goal, risk: u8, walk: &WalkParams) -> Self {
        Self::base(
            id,
            AgentKind::Pedestrian(WalkerState::default()),
            goal,
            risk,
            walk.body_radius,
        )
    }

    pub fn driver(id: AgentId, goal: Goal, risk: u8, params: &SimParams) -> Self {
        let vehicle = VehicleState::new(&params.driver);
        let radius = params.driver.width.max(params.driver.length) * 0.5;
        Self::base(id, AgentKind::Driver(vehicle), goal, risk, radius)
    }

    pub fn mmv(id: AgentId, goal: Goal, risk: u8, params: &SimParams) -> Self {
        let vehicle = VehicleState::new(&params.mmv);
        let radius = params.mmv.width.max(params.mmv.length) * 0.5;
        Self::base(
            id,
            AgentKind::Mmv {
                vehicle,
                walker: WalkerState::default(),
                dismounted: false,
            },
            goal,
            risk,
            radius,
        )
    }

    // ── Class and mode queries ────────────────────────────────────────────

    #[inline]
    pub fn class(&self) -> AgentClass {
        match self.kind {
            AgentKind::Pedestrian(_) => AgentClass::Pedestrian,
            AgentKind::Driver(_) => AgentClass::Driver,
            AgentKind::Mmv { .. } => AgentClass::Mmv,
        }
    }

    /// `true` while the agent moves with the social-force model
    /// (pedestrian, or MMV in dismounted mode this tick).
    #[inline]
    pub fn is_walking(&self) -> bool {
        match self.kind {
            AgentKind::Pedestrian(_) => true,
            AgentKind::Mmv { dismounted, .. } => dismounted,
            AgentKind::Driver(_) => false,
        }
    }

    /// Walker payload when the walking mode exists (pedestrian or MMV).
    pub fn walker_state(&self) -> Option<&WalkerState> {
        match &self.kind {
            AgentKind::Pedestrian(w) => Some(w),
            AgentKind::Mmv { walker, .. } => Some(walker),
            AgentKind::Driver(_) => None,
        }
    }

    pub fn walker_state_mut(&mut self) -> Option<&mut WalkerState> {
        match &mut self.kind {
            AgentKind::Pedestrian(w) => Some(w),
            AgentKind::Mmv { walker, .. } => Some(walker),
            AgentKind::Driver(_) => None,
        }
    }

    /// Vehicle payload when one exists (driver or MMV).
    pub fn vehicle_state(&self) -> Option<&VehicleState> {
        match &self.kind {
            AgentKind::Driver(v) => Some(v),
            AgentKind::Mmv { vehicle, .. } => Some(vehicle),
            AgentKind::Pedestrian(_) => None,
        }
    }

    pub fn vehicle_state_mut(&mut self) -> Option<&mut VehicleState> {
        match &mut self.kind {
            AgentKind::Driver(v) => Some(v),
            AgentKind::Mmv { vehicle, .. } => Some(vehicle),
            AgentKind::Pedestrian(_) => None,
        }
    }

    // ── Placement and path ────────────────────────────────────────────────

    /// Place the agent at its spawn position, syncing the vehicle origin.
    pub fn place(&mut self, tile: TileId, position: Vec2, heading: f32) {
        self.start_tile = tile;
        self.start_position = position;
        self.position = position;
        self.heading = heading;
        if let Some(v) = self.vehicle_state_mut() {
            v.sync_origin(position, heading);
        }
    }

    /// `true` once the spawner has assigned a start tile.
    #[inline]
    pub fn is_placed(&self) -> bool {
        self.start_tile != TileId::INVALID
    }

    /// Install a freshly planned path and reset progress.
    pub fn set_path(&mut self, path: TilePath) {
        self.path = path;
        self.path_index = 0;
    }

    /// The waypoint the agent currently steers toward, if any remain.
    #[inline]
    pub fn current_waypoint(&self) -> Option<TileId> {
        self.path.waypoint(self.path_index)
    }

    /// Advance to the next waypoint (index stays bounded by `path.len()`).
    #[inline]
    pub fn advance_waypoint(&mut self) {
        if self.path_index < self.path.len() {
            self.path_index += 1;
        }
    }

    /// Distance from the current position to the goal position.
    #[inline]
    pub fn goal_distance(&self) -> f32 {
        self.position.distance(self.goal.position)
    }
}
