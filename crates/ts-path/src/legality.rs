//! Per-class move legality rules.
//!
//! Each function judges one candidate edge `curr → next` of the tile graph.
//! All rules must pass for the move to be generated as an A* neighbour.

use ts_core::AgentClass;
use ts_grid::{Tile, TileKind, TravelDir};

/// Tile-kind membership per agent class.
#[inline]
pub fn kind_allowed(class: AgentClass, kind: TileKind) -> bool {
    match class {
        AgentClass::Pedestrian => matches!(kind, TileKind::Sidewalk | TileKind::Crosswalk),
        AgentClass::Mmv => matches!(
            kind,
            TileKind::Sidewalk | TileKind::Crosswalk | TileKind::Road
        ),
        AgentClass::Driver => matches!(kind, TileKind::Road | TileKind::Crosswalk),
    }
}

/// Direct road↔sidewalk transitions are forbidden for every class; the
/// crosswalk kind is the only legal crossing surface.
#[inline]
pub fn domain_crossing_ok(curr: &Tile, next: &Tile) -> bool {
    !matches!(
        (curr.kind, next.kind),
        (TileKind::Road, TileKind::Sidewalk) | (TileKind::Sidewalk, TileKind::Road)
    )
}

// ── Driver lane keeping ───────────────────────────────────────────────────────

/// Lane-keeping constraint for drivers.
///
/// The current tile's *effective* type decides the rule: a tile painted with
/// direction `X` is treated as an intersection regardless of its raw kind.
///
/// | From           | Candidate must satisfy                                        |
/// |----------------|---------------------------------------------------------------|
/// | plain road     | road or crosswalk, sharing the current tile's direction       |
/// | intersection   | crosswalk matching the goal direction, or plain road with `X` |
/// | crosswalk      | direction matching the goal, or `X`                           |
///
/// `goal_dir` is the goal tile's painted direction.
pub fn lane_keeping(curr: &Tile, next: &Tile, goal_dir: Option<TravelDir>) -> bool {
    if curr.is_intersection() {
        return if next.kind == TileKind::Crosswalk {
            next.dir == goal_dir
        } else {
            next.dir == Some(TravelDir::Cross)
        };
    }
    match curr.kind {
        TileKind::Road => {
            matches!(next.kind, TileKind::Road | TileKind::Crosswalk) && next.dir == curr.dir
        }
        TileKind::Crosswalk => next.dir == goal_dir || next.dir == Some(TravelDir::Cross),
        // A driver on grass or sidewalk has no legal move at all.
        _ => false,
    }
}

// ── MMV direction rule ────────────────────────────────────────────────────────

/// `true` when `curr` and `next` carry opposing cardinal directions
/// (N↔S or E↔W).  Tiles without a direction never oppose anything.
#[inline]
fn opposing_dirs(curr: &Tile, next: &Tile) -> bool {
    match (curr.dir, next.dir) {
        (Some(a), Some(b)) => a != TravelDir::Cross && b == a.opposite(),
        _ => false,
    }
}

/// Crosswalk compatibility: the exemption that lets an MMV make an otherwise
/// opposing-direction move.
///
/// Only moves *from* a crosswalk tile qualify.  Onto another crosswalk or a
/// sidewalk the move is always fine; onto a road it needs a matching
/// direction, or an intersection (`X`) entered along the crosswalk's own
/// direction.
fn crosswalk_compatible(curr: &Tile, next: &Tile) -> bool {
    if curr.kind != TileKind::Crosswalk {
        return false;
    }
    match next.kind {
        TileKind::Crosswalk | TileKind::Sidewalk => true,
        TileKind::Road => {
            if next.dir == curr.dir {
                return true;
            }
            next.dir == Some(TravelDir::Cross) && step_matches_dir(curr, next)
        }
        TileKind::Grass => false,
    }
}

/// `true` if moving `curr → next` steps along `curr`'s own painted direction.
fn step_matches_dir(curr: &Tile, next: &Tile) -> bool {
    match curr.dir {
        Some(dir) if dir != TravelDir::Cross => curr.grid_loc.step(dir) == next.grid_loc,
        _ => false,
    }
}

/// The full MMV rule: opposing-direction transitions are rejected unless the
/// crosswalk exemption validates the move.
pub fn mmv_transition_ok(curr: &Tile, next: &Tile) -> bool {
    if !opposing_dirs(curr, next) {
        return true;
    }
    crosswalk_compatible(curr, next)
}

// ── Combined filter ───────────────────────────────────────────────────────────

/// All legality rules for one candidate edge, in one place.
pub fn move_allowed(
    class: AgentClass,
    curr: &Tile,
    next: &Tile,
    goal_dir: Option<TravelDir>,
) -> bool {
    if !domain_crossing_ok(curr, next) {
        return false;
    }
    match class {
        AgentClass::Mmv if !mmv_transition_ok(curr, next) => return false,
        AgentClass::Driver if !lane_keeping(curr, next, goal_dir) => return false,
        _ => {}
    }
    kind_allowed(class, next.kind)
}
