//! Tile types, grid locations, and tile-code parsing.

use std::fmt;

use glam::Vec2;
use ts_core::TileId;

use crate::{GridError, GridResult};

// ── TileKind ──────────────────────────────────────────────────────────────────

/// Semantic type of a painted tile.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    Grass,
    Sidewalk,
    Road,
    /// A road tile carrying a painted crosswalk; the only legal
    /// sidewalk↔road transition surface.
    Crosswalk,
}

impl TileKind {
    /// `true` for road and crosswalk tiles, which must carry a direction.
    #[inline]
    pub fn is_directed(self) -> bool {
        matches!(self, TileKind::Road | TileKind::Crosswalk)
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TileKind::Grass => "grass",
            TileKind::Sidewalk => "sidewalk",
            TileKind::Road => "road",
            TileKind::Crosswalk => "road-cw",
        };
        f.write_str(s)
    }
}

// ── TravelDir ─────────────────────────────────────────────────────────────────

/// Travel direction painted on road and crosswalk tiles.
///
/// `Cross` marks intersection tiles, where lane discipline is relaxed and
/// crosswalks meet.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TravelDir {
    North,
    East,
    South,
    West,
    Cross,
}

impl TravelDir {
    /// The four cardinal directions, in neighbour-generation order.
    pub const CARDINAL: [TravelDir; 4] = [
        TravelDir::North,
        TravelDir::East,
        TravelDir::South,
        TravelDir::West,
    ];

    /// Grid offset `(dcol, drow)` of one step in this direction.
    /// `Cross` is not a movement direction and steps nowhere.
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            TravelDir::North => (0, -1),
            TravelDir::South => (0, 1),
            TravelDir::East => (1, 0),
            TravelDir::West => (-1, 0),
            TravelDir::Cross => (0, 0),
        }
    }

    /// The opposing cardinal direction; `Cross` opposes nothing.
    #[inline]
    pub fn opposite(self) -> TravelDir {
        match self {
            TravelDir::North => TravelDir::South,
            TravelDir::South => TravelDir::North,
            TravelDir::East => TravelDir::West,
            TravelDir::West => TravelDir::East,
            TravelDir::Cross => TravelDir::Cross,
        }
    }

    fn from_token(token: &str) -> Option<TravelDir> {
        match token {
            "N" => Some(TravelDir::North),
            "E" => Some(TravelDir::East),
            "S" => Some(TravelDir::South),
            "W" => Some(TravelDir::West),
            "X" => Some(TravelDir::Cross),
            _ => None,
        }
    }
}

// ── GridLoc ───────────────────────────────────────────────────────────────────

/// Integer grid coordinates: `col` grows eastward, `row` grows southward.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLoc {
    pub col: i32,
    pub row: i32,
}

impl GridLoc {
    #[inline]
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Manhattan distance in grid steps.
    #[inline]
    pub fn manhattan(self, other: GridLoc) -> i32 {
        (self.col - other.col).abs() + (self.row - other.row).abs()
    }

    /// The location one step away in `dir`.
    #[inline]
    pub fn step(self, dir: TravelDir) -> GridLoc {
        let (dc, dr) = dir.offset();
        GridLoc::new(self.col + dc, self.row + dr)
    }
}

impl fmt::Display for GridLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(c{}, r{})", self.col, self.row)
    }
}

// ── Tile ──────────────────────────────────────────────────────────────────────

/// One materialized grid cell.  Immutable for the lifetime of a run; shared
/// read-only across the pathfinder, spawner, and step models.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    /// `row * R + col`.
    pub id: TileId,
    pub grid_loc: GridLoc,
    /// World-space centre in the ground plane.
    pub center: Vec2,
    pub kind: TileKind,
    /// Present iff `kind.is_directed()`.
    pub dir: Option<TravelDir>,
    /// Side length in world units.
    pub size: f32,
    /// `true` if the tile lies on the grid boundary (goal-eligible).
    pub is_edge: bool,
}

impl Tile {
    /// `true` for road/crosswalk tiles painted with the intersection mark.
    #[inline]
    pub fn is_intersection(&self) -> bool {
        self.dir == Some(TravelDir::Cross)
    }

    /// `true` if `point` falls inside this tile's bounding square.
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        let half = self.size * 0.5;
        (point.x - self.center.x).abs() <= half && (point.y - self.center.y).abs() <= half
    }
}

// ── Tile-code parsing ─────────────────────────────────────────────────────────

/// Parse one tile-code string into `(kind, dir)`.
///
/// The closed vocabulary: `grass`, `sidewalk`, `road-<D>`, `road-CW-<D>`
/// with `<D> ∈ {N,E,S,W,X}`.
pub(crate) fn parse_code(code: &str, col: usize, row: usize) -> GridResult<(TileKind, Option<TravelDir>)> {
    let unknown = || GridError::UnknownCode {
        code: code.to_owned(),
        col,
        row,
    };

    let mut tokens = code.split('-');
    match tokens.next() {
        Some("grass") => match tokens.next() {
            None => Ok((TileKind::Grass, None)),
            Some(_) => Err(unknown()),
        },
        Some("sidewalk") => match tokens.next() {
            None => Ok((TileKind::Sidewalk, None)),
            Some(_) => Err(unknown()),
        },
        Some("road") => {
            let (kind, dir_token) = match tokens.next() {
                Some("CW") => (TileKind::Crosswalk, tokens.next()),
                other => (TileKind::Road, other),
            };
            if tokens.next().is_some() {
                return Err(unknown());
            }
            let token = dir_token.ok_or_else(|| GridError::MissingDirection {
                code: code.to_owned(),
                col,
                row,
            })?;
            let dir = TravelDir::from_token(token).ok_or_else(unknown)?;
            Ok((kind, Some(dir)))
        }
        _ => Err(unknown()),
    }
}
