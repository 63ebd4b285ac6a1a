//! The `TileGrid` — construction from painted codes and read-only queries.

use glam::Vec2;
use ts_core::TileId;

use crate::tile::{parse_code, GridLoc, Tile, TileKind};
use crate::{GridError, GridResult};

/// An R×R grid of materialized [`Tile`]s.
///
/// Built once per simulation run from the painter's code strings; immutable
/// thereafter.  Tiles are stored row-major so `TileId(row * R + col)` indexes
/// the backing `Vec` directly.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileGrid {
    tiles: Vec<Tile>,
    /// Rows (= columns; the painter contract guarantees a square grid).
    size: usize,
    tile_size: f32,
    /// Half the platform side; tile centres span `±(half − tile_size/2)`.
    half_extent: f32,
}

impl TileGrid {
    /// Materialize a painted grid.
    ///
    /// `codes` is indexed `codes[row][col]`; every cell must hold one code
    /// from the closed vocabulary and the grid must be square and fully
    /// populated.  `tile_size` is the side of one tile in world units.
    pub fn from_codes<S: AsRef<str>>(codes: &[Vec<S>], tile_size: f32) -> GridResult<TileGrid> {
        if codes.is_empty() {
            return Err(GridError::Empty);
        }
        if tile_size <= 0.0 {
            return Err(GridError::BadTileSize(tile_size));
        }
        let size = codes.len();
        for (row, cols) in codes.iter().enumerate() {
            if cols.len() != size {
                return Err(GridError::NotSquare {
                    rows: size,
                    row,
                    cols: cols.len(),
                });
            }
        }

        let half_extent = size as f32 * tile_size * 0.5;
        let mut tiles = Vec::with_capacity(size * size);
        for (row, cols) in codes.iter().enumerate() {
            for (col, code) in cols.iter().enumerate() {
                let (kind, dir) = parse_code(code.as_ref(), col, row)?;
                let center = Vec2::new(
                    -half_extent + (col as f32 + 0.5) * tile_size,
                    -half_extent + (row as f32 + 0.5) * tile_size,
                );
                let is_edge =
                    row == 0 || col == 0 || row == size - 1 || col == size - 1;
                tiles.push(Tile {
                    id: TileId((row * size + col) as u32),
                    grid_loc: GridLoc::new(col as i32, row as i32),
                    center,
                    kind,
                    dir,
                    size: tile_size,
                    is_edge,
                });
            }
        }

        Ok(TileGrid {
            tiles,
            size,
            tile_size,
            half_extent,
        })
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Grid side length R.
    #[inline]
    pub fn side(&self) -> usize {
        self.size
    }

    /// Side of one tile in world units.
    #[inline]
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// All tiles, row-major.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile by ID.  `None` for out-of-range or `INVALID` IDs.
    #[inline]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    /// Tile at integer grid coordinates.  `None` outside the grid.
    pub fn tile_at(&self, loc: GridLoc) -> Option<&Tile> {
        let r = self.size as i32;
        if loc.col < 0 || loc.row < 0 || loc.col >= r || loc.row >= r {
            return None;
        }
        self.tiles.get((loc.row * r + loc.col) as usize)
    }

    /// All tiles of `kind`, row-major order.
    pub fn tiles_of_kind(&self, kind: TileKind) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(move |t| t.kind == kind)
    }

    /// Boundary tiles of `kind` — the goal-eligible set.
    pub fn edge_tiles_of_kind(&self, kind: TileKind) -> impl Iterator<Item = &Tile> {
        self.tiles_of_kind(kind).filter(|t| t.is_edge)
    }

    /// The tile whose bounding square contains `point`, by direct index
    /// arithmetic (no search).  `None` off the platform.
    pub fn tile_containing(&self, point: Vec2) -> Option<&Tile> {
        let col = ((point.x + self.half_extent) / self.tile_size).floor() as i32;
        let row = ((point.y + self.half_extent) / self.tile_size).floor() as i32;
        self.tile_at(GridLoc::new(col, row))
    }
}
