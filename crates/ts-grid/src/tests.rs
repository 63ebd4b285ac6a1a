//! Unit tests for ts-grid.
//!
//! All tests use small hand-painted grids.

mod helpers {
    use crate::TileGrid;

    /// Paint a grid from string-literal rows: `grid(&[&["grass", ...], ...])`.
    pub fn grid(rows: &[&[&str]], tile_size: f32) -> TileGrid {
        let codes: Vec<Vec<String>> = rows
            .iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect();
        TileGrid::from_codes(&codes, tile_size).expect("valid test grid")
    }

    /// A 4×4 grid with a vertical road on column 2, a crosswalk on row 1,
    /// and sidewalk everywhere else.
    pub fn road_strip() -> TileGrid {
        grid(
            &[
                &["sidewalk", "sidewalk", "road-N", "sidewalk"],
                &["sidewalk", "sidewalk", "road-CW-N", "sidewalk"],
                &["sidewalk", "sidewalk", "road-N", "sidewalk"],
                &["sidewalk", "sidewalk", "road-N", "sidewalk"],
            ],
            16.0,
        )
    }
}

// ── Code parsing ──────────────────────────────────────────────────────────────

mod parsing {
    use crate::{GridError, TileGrid, TileKind, TravelDir};

    fn parse_single(code: &str) -> Result<TileGrid, GridError> {
        TileGrid::from_codes(&[vec![code.to_string()]], 16.0)
    }

    #[test]
    fn full_vocabulary_parses() {
        for (code, kind, dir) in [
            ("grass", TileKind::Grass, None),
            ("sidewalk", TileKind::Sidewalk, None),
            ("road-N", TileKind::Road, Some(TravelDir::North)),
            ("road-E", TileKind::Road, Some(TravelDir::East)),
            ("road-S", TileKind::Road, Some(TravelDir::South)),
            ("road-W", TileKind::Road, Some(TravelDir::West)),
            ("road-X", TileKind::Road, Some(TravelDir::Cross)),
            ("road-CW-E", TileKind::Crosswalk, Some(TravelDir::East)),
            ("road-CW-X", TileKind::Crosswalk, Some(TravelDir::Cross)),
        ] {
            let g = parse_single(code).unwrap_or_else(|e| panic!("{code}: {e}"));
            let t = &g.tiles()[0];
            assert_eq!(t.kind, kind, "{code}");
            assert_eq!(t.dir, dir, "{code}");
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        for code in ["water", "side-walk", "grass-N", "sidewalk-CW", "road-Q"] {
            assert!(
                matches!(parse_single(code), Err(GridError::UnknownCode { .. })),
                "{code} should be unknown"
            );
        }
    }

    #[test]
    fn road_without_direction_is_rejected() {
        assert!(matches!(
            parse_single("road"),
            Err(GridError::MissingDirection { .. })
        ));
        assert!(matches!(
            parse_single("road-CW"),
            Err(GridError::MissingDirection { .. })
        ));
    }

    #[test]
    fn non_square_grid_is_rejected() {
        let codes = vec![
            vec!["grass".to_string(), "grass".to_string()],
            vec!["grass".to_string()],
        ];
        assert!(matches!(
            TileGrid::from_codes(&codes, 16.0),
            Err(GridError::NotSquare { .. })
        ));
    }

    #[test]
    fn empty_grid_is_rejected() {
        let codes: Vec<Vec<String>> = vec![];
        assert!(matches!(
            TileGrid::from_codes(&codes, 16.0),
            Err(GridError::Empty)
        ));
    }
}

// ── Materialization invariants ────────────────────────────────────────────────

mod materialize {
    use glam::Vec2;
    use ts_core::TileId;

    use crate::tile::GridLoc;
    use super::helpers::road_strip;

    #[test]
    fn direction_iff_directed_kind() {
        let g = road_strip();
        for t in g.tiles() {
            assert_eq!(
                t.dir.is_some(),
                t.kind.is_directed(),
                "tile {} at {}",
                t.id,
                t.grid_loc
            );
        }
    }

    #[test]
    fn ids_are_row_major() {
        let g = road_strip();
        for t in g.tiles() {
            assert_eq!(
                t.id,
                TileId((t.grid_loc.row * 4 + t.grid_loc.col) as u32)
            );
            assert_eq!(g.tile(t.id).unwrap().grid_loc, t.grid_loc);
        }
    }

    #[test]
    fn edge_flags_mark_the_boundary() {
        let g = road_strip();
        for t in g.tiles() {
            let expect = t.grid_loc.col == 0
                || t.grid_loc.row == 0
                || t.grid_loc.col == 3
                || t.grid_loc.row == 3;
            assert_eq!(t.is_edge, expect, "tile at {}", t.grid_loc);
        }
    }

    #[test]
    fn world_centres_are_platform_centred() {
        let g = road_strip(); // 4×4 tiles of 16 → platform 64, half 32
        let nw = g.tile_at(GridLoc::new(0, 0)).unwrap();
        assert_eq!(nw.center, Vec2::new(-24.0, -24.0));
        let se = g.tile_at(GridLoc::new(3, 3)).unwrap();
        assert_eq!(se.center, Vec2::new(24.0, 24.0));
    }

    #[test]
    fn tile_at_rejects_out_of_range() {
        let g = road_strip();
        assert!(g.tile_at(GridLoc::new(-1, 0)).is_none());
        assert!(g.tile_at(GridLoc::new(0, 4)).is_none());
    }

    #[test]
    fn tile_containing_round_trips_centres() {
        let g = road_strip();
        for t in g.tiles() {
            assert_eq!(g.tile_containing(t.center).unwrap().id, t.id);
        }
        assert!(g.tile_containing(Vec2::new(1000.0, 0.0)).is_none());
    }
}

// ── Goals ─────────────────────────────────────────────────────────────────────

mod goals {
    use crate::{edge_goals, TileKind};
    use super::helpers::road_strip;

    #[test]
    fn goals_reference_real_edge_tiles_of_matching_kind() {
        let g = road_strip();
        let road_goals = edge_goals(&g, TileKind::Road, 0);
        // Column 2 touches the boundary at rows 0 and 3 (row 1 is a crosswalk).
        assert_eq!(road_goals.len(), 2);
        for goal in &road_goals {
            let tile = g.tile(goal.tile).unwrap();
            assert!(tile.is_edge);
            assert_eq!(tile.kind, TileKind::Road);
            assert_eq!(goal.position, tile.center);
            assert_eq!(goal.dir, tile.dir);
        }
    }

    #[test]
    fn goal_ids_continue_from_first_id() {
        let g = road_strip();
        let road = edge_goals(&g, TileKind::Road, 0);
        let sidewalk = edge_goals(&g, TileKind::Sidewalk, road.len() as u32);
        let mut all: Vec<u32> = road
            .iter()
            .chain(sidewalk.iter())
            .map(|g| g.id.0)
            .collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), road.len() + sidewalk.len());
    }
}
