//! Unit tests for ts-path.
//!
//! Grids are painted inline; expected paths are checked structurally
//! (endpoints, 4-adjacency, legality) rather than tile-by-tile where several
//! optimal paths exist.

mod helpers {
    use ts_core::{AgentClass, TileId};
    use ts_grid::{GridLoc, TileGrid, TileKind};

    use crate::{AStarPlanner, Planner, TilePath};

    pub fn grid(rows: &[&[&str]]) -> TileGrid {
        let codes: Vec<Vec<String>> = rows
            .iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect();
        TileGrid::from_codes(&codes, 16.0).expect("valid test grid")
    }

    pub fn plan(
        grid: &TileGrid,
        start: (i32, i32),
        goal: (i32, i32),
        class: AgentClass,
    ) -> Option<TilePath> {
        let s = grid.tile_at(GridLoc::new(start.0, start.1)).unwrap().id;
        let g = grid.tile_at(GridLoc::new(goal.0, goal.1)).unwrap().id;
        AStarPlanner.plan(grid, s, g, class)
    }

    /// Structural checks shared by every scenario: endpoints, 4-adjacency,
    /// and the no-direct-road↔sidewalk property.
    pub fn assert_well_formed(grid: &TileGrid, path: &TilePath, start: TileId, goal: TileId) {
        let tiles = path.tiles();
        assert_eq!(tiles.first(), Some(&start), "path must start at start");
        assert_eq!(tiles.last(), Some(&goal), "path must end at goal");
        for pair in tiles.windows(2) {
            let a = grid.tile(pair[0]).unwrap();
            let b = grid.tile(pair[1]).unwrap();
            assert_eq!(
                a.grid_loc.manhattan(b.grid_loc),
                1,
                "consecutive tiles must be 4-adjacent: {} → {}",
                a.grid_loc,
                b.grid_loc
            );
            let crossing = matches!(
                (a.kind, b.kind),
                (TileKind::Road, TileKind::Sidewalk) | (TileKind::Sidewalk, TileKind::Road)
            );
            assert!(!crossing, "direct road↔sidewalk step at {}", a.grid_loc);
        }
    }
}

// ── Pedestrian paths ──────────────────────────────────────────────────────────

mod pedestrian {
    use ts_core::AgentClass;
    use ts_grid::{GridLoc, TileKind};

    use super::helpers::{assert_well_formed, grid, plan};

    #[test]
    fn open_sidewalk_path_has_manhattan_length() {
        let g = grid(&[
            &["sidewalk", "sidewalk", "sidewalk", "sidewalk"],
            &["sidewalk", "sidewalk", "sidewalk", "sidewalk"],
            &["sidewalk", "sidewalk", "sidewalk", "sidewalk"],
            &["sidewalk", "sidewalk", "sidewalk", "sidewalk"],
        ]);
        let path = plan(&g, (0, 0), (3, 3), AgentClass::Pedestrian).expect("path");
        // Manhattan distance 6 → 7 tiles including both endpoints.
        assert_eq!(path.len(), 7);
        let s = g.tile_at(GridLoc::new(0, 0)).unwrap().id;
        let e = g.tile_at(GridLoc::new(3, 3)).unwrap().id;
        assert_well_formed(&g, &path, s, e);
        for &t in path.tiles() {
            assert_eq!(g.tile(t).unwrap().kind, TileKind::Sidewalk);
        }
    }

    #[test]
    fn grass_is_impassable() {
        let g = grid(&[
            &["sidewalk", "grass", "sidewalk"],
            &["grass", "grass", "sidewalk"],
            &["sidewalk", "grass", "sidewalk"],
        ]);
        assert!(plan(&g, (0, 0), (0, 2), AgentClass::Pedestrian).is_none());
    }

    #[test]
    fn road_without_crosswalk_blocks_pedestrians() {
        // A vertical road splits the sidewalk; no crosswalk anywhere.
        let g = grid(&[
            &["sidewalk", "road-N", "sidewalk"],
            &["sidewalk", "road-N", "sidewalk"],
            &["sidewalk", "road-N", "sidewalk"],
        ]);
        assert!(plan(&g, (0, 1), (2, 1), AgentClass::Pedestrian).is_none());
    }

    #[test]
    fn crosswalk_bridges_the_road() {
        let g = grid(&[
            &["sidewalk", "road-N", "sidewalk"],
            &["sidewalk", "road-CW-N", "sidewalk"],
            &["sidewalk", "road-N", "sidewalk"],
        ]);
        let path = plan(&g, (0, 1), (2, 1), AgentClass::Pedestrian).expect("path");
        let s = g.tile_at(GridLoc::new(0, 1)).unwrap().id;
        let e = g.tile_at(GridLoc::new(2, 1)).unwrap().id;
        assert_well_formed(&g, &path, s, e);
        // The middle tile must be the crosswalk, never the plain road.
        for &t in path.tiles() {
            assert_ne!(g.tile(t).unwrap().kind, TileKind::Road);
        }
    }
}

// ── Driver paths ──────────────────────────────────────────────────────────────

mod driver {
    use ts_core::AgentClass;
    use ts_grid::{GridLoc, TravelDir};

    use super::helpers::{assert_well_formed, grid, plan};

    /// A 5×5 crossroad: northbound road on column 2, eastbound road on
    /// row 2, intersection at (2,2), crosswalk rings flanking it.
    fn crossroad() -> ts_grid::TileGrid {
        grid(&[
            &["sidewalk", "sidewalk", "road-N", "sidewalk", "sidewalk"],
            &["sidewalk", "sidewalk", "road-CW-N", "sidewalk", "sidewalk"],
            &["road-E", "road-CW-E", "road-X", "road-CW-E", "road-E"],
            &["sidewalk", "sidewalk", "road-CW-N", "sidewalk", "sidewalk"],
            &["sidewalk", "sidewalk", "road-N", "sidewalk", "sidewalk"],
        ])
    }

    #[test]
    fn straight_road_preserves_direction() {
        let g = crossroad();
        let path = plan(&g, (2, 4), (2, 0), AgentClass::Driver).expect("path");
        let s = g.tile_at(GridLoc::new(2, 4)).unwrap().id;
        let e = g.tile_at(GridLoc::new(2, 0)).unwrap().id;
        assert_well_formed(&g, &path, s, e);
        assert_eq!(path.len(), 5);
        // Every tile on the straight-through path heads north or is the
        // intersection itself.
        for &t in path.tiles() {
            let dir = g.tile(t).unwrap().dir.unwrap();
            assert!(matches!(dir, TravelDir::North | TravelDir::Cross));
        }
    }

    #[test]
    fn turn_exits_through_matching_crosswalk() {
        let g = crossroad();
        // Northbound start, eastbound goal: must pass (2,2) then (3,2).
        let path = plan(&g, (2, 4), (4, 2), AgentClass::Driver).expect("path");
        let s = g.tile_at(GridLoc::new(2, 4)).unwrap().id;
        let e = g.tile_at(GridLoc::new(4, 2)).unwrap().id;
        assert_well_formed(&g, &path, s, e);
        let locs: Vec<GridLoc> = path
            .tiles()
            .iter()
            .map(|&t| g.tile(t).unwrap().grid_loc)
            .collect();
        assert!(locs.contains(&GridLoc::new(2, 2)), "must cross the intersection");
        assert!(
            locs.contains(&GridLoc::new(3, 2)),
            "must exit via the goal-direction crosswalk"
        );
    }

    #[test]
    fn opposing_lane_is_never_used() {
        // Two-lane road: column 1 southbound, column 2 northbound.
        let g = grid(&[
            &["sidewalk", "road-S", "road-N", "sidewalk"],
            &["sidewalk", "road-S", "road-N", "sidewalk"],
            &["sidewalk", "road-S", "road-N", "sidewalk"],
            &["sidewalk", "road-S", "road-N", "sidewalk"],
        ]);
        let path = plan(&g, (2, 3), (2, 0), AgentClass::Driver).expect("path");
        for &t in path.tiles() {
            assert_eq!(g.tile(t).unwrap().dir, Some(TravelDir::North));
        }
        // And the opposing lane is unreachable from this one: switching
        // lanes would require stepping onto a tile with a different
        // direction, which lane keeping forbids everywhere but intersections.
        assert!(plan(&g, (2, 0), (1, 3), AgentClass::Driver).is_none());
    }

    #[test]
    fn driver_never_touches_sidewalk() {
        let g = crossroad();
        let path = plan(&g, (2, 4), (2, 0), AgentClass::Driver).expect("path");
        for &t in path.tiles() {
            assert!(g.tile(t).unwrap().kind.is_directed());
        }
    }
}

// ── MMV paths ─────────────────────────────────────────────────────────────────

mod mmv {
    use ts_core::AgentClass;
    use ts_grid::GridLoc;

    use super::helpers::{assert_well_formed, grid, plan};

    #[test]
    fn sidewalk_and_road_both_legal() {
        let g = grid(&[
            &["sidewalk", "road-N", "sidewalk"],
            &["sidewalk", "road-CW-N", "sidewalk"],
            &["sidewalk", "road-N", "sidewalk"],
        ]);
        let path = plan(&g, (0, 2), (2, 0), AgentClass::Mmv).expect("path");
        let s = g.tile_at(GridLoc::new(0, 2)).unwrap().id;
        let e = g.tile_at(GridLoc::new(2, 0)).unwrap().id;
        assert_well_formed(&g, &path, s, e);
    }

    #[test]
    fn opposing_direction_step_is_rejected_on_road() {
        // Northbound lane directly beside a southbound lane; an MMV riding
        // north must not sidestep into the opposing lane.
        let g = grid(&[
            &["road-S", "road-N"],
            &["road-S", "road-N"],
        ]);
        let path = plan(&g, (1, 1), (1, 0), AgentClass::Mmv).expect("path");
        for &t in path.tiles() {
            assert_eq!(g.tile(t).unwrap().grid_loc.col, 1);
        }
    }

    #[test]
    fn crosswalk_exemption_allows_crossing_opposing_road() {
        // The crosswalk carries dir E (painted across a southbound road);
        // stepping from it onto sidewalk is always allowed even though the
        // neighbouring road opposes.
        let g = grid(&[
            &["sidewalk", "road-S", "sidewalk"],
            &["sidewalk", "road-CW-E", "sidewalk"],
            &["sidewalk", "road-S", "sidewalk"],
        ]);
        let path = plan(&g, (0, 1), (2, 1), AgentClass::Mmv).expect("path");
        assert_eq!(path.len(), 3);
    }
}

// ── Algorithm behaviour ───────────────────────────────────────────────────────

mod search {
    use ts_core::{AgentClass, TileId};
    use ts_grid::GridLoc;

    use crate::{AStarPlanner, Planner};
    use super::helpers::{grid, plan};

    #[test]
    fn rediscovery_with_better_g_still_yields_shortest_path() {
        // A U-shaped obstacle forces the frontier to wrap around; a naive
        // open list that never improves stale entries can return a detour.
        let g = grid(&[
            &["sidewalk", "sidewalk", "sidewalk", "sidewalk", "sidewalk"],
            &["sidewalk", "grass", "grass", "grass", "sidewalk"],
            &["sidewalk", "grass", "sidewalk", "grass", "sidewalk"],
            &["sidewalk", "grass", "grass", "grass", "sidewalk"],
            &["sidewalk", "sidewalk", "sidewalk", "sidewalk", "sidewalk"],
        ]);
        let path = plan(&g, (0, 0), (4, 4), AgentClass::Pedestrian).expect("path");
        // Shortest route around the ring is Manhattan-optimal: 8 steps.
        assert_eq!(path.len(), 9);
    }

    #[test]
    fn start_equals_goal_is_a_single_tile_path() {
        let g = grid(&[&["sidewalk"]]);
        let path = plan(&g, (0, 0), (0, 0), AgentClass::Pedestrian).expect("path");
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn unknown_tile_ids_yield_none() {
        let g = grid(&[&["sidewalk"]]);
        let valid = g.tile_at(GridLoc::new(0, 0)).unwrap().id;
        assert!(AStarPlanner
            .plan(&g, TileId(99), valid, AgentClass::Pedestrian)
            .is_none());
        assert!(AStarPlanner
            .plan(&g, valid, TileId::INVALID, AgentClass::Pedestrian)
            .is_none());
    }
}
