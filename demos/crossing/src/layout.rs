//! Painted layout for the crossing demo.
//!
//! A 12×12 platform with two two-lane roads meeting at a four-tile
//! intersection.  Traffic is left-hand: the northbound lane is the western
//! one, the eastbound lane the northern one.  Each intersection approach
//! carries a crosswalk pair, so pedestrians can cross both roads and
//! drivers brake on approach.

/// Grid side in tiles.
pub const SIDE: usize = 12;

/// Tile side in world units — comfortably larger than a car footprint.
pub const TILE_SIZE: f32 = 64.0;

/// Vertical road lanes (northbound, southbound).
const V_LANES: (usize, usize) = (5, 6);
/// Horizontal road lanes (eastbound, westbound).
const H_LANES: (usize, usize) = (5, 6);

fn code_at(col: usize, row: usize) -> &'static str {
    let (nb, sb) = V_LANES;
    let (eb, wb) = H_LANES;
    let on_vertical = col == nb || col == sb;
    let on_horizontal = row == eb || row == wb;

    if on_vertical && on_horizontal {
        return "road-X";
    }
    if on_vertical {
        // Crosswalks flank the intersection one tile out.
        let crosswalk = row + 1 == eb || row == wb + 1;
        return match (col == nb, crosswalk) {
            (true, true) => "road-CW-N",
            (true, false) => "road-N",
            (false, true) => "road-CW-S",
            (false, false) => "road-S",
        };
    }
    if on_horizontal {
        let crosswalk = col + 1 == nb || col == sb + 1;
        return match (row == eb, crosswalk) {
            (true, true) => "road-CW-E",
            (true, false) => "road-E",
            (false, true) => "road-CW-W",
            (false, false) => "road-W",
        };
    }

    // Quadrant interiors get a grass patch; everything else is sidewalk.
    let quadrant_grass = |a: usize| (2..=3).contains(&a) || (8..=9).contains(&a);
    if quadrant_grass(col) && quadrant_grass(row) {
        "grass"
    } else {
        "sidewalk"
    }
}

/// The painted tile codes, indexed `[row][col]`.
pub fn painted_codes() -> Vec<Vec<String>> {
    (0..SIDE)
        .map(|row| (0..SIDE).map(|col| code_at(col, row).to_string()).collect())
        .collect()
}
