use crate::naive::next_state;
use crate::region::{Interior, RegionView};

/// Brute-force transition of a region's interior.
///
/// Every interior cell finds all 8 neighbours inside the region, the halo
/// supplying those beyond the interior edge, so no wrapping is needed here.
pub fn evaluate(region: &RegionView) -> Interior {
    let (rows, cols) = (region.interior_rows(), region.interior_cols());
    let mut cells = Vec::with_capacity(rows * cols);
    for r in 1..=rows {
        let (above, curr, below) = (region.row(r - 1), region.row(r), region.row(r + 1));
        for c in 1..=cols {
            let neighbors = above[c - 1]
                + above[c]
                + above[c + 1]
                + curr[c - 1]
                + curr[c + 1]
                + below[c - 1]
                + below[c]
                + below[c + 1];
            cells.push(next_state(curr[c] != 0, neighbors) as u8);
        }
    }
    Interior::new(rows, cols, cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{naive_step, Grid};

    #[test]
    fn matches_oracle_on_wrap_padded_4x4() {
        for seed in 0..32 {
            let grid = Grid::random(4, 4, Some(seed), 0.5).unwrap();
            let padded = grid.padded_with_wrap();
            let next = evaluate(&RegionView::new(&padded, 6, 6));
            assert_eq!(next.cells(), naive_step(&grid).cells(), "seed {}", seed);
        }
    }

    #[test]
    fn halo_feeds_births() {
        // three live halo cells above the interior's top-left corner
        #[rustfmt::skip]
        let cells = [
            1, 1, 1, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
        ];
        let next = evaluate(&RegionView::new(&cells, 4, 4));
        assert_eq!(next.cells(), &[1, 0, 0, 0]);
    }
}
