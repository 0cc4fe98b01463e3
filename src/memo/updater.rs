use super::{leaf, RegionCache};
use crate::region::{merge, split, Interior, RegionView};
use crate::{Error, Result, LEAF_SIDE};
use std::sync::Arc;

/// Whether `region` is small enough to be evaluated cell by cell.
#[inline]
pub fn at_floor(region: &RegionView) -> bool {
    region.interior_rows() == LEAF_SIDE || region.interior_cols() == LEAF_SIDE
}

/// Checks that a `width x height` interior halves evenly until one side
/// equals [`LEAF_SIDE`]; the other side may then be of any size.
///
/// Returns the number of splits on the way down.
pub fn check_dimensions(width: usize, height: usize) -> Result<u32> {
    let (mut w, mut h) = (width, height);
    let mut depth = 0;
    loop {
        if w == LEAF_SIDE || h == LEAF_SIDE {
            return Ok(depth);
        }
        if w < LEAF_SIDE || h < LEAF_SIDE || w % 2 != 0 || h % 2 != 0 {
            break;
        }
        (w, h, depth) = (w / 2, h / 2, depth + 1);
    }
    Err(Error::InvalidDimensions {
        width,
        height,
        leaf: LEAF_SIDE,
    })
}

/// Next generation of the interior of `region`.
///
/// Cached regions are returned directly. Otherwise the region is either
/// evaluated as a leaf or split into quadrants that are updated recursively
/// and merged back; the result is cached under the region's key.
///
/// The interior dimensions must pass [`check_dimensions`].
pub fn update(cache: &mut RegionCache, region: &RegionView) -> Arc<Interior> {
    let key = region.key();
    if let Some(interior) = cache.get(&key) {
        return interior;
    }

    let result = if at_floor(region) {
        Arc::new(leaf::evaluate(region))
    } else {
        // quadrants read only the shared input cells, so order is irrelevant
        let [nw, ne, sw, se] = split(region).map(|q| update(cache, &q));
        Arc::new(merge([&nw, &ne, &sw, &se]))
    };
    cache.insert(key, result.clone());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{naive_step, Grid};

    #[test]
    fn dimensions_that_reach_the_floor() {
        assert_eq!(check_dimensions(4, 4), Ok(0));
        assert_eq!(check_dimensions(8, 8), Ok(1));
        assert_eq!(check_dimensions(256, 256), Ok(6));
        assert_eq!(check_dimensions(32, 8), Ok(1));
        assert_eq!(check_dimensions(4, 100), Ok(0));
        assert_eq!(check_dimensions(12, 8), Ok(1));
        assert_eq!(check_dimensions(24, 32), Ok(3));
        assert_eq!(check_dimensions(4, 2), Ok(0));
    }

    #[test]
    fn dimensions_that_never_reach_the_floor() {
        for (w, h) in [(12, 12), (2, 8), (3, 3), (10, 10), (8, 1), (6, 6)] {
            assert_eq!(
                check_dimensions(w, h),
                Err(Error::InvalidDimensions {
                    width: w,
                    height: h,
                    leaf: LEAF_SIDE
                }),
                "{}x{}",
                w,
                h
            );
        }
    }

    #[test]
    fn every_visited_region_is_cached() {
        let grid = Grid::random(16, 16, Some(5), 0.4).unwrap();
        let padded = grid.padded_with_wrap();
        let root = RegionView::new(&padded, 18, 18);
        let mut cache = RegionCache::default();
        update(&mut cache, &root);

        fn visit(cache: &RegionCache, region: &RegionView) {
            let hit = cache.peek(region).expect("visited region must be cached");
            let (rows, cols) = (region.interior_rows(), region.interior_cols());
            // each cached interior must equal the direct evaluation of its region
            assert_eq!(*hit, leaf::evaluate(region));
            assert_eq!((hit.rows(), hit.cols()), (rows, cols));
            if !at_floor(region) {
                for q in split(region) {
                    visit(cache, &q);
                }
            }
        }
        visit(&cache, &root);
        assert_eq!(
            Grid::from_cells(16, 16, cache.peek(&root).unwrap().cells().to_vec()).unwrap(),
            naive_step(&grid)
        );
    }

    #[test]
    fn repeated_quadrants_are_computed_once() {
        let grid = Grid::blank(32, 32).unwrap();
        let padded = grid.padded_with_wrap();
        let mut cache = RegionCache::default();
        update(&mut cache, &RegionView::new(&padded, 34, 34));
        // one distinct dead region per level: 34, 18, 10, 6
        assert_eq!(cache.len(), 4);
        assert_eq!(cache.misses(), 4);
        assert_eq!(cache.hits(), 3 * 3);
    }
}
