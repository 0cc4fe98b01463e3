use super::RegionView;

/// Cuts a region into `[nw, ne, sw, se]` quadrants at the midpoints of the
/// padded shape.
///
/// Neighbouring quadrants share exactly two rows (columns): the last interior
/// row of one is the halo of the other and vice versa, so every quadrant is a
/// complete region by itself.
pub fn split<'a>(region: &RegionView<'a>) -> [RegionView<'a>; 4] {
    let (rows, cols) = (region.rows(), region.cols());
    let (mid_r, mid_c) = (rows / 2, cols / 2);
    let (top, left) = (mid_r + 1, mid_c + 1);
    let (bottom, right) = (rows - (mid_r - 1), cols - (mid_c - 1));
    [
        region.window(0, 0, top, left),
        region.window(0, mid_c - 1, top, right),
        region.window(mid_r - 1, 0, bottom, left),
        region.window(mid_r - 1, mid_c - 1, bottom, right),
    ]
}
