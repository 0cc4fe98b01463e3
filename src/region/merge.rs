use super::Interior;

/// Glues `[nw, ne, sw, se]` interiors back into one, the inverse of
/// [`split`](super::split) once the halos are gone.
pub fn merge(parts: [&Interior; 4]) -> Interior {
    let [nw, ne, sw, se] = parts;
    debug_assert!(nw.rows() == ne.rows() && sw.rows() == se.rows());
    debug_assert!(nw.cols() == sw.cols() && ne.cols() == se.cols());

    let rows = nw.rows() + sw.rows();
    let cols = nw.cols() + ne.cols();
    let mut cells = Vec::with_capacity(rows * cols);
    for (left, right) in [(nw, ne), (sw, se)] {
        for r in 0..left.rows() {
            cells.extend_from_slice(left.row(r));
            cells.extend_from_slice(right.row(r));
        }
    }
    Interior::new(rows, cols, cells)
}
