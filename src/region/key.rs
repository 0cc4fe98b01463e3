use super::RegionView;

const HEADER_LEN: usize = 8;

/// Cache key of a region: its shape followed by its cells packed into bits.
///
/// Layout: `rows` and `cols` as little-endian `u32`, then every row packed
/// LSB first into `ceil(cols / 8)` bytes. The key *is* the content, so two
/// keys are equal exactly when the regions are, and keys of one shape all
/// have the same length.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RegionKey(Box<[u8]>);

impl RegionKey {
    pub fn of(region: &RegionView) -> Self {
        let (rows, cols) = (region.rows(), region.cols());
        let row_bytes = cols.div_ceil(8);
        let mut bytes = vec![0u8; HEADER_LEN + rows * row_bytes];
        bytes[..4].copy_from_slice(&(rows as u32).to_le_bytes());
        bytes[4..HEADER_LEN].copy_from_slice(&(cols as u32).to_le_bytes());
        for (r, packed) in bytes[HEADER_LEN..].chunks_exact_mut(row_bytes).enumerate() {
            for (c, &cell) in region.row(r).iter().enumerate() {
                packed[c / 8] |= (cell & 1) << (c % 8);
            }
        }
        Self(bytes.into_boxed_slice())
    }

    /// `(rows, cols)` of the region, halo included.
    pub fn shape(&self) -> (usize, usize) {
        let rows = u32::from_le_bytes([self.0[0], self.0[1], self.0[2], self.0[3]]);
        let cols = u32::from_le_bytes([self.0[4], self.0[5], self.0[6], self.0[7]]);
        (rows as usize, cols as usize)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn bytes_total(&self) -> usize {
        self.0.len()
    }
}

impl std::fmt::Debug for RegionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (rows, cols) = self.shape();
        write!(f, "RegionKey({}x{}, ", rows, cols)?;
        for b in &self.0[HEADER_LEN..] {
            write!(f, "{:02x}", b)?;
        }
        write!(f, ")")
    }
}
