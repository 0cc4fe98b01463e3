use crate::{Error, Result};

/// Row-major toroidal field of cells, `0` is dead and `1` is alive.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Create a dead field of the given size.
    pub fn blank(width: usize, height: usize) -> Result<Self> {
        let len = area(width, height).ok_or(Error::InvalidShape {
            len: 0,
            width,
            height,
        })?;
        Self::from_cells(width, height, vec![0; len])
    }

    /// Wrap a row-major buffer; any non-zero cell counts as alive.
    pub fn from_cells(width: usize, height: usize, mut cells: Vec<u8>) -> Result<Self> {
        if area(width, height) != Some(cells.len()) {
            return Err(Error::InvalidShape {
                len: cells.len(),
                width,
                height,
            });
        }
        for c in cells.iter_mut() {
            *c = (*c != 0) as u8;
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a field from text rows: `#`, `O`, `o`, `*` or `1` is alive and
    /// `.`, `0`, `_` or a space is dead.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(Error::InvalidShape {
                    len: rows.iter().map(|r| r.chars().count()).sum(),
                    width,
                    height,
                });
            }
            for ch in row.chars() {
                let state = match ch {
                    '#' | 'O' | 'o' | '*' | '1' => 1,
                    '.' | '0' | '_' | ' ' => 0,
                    found => return Err(Error::InvalidPattern { row: y, found }),
                };
                cells.push(state);
            }
        }
        Self::from_cells(width, height, cells)
    }

    /// Create a field with random cells.
    ///
    /// `fill_rate` - probability of cell being alive
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(width: usize, height: usize, seed: Option<u64>, fill_rate: f64) -> Result<Self> {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        if !(0.0..=1.0).contains(&fill_rate) {
            return Err(Error::InvalidFillRate(fill_rate));
        }
        let len = area(width, height).ok_or(Error::InvalidShape {
            len: 0,
            width,
            height,
        })?;
        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let cells = (0..len)
            .map(|_| rng.gen_bool(fill_rate) as u8)
            .collect();
        Self::from_cells(width, height, cells)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[x + y * self.width] != 0
    }

    pub fn set(&mut self, x: usize, y: usize, state: bool) {
        self.cells[x + y * self.width] = state as u8;
    }

    /// Total number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().map(|&c| c as usize).sum()
    }

    /// Copy of the field surrounded by a one-cell frame taken from the
    /// opposite edges, so row `-1` repeats row `height - 1` and so on.
    ///
    /// Returns a row-major buffer of `(height + 2) x (width + 2)` cells.
    pub fn padded_with_wrap(&self) -> Vec<u8> {
        let (w, h) = (self.width, self.height);
        let stride = w + 2;
        let mut padded = vec![0; stride * (h + 2)];
        for py in 0..h + 2 {
            let y = (py + h - 1) % h;
            let src = &self.cells[y * w..(y + 1) * w];
            let dst = &mut padded[py * stride..(py + 1) * stride];
            dst[0] = src[w - 1];
            dst[1..=w].copy_from_slice(src);
            dst[w + 1] = src[0];
        }
        padded
    }
}

/// Number of cells of a non-empty `width x height` field, `None` if it is
/// empty or does not fit in `usize`.
fn area(width: usize, height: usize) -> Option<usize> {
    width.checked_mul(height).filter(|&n| n > 0)
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks_exact(self.width) {
            for &c in row {
                f.write_str(if c != 0 { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Grid {}x{}", self.width, self.height)?;
        write!(f, "{}", self)
    }
}
