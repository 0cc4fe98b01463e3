//! Rectangular regions of the padded field.
//!
//! A [`RegionView`] never owns cells: it is a window (offsets plus stride)
//! into the wrap-padded buffer built once per generation, so splitting a
//! region only produces new windows. A region always carries a one-cell halo
//! around the interior it is responsible for.

mod key;
mod merge;
mod split;

pub use key::RegionKey;
pub use merge::merge;
pub use split::split;

#[derive(Clone, Copy)]
pub struct RegionView<'a> {
    buf: &'a [u8],
    stride: usize,
    row0: usize,
    col0: usize,
    rows: usize,
    cols: usize,
}

impl<'a> RegionView<'a> {
    /// View over a whole row-major buffer of `rows x cols` cells.
    pub fn new(buf: &'a [u8], rows: usize, cols: usize) -> Self {
        assert_eq!(buf.len(), rows * cols, "buffer does not match the shape");
        Self {
            buf,
            stride: cols,
            row0: 0,
            col0: 0,
            rows,
            cols,
        }
    }

    /// Rows including the halo.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Columns including the halo.
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn interior_rows(&self) -> usize {
        self.rows - 2
    }

    pub fn interior_cols(&self) -> usize {
        self.cols - 2
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        debug_assert!(row < self.rows && col < self.cols);
        self.buf[(self.row0 + row) * self.stride + self.col0 + col]
    }

    #[inline]
    pub fn row(&self, row: usize) -> &'a [u8] {
        let start = (self.row0 + row) * self.stride + self.col0;
        &self.buf[start..start + self.cols]
    }

    /// Window of `rows x cols` cells starting at `(row0, col0)` of this one.
    pub fn window(&self, row0: usize, col0: usize, rows: usize, cols: usize) -> Self {
        assert!(row0 + rows <= self.rows && col0 + cols <= self.cols);
        Self {
            buf: self.buf,
            stride: self.stride,
            row0: self.row0 + row0,
            col0: self.col0 + col0,
            rows,
            cols,
        }
    }

    pub fn key(&self) -> RegionKey {
        RegionKey::of(self)
    }

    /// Copy of the cells without the halo, unchanged.
    pub fn interior(&self) -> Interior {
        let (rows, cols) = (self.interior_rows(), self.interior_cols());
        let mut cells = Vec::with_capacity(rows * cols);
        for r in 1..=rows {
            cells.extend_from_slice(&self.row(r)[1..=cols]);
        }
        Interior { rows, cols, cells }
    }
}

/// Owned cells of an updated region, halo already stripped.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Interior {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl Interior {
    pub fn new(rows: usize, cols: usize, cells: Vec<u8>) -> Self {
        assert_eq!(cells.len(), rows * cols, "cells do not match the shape");
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.cols + col]
    }

    pub fn row(&self, row: usize) -> &[u8] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Heap bytes held by this interior.
    pub fn bytes_total(&self) -> usize {
        self.cells.capacity()
    }
}

impl std::fmt::Debug for Interior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Interior {}x{}", self.rows, self.cols)?;
        for r in 0..self.rows {
            for &c in self.row(r) {
                f.write_str(if c != 0 { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
