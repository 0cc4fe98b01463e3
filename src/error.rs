use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid shape: {len} cells do not form a non-empty {width}x{height} grid")]
    InvalidShape {
        len: usize,
        width: usize,
        height: usize,
    },

    /// Halving the interior never lands exactly on the recursion floor.
    #[error("invalid dimensions {width}x{height}: halving never reaches the leaf side {leaf}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        leaf: usize,
    },

    #[error("fill rate {0} is outside of [0, 1]")]
    InvalidFillRate(f64),

    #[error("unexpected symbol {found:?} in pattern row {row}")]
    InvalidPattern { row: usize, found: char },
}

pub type Result<T> = std::result::Result<T, Error>;
