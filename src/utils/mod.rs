mod format_int;
mod traits;

pub use format_int::{percent, NiceInt};
pub use traits::Engine;
