//! Line rendering is split by concern: palette, hashing, timestamps, message
//! composition and the final line layout.

mod color;
pub mod hash;
mod line;
mod message;
pub mod timestamp;

pub use color::{Color, ParseColorError, colorize};
pub use line::{LEVEL_WIDTH, LineParts};
pub use message::{Printable, Shown, concat};
