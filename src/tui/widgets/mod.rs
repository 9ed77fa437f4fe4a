//! Reusable widgets for the list screen.

mod skeleton;

pub use skeleton::{Skeleton, SKELETON_ROWS};
