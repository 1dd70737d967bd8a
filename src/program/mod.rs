//! The persisted program format and the two passes between it and a live graph.

mod format;
mod linearize;
mod listing;
mod reconstruct;

pub use format::{Command, InputArgument, NO_SUCCESSOR, Program, SUPPORTED_VERSION};
pub use linearize::linearize;
pub use listing::Listing;
pub use reconstruct::reconstruct;
