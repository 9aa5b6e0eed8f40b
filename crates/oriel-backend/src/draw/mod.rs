//! Draw-data boundary consumed from the UI layer.
//!
//! The UI library hands over one `DrawData` per frame: an ordered set of
//! draw lists, each holding shared vertex/index arrays plus the commands
//! that slice into them. This crate only reads these structures; building
//! them is the UI library's job.

mod list;
mod vertex;

pub use list::{DrawCallback, DrawCmd, DrawData, DrawList};
pub use vertex::{DrawIdx, DrawVert};
