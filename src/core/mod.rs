//! Leaf-Typen: Geometrie, Selektionsmenge und Host-Grenze.

pub mod geometry;
pub mod host;
pub mod selection_set;

pub use geometry::{overlaps, rect_from_points, OverlapMode, SelectionRect};
pub use host::{ElementId, Modifiers, PointerButton, PointerInput, SelectionHost};
pub use selection_set::SelectionSet;
