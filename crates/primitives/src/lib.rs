//! Core value types shared by the checker boundary and the annotation engine.

/// Field handles and classifier input.
pub mod field;
/// Viewport-space rectangles and points.
pub mod geometry;
/// Flagged spans reported by the checker.
pub mod matches;

pub use field::{ElementTag, FieldId, FieldNode, InputType};
pub use geometry::{Point, Rect, Viewport};
pub use matches::{Category, CharIdx, CharLen, Match};
