//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use quadpoint::prelude::*;
//! ```

pub use crate::geometry::{circle_intersects_rectangle, point_in_circle};
pub use crate::point::{Point, Point2D};
pub use crate::quadtree::QuadtreeNode;
