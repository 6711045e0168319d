//! # Quadpoint - Point Quadtree Spatial Index
//!
//! A Rust library providing a simple point quadtree for 2D spatial
//! queries over a circular region.
//!
//! ## Features
//!
//! - **Recursive Spatial Subdivision**: every node splits its rectangle at its own point
//! - **Circular Range Queries**: prunes whole subtrees using rectangle/circle intersection
//! - **Generic Point Type**: works with any type exposing x/y coordinates
//! - **Simple API**: the root node is the tree; no separate wrapper type
//!
//! ## Quick Start
//!
//! ```rust
//! use quadpoint::prelude::*;
//!
//! // The root node is the tree: an anchor point plus the region rectangle
//! let mut tree = QuadtreeNode::new(Point::new(50.0, 50.0), 0, 0, 100, 100);
//!
//! // Insert some points
//! tree.insert(Point::new(60.0, 40.0));   // above and right of the anchor: quadrant 1
//! tree.insert(Point::new(40.0, 60.0));   // below and left of the anchor: quadrant 3
//! tree.insert(Point::new(10.0, 10.0));
//!
//! assert_eq!(tree.size(), 4);
//!
//! // Query for points within a circle (boundary counts as inside)
//! let hits = tree.find_in_circle(55.0, 45.0, 10.0);
//! println!("Found {} points in the circle", hits.len());
//! assert_eq!(hits.len(), 2);
//! ```
//!
//! ## How It Works
//!
//! Each node stores one point and up to four children covering the four
//! quadrants of the node's rectangle, split at the point's coordinates
//! (truncated to the integer grid the rectangles use). Insertion walks
//! the quadrants down to an empty slot; a circular query skips every
//! subtree whose rectangle cannot touch the circle, so only the relevant
//! part of the tree is visited.
//!
//! The tree only grows. Deletion, rebalancing and bulk construction are
//! out of scope, and so is synchronization: the structure is plain
//! single-threaded data, and any concurrent use must be disciplined by
//! the caller.

pub mod geometry;
pub mod point;
pub mod prelude;
pub mod quadtree;

pub use point::{Point, Point2D};
pub use quadtree::QuadtreeNode;
