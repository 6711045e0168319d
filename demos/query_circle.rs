//! Find points within a circular region.
//!
//! This example demonstrates `find_in_circle`: whole quadrants whose
//! rectangles cannot touch the circle are pruned, so only the relevant
//! part of the tree is visited. The circle boundary counts as inside.

use quadpoint::prelude::*;

fn main() {
    // Root anchored in the middle of a 100x100 region
    let mut tree = QuadtreeNode::new(Point::new(50.0, 50.0), 0, 0, 100, 100);
    tree.insert(Point::new(60.0, 40.0)); // quadrant 1
    tree.insert(Point::new(40.0, 40.0)); // quadrant 2
    tree.insert(Point::new(40.0, 60.0)); // quadrant 3
    tree.insert(Point::new(60.0, 60.0)); // quadrant 4
    tree.insert(Point::new(90.0, 10.0)); // deep in quadrant 1

    println!("=== Query Circle Example ===\n");
    println!("Tree holds {} points\n", tree.size());

    // Query 1: the four near points plus the anchor
    println!("Query 1: points within radius 15 of (50, 50):");
    let hits = tree.find_in_circle(50.0, 50.0, 15.0);
    println!("  Found {} points: {:?}", hits.len(), hits);
    assert_eq!(hits.len(), 5, "Expected the anchor and the four near points");
    println!("  ✓ Correct!\n");

    // Query 2: radius 0 matches only the exact position
    println!("Query 2: radius 0 exactly on (60, 40):");
    let hits = tree.find_in_circle(60.0, 40.0, 0.0);
    println!("  Found {} points: {:?}", hits.len(), hits);
    assert_eq!(hits.len(), 1, "Expected exactly the point at (60, 40)");
    println!("  ✓ Correct!\n");

    // Query 3: a small circle near the opposite corner finds nothing;
    // the whole quadrant-1 subtree (including the deep point) is pruned
    println!("Query 3: small circle at (5, 95), far from every point:");
    let hits = tree.find_in_circle(5.0, 95.0, 4.0);
    println!("  Found {} points", hits.len());
    assert!(hits.is_empty(), "Expected no points near (5, 95)");
    println!("  ✓ Correct!\n");

    // Query 4: a covering circle returns everything
    println!("Query 4: covering circle, radius 1000:");
    let hits = tree.find_in_circle(50.0, 50.0, 1000.0);
    println!("  Found {} points", hits.len());
    assert_eq!(hits.len(), tree.size(), "Expected every stored point");
    println!("  ✓ Correct!");
}
