//! Build a small quadtree and inspect its layout.
//!
//! Walks through how insertion splits each node's rectangle at its
//! point: y ties route to the lower half, x ties to quadrant 2 in the
//! upper half and quadrant 4 in the lower half.

use quadpoint::prelude::*;

fn print_tree(node: &QuadtreeNode<Point>, depth: usize) {
    let indent = depth * 4;
    println!(
        "{:indent$}({}, {}) region ({}, {})-({}, {})",
        "",
        node.point().get_x(),
        node.point().get_y(),
        node.x1(),
        node.y1(),
        node.x2(),
        node.y2(),
    );
    for quadrant in 1..=4 {
        if let Some(child) = node.get_child(quadrant) {
            println!("{:indent$}quadrant {}:", "", quadrant, indent = indent + 2);
            print_tree(child, depth + 1);
        }
    }
}

fn main() {
    println!("=== Build Tree Example ===\n");

    let mut tree = QuadtreeNode::new(Point::new(50.0, 50.0), 0, 0, 100, 100);
    tree.insert(Point::new(60.0, 40.0)); // above-right: quadrant 1
    tree.insert(Point::new(40.0, 60.0)); // below-left: quadrant 3
    tree.insert(Point::new(60.0, 50.0)); // y tie: routed to quadrant 4
    tree.insert(Point::new(70.0, 30.0)); // recurses into the quadrant-1 child

    print_tree(&tree, 0);

    println!("\nsize: {}", tree.size());
    assert_eq!(tree.size(), 5);

    let points = tree.all_points();
    println!("all points (pre-order, quadrants 1-4): {:?}", points);
    assert_eq!(points.len(), 5);

    // The y tie landed in the lower half
    assert!(tree.has_child(4), "y ties go to the lower half");
    assert!(!tree.has_child(2), "nothing was routed above-left");
}
