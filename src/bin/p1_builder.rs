//! Pattern 1: Creational Patterns
//! Example: Builder - Consuming Builder with Zero Defaults
//!
//! Run with: cargo run --bin p1_builder

use design_patterns::builder::{Coordinates, CoordinatesBuilder};

fn coordinates_builder_example() {
    let full = CoordinatesBuilder::new().x(1).y(2).z(3).build();
    println!("full: {full:?}");

    // Fields that were never set stay at zero.
    let partial = CoordinatesBuilder::new().x(2).build();
    println!("partial: {partial:?}");

    let origin = CoordinatesBuilder::default().build();
    println!("defaults: {origin:?}");
}

fn direct_construction_example() {
    // When every component is known up front, skip the builder.
    let point = Coordinates::new(4, 5, 6);
    println!("direct: ({}, {}, {})", point.x(), point.y(), point.z());
}

fn main() {
    println!("Builder Pattern");
    println!("===============\n");

    println!("=== Step-by-Step Construction ===");
    coordinates_builder_example();
    println!();

    println!("=== Direct Construction ===");
    direct_construction_example();
}
