//! Pattern 1: Creational Patterns
//! Example: Prototype - Clones of a Canonical Origin
//!
//! Run with: cargo run --bin p1_prototype

use design_patterns::prototype::Book;

fn prototype_example() {
    let origin = Book::origin();
    println!("origin: code {}, title {:?}", origin.code(), origin.title());

    let mut copy = origin.clone();
    copy.set_title("Annotated Book");
    println!("copy: code {}, title {:?}", copy.code(), copy.title());

    // Editing a copy never touches the origin.
    println!("origin unchanged: {:?}", Book::origin().title());
}

fn print_run_example() {
    let shelf: Vec<Book> = (0..3).map(|_| Book::origin().clone()).collect();
    println!("printed {} copies of {:?}", shelf.len(), shelf[0].title());
}

fn main() {
    println!("Prototype Pattern");
    println!("=================\n");

    println!("=== Clone and Modify ===");
    prototype_example();
    println!();

    println!("=== Stamping Copies ===");
    print_run_example();
}
