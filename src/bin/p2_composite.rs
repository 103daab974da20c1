//! Pattern 2: Structural Patterns
//! Example: Composite - Items and Groups Priced Uniformly
//!
//! Run with: cargo run --bin p2_composite

use design_patterns::composite::{Component, Group, Inventory, Item};

fn inventory_example() {
    let mut stationery = Group::new();
    stationery.add_item(Item::new("pen", 3.0));
    stationery.add_item(Item::new("notebook", 4.5));

    let mut root = Group::new();
    root.add_item(Item::new("book", 5.0));
    root.add_group(stationery);

    let inventory = Inventory::new(root);
    println!("{}", inventory.describe());
    println!("total: {}", inventory.total());
}

fn single_item_example() {
    // A leaf answers the same questions as a whole tree.
    let item = Item::new("bookmark", 1.5);
    println!("{}", item.describe());
    println!("leaf price: {}", item.price());
}

fn main() {
    println!("Composite Pattern");
    println!("=================\n");

    println!("=== Nested Inventory ===");
    inventory_example();
    println!();

    println!("=== Single Leaf ===");
    single_item_example();
}
