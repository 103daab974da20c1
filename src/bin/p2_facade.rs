//! Pattern 2: Structural Patterns
//! Example: Facade - One Door to Lazily Built Subsystems
//!
//! Run with: cargo run --bin p2_facade

use design_patterns::facade::{Client, StorageFacade};

fn storage_facade_example() {
    let mut facade = StorageFacade::new();
    let client = Client::new("Ayoub");

    for request in [
        "I want to deliver something",
        "I want to store something",
        "I want to deliver something",
    ] {
        match client.make_request(&mut facade, request) {
            Ok(output) => println!("{output}"),
            Err(err) => println!("{err}"),
        }
        println!();
    }

    // Each subsystem was built once, on its first request.
    if let Some(delivery) = facade.delivery() {
        println!("{} handled {} request(s)", delivery.describe(), delivery.handled());
    }
    if let Some(warehouse) = facade.warehouse() {
        println!("{} handled {} request(s)", warehouse.describe(), warehouse.handled());
    }
}

fn rejected_request_example() {
    let mut facade = StorageFacade::new();
    let client = Client::new("Ayoub");

    if let Err(err) = client.make_request(&mut facade, "make me a sandwich") {
        println!("{err}");
    }
    println!("warehouse built: {}", facade.warehouse().is_some());
    println!("delivery built: {}", facade.delivery().is_some());
}

fn main() {
    println!("Facade Pattern");
    println!("==============\n");

    println!("=== Routed Requests ===");
    storage_facade_example();
    println!();

    println!("=== Rejected Request ===");
    rejected_request_example();
}
