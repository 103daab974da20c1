//! Pattern 2: Structural Patterns
//! Example: Adapter - One Entry Point over Two Capabilities
//!
//! Run with: cargo run --bin p2_adapter

use design_patterns::adapter::{Adapter, Capability, Human, Philosophize, Think};

fn adapter_example() {
    let adapter = Adapter::new(Human::default());
    // The last tag names a capability no adaptee provides.
    for tag in ["think", "philosophize", "sing"] {
        match tag.parse::<Capability>() {
            Ok(capability) => println!("{}", adapter.act(capability)),
            Err(err) => println!("skipped: {err}"),
        }
    }
}

fn direct_traits_example() {
    let human = Human::new("Rene");
    println!("{} directly: {}", human.name(), human.think());
    println!("{} directly: {}", human.name(), human.philosophize());
}

fn main() {
    println!("Adapter Pattern");
    println!("===============\n");

    println!("=== Adapted Calls ===");
    adapter_example();
    println!();

    println!("=== Direct Trait Calls ===");
    direct_traits_example();
}
