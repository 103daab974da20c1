//! Pattern 2: Structural Patterns
//! Example: Proxy - Lazy Start, Caching, and Access Control
//!
//! Run with: cargo run --bin p2_proxy

use colored::Colorize;
use design_patterns::proxy::{ServiceProxy, User};
use itertools::Itertools;

fn lazy_service_example() {
    let mut proxy = ServiceProxy::new("Delivery", 20, "abc");
    let user = User::new("Ayoub", "abc");

    println!("service started: {}", proxy.service_started());
    match proxy.request(&user, "I want to deliver my product!") {
        Ok(result) => println!("{result}"),
        Err(err) => println!("{}", err.to_string().red()),
    }
    println!("service started: {}", proxy.service_started());
    println!("delegations: {}", proxy.delegations());
}

fn access_control_example() {
    let mut proxy = ServiceProxy::new("Delivery", 20, "abc");
    let ayoub = User::new("Ayoub", "abc");
    let mallory = User::new("Mallory", "xyz");

    // The third call hits the cache before credentials are checked, so the
    // intruder is served a cached answer; the fourth is a fresh request and
    // gets rejected.
    for (user, request) in [
        (&ayoub, "I want to deliver my product!"),
        (&ayoub, "I want to deliver my product!"),
        (&mallory, "I want to deliver my product!"),
        (&mallory, "Show me the ledger"),
    ] {
        match proxy.request(user, request) {
            Ok(result) => println!("{}: {result}", user.name()),
            Err(err) => println!("{}: {}", user.name(), err.to_string().red()),
        }
    }

    println!();
    println!("history: {}", proxy.history().iter().join(", "));
    println!("delegations: {}", proxy.delegations());
}

fn main() {
    println!("Proxy Pattern");
    println!("=============\n");

    println!("=== Lazy Service Start ===");
    lazy_service_example();
    println!();

    println!("=== Guarded Access ===");
    access_control_example();
}
