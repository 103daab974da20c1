//! Pattern 3: Behavioral Patterns
//! Example: Chain of Responsibility - Self-Retrying Request Checks
//!
//! Run with: cargo run --bin p3_chain_of_responsibility

use colored::Colorize;
use design_patterns::chain_of_responsibility::{
    Authenticate, Authorize, BaseHandler, HandlerError, HandlerKind, InstanceLedger,
    RequestHandler, Validate,
};

/// Runs one request through authentication, authorization, and validation,
/// re-pointing the dispatcher between stages. The first failing stage aborts
/// the rest.
fn run_pipeline(
    request: &str,
    capacities: (u32, u32, u32),
    ledger: &mut InstanceLedger,
    log: &mut Vec<String>,
) -> Result<(), HandlerError> {
    let mut dispatcher = BaseHandler::new(Box::new(Authenticate::new(capacities.0, ledger)));
    dispatcher.process_request(request, ledger, log)?;

    dispatcher.set_next(Box::new(Authorize::new(capacities.1, ledger)));
    dispatcher.process_request(request, ledger, log)?;

    dispatcher.set_next(Box::new(Validate::new(capacities.2, ledger)));
    dispatcher.process_request(request, ledger, log)
}

fn report(outcome: Result<(), HandlerError>, log: &[String], ledger: &InstanceLedger) {
    for line in log {
        println!("{line}");
    }
    match outcome {
        Ok(()) => println!("request fully processed"),
        Err(err @ HandlerError::Authentication) => {
            println!("{} {err}", "stopped at authentication:".red());
        }
        Err(err @ HandlerError::Authorization) => {
            println!("{} {err}", "stopped at authorization:".red());
        }
        Err(err @ HandlerError::Validation) => {
            println!("{} {err}", "stopped at validation:".red());
        }
    }
    println!(
        "handlers built: {} authenticate, {} authorize, {} validate",
        ledger.count(HandlerKind::Authenticate),
        ledger.count(HandlerKind::Authorize),
        ledger.count(HandlerKind::Validate),
    );
}

fn undersized_pipeline_example() {
    let mut ledger = InstanceLedger::new();
    let mut log = Vec::new();
    // Capacity 10 is under the threshold: the handler spawns doubled-capacity
    // replacements until the ledger is full, then still reports failure.
    let outcome = run_pipeline("login request", (10, 4, 11), &mut ledger, &mut log);
    report(outcome, &log, &ledger);
}

fn sized_pipeline_example() {
    let mut ledger = InstanceLedger::new();
    let mut log = Vec::new();
    let outcome = run_pipeline("login request", (25, 30, 40), &mut ledger, &mut log);
    report(outcome, &log, &ledger);
}

fn main() {
    println!("Chain of Responsibility Pattern");
    println!("===============================\n");

    println!("=== Undersized Handlers ===");
    undersized_pipeline_example();
    println!();

    println!("=== Sufficient Capacity ===");
    sized_pipeline_example();
}
