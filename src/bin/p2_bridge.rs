//! Pattern 2: Structural Patterns
//! Example: Bridge - Interfaces over Interchangeable Kernels
//!
//! Run with: cargo run --bin p2_bridge

use design_patterns::bridge::{GraphicalUserInterface, KernelKind, Terminal, UserInterface};

fn graphical_interface_example() {
    let ui = UserInterface::new(2, "v1.0", 2023, KernelKind::Mono);
    let gui = GraphicalUserInterface::new(ui, "arrow");
    println!("{}", gui.ui().describe());
    println!("{}", gui.show_cursor());
    println!("{}", gui.click_cursor());
}

fn terminal_example() {
    let ui = UserInterface::new(1, "v2.0", 2024, KernelKind::Micro);
    let terminal = Terminal::new(
        ui,
        vec!["ls".to_string(), "cd".to_string(), "pwd".to_string()],
    );
    println!("{}", terminal.ui().describe());
    println!("{}", terminal.show_all_commands());

    match terminal.execute_command(1) {
        Ok(line) => println!("{line}"),
        Err(err) => println!("failed: {err}"),
    }

    // Out-of-range indexes come back as typed errors.
    if let Err(err) = terminal.show_command(9) {
        println!("lookup failed: {err}");
    }
}

fn main() {
    println!("Bridge Pattern");
    println!("==============\n");

    println!("=== Graphical Interface over a Mono Kernel ===");
    graphical_interface_example();
    println!();

    println!("=== Terminal over a Micro Kernel ===");
    terminal_example();
}
