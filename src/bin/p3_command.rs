//! Pattern 3: Behavioral Patterns
//! Example: Command - Queued Actions Behind GUI Controls
//!
//! Run with: cargo run --bin p3_command

use std::cell::RefCell;
use std::rc::Rc;

use design_patterns::command::{Client, CommandKind, Gui, Receiver};

fn gui_binding_example() {
    let save = Rc::new(RefCell::new(Receiver::new(CommandKind::Save)));
    let copy = Rc::new(RefCell::new(Receiver::new(CommandKind::Copy)));
    let cancel = Rc::new(RefCell::new(Receiver::new(CommandKind::Cancel)));
    let gui = Gui::new(vec![Rc::clone(&save), Rc::clone(&copy), Rc::clone(&cancel)]);

    // Three different controls all send the same save command.
    let receipts = [
        gui.click_save_button(),
        gui.click_save_menu_item(),
        gui.press_save_shortcut(),
        gui.click_copy_button(),
        gui.click_cancel_button(),
    ];
    for receipt in receipts.into_iter().flatten() {
        println!("{receipt}");
    }

    println!();
    for line in save.borrow_mut().drain() {
        println!("{line}");
    }
    println!();
    for line in cancel.borrow_mut().drain() {
        println!("{line}");
    }
}

fn client_commands_example() {
    let client = Client;
    let save = Rc::new(RefCell::new(Receiver::new(CommandKind::Save)));
    let gui = Gui::new(vec![Rc::clone(&save)]);

    for arguments in [vec!["pdfFormat", "HD"], vec!["pdfFormat", "SD"]] {
        let command = client.make_request(
            CommandKind::Save,
            "Save this file",
            arguments.into_iter().map(String::from).collect(),
        );
        if let Some(receipt) = gui.trigger(command) {
            println!("{receipt}");
        }
    }

    // No receiver is bound for copy commands here.
    let copy_command = client.make_request(
        CommandKind::Copy,
        "Copy this file",
        vec!["2".to_string(), "30".to_string()],
    );
    if gui.trigger(copy_command).is_none() {
        println!("no receiver bound for {}", CommandKind::Copy);
    }

    println!();
    for line in save.borrow_mut().drain() {
        println!("{line}");
    }
}

fn tag_parsing_example() {
    for tag in ["Save", "Copy", "Cnl", "Paste"] {
        match tag.parse::<CommandKind>() {
            Ok(kind) => println!("{tag} -> {kind}"),
            Err(err) => println!("{err}"),
        }
    }
}

fn main() {
    println!("Command Pattern");
    println!("===============\n");

    println!("=== GUI Controls ===");
    gui_binding_example();
    println!();

    println!("=== Client-Built Commands ===");
    client_commands_example();
    println!();

    println!("=== Command Tags ===");
    tag_parsing_example();
}
