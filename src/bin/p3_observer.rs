//! Pattern 3: Behavioral Patterns
//! Example: Observer - Views Subscribed to a Model
//!
//! Run with: cargo run --bin p3_observer

use std::cell::RefCell;
use std::rc::Rc;

use design_patterns::observer::{Controller, Model, View};

fn model_view_example() {
    let mut model = Model::new("initialState");
    let gui1 = Rc::new(RefCell::new(View::new("GUI1")));
    let gui2 = Rc::new(RefCell::new(View::new("GUI2")));
    let gui3 = Rc::new(RefCell::new(View::new("GUI3")));
    model.attach(&gui1);
    model.attach(&gui2);
    model.attach(&gui3);

    let controller = Controller::new("admin");
    controller.effect_change(&mut model, "profileChange");

    for view in [&gui1, &gui2, &gui3] {
        for line in view.borrow().received() {
            println!("{line}");
        }
    }
    println!("model state: {}", model.state());
}

fn detach_example() {
    let mut model = Model::new("initialState");
    let gui1 = Rc::new(RefCell::new(View::new("GUI1")));
    let gui2 = Rc::new(RefCell::new(View::new("GUI2")));
    model.attach(&gui1);
    model.attach(&gui2);

    model.set_state("profileChange");
    model.detach(&gui2);
    model.set_state("logout");

    println!("GUI1 saw {} updates", gui1.borrow().received().len());
    println!("GUI2 saw {} update", gui2.borrow().received().len());
    println!("live observers: {}", model.live_observers());
}

fn dropped_view_example() {
    let mut model = Model::new("initialState");
    let keeper = Rc::new(RefCell::new(View::new("keeper")));
    model.attach(&keeper);
    {
        let transient = Rc::new(RefCell::new(View::new("transient")));
        model.attach(&transient);
        println!("live observers: {}", model.live_observers());
    }

    // The model holds only weak handles, so the dropped view is skipped.
    model.set_state("refresh");
    println!("live observers after drop: {}", model.live_observers());
    println!("keeper saw {} update(s)", keeper.borrow().received().len());
}

fn main() {
    println!("Observer Pattern");
    println!("================\n");

    println!("=== Model, Views, Controller ===");
    model_view_example();
    println!();

    println!("=== Detaching a View ===");
    detach_example();
    println!();

    println!("=== Dropped View ===");
    dropped_view_example();
}
