//! Observer: views subscribe to a model and hear about every state change.
//!
//! The model holds only [`Weak`] handles, so it never keeps a view alive;
//! a view dropped elsewhere is silently skipped and pruned. Attach and
//! detach identify observers by allocation address, which is stable even
//! through trait-object handles.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub trait Observer {
    fn update(&mut self, message: &str);
}

/// A display surface that records every update it receives.
pub struct View {
    name: String,
    received: Vec<String>,
}

impl View {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            received: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn received(&self) -> &[String] {
        &self.received
    }
}

impl Observer for View {
    fn update(&mut self, message: &str) {
        self.received
            .push(format!("Observer {} received update: {message}", self.name));
    }
}

pub struct Model {
    state: String,
    observers: Vec<Weak<RefCell<dyn Observer>>>,
}

impl Model {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            state: initial.into(),
            observers: Vec::new(),
        }
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn attach<O: Observer + 'static>(&mut self, observer: &Rc<RefCell<O>>) {
        // Downgrade at the concrete type; the push unsizes the handle to
        // `dyn Observer`.
        let weak: Weak<RefCell<O>> = Rc::downgrade(observer);
        self.observers.push(weak);
    }

    /// Removes one observer, matched by allocation address. Dead handles
    /// found along the way are pruned too.
    pub fn detach<O: Observer + 'static>(&mut self, observer: &Rc<RefCell<O>>) {
        let target = Rc::as_ptr(observer) as *const ();
        self.observers.retain(|weak| match weak.upgrade() {
            Some(live) => Rc::as_ptr(&live) as *const () != target,
            None => false,
        });
    }

    pub fn set_state(&mut self, state: impl Into<String>) {
        self.state = state.into();
        self.notify();
    }

    pub fn notify(&self) {
        for weak in &self.observers {
            if let Some(observer) = weak.upgrade() {
                observer.borrow_mut().update(&self.state);
            }
        }
    }

    /// Observers that are still alive right now.
    pub fn live_observers(&self) -> usize {
        self.observers
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}

/// Pushes state changes into the model on behalf of the user.
pub struct Controller {
    name: String,
}

impl Controller {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn effect_change(&self, model: &mut Model, new_state: &str) {
        model.set_state(new_state);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        name: &'static str,
        sink: Rc<RefCell<Vec<String>>>,
    }

    impl Observer for Recorder {
        fn update(&mut self, message: &str) {
            self.sink.borrow_mut().push(format!("{}:{message}", self.name));
        }
    }

    fn recorder(name: &'static str, sink: &Rc<RefCell<Vec<String>>>) -> Rc<RefCell<Recorder>> {
        Rc::new(RefCell::new(Recorder {
            name,
            sink: Rc::clone(sink),
        }))
    }

    #[test]
    fn test_notifications_arrive_in_attach_order() {
        let sink = Rc::new(RefCell::new(Vec::new()));
        let (a, b, c) = (recorder("a", &sink), recorder("b", &sink), recorder("c", &sink));
        let mut model = Model::new("initial");
        model.attach(&a);
        model.attach(&b);
        model.attach(&c);

        model.set_state("x");
        assert_eq!(model.state(), "x");
        assert_eq!(*sink.borrow(), ["a:x", "b:x", "c:x"]);
    }

    #[test]
    fn test_detach_removes_only_the_target() {
        let sink = Rc::new(RefCell::new(Vec::new()));
        let (a, b, c) = (recorder("a", &sink), recorder("b", &sink), recorder("c", &sink));
        let mut model = Model::new("initial");
        model.attach(&a);
        model.attach(&b);
        model.attach(&c);

        model.detach(&b);
        model.set_state("y");
        assert_eq!(*sink.borrow(), ["a:y", "c:y"]);
        assert_eq!(model.live_observers(), 2);
    }

    #[test]
    fn test_dropped_observer_is_skipped() {
        let sink = Rc::new(RefCell::new(Vec::new()));
        let a = recorder("a", &sink);
        let mut model = Model::new("initial");
        model.attach(&a);
        {
            let short_lived = recorder("b", &sink);
            model.attach(&short_lived);
        }
        assert_eq!(model.live_observers(), 1);

        model.set_state("z");
        assert_eq!(*sink.borrow(), ["a:z"]);
    }

    #[test]
    fn test_attach_accepts_distinct_observer_types() {
        let sink = Rc::new(RefCell::new(Vec::new()));
        let tape = recorder("tape", &sink);
        let view = Rc::new(RefCell::new(View::new("GUI1")));
        let mut model = Model::new("initial");
        model.attach(&view);
        model.attach(&tape);

        model.set_state("x");
        assert_eq!(*sink.borrow(), ["tape:x"]);
        assert_eq!(
            view.borrow().received(),
            ["Observer GUI1 received update: x"]
        );
        assert_eq!(model.live_observers(), 2);
    }

    #[test]
    fn test_view_formats_updates() {
        let view = Rc::new(RefCell::new(View::new("GUI1")));
        let mut model = Model::new("initialState");
        model.attach(&view);

        model.set_state("profileChange");
        assert_eq!(
            view.borrow().received(),
            ["Observer GUI1 received update: profileChange"]
        );
    }

    #[test]
    fn test_controller_drives_the_model() {
        let view = Rc::new(RefCell::new(View::new("GUI1")));
        let mut model = Model::new("initialState");
        model.attach(&view);

        let controller = Controller::new("admin");
        assert_eq!(controller.name(), "admin");
        controller.effect_change(&mut model, "profileChange");
        controller.effect_change(&mut model, "logout");
        assert_eq!(model.state(), "logout");
        assert_eq!(view.borrow().received().len(), 2);
    }
}
