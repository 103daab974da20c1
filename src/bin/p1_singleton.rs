//! Pattern 1: Creational Patterns
//! Example: Singleton - Lazy Global Settings
//!
//! Run with: cargo run --bin p1_singleton

use design_patterns::singleton::AppSettings;

fn global_settings_example() {
    let settings = AppSettings::instance();
    println!("theme: {}", settings.theme());
    println!("verbose: {}", settings.verbose());

    // Every access resolves to the same instance.
    let again = AppSettings::instance();
    println!("same instance: {}", std::ptr::eq(settings, again));
    println!("already initialized: {}", AppSettings::try_instance().is_some());
    println!("{}", settings.describe());
}

// The explicit-dependency counterpart: callers receive what they need
// instead of reaching for a global.

struct ProfileStore {
    location: String,
}

impl ProfileStore {
    fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

struct ProfileService<'a> {
    store: &'a ProfileStore,
}

impl<'a> ProfileService<'a> {
    fn new(store: &'a ProfileStore) -> Self {
        Self { store }
    }

    fn location(&self) -> &str {
        &self.store.location
    }
}

fn dependency_injection_example() {
    let store = ProfileStore::new("profiles.db");
    let service = ProfileService::new(&store);
    let audit = ProfileService::new(&store);
    println!("service reads from: {}", service.location());
    println!("audit reads from: {}", audit.location());
}

fn main() {
    println!("Singleton Pattern");
    println!("=================\n");

    println!("=== Global Settings ===");
    global_settings_example();
    println!();

    println!("=== Dependency Injection ===");
    dependency_injection_example();
}
