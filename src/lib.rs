//! # Design Patterns Catalog
//!
//! Runnable examples of classic object-oriented design patterns,
//! each rewritten the way Rust wants them: traits and composition
//! instead of inheritance, closed enums instead of string tags,
//! `Result` instead of null returns, and explicit ownership instead
//! of shared mutable globals.
//!
//! ## Pattern 1: Creational Patterns
//! - Singleton ([`singleton`]) - one instance behind a lazy `OnceLock` accessor
//! - Factory ([`factory`]) - simple, associated-function and factory-method variants
//! - Builder ([`builder`]) - consuming fluent builder with defaults
//! - Prototype ([`prototype`]) - `Clone` copies of a canonical origin
//!
//! ## Pattern 2: Structural Patterns
//! - Adapter ([`adapter`]) - one dispatch surface over two capability traits
//! - Bridge ([`bridge`]) - interfaces and kernels varying independently
//! - Decorator ([`decorator`]) - extension trait plus stackable wrappers
//! - Composite ([`composite`]) - groups and items priced uniformly
//! - Facade ([`facade`]) - one entry point over lazily built subsystems
//! - Flyweight ([`flyweight`]) - interned particle styles shared via `Rc`
//! - Proxy ([`proxy`]) - lazy, logging, caching and protecting stand-in
//!
//! ## Pattern 3: Behavioral Patterns
//! - Chain of Responsibility ([`chain_of_responsibility`]) - capacity-gated handlers
//! - Command ([`command`]) - requests as values, queued per receiver
//! - Observer ([`observer`]) - subject notifying weakly held observers
//!
//! Run individual examples with:
//! ```bash
//! cargo run --bin p1_singleton
//! cargo run --bin p2_proxy
//! cargo run --bin p3_observer
//! ```
//!
//! or print the whole table of contents:
//! ```bash
//! cargo run --bin catalog
//! ```

// Pattern 1: Creational Patterns
pub mod builder;
pub mod factory;
pub mod prototype;
pub mod singleton;

// Pattern 2: Structural Patterns
pub mod adapter;
pub mod bridge;
pub mod composite;
pub mod decorator;
pub mod facade;
pub mod flyweight;
pub mod proxy;

// Pattern 3: Behavioral Patterns
pub mod chain_of_responsibility;
pub mod command;
pub mod observer;
