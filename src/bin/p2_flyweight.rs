//! Pattern 2: Structural Patterns
//! Example: Flyweight - Interned Particle Styles
//!
//! Run with: cargo run --bin p2_flyweight

use std::rc::Rc;

use design_patterns::flyweight::{Game, Particle, StyleFactory};
use rand::Rng;

fn shared_style_example() {
    let mut factory = StyleFactory::new();
    let a = factory.intern("bullet");
    let b = factory.intern("bullet");
    println!("shared allocation: {}", Rc::ptr_eq(&a, &b));
    println!("distinct styles: {}", factory.len());
    println!("sprite {} (size {}, speed {})", a.sprite(), a.size(), a.speed());
}

fn particle_field_example() {
    let mut rng = rand::thread_rng();
    let mut factory = StyleFactory::new();
    let mut game = Game::new("Shooter");

    // Five particles at random positions, but only two style allocations.
    for sprite in ["bullet", "missile", "bullet", "bullet", "missile"] {
        let style = factory.intern(sprite);
        let x = rng.gen_range(0..100);
        let y = rng.gen_range(0..100);
        game.add_particle(Particle::new("projectile", "red", x, y, style));
    }

    for line in game.draw_all() {
        println!("{line}");
    }
    println!(
        "{}: {} particles share {} styles",
        game.name(),
        game.particle_count(),
        factory.len()
    );
}

fn main() {
    println!("Flyweight Pattern");
    println!("=================\n");

    println!("=== Interned Styles ===");
    shared_style_example();
    println!();

    println!("=== Particle Field ===");
    particle_field_example();
}
