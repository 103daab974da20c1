//! Pattern 1: Creational Patterns
//! Example: Factory, Factory Method, and Abstract Factory
//!
//! Run with: cargo run --bin p1_factory

use design_patterns::factory::{
    AnimalFactory, Gender, HumanFactory, ShipFactory, SimpleTransportFactory, Species,
    TransportFactory, TransportKind, TruckFactory,
};

fn animal_factory_example() {
    let factory = AnimalFactory;
    for tag in ["Dog", "Cat", "Fish"] {
        match tag.parse::<Species>() {
            Ok(species) => println!("{tag} says: {}", factory.create(species).speak()),
            Err(err) => println!("{tag} rejected: {err}"),
        }
    }
}

fn transport_factory_example() {
    // Simple factory, instance flavor: the product line is picked by an enum.
    let simple = SimpleTransportFactory;
    let truck = simple.create(TransportKind::Truck, 20);
    println!("{} (capacity {})", truck.drive(), truck.capacity());

    // Simple factory, associated-function flavor.
    let ship = SimpleTransportFactory::create_transport(TransportKind::Ship, 20);
    println!("{} (capacity {})", ship.drive(), ship.capacity());

    // Factory-method flavor: each factory owns one product line.
    let factories: Vec<Box<dyn TransportFactory>> = vec![
        Box::new(TruckFactory { capacity: 20 }),
        Box::new(ShipFactory { capacity: 35 }),
    ];
    for factory in &factories {
        let transport = factory.create_transport();
        println!("{} (capacity {})", transport.drive(), transport.capacity());
    }
}

fn human_factory_example() {
    let factory = HumanFactory;
    for (tag, name) in [("Male", "Adam"), ("Female", "Eve")] {
        match tag.parse::<Gender>() {
            Ok(gender) => {
                let human = factory.create(gender, name);
                println!("{}: {}", human.name(), human.reproduce());
            }
            Err(err) => println!("{tag} rejected: {err}"),
        }
    }
}

fn main() {
    println!("Factory Patterns");
    println!("================\n");

    println!("=== Simple Factory ===");
    animal_factory_example();
    println!();

    println!("=== Factory Method ===");
    transport_factory_example();
    println!();

    println!("=== Abstract Factory ===");
    human_factory_example();
}
