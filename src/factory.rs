//! Factory variants: simple factories in instance and associated-function
//! flavors, the factory-method trait, and a small abstract factory.
//!
//! String tags are parsed into closed enums at the boundary; an unknown
//! tag is a typed error instead of a null product.

use std::str::FromStr;
use thiserror::Error;

/// Parse failures for the factory discriminator tags.
#[derive(Error, Debug, PartialEq)]
pub enum ParseTagError {
    #[error("unknown species tag: {0}")]
    Species(String),
    #[error("unknown transport tag: {0}")]
    Transport(String),
    #[error("unknown gender tag: {0}")]
    Gender(String),
}

// ============================================================================
// Example: Simple Factory - Animals Selected by a Closed Enum
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Species {
    Dog,
    Cat,
}

impl FromStr for Species {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Dog" => Ok(Species::Dog),
            "Cat" => Ok(Species::Cat),
            other => Err(ParseTagError::Species(other.to_string())),
        }
    }
}

pub trait Animal {
    fn speak(&self) -> &'static str;
}

pub struct Dog;

impl Animal for Dog {
    fn speak(&self) -> &'static str {
        "Woof"
    }
}

pub struct Cat;

impl Animal for Cat {
    fn speak(&self) -> &'static str {
        "Meow"
    }
}

pub struct AnimalFactory;

impl AnimalFactory {
    pub fn create(&self, species: Species) -> Box<dyn Animal> {
        match species {
            Species::Dog => Box::new(Dog),
            Species::Cat => Box::new(Cat),
        }
    }
}

// ============================================================================
// Example: Simple Factory Flavors and Factory Method - Transports
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportKind {
    Truck,
    Ship,
}

impl FromStr for TransportKind {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Truck" => Ok(TransportKind::Truck),
            "Ship" => Ok(TransportKind::Ship),
            other => Err(ParseTagError::Transport(other.to_string())),
        }
    }
}

pub trait Transport {
    fn drive(&self) -> &'static str;
    fn capacity(&self) -> u32;
}

pub struct Truck {
    capacity: u32,
}

impl Truck {
    pub fn new(capacity: u32) -> Self {
        Self { capacity }
    }
}

impl Transport for Truck {
    fn drive(&self) -> &'static str {
        "Truck transport!"
    }

    fn capacity(&self) -> u32 {
        self.capacity
    }
}

pub struct Ship {
    capacity: u32,
}

impl Ship {
    pub fn new(capacity: u32) -> Self {
        Self { capacity }
    }
}

impl Transport for Ship {
    fn drive(&self) -> &'static str {
        "Ship transport!"
    }

    fn capacity(&self) -> u32 {
        self.capacity
    }
}

/// Simple factory for transports, exposed in both flavors: a method on a
/// factory value and an associated function that needs no value at all.
pub struct SimpleTransportFactory;

impl SimpleTransportFactory {
    /// Instance flavor.
    pub fn create(&self, kind: TransportKind, capacity: u32) -> Box<dyn Transport> {
        Self::create_transport(kind, capacity)
    }

    /// Associated-function flavor.
    pub fn create_transport(kind: TransportKind, capacity: u32) -> Box<dyn Transport> {
        match kind {
            TransportKind::Truck => Box::new(Truck::new(capacity)),
            TransportKind::Ship => Box::new(Ship::new(capacity)),
        }
    }
}

/// Factory-method flavor: each concrete factory builds one product line.
pub trait TransportFactory {
    fn create_transport(&self) -> Box<dyn Transport>;
}

pub struct TruckFactory {
    pub capacity: u32,
}

impl TransportFactory for TruckFactory {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Truck::new(self.capacity))
    }
}

pub struct ShipFactory {
    pub capacity: u32,
}

impl TransportFactory for ShipFactory {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Ship::new(self.capacity))
    }
}

// ============================================================================
// Example: Abstract Factory - Humans From a Gender Discriminator
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            other => Err(ParseTagError::Gender(other.to_string())),
        }
    }
}

pub trait Human {
    fn name(&self) -> &str;
    fn reproduce(&self) -> String;
}

pub struct Male {
    name: String,
}

impl Human for Male {
    fn name(&self) -> &str {
        &self.name
    }

    fn reproduce(&self) -> String {
        "Male reproduction".to_string()
    }
}

pub struct Female {
    name: String,
}

impl Human for Female {
    fn name(&self) -> &str {
        &self.name
    }

    fn reproduce(&self) -> String {
        "Female reproduction".to_string()
    }
}

pub struct HumanFactory;

impl HumanFactory {
    pub fn create(&self, gender: Gender, name: impl Into<String>) -> Box<dyn Human> {
        let name = name.into();
        match gender {
            Gender::Male => Box::new(Male { name }),
            Gender::Female => Box::new(Female { name }),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animal_factory_products() {
        let factory = AnimalFactory;
        assert_eq!(factory.create(Species::Dog).speak(), "Woof");
        assert_eq!(factory.create(Species::Cat).speak(), "Meow");
    }

    #[test]
    fn test_species_parse() {
        assert_eq!("Dog".parse::<Species>(), Ok(Species::Dog));
        assert_eq!("Cat".parse::<Species>(), Ok(Species::Cat));
    }

    #[test]
    fn test_species_unknown_tag() {
        let err = "Fish".parse::<Species>().unwrap_err();
        assert_eq!(err, ParseTagError::Species("Fish".to_string()));
        assert_eq!(err.to_string(), "unknown species tag: Fish");
    }

    #[test]
    fn test_transport_simple_factory_flavors() {
        let factory = SimpleTransportFactory;
        let truck = factory.create(TransportKind::Truck, 20);
        let ship = SimpleTransportFactory::create_transport(TransportKind::Ship, 20);
        assert_eq!(truck.drive(), "Truck transport!");
        assert_eq!(ship.drive(), "Ship transport!");
        assert_eq!(truck.capacity(), 20);
        assert_eq!(ship.capacity(), 20);
    }

    #[test]
    fn test_transport_factory_method() {
        let factories: Vec<Box<dyn TransportFactory>> = vec![
            Box::new(TruckFactory { capacity: 20 }),
            Box::new(ShipFactory { capacity: 35 }),
        ];
        let transports: Vec<_> = factories.iter().map(|f| f.create_transport()).collect();
        assert_eq!(transports[0].drive(), "Truck transport!");
        assert_eq!(transports[1].drive(), "Ship transport!");
        assert_eq!(transports[1].capacity(), 35);
    }

    #[test]
    fn test_transport_unknown_tag() {
        let err = "Plane".parse::<TransportKind>().unwrap_err();
        assert_eq!(err, ParseTagError::Transport("Plane".to_string()));
    }

    #[test]
    fn test_human_factory() {
        let factory = HumanFactory;
        let male = factory.create(Gender::Male, "Adam");
        let female = factory.create(Gender::Female, "Eve");
        assert_eq!(male.name(), "Adam");
        assert_eq!(male.reproduce(), "Male reproduction");
        assert_eq!(female.name(), "Eve");
        assert_eq!(female.reproduce(), "Female reproduction");
    }

    #[test]
    fn test_gender_unknown_tag() {
        let err = "Other".parse::<Gender>().unwrap_err();
        assert_eq!(err.to_string(), "unknown gender tag: Other");
    }
}
