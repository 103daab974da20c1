//! Facade: one entry point that classifies free-text requests and routes them
//! to lazily built subsystems.
//!
//! Each subsystem is constructed at most once, on the first request that
//! needs it; unrecognized requests are rejected with a typed error.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum FacadeError {
    #[error("invalid request: {0}")]
    UnknownRequest(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Subsystem {
    Warehouse,
    Delivery,
}

impl Subsystem {
    /// Maps a request phrase onto the subsystem that can serve it.
    pub fn classify(request: &str) -> Result<Subsystem, FacadeError> {
        match request {
            "I want to store something" => Ok(Subsystem::Warehouse),
            "I want to deliver something" => Ok(Subsystem::Delivery),
            other => Err(FacadeError::UnknownRequest(other.to_string())),
        }
    }
}

pub struct Warehouse {
    code: u32,
    name: String,
    capacity: u32,
    handled: u32,
}

impl Warehouse {
    pub fn new(code: u32, name: impl Into<String>, capacity: u32) -> Self {
        Self {
            code,
            name: name.into(),
            capacity,
            handled: 0,
        }
    }

    pub fn handle_request(&mut self) -> String {
        self.handled += 1;
        "Warehouse request handled!".to_string()
    }

    pub fn handled(&self) -> u32 {
        self.handled
    }

    pub fn describe(&self) -> String {
        format!("{} (code {}, capacity {})", self.name, self.code, self.capacity)
    }
}

pub struct Delivery {
    code: u32,
    name: String,
    speed: u32,
    handled: u32,
}

impl Delivery {
    pub fn new(code: u32, name: impl Into<String>, speed: u32) -> Self {
        Self {
            code,
            name: name.into(),
            speed,
            handled: 0,
        }
    }

    pub fn handle_request(&mut self) -> String {
        self.handled += 1;
        "Delivery request handled!".to_string()
    }

    pub fn handled(&self) -> u32 {
        self.handled
    }

    pub fn describe(&self) -> String {
        format!("{} (code {}, speed {})", self.name, self.code, self.speed)
    }
}

#[derive(Default)]
pub struct StorageFacade {
    warehouse: Option<Warehouse>,
    delivery: Option<Delivery>,
}

impl StorageFacade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, request: &str) -> Result<String, FacadeError> {
        match Subsystem::classify(request)? {
            Subsystem::Warehouse => {
                let warehouse = self
                    .warehouse
                    .get_or_insert_with(|| Warehouse::new(11, "Warehouse1", 20));
                Ok(warehouse.handle_request())
            }
            Subsystem::Delivery => {
                let delivery = self
                    .delivery
                    .get_or_insert_with(|| Delivery::new(11, "Delivery1", 20));
                Ok(delivery.handle_request())
            }
        }
    }

    pub fn warehouse(&self) -> Option<&Warehouse> {
        self.warehouse.as_ref()
    }

    pub fn delivery(&self) -> Option<&Delivery> {
        self.delivery.as_ref()
    }
}

pub struct Client {
    name: String,
}

impl Client {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn make_request(
        &self,
        facade: &mut StorageFacade,
        request: &str,
    ) -> Result<String, FacadeError> {
        let response = facade.handle(request)?;
        Ok(format!("Client made a request {request}\n{response}"))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_phrases() {
        assert_eq!(
            Subsystem::classify("I want to store something"),
            Ok(Subsystem::Warehouse)
        );
        assert_eq!(
            Subsystem::classify("I want to deliver something"),
            Ok(Subsystem::Delivery)
        );
    }

    #[test]
    fn test_unknown_request_is_rejected() {
        let err = Subsystem::classify("").unwrap_err();
        assert_eq!(err, FacadeError::UnknownRequest(String::new()));
        assert_eq!(err.to_string(), "invalid request: ");
    }

    #[test]
    fn test_subsystems_start_unbuilt() {
        let facade = StorageFacade::new();
        assert!(facade.warehouse().is_none());
        assert!(facade.delivery().is_none());
    }

    #[test]
    fn test_delivery_built_once_and_reused() {
        let mut facade = StorageFacade::new();
        facade.handle("I want to deliver something").unwrap();
        facade.handle("I want to deliver something").unwrap();
        // Two handled requests on one instance, not one on each of two.
        assert_eq!(facade.delivery().unwrap().handled(), 2);
        assert!(facade.warehouse().is_none());
    }

    #[test]
    fn test_both_routes_reach_their_subsystem() {
        let mut facade = StorageFacade::new();
        let stored = facade.handle("I want to store something").unwrap();
        let delivered = facade.handle("I want to deliver something").unwrap();
        assert_eq!(stored, "Warehouse request handled!");
        assert_eq!(delivered, "Delivery request handled!");
        assert_eq!(facade.warehouse().unwrap().describe(), "Warehouse1 (code 11, capacity 20)");
        assert_eq!(facade.delivery().unwrap().describe(), "Delivery1 (code 11, speed 20)");
    }

    #[test]
    fn test_client_prefixes_its_request() {
        let mut facade = StorageFacade::new();
        let client = Client::new("Ayoub");
        assert_eq!(client.name(), "Ayoub");
        let output = client
            .make_request(&mut facade, "I want to deliver something")
            .unwrap();
        assert!(output.starts_with("Client made a request I want to deliver something"));
        assert!(output.ends_with("Delivery request handled!"));
    }

    #[test]
    fn test_rejected_request_builds_nothing() {
        let mut facade = StorageFacade::new();
        let client = Client::new("Ayoub");
        assert!(client.make_request(&mut facade, "make me a sandwich").is_err());
        assert!(facade.warehouse().is_none());
        assert!(facade.delivery().is_none());
    }
}
