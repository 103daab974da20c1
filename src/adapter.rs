//! Adapter: one dispatch surface over two unrelated capability traits.
//!
//! The wrapped object satisfies both capabilities by composition; callers pick
//! one through a closed [`Capability`] tag parsed at the boundary.

use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AdapterError {
    #[error("unknown capability tag: {0}")]
    UnknownCapability(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    Think,
    Philosophize,
}

impl FromStr for Capability {
    type Err = AdapterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "think" => Ok(Capability::Think),
            "philosophize" => Ok(Capability::Philosophize),
            other => Err(AdapterError::UnknownCapability(other.to_string())),
        }
    }
}

pub trait Think {
    fn think(&self) -> String;
}

pub trait Philosophize {
    fn philosophize(&self) -> String;
}

pub struct Human {
    name: String,
}

impl Human {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for Human {
    fn default() -> Self {
        Self::new("Ayoub")
    }
}

impl Think for Human {
    fn think(&self) -> String {
        "Human thinks!".to_string()
    }
}

impl Philosophize for Human {
    fn philosophize(&self) -> String {
        "Human philosophizes!".to_string()
    }
}

/// Monomorphized adapter: no trait objects, capabilities resolved at
/// compile time.
pub struct Adapter<T> {
    inner: T,
}

impl<T: Think + Philosophize> Adapter<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn act(&self, capability: Capability) -> String {
        match capability {
            Capability::Think => self.inner.think(),
            Capability::Philosophize => self.inner.philosophize(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
