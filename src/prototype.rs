//! Prototype: new objects are clones of a canonical origin.
//!
//! The origin is built exactly once behind a lazy accessor; every copy is an
//! independent value.

use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    code: u32,
    title: String,
}

impl Book {
    /// The canonical origin, constructed on first access.
    pub fn origin() -> &'static Book {
        static ORIGIN: OnceLock<Book> = OnceLock::new();
        ORIGIN.get_or_init(|| Book {
            code: 1,
            title: "Book".to_string(),
        })
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }
}

// ============================================================================
// Tests
// ============================================================================
