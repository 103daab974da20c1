//! Builder: step-by-step construction of a value with optional parts.
//!
//! The builder consumes itself on every step; fields that were never set
//! stay at their zero defaults.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinates {
    x: i32,
    y: i32,
    z: i32,
}

impl Coordinates {
    /// All three components given up front.
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn z(&self) -> i32 {
        self.z
    }
}

pub struct CoordinatesBuilder {
    x: Option<i32>,
    y: Option<i32>,
    z: Option<i32>,
}

impl CoordinatesBuilder {
    pub fn new() -> Self {
        Self {
            x: None,
            y: None,
            z: None,
        }
    }

    pub fn x(mut self, x: i32) -> Self {
        self.x = Some(x);
        self
    }

    pub fn y(mut self, y: i32) -> Self {
        self.y = Some(y);
        self
    }

    pub fn z(mut self, z: i32) -> Self {
        self.z = Some(z);
        self
    }

    pub fn build(self) -> Coordinates {
        Coordinates {
            x: self.x.unwrap_or(0),
            y: self.y.unwrap_or(0),
            z: self.z.unwrap_or(0),
        }
    }
}

impl Default for CoordinatesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_only_leaves_rest_at_defaults() {
        let coords = CoordinatesBuilder::new().x(2).build();
        assert_eq!(coords.x(), 2);
        assert_eq!(coords.y(), 0);
        assert_eq!(coords.z(), 0);
    }

    #[test]
    fn test_all_fields_set() {
        let coords = CoordinatesBuilder::new().x(1).y(2).z(3).build();
        assert_eq!(coords, Coordinates::new(1, 2, 3));
    }

    #[test]
    fn test_empty_builder_is_all_defaults() {
        let coords = CoordinatesBuilder::default().build();
        assert_eq!(coords, Coordinates::new(0, 0, 0));
    }

    #[test]
    fn test_partial_pair() {
        let coords = CoordinatesBuilder::new().y(7).z(9).build();
        assert_eq!(coords.x(), 0);
        assert_eq!(coords.y(), 7);
        assert_eq!(coords.z(), 9);
    }
}
