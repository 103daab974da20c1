//! Flyweight: shared, immutable particle styles interned behind `Rc`.
//!
//! The style (sprite, size, speed) is the intrinsic state every particle of a
//! kind has in common; position and color stay per-particle. Interning keeps
//! one style allocation per sprite no matter how many particles use it.

use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, PartialEq, Eq)]
pub struct ParticleStyle {
    sprite: String,
    size: u32,
    speed: u32,
}

impl ParticleStyle {
    pub fn new(sprite: impl Into<String>) -> Self {
        Self {
            sprite: sprite.into(),
            size: 20,
            speed: 10,
        }
    }

    pub fn sprite(&self) -> &str {
        &self.sprite
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }
}

/// Hands out one shared `Rc<ParticleStyle>` per sprite name.
#[derive(Default)]
pub struct StyleFactory {
    styles: HashMap<String, Rc<ParticleStyle>>,
}

impl StyleFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, sprite: &str) -> Rc<ParticleStyle> {
        if let Some(style) = self.styles.get(sprite) {
            return Rc::clone(style);
        }
        let style = Rc::new(ParticleStyle::new(sprite));
        self.styles.insert(sprite.to_string(), Rc::clone(&style));
        style
    }

    /// Number of distinct styles created so far.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

pub struct Particle {
    kind: String,
    color: String,
    x: i32,
    y: i32,
    style: Rc<ParticleStyle>,
}

impl Particle {
    pub fn new(
        kind: impl Into<String>,
        color: impl Into<String>,
        x: i32,
        y: i32,
        style: Rc<ParticleStyle>,
    ) -> Self {
        Self {
            kind: kind.into(),
            color: color.into(),
            x,
            y,
            style,
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn style(&self) -> &Rc<ParticleStyle> {
        &self.style
    }
}

pub struct Game {
    name: String,
    particles: Vec<Particle>,
}

impl Game {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            particles: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_particle(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn draw_all(&self) -> Vec<String> {
        self.particles
            .iter()
            .map(|p| format!("{} drawn at ({}, {})", p.style.sprite(), p.x, p.y))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
