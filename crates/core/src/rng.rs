//! RNG module - independent uniform shape draws
//!
//! Shapes are drawn independently and uniformly over the seven kinds; there
//! is no bag or shuffle scheme, so repeats and droughts are possible. A
//! simple LCG keeps sessions deterministic per seed.

use chatris_types::Shape;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct ShapeRng {
    state: u32,
    /// One-shot override consumed by the next draw, used by scripted
    /// scenarios and tests.
    next_override: Option<Shape>,
}

impl ShapeRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self {
            state,
            next_override: None,
        }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Draw the next shape: the pending override if one is set, otherwise a
    /// fresh uniform draw.
    pub fn draw(&mut self) -> Shape {
        if let Some(shape) = self.next_override.take() {
            return shape;
        }
        Shape::ALL[(self.next_u32() % 7) as usize]
    }

    /// Force the next draw to yield `shape`.
    pub fn set_next(&mut self, shape: Shape) {
        self.next_override = Some(shape);
    }

    pub fn seed(&self) -> u32 {
        self.state
    }
}
