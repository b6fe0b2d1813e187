//! Compile-time capacities and unit conventions of the planner.
//!
//! Every table the planner owns is a fixed-capacity array sized by the constants
//! below. None of them can be changed at runtime; the playground bounds are the only
//! value a caller may choose, once, when constructing a `Planner`.

use crate::vec2::Point;

/// Capacity of the point arena, including the two points of the objective polygon.
pub const MAX_POINTS: usize = 64;

/// Capacity of the polygon table, including the objective polygon.
pub const MAX_POLYGONS: usize = 16;

/// Capacity of the ray table (and of its parallel weight table).
pub const MAX_RAYS: usize = 1024;

/// Maximum number of checkpoints in a route.
pub const MAX_CHECKPOINTS: usize = 16;

/// Input units per arena unit. Coordinates are divided by this on the way in and
/// multiplied by it on the way out.
pub const UNIT_SCALE: i32 = 10;

/// Largest absolute coordinate accepted in arena units. This bounds the line
/// coefficients (|a|, |b| <= 2^16, |c| <= 2^33) so every product in the geometry
/// kernel fits in `i128`.
pub const COORDINATE_LIMIT: i32 = 32767;

pub const PLAYGROUND_MIN_X: i32 = -1500;
pub const PLAYGROUND_MAX_X: i32 = 1500;
pub const PLAYGROUND_MIN_Y: i32 = -1000;
pub const PLAYGROUND_MAX_Y: i32 = 1000;

// Vertex references store indices as u8.
const _: () = assert!(MAX_POINTS <= 256);
const _: () = assert!(MAX_POLYGONS <= 256);

/// Inclusive rectangle in input units. Vertices outside it never take part in the
/// visibility graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Playground {
    pub min: Point,
    pub max: Point,
}

impl Playground {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, p: Point) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }
}

impl Default for Playground {
    fn default() -> Self {
        Self {
            min: Point::new(PLAYGROUND_MIN_X, PLAYGROUND_MIN_Y),
            max: Point::new(PLAYGROUND_MAX_X, PLAYGROUND_MAX_Y),
        }
    }
}
