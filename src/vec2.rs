use core::ops::{Add, Mul, Neg, Sub};

#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Vec2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Add<T, Output = T> + Copy> Add<Vec2<T>> for Vec2<T> {
    type Output = Vec2<T>;
    fn add(self, other: Vec2<T>) -> Self::Output {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T: Sub<T, Output = T> + Copy> Sub<Vec2<T>> for Vec2<T> {
    type Output = Vec2<T>;
    fn sub(self, other: Vec2<T>) -> Self::Output {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T: Mul<T, Output = T> + Copy> Mul<T> for Vec2<T> {
    type Output = Vec2<T>;
    fn mul(self, other: T) -> Self::Output {
        Vec2 {
            x: self.x * other,
            y: self.y * other,
        }
    }
}

impl<T: Neg<Output = T>> Neg for Vec2<T> {
    type Output = Vec2<T>;
    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// A point on the board. Input units at the API surface, reduced units inside the arena.
pub type Point = Vec2<i32>;

/// Widened copy of a `Point`, used wherever products of coordinates are formed.
pub type Wide = Vec2<i64>;

impl Vec2<i32> {
    pub fn widen(self) -> Wide {
        Vec2 {
            x: self.x as i64,
            y: self.y as i64,
        }
    }
}

impl Vec2<i64> {
    pub fn dot(self, other: Wide) -> i64 {
        self.x * other.x + self.y * other.y
    }

    /// z component of the 3D cross product `self x other`.
    pub fn cross(self, other: Wide) -> i64 {
        self.x * other.y - self.y * other.x
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Vec2<T> {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "({:?}, {:?})", self.x, self.y)
    }
}
