use thiserror::Error;

/// The fixed-capacity tables a planning request can run out of.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Resource {
    Points,
    Polygons,
    Rays,
    Checkpoints,
}

impl core::fmt::Display for Resource {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        fmt.write_str(match self {
            Resource::Points => "point",
            Resource::Polygons => "polygon",
            Resource::Rays => "ray",
            Resource::Checkpoints => "checkpoint",
        })
    }
}

#[derive(Error, Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    #[error("{0} capacity exceeded")]
    CapacityExceeded(Resource),

    #[error("no path to destination")]
    NoPath,

    #[error("vertex {vertex} out of range for polygon {polygon} ({count} vertices)")]
    VertexOutOfRange { polygon: u8, vertex: usize, count: usize },

    #[error("vertex count mismatch: polygon has {expected}, got {actual}")]
    VertexCountMismatch { expected: usize, actual: usize },

    #[error("coordinate ({x}, {y}) out of range")]
    CoordinateOutOfRange { x: i32, y: i32 },

    #[error("polygon must have at least one vertex")]
    EmptyPolygon,

    #[error("no obstacle polygon {0}")]
    UnknownPolygon(u8),
}

pub type Result<T> = core::result::Result<T, Error>;
