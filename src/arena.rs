use crate::config::{COORDINATE_LIMIT, MAX_POINTS, MAX_POLYGONS, UNIT_SCALE};
use crate::error::{Error, Resource, Result};
use crate::vec2::Point;
use arrayvec::ArrayVec;
use core::ops::Range;

/// Index of the objective polygon. Vertex `DESTINATION` is where routes end,
/// vertex `SOURCE` is where they start.
pub const OBJECTIVE: u8 = 0;
pub const DESTINATION: u8 = 0;
pub const SOURCE: u8 = 1;

/// Names one vertex of one polygon.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct VertexRef {
    pub polygon: u8,
    pub vertex: u8,
}

impl VertexRef {
    pub const DESTINATION: VertexRef = VertexRef {
        polygon: OBJECTIVE,
        vertex: DESTINATION,
    };
    pub const SOURCE: VertexRef = VertexRef {
        polygon: OBJECTIVE,
        vertex: SOURCE,
    };
}

/// Handle to an obstacle polygon. Only the store hands these out, so a handle never
/// names the objective polygon.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PolygonHandle(u8);

impl PolygonHandle {
    pub fn index(self) -> u8 {
        self.0
    }
}

/// Converts input units to arena units, rejecting coordinates the geometry kernel
/// cannot hold.
pub fn to_arena_units(p: Point) -> Result<Point> {
    let reduced = Point::new(p.x.div_euclid(UNIT_SCALE), p.y.div_euclid(UNIT_SCALE));
    if reduced.x.abs() > COORDINATE_LIMIT || reduced.y.abs() > COORDINATE_LIMIT {
        return Err(Error::CoordinateOutOfRange { x: p.x, y: p.y });
    }
    Ok(reduced)
}

pub fn to_input_units(p: Point) -> Point {
    p * UNIT_SCALE
}

/// Fixed-capacity arena of points, partitioned into polygons.
///
/// Polygons are contiguous runs of `points`; `index[i]..index[i + 1]` is the range
/// of polygon `i`. Polygon 0 always holds exactly two points, the destination and
/// the source of the current objective. All coordinates are in arena units.
#[derive(Clone, Debug)]
pub struct ObstacleStore {
    index: ArrayVec<u16, { MAX_POLYGONS + 1 }>,
    points: ArrayVec<Point, MAX_POINTS>,
}

impl ObstacleStore {
    pub fn new() -> Self {
        let mut index = ArrayVec::new();
        index.push(0);
        let mut store = Self {
            index,
            points: ArrayVec::new(),
        };
        // Two points fit in any arena.
        store.points.push(Point::default());
        store.points.push(Point::default());
        store.finish_polygon();
        store
    }

    fn finish_polygon(&mut self) {
        self.index.push(self.points.len() as u16);
    }

    /// Reserves `count` points for a new polygon. The vertices start at the origin.
    pub fn push_polygon(&mut self, count: usize) -> Result<PolygonHandle> {
        if count == 0 {
            return Err(Error::EmptyPolygon);
        }
        if self.index.is_full() {
            return Err(Error::CapacityExceeded(Resource::Polygons));
        }
        if self.points.remaining_capacity() < count {
            return Err(Error::CapacityExceeded(Resource::Points));
        }
        let handle = PolygonHandle(self.num_polygons() as u8);
        for _ in 0..count {
            self.points.push(Point::default());
        }
        self.finish_polygon();
        Ok(handle)
    }

    /// Drops every obstacle, keeping the objective polygon.
    pub fn clear_obstacles(&mut self) {
        self.index.truncate(2);
        self.points.truncate(self.index[1] as usize);
    }

    /// Number of polygons, including the objective polygon.
    pub fn num_polygons(&self) -> usize {
        self.index.len() - 1
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn polygon_range(&self, polygon: u8) -> Range<usize> {
        let i = polygon as usize;
        self.index[i] as usize..self.index[i + 1] as usize
    }

    pub fn polygon(&self, polygon: u8) -> &[Point] {
        &self.points[self.polygon_range(polygon)]
    }

    pub fn polygon_mut(&mut self, polygon: u8) -> &mut [Point] {
        let range = self.polygon_range(polygon);
        &mut self.points[range]
    }

    /// Iterates polygon slices, starting with the objective polygon.
    pub fn iter(&self) -> impl Iterator<Item = &[Point]> + '_ {
        self.index
            .windows(2)
            .map(move |w| &self.points[w[0] as usize..w[1] as usize])
    }

    /// Iterates `(polygon index, vertices)` for the obstacles only.
    pub fn obstacles(&self) -> impl Iterator<Item = (u8, &[Point])> + '_ {
        self.iter()
            .enumerate()
            .skip(1)
            .map(|(i, poly)| (i as u8, poly))
    }

    /// Position of a vertex in the arena.
    pub fn arena_index(&self, v: VertexRef) -> usize {
        self.index[v.polygon as usize] as usize + v.vertex as usize
    }

    pub fn point(&self, v: VertexRef) -> Point {
        self.points[self.arena_index(v)]
    }

    /// Iterates every vertex in arena order.
    pub fn vertex_refs(&self) -> impl Iterator<Item = VertexRef> + '_ {
        self.iter().enumerate().flat_map(|(polygon, poly)| {
            (0..poly.len()).map(move |vertex| VertexRef {
                polygon: polygon as u8,
                vertex: vertex as u8,
            })
        })
    }

    pub fn set_objective(&mut self, src: Point, dst: Point) {
        let objective = self.polygon_mut(OBJECTIVE);
        objective[DESTINATION as usize] = dst;
        objective[SOURCE as usize] = src;
    }

    pub fn handle(&self, polygon: u8) -> Option<PolygonHandle> {
        if polygon != OBJECTIVE && (polygon as usize) < self.num_polygons() {
            Some(PolygonHandle(polygon))
        } else {
            None
        }
    }
}

impl Default for ObstacleStore {
    fn default() -> Self {
        Self::new()
    }
}
