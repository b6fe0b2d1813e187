//! The planner facade: owns the obstacle store and runs the planning pipeline.
//!
//! All coordinates crossing this API are in input units. They are reduced to arena
//! units on the way in and scaled back on the way out.

use crate::arena::{to_arena_units, to_input_units, ObstacleStore, PolygonHandle, VertexRef};
use crate::config::Playground;
use crate::error::{Error, Result};
use crate::geometry::{point_in_polygon, PointLocation};
use crate::route::{extract_route, Route};
use crate::shortest_path::solve;
use crate::vec2::Point;
use crate::visibility::{build_visibility_graph, VisibilityGraph};
use log::{debug, warn};

#[derive(Clone, Debug, Default)]
pub struct Planner {
    store: ObstacleStore,
    playground: Playground,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_playground(playground: Playground) -> Self {
        Self {
            store: ObstacleStore::new(),
            playground,
        }
    }

    pub fn playground(&self) -> &Playground {
        &self.playground
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &ObstacleStore {
        &self.store
    }

    /// Sets where the next route starts and ends.
    pub fn set_objective(&mut self, src: Point, dst: Point) -> Result<()> {
        let src = to_arena_units(src)?;
        let dst = to_arena_units(dst)?;
        self.store.set_objective(src, dst);
        Ok(())
    }

    /// Current `(src, dst)`, as reduced and scaled back.
    pub fn objective(&self) -> (Point, Point) {
        (
            to_input_units(self.store.point(VertexRef::SOURCE)),
            to_input_units(self.store.point(VertexRef::DESTINATION)),
        )
    }

    /// Reserves room for an obstacle with `vertex_count` vertices. The vertices start
    /// at the origin; fill them in with `set_polygon_vertex`.
    pub fn add_polygon(&mut self, vertex_count: usize) -> Result<PolygonHandle> {
        self.store.push_polygon(vertex_count)
    }

    /// Reserves and fills an obstacle in one call. Nothing is reserved if any vertex
    /// is out of range.
    pub fn add_polygon_with_vertices(&mut self, vertices: &[Point]) -> Result<PolygonHandle> {
        for &p in vertices.iter() {
            to_arena_units(p)?;
        }
        let handle = self.store.push_polygon(vertices.len())?;
        self.set_polygon_vertices(handle, vertices)?;
        Ok(handle)
    }

    fn check_handle(&self, polygon: PolygonHandle) -> Result<u8> {
        let index = polygon.index();
        match self.store.handle(index) {
            Some(_) => Ok(index),
            None => Err(Error::UnknownPolygon(index)),
        }
    }

    pub fn set_polygon_vertex(
        &mut self,
        polygon: PolygonHandle,
        index: usize,
        p: Point,
    ) -> Result<()> {
        let pi = self.check_handle(polygon)?;
        let reduced = to_arena_units(p)?;
        let poly = self.store.polygon_mut(pi);
        let count = poly.len();
        match poly.get_mut(index) {
            Some(slot) => {
                *slot = reduced;
                Ok(())
            }
            None => Err(Error::VertexOutOfRange {
                polygon: pi,
                vertex: index,
                count,
            }),
        }
    }

    /// Rewrites every vertex of `polygon`. The polygon keeps its reserved size, so
    /// `vertices` must match it. Nothing is written if any vertex is out of range.
    pub fn set_polygon_vertices(
        &mut self,
        polygon: PolygonHandle,
        vertices: &[Point],
    ) -> Result<()> {
        let pi = self.check_handle(polygon)?;
        let expected = self.store.polygon(pi).len();
        if vertices.len() != expected {
            return Err(Error::VertexCountMismatch {
                expected,
                actual: vertices.len(),
            });
        }
        for &p in vertices.iter() {
            to_arena_units(p)?;
        }
        for (slot, &p) in self.store.polygon_mut(pi).iter_mut().zip(vertices.iter()) {
            *slot = to_arena_units(p)?;
        }
        Ok(())
    }

    pub fn polygon_vertices(
        &self,
        polygon: PolygonHandle,
    ) -> Result<impl Iterator<Item = Point> + '_> {
        let pi = self.check_handle(polygon)?;
        Ok(self.store.polygon(pi).iter().map(|&p| to_input_units(p)))
    }

    /// First obstacle whose interior strictly contains `p`.
    pub fn obstacle_at(&self, p: Point) -> Option<PolygonHandle> {
        let reduced = to_arena_units(p).ok()?;
        self.store
            .obstacles()
            .find(|(_, poly)| point_in_polygon(reduced, poly) == PointLocation::Inside)
            .and_then(|(i, _)| self.store.handle(i))
    }

    /// Number of polygons, counting the objective.
    pub fn num_polygons(&self) -> usize {
        self.store.num_polygons()
    }

    pub fn num_points(&self) -> usize {
        self.store.num_points()
    }

    /// Drops every obstacle. Handles handed out earlier become invalid.
    pub fn clear_obstacles(&mut self) {
        self.store.clear_obstacles();
    }

    pub fn visibility_graph(&self) -> Result<VisibilityGraph> {
        build_visibility_graph(&self.store, &self.playground)
    }

    /// Plans a route for the current objective around the current obstacles.
    pub fn process(&self) -> Result<Route> {
        debug!(
            "planning with {} obstacles, {} points",
            self.store.num_polygons() - 1,
            self.store.num_points()
        );
        let result = self.visibility_graph().and_then(|graph| {
            let solver = solve(&self.store, &graph);
            extract_route(&self.store, &solver)
        });
        match &result {
            Ok(route) => debug!("route: {:?}", &route[..]),
            Err(Error::CapacityExceeded(resource)) => {
                warn!("planning failed: {} capacity exceeded", resource)
            }
            Err(e) => debug!("planning failed: {}", e),
        }
        result
    }
}
