use crate::arena::{to_input_units, ObstacleStore, VertexRef};
use crate::config::MAX_CHECKPOINTS;
use crate::error::{Error, Resource, Result};
use crate::shortest_path::{SolverState, VisitState};
use crate::vec2::Point;
use crate::Weight;
use arrayvec::ArrayVec;
use core::ops::Deref;
use log::debug;

/// Checkpoints to visit in order, from the first waypoint after the source through
/// the destination. Coordinates are in input units.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Route {
    pub checkpoints: ArrayVec<Point, MAX_CHECKPOINTS>,
    /// Remaining cost to the destination at each checkpoint. Strictly decreasing,
    /// ending at 0.
    pub costs: ArrayVec<Weight, MAX_CHECKPOINTS>,
    /// Cost from the source to the destination.
    pub total_weight: Weight,
}

impl Route {
    fn push(&mut self, checkpoint: Point, cost: Weight) -> Result<()> {
        if self.checkpoints.is_full() {
            return Err(Error::CapacityExceeded(Resource::Checkpoints));
        }
        self.checkpoints.push(checkpoint);
        self.costs.push(cost);
        Ok(())
    }

    pub fn destination(&self) -> Option<Point> {
        self.checkpoints.last().copied()
    }

    /// Shifts the final checkpoint only. Intermediate checkpoints are waypoints, not
    /// stopping points, so offsets between the actuator and the robot's center do not
    /// apply to them. Coordinates saturate at the `i32` range.
    pub fn apply_final_offset(&mut self, dx: i32, dy: i32) {
        if let Some(last) = self.checkpoints.last_mut() {
            *last = Point::new(last.x.saturating_add(dx), last.y.saturating_add(dy));
        }
    }
}

impl Deref for Route {
    type Target = [Point];
    fn deref(&self) -> &[Point] {
        &self.checkpoints
    }
}

/// Follows parent links from the source to the destination.
pub fn extract_route(store: &ObstacleStore, solver: &SolverState) -> Result<Route> {
    let src = store.arena_index(VertexRef::SOURCE);
    if solver.visit_state(src) == VisitState::NotVisited {
        return Err(Error::NoPath);
    }

    let mut route = Route {
        total_weight: solver.weight(src),
        ..Route::default()
    };
    let mut current = VertexRef::SOURCE;
    while current != VertexRef::DESTINATION {
        let next = solver
            .parent(store.arena_index(current))
            .ok_or(Error::NoPath)?;
        let ni = store.arena_index(next);
        if solver.visit_state(ni) == VisitState::NotVisited {
            return Err(Error::NoPath);
        }
        route.push(to_input_units(store.point(next)), solver.weight(ni))?;
        current = next;
    }
    debug!("extracted {} checkpoints", route.len());

    Ok(route)
}
