//! Single-source shortest paths over a visibility graph, rooted at the destination.
//!
//! This is label-correcting relaxation rather than Dijkstra: repeated passes over
//! every vertex, each vertex that was improved since it was last scanned relaxing
//! all of its rays, until a pass changes nothing. It needs no priority queue and the
//! graphs it runs on are small. Ray weights are positive integers, so every update
//! strictly lowers a weight and the passes terminate.

use crate::arena::{ObstacleStore, VertexRef};
use crate::config::MAX_POINTS;
use crate::visibility::VisibilityGraph;
use crate::Weight;
use log::debug;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum VisitState {
    /// Not reached from the destination (yet).
    NotVisited,
    /// Reached, and its rays have been relaxed with its current weight.
    Visited,
    /// Reached with a weight its neighbours have not seen yet.
    MustVisit,
}

/// Per-vertex solver results, indexed by arena position.
///
/// A fresh state is built for every planning request and dropped once the route has
/// been extracted, so nothing carries over between requests.
#[derive(Clone, Debug)]
pub struct SolverState {
    state: [VisitState; MAX_POINTS],
    weight: [Weight; MAX_POINTS],
    parent: [Option<VertexRef>; MAX_POINTS],
}

impl SolverState {
    pub fn new() -> Self {
        Self {
            state: [VisitState::NotVisited; MAX_POINTS],
            weight: [0; MAX_POINTS],
            parent: [None; MAX_POINTS],
        }
    }

    pub fn visit_state(&self, i: usize) -> VisitState {
        self.state[i]
    }

    /// Accumulated weight from vertex `i` to the destination. Meaningless while the
    /// vertex is `NotVisited`.
    pub fn weight(&self, i: usize) -> Weight {
        self.weight[i]
    }

    /// Next vertex on the way to the destination.
    pub fn parent(&self, i: usize) -> Option<VertexRef> {
        self.parent[i]
    }

    pub(crate) fn set(
        &mut self,
        i: usize,
        state: VisitState,
        weight: Weight,
        parent: Option<VertexRef>,
    ) {
        self.state[i] = state;
        self.weight[i] = weight;
        self.parent[i] = parent;
    }
}

impl Default for SolverState {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the shortest-path tree of `graph` rooted at the objective's destination.
pub fn solve(store: &ObstacleStore, graph: &VisibilityGraph) -> SolverState {
    let mut solver = SolverState::new();
    let root = store.arena_index(VertexRef::DESTINATION);
    solver.set(root, VisitState::MustVisit, 0, None);

    let mut passes = 0;
    loop {
        passes += 1;
        let mut changed = false;

        for v in store.vertex_refs() {
            let vi = store.arena_index(v);
            if solver.state[vi] != VisitState::MustVisit {
                continue;
            }
            let v_weight = solver.weight[vi];

            // Rays are stored once; other_end() walks them in both directions.
            for (ray, ray_weight) in graph.iter() {
                let u = match ray.other_end(v) {
                    Some(u) => u,
                    None => continue,
                };
                let ui = store.arena_index(u);
                let candidate = v_weight.saturating_add(ray_weight);
                if solver.state[ui] == VisitState::NotVisited || candidate < solver.weight[ui] {
                    solver.set(ui, VisitState::MustVisit, candidate, Some(v));
                    changed = true;
                }
            }

            solver.state[vi] = VisitState::Visited;
        }

        if !changed {
            break;
        }
    }
    debug!("relaxation settled after {} passes", passes);

    solver
}
