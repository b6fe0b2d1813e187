//! Visibility graph over the obstacle store.
//!
//! A ray joins two vertices whose connecting segment does not pass through the
//! interior of any obstacle. Rays are undirected; each is stored once, with its
//! weight in a parallel table.

use crate::arena::{to_input_units, ObstacleStore, VertexRef};
use crate::config::{Playground, MAX_RAYS};
use crate::error::{Error, Resource, Result};
use crate::geometry::{distance_weight, segment_crosses_polygon, PolygonCrossing};
use crate::vec2::Point;
use crate::Weight;
use arrayvec::ArrayVec;
use log::{debug, trace};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Ray {
    pub a: VertexRef,
    pub b: VertexRef,
}

impl Ray {
    /// If `v` is one end of this ray, returns the other end.
    pub fn other_end(&self, v: VertexRef) -> Option<VertexRef> {
        if self.a == v {
            Some(self.b)
        } else if self.b == v {
            Some(self.a)
        } else {
            None
        }
    }

    pub fn joins(&self, u: VertexRef, v: VertexRef) -> bool {
        (self.a == u && self.b == v) || (self.a == v && self.b == u)
    }
}

#[derive(Clone, Debug, Default)]
pub struct VisibilityGraph {
    rays: ArrayVec<Ray, MAX_RAYS>,
    /// `weights[i]` is the weight of `rays[i]`. Always >= 1.
    weights: ArrayVec<Weight, MAX_RAYS>,
}

impl VisibilityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ray: Ray, weight: Weight) -> Result<()> {
        if self.rays.is_full() {
            return Err(Error::CapacityExceeded(Resource::Rays));
        }
        self.rays.push(ray);
        self.weights.push(weight);
        Ok(())
    }

    pub fn num_rays(&self) -> usize {
        self.rays.len()
    }

    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }

    /// Iterates `(ray, weight)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Ray, Weight)> + '_ {
        self.rays.iter().zip(self.weights.iter().copied())
    }

    /// Weight of the ray joining `u` and `v`, if there is one.
    pub fn weight_between(&self, u: VertexRef, v: VertexRef) -> Option<Weight> {
        self.iter().find(|(ray, _)| ray.joins(u, v)).map(|(_, w)| w)
    }
}

// True if some obstacle selected by `include` has the segment passing through its interior.
fn is_occluded(
    store: &ObstacleStore,
    p1: Point,
    p2: Point,
    include: impl Fn(u8) -> bool,
) -> bool {
    store
        .obstacles()
        .filter(|&(i, _)| include(i))
        .any(|(_, poly)| segment_crosses_polygon(p1, p2, poly) == PolygonCrossing::Cross)
}

fn add_ray(
    graph: &mut VisibilityGraph,
    a: VertexRef,
    p1: Point,
    b: VertexRef,
    p2: Point,
) -> Result<()> {
    let weight = distance_weight(p1, p2);
    trace!("ray {:?} {:?} -- {:?} {:?}, weight {}", a, p1, b, p2, weight);
    graph.push(Ray { a, b }, weight)
}

/// Computes the visibility graph of every vertex in `store` that lies inside
/// `playground`, including the objective's source and destination.
pub fn build_visibility_graph(
    store: &ObstacleStore,
    playground: &Playground,
) -> Result<VisibilityGraph> {
    let in_bounds = |p: Point| playground.contains(to_input_units(p));
    let mut graph = VisibilityGraph::new();

    // Obstacles may overlap, so even a polygon's own edge can be hidden by another.
    debug!("step 1: intra-polygon rays");
    for (pi, poly) in store.iter().enumerate() {
        let pi = pi as u8;
        let n = poly.len();
        let num_edges = match n {
            0 | 1 => 0,
            // The wrap-around edge of a two-point polygon is the same edge again.
            2 => 1,
            _ => n,
        };
        for i in 0..num_edges {
            let j = (i + 1) % n;
            let (p1, p2) = (poly[i], poly[j]);
            if !in_bounds(p1) || !in_bounds(p2) {
                continue;
            }
            if is_occluded(store, p1, p2, |k| k != pi) {
                continue;
            }
            let a = VertexRef { polygon: pi, vertex: i as u8 };
            let b = VertexRef { polygon: pi, vertex: j as u8 };
            add_ray(&mut graph, a, p1, b, p2)?;
        }
    }
    let num_intra = graph.num_rays();
    debug!("{} intra-polygon rays", num_intra);

    debug!("step 2: inter-polygon rays");
    let num_polygons = store.num_polygons() as u8;
    for pi in 0..num_polygons {
        for pj in pi + 1..num_polygons {
            for (vi, &p1) in store.polygon(pi).iter().enumerate() {
                if !in_bounds(p1) {
                    continue;
                }
                for (vj, &p2) in store.polygon(pj).iter().enumerate() {
                    if !in_bounds(p2) {
                        continue;
                    }
                    if is_occluded(store, p1, p2, |_| true) {
                        continue;
                    }
                    let a = VertexRef { polygon: pi, vertex: vi as u8 };
                    let b = VertexRef { polygon: pj, vertex: vj as u8 };
                    add_ray(&mut graph, a, p1, b, p2)?;
                }
            }
        }
    }
    debug!("{} inter-polygon rays", graph.num_rays() - num_intra);

    Ok(graph)
}
