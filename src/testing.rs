use crate::arena::{to_arena_units, ObstacleStore, PolygonHandle};
use crate::geometry::{segment_crosses_polygon, PolygonCrossing};
use crate::planner::Planner;
use crate::route::Route;
use crate::vec2::Point;

pub fn init_test() {
    drop(env_logger::try_init());
}

/// Corners of an axis-aligned rectangle, counter-clockwise from `min`.
pub fn square_vertices(min: Point, max: Point) -> [Point; 4] {
    [
        min,
        Point::new(max.x, min.y),
        max,
        Point::new(min.x, max.y),
    ]
}

/// Adds a rectangle directly to `store`, in arena units.
pub fn add_square(store: &mut ObstacleStore, min: Point, max: Point) -> PolygonHandle {
    let handle = store.push_polygon(4).unwrap();
    store
        .polygon_mut(handle.index())
        .copy_from_slice(&square_vertices(min, max));
    handle
}

/// Adds a rectangle through the public API, in input units.
pub fn add_square_obstacle(planner: &mut Planner, min: Point, max: Point) -> PolygonHandle {
    planner
        .add_polygon_with_vertices(&square_vertices(min, max))
        .unwrap()
}

/// Checks every leg of `route`, starting from the planner's source, against every
/// obstacle.
pub fn assert_route_is_clear(planner: &Planner, route: &Route) {
    let store = planner.store();
    let (src, _) = planner.objective();
    let mut from = to_arena_units(src).unwrap();
    for &checkpoint in route.iter() {
        let to = to_arena_units(checkpoint).unwrap();
        for (i, poly) in store.obstacles() {
            assert_ne!(
                segment_crosses_polygon(from, to, poly),
                PolygonCrossing::Cross,
                "leg {:?} -> {:?} crosses obstacle {}",
                from,
                to,
                i
            );
        }
        from = to;
    }
}
