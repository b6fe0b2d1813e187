//! Exact integer geometry on arena points.
//!
//! All predicates assume arena coordinates, i.e. absolute values no larger than
//! `config::COORDINATE_LIMIT`. Under that bound nothing here divides, rounds or
//! overflows: lines are kept as reduced integer triples and intersections as
//! rationals, so "is this crossing exactly on that vertex" is an equality test.
//!
//! Obstacles are treated as convex polygons. Concave regions are built from
//! several overlapping convex obstacles.

use crate::vec2::{Point, Wide};
use crate::Weight;

/// The implicit line `a*x + b*y + c = 0`.
///
/// Coefficients are divided by their gcd and the sign is fixed so that the first
/// non-zero of `(a, b)` is positive. Two coincident lines therefore compare equal.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Line {
    pub a: i64,
    pub b: i64,
    pub c: i64,
}

impl Line {
    /// True for the "line" through two equal points.
    pub fn is_degenerate(&self) -> bool {
        self.a == 0 && self.b == 0
    }

    /// Signed value of the line equation at `p`. Zero when `p` is on the line.
    #[cfg(test)]
    pub fn eval(&self, p: Point) -> i64 {
        self.a * p.x as i64 + self.b * p.y as i64 + self.c
    }
}

fn gcd(a: i64, b: i64) -> i64 {
    let mut a = a.abs();
    let mut b = b.abs();
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Builds the line through `p1` and `p2`: `a = -(y2-y1)`, `b = x2-x1`,
/// `c = -(a*x1 + b*y1)`, then reduced to canonical form.
pub fn line_from_points(p1: Point, p2: Point) -> Line {
    let p1 = p1.widen();
    let p2 = p2.widen();
    let a = -(p2.y - p1.y);
    let b = p2.x - p1.x;
    let c = -(a * p1.x + b * p1.y);

    let g = gcd(gcd(a, b), c);
    if g == 0 {
        return Line { a: 0, b: 0, c: 0 };
    }
    let d = if a < 0 || (a == 0 && b < 0) { -g } else { g };
    Line {
        a: a / d,
        b: b / d,
        c: c / d,
    }
}

/// A point with rational coordinates `(x / den, y / den)`, `den > 0`.
#[derive(Copy, Clone, Debug)]
pub struct RationalPoint {
    pub x: i128,
    pub y: i128,
    pub den: i128,
}

impl RationalPoint {
    pub fn new(x: i128, y: i128, den: i128) -> Self {
        if den < 0 {
            Self {
                x: -x,
                y: -y,
                den: -den,
            }
        } else {
            Self { x, y, den }
        }
    }

    pub fn from_point(p: Point) -> Self {
        Self {
            x: p.x as i128,
            y: p.y as i128,
            den: 1,
        }
    }

    /// Exact comparison against an integer point.
    pub fn is_point(&self, p: Point) -> bool {
        self.x == p.x as i128 * self.den && self.y == p.y as i128 * self.den
    }

    /// Sign of `(a - self) . (b - self)`. Non-positive iff `self` lies between `a` and
    /// `b`, given the three are collinear.
    fn dot_sign(&self, a: Point, b: Point) -> i128 {
        let ax = a.x as i128 * self.den - self.x;
        let ay = a.y as i128 * self.den - self.y;
        let bx = b.x as i128 * self.den - self.x;
        let by = b.y as i128 * self.den - self.y;
        (ax * bx + ay * by).signum()
    }
}

impl PartialEq for RationalPoint {
    fn eq(&self, other: &Self) -> bool {
        self.x * other.den == other.x * self.den && self.y * other.den == other.y * self.den
    }
}

impl Eq for RationalPoint {}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LineIntersection {
    /// Distinct parallel lines, or a degenerate line.
    NoCross,
    /// The lines coincide.
    ParallelCross,
    Cross(RationalPoint),
}

pub fn intersect_lines(l1: &Line, l2: &Line) -> LineIntersection {
    if l1.is_degenerate() || l2.is_degenerate() {
        return LineIntersection::NoCross;
    }

    let (a1, b1, c1) = (l1.a as i128, l1.b as i128, l1.c as i128);
    let (a2, b2, c2) = (l2.a as i128, l2.b as i128, l2.c as i128);

    // Both horizontal or both vertical.
    if (a1 == 0 && a2 == 0) || (b1 == 0 && b2 == 0) {
        return if l1 == l2 {
            LineIntersection::ParallelCross
        } else {
            LineIntersection::NoCross
        };
    }

    // l1 vertical, l2 horizontal: x = -c1/a1, y = -c2/b2.
    if b1 == 0 && a2 == 0 {
        return LineIntersection::Cross(RationalPoint::new(-c1 * b2, -c2 * a1, a1 * b2));
    }

    // l1 horizontal, l2 vertical: x = -c2/a2, y = -c1/b1.
    if a1 == 0 && b2 == 0 {
        return LineIntersection::Cross(RationalPoint::new(-c2 * b1, -c1 * a2, a2 * b1));
    }

    let det = a1 * b2 - a2 * b1;
    if det == 0 {
        return if l1 == l2 {
            LineIntersection::ParallelCross
        } else {
            LineIntersection::NoCross
        };
    }

    LineIntersection::Cross(RationalPoint::new(
        b1 * c2 - b2 * c1,
        a2 * c1 - a1 * c2,
        det,
    ))
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SegmentIntersection {
    NoCross,
    /// The segments cross at a point interior to both.
    Cross(RationalPoint),
    /// The segments meet at exactly one point, which is an endpoint of at least one.
    CrossAtPoint,
    /// The segments are collinear and overlap along a non-zero length.
    ParallelCross,
}

/// Classifies the intersection of the closed segments `[s1, s2]` and `[t1, t2]`.
pub fn intersect_segments(s1: Point, s2: Point, t1: Point, t2: Point) -> SegmentIntersection {
    if s1 == s2 {
        return point_on_segment(s1, t1, t2);
    }
    if t1 == t2 {
        return point_on_segment(t1, s1, s2);
    }

    match intersect_lines(&line_from_points(s1, s2), &line_from_points(t1, t2)) {
        LineIntersection::NoCross => SegmentIntersection::NoCross,
        LineIntersection::ParallelCross => collinear_overlap(s1, s2, t1, t2),
        LineIntersection::Cross(p) => {
            // Shared endpoints: the crossing can only be that point.
            if s1 == t1 || s1 == t2 || s2 == t1 || s2 == t2 {
                return SegmentIntersection::CrossAtPoint;
            }
            if p.dot_sign(s1, s2) > 0 || p.dot_sign(t1, t2) > 0 {
                return SegmentIntersection::NoCross;
            }
            if p.is_point(s1) || p.is_point(s2) || p.is_point(t1) || p.is_point(t2) {
                SegmentIntersection::CrossAtPoint
            } else {
                SegmentIntersection::Cross(p)
            }
        }
    }
}

fn point_on_segment(p: Point, a: Point, b: Point) -> SegmentIntersection {
    let pa = (a - p).widen();
    let pb = (b - p).widen();
    if pa.cross(pb) == 0 && pa.dot(pb) <= 0 {
        SegmentIntersection::CrossAtPoint
    } else {
        SegmentIntersection::NoCross
    }
}

// Both segments lie on the same line and s1 != s2. Project t onto s.
fn collinear_overlap(s1: Point, s2: Point, t1: Point, t2: Point) -> SegmentIntersection {
    let d = (s2 - s1).widen();
    let len = d.dot(d);
    let u1 = (t1 - s1).widen().dot(d);
    let u2 = (t2 - s1).widen().dot(d);
    let lo = u1.min(u2).max(0);
    let hi = u1.max(u2).min(len);
    if lo > hi {
        SegmentIntersection::NoCross
    } else if lo == hi {
        SegmentIntersection::CrossAtPoint
    } else {
        SegmentIntersection::ParallelCross
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PointLocation {
    Inside,
    Outside,
    OnEdge,
}

/// Locates `p` relative to the convex polygon `poly` (implicitly closed).
pub fn point_in_polygon(p: Point, poly: &[Point]) -> PointLocation {
    point_in_polygon_scaled(p.widen(), 1, poly)
}

/// Same as `point_in_polygon`, with `p` given in units of `1 / scale`. Used to test
/// segment midpoints without leaving integer arithmetic.
fn point_in_polygon_scaled(p: Wide, scale: i64, poly: &[Point]) -> PointLocation {
    if poly.iter().any(|v| v.widen() * scale == p) {
        return PointLocation::OnEdge;
    }

    let n = poly.len();
    let mut sign = 0;
    let mut on_edge = false;
    for (i, cur) in poly.iter().enumerate() {
        let cur = cur.widen() * scale - p;
        let next = poly[(i + 1) % n].widen() * scale - p;
        let cross = next.cross(cur);
        if cross == 0 {
            if cur.dot(next) <= 0 {
                on_edge = true;
                continue;
            }
            // On the supporting line of an edge but past its ends.
            return PointLocation::Outside;
        }
        let s = cross.signum();
        if sign == 0 {
            sign = s;
        } else if sign != s {
            return PointLocation::Outside;
        }
    }

    if on_edge {
        PointLocation::OnEdge
    } else if sign != 0 && n >= 3 {
        PointLocation::Inside
    } else {
        PointLocation::Outside
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PolygonCrossing {
    NoCross,
    /// The segment passes through the polygon's interior.
    Cross,
    /// The segment touches the boundary without entering the interior.
    TouchEdge,
    /// The segment runs along one of the polygon's edges.
    Side,
}

/// Classifies the segment `[p1, p2]` against the convex polygon `poly`.
pub fn segment_crosses_polygon(p1: Point, p2: Point, poly: &[Point]) -> PolygonCrossing {
    let n = poly.len();
    let mut touches = 0;
    for i in 0..n {
        match intersect_segments(p1, p2, poly[i], poly[(i + 1) % n]) {
            SegmentIntersection::Cross(_) => return PolygonCrossing::Cross,
            SegmentIntersection::ParallelCross => return PolygonCrossing::Side,
            SegmentIntersection::CrossAtPoint => touches += 1,
            SegmentIntersection::NoCross => {}
        }
    }

    if point_in_polygon(p1, poly) == PointLocation::Inside
        || point_in_polygon(p2, poly) == PointLocation::Inside
    {
        return PolygonCrossing::Cross;
    }

    match touches {
        0 => PolygonCrossing::NoCross,
        1 | 2 => {
            // Either a graze, or a chord between two boundary points.
            let mid = p1.widen() + p2.widen();
            if point_in_polygon_scaled(mid, 2, poly) == PointLocation::Inside {
                PolygonCrossing::Cross
            } else {
                PolygonCrossing::TouchEdge
            }
        }
        // Enters and leaves through vertices.
        _ => PolygonCrossing::Cross,
    }
}

fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut x = n;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

/// Ray weight: the Euclidean distance, floored, plus one. Never zero.
pub fn distance_weight(p1: Point, p2: Point) -> Weight {
    let d = (p2 - p1).widen();
    isqrt(d.dot(d) as u64) as Weight + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn square(x0: i32, y0: i32, x1: i32, y1: i32) -> [Point; 4] {
        [pt(x0, y0), pt(x1, y0), pt(x1, y1), pt(x0, y1)]
    }

    #[test]
    fn line_from_points_test() {
        fn case(description: &str, p1: Point, p2: Point, expected: Line) {
            let line = line_from_points(p1, p2);
            assert_eq!(line, expected, "{}", description);
            assert_eq!(line.eval(p1), 0, "{}: p1 on line", description);
            assert_eq!(line.eval(p2), 0, "{}: p2 on line", description);
        }

        case("horizontal", pt(0, 5), pt(10, 5), Line { a: 0, b: 1, c: -5 });
        case("horizontal reversed", pt(10, 5), pt(0, 5), Line { a: 0, b: 1, c: -5 });
        case("vertical", pt(3, 0), pt(3, 7), Line { a: 1, b: 0, c: -3 });
        case("diagonal", pt(0, 0), pt(4, 4), Line { a: 1, b: -1, c: 0 });
        case("diagonal scaled", pt(2, 2), pt(-6, -6), Line { a: 1, b: -1, c: 0 });
        case("steep", pt(1, 1), pt(2, 4), Line { a: 3, b: -1, c: -2 });

        assert!(line_from_points(pt(4, 4), pt(4, 4)).is_degenerate());
    }

    #[test]
    fn intersect_lines_test() {
        fn case(
            description: &str,
            l1: (Point, Point),
            l2: (Point, Point),
            expected: LineIntersection,
        ) {
            let result = intersect_lines(
                &line_from_points(l1.0, l1.1),
                &line_from_points(l2.0, l2.1),
            );
            assert_eq!(result, expected, "{}", description);
        }

        case(
            "distinct horizontals",
            (pt(0, 0), pt(5, 0)),
            (pt(0, 1), pt(5, 1)),
            LineIntersection::NoCross,
        );
        case(
            "same vertical",
            (pt(2, 0), pt(2, 5)),
            (pt(2, 9), pt(2, 7)),
            LineIntersection::ParallelCross,
        );
        case(
            "vertical and horizontal",
            (pt(2, 0), pt(2, 5)),
            (pt(-1, 3), pt(7, 3)),
            LineIntersection::Cross(RationalPoint::from_point(pt(2, 3))),
        );
        case(
            "horizontal and vertical",
            (pt(-1, 3), pt(7, 3)),
            (pt(2, 0), pt(2, 5)),
            LineIntersection::Cross(RationalPoint::from_point(pt(2, 3))),
        );
        case(
            "diagonals",
            (pt(0, 0), pt(4, 4)),
            (pt(0, 4), pt(4, 0)),
            LineIntersection::Cross(RationalPoint::from_point(pt(2, 2))),
        );
        case(
            "crossing at a shared point",
            (pt(0, 0), pt(1, 0)),
            (pt(0, 0), pt(3, 1)),
            LineIntersection::Cross(RationalPoint::from_point(pt(0, 0))),
        );
        case(
            "coincident sloped",
            (pt(0, 1), pt(2, 2)),
            (pt(4, 3), pt(-2, 0)),
            LineIntersection::ParallelCross,
        );
        case(
            "parallel sloped",
            (pt(0, 1), pt(2, 2)),
            (pt(0, 0), pt(2, 1)),
            LineIntersection::NoCross,
        );
        case(
            "degenerate",
            (pt(1, 1), pt(1, 1)),
            (pt(0, 0), pt(2, 2)),
            LineIntersection::NoCross,
        );
    }

    #[test]
    fn rational_crossing_test() {
        // y = x and y = 1 - x cross at (1/2, 1/2).
        match intersect_lines(
            &line_from_points(pt(0, 0), pt(1, 1)),
            &line_from_points(pt(0, 1), pt(1, 0)),
        ) {
            LineIntersection::Cross(p) => {
                assert_eq!(p, RationalPoint::new(1, 1, 2));
                assert!(!p.is_point(pt(0, 0)));
            }
            other => panic!("expected a crossing, got {:?}", other),
        }
    }

    #[test]
    fn intersect_segments_test() {
        fn case(
            description: &str,
            s: (Point, Point),
            t: (Point, Point),
            expected: SegmentIntersection,
        ) {
            let result = intersect_segments(s.0, s.1, t.0, t.1);
            assert_eq!(result, expected, "{}", description);
        }
        use SegmentIntersection::*;

        case(
            "x crossing",
            (pt(0, 0), pt(4, 4)),
            (pt(0, 4), pt(4, 0)),
            Cross(RationalPoint::from_point(pt(2, 2))),
        );
        case("lines cross beyond s", (pt(0, 0), pt(1, 1)), (pt(0, 4), pt(4, 0)), NoCross);
        case("lines cross beyond t", (pt(0, 0), pt(4, 4)), (pt(0, 4), pt(1, 3)), NoCross);
        case("shared endpoint", (pt(0, 0), pt(4, 4)), (pt(4, 4), pt(8, 0)), CrossAtPoint);
        case("t ends on s", (pt(0, 0), pt(4, 0)), (pt(2, 0), pt(2, 5)), CrossAtPoint);
        case(
            "s passes through t's vertex",
            (pt(0, 2), pt(4, 2)),
            (pt(2, 2), pt(5, 5)),
            CrossAtPoint,
        );
        case("parallel apart", (pt(0, 0), pt(4, 0)), (pt(0, 1), pt(4, 1)), NoCross);
        case("collinear overlap", (pt(0, 0), pt(4, 0)), (pt(2, 0), pt(6, 0)), ParallelCross);
        case("collinear contained", (pt(0, 0), pt(4, 4)), (pt(1, 1), pt(2, 2)), ParallelCross);
        case("collinear touching", (pt(0, 0), pt(4, 0)), (pt(4, 0), pt(6, 0)), CrossAtPoint);
        case("collinear disjoint", (pt(0, 0), pt(4, 0)), (pt(5, 0), pt(6, 0)), NoCross);
        case("zero-length on t", (pt(2, 2), pt(2, 2)), (pt(0, 0), pt(4, 4)), CrossAtPoint);
        case("zero-length off t", (pt(2, 3), pt(2, 3)), (pt(0, 0), pt(4, 4)), NoCross);
        case("zero-length t beyond s", (pt(0, 0), pt(4, 4)), (pt(5, 5), pt(5, 5)), NoCross);
        case(
            "both zero-length, equal",
            (pt(1, 1), pt(1, 1)),
            (pt(1, 1), pt(1, 1)),
            CrossAtPoint,
        );
    }

    #[test]
    fn point_in_polygon_test() {
        let sq = square(0, 0, 4, 4);
        fn case(description: &str, p: Point, poly: &[Point], expected: PointLocation) {
            assert_eq!(point_in_polygon(p, poly), expected, "{}", description);
        }
        use PointLocation::*;

        case("center", pt(2, 2), &sq, Inside);
        case("vertex", pt(4, 4), &sq, OnEdge);
        case("edge", pt(4, 2), &sq, OnEdge);
        case("outside", pt(5, 2), &sq, Outside);
        case("on edge line past the corner", pt(6, 0), &sq, Outside);
        case("far away", pt(-10, 30), &sq, Outside);

        let mut cw = sq;
        cw.reverse();
        case("center, reversed winding", pt(1, 3), &cw, Inside);

        let tri = [pt(0, 0), pt(6, 0), pt(0, 6)];
        case("triangle inside", pt(1, 1), &tri, Inside);
        case("triangle hypotenuse", pt(3, 3), &tri, OnEdge);
        case("triangle outside", pt(4, 4), &tri, Outside);

        case("segment polygon", pt(1, 1), &[pt(0, 0), pt(2, 2)], OnEdge);
        case("segment polygon off", pt(1, 0), &[pt(0, 0), pt(2, 2)], Outside);
        case("empty polygon", pt(0, 0), &[], Outside);
    }

    #[test]
    fn segment_crosses_polygon_test() {
        let sq = square(4, 4, 6, 6);
        fn case(
            description: &str,
            p1: Point,
            p2: Point,
            poly: &[Point],
            expected: PolygonCrossing,
        ) {
            assert_eq!(segment_crosses_polygon(p1, p2, poly), expected, "{}", description);
            assert_eq!(
                segment_crosses_polygon(p2, p1, poly),
                expected,
                "{} (reversed)",
                description
            );
        }
        use PolygonCrossing::*;

        case("clear", pt(0, 0), pt(10, 0), &sq, NoCross);
        case("through", pt(0, 5), pt(10, 5), &sq, Cross);
        case("diagonal through both corners", pt(0, 0), pt(10, 10), &sq, Cross);
        case("corner to corner", pt(4, 4), pt(6, 6), &sq, Cross);
        case("from corner outward", pt(4, 6), pt(0, 0), &sq, TouchEdge);
        case("grazing a corner", pt(3, 9), pt(9, 3), &sq, TouchEdge);
        case("along an edge", pt(4, 0), pt(4, 10), &sq, Side);
        case("own edge", pt(4, 4), pt(6, 4), &sq, Side);
        case("ends inside", pt(0, 5), pt(5, 5), &sq, Cross);
        case("ends on an edge", pt(0, 5), pt(4, 5), &sq, TouchEdge);
        case("chord between edge midpoints", pt(4, 5), pt(5, 6), &sq, Cross);
        case("anti-diagonal", pt(4, 6), pt(6, 4), &sq, Cross);
        // Touches three edges: the bottom edge at (5, 4) and both edges meeting at (4, 6).
        case("edge point to far corner", pt(5, 4), pt(4, 6), &sq, Cross);
    }

    #[test]
    fn distance_weight_test() {
        assert_eq!(distance_weight(pt(0, 0), pt(0, 0)), 1);
        assert_eq!(distance_weight(pt(0, 0), pt(3, 4)), 6);
        assert_eq!(distance_weight(pt(0, 0), pt(1, 1)), 2);
        assert_eq!(distance_weight(pt(-4, 6), pt(0, 0)), 8);
        assert_eq!(distance_weight(pt(0, 0), pt(10, 0)), 11);
    }

    #[test]
    fn isqrt_test() {
        for n in 0..2000u64 {
            let r = isqrt(n);
            assert!(r * r <= n && (r + 1) * (r + 1) > n, "isqrt({}) = {}", n, r);
        }
    }
}
