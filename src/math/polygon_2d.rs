use super::Point2;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. Repeated
/// back-and-forth vertex runs cancel out to zero.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns `true` if the polygon winds counter-clockwise.
#[must_use]
pub fn is_counter_clockwise(points: &[Point2]) -> bool {
    signed_area(points) > 0.0
}

/// Tests whether a point lies inside a polygon (ray casting).
///
/// Points exactly on the boundary may report either side; callers that
/// care must keep their inputs clear of the boundary.
#[must_use]
pub fn point_in_polygon(pt: Point2, points: &[Point2]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (points[i], points[j]);
        if (pi.y > pt.y) != (pj.y > pt.y) {
            let slope_x = (pj.x - pi.x) * (pt.y - pi.y) / (pj.y - pi.y) + pi.x;
            if pt.x < slope_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
