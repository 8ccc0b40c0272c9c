use crate::error::Result;
use crate::math::polygon_2d::signed_area;
use crate::topology::{RingId, TopologyStore};

/// Computes the signed area enclosed by a ring's vertex cycle.
///
/// Positive for counter-clockwise rings, negative for clockwise ones.
/// Pendant darts traverse each edge in both directions, so their
/// contribution cancels: an unclosed chain reports zero area.
pub struct RingArea {
    ring: RingId,
}

impl RingArea {
    /// Creates a new `RingArea` query.
    #[must_use]
    pub fn new(ring: RingId) -> Self {
        Self { ring }
    }

    /// Executes the query, returning the signed area.
    ///
    /// # Errors
    ///
    /// Returns an error if the ring walk fails.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64> {
        let mut points = Vec::new();
        for vertex in store.ring_vertices(self.ring)? {
            points.push(store.vertex(vertex)?.point);
        }
        Ok(signed_area(&points))
    }
}
