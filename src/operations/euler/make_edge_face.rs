use crate::error::{OperationError, Result};
use crate::topology::{FaceId, RingId, TopologyStore, VertexId};

/// The `mef` Euler operator: make edge, face.
///
/// Creates a chord — a twin half-edge pair between `v1` and `v2`, both of
/// which must already be visited by `ring` — and splits the ring into two
/// disjoint closed rings along it. The ring carrying the `v1→v2` chord
/// half-edge stays on the original face; the other ring, carrying the
/// `v2→v1` half-edge, moves to a newly created face of the same solid.
///
/// Both endpoint positions are resolved with the same search rule as
/// [`super::MakeEdgeVertex`]: the half-edge whose *destination* is the
/// requested vertex, found by walking the ring once from its first
/// half-edge.
///
/// Closing an open dart chain back to its start vertex with this operator
/// turns the chain into a genuine polygon boundary.
pub struct MakeEdgeFace {
    ring: RingId,
    v1: VertexId,
    v2: VertexId,
}

impl MakeEdgeFace {
    /// Creates a new `MakeEdgeFace` operation splitting `ring` along the
    /// chord `v1`–`v2`.
    #[must_use]
    pub fn new(ring: RingId, v1: VertexId, v2: VertexId) -> Self {
        Self { ring, v1, v2 }
    }

    /// Executes the operation, returning the newly created face.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::TopologyError::VertexNotInRing`] if either
    /// endpoint is not visited by the ring, or
    /// [`OperationError::InvalidInput`] if the endpoints coincide. The
    /// store is left unchanged on failure.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<FaceId> {
        if self.v1 == self.v2 {
            return Err(
                OperationError::InvalidInput("chord endpoints must be distinct".into()).into(),
            );
        }
        let hp = store.find_half_edge_to(self.ring, self.v1)?;
        let hq = store.find_half_edge_to(self.ring, self.v2)?;
        let solid = {
            let face = store.ring(self.ring)?.face;
            store.face(face)?.solid
        };

        // c1 runs v1→v2, c2 runs v2→v1.
        let (c1, c2) = store.new_half_edge_pair(self.ring, self.v2, self.v1);
        let a_first = store.half_edge(hp)?.next;
        let b_first = store.half_edge(hq)?.next;

        // Ring kept by the original face: … → hp → c1 → b_first → …
        store.half_edge_mut(hp)?.next = c1;
        store.half_edge_mut(c1)?.prev = hp;
        store.half_edge_mut(c1)?.next = b_first;
        store.half_edge_mut(b_first)?.prev = c1;

        // Ring split off to the new face: … → hq → c2 → a_first → …
        store.half_edge_mut(hq)?.next = c2;
        store.half_edge_mut(c2)?.prev = hq;
        store.half_edge_mut(c2)?.next = a_first;
        store.half_edge_mut(a_first)?.prev = c2;

        store.ring_mut(self.ring)?.first = Some(c1);

        let (new_face, new_ring) = store.new_face_with_ring(solid);
        store.ring_mut(new_ring)?.first = Some(c2);
        for he in store.ring_half_edges(new_ring)? {
            store.half_edge_mut(he)?.ring = new_ring;
        }

        Ok(new_face)
    }
}
