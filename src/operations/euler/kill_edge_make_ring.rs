use crate::error::{Result, TopologyError};
use crate::topology::{HalfEdgeId, RingId, TopologyStore};

/// The `kemr` Euler operator: kill edge, make ring.
///
/// Removes a pendant dart — a half-edge whose ring successor is its own
/// twin — from its ring, isolating the dart-tip vertex, and attaches a
/// fresh empty ring to the owning face as an inner ring.
///
/// The operator is one-directional: it always spins off a new ring and
/// never merges one away. The only way to fold rings back together in this
/// kernel is [`super::KillFaceMakeRingHole`] at the face level.
pub struct KillEdgeMakeRing {
    half_edge: HalfEdgeId,
}

impl KillEdgeMakeRing {
    /// Creates a new `KillEdgeMakeRing` operation removing the dart that
    /// starts at `half_edge`.
    #[must_use]
    pub fn new(half_edge: HalfEdgeId) -> Self {
        Self { half_edge }
    }

    /// Executes the operation, returning the new empty inner ring.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::NotTwinPair`] if the half-edge's ring
    /// successor is not its twin.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<RingId> {
        let h1 = self.half_edge;
        let e1 = *store.half_edge(h1)?;
        let h2 = e1.next;
        if e1.twin != h2 {
            return Err(TopologyError::NotTwinPair.into());
        }
        let e2 = *store.half_edge(h2)?;
        let ring = e1.ring;
        let tip = e1.dest;
        let base = e2.dest;

        if e2.next == h1 {
            // The dart was the whole ring.
            store.ring_mut(ring)?.first = None;
        } else {
            store.half_edge_mut(e1.prev)?.next = e2.next;
            store.half_edge_mut(e2.next)?.prev = e1.prev;
            let rd = store.ring_mut(ring)?;
            if rd.first == Some(h1) || rd.first == Some(h2) {
                rd.first = Some(e1.prev);
            }
        }

        // The tip is now isolated; it stays on its solid's vertex list.
        store.vertex_mut(tip)?.incident = None;
        // Re-anchor the base vertex if its incident half-edge was removed.
        if matches!(store.vertex(base)?.incident, Some(he) if he == h1 || he == h2) {
            let mut replacement = None;
            for he in store.ring_half_edges(ring)? {
                if store.half_edge(he)?.dest == base {
                    replacement = Some(he);
                    break;
                }
            }
            store.vertex_mut(base)?.incident = replacement;
        }

        store.remove_half_edge_pair(h1, h2);

        let face = store.ring(ring)?.face;
        Ok(store.new_inner_ring(face))
    }
}
