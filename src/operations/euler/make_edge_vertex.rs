use crate::error::Result;
use crate::math::Point2;
use crate::topology::{HalfEdgeId, RingId, TopologyStore, VertexId};

/// The `mev` Euler operator: make edge, vertex.
///
/// Creates a new vertex at `point` and a twin half-edge pair between `at`
/// and the new vertex, spliced into `ring` immediately after the half-edge
/// whose destination is `at`. The ring gains exactly two half-edges and now
/// traverses the pendant dart `…→at→new→at→…`; repeated calls grow an open
/// vertex chain that is later closed into a polygon by
/// [`super::MakeEdgeFace`].
pub struct MakeEdgeVertex {
    point: Point2,
    at: VertexId,
    ring: RingId,
}

impl MakeEdgeVertex {
    /// Creates a new `MakeEdgeVertex` operation extending `ring` from `at`.
    #[must_use]
    pub fn new(point: Point2, at: VertexId, ring: RingId) -> Self {
        Self { point, at, ring }
    }

    /// Executes the operation, returning the half-edge whose destination is
    /// the new vertex. The new vertex itself is its destination.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::TopologyError::VertexNotInRing`] if the ring
    /// is non-empty but no half-edge on it ends at `at`. The store is left
    /// unchanged on failure.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<HalfEdgeId> {
        let ring = *store.ring(self.ring)?;
        let solid = store.face(ring.face)?.solid;
        store.vertex(self.at)?;

        // Resolve the splice position before allocating anything, so a
        // failed search leaves no trace.
        let insert_after = match ring.first {
            None => None,
            Some(_) => Some(store.find_half_edge_to(self.ring, self.at)?),
        };

        let vertex = store.new_vertex(solid, self.point);
        let (h1, h2) = store.new_half_edge_pair(self.ring, vertex, self.at);

        match insert_after {
            None => {
                // First edge of the ring: the pair already closes on itself.
                store.ring_mut(self.ring)?.first = Some(h1);
                store.vertex_mut(self.at)?.incident = Some(h2);
            }
            Some(hp) => {
                let hn = store.half_edge(hp)?.next;
                store.half_edge_mut(hp)?.next = h1;
                store.half_edge_mut(h1)?.prev = hp;
                store.half_edge_mut(h2)?.next = hn;
                store.half_edge_mut(hn)?.prev = h2;
            }
        }
        store.vertex_mut(vertex)?.incident = Some(h1);

        Ok(h1)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::euler::MakeVertexFaceSolid;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn first_edge_forms_a_dart() {
        let mut store = TopologyStore::new();
        let seed = MakeVertexFaceSolid::new(p(0.0, 0.0)).execute(&mut store);
        let h1 = MakeEdgeVertex::new(p(1.0, 0.0), seed.vertex, seed.ring)
            .execute(&mut store)
            .unwrap();

        let ring = store.ring_half_edges(seed.ring).unwrap();
        assert_eq!(ring.len(), 2);

        let e1 = *store.half_edge(h1).unwrap();
        let h2 = e1.twin;
        assert_eq!(store.half_edge(h2).unwrap().twin, h1);
        assert_eq!(e1.next, h2);
        assert_eq!(e1.prev, h2);

        // destination sequence walks out to the new vertex and back
        let v1 = e1.dest;
        assert_eq!(
            store.ring_vertices(seed.ring).unwrap(),
            vec![v1, seed.vertex]
        );
        assert_eq!(store.vertex(v1).unwrap().incident, Some(h1));
        assert_eq!(store.vertex(seed.vertex).unwrap().incident, Some(h2));
    }

    #[test]
    fn chained_calls_trace_a_mirrored_round_trip() {
        let mut store = TopologyStore::new();
        let seed = MakeVertexFaceSolid::new(p(0.0, 0.0)).execute(&mut store);
        let mut tip = seed.vertex;
        let mut verts = vec![seed.vertex];
        for i in 1..=3 {
            let he = MakeEdgeVertex::new(p(f64::from(i), 0.0), tip, seed.ring)
                .execute(&mut store)
                .unwrap();
            tip = store.half_edge(he).unwrap().dest;
            verts.push(tip);
        }

        // 2n half-edges after n calls
        assert_eq!(store.ring_half_edges(seed.ring).unwrap().len(), 6);

        // v1, v2, v3, v2, v1, v0 — the round trip, starting after v0
        let (v0, v1, v2, v3) = (verts[0], verts[1], verts[2], verts[3]);
        assert_eq!(
            store.ring_vertices(seed.ring).unwrap(),
            vec![v1, v2, v3, v2, v1, v0]
        );

        // the solid picked up every vertex
        assert_eq!(store.solid(seed.solid).unwrap().vertices, verts);
    }

    #[test]
    fn twins_stay_adjacent_on_insertion() {
        let mut store = TopologyStore::new();
        let seed = MakeVertexFaceSolid::new(p(0.0, 0.0)).execute(&mut store);
        let mut tip = seed.vertex;
        for i in 1..=4 {
            let he = MakeEdgeVertex::new(p(f64::from(i), 1.0), tip, seed.ring)
                .execute(&mut store)
                .unwrap();
            let e = *store.half_edge(he).unwrap();
            assert_eq!(e.next, e.twin);
            tip = e.dest;
        }
        for (id, e) in store.half_edges() {
            assert_eq!(store.half_edge(e.twin).unwrap().twin, id);
        }
    }

    #[test]
    fn search_failure_leaves_store_untouched() {
        let mut store = TopologyStore::new();
        let a = MakeVertexFaceSolid::new(p(0.0, 0.0)).execute(&mut store);
        let b = MakeVertexFaceSolid::new(p(9.0, 9.0)).execute(&mut store);
        MakeEdgeVertex::new(p(1.0, 0.0), a.vertex, a.ring)
            .execute(&mut store)
            .unwrap();

        // b's seed vertex is not on a's ring
        let err = MakeEdgeVertex::new(p(2.0, 0.0), b.vertex, a.ring).execute(&mut store);
        assert!(err.is_err());
        assert_eq!(store.ring_half_edges(a.ring).unwrap().len(), 2);
        assert_eq!(store.solid(a.solid).unwrap().vertices.len(), 2);
    }
}
