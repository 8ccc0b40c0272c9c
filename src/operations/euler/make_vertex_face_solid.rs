use crate::math::Point2;
use crate::topology::{FaceId, RingId, SolidId, TopologyStore, VertexId};

/// Identifiers of the entities created by [`MakeVertexFaceSolid`].
#[derive(Debug, Clone, Copy)]
pub struct PanelSeed {
    pub solid: SolidId,
    pub face: FaceId,
    pub ring: RingId,
    pub vertex: VertexId,
}

/// The `mvfs` Euler operator: make vertex, face, solid.
///
/// Creates a new solid holding one face with one empty ring and a single
/// isolated vertex — the seed from which a panel boundary is grown one
/// edge at a time. The new solid becomes the store's current solid. This
/// is the sole entry point for starting a new panel.
pub struct MakeVertexFaceSolid {
    point: Point2,
}

impl MakeVertexFaceSolid {
    /// Creates a new `MakeVertexFaceSolid` operation seeded at `point`.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self { point }
    }

    /// Executes the operation, creating the entities in the topology store.
    pub fn execute(&self, store: &mut TopologyStore) -> PanelSeed {
        let solid = store.new_solid();
        let (face, ring) = store.new_face_with_ring(solid);
        let vertex = store.new_vertex(solid, self.point);
        PanelSeed {
            solid,
            face,
            ring,
            vertex,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn seeds_one_face_one_empty_ring_one_vertex() {
        let mut store = TopologyStore::new();
        let seed = MakeVertexFaceSolid::new(Point2::new(1.0, 2.0)).execute(&mut store);

        let solid = store.solid(seed.solid).unwrap();
        assert_eq!(solid.faces, vec![seed.face]);
        assert_eq!(solid.vertices, vec![seed.vertex]);

        let face = store.face(seed.face).unwrap();
        assert_eq!(face.solid, seed.solid);
        assert_eq!(face.outer_ring, seed.ring);
        assert!(face.inner_rings.is_empty());

        let ring = store.ring(seed.ring).unwrap();
        assert_eq!(ring.face, seed.face);
        assert!(ring.first.is_none());

        let vertex = store.vertex(seed.vertex).unwrap();
        assert!(vertex.incident.is_none());
        assert!((vertex.point.x - 1.0).abs() < f64::EPSILON);
        assert!((vertex.point.y - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn newest_solid_becomes_current() {
        let mut store = TopologyStore::new();
        let a = MakeVertexFaceSolid::new(Point2::new(0.0, 0.0)).execute(&mut store);
        assert_eq!(store.current_solid(), Some(a.solid));
        let b = MakeVertexFaceSolid::new(Point2::new(3.0, 0.0)).execute(&mut store);
        assert_eq!(store.current_solid(), Some(b.solid));
        assert_eq!(store.solids(), &[a.solid, b.solid]);
    }
}
