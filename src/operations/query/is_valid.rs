use std::collections::HashSet;

use crate::topology::{SolidId, TopologyStore};

/// Validates the structural consistency of a solid.
///
/// Checks, for every face of the solid:
/// - the face and its rings exist and point back at their owners,
/// - every ring closes on itself with mutually consistent `next`/`prev`
///   links,
/// - no half-edge is shared between rings,
/// - twin pairing is involutive and never self-referential,
/// and for every vertex that its incident half-edge, when present, ends
/// at the vertex. A solid whose face list is empty is invalid.
pub struct IsValid {
    solid: SolidId,
}

impl IsValid {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the validation, returning `true` if the solid is valid.
    #[must_use]
    pub fn execute(&self, store: &TopologyStore) -> bool {
        let Ok(solid) = store.solid(self.solid) else {
            return false;
        };
        if solid.faces.is_empty() {
            return false;
        }

        let mut seen = HashSet::new();
        for &face_id in &solid.faces {
            let Ok(face) = store.face(face_id) else {
                return false;
            };
            if face.solid != self.solid {
                return false;
            }
            let mut rings = vec![face.outer_ring];
            rings.extend(&face.inner_rings);
            for ring_id in rings {
                let Ok(ring) = store.ring(ring_id) else {
                    return false;
                };
                if ring.face != face_id {
                    return false;
                }
                let Ok(half_edges) = store.ring_half_edges(ring_id) else {
                    return false;
                };
                for &he in &half_edges {
                    if !seen.insert(he) {
                        return false;
                    }
                    let Ok(e) = store.half_edge(he) else {
                        return false;
                    };
                    if e.ring != ring_id || e.twin == he {
                        return false;
                    }
                    let Ok(next) = store.half_edge(e.next) else {
                        return false;
                    };
                    if next.prev != he {
                        return false;
                    }
                    let Ok(twin) = store.half_edge(e.twin) else {
                        return false;
                    };
                    if twin.twin != he {
                        return false;
                    }
                    if store.vertex(e.dest).is_err() {
                        return false;
                    }
                }
            }
        }

        for &vertex_id in &solid.vertices {
            let Ok(vertex) = store.vertex(vertex_id) else {
                return false;
            };
            if let Some(incident) = vertex.incident {
                let Ok(e) = store.half_edge(incident) else {
                    return false;
                };
                if e.dest != vertex_id {
                    return false;
                }
            }
        }
        true
    }
}
