use crate::error::Result;
use crate::topology::{RingId, TopologyStore, VertexId};

/// Looks up a vertex on a ring by its numeric display id.
pub struct FindVertex {
    ring: RingId,
    id: u32,
}

impl FindVertex {
    /// Creates a new `FindVertex` query.
    #[must_use]
    pub fn new(ring: RingId, id: u32) -> Self {
        Self { ring, id }
    }

    /// Executes the query, returning the matching vertex if the ring
    /// visits one with the requested id.
    ///
    /// # Errors
    ///
    /// Returns an error if the ring walk fails.
    pub fn execute(&self, store: &TopologyStore) -> Result<Option<VertexId>> {
        for vertex in store.ring_vertices(self.ring)? {
            if store.vertex(vertex)?.id == self.id {
                return Ok(Some(vertex));
            }
        }
        Ok(None)
    }
}
