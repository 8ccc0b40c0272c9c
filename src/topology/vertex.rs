use crate::math::Point2;

use super::half_edge::HalfEdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the topology store.
    pub struct VertexId;
}

/// Data associated with a topological vertex.
#[derive(Debug, Clone, Copy)]
pub struct VertexData {
    /// The 2D position of the vertex.
    pub point: Point2,
    /// Display identity, assigned from the store's monotonic counter.
    pub id: u32,
    /// A half-edge whose destination is this vertex, or `None` while the
    /// vertex is isolated (freshly created, or orphaned by ring removal).
    pub incident: Option<HalfEdgeId>,
}
