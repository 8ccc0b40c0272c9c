use super::face::FaceId;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a solid in the topology store.
    pub struct SolidId;
}

/// Data associated with a topological solid — one pattern panel.
///
/// A solid owns its faces and vertices; both lists are kept in creation
/// order.
#[derive(Debug, Clone)]
pub struct SolidData {
    /// Display identity, assigned from the store's monotonic counter.
    pub id: u32,
    /// Faces owned by this solid.
    pub faces: Vec<FaceId>,
    /// Vertices owned by this solid.
    pub vertices: Vec<VertexId>,
}
