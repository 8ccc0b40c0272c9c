use super::ring::RingId;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a half-edge in the topology store.
    pub struct HalfEdgeId;
}

/// One directed side of a topological edge.
///
/// Each undirected edge is a pair of twin half-edges pointing in opposite
/// directions. A half-edge runs from its predecessor's destination to its
/// own destination.
#[derive(Debug, Clone, Copy)]
pub struct HalfEdgeData {
    /// The ring this half-edge belongs to.
    pub ring: RingId,
    /// Destination vertex.
    pub dest: VertexId,
    /// The opposite-direction half-edge of the same edge.
    pub twin: HalfEdgeId,
    /// Next half-edge around the ring.
    pub next: HalfEdgeId,
    /// Previous half-edge around the ring.
    pub prev: HalfEdgeId,
}
