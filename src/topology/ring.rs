use super::face::FaceId;
use super::half_edge::HalfEdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a ring in the topology store.
    pub struct RingId;
}

/// Data associated with a ring (loop): a closed, ordered cycle of half-edges
/// bounding a face boundary or a hole.
///
/// When non-empty, walking `next` from any half-edge on the ring returns to
/// it after visiting every half-edge exactly once.
#[derive(Debug, Clone, Copy)]
pub struct RingData {
    /// The face this ring bounds.
    pub face: FaceId,
    /// One half-edge on the ring, the canonical start for walks.
    /// `None` while the ring is empty.
    pub first: Option<HalfEdgeId>,
}
