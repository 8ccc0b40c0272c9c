use super::ring::RingId;
use super::solid::SolidId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the topology store.
    pub struct FaceId;
}

/// Data associated with a topological face.
///
/// A face is a planar region bounded by an outer ring and optionally
/// inner rings (holes).
#[derive(Debug, Clone)]
pub struct FaceData {
    /// Display identity, assigned from the store's monotonic counter.
    pub id: u32,
    /// The solid that owns this face.
    pub solid: SolidId,
    /// The outer boundary ring.
    pub outer_ring: RingId,
    /// Inner boundary rings (holes).
    pub inner_rings: Vec<RingId>,
}
