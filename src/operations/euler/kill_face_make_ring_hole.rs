use crate::error::{OperationError, Result};
use crate::topology::{FaceId, TopologyStore};

/// The `kfmrh` Euler operator: kill face, make ring hole.
///
/// Appends every ring of `face` (its outer ring first, then any inner
/// rings) to `into`'s inner-ring list, re-points their owning face, and
/// destroys `face`, removing it from its solid's face list. Used when a
/// geometrically interior contour, imported as its own face, must become a
/// hole inside its containing panel.
///
/// The two faces may belong to different solids; cross-solid ownership is
/// the caller's responsibility.
pub struct KillFaceMakeRingHole {
    face: FaceId,
    into: FaceId,
}

impl KillFaceMakeRingHole {
    /// Creates a new `KillFaceMakeRingHole` operation donating `face`'s
    /// rings to `into`.
    #[must_use]
    pub fn new(face: FaceId, into: FaceId) -> Self {
        Self { face, into }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if `face` and `into`
    /// coincide, or an error if either face is missing. The store is left
    /// unchanged on failure.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<()> {
        if self.face == self.into {
            return Err(
                OperationError::InvalidInput("cannot fold a face into itself".into()).into(),
            );
        }
        store.face(self.into)?;
        let donor = store.take_face(self.face)?;

        let mut rings = Vec::with_capacity(1 + donor.inner_rings.len());
        rings.push(donor.outer_ring);
        rings.extend(donor.inner_rings);
        for &ring in &rings {
            store.ring_mut(ring)?.face = self.into;
        }
        store.face_mut(self.into)?.inner_rings.extend(rings);
        Ok(())
    }
}
