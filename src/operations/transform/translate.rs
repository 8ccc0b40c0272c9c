use crate::error::Result;
use crate::math::Vector2;
use crate::topology::{SolidId, TopologyStore};

/// Translates every vertex of a solid by a fixed offset.
///
/// Geometry-only: the topology graph is untouched, so panels can be
/// dragged around the pattern canvas without invalidating their rings.
pub struct Translate {
    solid: SolidId,
    offset: Vector2,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(solid: SolidId, offset: Vector2) -> Self {
        Self { solid, offset }
    }

    /// Executes the translation.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid or one of its vertices is missing.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<()> {
        let vertices = store.solid(self.solid)?.vertices.clone();
        for vertex in vertices {
            store.vertex_mut(vertex)?.point += self.offset;
        }
        Ok(())
    }
}
