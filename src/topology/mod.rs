pub mod face;
pub mod half_edge;
pub mod ring;
pub mod solid;
pub mod vertex;

pub use face::{FaceData, FaceId};
pub use half_edge::{HalfEdgeData, HalfEdgeId};
pub use ring::{RingData, RingId};
pub use solid::{SolidData, SolidId};
pub use vertex::{VertexData, VertexId};

use crate::error::TopologyError;
use crate::math::Point2;
use slotmap::SlotMap;

/// Central arena that owns all topological entities.
///
/// Entities reference each other via typed IDs (generational indices),
/// avoiding self-referential structures and enabling safe mutation.
///
/// The store is the kernel's explicit context object: it carries the
/// creation-order solid chain, the "current" solid set by the most recent
/// make-vertex-face-solid call, and the per-kind display-id counters.
/// Topology is mutated exclusively through the Euler operators in
/// [`crate::operations::euler`]; the store only exposes read access and
/// traversal.
#[derive(Debug, Default)]
pub struct TopologyStore {
    vertices: SlotMap<VertexId, VertexData>,
    half_edges: SlotMap<HalfEdgeId, HalfEdgeData>,
    rings: SlotMap<RingId, RingData>,
    faces: SlotMap<FaceId, FaceData>,
    solids: SlotMap<SolidId, SolidData>,

    solid_chain: Vec<SolidId>,
    current_solid: Option<SolidId>,

    vertex_seq: u32,
    face_seq: u32,
    solid_seq: u32,
}

impl TopologyStore {
    /// Creates a new, empty topology store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Read access ---

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Returns a reference to the half-edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn half_edge(&self, id: HalfEdgeId) -> Result<&HalfEdgeData, TopologyError> {
        self.half_edges
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("half-edge".into()))
    }

    /// Returns a reference to the ring data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn ring(&self, id: RingId) -> Result<&RingData, TopologyError> {
        self.rings
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("ring".into()))
    }

    /// Returns a reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, TopologyError> {
        self.faces
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }

    /// Returns a reference to the solid data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn solid(&self, id: SolidId) -> Result<&SolidData, TopologyError> {
        self.solids
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("solid".into()))
    }

    /// All solids in creation order.
    #[must_use]
    pub fn solids(&self) -> &[SolidId] {
        &self.solid_chain
    }

    /// The solid created by the most recent make-vertex-face-solid call.
    #[must_use]
    pub fn current_solid(&self) -> Option<SolidId> {
        self.current_solid
    }

    /// Iterates over all half-edges in the store.
    pub fn half_edges(&self) -> impl Iterator<Item = (HalfEdgeId, &HalfEdgeData)> {
        self.half_edges.iter()
    }

    // --- Ring traversal ---

    /// Collects the half-edges of a ring in `next` order, starting at the
    /// ring's first half-edge. Empty rings yield an empty list.
    ///
    /// The walk is bounds-checked: it never takes more steps than there are
    /// half-edges in the store.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::RingNotClosed`] if the walk does not return
    /// to its starting half-edge, or an error if an entity is missing.
    pub fn ring_half_edges(&self, ring: RingId) -> Result<Vec<HalfEdgeId>, TopologyError> {
        let Some(first) = self.ring(ring)?.first else {
            return Ok(Vec::new());
        };
        let mut out = Vec::new();
        let mut cur = first;
        loop {
            out.push(cur);
            cur = self.half_edge(cur)?.next;
            if cur == first {
                break;
            }
            if out.len() > self.half_edges.len() {
                return Err(TopologyError::RingNotClosed);
            }
        }
        Ok(out)
    }

    /// Collects the destination vertices of a ring in `next` order.
    ///
    /// # Errors
    ///
    /// Returns an error if the ring walk fails.
    pub fn ring_vertices(&self, ring: RingId) -> Result<Vec<VertexId>, TopologyError> {
        let mut out = Vec::new();
        for he in self.ring_half_edges(ring)? {
            out.push(self.half_edge(he)?.dest);
        }
        Ok(out)
    }

    /// Finds the half-edge on `ring` whose destination is `vertex`.
    ///
    /// This is the position search shared by the edge-making operators: the
    /// ring is walked once from its first half-edge, and the search fails
    /// loudly instead of wrapping around.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::VertexNotInRing`] if the ring is empty or
    /// no half-edge on it ends at `vertex`.
    pub fn find_half_edge_to(
        &self,
        ring: RingId,
        vertex: VertexId,
    ) -> Result<HalfEdgeId, TopologyError> {
        let vid = self.vertex(vertex)?.id;
        for he in self.ring_half_edges(ring)? {
            if self.half_edge(he)?.dest == vertex {
                return Ok(he);
            }
        }
        Err(TopologyError::VertexNotInRing(vid))
    }

    // --- Mutation helpers, reserved for the Euler operators ---

    pub(crate) fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexData, TopologyError> {
        self.vertices
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    pub(crate) fn half_edge_mut(
        &mut self,
        id: HalfEdgeId,
    ) -> Result<&mut HalfEdgeData, TopologyError> {
        self.half_edges
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("half-edge".into()))
    }

    pub(crate) fn ring_mut(&mut self, id: RingId) -> Result<&mut RingData, TopologyError> {
        self.rings
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("ring".into()))
    }

    pub(crate) fn face_mut(&mut self, id: FaceId) -> Result<&mut FaceData, TopologyError> {
        self.faces
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }

    /// Allocates a solid, appends it to the chain and makes it current.
    pub(crate) fn new_solid(&mut self) -> SolidId {
        let id = self.solid_seq;
        self.solid_seq += 1;
        let solid = self.solids.insert(SolidData {
            id,
            faces: Vec::new(),
            vertices: Vec::new(),
        });
        self.solid_chain.push(solid);
        self.current_solid = Some(solid);
        solid
    }

    /// Allocates a face together with its (initially empty) outer ring and
    /// registers it on `solid`.
    pub(crate) fn new_face_with_ring(&mut self, solid: SolidId) -> (FaceId, RingId) {
        // The ring is inserted with a placeholder face key and patched once
        // the face exists; the placeholder never escapes this function.
        let ring = self.rings.insert(RingData {
            face: FaceId::default(),
            first: None,
        });
        let id = self.face_seq;
        self.face_seq += 1;
        let face = self.faces.insert(FaceData {
            id,
            solid,
            outer_ring: ring,
            inner_rings: Vec::new(),
        });
        self.rings[ring].face = face;
        self.solids[solid].faces.push(face);
        (face, ring)
    }

    /// Allocates an empty ring attached to `face` as an inner ring.
    pub(crate) fn new_inner_ring(&mut self, face: FaceId) -> RingId {
        let ring = self.rings.insert(RingData { face, first: None });
        self.faces[face].inner_rings.push(ring);
        ring
    }

    /// Allocates an isolated vertex and registers it on `solid`.
    pub(crate) fn new_vertex(&mut self, solid: SolidId, point: Point2) -> VertexId {
        let id = self.vertex_seq;
        self.vertex_seq += 1;
        let vertex = self.vertices.insert(VertexData {
            point,
            id,
            incident: None,
        });
        self.solids[solid].vertices.push(vertex);
        vertex
    }

    /// Allocates a linked twin pair on `ring`.
    ///
    /// The pair starts out as a closed two-edge ring (`h1 ⇄ h2`); callers
    /// splice it into place.
    pub(crate) fn new_half_edge_pair(
        &mut self,
        ring: RingId,
        dest1: VertexId,
        dest2: VertexId,
    ) -> (HalfEdgeId, HalfEdgeId) {
        let h1 = self.half_edges.insert(HalfEdgeData {
            ring,
            dest: dest1,
            // placeholders, patched below once the partner exists
            twin: HalfEdgeId::default(),
            next: HalfEdgeId::default(),
            prev: HalfEdgeId::default(),
        });
        let h2 = self.half_edges.insert(HalfEdgeData {
            ring,
            dest: dest2,
            twin: h1,
            next: h1,
            prev: h1,
        });
        let e1 = &mut self.half_edges[h1];
        e1.twin = h2;
        e1.next = h2;
        e1.prev = h2;
        (h1, h2)
    }

    /// Removes a twin pair from the arena. Ring and vertex links must have
    /// been detached by the caller.
    pub(crate) fn remove_half_edge_pair(&mut self, h1: HalfEdgeId, h2: HalfEdgeId) {
        let _ = self.half_edges.remove(h1);
        let _ = self.half_edges.remove(h2);
    }

    /// Removes a face from the arena and from its solid's face list,
    /// returning its data (rings are left untouched).
    pub(crate) fn take_face(&mut self, id: FaceId) -> Result<FaceData, TopologyError> {
        let data = self
            .faces
            .remove(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))?;
        if let Some(solid) = self.solids.get_mut(data.solid) {
            solid.faces.retain(|&f| f != id);
        }
        Ok(data)
    }
}
