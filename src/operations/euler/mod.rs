mod kill_edge_make_ring;
mod kill_face_make_ring_hole;
mod make_edge_face;
mod make_edge_vertex;
mod make_vertex_face_solid;

pub use kill_edge_make_ring::KillEdgeMakeRing;
pub use kill_face_make_ring_hole::KillFaceMakeRingHole;
pub use make_edge_face::MakeEdgeFace;
pub use make_edge_vertex::MakeEdgeVertex;
pub use make_vertex_face_solid::{MakeVertexFaceSolid, PanelSeed};
