mod find_vertex;
mod is_valid;
mod ring_area;

pub use find_vertex::FindVertex;
pub use is_valid::IsValid;
pub use ring_area::RingArea;
