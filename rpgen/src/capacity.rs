//! Buffer capacity queries
//!
//! Callers size their storage with these before calling [`crate::generate`].
//! All counts are ELEMENT counts (f32 / u16), except the explicit `*_byte_len`
//! helpers.

/// f32 elements per vertex: position (3) + color (4)
pub const VERTEX_STRIDE: usize = 7;

/// u16 indices per triangle
pub const INDEX_STRIDE: usize = 3;

/// Bytes per interleaved vertex record
pub const VERTEX_BYTE_STRIDE: usize = VERTEX_STRIDE * size_of::<f32>();

/// Byte offset of the color attribute inside a vertex record
pub const COLOR_BYTE_OFFSET: usize = 3 * size_of::<f32>();

/// Smallest facet count that forms a closed polygon
pub const MIN_FACET_COUNT: u32 = 3;

/// Largest facet count whose vertex indices still fit in a u16.
///
/// `4 * 16383 + 2 = 65534` vertices; one more facet would need index 65537.
pub const MAX_FACET_COUNT: u32 = 16383;

/// Per-facet index elements: front (3) + back (3) + edge quad (6)
const INDEX_ELEMENTS_PER_FACET: usize = 3 + 3 + 6;

/// Total vertices: four rings plus two center vertices
pub const fn vertex_count(facet_count: u32) -> usize {
    facet_count as usize * 4 + 2
}

/// Total triangles: one front, one back and two edge triangles per facet
pub const fn triangle_count(facet_count: u32) -> usize {
    facet_count as usize * 4
}

/// f32 elements the vertex buffer must hold
pub const fn vertex_element_count(facet_count: u32) -> usize {
    vertex_count(facet_count) * VERTEX_STRIDE
}

/// u16 elements the index buffer must hold
pub const fn index_element_count(facet_count: u32) -> usize {
    facet_count as usize * INDEX_ELEMENTS_PER_FACET
}

/// Vertex buffer size in bytes
pub const fn vertex_byte_len(facet_count: u32) -> usize {
    vertex_element_count(facet_count) * size_of::<f32>()
}

/// Index buffer size in bytes
pub const fn index_byte_len(facet_count: u32) -> usize {
    index_element_count(facet_count) * size_of::<u16>()
}
