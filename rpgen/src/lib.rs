//! Rounded polygon mesh generation
//!
//! Procedurally fills vertex and index buffers for an extruded regular-polygon
//! prism: a front face, a matching back face, and an edge ring joining them.
//! Each facet group carries its own flat color.
//!
//! The buffer layout is a fixed contract shared by the real-time renderer and
//! the file exporter, so both must agree byte-for-byte:
//!
//! ```text
//! vertices (7 x f32 each: x y z r g b a)
//!   [0,   n)   front facet ring   z = 0       front color
//!   [n,  2n)   front edge ring    z = 0       edge color
//!   [2n, 3n)   back facet ring    z = -depth  back color
//!   [3n, 4n)   back edge ring     z = -depth  edge color
//!   4n         front center       z = 0       front color
//!   4n + 1     back center        z = -depth  back color
//!
//! indices (u16, 3 per triangle)
//!   n triangles    front fan
//!   n triangles    back fan (reversed winding)
//!   2n triangles   edge quads
//! ```
//!
//! # Modules
//!
//! - [`capacity`] - Element/byte counts callers allocate before generating
//! - [`request`] - Generation parameters and default colors
//! - [`layout`] - Derived start offsets of each vertex group
//! - [`generate`] - The fill routine itself
//! - [`vertex`] - Typed view over the interleaved vertex records
//! - [`mesh`] - Owned buffers sized and filled in one call
//! - [`mesh_set`] - Precomputed meshes over a facet range, plus facet selection

pub mod capacity;
pub mod error;
pub mod generate;
pub mod layout;
pub mod mesh;
pub mod mesh_set;
pub mod request;
pub mod vertex;

pub use capacity::{
    COLOR_BYTE_OFFSET, INDEX_STRIDE, MAX_FACET_COUNT, MIN_FACET_COUNT, VERTEX_BYTE_STRIDE,
    VERTEX_STRIDE, index_byte_len, index_element_count, triangle_count, vertex_byte_len,
    vertex_count, vertex_element_count,
};
pub use error::GenerateError;
pub use generate::generate;
pub use layout::VertexGroups;
pub use mesh::PolygonMesh;
pub use mesh_set::{FacetRange, FacetSelector, MeshSet, MeshSetError};
pub use request::{GenerationRequest, MeshColors};
pub use vertex::{Vertex, VertexAttribute};
