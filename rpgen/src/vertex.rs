//! Interleaved vertex record
//!
//! The generator writes flat f32 elements; [`Vertex`] is the same memory seen
//! as records, for renderers and for inspecting results.

use bytemuck::{Pod, Zeroable};

use crate::capacity::{COLOR_BYTE_OFFSET, VERTEX_BYTE_STRIDE, VERTEX_STRIDE};

/// Position + RGBA color, 28 bytes
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// Backend-agnostic description of one interleaved attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub name: &'static str,
    /// Byte offset inside a record
    pub offset: usize,
    /// Number of f32 components
    pub components: usize,
}

impl Vertex {
    /// Attribute layout matching the generated buffer, in shader location order
    pub const ATTRIBUTES: [VertexAttribute; 2] = [
        VertexAttribute {
            name: "position",
            offset: 0,
            components: 3,
        },
        VertexAttribute {
            name: "color",
            offset: COLOR_BYTE_OFFSET,
            components: 4,
        },
    ];

    /// Record stride in bytes
    pub const STRIDE: usize = VERTEX_BYTE_STRIDE;

    /// View a generated vertex buffer as records.
    ///
    /// Returns `None` if the length is not a whole number of records.
    pub fn slice_from_elements(elements: &[f32]) -> Option<&[Vertex]> {
        if elements.len() % VERTEX_STRIDE != 0 {
            return None;
        }
        bytemuck::try_cast_slice(elements).ok()
    }
}
