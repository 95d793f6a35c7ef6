//! Generation errors
//!
//! Every variant is a caller programming error. They are reported before any
//! buffer is touched, so a failed call leaves both buffers exactly as they were.

/// Precondition violation detected by [`crate::generate`]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerateError {
    /// Fewer than three facets cannot close a polygon
    #[error("facet count {facet_count} is below the minimum of 3")]
    FacetCountTooSmall { facet_count: u32 },

    /// Vertex indices would not fit in a u16
    #[error("facet count {facet_count} exceeds {max} (u16 index range)")]
    FacetCountTooLarge { facet_count: u32, max: u32 },

    /// Radius must be finite and positive
    #[error("facet radius {0} must be finite and greater than zero")]
    InvalidRadius(f32),

    /// Depth must be finite and positive
    #[error("extrusion depth {0} must be finite and greater than zero")]
    InvalidDepth(f32),

    /// Vertex buffer length differs from `vertex_element_count`
    #[error("vertex buffer holds {actual} elements, expected exactly {expected}")]
    VertexBufferSize { expected: usize, actual: usize },

    /// Index buffer length differs from `index_element_count`
    #[error("index buffer holds {actual} elements, expected exactly {expected}")]
    IndexBufferSize { expected: usize, actual: usize },
}
