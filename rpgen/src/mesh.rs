//! Owned mesh buffers
//!
//! Convenience for callers that just want a filled mesh: allocates exactly the
//! capacity for the request, then runs the fill routine once.

use crate::capacity::{index_element_count, triangle_count, vertex_count, vertex_element_count};
use crate::error::GenerateError;
use crate::generate::generate;
use crate::request::GenerationRequest;
use crate::vertex::Vertex;

/// Generated vertex + index buffers for one request
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonMesh {
    request: GenerationRequest,
    vertices: Vec<f32>,
    indices: Vec<u16>,
}

impl PolygonMesh {
    /// Allocate and fill buffers for `request`
    pub fn generate(request: &GenerationRequest) -> Result<Self, GenerateError> {
        // Validate before allocating; huge facet counts must not allocate
        request.validate()?;

        let mut vertices = vec![0.0; vertex_element_count(request.facet_count)];
        let mut indices = vec![0; index_element_count(request.facet_count)];
        generate(request, &mut vertices, &mut indices)?;

        tracing::debug!(
            "Generated polygon mesh: {} facets, {} vertices, {} indices",
            request.facet_count,
            vertex_count(request.facet_count),
            indices.len()
        );

        Ok(Self {
            request: *request,
            vertices,
            indices,
        })
    }

    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }

    pub fn facet_count(&self) -> u32 {
        self.request.facet_count
    }

    /// Flat vertex elements (7 f32 per vertex)
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    pub fn vertex_records(&self) -> &[Vertex] {
        // Buffer length is always a whole number of records
        bytemuck::cast_slice(&self.vertices)
    }

    /// Vertex buffer bytes, ready for device upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer bytes, ready for device upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    pub fn vertex_count(&self) -> usize {
        vertex_count(self.request.facet_count)
    }

    /// Index count to pass to a draw call
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        triangle_count(self.request.facet_count)
    }

    /// Consume the mesh, returning `(vertices, indices)`
    pub fn into_buffers(self) -> (Vec<f32>, Vec<u16>) {
        (self.vertices, self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{index_byte_len, vertex_byte_len};

    #[test]
    fn test_generate_matches_capacity() {
        let mesh = PolygonMesh::generate(&GenerationRequest::new(7)).unwrap();
        assert_eq!(mesh.vertices().len(), vertex_element_count(7));
        assert_eq!(mesh.indices().len(), index_element_count(7));
        assert_eq!(mesh.vertex_records().len(), mesh.vertex_count());
        assert_eq!(mesh.vertex_bytes().len(), vertex_byte_len(7));
        assert_eq!(mesh.index_bytes().len(), index_byte_len(7));
        assert_eq!(mesh.index_count(), mesh.triangle_count() * 3);
    }

    #[test]
    fn test_matches_caller_owned_buffers() {
        let request = GenerationRequest::new(9).with_radius(3.5);
        let mesh = PolygonMesh::generate(&request).unwrap();

        let mut vertices = vec![0.0; vertex_element_count(9)];
        let mut indices = vec![0; index_element_count(9)];
        generate(&request, &mut vertices, &mut indices).unwrap();

        let (owned_vertices, owned_indices) = mesh.into_buffers();
        assert_eq!(owned_vertices, vertices);
        assert_eq!(owned_indices, indices);
    }

    #[test]
    fn test_invalid_request() {
        let err = PolygonMesh::generate(&GenerationRequest::new(2)).unwrap_err();
        assert_eq!(err, GenerateError::FacetCountTooSmall { facet_count: 2 });
    }

    #[test]
    fn test_records_follow_group_order() {
        let mesh = PolygonMesh::generate(&GenerationRequest::new(3)).unwrap();
        let records = mesh.vertex_records();
        assert_eq!(records[12].position, [0.0, 0.0, 0.0]);
        assert_eq!(records[13].position, [0.0, 0.0, -0.3]);
        assert_eq!(records[3].color, [0.0, 1.0, 0.0, 1.0]);
    }
}
