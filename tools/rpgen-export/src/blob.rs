//! Combined index + vertex region
//!
//! # Layout
//! ```text
//! 0x00:            index_data  (index_element_count * 2 bytes, u16)
//! index_byte_len:  vertex_data (vertex_count * 28 bytes, 7 x f32)
//! ```
//!
//! The region is allocated once and the generator fills both halves in place.
//! `index_byte_len` is always a multiple of 4, so the vertex half stays
//! f32-aligned. Bytes are native-endian; the crate refuses to build on
//! big-endian targets, so they always match glTF's little-endian layout.

use rpgen::{
    GenerateError, GenerationRequest, Vertex, index_byte_len, index_element_count,
    vertex_byte_len, vertex_count,
};

/// Index buffer immediately followed by vertex buffer, in one allocation
#[derive(Debug, Clone)]
pub struct CombinedBuffer {
    // u32 words keep the whole region 4-byte aligned
    words: Vec<u32>,
    facet_count: u32,
}

impl CombinedBuffer {
    /// Allocate the region for `request` and run the generator once over it
    pub fn generate(request: &GenerationRequest) -> Result<Self, GenerateError> {
        request.validate()?;

        let facet_count = request.facet_count;
        let index_len = index_byte_len(facet_count);
        let total_len = index_len + vertex_byte_len(facet_count);

        let mut words = vec![0u32; total_len / 4];
        let (index_region, vertex_region) =
            bytemuck::cast_slice_mut::<u32, u8>(&mut words).split_at_mut(index_len);
        rpgen::generate(
            request,
            bytemuck::cast_slice_mut(vertex_region),
            bytemuck::cast_slice_mut(index_region),
        )?;

        tracing::debug!(
            "Generated combined buffer: {} facets, {} bytes ({} index + {} vertex)",
            facet_count,
            total_len,
            index_len,
            total_len - index_len
        );

        Ok(Self { words, facet_count })
    }

    pub fn facet_count(&self) -> u32 {
        self.facet_count
    }

    /// The whole region, written verbatim as the `.bin` payload
    pub fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.words)
    }

    pub fn byte_len(&self) -> usize {
        self.words.len() * 4
    }

    /// Byte length of the index prefix; also the vertex data offset
    pub fn index_byte_len(&self) -> usize {
        index_byte_len(self.facet_count)
    }

    pub fn vertex_byte_len(&self) -> usize {
        vertex_byte_len(self.facet_count)
    }

    pub fn index_count(&self) -> usize {
        index_element_count(self.facet_count)
    }

    pub fn vertex_count(&self) -> usize {
        vertex_count(self.facet_count)
    }

    pub fn indices(&self) -> &[u16] {
        bytemuck::cast_slice(&self.bytes()[..self.index_byte_len()])
    }

    pub fn vertices(&self) -> &[f32] {
        bytemuck::cast_slice(&self.bytes()[self.index_byte_len()..])
    }

    pub fn vertex_records(&self) -> &[Vertex] {
        bytemuck::cast_slice(&self.bytes()[self.index_byte_len()..])
    }
}
