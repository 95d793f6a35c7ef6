//! Buffer fill routine
//!
//! Pure function over caller-owned storage: no allocation, no I/O, no shared
//! state. Safe to call concurrently on disjoint buffers.

use std::f32::consts::TAU;

use crate::capacity::{INDEX_STRIDE, VERTEX_STRIDE, index_element_count, vertex_element_count};
use crate::error::GenerateError;
use crate::layout::VertexGroups;
use crate::request::GenerationRequest;

#[cfg(test)]
mod tests;

/// Fill `vertices` and `indices` for `request`.
///
/// `vertices` must hold exactly [`vertex_element_count`] f32s and `indices`
/// exactly [`index_element_count`] u16s for the request's facet count. Every
/// precondition is checked first; on error neither buffer is written.
///
/// Ring vertex `i` of every ring sits at
/// `(sin(i * step) * radius, cos(i * step) * radius, z)` with
/// `step = 2π / facet_count`, so angle 0 points along +y.
pub fn generate(
    request: &GenerationRequest,
    vertices: &mut [f32],
    indices: &mut [u16],
) -> Result<(), GenerateError> {
    request.validate()?;

    let expected = vertex_element_count(request.facet_count);
    if vertices.len() != expected {
        return Err(GenerateError::VertexBufferSize {
            expected,
            actual: vertices.len(),
        });
    }

    let expected = index_element_count(request.facet_count);
    if indices.len() != expected {
        return Err(GenerateError::IndexBufferSize {
            expected,
            actual: indices.len(),
        });
    }

    // validate() caps facet_count at MAX_FACET_COUNT, so it fits in u16
    let groups = VertexGroups::new(request.facet_count as u16);

    write_vertices(request, vertices);
    write_indices(&groups, indices);

    Ok(())
}

fn write_vertices(request: &GenerationRequest, vertices: &mut [f32]) {
    let ring_len = request.facet_count as usize * VERTEX_STRIDE;
    let angular_step = TAU / request.facet_count as f32;
    let back_z = -request.extrusion_depth;
    let colors = &request.colors;

    // Ring order: front facet, front edge, back facet, back edge
    let ring_passes = [
        (0.0, colors.front_face),
        (0.0, colors.edge),
        (back_z, colors.back_face),
        (back_z, colors.edge),
    ];

    let (rings, centers) = vertices.split_at_mut(ring_len * ring_passes.len());
    for (ring, (z, color)) in rings.chunks_exact_mut(ring_len).zip(ring_passes) {
        write_ring(ring, angular_step, request.facet_radius, z, color);
    }

    let (front_center, back_center) = centers.split_at_mut(VERTEX_STRIDE);
    write_vertex(front_center, [0.0, 0.0, 0.0], colors.front_face);
    write_vertex(back_center, [0.0, 0.0, back_z], colors.back_face);
}

/// One ring of `facet_count` vertices sharing a z-plane and color
fn write_ring(ring: &mut [f32], angular_step: f32, radius: f32, z: f32, color: [f32; 4]) {
    for (i, vertex) in ring.chunks_exact_mut(VERTEX_STRIDE).enumerate() {
        let rad = angular_step * i as f32;
        write_vertex(vertex, [rad.sin() * radius, rad.cos() * radius, z], color);
    }
}

fn write_vertex(dst: &mut [f32], position: [f32; 3], color: [f32; 4]) {
    dst[..3].copy_from_slice(&position);
    dst[3..VERTEX_STRIDE].copy_from_slice(&color);
}

fn write_indices(groups: &VertexGroups, indices: &mut [u16]) {
    let fan_len = groups.facet_count() as usize * INDEX_STRIDE;
    let (front_fan, rest) = indices.split_at_mut(fan_len);
    let (back_fan, edges) = rest.split_at_mut(fan_len);

    for (i, tri) in (0..groups.facet_count()).zip(front_fan.chunks_exact_mut(INDEX_STRIDE)) {
        tri.copy_from_slice(&[
            groups.front_center(),
            groups.front_facet(i),
            groups.front_facet(groups.next(i)),
        ]);
    }

    // Reversed winding: the back face is seen from the opposite side
    for (i, tri) in (0..groups.facet_count()).zip(back_fan.chunks_exact_mut(INDEX_STRIDE)) {
        tri.copy_from_slice(&[
            groups.back_center(),
            groups.back_facet(groups.next(i)),
            groups.back_facet(i),
        ]);
    }

    for (i, quad) in (0..groups.facet_count()).zip(edges.chunks_exact_mut(INDEX_STRIDE * 2)) {
        let j = groups.next(i);
        quad.copy_from_slice(&[
            groups.front_edge(i),
            groups.back_edge(i),
            groups.back_edge(j),
            groups.back_edge(j),
            groups.front_edge(j),
            groups.front_edge(i),
        ]);
    }
}
