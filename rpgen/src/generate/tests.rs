//! Tests for the buffer fill routine

use super::*;
use crate::capacity::vertex_count;
use crate::request::MeshColors;
use crate::vertex::Vertex;

const EPSILON: f32 = 1e-6;

fn generate_buffers(request: &GenerationRequest) -> (Vec<f32>, Vec<u16>) {
    let mut vertices = vec![0.0; vertex_element_count(request.facet_count)];
    let mut indices = vec![0; index_element_count(request.facet_count)];
    generate(request, &mut vertices, &mut indices).expect("valid request should generate");
    (vertices, indices)
}

fn records(vertices: &[f32]) -> &[Vertex] {
    Vertex::slice_from_elements(vertices).expect("whole records")
}

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

/// z component of (b - a) x (c - a), using only x/y
fn signed_area_xy(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> f32 {
    (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])
}

#[test]
fn test_triangle_scenario() {
    let request = GenerationRequest::new(3).with_radius(2.0).with_depth(0.3);
    let (vertices, indices) = generate_buffers(&request);
    assert_eq!(vertices.len(), 98);
    assert_eq!(indices.len(), 36);

    // Front facet vertex 0
    assert_eq!(&vertices[0..7], &[0.0, 2.0, 0.0, 1.0, 0.0, 0.0, 1.0]);

    let v = records(&vertices);
    assert_eq!(v[12], Vertex {
        position: [0.0, 0.0, 0.0],
        color: [1.0, 0.0, 0.0, 1.0],
    });
    assert_eq!(v[13], Vertex {
        position: [0.0, 0.0, -0.3],
        color: [0.0, 0.0, 1.0, 1.0],
    });
}

#[test]
fn test_triangle_indices_exact() {
    let (_, indices) = generate_buffers(&GenerationRequest::new(3));

    #[rustfmt::skip]
    let expected: [u16; 36] = [
        // front fan
        12, 0, 1,   12, 1, 2,   12, 2, 0,
        // back fan
        13, 7, 6,   13, 8, 7,   13, 6, 8,
        // edge quads
        3, 9, 10,   10, 4, 3,
        4, 10, 11,  11, 5, 4,
        5, 11, 9,   9, 3, 5,
    ];
    assert_eq!(indices, expected);
}

#[test]
fn test_square_angles() {
    let (vertices, _) = generate_buffers(&GenerationRequest::new(4).with_radius(1.0));
    let v = records(&vertices);

    // 0, π/2, π, 3π/2 with angle 0 on +y and x from sine
    let expected = [[0.0, 1.0], [1.0, 0.0], [0.0, -1.0], [-1.0, 0.0]];
    for (i, [x, y]) in expected.into_iter().enumerate() {
        assert_close(v[i].position[0], x);
        assert_close(v[i].position[1], y);
    }
}

#[test]
fn test_ring_positions_all_rings() {
    let request = GenerationRequest::new(11).with_radius(1.75).with_depth(0.5);
    let (vertices, _) = generate_buffers(&request);
    let v = records(&vertices);
    let n = request.facet_count as usize;
    let step = TAU / request.facet_count as f32;

    for ring in 0..4 {
        let z = if ring < 2 { 0.0 } else { -0.5 };
        for i in 0..n {
            let p = v[ring * n + i].position;
            let rad = step * i as f32;
            assert_eq!(p[0], rad.sin() * 1.75);
            assert_eq!(p[1], rad.cos() * 1.75);
            assert_eq!(p[2], z);
        }
    }
}

#[test]
fn test_ring_colors() {
    let n = 6;
    let (vertices, _) = generate_buffers(&GenerationRequest::new(n as u32));
    let v = records(&vertices);
    let colors = MeshColors::default();

    let expected = [colors.front_face, colors.edge, colors.back_face, colors.edge];
    for (ring, color) in expected.iter().enumerate() {
        for i in 0..n {
            assert_eq!(&v[ring * n + i].color, color, "ring {ring} vertex {i}");
        }
    }
    assert_eq!(v[4 * n].color, colors.front_face);
    assert_eq!(v[4 * n + 1].color, colors.back_face);
}

#[test]
fn test_indices_in_range() {
    for n in [3, 4, 5, 17, 128, 1000] {
        let (_, indices) = generate_buffers(&GenerationRequest::new(n));
        let total = vertex_count(n);
        assert!(indices.iter().all(|&i| (i as usize) < total), "n = {n}");
    }
}

#[test]
fn test_max_facet_count_indices_in_range() {
    let request = GenerationRequest::new(crate::MAX_FACET_COUNT);
    let (_, indices) = generate_buffers(&request);
    let max = indices.iter().copied().max().unwrap();
    assert_eq!(max as usize, vertex_count(request.facet_count) - 1);
}

#[test]
fn test_fans_cover_each_facet_once_with_reversed_winding() {
    let n = 8u16;
    let (vertices, indices) = generate_buffers(&GenerationRequest::new(n as u32));
    let v = records(&vertices);
    let groups = VertexGroups::new(n);

    let front = &indices[..n as usize * 3];
    let back = &indices[n as usize * 3..n as usize * 6];

    let mut front_seen = vec![0; n as usize];
    let mut back_seen = vec![0; n as usize];

    for (front_tri, back_tri) in front.chunks_exact(3).zip(back.chunks_exact(3)) {
        assert_eq!(front_tri[0], groups.front_center());
        assert_eq!(back_tri[0], groups.back_center());

        // Same facet on both sides, traversed in opposite directions
        let facet = front_tri[1] - groups.front_facet_start();
        front_seen[facet as usize] += 1;
        back_seen[(back_tri[2] - groups.back_facet_start()) as usize] += 1;
        assert_eq!(back_tri[2] - groups.back_facet_start(), facet);
        assert_eq!(
            back_tri[1] - groups.back_facet_start(),
            front_tri[2] - groups.front_facet_start()
        );

        let front_area = signed_area_xy(
            v[front_tri[0] as usize].position,
            v[front_tri[1] as usize].position,
            v[front_tri[2] as usize].position,
        );
        let back_area = signed_area_xy(
            v[back_tri[0] as usize].position,
            v[back_tri[1] as usize].position,
            v[back_tri[2] as usize].position,
        );
        assert!(front_area.abs() > EPSILON);
        assert_eq!(front_area.signum(), -back_area.signum());
    }

    assert!(front_seen.iter().all(|&count| count == 1));
    assert!(back_seen.iter().all(|&count| count == 1));
}

#[test]
fn test_edge_quads_wrap_to_first_facet() {
    let n = 5u16;
    let (_, indices) = generate_buffers(&GenerationRequest::new(n as u32));
    let groups = VertexGroups::new(n);
    let edges = &indices[n as usize * 6..];
    assert_eq!(edges.len(), n as usize * 6);

    let last = &edges[(n as usize - 1) * 6..];
    assert_eq!(last, &[
        groups.front_edge(4),
        groups.back_edge(4),
        groups.back_edge(0),
        groups.back_edge(0),
        groups.front_edge(0),
        groups.front_edge(4),
    ]);

    // Edge quads only reference edge rings
    for &i in edges {
        let front_edge = (groups.front_edge_start()..groups.back_facet_start()).contains(&i);
        let back_edge = (groups.back_edge_start()..groups.front_center()).contains(&i);
        assert!(front_edge || back_edge, "index {i} is not an edge vertex");
    }
}

#[test]
fn test_deterministic() {
    let request = GenerationRequest::new(13).with_radius(0.9).with_depth(0.05);
    let (v1, i1) = generate_buffers(&request);
    let (v2, i2) = generate_buffers(&request);
    let bits = |v: &[f32]| v.iter().map(|f| f.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&v1), bits(&v2));
    assert_eq!(i1, i2);
}

#[test]
fn test_overwrites_previous_contents() {
    let request = GenerationRequest::new(4);
    let (expected_v, expected_i) = generate_buffers(&request);

    let mut vertices = vec![f32::NAN; vertex_element_count(4)];
    let mut indices = vec![u16::MAX; index_element_count(4)];
    generate(&request, &mut vertices, &mut indices).unwrap();
    assert_eq!(vertices, expected_v);
    assert_eq!(indices, expected_i);
}

#[test]
fn test_colors_do_not_change_layout() {
    let colors = MeshColors {
        front_face: [0.2, 0.2, 0.2, 1.0],
        back_face: [0.4, 0.4, 0.4, 0.5],
        edge: [0.9, 0.8, 0.7, 1.0],
    };
    let (plain_v, plain_i) = generate_buffers(&GenerationRequest::new(7));
    let (tinted_v, tinted_i) = generate_buffers(&GenerationRequest::new(7).with_colors(colors));

    assert_eq!(plain_i, tinted_i);
    for (a, b) in records(&plain_v).iter().zip(records(&tinted_v)) {
        assert_eq!(a.position, b.position);
    }
    assert_eq!(records(&tinted_v)[7].color, colors.edge);
    assert_eq!(records(&tinted_v)[29].color, colors.back_face);
}

#[test]
fn test_rejects_small_facet_count_without_writing() {
    let mut vertices = vec![-1.0; 14];
    let mut indices = vec![7; 24];
    let err = generate(&GenerationRequest::new(2), &mut vertices, &mut indices).unwrap_err();
    assert_eq!(err, GenerateError::FacetCountTooSmall { facet_count: 2 });
    assert!(vertices.iter().all(|&f| f == -1.0));
    assert!(indices.iter().all(|&i| i == 7));
}

#[test]
fn test_rejects_wrong_buffer_sizes_without_writing() {
    let request = GenerationRequest::new(5);
    let good_v = vertex_element_count(5);
    let good_i = index_element_count(5);

    for len in [good_v - 1, good_v + 7] {
        let mut vertices = vec![-1.0; len];
        let mut indices = vec![7; good_i];
        assert_eq!(
            generate(&request, &mut vertices, &mut indices),
            Err(GenerateError::VertexBufferSize {
                expected: good_v,
                actual: len,
            })
        );
        assert!(vertices.iter().all(|&f| f == -1.0));
        assert!(indices.iter().all(|&i| i == 7));
    }

    for len in [0, good_i - 3, good_i + 3] {
        let mut vertices = vec![-1.0; good_v];
        let mut indices = vec![7; len];
        assert_eq!(
            generate(&request, &mut vertices, &mut indices),
            Err(GenerateError::IndexBufferSize {
                expected: good_i,
                actual: len,
            })
        );
        assert!(vertices.iter().all(|&f| f == -1.0));
    }
}

#[test]
fn test_rejects_non_positive_dimensions() {
    let mut vertices = vec![0.0; vertex_element_count(3)];
    let mut indices = vec![0; index_element_count(3)];
    assert_eq!(
        generate(&GenerationRequest::new(3).with_radius(0.0), &mut vertices, &mut indices),
        Err(GenerateError::InvalidRadius(0.0))
    );
    assert_eq!(
        generate(&GenerationRequest::new(3).with_depth(-0.3), &mut vertices, &mut indices),
        Err(GenerateError::InvalidDepth(-0.3))
    );
}

#[test]
fn test_concurrent_calls_on_disjoint_buffers() {
    let requests: Vec<_> = (3..11).map(GenerationRequest::new).collect();
    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = requests
            .iter()
            .map(|request| scope.spawn(move || generate_buffers(request)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (request, (vertices, indices)) in requests.iter().zip(&results) {
        assert_eq!(&generate_buffers(request), &(vertices.clone(), indices.clone()));
    }
}
