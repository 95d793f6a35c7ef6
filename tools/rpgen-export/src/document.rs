//! glTF document construction
//!
//! Describes a [`CombinedBuffer`] without copying or repacking it: the index
//! view covers the prefix, and one strided view covers the interleaved vertex
//! suffix. Positions and colors are two accessors into that view, at byte
//! offsets 0 and 12.

use gltf_json as json;
use json::validation::Checked::Valid;
use rpgen::{COLOR_BYTE_OFFSET, VERTEX_BYTE_STRIDE, Vertex};
use std::collections::BTreeMap;

use crate::blob::CombinedBuffer;

// Buffer view indices
const INDEX_VIEW: u32 = 0;
const VERTEX_VIEW: u32 = 1;

// Accessor indices
const INDEX_ACCESSOR: u32 = 0;
const POSITION_ACCESSOR: u32 = 1;
const COLOR_ACCESSOR: u32 = 2;

// Node indices
const ROOT_NODE: u32 = 0;
const MESH_NODE: u32 = 1;

/// Value written to `asset.generator`
pub const GENERATOR: &str = "rpgen";

/// Naming and buffer location for a document
#[derive(Debug, Clone, Copy)]
pub struct DocumentOptions<'a> {
    pub mesh_name: &'a str,
    /// `Some(uri)` for a sidecar `.bin`, `None` for a GLB BIN chunk
    pub buffer_uri: Option<&'a str>,
}

impl Default for DocumentOptions<'_> {
    fn default() -> Self {
        Self {
            mesh_name: "rpgen-mesh",
            buffer_uri: None,
        }
    }
}

/// Build the glTF root describing `buffer`
pub fn build_document(buffer: &CombinedBuffer, options: &DocumentOptions) -> json::Root {
    let index_len = buffer.index_byte_len();
    let vertex_len = buffer.vertex_byte_len();

    let buffers = vec![json::Buffer {
        byte_length: buffer.byte_len().into(),
        extensions: Default::default(),
        extras: Default::default(),
        name: None,
        uri: options.buffer_uri.map(str::to_string),
    }];

    let buffer_views = vec![
        buffer_view(0, index_len, None, json::buffer::Target::ElementArrayBuffer),
        buffer_view(
            index_len,
            vertex_len,
            Some(VERTEX_BYTE_STRIDE),
            json::buffer::Target::ArrayBuffer,
        ),
    ];

    let (min, max) = compute_bounds(buffer.vertex_records());
    let accessors = vec![
        accessor(
            INDEX_VIEW,
            0,
            buffer.index_count(),
            json::accessor::ComponentType::U16,
            json::accessor::Type::Scalar,
            None,
        ),
        accessor(
            VERTEX_VIEW,
            0,
            buffer.vertex_count(),
            json::accessor::ComponentType::F32,
            json::accessor::Type::Vec3,
            Some((min, max)),
        ),
        accessor(
            VERTEX_VIEW,
            COLOR_BYTE_OFFSET,
            buffer.vertex_count(),
            json::accessor::ComponentType::F32,
            json::accessor::Type::Vec4,
            None,
        ),
    ];

    let material = json::Material {
        alpha_mode: Valid(json::material::AlphaMode::Opaque),
        pbr_metallic_roughness: json::material::PbrMetallicRoughness {
            base_color_factor: json::material::PbrBaseColorFactor([1.0, 1.0, 1.0, 1.0]),
            roughness_factor: json::material::StrengthFactor(1.0),
            ..Default::default()
        },
        ..Default::default()
    };

    let mut attributes = BTreeMap::new();
    attributes.insert(
        Valid(json::mesh::Semantic::Positions),
        json::Index::new(POSITION_ACCESSOR),
    );
    attributes.insert(
        Valid(json::mesh::Semantic::Colors(0)),
        json::Index::new(COLOR_ACCESSOR),
    );

    let primitive = json::mesh::Primitive {
        attributes,
        extensions: Default::default(),
        extras: Default::default(),
        indices: Some(json::Index::new(INDEX_ACCESSOR)),
        material: Some(json::Index::new(0)),
        mode: Valid(json::mesh::Mode::Triangles),
        targets: None,
    };

    let mesh = json::Mesh {
        extensions: Default::default(),
        extras: Default::default(),
        name: Some(options.mesh_name.to_string()),
        primitives: vec![primitive],
        weights: None,
    };

    let nodes = vec![
        // Node 0: root, parent of the mesh node
        node(Some(vec![json::Index::new(MESH_NODE)]), None),
        // Node 1: mesh
        node(None, Some(json::Index::new(0))),
    ];

    let scene = json::Scene {
        extensions: Default::default(),
        extras: Default::default(),
        name: None,
        nodes: vec![json::Index::new(ROOT_NODE)],
    };

    json::Root {
        accessors,
        animations: Vec::new(),
        asset: json::Asset {
            copyright: None,
            extensions: Default::default(),
            extras: Default::default(),
            generator: Some(GENERATOR.to_string()),
            min_version: None,
            version: "2.0".to_string(),
        },
        buffers,
        buffer_views,
        cameras: Vec::new(),
        extensions: Default::default(),
        extensions_required: Vec::new(),
        extensions_used: Vec::new(),
        extras: Default::default(),
        images: Vec::new(),
        materials: vec![material],
        meshes: vec![mesh],
        nodes,
        samplers: Vec::new(),
        scene: Some(json::Index::new(0)),
        scenes: vec![scene],
        skins: Vec::new(),
        textures: Vec::new(),
    }
}

fn buffer_view(
    offset: usize,
    length: usize,
    stride: Option<usize>,
    target: json::buffer::Target,
) -> json::buffer::View {
    json::buffer::View {
        buffer: json::Index::new(0),
        byte_length: length.into(),
        byte_offset: Some(offset.into()),
        byte_stride: stride.map(json::buffer::Stride),
        extensions: Default::default(),
        extras: Default::default(),
        name: None,
        target: Some(Valid(target)),
    }
}

fn accessor(
    view: u32,
    offset: usize,
    count: usize,
    component_type: json::accessor::ComponentType,
    type_: json::accessor::Type,
    bounds: Option<([f32; 3], [f32; 3])>,
) -> json::Accessor {
    let to_value = |v: [f32; 3]| json::Value::Array(v.into_iter().map(json::Value::from).collect());
    let (min, max) = match bounds {
        Some((min, max)) => (Some(to_value(min)), Some(to_value(max))),
        None => (None, None),
    };

    json::Accessor {
        buffer_view: Some(json::Index::new(view)),
        byte_offset: Some(offset.into()),
        count: count.into(),
        component_type: Valid(json::accessor::GenericComponentType(component_type)),
        extensions: Default::default(),
        extras: Default::default(),
        type_: Valid(type_),
        min,
        max,
        name: None,
        normalized: false,
        sparse: None,
    }
}

fn node(
    children: Option<Vec<json::Index<json::Node>>>,
    mesh: Option<json::Index<json::Mesh>>,
) -> json::Node {
    json::Node {
        camera: None,
        children,
        extensions: Default::default(),
        extras: Default::default(),
        matrix: None,
        mesh,
        name: None,
        rotation: None,
        scale: None,
        translation: None,
        skin: None,
        weights: None,
    }
}

/// Axis-aligned position bounds, required on POSITION accessors
fn compute_bounds(vertices: &[Vertex]) -> ([f32; 3], [f32; 3]) {
    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];

    for vertex in vertices {
        for i in 0..3 {
            min[i] = min[i].min(vertex.position[i]);
            max[i] = max[i].max(vertex.position[i]);
        }
    }

    (min, max)
}
