//! GLB container assembly
//!
//! # Layout
//! ```text
//! 0x00: magic "glTF", version 2, total length (u32 LE each)
//! 0x0C: JSON chunk (length, "JSON", document padded with spaces)
//! var:  BIN chunk  (length, "BIN\0", buffer padded with zeros)
//! ```

use anyhow::{Context, Result};
use gltf_json as json;

const GLB_MAGIC: &[u8; 4] = b"glTF";
const GLB_VERSION: u32 = 2;
const CHUNK_JSON: u32 = 0x4E4F_534A;
const CHUNK_BIN: u32 = 0x004E_4942;
const HEADER_LEN: usize = 12;
const CHUNK_HEADER_LEN: usize = 8;

/// Bytes needed to reach the next 4-byte boundary
fn padding(len: usize) -> usize {
    (4 - len % 4) % 4
}

/// Assemble a GLB binary from a document and its single buffer.
///
/// The document's buffer must have no `uri`; the BIN chunk supplies it.
pub fn assemble_glb(root: &json::Root, buffer_data: &[u8]) -> Result<Vec<u8>> {
    let json_string =
        json::serialize::to_string(root).context("Failed to serialize glTF JSON")?;
    let json_bytes = json_string.as_bytes();

    let json_padding = padding(json_bytes.len());
    let json_chunk_length = json_bytes.len() + json_padding;

    let buffer_padding = padding(buffer_data.len());
    let buffer_chunk_length = buffer_data.len() + buffer_padding;

    let total_length =
        HEADER_LEN + CHUNK_HEADER_LEN + json_chunk_length + CHUNK_HEADER_LEN + buffer_chunk_length;
    let total_length_u32 =
        u32::try_from(total_length).context("GLB exceeds the 4 GiB container limit")?;

    let mut glb = Vec::with_capacity(total_length);

    glb.extend_from_slice(GLB_MAGIC);
    glb.extend_from_slice(&GLB_VERSION.to_le_bytes());
    glb.extend_from_slice(&total_length_u32.to_le_bytes());

    glb.extend_from_slice(&(json_chunk_length as u32).to_le_bytes());
    glb.extend_from_slice(&CHUNK_JSON.to_le_bytes());
    glb.extend_from_slice(json_bytes);
    glb.resize(glb.len() + json_padding, b' ');

    glb.extend_from_slice(&(buffer_chunk_length as u32).to_le_bytes());
    glb.extend_from_slice(&CHUNK_BIN.to_le_bytes());
    glb.extend_from_slice(buffer_data);
    glb.resize(glb.len() + buffer_padding, 0);

    Ok(glb)
}
