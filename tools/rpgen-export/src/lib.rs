//! rpgen-export library
//!
//! File-export side of the rounded polygon generator: one combined binary
//! blob (index buffer immediately followed by vertex buffer) plus a glTF 2.0
//! document whose buffer views describe that blob exactly.
//!
//! - [`blob`] - Single-allocation index + vertex region
//! - [`document`] - glTF JSON root (views, accessors, material, mesh, scene)
//! - [`glb`] - Self-contained GLB container assembly
//! - [`config`] - TOML export configuration
//! - [`export`] - Write `.bin` + `.gltf`, or `.glb`, to disk

// Blobs are written as native-endian casts; glTF requires little-endian
#[cfg(target_endian = "big")]
compile_error!("rpgen-export writes native-endian buffers and supports little-endian targets only");

pub mod blob;
pub mod config;
pub mod document;
pub mod export;
pub mod glb;

pub use blob::CombinedBuffer;
pub use config::{ExportConfig, load_config};
pub use document::{DocumentOptions, build_document};
pub use export::{ExportSummary, export_glb, export_gltf};
pub use glb::assemble_glb;

// Re-export gltf-json so callers can inspect built documents
pub use gltf_json as json;
