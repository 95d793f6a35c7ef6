//! Write generated meshes to disk
//!
//! - [`export_gltf`]: `<name>.bin` (combined blob, verbatim) + `<name>.gltf`
//! - [`export_glb`]: `<name>.glb` (same document and blob in one container)

use anyhow::{Context, Result};
use gltf_json as json;
use std::fs;
use std::path::{Path, PathBuf};

use crate::blob::CombinedBuffer;
use crate::config::ExportConfig;
use crate::document::{DocumentOptions, build_document};
use crate::glb::assemble_glb;

/// Counts, sizes and paths of one export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub facet_count: u32,
    pub vertex_element_count: usize,
    pub index_element_count: usize,
    pub vertex_count: usize,
    pub vertex_byte_len: usize,
    pub index_byte_len: usize,
    /// Files written, in write order
    pub files: Vec<PathBuf>,
}

impl ExportSummary {
    /// Sizes for `facet_count` with no files written
    pub fn for_facet_count(facet_count: u32) -> Self {
        Self {
            facet_count,
            vertex_element_count: rpgen::vertex_element_count(facet_count),
            index_element_count: rpgen::index_element_count(facet_count),
            vertex_count: rpgen::vertex_count(facet_count),
            vertex_byte_len: rpgen::vertex_byte_len(facet_count),
            index_byte_len: rpgen::index_byte_len(facet_count),
            files: Vec::new(),
        }
    }

    pub fn total_byte_len(&self) -> usize {
        self.vertex_byte_len + self.index_byte_len
    }

    /// Log counts and sizes at info level
    pub fn log(&self) {
        tracing::info!("facet count {}", self.facet_count);
        tracing::info!("vertex element count {}", self.vertex_element_count);
        tracing::info!("index element count {}", self.index_element_count);
        tracing::info!("vertex buffer size {}", self.vertex_byte_len);
        tracing::info!("index buffer size {}", self.index_byte_len);
        tracing::info!("total buffer size {}", self.total_byte_len());
    }
}

/// Write `<name>.bin` and `<name>.gltf` into `out_dir`
pub fn export_gltf(config: &ExportConfig, out_dir: &Path) -> Result<ExportSummary> {
    config.validate()?;
    let buffer = CombinedBuffer::generate(&config.mesh)?;

    let bin_name = format!("{}.bin", config.name);
    let root = build_document(&buffer, &DocumentOptions {
        mesh_name: &config.mesh_name,
        buffer_uri: Some(&bin_name),
    });

    ensure_dir(out_dir)?;
    let bin_path = out_dir.join(&bin_name);
    let gltf_path = out_dir.join(format!("{}.gltf", config.name));

    write_file(&bin_path, buffer.bytes())?;
    let text = json::serialize::to_string_pretty(&root).context("Failed to serialize glTF JSON")?;
    write_file(&gltf_path, text.as_bytes())?;

    let mut summary = ExportSummary::for_facet_count(buffer.facet_count());
    summary.files = vec![bin_path, gltf_path];
    Ok(summary)
}

/// Write `<name>.glb` into `out_dir`
pub fn export_glb(config: &ExportConfig, out_dir: &Path) -> Result<ExportSummary> {
    config.validate()?;
    let buffer = CombinedBuffer::generate(&config.mesh)?;

    let root = build_document(&buffer, &DocumentOptions {
        mesh_name: &config.mesh_name,
        buffer_uri: None,
    });
    let glb = assemble_glb(&root, buffer.bytes())?;

    ensure_dir(out_dir)?;
    let glb_path = out_dir.join(format!("{}.glb", config.name));
    write_file(&glb_path, &glb)?;

    let mut summary = ExportSummary::for_facet_count(buffer.facet_count());
    summary.files = vec![glb_path];
    Ok(summary)
}

fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
