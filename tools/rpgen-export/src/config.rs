//! Export configuration (TOML)
//!
//! ```toml
//! name = "hexagon"           # output file stem
//! mesh_name = "rpgen-mesh"   # glTF mesh name
//!
//! [mesh]
//! facet_count = 6
//! facet_radius = 2.0
//! extrusion_depth = 0.3
//!
//! [mesh.colors]
//! edge = [0.0, 1.0, 0.0, 1.0]
//! ```
//!
//! Every key is optional; missing keys take the defaults below. Inside
//! `[mesh]`, missing keys fall back to the export defaults key by key, so a
//! table that only sets `facet_radius` still gets [`DEFAULT_EXPORT_FACET_COUNT`].

use anyhow::{Context, Result, bail};
use rpgen::{GenerationRequest, MeshColors};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Facet count used when neither the config nor the CLI sets one
pub const DEFAULT_EXPORT_FACET_COUNT: u32 = 5;

/// Export job description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Output file stem (`<name>.bin`, `<name>.gltf`, `<name>.glb`)
    pub name: String,
    /// Name of the mesh inside the glTF document
    pub mesh_name: String,
    #[serde(deserialize_with = "deserialize_mesh")]
    pub mesh: GenerationRequest,
}

/// `[mesh]` as written in the file, before defaults are applied
#[derive(Deserialize)]
struct MeshSection {
    facet_count: Option<u32>,
    facet_radius: Option<f32>,
    extrusion_depth: Option<f32>,
    colors: Option<MeshColors>,
}

impl MeshSection {
    fn into_request(self) -> GenerationRequest {
        let defaults = GenerationRequest::new(DEFAULT_EXPORT_FACET_COUNT);
        GenerationRequest {
            facet_count: self.facet_count.unwrap_or(defaults.facet_count),
            facet_radius: self.facet_radius.unwrap_or(defaults.facet_radius),
            extrusion_depth: self.extrusion_depth.unwrap_or(defaults.extrusion_depth),
            colors: self.colors.unwrap_or(defaults.colors),
        }
    }
}

fn deserialize_mesh<'de, D>(deserializer: D) -> Result<GenerationRequest, D::Error>
where
    D: Deserializer<'de>,
{
    MeshSection::deserialize(deserializer).map(MeshSection::into_request)
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            name: "out".to_string(),
            mesh_name: "rpgen-mesh".to_string(),
            mesh: GenerationRequest::new(DEFAULT_EXPORT_FACET_COUNT),
        }
    }
}

impl ExportConfig {
    /// Check the mesh request and that `name` is a bare file stem
    pub fn validate(&self) -> Result<()> {
        self.mesh.validate().context("Invalid [mesh] section")?;

        if self.name.is_empty() {
            bail!("Output name must not be empty");
        }
        if self.name.contains(['/', '\\']) || self.name == "." || self.name == ".." {
            bail!("Output name {:?} must be a file stem, not a path", self.name);
        }
        Ok(())
    }
}

/// Load an export config from a TOML file
pub fn load_config(path: &Path) -> Result<ExportConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;

    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config: {}", path.display()))
}
