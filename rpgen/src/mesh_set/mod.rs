//! Precomputed meshes over a facet range
//!
//! A real-time viewer keeps one mesh per selectable facet count and switches
//! between them with a bounded increment/decrement control. [`MeshSet`] holds
//! the meshes; [`FacetSelector`] decides which one is bound. Neither touches
//! a graphics device: upload [`PolygonMesh::vertex_bytes`] /
//! [`PolygonMesh::index_bytes`] with whatever backend is in use, and draw
//! [`MeshSet::draw_index_count`] indices.

use std::ops::Range;

use rayon::prelude::*;

use crate::capacity::{MAX_FACET_COUNT, MIN_FACET_COUNT};
use crate::error::GenerateError;
use crate::mesh::PolygonMesh;
use crate::request::GenerationRequest;


/// Default selectable range `[3, 23)`
pub const DEFAULT_FACET_RANGE: FacetRange = FacetRange { min: 3, max: 23 };

/// Errors building a facet range or mesh set
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshSetError {
    /// Range is empty or outside `[3, MAX_FACET_COUNT]`
    #[error("invalid facet range [{min}, {max}) (must be non-empty within [3, {limit}])")]
    InvalidRange { min: u32, max: u32, limit: u32 },

    /// Template request rejected by the generator
    #[error("mesh generation failed: {0}")]
    Generate(#[from] GenerateError),
}

/// Half-open facet count range `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacetRange {
    min: u32,
    max: u32,
}

impl FacetRange {
    pub fn new(min: u32, max: u32) -> Result<Self, MeshSetError> {
        if min < MIN_FACET_COUNT || max > MAX_FACET_COUNT + 1 || min >= max {
            return Err(MeshSetError::InvalidRange {
                min,
                max,
                limit: MAX_FACET_COUNT,
            });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    /// Exclusive upper bound
    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn len(&self) -> usize {
        (self.max - self.min) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.min == self.max
    }

    pub fn contains(&self, facet_count: u32) -> bool {
        (self.min..self.max).contains(&facet_count)
    }

    /// Clamp into `[min, max - 1]`
    pub fn clamp(&self, facet_count: u32) -> u32 {
        facet_count.clamp(self.min, self.max - 1)
    }

    pub fn iter(&self) -> Range<u32> {
        self.min..self.max
    }
}

impl Default for FacetRange {
    fn default() -> Self {
        DEFAULT_FACET_RANGE
    }
}

/// Bounded increment/decrement control over a [`FacetRange`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacetSelector {
    range: FacetRange,
    current: u32,
}

impl FacetSelector {
    /// Selector starting at the smallest facet count
    pub fn new(range: FacetRange) -> Self {
        Self {
            range,
            current: range.min,
        }
    }

    pub fn range(&self) -> FacetRange {
        self.range
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    /// One more facet, clamped to `max - 1`. Returns the new count.
    pub fn increase(&mut self) -> u32 {
        self.select(self.current.saturating_add(1))
    }

    /// One less facet, clamped to `min`. Returns the new count.
    pub fn decrease(&mut self) -> u32 {
        self.select(self.current.saturating_sub(1))
    }

    /// Jump to `facet_count`, clamped into range. Returns the new count.
    pub fn select(&mut self, facet_count: u32) -> u32 {
        let clamped = self.range.clamp(facet_count);
        if clamped != self.current {
            tracing::debug!("Facet count {} -> {}", self.current, clamped);
        }
        self.current = clamped;
        clamped
    }

    /// Position of the current mesh inside a [`MeshSet`] built from the same range
    pub fn slot(&self) -> usize {
        (self.current - self.range.min) as usize
    }
}

impl Default for FacetSelector {
    fn default() -> Self {
        Self::new(FacetRange::default())
    }
}

/// One generated mesh per facet count in a range
#[derive(Debug, Clone)]
pub struct MeshSet {
    range: FacetRange,
    meshes: Vec<PolygonMesh>,
}

impl MeshSet {
    /// Generate every mesh in `range` in parallel.
    ///
    /// `template` supplies radius, depth and colors; its facet count is ignored.
    pub fn generate(range: FacetRange, template: &GenerationRequest) -> Result<Self, MeshSetError> {
        let meshes: Result<Vec<_>, GenerateError> = range
            .iter()
            .into_par_iter()
            .map(|facet_count| {
                PolygonMesh::generate(&GenerationRequest {
                    facet_count,
                    ..*template
                })
            })
            .collect();
        let meshes = meshes?;

        tracing::debug!(
            "Generated mesh set: facets [{}, {}), {} meshes",
            range.min,
            range.max,
            meshes.len()
        );

        Ok(Self { range, meshes })
    }

    pub fn range(&self) -> FacetRange {
        self.range
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Mesh for `facet_count`, if inside the range
    pub fn get(&self, facet_count: u32) -> Option<&PolygonMesh> {
        if !self.range.contains(facet_count) {
            return None;
        }
        self.meshes.get((facet_count - self.range.min) as usize)
    }

    /// Mesh currently chosen by `selector`
    pub fn selected(&self, selector: &FacetSelector) -> Option<&PolygonMesh> {
        self.get(selector.current())
    }

    /// Indices to draw for `facet_count`, if a mesh exists for it
    pub fn draw_index_count(&self, facet_count: u32) -> Option<usize> {
        self.get(facet_count).map(PolygonMesh::index_count)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PolygonMesh> {
        self.meshes.iter()
    }
}
