//! Generation parameters
//!
//! A [`GenerationRequest`] is an immutable value passed by reference to
//! [`crate::generate`]. Colors are configuration, not layout: overriding them
//! never changes positions or indices.

use serde::{Deserialize, Serialize};

use crate::capacity::{MAX_FACET_COUNT, MIN_FACET_COUNT};
use crate::error::GenerateError;

/// Default distance between the center and each ring vertex
pub const DEFAULT_FACET_RADIUS: f32 = 2.0;

/// Default distance between the front (z = 0) and back planes
pub const DEFAULT_EXTRUSION_DEPTH: f32 = 0.3;

const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

/// Flat RGBA color per vertex group
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshColors {
    /// Front facet ring and front center
    pub front_face: [f32; 4],
    /// Back facet ring and back center
    pub back_face: [f32; 4],
    /// Both edge rings
    pub edge: [f32; 4],
}

impl Default for MeshColors {
    fn default() -> Self {
        Self {
            front_face: RED,
            back_face: BLUE,
            edge: GREEN,
        }
    }
}

/// Input to a single generation call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationRequest {
    /// Number of angular slices (>= 3)
    pub facet_count: u32,
    /// Ring radius (> 0)
    pub facet_radius: f32,
    /// Back plane sits at z = -extrusion_depth (> 0)
    pub extrusion_depth: f32,
    pub colors: MeshColors,
}

impl GenerationRequest {
    /// Request with the given facet count and default radius, depth and colors
    pub fn new(facet_count: u32) -> Self {
        Self {
            facet_count,
            ..Self::default()
        }
    }

    pub fn with_radius(mut self, facet_radius: f32) -> Self {
        self.facet_radius = facet_radius;
        self
    }

    pub fn with_depth(mut self, extrusion_depth: f32) -> Self {
        self.extrusion_depth = extrusion_depth;
        self
    }

    pub fn with_colors(mut self, colors: MeshColors) -> Self {
        self.colors = colors;
        self
    }

    /// Check every precondition that does not involve caller buffers
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.facet_count < MIN_FACET_COUNT {
            return Err(GenerateError::FacetCountTooSmall {
                facet_count: self.facet_count,
            });
        }
        if self.facet_count > MAX_FACET_COUNT {
            return Err(GenerateError::FacetCountTooLarge {
                facet_count: self.facet_count,
                max: MAX_FACET_COUNT,
            });
        }
        if !self.facet_radius.is_finite() || self.facet_radius <= 0.0 {
            return Err(GenerateError::InvalidRadius(self.facet_radius));
        }
        if !self.extrusion_depth.is_finite() || self.extrusion_depth <= 0.0 {
            return Err(GenerateError::InvalidDepth(self.extrusion_depth));
        }
        Ok(())
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            facet_count: MIN_FACET_COUNT,
            facet_radius: DEFAULT_FACET_RADIUS,
            extrusion_depth: DEFAULT_EXTRUSION_DEPTH,
            colors: MeshColors::default(),
        }
    }
}
