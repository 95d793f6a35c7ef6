//! Vertex group offsets
//!
//! Group start vertices are never stored in the buffers; they are recomputed
//! from the facet count alone, identically for the generator and any consumer.

/// Start vertex of each group for one facet count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexGroups {
    facet_count: u16,
}

impl VertexGroups {
    /// Offsets for `facet_count` facets.
    ///
    /// The count must already be validated (`3..=MAX_FACET_COUNT`).
    pub(crate) const fn new(facet_count: u16) -> Self {
        Self { facet_count }
    }

    pub const fn facet_count(&self) -> u16 {
        self.facet_count
    }

    pub const fn front_facet_start(&self) -> u16 {
        0
    }

    pub const fn front_edge_start(&self) -> u16 {
        self.facet_count
    }

    pub const fn back_facet_start(&self) -> u16 {
        self.facet_count * 2
    }

    pub const fn back_edge_start(&self) -> u16 {
        self.facet_count * 3
    }

    pub const fn front_center(&self) -> u16 {
        self.facet_count * 4
    }

    pub const fn back_center(&self) -> u16 {
        self.facet_count * 4 + 1
    }

    /// Ring index following `i`, wrapping the last facet back to 0
    pub const fn next(&self, i: u16) -> u16 {
        (i + 1) % self.facet_count
    }

    pub const fn front_facet(&self, i: u16) -> u16 {
        self.front_facet_start() + i
    }

    pub const fn front_edge(&self, i: u16) -> u16 {
        self.front_edge_start() + i
    }

    pub const fn back_facet(&self, i: u16) -> u16 {
        self.back_facet_start() + i
    }

    pub const fn back_edge(&self, i: u16) -> u16 {
        self.back_edge_start() + i
    }
}

impl TryFrom<u32> for VertexGroups {
    type Error = crate::GenerateError;

    /// Offsets for a facet count, rejecting counts the generator would reject
    fn try_from(facet_count: u32) -> Result<Self, Self::Error> {
        crate::GenerationRequest::new(facet_count).validate()?;
        // validate() bounds the count to MAX_FACET_COUNT, well inside u16
        Ok(Self::new(facet_count as u16))
    }
}
