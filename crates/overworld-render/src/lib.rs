//! Terrain grid renderers: glyph text blocks and composited sprite rasters.
//!
//! Both renderers are read-only consumers of a [`TerrainGrid`] behind the
//! same single-operation capability, so callers can swap one for the other.

mod ascii;
mod sheet;
mod sprite;

pub use ascii::{AsciiError, AsciiRenderer};
pub use sheet::placeholder_sheet;
pub use sprite::{SpriteError, SpriteRenderer};

use overworld_terrain::TerrainGrid;

/// One rendering capability with substitutable implementations.
pub trait GridRenderer {
    /// The artifact a render produces.
    type Output;
    /// The failure kind a render surfaces.
    type Error;

    /// Consumes a terrain grid and produces an artifact. Implementations
    /// never mutate the grid.
    fn render(&self, grid: &TerrainGrid) -> Result<Self::Output, Self::Error>;
}
