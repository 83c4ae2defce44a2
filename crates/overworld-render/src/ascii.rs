//! Ascii renderer: one glyph per cell, one line per row.

use overworld_terrain::{TerrainGrid, TileRegistry, TilesetError};

use crate::GridRenderer;

/// Errors from ascii rendering.
#[derive(Debug, thiserror::Error)]
pub enum AsciiError {
    /// A grid cell references a biome the registry does not know. The
    /// generator/registry invariant is broken; surfaced, never defaulted.
    #[error(transparent)]
    Tileset(#[from] TilesetError),
}

/// Renders a grid as a newline-delimited block of biome glyphs.
pub struct AsciiRenderer<'a> {
    registry: &'a TileRegistry,
}

impl<'a> AsciiRenderer<'a> {
    /// Creates a renderer resolving glyphs against `registry`.
    pub fn new(registry: &'a TileRegistry) -> Self {
        Self { registry }
    }
}

impl GridRenderer for AsciiRenderer<'_> {
    type Output = String;
    type Error = AsciiError;

    /// One line per row, columns concatenated with no separator, rows joined
    /// by `\n`, no trailing newline. Pure: returns text for the caller to
    /// display or persist.
    fn render(&self, grid: &TerrainGrid) -> Result<String, AsciiError> {
        let (width, height) = grid.dimensions();
        // Glyphs are single chars but not necessarily single bytes.
        let mut out = String::with_capacity(height as usize * (width as usize * 4 + 1));
        for (y, row) in grid.rows().enumerate() {
            if y > 0 {
                out.push('\n');
            }
            for &cell in row {
                out.push(self.registry.glyph(cell)?);
            }
        }
        Ok(out)
    }
}
