//! Sprite renderer: composites fixed-size tiles cropped from a sprite sheet.

use std::path::Path;

use hashbrown::HashMap;
use image::{RgbaImage, imageops};
use overworld_terrain::{BiomeId, TerrainGrid, TileRegistry};

use crate::GridRenderer;

/// Errors from sprite-sheet slicing and compositing.
#[derive(Debug, thiserror::Error)]
pub enum SpriteError {
    /// Tiles must have a positive pixel edge.
    #[error("tile size must be positive, got {0}")]
    InvalidTileSize(u32),

    /// The sheet image is missing, unreadable, or malformed.
    #[error("sprite sheet load error: {0}")]
    Asset(#[from] image::ImageError),

    /// The sheet is too small to crop the named biome's tile.
    #[error(
        "sprite sheet is {sheet_width}x{sheet_height}px but biome '{biome}' \
         needs {need_width}x{need_height}px"
    )]
    SheetTooSmall {
        /// Name of the biome whose crop region falls outside the sheet.
        biome: String,
        /// Actual sheet width in pixels.
        sheet_width: u32,
        /// Actual sheet height in pixels.
        sheet_height: u32,
        /// Sheet width the crop would require.
        need_width: u32,
        /// Sheet height the crop would require.
        need_height: u32,
    },

    /// A grid cell references a biome with no sliced sprite: the grid was
    /// generated against a different registry than this renderer.
    #[error("no sprite for biome id {0}")]
    UnknownBiome(u16),
}

/// Composites terrain grids from a sliced sprite sheet.
///
/// The per-biome sprite cache is cut once at construction and reused for
/// every cell of every render; cells are never cropped individually.
#[derive(Debug)]
pub struct SpriteRenderer {
    tile_size: u32,
    sprites: HashMap<BiomeId, RgbaImage>,
}

impl SpriteRenderer {
    /// Loads the sheet at `path` and slices it.
    ///
    /// # Errors
    ///
    /// [`SpriteError::Asset`] when the file is missing or not a decodable
    /// image (surfaced before any slicing), plus everything
    /// [`Self::from_sheet`] returns.
    pub fn open_sheet(
        path: &Path,
        tile_size: u32,
        registry: &TileRegistry,
    ) -> Result<Self, SpriteError> {
        let sheet = image::open(path)?.to_rgba8();
        Self::from_sheet(sheet, tile_size, registry)
    }

    /// Slices `sheet` into one `tile_size x tile_size` sprite per registered
    /// biome, cropped at pixel offset `(col * tile_size, row * tile_size)`.
    ///
    /// # Errors
    ///
    /// [`SpriteError::InvalidTileSize`] for a zero tile size;
    /// [`SpriteError::SheetTooSmall`] naming the first biome whose crop
    /// region falls outside the sheet.
    pub fn from_sheet(
        sheet: RgbaImage,
        tile_size: u32,
        registry: &TileRegistry,
    ) -> Result<Self, SpriteError> {
        if tile_size == 0 {
            return Err(SpriteError::InvalidTileSize(tile_size));
        }

        let mut sprites = HashMap::with_capacity(registry.len());
        for (index, def) in registry.defs().iter().enumerate() {
            let x0 = def.sheet_coord.col * tile_size;
            let y0 = def.sheet_coord.row * tile_size;
            let need_width = x0 + tile_size;
            let need_height = y0 + tile_size;
            if need_width > sheet.width() || need_height > sheet.height() {
                return Err(SpriteError::SheetTooSmall {
                    biome: def.name.clone(),
                    sheet_width: sheet.width(),
                    sheet_height: sheet.height(),
                    need_width,
                    need_height,
                });
            }
            let sprite = imageops::crop_imm(&sheet, x0, y0, tile_size, tile_size).to_image();
            sprites.insert(BiomeId(index as u16), sprite);
        }

        Ok(Self { tile_size, sprites })
    }

    /// Pixel edge of one tile.
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// The cached sprite for a biome, if the registry defined one.
    pub fn sprite(&self, id: BiomeId) -> Option<&RgbaImage> {
        self.sprites.get(&id)
    }
}

impl GridRenderer for SpriteRenderer {
    type Output = RgbaImage;
    type Error = SpriteError;

    /// Allocates a `(width * tile_size, height * tile_size)` canvas and
    /// pastes each cell's cached sprite at `(x * tile_size, y * tile_size)`,
    /// fully overwriting the destination region. The caller decides where
    /// the canvas is persisted.
    fn render(&self, grid: &TerrainGrid) -> Result<RgbaImage, SpriteError> {
        let (width, height) = grid.dimensions();
        let mut canvas = RgbaImage::new(width * self.tile_size, height * self.tile_size);

        for (y, row) in grid.rows().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                let sprite = self
                    .sprites
                    .get(&cell)
                    .ok_or(SpriteError::UnknownBiome(cell.0))?;
                imageops::replace(
                    &mut canvas,
                    sprite,
                    x as i64 * self.tile_size as i64,
                    y as i64 * self.tile_size as i64,
                );
            }
        }

        Ok(canvas)
    }
}
