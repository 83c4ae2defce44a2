//! Placeholder sprite sheet: flat-colored tiles laid out at the registry's
//! own sheet coordinates, so the sprite renderer has a valid input before
//! real art exists.

use image::{Rgba, RgbaImage};
use overworld_terrain::TileRegistry;

use crate::sprite::SpriteError;

/// Flat RGB for a biome name. Unknown names fall back to grey.
fn biome_color(name: &str) -> [u8; 3] {
    match name {
        "water_deep" => [30, 60, 160],
        "water_shallow" => [60, 120, 200],
        "sand" => [210, 180, 80],
        "plains" => [60, 180, 60],
        "forest" => [20, 120, 20],
        "mountain" => [120, 120, 120],
        _ => [128, 128, 128],
    }
}

/// Builds a synthetic sheet with one opaque flat-colored tile per biome at
/// its `sheet_coord`, sized to the registry's sheet extent. The layout
/// contract is the same one real art assets follow.
///
/// # Errors
///
/// Returns [`SpriteError::InvalidTileSize`] for a zero tile size.
pub fn placeholder_sheet(
    registry: &TileRegistry,
    tile_size: u32,
) -> Result<RgbaImage, SpriteError> {
    if tile_size == 0 {
        return Err(SpriteError::InvalidTileSize(tile_size));
    }

    let (rows, cols) = registry.sheet_extent();
    let mut sheet = RgbaImage::new(cols * tile_size, rows * tile_size);

    for def in registry.defs() {
        let [r, g, b] = biome_color(&def.name);
        let x0 = def.sheet_coord.col * tile_size;
        let y0 = def.sheet_coord.row * tile_size;
        for dy in 0..tile_size {
            for dx in 0..tile_size {
                sheet.put_pixel(x0 + dx, y0 + dy, Rgba([r, g, b, 255]));
            }
        }
    }

    Ok(sheet)
}
