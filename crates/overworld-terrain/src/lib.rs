//! Procedural 2D terrain synthesis: seeded noise fields, threshold-based
//! biome classification, and the tileset catalog renderers resolve against.

mod field;
mod generator;
mod grid;
mod seed;

pub mod tileset;

pub use field::{FbmField, NoiseField};
pub use generator::{
    ELEVATION_SCALE, GeneratorError, GeneratorParams, MOISTURE_OFFSET, MOISTURE_SCALE,
    TerrainGenerator,
};
pub use grid::TerrainGrid;
pub use seed::noise_seed;
pub use tileset::{BiomeId, SheetCoord, TileDef, TileRegistry, TilesetError};
