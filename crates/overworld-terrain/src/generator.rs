//! Terrain generator: two decorrelated noise fields thresholded into biomes.

use crate::field::{FbmField, NoiseField};
use crate::grid::TerrainGrid;
use crate::seed::noise_seed;
use crate::tileset::{BiomeId, TileRegistry, TilesetError};

/// Cell-to-noise scale of the elevation field.
pub const ELEVATION_SCALE: f64 = 60.0;
/// Cell-to-noise scale of the moisture field.
pub const MOISTURE_SCALE: f64 = 120.0;
/// Coordinate shift applied identically to both axes of the moisture field.
/// Decorrelates it from the elevation field while reusing the same noise
/// function and seed; any fixed nonzero shift works, this one is the
/// catalog's documented constant.
pub const MOISTURE_OFFSET: f64 = 999.0;

/// Generation inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorParams {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// World seed. Any value, including zero and negative.
    pub seed: i64,
    /// Number of noise octaves to composite. More octaves add finer detail.
    pub octaves: u32,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            width: 120,
            height: 60,
            seed: 0,
            octaves: 4,
        }
    }
}

/// Errors from generator construction.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// A zero-area grid was requested. Rejected before any noise sampling.
    #[error("terrain grid dimensions must be positive, got {width}x{height}")]
    EmptyGrid {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// At least one noise octave is required.
    #[error("octave count must be positive")]
    ZeroOctaves,

    /// A biome the threshold table names is missing from the registry.
    #[error(transparent)]
    Tileset(#[from] TilesetError),
}

/// The handles the threshold table assigns, resolved once per generator so
/// classification never touches the name index in the per-cell loop.
#[derive(Debug)]
struct BandHandles {
    water_deep: BiomeId,
    water_shallow: BiomeId,
    sand: BiomeId,
    plains: BiomeId,
    forest: BiomeId,
    mountain: BiomeId,
}

impl BandHandles {
    fn resolve(registry: &TileRegistry) -> Result<Self, TilesetError> {
        Ok(Self {
            water_deep: registry.id_of("water_deep")?,
            water_shallow: registry.id_of("water_shallow")?,
            sand: registry.id_of("sand")?,
            plains: registry.id_of("plains")?,
            forest: registry.id_of("forest")?,
            mountain: registry.id_of("mountain")?,
        })
    }

    /// Ordered half-open elevation bands, with moisture breaking the tie in
    /// the middle band only. Every `(h, m)` pair lands in exactly one band;
    /// values outside `[0, 1]` fall into the extreme bands.
    fn classify(&self, h: f64, m: f64) -> BiomeId {
        if h < 0.35 {
            self.water_deep
        } else if h < 0.42 {
            self.water_shallow
        } else if h < 0.45 {
            self.sand
        } else if h < 0.70 {
            if m < 0.5 { self.plains } else { self.forest }
        } else {
            self.mountain
        }
    }
}

/// Synthesizes terrain grids from a seed and dimensions.
///
/// Construction validates the parameters and resolves the classifier's biome
/// handles; generation is then infallible and side-effect free.
#[derive(Debug)]
pub struct TerrainGenerator {
    params: GeneratorParams,
    field: FbmField,
    bands: BandHandles,
}

impl TerrainGenerator {
    /// Validates `params` and resolves the six biomes the threshold table
    /// names against `registry`.
    ///
    /// # Errors
    ///
    /// [`GeneratorError::EmptyGrid`] and [`GeneratorError::ZeroOctaves`] for
    /// invalid parameters; [`GeneratorError::Tileset`] when the registry is
    /// missing a named biome (a consistency error, not bad user input).
    pub fn new(params: GeneratorParams, registry: &TileRegistry) -> Result<Self, GeneratorError> {
        if params.width == 0 || params.height == 0 {
            return Err(GeneratorError::EmptyGrid {
                width: params.width,
                height: params.height,
            });
        }
        if params.octaves == 0 {
            return Err(GeneratorError::ZeroOctaves);
        }
        let bands = BandHandles::resolve(registry)?;
        let field = FbmField::new(noise_seed(params.seed), params.octaves);
        Ok(Self {
            params,
            field,
            bands,
        })
    }

    /// The validated parameters this generator was built with.
    pub fn params(&self) -> &GeneratorParams {
        &self.params
    }

    /// Produces the fully populated grid.
    ///
    /// Deterministic: the same `(width, height, seed, octaves)` always yields
    /// a bit-identical grid. Each cell depends only on its own coordinates
    /// and the immutable field, so enlarging the grid never changes the
    /// cells it shares with a smaller one, and the per-cell work could be
    /// split across workers writing disjoint slots without synchronization.
    pub fn generate(&self) -> TerrainGrid {
        let GeneratorParams { width, height, .. } = self.params;

        let elevation = NoiseField::sample(&self.field, width, height, ELEVATION_SCALE, 0.0);
        let moisture =
            NoiseField::sample(&self.field, width, height, MOISTURE_SCALE, MOISTURE_OFFSET);

        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(self.bands.classify(elevation.at(x, y), moisture.at(x, y)));
            }
        }

        TerrainGrid::from_raw(width, height, cells)
    }
}
