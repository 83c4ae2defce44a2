//! Noise fields: multi-octave Perlin fBm and the transient sample planes
//! the generator fills from it.

use noise::{NoiseFn, Perlin};

/// Frequency multiplier between successive octaves.
const LACUNARITY: f64 = 2.0;
/// Amplitude multiplier between successive octaves.
const PERSISTENCE: f64 = 0.5;

/// Multi-octave fractal Brownian motion over Perlin noise.
///
/// Each successive octave doubles in frequency and halves in amplitude. The
/// weighted sum is renormalized by the amplitude total and halved, so the
/// output is nominally in `[-0.5, 0.5]` regardless of octave count. The
/// function is continuous and deterministic: identical `(x, y, seed,
/// octaves)` always yields an identical value.
#[derive(Debug)]
pub struct FbmField {
    noise: Perlin,
    octaves: u32,
}

impl FbmField {
    /// Creates a field from an already-derived noise seed.
    ///
    /// `octaves` must be at least 1; the generator validates this before
    /// constructing a field.
    pub fn new(noise_seed: u32, octaves: u32) -> Self {
        Self {
            noise: Perlin::new(noise_seed),
            octaves,
        }
    }

    /// Samples the field at a continuous coordinate.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let mut total = 0.0;
        let mut frequency = 1.0;
        let mut amplitude = 1.0;
        let mut amplitude_sum = 0.0;

        for _ in 0..self.octaves {
            total += self.noise.get([x * frequency, y * frequency]) * amplitude;
            amplitude_sum += amplitude;
            frequency *= LACUNARITY;
            amplitude *= PERSISTENCE;
        }

        0.5 * total / amplitude_sum
    }
}

/// A transient `height x width` plane of normalized noise samples, row-major.
///
/// Raw fBm output is shifted by `+0.5` into a nominal `[0, 1]` range with no
/// clamping: any excursion outside the nominal range is absorbed by the
/// extreme classification bands. The plane only lives for the duration of a
/// generation call.
pub struct NoiseField {
    width: u32,
    height: u32,
    values: Vec<f64>,
}

impl NoiseField {
    /// Fills a `width x height` plane from `field`, dividing cell coordinates
    /// by `scale` after shifting both axes by `offset`.
    pub fn sample(field: &FbmField, width: u32, height: u32, scale: f64, offset: f64) -> Self {
        let mut values = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let sx = (f64::from(x) + offset) / scale;
                let sy = (f64::from(y) + offset) / scale;
                values.push(field.sample(sx, sy) + 0.5);
            }
        }
        Self {
            width,
            height,
            values,
        }
    }

    /// The normalized sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the plane.
    pub fn at(&self, x: u32, y: u32) -> f64 {
        assert!(x < self.width && y < self.height);
        self.values[y as usize * self.width as usize + x as usize]
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
