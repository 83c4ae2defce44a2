//! Command-line argument parsing for the overworld map generator.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, RendererKind};

/// Overworld command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "overworld", about = "Noise-driven terrain map generator")]
pub struct CliArgs {
    /// Grid width in cells.
    #[arg(long)]
    pub width: Option<u32>,

    /// Grid height in cells.
    #[arg(long)]
    pub height: Option<u32>,

    /// World seed (any integer).
    #[arg(long, allow_hyphen_values = true)]
    pub seed: Option<i64>,

    /// Noise octave count.
    #[arg(long)]
    pub octaves: Option<u32>,

    /// Renderer producing the output artifact.
    #[arg(long, value_enum)]
    pub renderer: Option<RendererKind>,

    /// Pixel edge of one square sprite tile.
    #[arg(long)]
    pub tile_size: Option<u32>,

    /// Sprite sheet PNG to slice tiles from.
    #[arg(long)]
    pub tiles: Option<PathBuf>,

    /// Output image path for the sprite renderer.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.map.width = w;
        }
        if let Some(h) = args.height {
            self.map.height = h;
        }
        if let Some(seed) = args.seed {
            self.map.seed = seed;
        }
        if let Some(octaves) = args.octaves {
            self.map.octaves = octaves;
        }
        if let Some(renderer) = args.renderer {
            self.output.renderer = renderer;
        }
        if let Some(tile_size) = args.tile_size {
            self.output.tile_size = tile_size;
        }
        if let Some(ref tiles) = args.tiles {
            self.output.sheet = Some(tiles.clone());
        }
        if let Some(ref out) = args.out {
            self.output.out = out.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_args() -> CliArgs {
        CliArgs {
            width: None,
            height: None,
            seed: None,
            octaves: None,
            renderer: None,
            tile_size: None,
            tiles: None,
            out: None,
            log_level: None,
            config: None,
        }
    }

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(300),
            seed: Some(-42),
            renderer: Some(RendererKind::Sprite),
            tiles: Some(PathBuf::from("art/tiles.png")),
            ..no_args()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.map.width, 300);
        assert_eq!(config.map.seed, -42);
        assert_eq!(config.output.renderer, RendererKind::Sprite);
        assert_eq!(config.output.sheet, Some(PathBuf::from("art/tiles.png")));
        // Non-overridden fields retain defaults
        assert_eq!(config.map.height, 60);
        assert_eq!(config.output.tile_size, 16);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&no_args());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_renderer_value() {
        let args = CliArgs::parse_from(["overworld", "--renderer", "sprite", "--seed", "-5"]);
        assert_eq!(args.renderer, Some(RendererKind::Sprite));
        assert_eq!(args.seed, Some(-5));
    }
}
