//! The binary entry point for the overworld map generator.

use std::path::PathBuf;

use clap::Parser;

use overworld_config::{CliArgs, Config, RendererKind};
use overworld_render::{AsciiRenderer, GridRenderer, SpriteRenderer, placeholder_sheet};
use overworld_terrain::{GeneratorParams, TerrainGenerator, TileRegistry};

/// Everything that can go wrong between parsing arguments and writing the
/// output artifact. Each variant is one of the distinct failure kinds the
/// pipeline surfaces; none are retried.
#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] overworld_config::ConfigError),

    #[error(transparent)]
    Generator(#[from] overworld_terrain::GeneratorError),

    #[error(transparent)]
    Ascii(#[from] overworld_render::AsciiError),

    #[error(transparent)]
    Sprite(#[from] overworld_render::SpriteError),

    #[error("failed to write {path}: {source}")]
    WriteArtifact {
        path: PathBuf,
        source: image::ImageError,
    },
}

fn main() {
    let args = CliArgs::parse();

    if let Err(e) = run(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), AppError> {
    let config_dir = args.config.clone().unwrap_or_else(Config::default_dir);
    let mut config = Config::load_or_create(&config_dir)?;
    config.apply_cli_overrides(args);

    overworld_log::init_logging(None, cfg!(debug_assertions), Some(&config));

    let registry = TileRegistry::standard();

    let params = GeneratorParams {
        width: config.map.width,
        height: config.map.height,
        seed: config.map.seed,
        octaves: config.map.octaves,
    };
    let generator = TerrainGenerator::new(params, &registry)?;
    let grid = generator.generate();
    tracing::info!(
        width = grid.width(),
        height = grid.height(),
        seed = config.map.seed,
        "terrain generated"
    );

    match config.output.renderer {
        RendererKind::Ascii => {
            let text = AsciiRenderer::new(&registry).render(&grid)?;
            println!("{text}");
        }
        RendererKind::Sprite => {
            let renderer = sprite_renderer(&config, &registry)?;
            let canvas = renderer.render(&grid)?;
            canvas
                .save(&config.output.out)
                .map_err(|source| AppError::WriteArtifact {
                    path: config.output.out.clone(),
                    source,
                })?;
            tracing::info!(path = %config.output.out.display(), "sprite map written");
        }
    }

    Ok(())
}

/// Slice the supplied sheet, or fall back to a generated placeholder when no
/// sheet exists yet. The placeholder is also written to disk so the user can
/// inspect the layout contract and drop real art in its place.
fn sprite_renderer(config: &Config, registry: &TileRegistry) -> Result<SpriteRenderer, AppError> {
    let tile_size = config.output.tile_size;

    match &config.output.sheet {
        Some(path) if path.exists() => {
            Ok(SpriteRenderer::open_sheet(path, tile_size, registry)?)
        }
        supplied => {
            let sheet = placeholder_sheet(registry, tile_size)?;
            let sheet_path = supplied
                .clone()
                .unwrap_or_else(|| PathBuf::from("placeholder_tiles.png"));
            match sheet.save(&sheet_path) {
                Ok(()) => tracing::info!(
                    path = %sheet_path.display(),
                    "no sprite sheet supplied; wrote placeholder"
                ),
                Err(e) => tracing::warn!(
                    path = %sheet_path.display(),
                    "could not persist placeholder sheet: {e}"
                ),
            }
            Ok(SpriteRenderer::from_sheet(sheet, tile_size, registry)?)
        }
    }
}
