//! Landscape generation front-end.
//!
//! Loads `config.ron`, applies CLI overrides, generates a heightfield for
//! the configured size preset, and writes the quantized 16-bit height data
//! (little-endian `.r16`, the format the landscape importer consumes)
//! plus an optional PNG preview.
//!
//! Run with `cargo run -p tarnfell-mapgen -- --seed 7 --preset small`.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Parser;
use tarnfell_config::{CliArgs, Config};
use tarnfell_landscape::debug_viz::{HeightfieldImage, render_heightfield};
use tarnfell_landscape::{
    ElevationGrid, GenerationReport, dimensions_for_preset, generate, quantize,
};
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .or_else(|| dirs::config_dir().map(|d| d.join("tarnfell")))
        .unwrap_or_else(|| PathBuf::from("."));

    let config = match Config::load_or_create(&config_dir) {
        Ok(mut config) => {
            config.apply_cli_overrides(&args);
            config
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    tarnfell_log::init_logging(None, cfg!(debug_assertions), Some(&config));

    if let Err(err) = run(&config) {
        error!("map generation failed: {err}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let (size_x, size_y) = dimensions_for_preset(config.landscape.size_preset);
    let cell_size = config.output.cell_size;
    info!(
        seed = config.landscape.seed,
        size_x, size_y, cell_size, "generating landscape"
    );

    let grid = generate(&config.landscape, size_x, size_y, cell_size)?;

    let report = GenerationReport::measure(&grid, cell_size);
    info!(
        max_height = report.max_height,
        mean_height = report.mean_height,
        max_slope_deg = report.max_slope_degrees,
        peaks = report.peak_count,
        "landscape ready"
    );

    let out_dir = Path::new(&config.output.directory);
    std::fs::create_dir_all(out_dir)?;
    let stem = format!(
        "landscape_seed{}_{}x{}",
        config.landscape.seed, size_x, size_y
    );

    let height_path = out_dir.join(format!("{stem}.r16"));
    write_height_data(&height_path, &grid, config.output.z_scale)?;
    info!("wrote height data to {}", height_path.display());

    if config.output.png_preview {
        let preview_path = out_dir.join(format!("{stem}.png"));
        write_png(&preview_path, &render_heightfield(&grid))?;
        info!("wrote preview to {}", preview_path.display());
    }

    Ok(())
}

/// Write the quantized heightfield as little-endian u16, row-major.
fn write_height_data(
    path: &Path,
    grid: &ElevationGrid,
    z_scale: f32,
) -> Result<(), std::io::Error> {
    let quantized = quantize(grid.as_slice(), z_scale);
    let mut bytes = Vec::with_capacity(quantized.len() * 2);
    for q in &quantized {
        bytes.extend_from_slice(&q.to_le_bytes());
    }
    std::fs::write(path, bytes)
}

fn write_png(path: &Path, image: &HeightfieldImage) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let mut encoder = png::Encoder::new(writer, image.width, image.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&image.pixels)?;
    Ok(())
}
