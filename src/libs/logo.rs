use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use image::{
    codecs::ico::{IcoEncoder, IcoFrame},
    imageops::FilterType,
    DynamicImage, ExtendedColorType, ImageFormat,
};
use rayon::prelude::*;
use tracing::debug;

pub const DEFAULT_INPUT: &str = "logo.webp";
pub const DEFAULT_PNG: &str = "logo.png";
pub const DEFAULT_ICO: &str = "icon.ico";

pub const ICON_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

fn open_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).with_context(|| format!("could not open {}", path.display()))
}

pub fn convert_to_png(input_path: &Path, output_path: &Path) -> Result<()> {
    let image = open_image(input_path)?;
    debug!(
        "decoded {} ({}x{})",
        input_path.display(),
        image.width(),
        image.height()
    );
    image
        .save_with_format(output_path, ImageFormat::Png)
        .with_context(|| format!("could not write {}", output_path.display()))?;
    Ok(())
}

fn render_frame(image: &DynamicImage, size: u32) -> Result<IcoFrame<'static>> {
    let resized = image.resize_exact(size, size, FilterType::Lanczos3).into_rgba8();
    let frame = IcoFrame::as_png(resized.as_raw(), size, size, ExtendedColorType::Rgba8)
        .with_context(|| format!("could not encode {size}x{size} icon frame"))?;
    Ok(frame)
}

/// Writes an ICO holding one PNG-compressed frame per entry of [`ICON_SIZES`].
pub fn convert_to_ico(input_path: &Path, output_path: &Path) -> Result<()> {
    let image = open_image(input_path)?;

    let frames = ICON_SIZES
        .par_iter()
        .map(|&size| render_frame(&image, size))
        .collect::<Result<Vec<_>>>()?;
    debug!("rendered {} icon frames", frames.len());

    let file = File::create(output_path)
        .with_context(|| format!("could not create {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    IcoEncoder::new(&mut writer)
        .encode_images(&frames)
        .with_context(|| format!("could not write {}", output_path.display()))?;
    writer.flush()?;
    Ok(())
}
