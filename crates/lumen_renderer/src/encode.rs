//! Image encoding: sRGB tone mapping and file output.

use crate::{Color, ImageBuffer, RenderResult};
use image::{Rgb, RgbImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Linear to sRGB transfer function (IEC 61966-2-1).
#[inline]
pub fn linear_to_srgb(x: f64) -> f64 {
    if x < 0.003_130_8 {
        x * 12.92
    } else {
        1.055 * x.powf(1.0 / 2.4) - 0.055
    }
}

/// Encode one linear channel in [0, 1] as an 8-bit sRGB value.
#[inline]
fn encode_channel(x: f64) -> u8 {
    // `as` saturates, so stray values outside [0, 1] land on 0 or 255
    (linear_to_srgb(x) * 255.0 + 0.5) as u8
}

/// Convert a linear color to an 8-bit sRGB triple.
pub fn to_rgb(color: Color) -> Rgb<u8> {
    Rgb([
        encode_channel(color.x),
        encode_channel(color.y),
        encode_channel(color.z),
    ])
}

/// Rec. 709 relative luminance of a linear color.
pub fn luminance(color: Color) -> f64 {
    0.2126 * color.x + 0.7152 * color.y + 0.0722 * color.z
}

/// Write `image` as an ASCII "P3" pixmap, top row first, one triplet per line.
pub fn write_ppm<W: Write>(image: &ImageBuffer, mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for color in &image.pixels {
        let Rgb([r, g, b]) = to_rgb(*color);
        writeln!(writer, "{} {} {}", r, g, b)?;
    }

    writer.flush()
}

/// Convert to an 8-bit sRGB image.
pub fn to_rgb_image(image: &ImageBuffer) -> RgbImage {
    RgbImage::from_fn(image.width, image.height, |x, y| to_rgb(image.get(x, y)))
}

/// Save `image` to `path`.
///
/// `.ppm` (or no extension) writes the ASCII pixmap; anything else is
/// handed to the `image` crate, which picks the format from the extension.
pub fn save(image: &ImageBuffer, path: impl AsRef<Path>) -> RenderResult<()> {
    let path = path.as_ref();
    let is_ppm = path
        .extension()
        .map_or(true, |ext| ext.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        let file = File::create(path)?;
        write_ppm(image, BufWriter::new(file))?;
    } else {
        to_rgb_image(image).save(path)?;
    }

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}
