use crate::core::glyph;
use crate::core::{Result, Storage};
use image::{Rgb, RgbImage};
use std::io::Cursor;

/// Square sizes Chrome expects under the manifest's icons key.
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

pub const GRADIENT_TOP: Rgb<u8> = Rgb([102, 126, 234]);
pub const GRADIENT_BOTTOM: Rgb<u8> = Rgb([118, 75, 162]);

/// Colour of one gradient row. Interpolation runs top to bottom over the
/// full canvas height, truncating each channel to an integer.
pub fn gradient_at(y: u32, size: u32) -> Rgb<u8> {
    let mut channels = [0u8; 3];
    for c in 0..3 {
        let top = GRADIENT_TOP.0[c] as f32;
        let bottom = GRADIENT_BOTTOM.0[c] as f32;
        channels[c] = (top + (bottom - top) * y as f32 / size as f32) as u8;
    }
    Rgb(channels)
}

/// Renders one square icon: solid base, vertical gradient, centered glyph.
pub fn render_icon(size: u32) -> RgbImage {
    let mut icon = RgbImage::from_pixel(size, size, Rgb([255, 255, 255]));

    for y in 0..size {
        let row = gradient_at(y, size);
        for x in 0..size {
            icon.put_pixel(x, y, row);
        }
    }

    glyph::draw_glyph(&mut icon);
    icon
}

/// Renders every icon size and writes the encoded PNGs through the storage
/// port. Existing files are overwritten.
pub fn generate_all<S: Storage>(storage: &S) -> Result<Vec<String>> {
    let mut written = Vec::new();

    for &size in ICON_SIZES.iter() {
        let filename = format!("icon{}.png", size);
        let rel_path = format!("icons/{}", filename);

        println!("Creating {} ({}x{})...", filename, size, size);
        let icon = render_icon(size);

        let mut encoded = Vec::new();
        icon.write_to(&mut Cursor::new(&mut encoded), image::ImageFormat::Png)?;
        storage.write_file(&rel_path, &encoded)?;

        println!("✓ Saved to {}", rel_path);
        written.push(rel_path);
    }

    Ok(written)
}
