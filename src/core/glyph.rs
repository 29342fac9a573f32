use crate::core::GlyphStrategy;
use ab_glyph::{Font, FontVec, PxScale};
use image::{Rgb, RgbImage};
use std::path::PathBuf;

pub const BOLT_CHAR: char = '⚡';
const BOLT_SCALE: f32 = 0.6;
const LETTER_CHAR: char = 'L';
const LETTER_SCALE: f32 = 0.5;

/// Draws one character from a font file, centered on the canvas. Fails when
/// no candidate file loads, the font has no outline for the character, or
/// the character maps to the font's notdef glyph.
pub struct FontGlyph {
    label: &'static str,
    candidates: Vec<PathBuf>,
    glyph: char,
    scale: f32,
}

impl FontGlyph {
    pub fn new(label: &'static str, candidates: Vec<PathBuf>, glyph: char, scale: f32) -> Self {
        Self {
            label,
            candidates,
            glyph,
            scale,
        }
    }

    fn load_font(&self) -> Option<FontVec> {
        for candidate in &self.candidates {
            let data = match std::fs::read(candidate) {
                Ok(data) => data,
                Err(_) => continue,
            };

            // Index 0 covers both plain .ttf files and .ttc collections.
            match FontVec::try_from_vec_and_index(data, 0) {
                Ok(font) => {
                    tracing::debug!("Loaded font {}", candidate.display());
                    return Some(font);
                }
                Err(_) => continue,
            }
        }
        None
    }
}

impl GlyphStrategy for FontGlyph {
    fn label(&self) -> &str {
        self.label
    }

    fn draw(&self, canvas: &mut RgbImage) -> bool {
        let font = match self.load_font() {
            Some(font) => font,
            None => return false,
        };

        let size = canvas.width();
        let glyph_id = font.glyph_id(self.glyph);
        // Id 0 is the notdef box.
        if glyph_id.0 == 0 {
            return false;
        }

        let scale = PxScale::from(size as f32 * self.scale);
        let glyph = glyph_id.with_scale_and_position(scale, ab_glyph::point(0.0, 0.0));
        let outlined = match font.outline_glyph(glyph) {
            Some(outlined) => outlined,
            None => return false,
        };

        let bounds = outlined.px_bounds();
        let left = ((size as f32 - bounds.width()) / 2.0).round() as i32;
        let top = ((size as f32 - bounds.height()) / 2.0).round() as i32;

        outlined.draw(|gx, gy, coverage| {
            let x = left + gx as i32;
            let y = top + gy as i32;
            if coverage > 0.0 && x >= 0 && y >= 0 && (x as u32) < size && (y as u32) < size {
                let pixel = canvas.get_pixel_mut(x as u32, y as u32);
                for c in 0..3 {
                    let base = pixel.0[c] as f32;
                    pixel.0[c] = (base + (255.0 - base) * coverage).round() as u8;
                }
            }
        });

        true
    }
}

/// Terminal stage: a white block letter L built from two bars. Needs no
/// font at all, so it always draws.
pub struct BlockLetter;

impl GlyphStrategy for BlockLetter {
    fn label(&self) -> &str {
        "block letter"
    }

    fn draw(&self, canvas: &mut RgbImage) -> bool {
        let size = canvas.width();
        let height = (size / 2).max(3).min(size);
        let width = (size * 7 / 20).max(2).min(size);
        let stroke = (size / 8).max(1).min(height);
        let x0 = (size - width) / 2;
        let y0 = (size - height) / 2;
        let ink = Rgb([255u8, 255, 255]);

        for y in y0..y0 + height {
            for x in x0..x0 + stroke {
                canvas.put_pixel(x, y, ink);
            }
        }
        for y in (y0 + height - stroke)..(y0 + height) {
            for x in x0..x0 + width {
                canvas.put_pixel(x, y, ink);
            }
        }

        true
    }
}

/// Strategy order follows platform font availability: Windows emoji font,
/// macOS emoji font, widely installed outline fonts with a plain letter,
/// then the drawn block letter.
pub fn default_strategies() -> Vec<Box<dyn GlyphStrategy>> {
    vec![
        Box::new(FontGlyph::new(
            "windows emoji font",
            vec![
                PathBuf::from("C:\\Windows\\Fonts\\seguiemj.ttf"),
                PathBuf::from("seguiemj.ttf"),
            ],
            BOLT_CHAR,
            BOLT_SCALE,
        )),
        Box::new(FontGlyph::new(
            "macos emoji font",
            vec![
                PathBuf::from("/System/Library/Fonts/Apple Color Emoji.ttc"),
                PathBuf::from("AppleColorEmoji.ttc"),
            ],
            BOLT_CHAR,
            BOLT_SCALE,
        )),
        Box::new(FontGlyph::new(
            "generic font",
            vec![
                PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
                PathBuf::from("/usr/share/fonts/TTF/DejaVuSans.ttf"),
                PathBuf::from("/Library/Fonts/Arial.ttf"),
                PathBuf::from("C:\\Windows\\Fonts\\arial.ttf"),
                PathBuf::from("arial.ttf"),
            ],
            LETTER_CHAR,
            LETTER_SCALE,
        )),
        Box::new(BlockLetter),
    ]
}

pub fn draw_glyph(canvas: &mut RgbImage) {
    draw_glyph_with(canvas, &default_strategies());
}

/// Walks the chain until one strategy draws. Every canvas leaves this
/// function with ink on it.
pub fn draw_glyph_with(canvas: &mut RgbImage, strategies: &[Box<dyn GlyphStrategy>]) {
    for strategy in strategies {
        if strategy.draw(canvas) {
            tracing::debug!("Glyph drawn with {}", strategy.label());
            return;
        }
    }
    BlockLetter.draw(canvas);
}
