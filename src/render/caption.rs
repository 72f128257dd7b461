//! Single-line caption typesetting onto an RGBA canvas

use image::{Rgba, RgbaImage};
use rusttype::{point, Font, PositionedGlyph, Scale};

use crate::color::Color;
use crate::layout::Rect;

/// Measured extent of one line of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtent {
    /// Advance width of the whole line
    pub width: f32,
    /// Ascent to descent
    pub height: f32,
    /// Distance from the top of the line to the baseline
    pub ascent: f32,
}

/// Lay out `text` with its line top at `(x, y)`
fn layout_line(font: &Font<'static>, px: f32, x: f32, y: f32, text: &str) -> Vec<PositionedGlyph<'static>> {
    let scale = Scale::uniform(px);
    let ascent = font.v_metrics(scale).ascent;
    font.layout(text, scale, point(x, y + ascent)).collect()
}

/// Measure `text` at `px` pixels
pub fn measure(font: &Font<'static>, px: f32, text: &str) -> TextExtent {
    let v_metrics = font.v_metrics(Scale::uniform(px));

    let width = layout_line(font, px, 0.0, 0.0, text)
        .iter()
        .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
        .fold(0.0_f32, f32::max);

    TextExtent {
        width,
        height: (v_metrics.ascent - v_metrics.descent).max(1.0),
        ascent: v_metrics.ascent,
    }
}

/// Draw `text` with its line top-left at `(x, y)`
///
/// Glyph coverage is blended over the canvas; anything outside the canvas is
/// clipped. No wrapping happens here.
pub fn draw_line(canvas: &mut RgbaImage, font: &Font<'static>, px: f32, x: f32, y: f32, color: Color, text: &str) {
    let (width, height) = canvas.dimensions();
    let color = color.rgba_pixel();

    for glyph in layout_line(font, px, x, y, text) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let cx = gx as i32 + bb.min.x;
            let cy = gy as i32 + bb.min.y;
            if cx < 0 || cy < 0 || cx as u32 >= width || cy as u32 >= height {
                return;
            }
            blend(canvas.get_pixel_mut(cx as u32, cy as u32), color, coverage);
        });
    }
}

/// Draw `text` horizontally centered in `band`, line top at the band's
/// mid-height
pub fn draw_in_band(canvas: &mut RgbaImage, font: &Font<'static>, px: f32, band: Rect, color: Color, text: &str) {
    let extent = measure(font, px, text);
    let x = band.mid_x() as f32 - extent.width / 2.0;
    let y = band.mid_y() as f32;
    draw_line(canvas, font, px, x, y, color, text);
}

/// Source-over blend of `color` scaled by glyph `coverage`
fn blend(dst: &mut Rgba<u8>, color: Rgba<u8>, coverage: f32) {
    let alpha = coverage.clamp(0.0, 1.0) * color.0[3] as f32 / 255.0;
    if alpha <= 0.0 {
        return;
    }
    let inv = 1.0 - alpha;
    for c in 0..3 {
        dst.0[c] = (color.0[c] as f32 * alpha + dst.0[c] as f32 * inv).round() as u8;
    }
    dst.0[3] = (255.0 * alpha + dst.0[3] as f32 * inv).round() as u8;
}
