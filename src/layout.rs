//! Layout geometry for framed screenshots
//!
//! All layout math happens in floating point canvas coordinates (origin at
//! the top-left, y pointing down). Only the final draw step rounds a
//! [`Placement`] to whole pixels.

/// Uniform downscale applied to both bezel artwork and screenshot
pub const DEVICE_SCALE: f64 = 0.7;

/// Height of the caption band as a fraction of the canvas long edge
pub const TITLE_BAND_FRACTION: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Size of a pixel buffer
    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self::new(width as f64, height as f64)
    }

    pub fn long_edge(&self) -> f64 {
        self.width.max(self.height)
    }

    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }

    /// Width and height exchanged
    pub fn swapped(&self) -> Self {
        Self::new(self.height, self.width)
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }

    /// Whole-pixel dimensions (at least 1x1)
    pub fn to_pixels(&self) -> (u32, u32) {
        (
            self.width.round().max(1.0) as u32,
            self.height.round().max(1.0) as u32,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point { x, y },
            size: Size::new(width, height),
        }
    }

    /// Rect at the origin with the given size
    pub fn with_size(size: Size) -> Self {
        Self {
            origin: Point::default(),
            size,
        }
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    pub fn mid_x(&self) -> f64 {
        self.origin.x + self.size.width / 2.0
    }

    pub fn mid_y(&self) -> f64 {
        self.origin.y + self.size.height / 2.0
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.mid_x(),
            y: self.mid_y(),
        }
    }

    /// A rect of `size` whose center coincides with this rect's center
    pub fn centered(&self, size: Size) -> Rect {
        Rect::new(
            self.mid_x() - size.width / 2.0,
            self.mid_y() - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    pub fn offset_by(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(
            self.origin.x + dx,
            self.origin.y + dy,
            self.size.width,
            self.size.height,
        )
    }

    /// Rounded pixel rect used for drawing
    pub fn to_pixels(&self) -> PixelRect {
        let (width, height) = self.size.to_pixels();
        PixelRect {
            x: self.origin.x.round() as i64,
            y: self.origin.y.round() as i64,
            width,
            height,
        }
    }
}

/// Integer rect in canvas pixels; the origin may lie off-canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

/// Orientation applied to artwork when it is placed on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transform {
    /// Draw as-is
    #[default]
    Identity,
    /// Rotate -90° (a quarter turn counter-clockwise on screen)
    QuarterTurnCcw,
}

impl Transform {
    /// Footprint on the canvas of artwork with the given unrotated size
    pub fn apply_to_size(&self, size: Size) -> Size {
        match self {
            Transform::Identity => size,
            Transform::QuarterTurnCcw => size.swapped(),
        }
    }
}

/// Where and how one image lands on the canvas
///
/// `rect` is the footprint on the canvas after `transform` is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub rect: Rect,
    pub transform: Transform,
}

impl Placement {
    /// Scale `content` by `scale`, turn it by `transform`, center it in
    /// `canvas`, then push it down by `drop`.
    pub fn centered(canvas: Rect, content: Size, scale: f64, transform: Transform, drop: f64) -> Self {
        let footprint = transform.apply_to_size(content.scaled(scale));
        Self {
            rect: canvas.centered(footprint).offset_by(0.0, drop),
            transform,
        }
    }

    /// Size of the artwork before the transform is applied
    pub fn content_size(&self) -> Size {
        // A quarter turn is its own inverse as far as sizes go
        self.transform.apply_to_size(self.rect.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_orientation() {
        let portrait = Size::from_pixels(750, 1334);
        assert!(portrait.is_portrait());
        assert_eq!(portrait.long_edge(), 1334.0);

        let square = Size::from_pixels(100, 100);
        assert!(!square.is_portrait());
        assert_eq!(portrait.swapped(), Size::new(1334.0, 750.0));
    }

    #[test]
    fn test_centered_rect() {
        let canvas = Rect::with_size(Size::new(100.0, 200.0));
        let inner = canvas.centered(Size::new(20.0, 40.0));
        assert_eq!(inner, Rect::new(40.0, 80.0, 20.0, 40.0));
        assert_eq!(inner.center(), canvas.center());
    }

    #[test]
    fn test_pixel_rounding_keeps_negative_origin() {
        let rect = Rect::new(-10.4, 20.6, 0.2, 9.5);
        assert_eq!(
            rect.to_pixels(),
            PixelRect { x: -10, y: 21, width: 1, height: 10 }
        );
    }

    #[test]
    fn test_quarter_turn_placement() {
        let canvas = Rect::with_size(Size::new(2732.0, 2048.0));
        let placement = Placement::centered(
            canvas,
            Size::new(100.0, 200.0),
            0.5,
            Transform::QuarterTurnCcw,
            10.0,
        );

        assert_eq!(placement.rect.size, Size::new(100.0, 50.0));
        assert_eq!(placement.rect.mid_x(), canvas.mid_x());
        assert_eq!(placement.rect.mid_y(), canvas.mid_y() + 10.0);
        assert_eq!(placement.content_size(), Size::new(50.0, 100.0));
    }
}
