//! Screen-space draw list.
//!
//! A [`Frame`] is an ordered list of [`Primitive`]s in pixel coordinates,
//! origin top-left, y down. Later primitives paint over earlier ones.

use glam::Vec2;

/// Straight (non-premultiplied) RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// `alpha` in `[0, 1]`.
    #[must_use]
    pub fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { r, g, b, a }
    }

    /// `0xRRGGBB`, fully opaque.
    #[must_use]
    pub const fn hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }
}

/// Drawing surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }

    #[must_use]
    pub fn centre(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Axis-aligned screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[must_use]
    pub fn centre(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    Centre,
}

/// One drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    FillPolygon {
        points: Vec<Vec2>,
        color: Color,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        width: f32,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    Circle {
        centre: Vec2,
        radius: f32,
        color: Color,
    },
    /// `position` is the baseline anchor.
    Text {
        position: Vec2,
        text: String,
        size: f32,
        align: TextAlign,
        color: Color,
    },
}

/// A composed frame, ready for any backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    viewport: Viewport,
    primitives: Vec<Primitive>,
}

impl Frame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            primitives: Vec::new(),
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.push(Primitive::Line {
            from,
            to,
            width,
            color,
        });
    }

    pub fn text(&mut self, position: Vec2, text: impl Into<String>, size: f32, color: Color) {
        self.push(Primitive::Text {
            position,
            text: text.into(),
            size,
            align: TextAlign::Start,
            color,
        });
    }

    #[must_use]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Every text string in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_constructors() {
        assert_eq!(Color::hex(0x1f4b99), Color::rgb(0x1f, 0x4b, 0x99));
        assert_eq!(Color::rgba(3, 7, 18, 0.75).a, 191);
        assert_eq!(Color::rgba(0, 0, 0, 2.0).a, 255);
    }

    #[test]
    fn test_texts_in_order() {
        let mut frame = Frame::new(Viewport::new(100, 100));
        frame.text(Vec2::ZERO, "first", 12.0, Color::hex(0xffffff));
        frame.line(Vec2::ZERO, Vec2::ONE, 1.0, Color::hex(0));
        frame.text(Vec2::ONE, "second", 12.0, Color::hex(0xffffff));
        assert_eq!(frame.texts().collect::<Vec<_>>(), ["first", "second"]);
        assert_eq!(frame.len(), 3);
    }

    #[test]
    fn test_viewport_centre() {
        let vp = Viewport::new(1280, 720);
        assert_eq!(vp.centre(), Vec2::new(640.0, 360.0));
        assert_eq!(Rect::new(30.0, 490.0, 310.0, 190.0).centre(), Vec2::new(185.0, 585.0));
    }
}
