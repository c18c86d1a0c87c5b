//! CPU rasterization of a [`Frame`] with tiny-skia.
//!
//! Every primitive except text is painted. Text is left to the caller
//! (the window title carries the HUD line).

use std::path::{Path, PathBuf};

use thiserror::Error;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};
use tracing::info;

use crate::frame::{Color, Frame, Primitive, Rect};

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("cannot allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },
    #[error("failed to write snapshot {}: {message}", .path.display())]
    Png { path: PathBuf, message: String },
}

fn paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

fn stroke(width: f32) -> Stroke {
    Stroke {
        width,
        ..Stroke::default()
    }
}

/// Reusable RGBA canvas.
pub struct Rasterizer {
    pixmap: Pixmap,
}

impl Rasterizer {
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        let pixmap = Pixmap::new(width, height).ok_or(RasterError::Canvas { width, height })?;
        Ok(Self { pixmap })
    }

    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.pixmap.width(), self.pixmap.height())
    }

    /// Reallocate for a new surface size; a no-op when unchanged.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), RasterError> {
        if self.size() != (width, height) {
            *self = Self::new(width, height)?;
        }
        Ok(())
    }

    /// Clear to opaque black and paint `frame`. Returns the RGBA bytes.
    ///
    /// The horizon fills the whole surface, so the result is opaque and the
    /// premultiplied bytes equal straight RGBA.
    pub fn draw(&mut self, frame: &Frame) -> &[u8] {
        self.pixmap.fill(tiny_skia::Color::BLACK);
        for primitive in frame.primitives() {
            draw_primitive(&mut self.pixmap, primitive);
        }
        self.pixmap.data()
    }

    #[must_use]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

fn skia_rect(rect: &Rect) -> Option<tiny_skia::Rect> {
    if rect.w <= 0.0 || rect.h <= 0.0 {
        return None;
    }
    tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.w, rect.h)
}

fn draw_primitive(pixmap: &mut Pixmap, primitive: &Primitive) {
    let identity = Transform::identity();
    match primitive {
        Primitive::FillPolygon { points, color } => {
            let mut pb = PathBuilder::new();
            let mut iter = points.iter();
            let Some(first) = iter.next() else { return };
            pb.move_to(first.x, first.y);
            for p in iter {
                pb.line_to(p.x, p.y);
            }
            pb.close();
            if let Some(path) = pb.finish() {
                pixmap.fill_path(&path, &paint(*color), FillRule::Winding, identity, None);
            }
        }
        Primitive::FillRect { rect, color } => {
            if let Some(r) = skia_rect(rect) {
                pixmap.fill_rect(r, &paint(*color), identity, None);
            }
        }
        Primitive::StrokeRect { rect, width, color } => {
            if let Some(r) = skia_rect(rect) {
                let path = PathBuilder::from_rect(r);
                pixmap.stroke_path(&path, &paint(*color), &stroke(*width), identity, None);
            }
        }
        Primitive::Line {
            from,
            to,
            width,
            color,
        } => {
            let mut pb = PathBuilder::new();
            pb.move_to(from.x, from.y);
            pb.line_to(to.x, to.y);
            if let Some(path) = pb.finish() {
                pixmap.stroke_path(&path, &paint(*color), &stroke(*width), identity, None);
            }
        }
        Primitive::Circle {
            centre,
            radius,
            color,
        } => {
            if let Some(path) = PathBuilder::from_circle(centre.x, centre.y, *radius) {
                pixmap.fill_path(&path, &paint(*color), FillRule::Winding, identity, None);
            }
        }
        Primitive::Text { .. } => {}
    }
}

/// Rasterize `frame` at its own viewport size.
pub fn rasterize(frame: &Frame) -> Result<Pixmap, RasterError> {
    let vp = frame.viewport();
    let mut raster = Rasterizer::new(vp.width.ceil() as u32, vp.height.ceil() as u32)?;
    raster.draw(frame);
    Ok(raster.pixmap)
}

impl Frame {
    /// Rasterize and write the frame as a PNG.
    pub fn save_png(&self, path: &Path) -> Result<(), RasterError> {
        let pixmap = rasterize(self)?;
        pixmap.save_png(path).map_err(|e| RasterError::Png {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        info!("Snapshot saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Viewport;
    use glam::Vec2;

    fn pixel(pixmap: &Pixmap, x: u32, y: u32) -> [u8; 4] {
        let c = pixmap.pixel(x, y).unwrap();
        [c.red(), c.green(), c.blue(), c.alpha()]
    }

    #[test]
    fn test_zero_size_canvas_rejected() {
        assert!(matches!(
            Rasterizer::new(0, 10),
            Err(RasterError::Canvas {
                width: 0,
                height: 10
            })
        ));
    }

    #[test]
    fn test_fill_rect_and_circle() {
        let mut frame = Frame::new(Viewport::new(40, 40));
        frame.push(Primitive::FillRect {
            rect: Rect::new(0.0, 0.0, 20.0, 40.0),
            color: Color::hex(0xff0000),
        });
        frame.push(Primitive::Circle {
            centre: Vec2::new(30.0, 30.0),
            radius: 5.0,
            color: Color::hex(0x00ff00),
        });
        let pixmap = rasterize(&frame).unwrap();

        assert_eq!(pixel(&pixmap, 5, 5), [255, 0, 0, 255]);
        assert_eq!(pixel(&pixmap, 30, 30), [0, 255, 0, 255]);
        assert_eq!(pixel(&pixmap, 35, 5), [0, 0, 0, 255]);
    }

    #[test]
    fn test_text_and_degenerate_shapes_are_skipped() {
        let mut frame = Frame::new(Viewport::new(8, 8));
        frame.text(Vec2::new(1.0, 1.0), "ignored", 12.0, Color::hex(0xffffff));
        frame.push(Primitive::FillPolygon {
            points: Vec::new(),
            color: Color::hex(0xffffff),
        });
        frame.push(Primitive::FillRect {
            rect: Rect::new(0.0, 0.0, 0.0, 0.0),
            color: Color::hex(0xffffff),
        });
        let pixmap = rasterize(&frame).unwrap();
        assert!(pixmap.data().chunks(4).all(|px| px == [0, 0, 0, 255]));
    }

    #[test]
    fn test_resize_reallocates() {
        let mut raster = Rasterizer::new(4, 4).unwrap();
        raster.resize(16, 9).unwrap();
        assert_eq!(raster.size(), (16, 9));
        let frame = Frame::new(Viewport::new(16, 9));
        assert_eq!(raster.draw(&frame).len(), 16 * 9 * 4);
    }

    #[test]
    fn test_save_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.png");
        let mut frame = Frame::new(Viewport::new(32, 24));
        frame.push(Primitive::FillRect {
            rect: Rect::new(0.0, 0.0, 32.0, 24.0),
            color: Color::hex(0x1f4b99),
        });
        frame.save_png(&path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn test_save_png_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("snapshot.png");
        let frame = Frame::new(Viewport::new(4, 4));
        assert!(matches!(frame.save_png(&path), Err(RasterError::Png { .. })));
    }
}
