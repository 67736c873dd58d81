//! Headless helpers for exercising the animations without a browser.

use crate::surface::Surface;

#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    Fill(String),
    Font(String),
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Text { text: String, x: f64, y: f64 },
    Pixels { len: usize, width: u32, height: u32 },
}

/// A [`Surface`] that records every paint call.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    pub ops: Vec<PaintOp>,
    pub last_pixels: Vec<u8>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint calls that actually put something on screen.
    pub fn paint_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| {
                matches!(
                    op,
                    PaintOp::Rect { .. } | PaintOp::Text { .. } | PaintOp::Pixels { .. }
                )
            })
            .count()
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, f64, f64)> {
        self.ops.iter().filter_map(|op| match op {
            PaintOp::Text { text, x, y } => Some((text.as_str(), *x, *y)),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_fill(&mut self, style: &str) {
        self.ops.push(PaintOp::Fill(style.to_string()));
    }

    fn set_font(&mut self, font: &str) {
        self.ops.push(PaintOp::Font(font.to_string()));
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(PaintOp::Rect { x, y, width, height });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(PaintOp::Text {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn put_rgba(&mut self, pixels: &[u8], width: u32, height: u32) {
        self.last_pixels = pixels.to_vec();
        self.ops.push(PaintOp::Pixels {
            len: pixels.len(),
            width,
            height,
        });
    }
}
