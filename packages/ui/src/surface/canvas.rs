use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

use super::{Surface, SurfaceError, Viewport};

/// A `<canvas>` element and its 2d context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn attach(id: &str) -> Result<Self, SurfaceError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(SurfaceError::NoWindow)?;
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| SurfaceError::MissingCanvas(id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SurfaceError::NotACanvas(id.to_string()))?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(SurfaceError::NoContext)?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn set_fill(&mut self, style: &str) {
        self.ctx.set_fill_style_str(style);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.fill_rect(x, y, width, height);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        // Failure here only loses one glyph of one frame.
        let _ = self.ctx.fill_text(text, x, y);
    }

    fn put_rgba(&mut self, pixels: &[u8], width: u32, height: u32) {
        let image = ImageData::new_with_u8_clamped_array_and_sh(Clamped(pixels), width, height);
        match image {
            Ok(image) => {
                let _ = self.ctx.put_image_data(&image, 0.0, 0.0);
            }
            Err(_) => tracing::debug!(width, height, "surface: rejected pixel buffer"),
        }
    }
}

/// Window `resize` listener, removed on drop.
pub struct ResizeListener {
    callback: Closure<dyn FnMut()>,
}

impl ResizeListener {
    pub fn attach(mut on_resize: impl FnMut(Viewport) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Some(viewport) = Viewport::current() {
                on_resize(viewport);
            }
        });
        window
            .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { callback })
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref());
        }
    }
}
