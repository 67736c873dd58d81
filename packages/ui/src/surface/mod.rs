//! Drawing boundary shared by the background animations.
//!
//! The animations only talk to [`Surface`]; the browser canvas is one
//! implementation, [`crate::test_utils::RecordingSurface`] another.

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
pub use canvas::{CanvasSurface, ResizeListener};

/// Pixel size of the browser viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Inner size of the current window.
    #[cfg(target_arch = "wasm32")]
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some(Self::new(width.max(0.0) as u32, height.max(0.0) as u32))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn current() -> Option<Self> {
        None
    }
}

/// The subset of the 2D canvas API the animations paint with.
pub trait Surface {
    /// Resize the backing pixel buffer. Implementations may clear it.
    fn set_size(&mut self, width: u32, height: u32);
    fn size(&self) -> (u32, u32);
    fn set_fill(&mut self, style: &str);
    fn set_font(&mut self, font: &str);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
    /// Replace the top-left `width`x`height` region with RGBA pixels.
    fn put_rgba(&mut self, pixels: &[u8], width: u32, height: u32);
}

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("no browser window")]
    NoWindow,
    #[error("no element with id `{0}`")]
    MissingCanvas(String),
    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),
    #[error("2d context unavailable")]
    NoContext,
    #[error("canvas drawing is not supported on this platform")]
    Unsupported,
}

#[cfg(target_arch = "wasm32")]
pub type PlatformCanvas = CanvasSurface;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformCanvas = NoCanvas;

/// Bind the `<canvas>` with the given id.
#[cfg(target_arch = "wasm32")]
pub fn attach_canvas(id: &str) -> Result<PlatformCanvas, SurfaceError> {
    CanvasSurface::attach(id)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn attach_canvas(id: &str) -> Result<PlatformCanvas, SurfaceError> {
    let _ = id;
    Err(SurfaceError::Unsupported)
}

/// Native stand-in for the canvas. [`attach_canvas`] never hands one out.
#[cfg(not(target_arch = "wasm32"))]
pub struct NoCanvas(());

#[cfg(not(target_arch = "wasm32"))]
impl Surface for NoCanvas {
    fn set_size(&mut self, _: u32, _: u32) {}
    fn size(&self) -> (u32, u32) {
        (0, 0)
    }
    fn set_fill(&mut self, _: &str) {}
    fn set_font(&mut self, _: &str) {}
    fn fill_rect(&mut self, _: f64, _: f64, _: f64, _: f64) {}
    fn fill_text(&mut self, _: &str, _: f64, _: f64) {}
    fn put_rgba(&mut self, _: &[u8], _: u32, _: u32) {}
}

/// Native stand-in for the window resize listener.
#[cfg(not(target_arch = "wasm32"))]
pub struct ResizeListener;

#[cfg(not(target_arch = "wasm32"))]
impl ResizeListener {
    pub fn attach(_on_resize: impl FnMut(Viewport) + 'static) -> Option<Self> {
        None
    }
}
