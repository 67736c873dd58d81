//! Falling binary digits behind the landing card.
//!
//! Each column keeps a drop position in glyph units. Every frame the
//! whole surface is dimmed slightly, one glyph is painted at each drop,
//! and the drop moves down a row. Once a drop leaves the bottom edge it
//! restarts from the top with a small probability per frame, so columns
//! desynchronise on their own.

use std::time::Duration;

use dioxus::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::animation::{use_canvas_animation, Animation};
use crate::surface::{Surface, Viewport};

const RAIN_CANVAS_ID: &str = "matrix_rain";

/// What to do with the drop columns when the viewport changes size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizePolicy {
    /// Match the column count to the new width. Surviving columns keep their drop.
    #[default]
    Recompute,
    /// Keep the columns computed at start, whatever the new width.
    KeepColumns,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RainConfig {
    /// Cell size in pixels, both axes.
    pub glyph_size: u32,
    pub interval: Duration,
    pub alphabet: Vec<char>,
    /// Painted over the whole surface each frame; low alpha leaves trails.
    pub fade: String,
    pub ink: String,
    /// A drop past the bottom edge restarts when a uniform draw exceeds this.
    pub reset_threshold: f64,
    pub initial_drop: u32,
    pub resize_policy: ResizePolicy,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            glyph_size: 14,
            interval: Duration::from_millis(33),
            alphabet: vec!['0', '1'],
            fade: "rgba(0, 0, 0, 0.05)".to_string(),
            ink: "#0f0".to_string(),
            reset_threshold: 0.975,
            initial_drop: 1,
            resize_policy: ResizePolicy::Recompute,
        }
    }
}

impl RainConfig {
    pub fn font(&self) -> String {
        format!("{}px monospace", self.glyph_size)
    }

    /// Columns that fit in `width` pixels.
    pub fn columns_for(&self, width: u32) -> usize {
        if self.glyph_size == 0 {
            return 0;
        }
        (width / self.glyph_size) as usize
    }
}

/// The rain animation state.
pub struct Rain<R = StdRng> {
    config: RainConfig,
    font: String,
    drops: Vec<u32>,
    laid_out: bool,
    rng: R,
}

impl Rain<StdRng> {
    pub fn from_entropy(config: RainConfig) -> Self {
        Self::new(config, StdRng::from_entropy())
    }
}

impl<R: Rng> Rain<R> {
    pub fn new(config: RainConfig, rng: R) -> Self {
        let font = config.font();
        Self {
            config,
            font,
            drops: Vec::new(),
            laid_out: false,
            rng,
        }
    }

    pub fn drops(&self) -> &[u32] {
        &self.drops
    }

    fn pick_glyph(&mut self) -> char {
        let alphabet = &self.config.alphabet;
        if alphabet.is_empty() {
            return ' ';
        }
        alphabet[self.rng.gen_range(0..alphabet.len())]
    }
}

impl<R: Rng> Animation for Rain<R> {
    fn resize(&mut self, viewport: Viewport, surface: &mut dyn Surface) {
        surface.set_size(viewport.width, viewport.height);

        let columns = self.config.columns_for(viewport.width);
        if !self.laid_out || self.config.resize_policy == ResizePolicy::Recompute {
            self.drops.resize(columns, self.config.initial_drop);
            self.laid_out = true;
        }
    }

    fn frame(&mut self, surface: &mut dyn Surface) {
        let (width, height) = surface.size();
        let glyph = f64::from(self.config.glyph_size);

        surface.set_fill(&self.config.fade);
        surface.fill_rect(0.0, 0.0, f64::from(width), f64::from(height));
        surface.set_fill(&self.config.ink);
        surface.set_font(&self.font);

        let mut buf = [0u8; 4];
        for i in 0..self.drops.len() {
            let text = self.pick_glyph().encode_utf8(&mut buf);
            let y = f64::from(self.drops[i]) * glyph;
            surface.fill_text(text, i as f64 * glyph, y);

            if y > f64::from(height) && self.rng.gen::<f64>() > self.config.reset_threshold {
                self.drops[i] = 0;
            }
            self.drops[i] += 1;
        }
    }
}

/// Full-viewport canvas showing the rain.
#[component]
pub fn MatrixRain(#[props(default)] config: RainConfig) -> Element {
    let interval = config.interval;
    use_canvas_animation(RAIN_CANVAS_ID, interval, move || Rain::from_entropy(config));

    rsx! {
        canvas { id: RAIN_CANVAS_ID, class: "matrix_rain" }
    }
}
