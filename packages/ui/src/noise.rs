//! Film grain laid over the page.

use std::time::Duration;

use dioxus::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::animation::{use_canvas_animation, Animation};
use crate::surface::{Surface, Viewport};

const NOISE_CANVAS_ID: &str = "noise_overlay";

#[derive(Debug, Clone, PartialEq)]
pub struct NoiseConfig {
    /// Side of the square grain tile in pixels; CSS stretches it over the viewport.
    pub pattern_size: u32,
    /// Redraw the grain every this many frames.
    pub refresh_every: u32,
    /// Alpha of every grain pixel, 0-255.
    pub alpha: u8,
    pub interval: Duration,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            pattern_size: 250,
            refresh_every: 2,
            alpha: 15,
            interval: Duration::from_millis(16),
        }
    }
}

/// RGBA buffer of random grey pixels with a fixed alpha.
pub fn grain_pixels<R: Rng>(rng: &mut R, size: u32, alpha: u8) -> Vec<u8> {
    let count = size as usize * size as usize;
    let mut pixels = Vec::with_capacity(count * 4);
    for _ in 0..count {
        let grey: u8 = rng.gen();
        pixels.extend_from_slice(&[grey, grey, grey, alpha]);
    }
    pixels
}

pub struct Grain<R = StdRng> {
    config: NoiseConfig,
    frame: u64,
    rng: R,
}

impl Grain<StdRng> {
    pub fn from_entropy(config: NoiseConfig) -> Self {
        Self::new(config, StdRng::from_entropy())
    }
}

impl<R: Rng> Grain<R> {
    pub fn new(config: NoiseConfig, rng: R) -> Self {
        Self {
            config,
            frame: 0,
            rng,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frame
    }
}

impl<R: Rng> Animation for Grain<R> {
    fn resize(&mut self, _viewport: Viewport, surface: &mut dyn Surface) {
        let size = self.config.pattern_size;
        if surface.size() != (size, size) {
            surface.set_size(size, size);
        }
    }

    fn frame(&mut self, surface: &mut dyn Surface) {
        let refresh = u64::from(self.config.refresh_every.max(1));
        if self.frame % refresh == 0 {
            let size = self.config.pattern_size;
            let pixels = grain_pixels(&mut self.rng, size, self.config.alpha);
            surface.put_rgba(&pixels, size, size);
        }
        self.frame += 1;
    }
}

/// Grain canvas stretched over the viewport; ignores pointer events.
#[component]
pub fn NoiseOverlay(#[props(default)] config: NoiseConfig) -> Element {
    let interval = config.interval;
    use_canvas_animation(NOISE_CANVAS_ID, interval, move || Grain::from_entropy(config));

    rsx! {
        canvas { id: NOISE_CANVAS_ID, class: "noise_overlay" }
    }
}
