//! This crate contains all shared UI for the workspace.

mod i18n;
pub use i18n::{set_lang, use_lang, I18nProvider, Lang, Translation, CONTACT_EMAIL};

pub mod preference;
pub use preference::{preferred_locale, KeyValueStore, MemoryStore, PreferenceStore};

pub mod surface;
pub use surface::{Surface, SurfaceError, Viewport};

pub mod animation;
pub use animation::{use_canvas_animation, Animation, AnimationLoop, LoopState};

mod rain;
pub use rain::{MatrixRain, Rain, RainConfig, ResizePolicy};

mod noise;
pub use noise::{grain_pixels, Grain, NoiseConfig, NoiseOverlay};

mod theme;
pub use theme::TerminalTheme;

mod landing;
pub use landing::{IdentityCard, LanguageSelect, Landing};

pub mod test_utils;
