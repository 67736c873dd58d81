use dioxus::prelude::*;

use views::{Home, NotFound};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    install_panic_hook();
    log_runtime_config();
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}

fn log_runtime_config() {
    let rain = ui::RainConfig::default();
    let noise = ui::NoiseConfig::default();
    tracing::info!(
        glyph_size = rain.glyph_size,
        interval_ms = rain.interval.as_millis() as u64,
        resize_policy = ?rain.resize_policy,
        "startup: rain"
    );
    tracing::info!(
        pattern_size = noise.pattern_size,
        refresh_every = noise.refresh_every,
        alpha = noise.alpha,
        "startup: noise"
    );
    match ui::preferred_locale() {
        Some(locale) => tracing::info!(%locale, "startup: reported locale"),
        None => tracing::info!("startup: no reported locale, defaulting to en"),
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::TerminalTheme {}
        ui::I18nProvider {
            Router::<Route> {}
        }
    }
}
