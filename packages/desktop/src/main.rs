use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    // The webview has no wasm canvas; the page renders without animations.
    tracing::info!(
        locale = ?ui::preferred_locale(),
        "startup: desktop shell, background animations disabled"
    );
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::TerminalTheme {}
        ui::I18nProvider {
            ui::Landing {}
        }
    }
}
