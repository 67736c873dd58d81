use dioxus::prelude::*;
use ui::Landing;

/// Unknown paths still get the landing page.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    use_hook(move || tracing::debug!(%path, "router: unknown path, serving landing"));

    rsx! {
        Landing {}
    }
}
