use dioxus::prelude::*;

use crate::{set_lang, use_lang, Lang, MatrixRain, NoiseOverlay, CONTACT_EMAIL};

const LANDING_CSS: Asset = asset!("/assets/styling/landing.css");

/// The whole page: rain behind, grain on top, card in the middle.
#[component]
pub fn Landing() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: LANDING_CSS }

        MatrixRain {}
        LanguageSelect {}
        main { class: "landing",
            IdentityCard {}
        }
        NoiseOverlay {}
    }
}

#[component]
pub fn IdentityCard() -> Element {
    let t = use_lang()().translation();
    let mailto = format!("mailto:{CONTACT_EMAIL}");

    rsx! {
        div { class: "identity_card",
            h1 { class: "identity_title", {t.title} }
            if let Some(subtitle) = t.subtitle {
                h2 { class: "identity_subtitle", {subtitle} }
            }
            p { class: "identity_description", {t.description} }

            div { class: "identity_tags",
                for tag in t.tags.iter() {
                    span { key: "{tag}", class: "identity_tag", {*tag} }
                }
            }

            div { class: "identity_contact",
                p {
                    {t.contact}
                    ": "
                    a { href: "{mailto}", {CONTACT_EMAIL} }
                }
            }
        }
    }
}

/// Fixed top-right language picker.
#[component]
pub fn LanguageSelect() -> Element {
    let lang = use_lang();
    let current = lang();

    rsx! {
        select {
            class: "language_select",
            value: current.code(),
            onchange: move |evt: FormEvent| {
                match Lang::from_code(&evt.value()) {
                    Some(next) => set_lang(lang, next),
                    None => tracing::warn!(value = %evt.value(), "i18n: unknown language selected"),
                }
            },
            for option_lang in Lang::ALL {
                option {
                    value: option_lang.code(),
                    selected: option_lang == current,
                    {option_lang.label()}
                }
            }
        }
    }
}
