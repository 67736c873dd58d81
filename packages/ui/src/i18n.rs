use dioxus::prelude::*;

use crate::preference::PreferenceStore;

/// Address shown on the identity card in every language.
pub const CONTACT_EMAIL: &str = "404builder@proton.me";

/// Supported languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Lang {
    #[default]
    En,
    Es,
}

impl Lang {
    /// Selector order.
    pub const ALL: [Lang; 2] = [Lang::Es, Lang::En];

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
        }
    }

    /// Parse a stored language code. Only the two codes we write are accepted.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Lang::En),
            "es" => Some(Lang::Es),
            _ => None,
        }
    }

    /// Map a reported locale (`es-PY`, `es_ES.UTF-8`, `fr-FR`, ...) to a language.
    pub fn from_locale(locale: &str) -> Self {
        if locale.trim().to_ascii_lowercase().starts_with("es") {
            Lang::Es
        } else {
            Lang::En
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Lang::En => "🌐 English",
            Lang::Es => "🌐 Español",
        }
    }

    pub fn translation(self) -> &'static Translation {
        match self {
            Lang::En => &EN,
            Lang::Es => &ES,
        }
    }
}

/// Display strings for one language.
#[derive(Debug, PartialEq, Eq)]
pub struct Translation {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub contact: &'static str,
}

const TAGS: &[&str] = &["# Red Team", "# Pentester", "# Reverser"];

static EN: Translation = Translation {
    title: "404builder",
    subtitle: None,
    description: "Not everything that works is truly well built.",
    tags: TAGS,
    contact: "Contact",
};

static ES: Translation = Translation {
    title: "404builder",
    subtitle: None,
    description: "No todo lo que funciona está realmente bien hecho.",
    tags: TAGS,
    contact: "Contacto",
};

/// Resolve the language once and provide `Signal<Lang>` to the component tree.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let lang = use_signal(|| {
        let lang = PreferenceStore::platform().load(crate::preferred_locale().as_deref());
        tracing::debug!(lang = lang.code(), "i18n: resolved startup language");
        lang
    });
    use_context_provider(|| lang);

    rsx! { {children} }
}

pub fn use_lang() -> Signal<Lang> {
    if let Some(sig) = try_use_context::<Signal<Lang>>() {
        return sig;
    }

    // Fallback for mis-ordered providers to avoid panics in production.
    tracing::warn!("i18n: missing I18nProvider context, using local Lang::En signal");
    use_signal(Lang::default)
}

/// Switch the active language and persist the choice.
pub fn set_lang(mut signal: Signal<Lang>, lang: Lang) {
    signal.set(lang);
    PreferenceStore::platform().save(lang);
}
