use std::str::FromStr;

use log::debug;
use web_sys::{window, Element, Storage};
use yew::prelude::*;

use crate::config::SiteConfig;

const DARK_CLASS: &str = "dark";

/// Stored under the theme key as the bare name, `light` or `dark`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    fn label(self) -> &'static str {
        match self {
            Theme::Light => "Ativar tema escuro",
            Theme::Dark => "Ativar tema claro",
        }
    }

    fn apply(self, root: &Element) {
        let _ = root.class_list().toggle_with_force(DARK_CLASS, self.is_dark());
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(other.to_string()),
        }
    }
}

/// Unset, unreadable or unknown values all mean the default theme.
pub fn stored_theme(raw: Option<&str>) -> Theme {
    match raw.map(str::parse::<Theme>) {
        Some(Ok(theme)) => theme,
        Some(Err(other)) => {
            debug!("ignoring stored theme `{other}`");
            Theme::default()
        }
        None => Theme::default(),
    }
}

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok()).flatten()
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let theme_key = config.theme_key;
    let theme = use_state(move || {
        let raw = local_storage().and_then(|storage| storage.get_item(theme_key).ok()).flatten();
        stored_theme(raw.as_deref())
    });

    use_effect_with_deps(
        move |theme| {
            if let Some(root) = window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                theme.apply(&root);
            }
            if let Some(storage) = local_storage() {
                if storage.set_item(theme_key, theme.as_str()).is_err() {
                    debug!("could not store theme under `{theme_key}`");
                }
            }
            || ()
        },
        *theme,
    );

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| theme.set(theme.toggled()))
    };

    html! {
        <button
            class={classes!("theme-toggle", theme.is_dark().then_some("is-dark"))}
            aria-label={theme.label()}
            title={theme.label()}
            {onclick}
        >
            <span class="theme-icon sun">{"☀"}</span>
            <span class="theme-icon moon">{"☾"}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_returns_to_the_start() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn stored_as_bare_names() {
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert_eq!(Theme::Light.as_str(), "light");
        assert_eq!(stored_theme(Some("dark")), Theme::Dark);
        assert_eq!(stored_theme(Some("light")), Theme::Light);
    }

    #[test]
    fn unknown_or_missing_values_fall_back_to_light() {
        assert_eq!(stored_theme(None), Theme::Light);
        assert_eq!(stored_theme(Some("system")), Theme::Light);
        assert_eq!(stored_theme(Some("\"dark\"")), Theme::Light);
        assert_eq!("sepia".parse::<Theme>(), Err("sepia".to_string()));
    }
}
