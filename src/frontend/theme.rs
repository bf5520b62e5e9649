use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Storage};
use yew::prelude::*;

use crate::theme::{Theme, ThemeStorage, ThemeStore};

const THEME_KEY: &str = "portfolio-theme";

/// Theme persistence backed by `localStorage` and `prefers-color-scheme`.
pub struct BrowserStorage;

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

impl ThemeStorage for BrowserStorage {
    fn load(&self) -> Option<Theme> {
        let value = local_storage()?.get_item(THEME_KEY).ok().flatten()?;
        Theme::parse(&value)
    }

    fn save(&self, theme: Theme) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(THEME_KEY, theme.as_str());
        }
    }

    fn prefers_dark(&self) -> bool {
        media_matches("(prefers-color-scheme: dark)")
    }
}

fn apply_theme(theme: Theme) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
            let _ = root.set_attribute("style", &theme.palette().css_variables());
        }
    }
}

/// Hands `update` to `document.startViewTransition`. Returns `false`, without
/// running `update`, when the browser has no view transitions.
fn start_view_transition(update: impl FnOnce() + 'static) -> bool {
    let Some(document) = window().and_then(|w| w.document()).map(JsValue::from) else {
        return false;
    };

    let start = Reflect::get(&document, &JsValue::from_str("startViewTransition"))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok());

    start.is_some_and(|start| {
        start
            .call1(&document, &Closure::once_into_js(update))
            .is_ok()
    })
}

/// Switches the page to the store's new theme, animated unless the visitor
/// asked for reduced motion.
fn show_toggled(theme: Theme) {
    let animate = !media_matches("(prefers-reduced-motion: reduce)");
    if !(animate && start_view_transition(move || apply_theme(theme))) {
        apply_theme(theme);
    }
}

/// Current theme plus the way to flip it, shared with every component below
/// the provider.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| ThemeContext {
        theme: Theme::default(),
        toggle: Callback::noop(),
    })
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let store = use_mut_ref(|| ThemeStore::open(BrowserStorage));
    let theme = use_state(|| store.borrow().get_theme());

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |()| {
            let next = store.borrow_mut().toggle_theme();
            show_toggled(next);
            theme.set(next);
        })
    };

    let context = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ThemeContext>>
    }
}
