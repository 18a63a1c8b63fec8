use std::cell::Cell;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::gmaps;

pub const SCRIPT_ELEMENT_ID: &str = "gmaps-loader";
const API_KEY_META: &str = "gmaps-api-key";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStatus {
    /// No API credential; the widget script is never requested.
    MissingKey,
    Loading,
    Ready,
    Failed,
}

thread_local! {
    static SCRIPT_REQUESTED: Cell<bool> = const { Cell::new(false) };
}

/// API credential from the host page: a `<meta name="gmaps-api-key">` tag,
/// falling back to a `data-gmaps-api-key` attribute on the mount node.
pub fn api_key() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let key = document
        .query_selector(&format!("meta[name='{API_KEY_META}']"))
        .ok()
        .flatten()
        .and_then(|el| el.get_attribute("content"))
        .or_else(|| {
            document
                .get_element_by_id("app")
                .and_then(|el| el.get_attribute("data-gmaps-api-key"))
        })?;
    let key = key.trim().to_string();
    (!key.is_empty()).then_some(key)
}

/// Inject the widget script once and drive `status` from its load/error
/// events. Readiness is reported only when the provider global actually
/// exists after the load event fired.
pub fn load(key: &str, status: RwSignal<ScriptStatus>) {
    if SCRIPT_REQUESTED.with(|flag| flag.replace(true)) {
        return;
    }
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.get_element_by_id(SCRIPT_ELEMENT_ID).is_some() {
        return;
    }

    status.set(ScriptStatus::Loading);

    let script = match document
        .create_element("script")
        .ok()
        .and_then(|el| el.dyn_into::<web_sys::HtmlScriptElement>().ok())
    {
        Some(script) => script,
        None => {
            status.set(ScriptStatus::Failed);
            return;
        }
    };
    script.set_id(SCRIPT_ELEMENT_ID);
    script.set_src(&format!(
        "https://maps.googleapis.com/maps/api/js?key={key}"
    ));
    script.set_async(true);

    let on_load = Closure::once(move || {
        if gmaps::widget_available() {
            status.set(ScriptStatus::Ready);
        } else {
            web_sys::console::warn_1(&"maps script loaded without a google.maps global".into());
            status.set(ScriptStatus::Failed);
        }
    });
    script.set_onload(Some(on_load.as_ref().unchecked_ref()));
    on_load.forget();

    let on_error = Closure::once(move || {
        status.set(ScriptStatus::Failed);
    });
    script.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    on_error.forget();

    if let Some(head) = document.head() {
        head.append_child(&script).ok();
    } else if let Some(body) = document.body() {
        body.append_child(&script).ok();
    }
}
