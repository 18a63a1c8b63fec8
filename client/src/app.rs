use std::cell::RefCell;

use gloo_storage::Storage;
use leptos::prelude::*;

use sentiero_shared::Catalog;

use crate::controls::MapControls;
use crate::gmaps::GoogleMaps;
use crate::loader::{self, ScriptStatus};
use crate::sidebar::{self, Sidebar};
use crate::sync::MapSync;
use crate::topbar::Topbar;
use crate::widget::MapType;

pub(crate) const MAP_CONTAINER_ID: &str = "map-canvas";
const SETTINGS_KEY: &str = "sentiero_settings";

/// Newtype wrappers so each signal gets a distinct Leptos context slot.
#[derive(Clone, Copy)]
pub(crate) struct ActiveTrail(pub RwSignal<String>);
#[derive(Clone, Copy)]
pub(crate) struct BaseLayer(pub RwSignal<MapType>);
#[derive(Clone, Copy)]
pub(crate) struct WidgetStatus(pub RwSignal<ScriptStatus>);
#[derive(Clone, Copy)]
pub(crate) struct CatalogStore(pub StoredValue<Catalog>);

thread_local! {
    // The synchronization core lives outside the reactive graph so the map
    // and overlay handles survive re-renders; only the effects below and
    // teardown touch it.
    static MAP_SYNC: RefCell<Option<MapSync<GoogleMaps>>> = const { RefCell::new(None) };
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
struct Settings {
    map_type: MapType,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            map_type: MapType::Roadmap,
        }
    }
}

/// Root component: provides global signals, sequences widget readiness into
/// map creation and overlay attachment, and reacts to selection and
/// base-layer changes.
#[component]
pub fn App() -> impl IntoView {
    let catalog = Catalog::milan();
    let default_trail = catalog.first().map(|t| t.id.clone()).unwrap_or_default();

    let saved: Settings = gloo_storage::LocalStorage::get(SETTINGS_KEY).unwrap_or_default();
    let active_trail: RwSignal<String> = RwSignal::new(default_trail);
    let map_type: RwSignal<MapType> = RwSignal::new(saved.map_type);
    let script_status: RwSignal<ScriptStatus> = RwSignal::new(ScriptStatus::MissingKey);
    let catalog_store: StoredValue<Catalog> = StoredValue::new(catalog);

    provide_context(CatalogStore(catalog_store));
    provide_context(ActiveTrail(active_trail));
    provide_context(BaseLayer(map_type));
    provide_context(WidgetStatus(script_status));

    // Persist view settings on any change.
    Effect::new(move || {
        let settings = Settings {
            map_type: map_type.get(),
        };
        let _ = gloo_storage::LocalStorage::set(SETTINGS_KEY, &settings);
    });

    // Request the widget script once, gated on the API credential.
    Effect::new(move || match loader::api_key() {
        Some(key) => loader::load(&key, script_status),
        None => script_status.set(ScriptStatus::MissingKey),
    });

    // Widget ready: create the map once the container region exists, attach
    // one overlay per trail, fit the camera, and apply the persisted base
    // layer. Guarded inside the core so re-runs are no-ops.
    Effect::new(move || {
        if script_status.get() != ScriptStatus::Ready {
            return;
        }
        let container_mounted = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(MAP_CONTAINER_ID))
            .is_some();
        if !container_mounted {
            return;
        }
        let result = MAP_SYNC.with(|slot| {
            let mut slot = slot.borrow_mut();
            let sync =
                slot.get_or_insert_with(|| MapSync::new(GoogleMaps, catalog_store.get_value()));
            sync.mark_ready();
            sync.ensure_map(MAP_CONTAINER_ID)?;
            sync.attach_overlays(&active_trail.get_untracked())?;
            sync.set_map_type(map_type.get_untracked())
        });
        if let Err(err) = result {
            web_sys::console::warn_1(&format!("map boot failed: {err}").into());
            script_status.set(ScriptStatus::Failed);
        }
    });

    // Selection: restyle overlays, refit the camera to the active trail, and
    // bring its card into view.
    Effect::new(move || {
        let id = active_trail.get();
        let result = MAP_SYNC.with(|slot| {
            slot.borrow_mut()
                .as_mut()
                .map_or(Ok(()), |sync| sync.select(&id))
        });
        if let Err(err) = result {
            web_sys::console::warn_1(&format!("selection restyle failed: {err}").into());
            script_status.set(ScriptStatus::Failed);
        }
        sidebar::scroll_card_into_view(&id);
    });

    // Base layer follows the toggle; never touches overlays or selection.
    Effect::new(move || {
        let desired = map_type.get();
        MAP_SYNC.with(|slot| {
            if let Some(sync) = slot.borrow_mut().as_mut() {
                sync.set_map_type(desired).ok();
            }
        });
    });

    on_cleanup(|| {
        MAP_SYNC.with(|slot| {
            if let Some(sync) = slot.borrow_mut().as_mut() {
                sync.teardown();
            }
        });
    });

    view! {
        <div style="position: relative; width: 100%; height: 100vh; overflow: hidden; background: #e8e6e1; font-family: 'Inter', system-ui, sans-serif;">
            <div id=MAP_CONTAINER_ID style="position: absolute; inset: 0;" aria-hidden="true"></div>
            <Topbar />
            <Sidebar />
            <MapControls />
            <StatusBanner />
        </div>
    }
}

const BANNER_STYLE: &str = "position: absolute; left: 50%; bottom: 28px; transform: translateX(-50%); z-index: 20; background: #1c2430; color: #f3f1ec; padding: 10px 18px; border-radius: 8px; font-size: 0.85rem; box-shadow: 0 4px 16px rgba(0,0,0,0.35);";

/// Persistent status over the map area. Configuration problems and widget
/// load failures land here; the trail list stays fully usable either way.
#[component]
fn StatusBanner() -> impl IntoView {
    let WidgetStatus(status) = expect_context();

    view! {
        {move || match status.get() {
            ScriptStatus::MissingKey => view! {
                <div role="status" style=BANNER_STYLE>
                    "Fornisci una Google Maps API key per visualizzare la mappa."
                </div>
            }
            .into_any(),
            ScriptStatus::Failed => view! {
                <div role="alert" style=BANNER_STYLE>
                    "Impossibile caricare Google Maps in questo momento."
                </div>
            }
            .into_any(),
            ScriptStatus::Loading | ScriptStatus::Ready => ().into_any(),
        }}
    }
}
