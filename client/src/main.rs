mod app;
mod controls;
#[cfg(target_arch = "wasm32")]
mod gmaps;
mod loader;
mod registry;
mod sidebar;
mod sync;
mod topbar;
mod widget;

#[cfg(not(target_arch = "wasm32"))]
mod gmaps {
    use sentiero_shared::{GeoBounds, LatLng, OverlayStyle};

    use crate::widget::{MapOptions, MapType, MapsProvider, WidgetError};

    /// Host stand-in for the wasm-only widget binding; every call reports
    /// the widget as unavailable.
    pub struct GoogleMaps;

    pub struct JsMap;
    pub struct JsPolyline;

    pub fn widget_available() -> bool {
        false
    }

    impl MapsProvider for GoogleMaps {
        type Map = JsMap;
        type Overlay = JsPolyline;

        fn create_map(
            &self,
            _container_id: &str,
            _opts: &MapOptions,
        ) -> Result<JsMap, WidgetError> {
            Err(WidgetError::Unavailable)
        }

        fn create_overlay(
            &self,
            _map: &JsMap,
            _path: &[LatLng],
            _style: OverlayStyle,
        ) -> Result<JsPolyline, WidgetError> {
            Err(WidgetError::Unavailable)
        }

        fn set_overlay_style(
            &self,
            _overlay: &JsPolyline,
            _style: OverlayStyle,
        ) -> Result<(), WidgetError> {
            Err(WidgetError::Unavailable)
        }

        fn set_overlay_path(
            &self,
            _overlay: &JsPolyline,
            _path: &[LatLng],
        ) -> Result<(), WidgetError> {
            Err(WidgetError::Unavailable)
        }

        fn attach_overlay(
            &self,
            _overlay: &JsPolyline,
            _map: Option<&JsMap>,
        ) -> Result<(), WidgetError> {
            Err(WidgetError::Unavailable)
        }

        fn fit_bounds(
            &self,
            _map: &JsMap,
            _bounds: &GeoBounds,
            _padding: f64,
        ) -> Result<(), WidgetError> {
            Err(WidgetError::Unavailable)
        }

        fn set_map_type(&self, _map: &JsMap, _map_type: MapType) -> Result<(), WidgetError> {
            Err(WidgetError::Unavailable)
        }
    }
}

use leptos::mount::mount_to;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let target = document
        .get_element_by_id("app")
        .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .or_else(|| document.body());
    let Some(target) = target else {
        return;
    };
    mount_to(target, app::App).forget();
}
