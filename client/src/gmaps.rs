use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

use sentiero_shared::{GeoBounds, LatLng, OverlayStyle};

use crate::widget::{MapOptions, MapType, MapsProvider, WidgetError};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Map)]
    pub type JsMap;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"], js_class = "Map")]
    fn new(container: &web_sys::Element, opts: &JsValue) -> JsMap;

    #[wasm_bindgen(method, js_name = setMapTypeId)]
    fn set_map_type_id(this: &JsMap, map_type: &str);

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &JsMap, bounds: &JsLatLngBounds, padding: f64);

    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Polyline)]
    pub type JsPolyline;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"], js_class = "Polyline")]
    fn new(opts: &JsValue) -> JsPolyline;

    #[wasm_bindgen(method, js_name = setMap)]
    fn set_map(this: &JsPolyline, map: &JsValue);

    #[wasm_bindgen(method, js_name = setOptions)]
    fn set_options(this: &JsPolyline, opts: &JsValue);

    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = LatLngBounds)]
    pub type JsLatLngBounds;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"], js_class = "LatLngBounds")]
    fn new() -> JsLatLngBounds;

    #[wasm_bindgen(method)]
    fn extend(this: &JsLatLngBounds, point: &JsValue);
}

/// True when the externally injected `google.maps` namespace exists.
pub fn widget_available() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(google) = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("google")) else {
        return false;
    };
    if google.is_undefined() || google.is_null() {
        return false;
    }
    match js_sys::Reflect::get(&google, &JsValue::from_str("maps")) {
        Ok(maps) => !maps.is_undefined() && !maps.is_null(),
        Err(_) => false,
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsMapOptions<'a> {
    center: LatLng,
    zoom: u8,
    // camelCase would render "...Ui"; the widget wants the UI suffix.
    #[serde(rename = "disableDefaultUI")]
    disable_default_ui: bool,
    gesture_handling: &'a str,
    map_type_control: bool,
    street_view_control: bool,
    fullscreen_control: bool,
    zoom_control: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsPolylineOptions<'a> {
    path: &'a [LatLng],
    geodesic: bool,
    stroke_color: &'a str,
    stroke_opacity: f64,
    stroke_weight: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsStrokeOptions {
    stroke_color: &'static str,
    stroke_opacity: f64,
    stroke_weight: u32,
}

#[derive(Serialize)]
struct JsPathOptions<'a> {
    path: &'a [LatLng],
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, WidgetError> {
    serde_wasm_bindgen::to_value(value).map_err(|_| WidgetError::Unavailable)
}

/// The real widget binding. Each namespace-touching call re-checks the
/// global, so a script that loaded but was since clobbered degrades to
/// `Unavailable` instead of throwing across the FFI boundary.
pub struct GoogleMaps;

impl MapsProvider for GoogleMaps {
    type Map = JsMap;
    type Overlay = JsPolyline;

    fn create_map(&self, container_id: &str, opts: &MapOptions) -> Result<JsMap, WidgetError> {
        if !widget_available() {
            return Err(WidgetError::Unavailable);
        }
        let container = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(container_id))
            .ok_or(WidgetError::ContainerMissing)?;
        let js_opts = to_js(&JsMapOptions {
            center: opts.center,
            zoom: opts.zoom,
            disable_default_ui: opts.disable_default_ui,
            gesture_handling: opts.gesture_handling.as_str(),
            map_type_control: opts.map_type_control,
            street_view_control: opts.street_view_control,
            fullscreen_control: opts.fullscreen_control,
            zoom_control: opts.zoom_control,
        })?;
        Ok(JsMap::new(&container, &js_opts))
    }

    fn create_overlay(
        &self,
        map: &JsMap,
        path: &[LatLng],
        style: OverlayStyle,
    ) -> Result<JsPolyline, WidgetError> {
        if !widget_available() {
            return Err(WidgetError::Unavailable);
        }
        let js_opts = to_js(&JsPolylineOptions {
            path,
            geodesic: true,
            stroke_color: style.stroke_color,
            stroke_opacity: style.stroke_opacity,
            stroke_weight: style.stroke_weight,
        })?;
        let polyline = JsPolyline::new(&js_opts);
        polyline.set_map(map.as_ref());
        Ok(polyline)
    }

    fn set_overlay_style(
        &self,
        overlay: &JsPolyline,
        style: OverlayStyle,
    ) -> Result<(), WidgetError> {
        let js_opts = to_js(&JsStrokeOptions {
            stroke_color: style.stroke_color,
            stroke_opacity: style.stroke_opacity,
            stroke_weight: style.stroke_weight,
        })?;
        overlay.set_options(&js_opts);
        Ok(())
    }

    fn set_overlay_path(&self, overlay: &JsPolyline, path: &[LatLng]) -> Result<(), WidgetError> {
        let js_opts = to_js(&JsPathOptions { path })?;
        overlay.set_options(&js_opts);
        Ok(())
    }

    fn attach_overlay(
        &self,
        overlay: &JsPolyline,
        map: Option<&JsMap>,
    ) -> Result<(), WidgetError> {
        match map {
            Some(map) => overlay.set_map(map.as_ref()),
            None => overlay.set_map(&JsValue::NULL),
        }
        Ok(())
    }

    fn fit_bounds(
        &self,
        map: &JsMap,
        bounds: &GeoBounds,
        padding: f64,
    ) -> Result<(), WidgetError> {
        if bounds.is_empty() {
            return Ok(());
        }
        if !widget_available() {
            return Err(WidgetError::Unavailable);
        }
        let js_bounds = JsLatLngBounds::new();
        for corner in [bounds.south_west(), bounds.north_east()] {
            js_bounds.extend(&to_js(&corner)?);
        }
        map.fit_bounds(&js_bounds, padding);
        Ok(())
    }

    fn set_map_type(&self, map: &JsMap, map_type: MapType) -> Result<(), WidgetError> {
        map.set_map_type_id(map_type.as_str());
        Ok(())
    }
}
