use serde::{Deserialize, Serialize};
use thiserror::Error;

use sentiero_shared::{GeoBounds, LatLng, OverlayStyle};

/// Base layer of the map widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapType {
    Roadmap,
    Satellite,
}

impl MapType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MapType::Roadmap => "roadmap",
            MapType::Satellite => "satellite",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureHandling {
    Greedy,
    Cooperative,
    None,
    Auto,
}

impl GestureHandling {
    pub fn as_str(&self) -> &'static str {
        match self {
            GestureHandling::Greedy => "greedy",
            GestureHandling::Cooperative => "cooperative",
            GestureHandling::None => "none",
            GestureHandling::Auto => "auto",
        }
    }
}

/// Construction options for the map surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: u8,
    pub disable_default_ui: bool,
    pub gesture_handling: GestureHandling,
    pub map_type_control: bool,
    pub street_view_control: bool,
    pub fullscreen_control: bool,
    pub zoom_control: bool,
}

impl MapOptions {
    pub fn centered_at(center: LatLng, zoom: u8) -> Self {
        Self {
            center,
            zoom,
            disable_default_ui: true,
            gesture_handling: GestureHandling::Greedy,
            map_type_control: false,
            street_view_control: false,
            fullscreen_control: false,
            zoom_control: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// The provider global is missing; fatal for the render cycle, no retry.
    #[error("map widget is not available")]
    Unavailable,
    /// The DOM region the map should bind to does not exist.
    #[error("map container element is missing")]
    ContainerMissing,
}

/// Capability contract over the external map provider's primitives.
/// All calls are synchronous once the provider global is present; every
/// operation fails with `WidgetError::Unavailable` when it is absent.
pub trait MapsProvider {
    type Map;
    type Overlay;

    fn create_map(&self, container_id: &str, opts: &MapOptions)
    -> Result<Self::Map, WidgetError>;

    fn create_overlay(
        &self,
        map: &Self::Map,
        path: &[LatLng],
        style: OverlayStyle,
    ) -> Result<Self::Overlay, WidgetError>;

    fn set_overlay_style(
        &self,
        overlay: &Self::Overlay,
        style: OverlayStyle,
    ) -> Result<(), WidgetError>;

    fn set_overlay_path(&self, overlay: &Self::Overlay, path: &[LatLng])
    -> Result<(), WidgetError>;

    /// `None` detaches the overlay from any map.
    fn attach_overlay(
        &self,
        overlay: &Self::Overlay,
        map: Option<&Self::Map>,
    ) -> Result<(), WidgetError>;

    fn fit_bounds(
        &self,
        map: &Self::Map,
        bounds: &GeoBounds,
        padding: f64,
    ) -> Result<(), WidgetError>;

    fn set_map_type(&self, map: &Self::Map, map_type: MapType) -> Result<(), WidgetError>;
}
