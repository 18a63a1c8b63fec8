use sentiero_shared::{Catalog, GeoBounds, LatLng};

use crate::registry::OverlayRegistry;
use crate::widget::{MapOptions, MapType, MapsProvider, WidgetError};

/// Camera padding for the initial fit framing the whole catalog.
pub const CATALOG_FIT_PADDING: f64 = 64.0;
/// Camera padding when framing a single selected trail.
pub const TRAIL_FIT_PADDING: f64 = 80.0;

pub const INITIAL_ZOOM: u8 = 13;
/// Piazza del Duomo; used when the catalog is empty.
pub const FALLBACK_CENTER: LatLng = LatLng::new(45.464211, 9.191383);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    Unready,
    Ready,
    MapCreated,
    OverlaysAttached,
}

/// Owner of the map handle, the overlay registry, and the lifecycle phase.
/// Every widget-facing mutation funnels through here; the Leptos shell only
/// translates DOM events into these calls.
pub struct MapSync<P: MapsProvider> {
    provider: P,
    catalog: Catalog,
    phase: Phase,
    map: Option<P::Map>,
    overlays: OverlayRegistry<P>,
}

impl<P: MapsProvider> MapSync<P> {
    pub fn new(provider: P, catalog: Catalog) -> Self {
        Self {
            provider,
            catalog,
            phase: Phase::Unready,
            map: None,
            overlays: OverlayRegistry::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// One-shot readiness signal from the script loader. Later signals are
    /// no-ops.
    pub fn mark_ready(&mut self) {
        if self.phase == Phase::Unready {
            self.phase = Phase::Ready;
        }
    }

    /// `Ready -> MapCreated`. Guarded to create the map at most once per
    /// mount; callers must only invoke this once the container element is in
    /// the DOM.
    pub fn ensure_map(&mut self, container_id: &str) -> Result<(), WidgetError> {
        if self.phase != Phase::Ready || self.map.is_some() {
            return Ok(());
        }
        let center = self
            .catalog
            .first()
            .and_then(|trail| trail.path.first().copied())
            .unwrap_or(FALLBACK_CENTER);
        let opts = MapOptions::centered_at(center, INITIAL_ZOOM);
        let map = self.provider.create_map(container_id, &opts)?;
        self.map = Some(map);
        self.phase = Phase::MapCreated;
        Ok(())
    }

    /// `MapCreated -> OverlaysAttached`: one overlay per catalog entry, then
    /// a camera fit over the union of every path point, then the style pass
    /// for the current active trail. The camera stays on the full-catalog
    /// framing until a user-driven selection refits it.
    pub fn attach_overlays(&mut self, active_id: &str) -> Result<(), WidgetError> {
        if self.phase != Phase::MapCreated {
            return Ok(());
        }
        let Some(map) = self.map.as_ref() else {
            return Ok(());
        };
        let mut bounds = GeoBounds::new();
        for trail in self.catalog.trails() {
            self.overlays
                .ensure_overlay(&self.provider, map, &trail.id, &trail.path)?;
            for point in &trail.path {
                bounds.extend(*point);
            }
        }
        if !bounds.is_empty() {
            self.provider.fit_bounds(map, &bounds, CATALOG_FIT_PADDING)?;
        }
        self.phase = Phase::OverlaysAttached;
        if self.catalog.contains(active_id) {
            self.overlays.restyle(&self.provider, active_id)?;
        }
        Ok(())
    }

    /// Selection transition: restyle every overlay and refit the camera to
    /// the selected trail. Unknown ids are rejected silently; re-selecting
    /// the active trail changes nothing; before `OverlaysAttached` only the
    /// list emphasis (signal-driven) changes and the refit is deferred to
    /// the attach pass.
    pub fn select(&mut self, trail_id: &str) -> Result<(), WidgetError> {
        let Some(trail) = self.catalog.get(trail_id) else {
            return Ok(());
        };
        if self.phase != Phase::OverlaysAttached {
            return Ok(());
        }
        if !self.overlays.restyle_needed(trail_id) {
            return Ok(());
        }
        let bounds = trail.bounds();
        self.overlays.restyle(&self.provider, trail_id)?;
        if let Some(map) = self.map.as_ref()
            && !bounds.is_empty()
        {
            self.provider.fit_bounds(map, &bounds, TRAIL_FIT_PADDING)?;
        }
        Ok(())
    }

    /// Base layer change; independent of overlays and selection. No-op until
    /// the map exists.
    pub fn set_map_type(&mut self, map_type: MapType) -> Result<(), WidgetError> {
        let Some(map) = self.map.as_ref() else {
            return Ok(());
        };
        self.provider.set_map_type(map, map_type)
    }

    /// Unmount: detach every overlay and abandon the map handle. The widget
    /// stays loaded, so the phase falls back to `Ready` and a later mount
    /// recreates the map and reattaches the existing overlays.
    pub fn teardown(&mut self) {
        self.overlays.detach_all(&self.provider);
        self.map = None;
        if self.phase != Phase::Unready {
            self.phase = Phase::Ready;
        }
    }
}

#[cfg(test)]
mod tests {
    use sentiero_shared::{ACTIVE_STYLE, Catalog, GeoBounds, INACTIVE_STYLE};

    use super::{CATALOG_FIT_PADDING, MapSync, Phase, TRAIL_FIT_PADDING};
    use crate::widget::fake::{Call, FakeMaps};
    use crate::widget::{MapType, WidgetError};

    const CONTAINER: &str = "map-canvas";

    fn booted() -> (FakeMaps, MapSync<FakeMaps>) {
        let maps = FakeMaps::new();
        let mut sync = MapSync::new(maps.clone(), Catalog::milan());
        sync.mark_ready();
        sync.ensure_map(CONTAINER).unwrap();
        sync.attach_overlays("duomo-panorama").unwrap();
        (maps, sync)
    }

    #[test]
    fn boot_walks_the_full_phase_ladder() {
        let maps = FakeMaps::new();
        let mut sync = MapSync::new(maps.clone(), Catalog::milan());
        assert_eq!(sync.phase(), Phase::Unready);
        sync.mark_ready();
        assert_eq!(sync.phase(), Phase::Ready);
        sync.ensure_map(CONTAINER).unwrap();
        assert_eq!(sync.phase(), Phase::MapCreated);
        sync.attach_overlays("duomo-panorama").unwrap();
        assert_eq!(sync.phase(), Phase::OverlaysAttached);
    }

    #[test]
    fn boot_attaches_one_overlay_per_trail_and_fits_union() {
        let (maps, sync) = booted();
        assert_eq!(maps.overlay_count(), 4);
        assert_eq!(maps.constructions(), 4);
        let (bounds, padding) = maps.last_fit().unwrap();
        assert_eq!(bounds, sync.catalog().union_bounds());
        assert_eq!(padding, CATALOG_FIT_PADDING);
    }

    #[test]
    fn map_center_is_first_trail_first_point() {
        let (maps, _sync) = booted();
        let catalog = Catalog::milan();
        let expected = catalog.first().unwrap().path[0];
        assert!(maps.calls().iter().any(|call| matches!(
            call,
            Call::CreateMap { center, zoom: 13 } if *center == expected
        )));
    }

    #[test]
    fn map_is_created_at_most_once() {
        let (maps, mut sync) = booted();
        sync.mark_ready();
        sync.ensure_map(CONTAINER).unwrap();
        sync.ensure_map(CONTAINER).unwrap();
        assert_eq!(maps.maps_created(), 1);
    }

    #[test]
    fn boot_applies_active_style_to_default_trail() {
        let (maps, _sync) = booted();
        let overlays = maps.overlays();
        assert_eq!(
            overlays.iter().filter(|o| o.style == ACTIVE_STYLE).count(),
            1
        );
        assert_eq!(overlays[0].style, ACTIVE_STYLE);
        assert!(overlays[1..].iter().all(|o| o.style == INACTIVE_STYLE));
    }

    #[test]
    fn selection_restyles_and_refits_to_that_trail_only() {
        let (maps, mut sync) = booted();
        sync.select("navigli-serale").unwrap();

        let overlays = maps.overlays();
        assert_eq!(overlays[1].style, ACTIVE_STYLE);
        assert_eq!(
            overlays.iter().filter(|o| o.style == ACTIVE_STYLE).count(),
            1
        );

        let catalog = Catalog::milan();
        let navigli = catalog.get("navigli-serale").unwrap();
        assert_eq!(navigli.path.len(), 12);
        let (bounds, padding) = maps.last_fit().unwrap();
        assert_eq!(bounds, GeoBounds::from_path(&navigli.path));
        assert_eq!(padding, TRAIL_FIT_PADDING);
    }

    #[test]
    fn reselecting_active_trail_changes_nothing() {
        let (maps, mut sync) = booted();
        sync.select("navigli-serale").unwrap();
        let before = maps.call_count();
        sync.select("navigli-serale").unwrap();
        assert_eq!(maps.call_count(), before);
    }

    #[test]
    fn unknown_id_is_rejected_silently() {
        let (maps, mut sync) = booted();
        let before = maps.call_count();
        assert_eq!(sync.select("monte-bianco"), Ok(()));
        assert_eq!(maps.call_count(), before);
        // Active emphasis untouched.
        assert_eq!(maps.overlays()[0].style, ACTIVE_STYLE);
    }

    #[test]
    fn selection_before_attach_is_deferred() {
        let maps = FakeMaps::new();
        let mut sync = MapSync::new(maps.clone(), Catalog::milan());
        sync.select("navigli-serale").unwrap();
        assert_eq!(maps.call_count(), 0);

        sync.mark_ready();
        sync.ensure_map(CONTAINER).unwrap();
        sync.attach_overlays("navigli-serale").unwrap();
        assert_eq!(maps.overlays()[1].style, ACTIVE_STYLE);
        // Camera still frames the whole catalog until a live selection event.
        let (_, padding) = maps.last_fit().unwrap();
        assert_eq!(padding, CATALOG_FIT_PADDING);
    }

    #[test]
    fn base_layer_toggle_leaves_selection_and_styles_alone() {
        let (maps, mut sync) = booted();
        sync.select("navigli-serale").unwrap();
        let styles_before: Vec<_> = maps.overlays().iter().map(|o| o.style).collect();

        sync.set_map_type(MapType::Satellite).unwrap();
        sync.set_map_type(MapType::Roadmap).unwrap();
        sync.set_map_type(MapType::Roadmap).unwrap();

        let styles_after: Vec<_> = maps.overlays().iter().map(|o| o.style).collect();
        assert_eq!(styles_before, styles_after);
        assert_eq!(
            maps.calls()
                .iter()
                .filter(|c| matches!(c, Call::SetMapType { .. }))
                .count(),
            3
        );
    }

    #[test]
    fn teardown_detaches_every_overlay_and_stops_style_mutations() {
        let (maps, mut sync) = booted();
        sync.teardown();
        assert!(maps.overlays().iter().all(|o| o.attached_to.is_none()));

        let before = maps.style_call_count();
        sync.select("navigli-serale").unwrap();
        assert_eq!(maps.style_call_count(), before);
    }

    #[test]
    fn remount_reattaches_without_reconstruction() {
        let (maps, mut sync) = booted();
        sync.teardown();
        assert_eq!(sync.phase(), Phase::Ready);

        sync.ensure_map(CONTAINER).unwrap();
        sync.attach_overlays("duomo-panorama").unwrap();
        assert_eq!(maps.maps_created(), 2);
        assert_eq!(maps.constructions(), 4);
        assert!(maps.overlays().iter().all(|o| o.attached_to == Some(1)));
    }

    #[test]
    fn absent_widget_surfaces_unavailable_and_creates_nothing() {
        let maps = FakeMaps::new();
        maps.set_offline(true);
        let mut sync = MapSync::new(maps.clone(), Catalog::milan());
        sync.mark_ready();
        assert_eq!(sync.ensure_map(CONTAINER), Err(WidgetError::Unavailable));
        assert_eq!(sync.phase(), Phase::Ready);
        assert_eq!(maps.maps_created(), 0);
        sync.attach_overlays("duomo-panorama").unwrap();
        assert_eq!(maps.overlay_count(), 0);
    }

    #[test]
    fn empty_catalog_falls_back_to_fixed_center() {
        let maps = FakeMaps::new();
        let mut sync = MapSync::new(maps.clone(), Catalog::new(Vec::new()));
        sync.mark_ready();
        sync.ensure_map(CONTAINER).unwrap();
        sync.attach_overlays("anything").unwrap();
        assert_eq!(sync.phase(), Phase::OverlaysAttached);
        assert!(maps.calls().iter().any(|call| matches!(
            call,
            Call::CreateMap { center, .. } if *center == super::FALLBACK_CENTER
        )));
        // No overlays, no fit.
        assert_eq!(maps.overlay_count(), 0);
        assert!(maps.last_fit().is_none());
    }
}
