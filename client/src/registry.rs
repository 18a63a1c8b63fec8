use std::collections::HashMap;

use sentiero_shared::{ACTIVE_STYLE, INACTIVE_STYLE, INITIAL_STYLE, LatLng};

use crate::widget::{MapsProvider, WidgetError};

struct OverlayEntry<O> {
    overlay: O,
    attached: bool,
}

/// One persistent overlay handle per trail id, surviving re-renders and
/// remounts. Sole writer of overlay style and attachment state.
pub struct OverlayRegistry<P: MapsProvider> {
    entries: HashMap<String, OverlayEntry<P::Overlay>>,
    /// Last id the style table was applied for; restyle skips when unchanged.
    applied_active: Option<String>,
}

impl<P: MapsProvider> Default for OverlayRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: MapsProvider> OverlayRegistry<P> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            applied_active: None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Construct the overlay on first call for an id; on later calls, when
    /// the entry was detached by a teardown, reattach the existing handle to
    /// the new map and refresh its path. The handle itself is never
    /// discarded and recreated.
    pub fn ensure_overlay(
        &mut self,
        provider: &P,
        map: &P::Map,
        trail_id: &str,
        path: &[LatLng],
    ) -> Result<(), WidgetError> {
        if let Some(entry) = self.entries.get_mut(trail_id) {
            if !entry.attached {
                provider.attach_overlay(&entry.overlay, Some(map))?;
                provider.set_overlay_path(&entry.overlay, path)?;
                entry.attached = true;
            }
            return Ok(());
        }
        let overlay = provider.create_overlay(map, path, INITIAL_STYLE)?;
        self.entries.insert(
            trail_id.to_string(),
            OverlayEntry {
                overlay,
                attached: true,
            },
        );
        Ok(())
    }

    /// Whether a restyle pass for this id would change anything.
    pub fn restyle_needed(&self, active_id: &str) -> bool {
        self.applied_active.as_deref() != Some(active_id)
    }

    /// Apply the style table for the given active id. No-op when the same id
    /// is already applied.
    pub fn restyle(&mut self, provider: &P, active_id: &str) -> Result<(), WidgetError> {
        if self.applied_active.as_deref() == Some(active_id) {
            return Ok(());
        }
        for (id, entry) in &self.entries {
            let style = if id == active_id {
                ACTIVE_STYLE
            } else {
                INACTIVE_STYLE
            };
            provider.set_overlay_style(&entry.overlay, style)?;
        }
        self.applied_active = Some(active_id.to_string());
        Ok(())
    }

    /// Null every overlay's map binding without dropping the entries.
    pub fn detach_all(&mut self, provider: &P) {
        for entry in self.entries.values_mut() {
            provider.attach_overlay(&entry.overlay, None).ok();
            entry.attached = false;
        }
    }
}
