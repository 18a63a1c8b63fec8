use serde::{Deserialize, Serialize};

/// Geographic point. Field names match the widget's wire shape exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Growable lat/lng envelope used to frame the camera.
/// Starts empty; `extend` folds points in. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    min_lat: f64,
    max_lat: f64,
    min_lng: f64,
    max_lng: f64,
}

impl Default for GeoBounds {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoBounds {
    pub const fn new() -> Self {
        Self {
            min_lat: f64::MAX,
            max_lat: f64::MIN,
            min_lng: f64::MAX,
            max_lng: f64::MIN,
        }
    }

    pub fn from_path(path: &[LatLng]) -> Self {
        let mut bounds = Self::new();
        for point in path {
            bounds.extend(*point);
        }
        bounds
    }

    pub fn is_empty(&self) -> bool {
        self.min_lat > self.max_lat
    }

    pub fn extend(&mut self, point: LatLng) {
        self.min_lat = self.min_lat.min(point.lat);
        self.max_lat = self.max_lat.max(point.lat);
        self.min_lng = self.min_lng.min(point.lng);
        self.max_lng = self.max_lng.max(point.lng);
    }

    /// South-west corner. Meaningless on an empty envelope.
    pub fn south_west(&self) -> LatLng {
        LatLng::new(self.min_lat, self.min_lng)
    }

    /// North-east corner. Meaningless on an empty envelope.
    pub fn north_east(&self) -> LatLng {
        LatLng::new(self.max_lat, self.max_lng)
    }

    pub fn center(&self) -> Option<LatLng> {
        if self.is_empty() {
            return None;
        }
        Some(LatLng::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        ))
    }

    pub fn contains(&self, point: LatLng) -> bool {
        !self.is_empty()
            && point.lat >= self.min_lat
            && point.lat <= self.max_lat
            && point.lng >= self.min_lng
            && point.lng <= self.max_lng
    }
}

#[cfg(test)]
mod tests {
    use super::{GeoBounds, LatLng};

    #[test]
    fn starts_empty() {
        let bounds = GeoBounds::new();
        assert!(bounds.is_empty());
        assert_eq!(bounds.center(), None);
    }

    #[test]
    fn single_point_is_degenerate_but_not_empty() {
        let mut bounds = GeoBounds::new();
        bounds.extend(LatLng::new(45.5, 9.2));
        assert!(!bounds.is_empty());
        assert_eq!(bounds.south_west(), bounds.north_east());
        assert_eq!(bounds.center(), Some(LatLng::new(45.5, 9.2)));
    }

    #[test]
    fn extend_grows_envelope() {
        let mut bounds = GeoBounds::new();
        bounds.extend(LatLng::new(45.45, 9.17));
        bounds.extend(LatLng::new(45.51, 9.24));
        bounds.extend(LatLng::new(45.47, 9.18));
        assert_eq!(bounds.south_west(), LatLng::new(45.45, 9.17));
        assert_eq!(bounds.north_east(), LatLng::new(45.51, 9.24));
    }

    #[test]
    fn from_path_matches_manual_fold() {
        let path = [
            LatLng::new(45.464211, 9.191383),
            LatLng::new(45.478782, 9.184889),
            LatLng::new(45.466319, 9.194538),
        ];
        let mut manual = GeoBounds::new();
        for p in &path {
            manual.extend(*p);
        }
        assert_eq!(GeoBounds::from_path(&path), manual);
    }

    #[test]
    fn contains_checks_envelope() {
        let bounds = GeoBounds::from_path(&[LatLng::new(45.0, 9.0), LatLng::new(46.0, 10.0)]);
        assert!(bounds.contains(LatLng::new(45.5, 9.5)));
        assert!(!bounds.contains(LatLng::new(44.9, 9.5)));
        assert!(!GeoBounds::new().contains(LatLng::new(45.5, 9.5)));
    }
}
