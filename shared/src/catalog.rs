use std::collections::HashMap;

use crate::geo::{GeoBounds, LatLng};
use crate::trail::{Difficulty, Trail};

/// Read-only ordered list of trails with O(1) lookup by id.
/// Fixed at process start; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    trails: Vec<Trail>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(trails: Vec<Trail>) -> Self {
        let index = trails
            .iter()
            .enumerate()
            .map(|(idx, trail)| (trail.id.clone(), idx))
            .collect();
        Self { trails, index }
    }

    /// Full ordered list, for rendering and bounds computation.
    pub fn trails(&self) -> &[Trail] {
        &self.trails
    }

    pub fn get(&self, id: &str) -> Option<&Trail> {
        self.index.get(id).map(|&idx| &self.trails[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn first(&self) -> Option<&Trail> {
        self.trails.first()
    }

    pub fn len(&self) -> usize {
        self.trails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }

    /// Envelope of every path point of every trail.
    pub fn union_bounds(&self) -> GeoBounds {
        let mut bounds = GeoBounds::new();
        for trail in &self.trails {
            for point in &trail.path {
                bounds.extend(*point);
            }
        }
        bounds
    }

    /// The fixed Milan trail set shipped with the product.
    pub fn milan() -> Self {
        Self::new(vec![
            Trail {
                id: "duomo-panorama".into(),
                name: "Milano: Duomo → Torre Branca".into(),
                location: "Milano, Lombardia".into(),
                rating: 4.7,
                reviews: 523,
                distance_km: 6.4,
                difficulty: Difficulty::Easy,
                duration: "1 h 55 min".into(),
                cover_image:
                    "https://images.unsplash.com/photo-1532453288672-3a27e9be9efd?auto=format&fit=crop&w=800&q=80"
                        .into(),
                highlights: tags(&["Cultura", "Adatto alle famiglie", "Pavimentato"]),
                path: points(&[
                    (45.464211, 9.191383),
                    (45.46619, 9.18637),
                    (45.469576, 9.180672),
                    (45.472142, 9.179128),
                    (45.475834, 9.180286),
                    (45.478092, 9.182054),
                    (45.478782, 9.184889),
                    (45.476452, 9.189881),
                    (45.472844, 9.192772),
                    (45.469233, 9.194134),
                    (45.466319, 9.194538),
                    (45.464211, 9.191383),
                ]),
            },
            Trail {
                id: "navigli-serale".into(),
                name: "Navigli serale e Darsena".into(),
                location: "Milano, Lombardia".into(),
                rating: 4.6,
                reviews: 312,
                distance_km: 4.2,
                difficulty: Difficulty::Moderate,
                duration: "1 h 20 min".into(),
                cover_image:
                    "https://images.unsplash.com/photo-1505150892987-424388e40f36?auto=format&fit=crop&w=800&q=80"
                        .into(),
                highlights: tags(&["Tramonto", "Pet friendly", "Canali"]),
                path: points(&[
                    (45.451386, 9.170231),
                    (45.45282, 9.173615),
                    (45.454756, 9.177909),
                    (45.456997, 9.180926),
                    (45.458864, 9.181757),
                    (45.460676, 9.179718),
                    (45.460908, 9.176393),
                    (45.459116, 9.172626),
                    (45.456789, 9.16906),
                    (45.454046, 9.166602),
                    (45.451839, 9.167169),
                    (45.451386, 9.170231),
                ]),
            },
            Trail {
                id: "parco-sempione-loop".into(),
                name: "Loop Parco Sempione".into(),
                location: "Milano, Lombardia".into(),
                rating: 4.9,
                reviews: 671,
                distance_km: 3.3,
                difficulty: Difficulty::Easy,
                duration: "58 min".into(),
                cover_image:
                    "https://images.unsplash.com/photo-1548585742-1df49d0d35ad?auto=format&fit=crop&w=800&q=80"
                        .into(),
                highlights: tags(&["Ombreggiato", "Accessibile", "Area picnic"]),
                path: points(&[
                    (45.472198, 9.182464),
                    (45.472822, 9.178356),
                    (45.474436, 9.175206),
                    (45.476676, 9.17572),
                    (45.478058, 9.178784),
                    (45.478414, 9.18279),
                    (45.477198, 9.186355),
                    (45.475394, 9.188592),
                    (45.47321, 9.188022),
                    (45.471972, 9.185198),
                    (45.472198, 9.182464),
                ]),
            },
            Trail {
                id: "martesana-greenway".into(),
                name: "Greenway Martesana".into(),
                location: "Crescenzago, Lombardia".into(),
                rating: 4.5,
                reviews: 289,
                distance_km: 12.1,
                difficulty: Difficulty::Moderate,
                duration: "3 h 05 min".into(),
                cover_image:
                    "https://images.unsplash.com/photo-1505761671935-60b3a7427bad?auto=format&fit=crop&w=800&q=80"
                        .into(),
                highlights: tags(&["Fiume", "Bici", "Rientro in metro"]),
                path: points(&[
                    (45.513368, 9.238247),
                    (45.508052, 9.22261),
                    (45.504497, 9.211719),
                    (45.500106, 9.204602),
                    (45.494787, 9.200245),
                    (45.489327, 9.198554),
                    (45.483922, 9.199697),
                    (45.478701, 9.204087),
                    (45.474712, 9.209967),
                    (45.472399, 9.215763),
                    (45.471612, 9.221841),
                    (45.473884, 9.228498),
                    (45.478654, 9.233332),
                    (45.485317, 9.236374),
                    (45.492404, 9.238286),
                    (45.499228, 9.239045),
                    (45.506984, 9.23961),
                    (45.513368, 9.238247),
                ]),
            },
        ])
    }
}

fn tags(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

fn points(pairs: &[(f64, f64)]) -> Vec<LatLng> {
    pairs
        .iter()
        .map(|&(lat, lng)| LatLng::new(lat, lng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::Catalog;
    use crate::geo::LatLng;

    #[test]
    fn milan_catalog_shape() {
        let catalog = Catalog::milan();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.first().map(|t| t.id.as_str()), Some("duomo-panorama"));
        let ids: Vec<&str> = catalog.trails().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "duomo-panorama",
                "navigli-serale",
                "parco-sempione-loop",
                "martesana-greenway"
            ]
        );
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::milan();
        assert!(catalog.contains("navigli-serale"));
        assert_eq!(
            catalog.get("navigli-serale").map(|t| t.path.len()),
            Some(12)
        );
        assert!(catalog.get("monte-bianco").is_none());
        assert!(!catalog.contains("monte-bianco"));
    }

    #[test]
    fn every_path_has_at_least_two_points() {
        for trail in Catalog::milan().trails() {
            assert!(trail.path.len() >= 2, "{} too short", trail.id);
        }
    }

    #[test]
    fn union_bounds_cover_every_trail() {
        let catalog = Catalog::milan();
        let union = catalog.union_bounds();
        for trail in catalog.trails() {
            for point in &trail.path {
                assert!(union.contains(*point), "{} escapes union bounds", trail.id);
            }
        }
        // Martesana reaches furthest north-east; Navigli furthest south-west.
        assert_eq!(union.north_east(), LatLng::new(45.513368, 9.23961));
        assert_eq!(union.south_west(), LatLng::new(45.451386, 9.166602));
    }

    #[test]
    fn loops_and_linear_routes_coexist() {
        let catalog = Catalog::milan();
        assert!(catalog.get("parco-sempione-loop").is_some_and(|t| t.is_loop()));
        assert!(catalog.get("duomo-panorama").is_some_and(|t| t.is_loop()));
    }
}
