use serde::{Deserialize, Serialize};

use crate::geo::{GeoBounds, LatLng};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
}

impl Difficulty {
    /// Display label as shown on trail cards.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Facile",
            Difficulty::Moderate => "Moderato",
            Difficulty::Hard => "Impegnativo",
        }
    }
}

/// A named geographic path with display metadata. Immutable after catalog load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    pub id: String,
    pub name: String,
    pub location: String,
    pub rating: f64,
    pub reviews: u32,
    pub distance_km: f64,
    pub difficulty: Difficulty,
    pub duration: String,
    pub cover_image: String,
    pub highlights: Vec<String>,
    /// Ordered path, at least 2 points. First and last may coincide (loop).
    pub path: Vec<LatLng>,
}

impl Trail {
    pub fn is_loop(&self) -> bool {
        match (self.path.first(), self.path.last()) {
            (Some(first), Some(last)) => first == last && self.path.len() > 2,
            _ => false,
        }
    }

    /// Envelope of this trail's path alone.
    pub fn bounds(&self) -> GeoBounds {
        GeoBounds::from_path(&self.path)
    }
}
