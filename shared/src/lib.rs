pub mod catalog;
pub mod geo;
pub mod style;
pub mod trail;

pub use catalog::Catalog;
pub use geo::{GeoBounds, LatLng};
pub use style::{ACTIVE_STYLE, INACTIVE_STYLE, INITIAL_STYLE, OverlayStyle};
pub use trail::{Difficulty, Trail};
