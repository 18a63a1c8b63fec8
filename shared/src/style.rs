/// Stroke attributes for a trail overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub stroke_color: &'static str,
    pub stroke_opacity: f64,
    pub stroke_weight: u32,
}

/// Emphasis for the single active trail.
pub const ACTIVE_STYLE: OverlayStyle = OverlayStyle {
    stroke_color: "#ff6a00",
    stroke_opacity: 1.0,
    stroke_weight: 5,
};

/// Every trail that is not active.
pub const INACTIVE_STYLE: OverlayStyle = OverlayStyle {
    stroke_color: "#2d3848",
    stroke_opacity: 0.65,
    stroke_weight: 3,
};

/// Stroke as drawn at overlay construction; the first restyle pass
/// normalizes it to active or inactive.
pub const INITIAL_STYLE: OverlayStyle = OverlayStyle {
    stroke_color: "#2d3848",
    stroke_opacity: 0.95,
    stroke_weight: 3,
};

#[cfg(test)]
mod tests {
    use super::{ACTIVE_STYLE, INACTIVE_STYLE};

    #[test]
    fn style_table_literals() {
        assert_eq!(ACTIVE_STYLE.stroke_color, "#ff6a00");
        assert_eq!(ACTIVE_STYLE.stroke_opacity, 1.0);
        assert_eq!(ACTIVE_STYLE.stroke_weight, 5);
        assert_eq!(INACTIVE_STYLE.stroke_color, "#2d3848");
        assert_eq!(INACTIVE_STYLE.stroke_opacity, 0.65);
        assert_eq!(INACTIVE_STYLE.stroke_weight, 3);
    }
}
