use crate::geometry::{DesignSize, Viewport};

/// Uniform fit factor for `design` inside `viewport`, shrunk by `margin_factor`
/// so the layout never touches the viewport edges.
///
/// Returns `None` for a degenerate viewport (zero, negative or non-finite
/// extent), where no meaningful scale exists.
pub fn compute_scale(design: DesignSize, viewport: Viewport, margin_factor: f64) -> Option<f64> {
    if viewport.is_degenerate() {
        return None;
    }
    let scale_x = viewport.width / design.width;
    let scale_y = viewport.height / design.height;
    Some(scale_x.min(scale_y) * margin_factor)
}
