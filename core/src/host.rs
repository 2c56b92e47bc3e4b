use crate::geometry::{Rect, Viewport};
use crate::style::StyleBlock;

/// The page environment the synchronizer measures and restyles.
///
/// Lookups return `Option`/empty collections rather than failing; a missing
/// element only means that part of a pass is skipped.
pub trait StageHost {
    type Element: Clone;

    fn viewport(&self) -> Viewport;
    fn query(&self, selector: &str) -> Option<Self::Element>;
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
    /// Whether a previously resolved element is still part of the document.
    fn is_attached(&self, element: &Self::Element) -> bool;
    /// Whether the element currently participates in layout.
    fn is_rendered(&self, element: &Self::Element) -> bool;
    fn bounding_rect(&self, element: &Self::Element) -> Rect;
    /// The control matching `selector` under the pointer, else the focused one.
    fn active_trigger(&self, selector: &str) -> Option<Self::Element>;
    fn apply(&self, element: &Self::Element, styles: &StyleBlock);
    fn apply_page(&self, styles: &StyleBlock);
}
