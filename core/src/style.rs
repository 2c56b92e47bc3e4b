use crate::geometry::{DesignSize, Rect};

/// Ordered CSS declarations destined for one element's inline style.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleBlock {
    declarations: Vec<(&'static str, String)>,
}

impl StyleBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        if let Some(slot) = self
            .declarations
            .iter_mut()
            .find(|(existing, _)| *existing == property)
        {
            slot.1 = value;
        } else {
            self.declarations.push((property, value));
        }
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(existing, _)| *existing == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.declarations
            .iter()
            .map(|(property, value)| (*property, value.as_str()))
    }
}

pub fn px(value: f64) -> String {
    format!("{value}px")
}

pub fn scale_transform(scale: f64) -> String {
    format!("scale({scale})")
}

/// Fixed design box pinned to the viewport center. The negative margins undo
/// the 50% offsets, and the center transform origin keeps the scaled box
/// centered for any scale value.
pub fn primary_styles(design: DesignSize, scale: f64) -> StyleBlock {
    StyleBlock::new()
        .set("transform", scale_transform(scale))
        .set("transform-origin", "center center")
        .set("height", px(design.height))
        .set("width", px(design.width))
        .set("max-width", "none")
        .set("position", "absolute")
        .set("top", "50%")
        .set("left", "50%")
        .set("margin-left", px(-design.half_width()))
        .set("margin-top", px(-design.half_height()))
}

pub fn anchor_styles(top_px: f64) -> StyleBlock {
    StyleBlock::new()
        .set("position", "absolute")
        .set("top", px(top_px))
}

pub fn overlay_styles(scale: f64) -> StyleBlock {
    StyleBlock::new()
        .set("transform", scale_transform(scale))
        .set("transform-origin", "center center")
}

/// Places a clip just right of `trigger`, vertically centered on it.
pub fn clip_styles(scale: f64, trigger: Rect, gap_px: f64) -> StyleBlock {
    StyleBlock::new()
        .set("transform", format!("translateY(-50%) {}", scale_transform(scale)))
        .set("transform-origin", "left center")
        .set("left", px(trigger.right() + gap_px))
        .set("top", px(trigger.center_y()))
}

pub fn page_styles() -> StyleBlock {
    StyleBlock::new()
        .set("height", "100vh")
        .set("overflow", "hidden")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_use_shortest_form() {
        assert_eq!(px(250.0), "250px");
        assert_eq!(px(-800.0), "-800px");
        assert_eq!(scale_transform(1.0), "scale(1)");
        assert_eq!(scale_transform(0.95), "scale(0.95)");
    }

    #[test]
    fn set_replaces_existing_property() {
        let block = StyleBlock::new()
            .set("top", "1px")
            .set("left", "2px")
            .set("top", "3px");
        let declarations: Vec<_> = block.iter().collect();
        assert_eq!(declarations, vec![("top", "3px"), ("left", "2px")]);
    }

    #[test]
    fn clip_is_anchored_right_of_trigger() {
        let block = clip_styles(0.5, Rect::new(100.0, 200.0, 80.0, 40.0), 20.0);
        assert_eq!(block.get("left"), Some("200px"));
        assert_eq!(block.get("top"), Some("220px"));
        assert_eq!(block.get("transform"), Some("translateY(-50%) scale(0.5)"));
        assert_eq!(block.get("transform-origin"), Some("left center"));
    }
}
