use crate::config::StageConfig;
use crate::geometry::Viewport;
use crate::host::StageHost;
use crate::scale::compute_scale;
use crate::style::{anchor_styles, clip_styles, overlay_styles, page_styles, primary_styles};
use crate::zoom::{PixelRatioTracker, RatioChange};

/// What one adjustment pass measured and touched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Adjustment {
    pub viewport: Viewport,
    pub scale: Option<f64>,
    pub primary_applied: bool,
    pub anchor_applied: bool,
    pub overlays: OverlayReport,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlayReport {
    pub scaled: usize,
    pub clips_placed: usize,
    pub trigger_found: bool,
}

/// Keeps a fixed-size design layout centered and fully visible in the current
/// viewport, with its dependent overlays scaled in lockstep.
pub struct ScaleSynchronizer<H: StageHost> {
    host: H,
    config: StageConfig,
    primary: Option<H::Element>,
    anchor: Option<H::Element>,
    pixel_ratio: PixelRatioTracker,
}

impl<H: StageHost> ScaleSynchronizer<H> {
    pub fn new(host: H, config: StageConfig) -> Self {
        let primary = host.query(&config.selectors.primary);
        let anchor = host.query(&config.selectors.anchor);
        let pixel_ratio = PixelRatioTracker::new(host.viewport().device_pixel_ratio);
        Self {
            host,
            config,
            primary,
            anchor,
            pixel_ratio,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    pub fn last_pixel_ratio(&self) -> f64 {
        self.pixel_ratio.last()
    }

    /// Measures the viewport and restyles the stage. Repeating the call with an
    /// unchanged viewport writes the same values again.
    pub fn recompute_and_apply(&mut self) -> Adjustment {
        let viewport = self.host.viewport();
        let scale = compute_scale(self.config.design, viewport, self.config.margin_factor);

        let mut primary_applied = false;
        if let Some(scale) = scale {
            if let Some(primary) = self.resolve_primary() {
                self.host.apply(&primary, &primary_styles(self.config.design, scale));
                primary_applied = true;
            }
        }

        let mut anchor_applied = false;
        if let Some(anchor) = self.resolve_anchor() {
            self.host.apply(&anchor, &anchor_styles(self.config.anchor_top_px));
            anchor_applied = true;
        }

        let overlays = match scale {
            Some(scale) => self.apply_overlay_scale(scale),
            None => OverlayReport::default(),
        };

        self.host.apply_page(&page_styles());

        Adjustment {
            viewport,
            scale,
            primary_applied,
            anchor_applied,
            overlays,
        }
    }

    /// Scales every visible participating overlay by `scale`. While one is
    /// visible, clips are moved next to the hovered or focused trigger; with no
    /// active trigger they keep their previous position.
    pub fn apply_overlay_scale(&self, scale: f64) -> OverlayReport {
        let mut report = OverlayReport::default();
        for selector in &self.config.selectors.overlays {
            let Some(overlay) = self.host.query(selector) else {
                continue;
            };
            if !self.host.is_rendered(&overlay) {
                continue;
            }
            self.host.apply(&overlay, &overlay_styles(scale));
            report.scaled += 1;
        }
        if report.scaled == 0 {
            return report;
        }

        let Some(trigger) = self.host.active_trigger(&self.config.selectors.triggers) else {
            return report;
        };
        report.trigger_found = true;
        let rect = self.host.bounding_rect(&trigger);
        let styles = clip_styles(scale, rect, self.config.clip_gap_px);
        for clip in self.host.query_all(&self.config.selectors.clips) {
            self.host.apply(&clip, &styles);
            report.clips_placed += 1;
        }
        report
    }

    /// One zoom polling tick: recomputes only when the pixel ratio moved since
    /// the last tick.
    pub fn poll_zoom(&mut self) -> Option<(RatioChange, Adjustment)> {
        let ratio = self.host.viewport().device_pixel_ratio;
        let change = self.pixel_ratio.observe(ratio)?;
        Some((change, self.recompute_and_apply()))
    }

    fn resolve_primary(&mut self) -> Option<H::Element> {
        revalidate(&self.host, &mut self.primary, &self.config.selectors.primary)
    }

    fn resolve_anchor(&mut self) -> Option<H::Element> {
        revalidate(&self.host, &mut self.anchor, &self.config.selectors.anchor)
    }
}

fn revalidate<H: StageHost>(
    host: &H,
    slot: &mut Option<H::Element>,
    selector: &str,
) -> Option<H::Element> {
    if let Some(element) = slot.as_ref() {
        if host.is_attached(element) {
            return Some(element.clone());
        }
    }
    *slot = host.query(selector);
    slot.clone()
}
