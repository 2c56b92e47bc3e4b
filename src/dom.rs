use wasm_bindgen::JsCast;
use web_sys::{Document, DomRect, Element, HtmlElement, Window};

use stagefit_core::{Rect, StageHost, StyleBlock, Viewport};

pub(crate) trait HasClientRect {
    fn client_rect(&self) -> DomRect;

    fn layout_rect(&self) -> Rect {
        let rect = self.client_rect();
        Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }
}

impl HasClientRect for Element {
    fn client_rect(&self) -> DomRect {
        self.get_bounding_client_rect()
    }
}

/// Live page access for the synchronizer. Every lookup goes through the
/// document at call time; nothing here caches elements.
pub(crate) struct DomHost {
    window: Window,
    document: Document,
}

impl DomHost {
    pub(crate) fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    fn select(&self, selector: &str) -> Option<HtmlElement> {
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
    }

    fn window_extent(value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> f64 {
        value.ok().and_then(|value| value.as_f64()).unwrap_or(0.0)
    }
}

impl StageHost for DomHost {
    type Element = HtmlElement;

    fn viewport(&self) -> Viewport {
        Viewport::new(
            Self::window_extent(self.window.inner_width()),
            Self::window_extent(self.window.inner_height()),
            self.window.device_pixel_ratio(),
        )
    }

    fn query(&self, selector: &str) -> Option<HtmlElement> {
        self.select(selector)
    }

    fn query_all(&self, selector: &str) -> Vec<HtmlElement> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|idx| list.item(idx))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn is_attached(&self, element: &HtmlElement) -> bool {
        element.is_connected()
    }

    fn is_rendered(&self, element: &HtmlElement) -> bool {
        element.offset_parent().is_some()
    }

    fn bounding_rect(&self, element: &HtmlElement) -> Rect {
        element.layout_rect()
    }

    fn active_trigger(&self, selector: &str) -> Option<HtmlElement> {
        self.select(&format!("{selector}:hover"))
            .or_else(|| self.select(&format!("{selector}:focus")))
    }

    fn apply(&self, element: &HtmlElement, styles: &StyleBlock) {
        let style = element.style();
        for (property, value) in styles.iter() {
            let _ = style.set_property(property, value);
        }
    }

    fn apply_page(&self, styles: &StyleBlock) {
        let Some(body) = self.document.body() else {
            return;
        };
        self.apply(&body, styles);
    }
}
