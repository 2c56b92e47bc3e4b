use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use gloo::timers::callback::{Interval, Timeout};
use web_sys::Event;

use stagefit_core::{Adjustment, ScaleSynchronizer, StageConfig};

use crate::dom::DomHost;

/// Browser wiring around the scale synchronizer: the resize listener, the zoom
/// polling timer and the orientation settle delay.
pub(crate) struct WebStage {
    sync: RefCell<ScaleSynchronizer<DomHost>>,
    listeners: RefCell<Vec<EventListener>>,
    zoom_poll: RefCell<Option<Interval>>,
}

impl WebStage {
    pub(crate) fn new(host: DomHost, config: StageConfig) -> Rc<Self> {
        Rc::new(Self {
            sync: RefCell::new(ScaleSynchronizer::new(host, config)),
            listeners: RefCell::new(Vec::new()),
            zoom_poll: RefCell::new(None),
        })
    }

    pub(crate) fn initialize(self: &Rc<Self>) {
        self.recompute_and_apply();

        if let Some(window) = web_sys::window() {
            let stage = Rc::clone(self);
            let listener = EventListener::new(&window, "resize", move |_event: &Event| {
                stage.recompute_and_apply();
            });
            self.listeners.borrow_mut().push(listener);
        }

        self.start_zoom_polling();
        console::log!("stage synchronizer initialized");
    }

    pub(crate) fn recompute_and_apply(&self) -> Adjustment {
        let adjustment = self.sync.borrow_mut().recompute_and_apply();
        self.log_adjustment(&adjustment);
        adjustment
    }

    pub(crate) fn start_zoom_polling(self: &Rc<Self>) {
        let interval_ms = self.sync.borrow().config().zoom_poll_interval_ms;
        let stage = Rc::clone(self);
        let interval = Interval::new(interval_ms, move || {
            stage.poll_zoom();
        });
        *self.zoom_poll.borrow_mut() = Some(interval);
    }

    fn poll_zoom(&self) {
        let polled = self.sync.borrow_mut().poll_zoom();
        if let Some((change, adjustment)) = polled {
            console::log!("zoom changed", change.from, change.to);
            self.log_adjustment(&adjustment);
        }
    }

    /// Rotation reports the new viewport late, so measuring waits for the
    /// settle delay. Each event gets its own one-shot timer.
    pub(crate) fn schedule_orientation_recompute(self: &Rc<Self>) {
        let delay_ms = self.sync.borrow().config().orientation_settle_ms;
        let stage = Rc::clone(self);
        Timeout::new(delay_ms, move || {
            stage.recompute_and_apply();
        })
        .forget();
    }

    /// Drops the resize listener and stops zoom polling.
    pub(crate) fn shutdown(&self) {
        self.listeners.borrow_mut().clear();
        self.zoom_poll.borrow_mut().take();
    }

    fn log_adjustment(&self, adjustment: &Adjustment) {
        let viewport = adjustment.viewport;
        let Some(scale) = adjustment.scale else {
            console::warn!(
                "scaling skipped for empty viewport",
                viewport.width,
                viewport.height
            );
            return;
        };
        let overlays = adjustment.overlays;
        console::log!(format!(
            "viewport: {}x{}, applied scale: {scale}, overlays scaled: {}, clips placed: {}",
            viewport.width, viewport.height, overlays.scaled, overlays.clips_placed
        ));
        if !adjustment.primary_applied {
            let sync = self.sync.borrow();
            console::warn!(
                "primary container not found",
                sync.config().selectors.primary.clone()
            );
        }
    }
}
