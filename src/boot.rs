use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use web_sys::Event;

use crate::app_config;
use crate::dom::DomHost;
use crate::stage::WebStage;

thread_local! {
    static ACTIVE_STAGE: RefCell<Option<Rc<WebStage>>> = RefCell::new(None);
}

pub(crate) fn run() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    EventListener::new(&window, "orientationchange", |_event: &Event| {
        if let Some(stage) = active_stage() {
            stage.schedule_orientation_recompute();
        }
    })
    .forget();

    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_event: &Event| {
            start();
        })
        .forget();
    } else {
        start();
    }
}

fn start() {
    if active_stage().is_some() {
        return;
    }
    let Some(host) = DomHost::from_window() else {
        console::warn!("stage synchronizer: no document");
        return;
    };
    let stage = WebStage::new(host, app_config::load_stage_config());
    stage.initialize();
    ACTIVE_STAGE.with(|slot| {
        *slot.borrow_mut() = Some(stage);
    });
}

pub(crate) fn active_stage() -> Option<Rc<WebStage>> {
    ACTIVE_STAGE.with(|slot| slot.borrow().clone())
}

/// Tears the active stage down for embedders that replace the page content.
#[allow(dead_code)]
pub(crate) fn shutdown() {
    let stage = ACTIVE_STAGE.with(|slot| slot.borrow_mut().take());
    if let Some(stage) = stage {
        stage.shutdown();
    }
}
