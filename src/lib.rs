#![cfg(target_arch = "wasm32")]
use crate::anim::{CancelToken, ReactionParams, ReactionStore};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

// some of the store and motion API is only reached from the host tests
#[allow(dead_code)]
mod anim;
mod constants;
mod dom;
mod events;
mod frame;
mod render;

/// Live view state, kept so `teardown` can reach it.
struct ViewHandle {
    store: Rc<RefCell<ReactionStore>>,
    cancel: CancelToken,
    running: Rc<Cell<bool>>,
}

impl ViewHandle {
    fn teardown(&self) {
        self.cancel.cancel();
        self.running.set(false);
        self.store.borrow_mut().clear();
    }
}

thread_local! {
    static VIEW: RefCell<Option<ViewHandle>> = const { RefCell::new(None) };
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("reactions-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Stops the frame loop and abandons in-flight bursts. Safe to call twice.
#[wasm_bindgen]
pub fn teardown() {
    VIEW.with(|view| {
        if let Some(handle) = view.borrow_mut().take() {
            handle.teardown();
            log::info!("view torn down");
        }
    });
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ID)?;
    let ctx = dom::context_2d(&canvas)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);
    log::info!(
        "[canvas] {}x{} px (dpr {:.2})",
        canvas.width(),
        canvas.height(),
        dom::device_pixel_ratio()
    );

    let store = Rc::new(RefCell::new(ReactionStore::from_entropy(
        ReactionParams::default(),
    )));
    let cancel = CancelToken::new();
    let running = Rc::new(Cell::new(true));

    log::info!(
        "[store] reactions live up to {:?}",
        store.borrow().params().max_lifetime()
    );

    events::wire_reaction_buttons(&document, &store, &cancel);
    events::wire_finale_button(&document, &store, &cancel);
    events::wire_pagehide(teardown);

    VIEW.with(|view| {
        *view.borrow_mut() = Some(ViewHandle {
            store: store.clone(),
            cancel,
            running: running.clone(),
        });
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        store,
        canvas,
        ctx,
        running,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
